//! Core domain types for the library system.
//!
//! This module defines the records kept by the store:
//! - Books in the catalog
//! - Users in the directory
//! - Open loans in the ledger
//! - Outcomes reported by checkout and return

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Catalog and Directory Records
// ============================================================================

/// A registered book
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub code: String,
    pub available: bool,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            code: code.into(),
            available: true,
        }
    }
}

/// A registered library user
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub id: String,
    /// Codes of the books currently on loan, in checkout order
    pub borrowed: Vec<String>,
}

impl User {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            borrowed: Vec::new(),
        }
    }

    pub fn borrowed_count(&self) -> usize {
        self.borrowed.len()
    }

    /// Whether another checkout fits under `limit`
    pub fn can_borrow(&self, limit: usize) -> bool {
        self.borrowed.len() < limit
    }

    pub fn holds(&self, code: &str) -> bool {
        self.borrowed.iter().any(|c| c == code)
    }
}

// ============================================================================
// Loan Types
// ============================================================================

/// An open loan of one book to one user
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Loan {
    pub id: Uuid,
    pub user_id: String,
    pub book_code: String,
    pub start: NaiveDate,
    pub due: NaiveDate,
}

/// Returned by a successful checkout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoanReceipt {
    pub loan_id: Uuid,
    pub start: NaiveDate,
    pub due: NaiveDate,
}

/// Result of returning a book
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// Returned on or before the due date
    OnTime,
    /// Returned after the due date
    Late { days: i64, fine: u64 },
}

impl ReturnOutcome {
    /// Fine owed for this return (zero when on time)
    pub fn fine(&self) -> u64 {
        match self {
            ReturnOutcome::OnTime => 0,
            ReturnOutcome::Late { fine, .. } => *fine,
        }
    }
}

/// An open loan past its due date, with the fine owed if returned today
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverdueLoan<'a> {
    pub loan: &'a Loan,
    pub days_late: i64,
    pub fine: u64,
}
