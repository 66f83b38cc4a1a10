//! Ledger of open loans.
//!
//! Loans are keyed by (user id, book code) and iterate in checkout order.

use crate::Loan;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

type LoanKey = (String, String);

/// The set of currently open loans
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    loans: BTreeMap<u64, Loan>,
    by_pair: HashMap<LoanKey, u64>,
    next_seq: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new loan. The caller has already checked availability.
    pub(crate) fn open(
        &mut self,
        user_id: &str,
        book_code: &str,
        start: NaiveDate,
        due: NaiveDate,
    ) -> &Loan {
        let seq = self.next_seq;
        self.next_seq += 1;

        let loan = Loan {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            book_code: book_code.to_string(),
            start,
            due,
        };
        self.by_pair
            .insert((user_id.to_string(), book_code.to_string()), seq);

        tracing::debug!("Opened loan {} for {}/{}", loan.id, user_id, book_code);
        self.loans.entry(seq).or_insert(loan)
    }

    /// Remove and return the open loan for a (user, book) pair
    pub(crate) fn close(&mut self, user_id: &str, book_code: &str) -> Option<Loan> {
        let seq = self
            .by_pair
            .remove(&(user_id.to_string(), book_code.to_string()))?;
        let loan = self.loans.remove(&seq);
        if let Some(ref loan) = loan {
            tracing::debug!("Closed loan {} for {}/{}", loan.id, user_id, book_code);
        }
        loan
    }

    pub fn find(&self, user_id: &str, book_code: &str) -> Option<&Loan> {
        self.by_pair
            .get(&(user_id.to_string(), book_code.to_string()))
            .and_then(|seq| self.loans.get(seq))
    }

    /// Open loans in checkout order
    pub fn iter(&self) -> impl Iterator<Item = &Loan> {
        self.loans.values()
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }
}
