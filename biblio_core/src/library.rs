//! The library store and the checkout/return protocol.
//!
//! `Library` owns the catalog, the directory and the ledger, and is the only
//! place where more than one of them changes at once. Every operation
//! validates first and mutates last, so a failed checkout or return leaves
//! the store untouched.

use crate::{
    Catalog, Directory, Error, Ledger, Loan, LoanPolicy, LoanReceipt, OverdueLoan, Result,
    ReturnOutcome,
};
use chrono::NaiveDate;

/// In-memory library: books, users and open loans
#[derive(Clone, Debug, Default)]
pub struct Library {
    catalog: Catalog,
    directory: Directory,
    ledger: Ledger,
    policy: LoanPolicy,
}

impl Library {
    pub fn new(policy: LoanPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> &LoanPolicy {
        &self.policy
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn register_book(&mut self, title: &str, author: &str, code: &str) -> Result<()> {
        self.catalog.register(title, author, code).map(|_| ())
    }

    pub fn register_user(&mut self, name: &str, id: &str) -> Result<()> {
        self.directory.register(name, id).map(|_| ())
    }

    /// Lend a book to a user starting `today`
    ///
    /// Checks, in order: both records exist, the book is available, the
    /// user is under the loan limit.
    pub fn checkout(&mut self, user_id: &str, book_code: &str, today: NaiveDate) -> Result<LoanReceipt> {
        let (user_id, book_code) = (user_id.trim(), book_code.trim());
        let user = self
            .directory
            .find_by_id(user_id)
            .ok_or_else(|| Error::UserNotFound(user_id.to_string()))?;
        let book = self
            .catalog
            .find_by_code(book_code)
            .ok_or_else(|| Error::BookNotFound(book_code.to_string()))?;

        if !book.available {
            tracing::warn!("Checkout of {} refused: already on loan", book_code);
            return Err(Error::Unavailable(book_code.to_string()));
        }
        if !user.can_borrow(self.policy.max_loans) {
            tracing::warn!("Checkout of {} refused: {} is at the limit", book_code, user_id);
            return Err(Error::LimitReached {
                user_id: user_id.to_string(),
                limit: self.policy.max_loans,
            });
        }

        let due = self.policy.due_date(today);
        let loan = self.ledger.open(user_id, book_code, today, due);
        let receipt = LoanReceipt {
            loan_id: loan.id,
            start: loan.start,
            due: loan.due,
        };

        if let Some(book) = self.catalog.find_by_code_mut(book_code) {
            book.available = false;
        }
        if let Some(user) = self.directory.find_by_id_mut(user_id) {
            user.borrowed.push(book_code.to_string());
        }

        tracing::info!("Checked out {} to {}, due {}", book_code, user_id, due);
        Ok(receipt)
    }

    /// Take a book back from a user on `today` and assess any late fine
    pub fn return_book(&mut self, user_id: &str, book_code: &str, today: NaiveDate) -> Result<ReturnOutcome> {
        let (user_id, book_code) = (user_id.trim(), book_code.trim());
        let user = self
            .directory
            .find_by_id(user_id)
            .ok_or_else(|| Error::UserNotFound(user_id.to_string()))?;
        if self.catalog.find_by_code(book_code).is_none() {
            return Err(Error::BookNotFound(book_code.to_string()));
        }
        if !user.holds(book_code) || self.ledger.find(user_id, book_code).is_none() {
            tracing::warn!("Return of {} refused: not on loan to {}", book_code, user_id);
            return Err(Error::ReturnMismatch {
                user_id: user_id.to_string(),
                book_code: book_code.to_string(),
            });
        }

        let loan = self
            .ledger
            .close(user_id, book_code)
            .ok_or_else(|| Error::ReturnMismatch {
                user_id: user_id.to_string(),
                book_code: book_code.to_string(),
            })?;

        if let Some(user) = self.directory.find_by_id_mut(user_id) {
            user.borrowed.retain(|c| c != book_code);
        }
        if let Some(book) = self.catalog.find_by_code_mut(book_code) {
            book.available = true;
        }

        let outcome = self.policy.assess(loan.due, today);
        match &outcome {
            ReturnOutcome::OnTime => {
                tracing::info!("{} returned {} on time", user_id, book_code)
            }
            ReturnOutcome::Late { days, fine } => {
                tracing::info!("{} returned {} {} days late, fine {}", user_id, book_code, days, fine)
            }
        }
        Ok(outcome)
    }

    /// Open loans in checkout order
    pub fn history(&self) -> impl Iterator<Item = &Loan> {
        self.ledger.iter()
    }

    /// Open loans held by one user, in checkout order
    pub fn loans_for<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Loan> + 'a {
        let user_id = user_id.trim();
        self.ledger.iter().filter(move |l| l.user_id == user_id)
    }

    /// Open loans already past their due date on `today`
    pub fn overdue(&self, today: NaiveDate) -> Vec<OverdueLoan<'_>> {
        self.ledger
            .iter()
            .filter_map(|loan| match self.policy.assess(loan.due, today) {
                ReturnOutcome::Late { days, fine } => Some(OverdueLoan {
                    loan,
                    days_late: days,
                    fine,
                }),
                ReturnOutcome::OnTime => None,
            })
            .collect()
    }
}
