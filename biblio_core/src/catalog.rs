//! Book catalog.
//!
//! Books are kept in registration order with a code index for lookup.

use crate::{Book, Error, Result};
use std::collections::HashMap;

/// The set of registered books
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
    by_code: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new book, available for loan
    ///
    /// Fields are trimmed. A blank code or title, or a code that is
    /// already registered, is rejected without changing the catalog.
    pub fn register(&mut self, title: &str, author: &str, code: &str) -> Result<&Book> {
        let (title, author, code) = (title.trim(), author.trim(), code.trim());

        if code.is_empty() {
            return Err(Error::InvalidInput("book code must not be empty".into()));
        }
        if title.is_empty() {
            return Err(Error::InvalidInput("book title must not be empty".into()));
        }
        if self.by_code.contains_key(code) {
            tracing::warn!("Rejected duplicate book code {}", code);
            return Err(Error::DuplicateBook(code.to_string()));
        }

        let idx = self.books.len();
        self.books.push(Book::new(title, author, code));
        self.by_code.insert(code.to_string(), idx);

        tracing::info!("Registered book {} ({})", code, title);
        Ok(&self.books[idx])
    }

    /// Look up a book; the code is trimmed the same way as at registration
    pub fn find_by_code(&self, code: &str) -> Option<&Book> {
        self.by_code.get(code.trim()).map(|&idx| &self.books[idx])
    }

    pub(crate) fn find_by_code_mut(&mut self, code: &str) -> Option<&mut Book> {
        match self.by_code.get(code.trim()) {
            Some(&idx) => self.books.get_mut(idx),
            None => None,
        }
    }

    /// Books currently available, in registration order
    pub fn list_available(&self) -> impl Iterator<Item = &Book> {
        self.books.iter().filter(|b| b.available)
    }

    /// All books, in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
