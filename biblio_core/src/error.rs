//! Error types for the biblio_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for biblio_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No user registered under the given id
    #[error("user '{0}' not found")]
    UserNotFound(String),

    /// No book registered under the given code
    #[error("book '{0}' not found")]
    BookNotFound(String),

    /// Book is already on loan
    #[error("book '{0}' is not available")]
    Unavailable(String),

    /// User already holds the maximum number of books
    #[error("user '{user_id}' already has {limit} books on loan")]
    LimitReached { user_id: String, limit: usize },

    /// Book is not on loan to the named user
    #[error("book '{book_code}' is not on loan to user '{user_id}'")]
    ReturnMismatch { user_id: String, book_code: String },

    /// A book with this code is already registered
    #[error("a book with code '{0}' is already registered")]
    DuplicateBook(String),

    /// A user with this id is already registered
    #[error("a user with id '{0}' is already registered")]
    DuplicateUser(String),

    /// Rejected registration input (blank fields)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for failures of a library operation (lookup, availability,
    /// limits, registration) as opposed to IO or configuration problems.
    ///
    /// The front end reports domain errors and keeps running.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Error::UserNotFound(_)
                | Error::BookNotFound(_)
                | Error::Unavailable(_)
                | Error::LimitReached { .. }
                | Error::ReturnMismatch { .. }
                | Error::DuplicateBook(_)
                | Error::DuplicateUser(_)
                | Error::InvalidInput(_)
        )
    }
}
