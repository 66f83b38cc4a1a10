#![forbid(unsafe_code)]

//! Core domain model and business logic for the Biblio library system.
//!
//! This crate provides:
//! - Domain types (books, users, loans)
//! - Catalog, directory and loan ledger
//! - The `Library` store with the checkout/return protocol
//! - Loan policy and fine calculation
//! - Configuration, logging and history export

pub mod types;
pub mod error;
pub mod catalog;
pub mod directory;
pub mod ledger;
pub mod policy;
pub mod library;
pub mod config;
pub mod logging;
pub mod export;

#[cfg(test)]
mod library_proptest;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::Catalog;
pub use directory::Directory;
pub use ledger::Ledger;
pub use policy::LoanPolicy;
pub use library::Library;
pub use config::Config;
pub use export::{export_history_to, write_history, ExportFormat};
