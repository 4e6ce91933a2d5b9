//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `client`: Client balance state
//! - `transaction`: Transaction records, log entries and identifiers
//! - `error`: Fatal errors and rejection reasons

pub mod client;
pub mod error;
pub mod transaction;

pub use client::Client;
pub use error::{PaymentError, Rejection};
pub use transaction::{
    ClientId, LoggedTransaction, TransactionId, TransactionKind, TransactionRecord,
    TransactionType,
};
