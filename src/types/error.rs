//! Error types for the ledger replay engine
//!
//! There are two tiers of failure:
//!
//! - [`PaymentError`]: fatal problems at the I/O boundary (missing file,
//!   malformed row, unwritable output). These abort the whole run.
//! - [`Rejection`]: reasons the processor dropped a well-formed record
//!   (insufficient funds, unknown transaction, balance overflow, ...). These never abort the run
//!   and never mutate state; they only show up in debug logs.

use super::transaction::{ClientId, TransactionId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Fatal error for a replay run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading input
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A CSV row could not be read or deserialized
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The amount column did not hold a decimal number
    #[error("Invalid amount '{amount}' for transaction {tx} at line {line}")]
    InvalidAmount {
        line: u64,
        amount: String,
        tx: TransactionId,
    },

    /// A deposit or withdrawal had no amount
    #[error("{tx_type} transaction {tx} for client {client} requires an amount (line {line})")]
    MissingAmount {
        line: u64,
        tx_type: String,
        tx: TransactionId,
        client: ClientId,
    },

    /// The account summary could not be written
    #[error("Failed to write output: {message}")]
    Output {
        /// Description of the write failure
        message: String,
    },
}

impl From<std::io::Error> for PaymentError {
    fn from(error: std::io::Error) -> Self {
        PaymentError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for PaymentError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        PaymentError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

impl PaymentError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        PaymentError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(line: u64, amount: &str, tx: TransactionId) -> Self {
        PaymentError::InvalidAmount {
            line,
            amount: amount.to_string(),
            tx,
        }
    }

    /// Create a MissingAmount error
    pub fn missing_amount(line: u64, tx_type: &str, tx: TransactionId, client: ClientId) -> Self {
        PaymentError::MissingAmount {
            line,
            tx_type: tx_type.to_string(),
            tx,
            client,
        }
    }

    /// Create an Output error
    pub fn output(message: impl std::fmt::Display) -> Self {
        PaymentError::Output {
            message: message.to_string(),
        }
    }
}

/// Why the processor ignored a record
///
/// A rejected record leaves the ledger and the transaction log untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    /// Deposit or withdrawal amount was zero or negative
    #[error("{operation} amount {amount} for transaction {tx} is not positive")]
    NonPositiveAmount {
        operation: &'static str,
        tx: TransactionId,
        amount: Decimal,
    },

    /// Deposit or withdrawal arrived without an amount
    #[error("{operation} transaction {tx} has no amount")]
    MissingAmount {
        operation: &'static str,
        tx: TransactionId,
    },

    /// Withdrawal larger than the available funds
    #[error("Insufficient funds for client {client}: available {available}, requested {requested}")]
    InsufficientFunds {
        client: ClientId,
        available: Decimal,
        requested: Decimal,
    },

    /// Referenced transaction is not in the log
    #[error("Transaction {tx} not found for {operation}")]
    TransactionNotFound {
        tx: TransactionId,
        operation: &'static str,
    },

    /// Referenced transaction belongs to another client
    #[error("Client mismatch for {operation} on transaction {tx}: owned by client {owner}, referenced by client {client}")]
    ClientMismatch {
        tx: TransactionId,
        owner: ClientId,
        client: ClientId,
        operation: &'static str,
    },

    /// Resolve or chargeback on a transaction that is not disputed
    #[error("Transaction {tx} for client {client} is not under dispute ({operation})")]
    NotDisputed {
        tx: TransactionId,
        client: ClientId,
        operation: &'static str,
    },

    /// Applying the record would overflow a balance
    #[error("Arithmetic overflow updating balances of client {client}")]
    ArithmeticOverflow { client: ClientId },

    /// Record type is not one of the supported transaction types
    #[error("Unknown transaction type for transaction {tx}")]
    UnknownType { tx: TransactionId },
}

impl Rejection {
    /// Create a NonPositiveAmount rejection
    pub fn non_positive_amount(operation: &'static str, tx: TransactionId, amount: Decimal) -> Self {
        Rejection::NonPositiveAmount {
            operation,
            tx,
            amount,
        }
    }

    /// Create an InsufficientFunds rejection
    pub fn insufficient_funds(client: ClientId, available: Decimal, requested: Decimal) -> Self {
        Rejection::InsufficientFunds {
            client,
            available,
            requested,
        }
    }

    /// Create a TransactionNotFound rejection
    pub fn transaction_not_found(tx: TransactionId, operation: &'static str) -> Self {
        Rejection::TransactionNotFound { tx, operation }
    }

    /// Create a ClientMismatch rejection
    pub fn client_mismatch(
        tx: TransactionId,
        owner: ClientId,
        client: ClientId,
        operation: &'static str,
    ) -> Self {
        Rejection::ClientMismatch {
            tx,
            owner,
            client,
            operation,
        }
    }

    /// Create an ArithmeticOverflow rejection
    pub fn arithmetic_overflow(client: ClientId) -> Self {
        Rejection::ArithmeticOverflow { client }
    }

    /// Create a NotDisputed rejection
    pub fn not_disputed(tx: TransactionId, client: ClientId, operation: &'static str) -> Self {
        Rejection::NotDisputed {
            tx,
            client,
            operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        PaymentError::file_not_found("test.csv"),
        "File not found: test.csv"
    )]
    #[case::io_error(
        PaymentError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        PaymentError::Parse { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        PaymentError::Parse { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::invalid_amount(
        PaymentError::invalid_amount(3, "abc", 9),
        "Invalid amount 'abc' for transaction 9 at line 3"
    )]
    #[case::missing_amount(
        PaymentError::missing_amount(2, "deposit", 123, 1),
        "deposit transaction 123 for client 1 requires an amount (line 2)"
    )]
    #[case::output(
        PaymentError::output("disk full"),
        "Failed to write output: disk full"
    )]
    fn test_payment_error_display(#[case] error: PaymentError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::non_positive(
        Rejection::non_positive_amount("deposit", 4, Decimal::new(-100, 2)),
        "deposit amount -1.00 for transaction 4 is not positive"
    )]
    #[case::insufficient_funds(
        Rejection::insufficient_funds(1, Decimal::new(5000, 4), Decimal::new(10000, 4)),
        "Insufficient funds for client 1: available 0.5000, requested 1.0000"
    )]
    #[case::not_found(
        Rejection::transaction_not_found(999, "dispute"),
        "Transaction 999 not found for dispute"
    )]
    #[case::client_mismatch(
        Rejection::client_mismatch(123, 1, 2, "resolve"),
        "Client mismatch for resolve on transaction 123: owned by client 1, referenced by client 2"
    )]
    #[case::not_disputed(
        Rejection::not_disputed(5, 2, "chargeback"),
        "Transaction 5 for client 2 is not under dispute (chargeback)"
    )]
    #[case::arithmetic_overflow(
        Rejection::arithmetic_overflow(7),
        "Arithmetic overflow updating balances of client 7"
    )]
    fn test_rejection_display(#[case] rejection: Rejection, #[case] expected: &str) {
        assert_eq!(rejection.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: PaymentError = io_error.into();
        assert!(matches!(error, PaymentError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
