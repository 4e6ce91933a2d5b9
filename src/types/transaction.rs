//! Transaction-related types
//!
//! This module defines the input record fed to the processor, and the entries
//! kept in the transaction log for later dispute reference.

use rust_decimal::Decimal;

/// Client identifier
///
/// Any signed 64-bit integer, negative values included.
pub type ClientId = i64;

/// Transaction identifier
///
/// Any signed 64-bit integer, negative values included.
pub type TransactionId = i64;

/// Transaction types understood by the processor
///
/// Deposits and withdrawals move funds in or out of an account and are
/// logged. Disputes, resolves and chargebacks reference a logged transaction
/// by id. Any other type name read from the input becomes `Unknown` and is
/// ignored by the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    ///
    /// Requires the amount to be covered by available funds.
    Withdrawal,

    /// Freeze the amount of a logged transaction
    Dispute,

    /// Release the amount of a disputed transaction back to available
    Resolve,

    /// Remove the amount of a disputed transaction and lock the account
    Chargeback,

    /// Unrecognized type name
    Unknown,
}

impl TransactionType {
    /// Parse a type name, ignoring ASCII case
    ///
    /// Names outside the five supported types map to [`TransactionType::Unknown`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "deposit" => TransactionType::Deposit,
            "withdrawal" => TransactionType::Withdrawal,
            "dispute" => TransactionType::Dispute,
            "resolve" => TransactionType::Resolve,
            "chargeback" => TransactionType::Chargeback,
            _ => TransactionType::Unknown,
        }
    }

    /// Lowercase name used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Dispute => "dispute",
            TransactionType::Resolve => "resolve",
            TransactionType::Chargeback => "chargeback",
            TransactionType::Unknown => "unknown",
        }
    }

    /// Whether the record must carry an amount
    pub fn requires_amount(&self) -> bool {
        matches!(self, TransactionType::Deposit | TransactionType::Withdrawal)
    }
}

/// A parsed input record
///
/// The amount is optional because dispute, resolve and chargeback reference
/// an existing transaction instead of carrying an amount.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// The type of transaction
    pub tx_type: TransactionType,

    /// The client this record applies to
    pub client: ClientId,

    /// The transaction ID; for dispute-family records, the referenced transaction
    pub tx: TransactionId,

    /// Transaction amount, required for deposit and withdrawal
    pub amount: Option<Decimal>,
}

impl TransactionRecord {
    /// Create a deposit record
    pub fn deposit(client: ClientId, tx: TransactionId, amount: Decimal) -> Self {
        TransactionRecord {
            tx_type: TransactionType::Deposit,
            client,
            tx,
            amount: Some(amount),
        }
    }

    /// Create a withdrawal record
    pub fn withdrawal(client: ClientId, tx: TransactionId, amount: Decimal) -> Self {
        TransactionRecord {
            tx_type: TransactionType::Withdrawal,
            client,
            tx,
            amount: Some(amount),
        }
    }

    /// Create a dispute record referencing transaction `tx`
    pub fn dispute(client: ClientId, tx: TransactionId) -> Self {
        Self::reference(TransactionType::Dispute, client, tx)
    }

    /// Create a resolve record referencing transaction `tx`
    pub fn resolve(client: ClientId, tx: TransactionId) -> Self {
        Self::reference(TransactionType::Resolve, client, tx)
    }

    /// Create a chargeback record referencing transaction `tx`
    pub fn chargeback(client: ClientId, tx: TransactionId) -> Self {
        Self::reference(TransactionType::Chargeback, client, tx)
    }

    fn reference(tx_type: TransactionType, client: ClientId, tx: TransactionId) -> Self {
        TransactionRecord {
            tx_type,
            client,
            tx,
            amount: None,
        }
    }
}

/// Kind of a logged transaction
///
/// Only deposits and withdrawals are logged, since only those can be disputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

/// A successfully applied deposit or withdrawal kept for dispute reference
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedTransaction {
    /// The client that owns this transaction
    pub client: ClientId,

    /// Deposit or withdrawal
    pub kind: TransactionKind,

    /// The amount as originally applied (always positive)
    pub amount: Decimal,

    /// Set by a dispute, cleared by a resolve
    ///
    /// A chargeback leaves the flag set.
    pub disputed: bool,
}

impl LoggedTransaction {
    /// Create an undisputed entry
    pub fn new(client: ClientId, kind: TransactionKind, amount: Decimal) -> Self {
        LoggedTransaction {
            client,
            kind,
            amount,
            disputed: false,
        }
    }
}
