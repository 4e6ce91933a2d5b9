//! Transaction log for dispute reference
//!
//! Keeps every successfully applied deposit and withdrawal keyed by
//! transaction ID, so that later dispute, resolve and chargeback records can
//! find the amount and owner of the transaction they reference.
//!
//! # Duplicate Handling
//!
//! A later transaction reusing an ID replaces the earlier entry.

use crate::types::{ClientId, LoggedTransaction, Rejection, TransactionId};
use std::collections::HashMap;

/// Map of transaction ID to logged deposit or withdrawal
#[derive(Debug, Default)]
pub struct TransactionLog {
    transactions: HashMap<TransactionId, LoggedTransaction>,
}

impl TransactionLog {
    /// Create an empty log
    pub fn new() -> Self {
        TransactionLog {
            transactions: HashMap::new(),
        }
    }

    /// Record an applied transaction, replacing any entry with the same ID
    ///
    /// # Arguments
    ///
    /// * `tx_id` - The transaction identifier
    /// * `tx` - The applied deposit or withdrawal
    pub fn record(&mut self, tx_id: TransactionId, tx: LoggedTransaction) {
        self.transactions.insert(tx_id, tx);
    }

    /// Get a logged transaction
    ///
    /// # Arguments
    ///
    /// * `tx_id` - The transaction identifier to lookup
    ///
    /// # Returns
    ///
    /// * `Some(&LoggedTransaction)` - If the transaction was applied
    /// * `None` - If the transaction ID is not in the log
    pub fn get(&self, tx_id: TransactionId) -> Option<&LoggedTransaction> {
        self.transactions.get(&tx_id)
    }

    /// Find a transaction owned by `client`
    ///
    /// # Arguments
    ///
    /// * `tx_id` - The referenced transaction identifier
    /// * `client` - The client making the reference
    /// * `operation` - Name of the referencing operation, used in the rejection
    ///
    /// # Errors
    ///
    /// - `TransactionNotFound` if the ID is not in the log
    /// - `ClientMismatch` if the transaction belongs to another client
    pub fn find_owned(
        &mut self,
        tx_id: TransactionId,
        client: ClientId,
        operation: &'static str,
    ) -> Result<&mut LoggedTransaction, Rejection> {
        let tx = self
            .transactions
            .get_mut(&tx_id)
            .ok_or_else(|| Rejection::transaction_not_found(tx_id, operation))?;

        if tx.client != client {
            return Err(Rejection::client_mismatch(tx_id, tx.client, client, operation));
        }

        Ok(tx)
    }

    /// Number of logged transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns true if nothing has been logged
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
