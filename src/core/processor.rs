//! Transaction processor
//!
//! The [`TransactionProcessor`] replays transaction records one at a time
//! against the [`ClientLedger`] and [`TransactionLog`] it owns.
//!
//! Every record first gets-or-creates its client, then is dispatched on its
//! type:
//!
//! - deposit: `amount > 0`, credits available and total, logs the transaction
//! - withdrawal: `0 < amount <= available`, debits available and total, logs the transaction
//! - dispute: owned logged transaction, moves its amount from available to held
//! - resolve: owned disputed transaction, moves its amount from held to available
//! - chargeback: owned disputed transaction, removes its amount from held and total, locks
//!
//! A record that fails its precondition, or whose balance update would
//! overflow, is dropped without touching any state.
//! Records are never rejected because the account is locked.

use crate::core::ledger::ClientLedger;
use crate::core::transaction_log::TransactionLog;
use crate::types::{
    Client, ClientId, LoggedTransaction, Rejection, TransactionKind, TransactionRecord,
    TransactionType,
};
use rust_decimal::Decimal;
use tracing::debug;

/// Replays transaction records against a client ledger
#[derive(Debug, Default)]
pub struct TransactionProcessor {
    ledger: ClientLedger,
    log: TransactionLog,
}

impl TransactionProcessor {
    /// Create a processor with an empty ledger and log
    pub fn new() -> Self {
        TransactionProcessor {
            ledger: ClientLedger::new(),
            log: TransactionLog::new(),
        }
    }

    /// Apply one record
    ///
    /// Never fails: a record that does not meet its precondition is ignored and
    /// the reason is logged at debug level.
    pub fn apply(&mut self, record: TransactionRecord) {
        let (tx_type, client, tx) = (record.tx_type.name(), record.client, record.tx);

        match self.try_apply(record) {
            Ok(()) => debug!(tx_type, client, tx, "transaction applied"),
            Err(reason) => debug!(tx_type, client, tx, %reason, "transaction ignored"),
        }
    }

    /// Apply records in order
    pub fn apply_all(&mut self, records: impl IntoIterator<Item = TransactionRecord>) {
        for record in records {
            self.apply(record);
        }
    }

    /// Apply one record, returning why it was ignored if it was
    ///
    /// On `Err` the ledger and log are unchanged, except that the record's
    /// client exists (every record creates its client before dispatch).
    pub fn try_apply(&mut self, record: TransactionRecord) -> Result<(), Rejection> {
        self.ledger.get_or_create(record.client);

        match record.tx_type {
            TransactionType::Deposit => self.process_deposit(&record),
            TransactionType::Withdrawal => self.process_withdrawal(&record),
            TransactionType::Dispute => self.process_dispute(&record),
            TransactionType::Resolve => self.process_resolve(&record),
            TransactionType::Chargeback => self.process_chargeback(&record),
            TransactionType::Unknown => Err(Rejection::UnknownType { tx: record.tx }),
        }
    }

    /// The client balances built so far
    pub fn ledger(&self) -> &ClientLedger {
        &self.ledger
    }

    /// The deposits and withdrawals applied so far
    pub fn log(&self) -> &TransactionLog {
        &self.log
    }

    /// All clients sorted by ID
    pub fn clients(&self) -> Vec<&Client> {
        self.ledger.clients()
    }

    /// Look up one client without creating it
    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.ledger.get(id)
    }

    fn process_deposit(&mut self, record: &TransactionRecord) -> Result<(), Rejection> {
        let amount = positive_amount("deposit", record)?;

        self.ledger.get_or_create(record.client).credit(amount)?;
        self.log.record(
            record.tx,
            LoggedTransaction::new(record.client, TransactionKind::Deposit, amount),
        );

        Ok(())
    }

    fn process_withdrawal(&mut self, record: &TransactionRecord) -> Result<(), Rejection> {
        let amount = positive_amount("withdrawal", record)?;

        let client = self.ledger.get_or_create(record.client);
        if amount > client.available {
            return Err(Rejection::insufficient_funds(
                record.client,
                client.available,
                amount,
            ));
        }

        client.debit(amount)?;
        self.log.record(
            record.tx,
            LoggedTransaction::new(record.client, TransactionKind::Withdrawal, amount),
        );

        Ok(())
    }

    /// Disputes do not check the disputed flag or the available balance:
    /// available may go negative when the funds were already withdrawn.
    fn process_dispute(&mut self, record: &TransactionRecord) -> Result<(), Rejection> {
        let logged = self.log.find_owned(record.tx, record.client, "dispute")?;

        self.ledger.get_or_create(record.client).hold(logged.amount)?;
        logged.disputed = true;

        Ok(())
    }

    fn process_resolve(&mut self, record: &TransactionRecord) -> Result<(), Rejection> {
        let logged = self.log.find_owned(record.tx, record.client, "resolve")?;
        if !logged.disputed {
            return Err(Rejection::not_disputed(record.tx, record.client, "resolve"));
        }

        self.ledger
            .get_or_create(record.client)
            .release(logged.amount)?;
        logged.disputed = false;

        Ok(())
    }

    /// The disputed flag stays set, so a repeated chargeback applies again.
    fn process_chargeback(&mut self, record: &TransactionRecord) -> Result<(), Rejection> {
        let logged = self.log.find_owned(record.tx, record.client, "chargeback")?;
        if !logged.disputed {
            return Err(Rejection::not_disputed(
                record.tx,
                record.client,
                "chargeback",
            ));
        }

        self.ledger
            .get_or_create(record.client)
            .charge_back(logged.amount)?;

        Ok(())
    }
}

fn positive_amount(
    operation: &'static str,
    record: &TransactionRecord,
) -> Result<Decimal, Rejection> {
    let amount = record.amount.ok_or(Rejection::MissingAmount {
        operation,
        tx: record.tx,
    })?;

    if amount <= Decimal::ZERO {
        return Err(Rejection::non_positive_amount(operation, record.tx, amount));
    }

    Ok(amount)
}
