//! Core business logic module
//!
//! This module contains the transaction replay components:
//! - `ledger` - Client balance state with get-or-create access
//! - `transaction_log` - Applied deposits and withdrawals kept for dispute reference
//! - `processor` - The transaction state machine
//! - `projection` - Final ledger to output rows

pub mod ledger;
pub mod processor;
pub mod projection;
pub mod transaction_log;

pub use ledger::ClientLedger;
pub use processor::TransactionProcessor;
pub use projection::{project, ClientSummary};
pub use transaction_log::TransactionLog;
