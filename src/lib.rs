//! Ledger Replay Library
//! # Overview
//!
//! This library replays a sequential ledger of client transactions read from
//! CSV and reports the final balance of every client.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Client, TransactionRecord, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::processor`] - The transaction state machine
//!   - [`core::ledger`] - Client balances with get-or-create access
//!   - [`core::transaction_log`] - Applied deposits and withdrawals for dispute reference
//!   - [`core::projection`] - Final ledger to output rows
//! - [`io`] - CSV reading and writing
//! - [`replay`] - Reader, processor and writer wired into one run
//! - [`logging`] - tracing subscriber setup
//!
//! # Transaction Types
//!
//! - **Deposit**: Credit funds to an account
//! - **Withdrawal**: Debit funds from an account (requires sufficient available balance)
//! - **Dispute**: Hold the amount of a previous deposit or withdrawal
//! - **Resolve**: Release a disputed amount back to available
//! - **Chargeback**: Remove a disputed amount and lock the account
//!
//! Records that don't meet their preconditions are ignored; they never stop
//! the replay. Malformed input rows do stop it.
//!
//! # Account States
//!
//! Each account maintains:
//! - `available`: Funds available for withdrawal
//! - `held`: Funds frozen due to disputes
//! - `total`: Sum of available and held funds
//! - `locked`: Whether a chargeback has occurred

pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod replay;
pub mod types;

pub use crate::core::{ClientLedger, ClientSummary, TransactionLog, TransactionProcessor};
pub use crate::replay::{replay_file, replay_records, ReplayReport};
pub use crate::types::{
    Client, ClientId, LoggedTransaction, PaymentError, Rejection, TransactionId, TransactionKind,
    TransactionRecord, TransactionType,
};
