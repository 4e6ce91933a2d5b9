//! Replay pipeline
//!
//! Wires the pieces together: records from a reader are applied in order to
//! a fresh [`TransactionProcessor`], then the ledger is projected and written
//! as CSV.
//!
//! Any reader error aborts the run before anything is written, so output is
//! either complete or absent.

use crate::core::{project, TransactionProcessor};
use crate::io::{write_summaries_csv, CsvTransactionReader};
use crate::types::{PaymentError, TransactionRecord};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Counts from a finished replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayReport {
    /// Records read and fed to the processor
    pub records: usize,
    /// Client rows written
    pub clients: usize,
}

/// Replay a CSV file and write the account summary to `output`
pub fn replay_file(input: &Path, output: &mut dyn Write) -> Result<ReplayReport, PaymentError> {
    info!(input = %input.display(), "replaying transactions");

    let reader = CsvTransactionReader::from_path(input)?;
    replay_records(reader, output)
}

/// Replay records from any source and write the account summary to `output`
///
/// Stops at the first `Err` and returns it without writing anything.
pub fn replay_records<I>(records: I, output: &mut dyn Write) -> Result<ReplayReport, PaymentError>
where
    I: IntoIterator<Item = Result<TransactionRecord, PaymentError>>,
{
    let mut processor = TransactionProcessor::new();
    let mut count = 0;

    for record in records {
        processor.apply(record?);
        count += 1;
    }

    let summaries = project(processor.ledger());
    write_summaries_csv(&summaries, output)?;

    Ok(ReplayReport {
        records: count,
        clients: summaries.len(),
    })
}
