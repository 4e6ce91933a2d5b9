//! CSV format handling for transaction records and account output
//!
//! This module centralizes all CSV format concerns:
//! - `CsvRecord` structure for deserialization
//! - Conversion from CSV records to domain types
//! - Summary row serialization
//!
//! Conversion is pure (no I/O) for easy testing.

use crate::core::ClientSummary;
use crate::types::{ClientId, PaymentError, TransactionId, TransactionRecord, TransactionType};
use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: type, client, tx, amount.
/// The amount is optional because dispute/resolve/chargeback rows don't carry one.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub tx_type: String,
    pub client: ClientId,
    pub tx: TransactionId,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to a TransactionRecord
///
/// - Unrecognized type names become [`TransactionType::Unknown`], which the
///   processor ignores
/// - Deposits and withdrawals must carry a decimal amount
/// - Any amount on a dispute, resolve or chargeback is ignored
///
/// `line` is the 1-based line of the row in the input, used in error messages.
///
/// # Errors
///
/// - `MissingAmount` if a deposit or withdrawal has an empty amount
/// - `InvalidAmount` if a deposit or withdrawal amount is not a decimal
pub fn convert_csv_record(
    csv_record: CsvRecord,
    line: u64,
) -> Result<TransactionRecord, PaymentError> {
    let tx_type = TransactionType::from_name(&csv_record.tx_type);

    let amount = if tx_type.requires_amount() {
        let raw = csv_record
            .amount
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| {
                PaymentError::missing_amount(
                    line,
                    tx_type.name(),
                    csv_record.tx,
                    csv_record.client,
                )
            })?;

        let amount = Decimal::from_str(raw)
            .map_err(|_| PaymentError::invalid_amount(line, raw, csv_record.tx))?;
        Some(amount)
    } else {
        None
    };

    Ok(TransactionRecord {
        tx_type,
        client: csv_record.client,
        tx: csv_record.tx,
        amount,
    })
}

/// Write summary rows as CSV
///
/// Writes the header `client,available,held,total,locked` followed by one row
/// per summary, in the order given.
///
/// # Errors
///
/// Returns `PaymentError::Output` if a row cannot be written or flushed.
pub fn write_summaries_csv(
    summaries: &[ClientSummary],
    output: &mut dyn Write,
) -> Result<(), PaymentError> {
    // Header is written explicitly so an empty ledger still produces it
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);

    writer
        .write_record(["client", "available", "held", "total", "locked"])
        .map_err(PaymentError::output)?;

    for summary in summaries {
        writer.serialize(summary).map_err(PaymentError::output)?;
    }

    writer.flush().map_err(PaymentError::output)?;

    Ok(())
}
