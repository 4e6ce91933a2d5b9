//! Streaming CSV reader with iterator interface
//!
//! [`CsvTransactionReader`] reads transaction rows one at a time and yields
//! them as [`TransactionRecord`]s, delegating row conversion to the
//! `csv_format` module.
//!
//! ```no_run
//! use ledger_replay::io::CsvTransactionReader;
//! use std::path::Path;
//!
//! let reader = CsvTransactionReader::from_path(Path::new("transactions.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("{:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Opening failures (missing file, unreadable header) are returned by the constructors
//! - Each malformed row is yielded as an `Err` carrying its line number
//!
//! The reader itself does not stop on a bad row; callers decide whether the
//! error is fatal.

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{PaymentError, TransactionRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Iterator over the transaction rows of a CSV input
///
/// Memory usage is constant per row: one `StringRecord` buffer is reused.
#[derive(Debug)]
pub struct CsvTransactionReader<R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    row: StringRecord,
}

impl CsvTransactionReader<File> {
    /// Open a CSV file
    ///
    /// # Errors
    ///
    /// - `FileNotFound` if nothing exists at `path`
    /// - `Io` if the file cannot be opened for another reason
    /// - `Parse` if the header row cannot be read
    pub fn from_path(path: &Path) -> Result<Self, PaymentError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PaymentError::file_not_found(&path.display().to_string()),
            _ => PaymentError::from(e),
        })?;

        Self::from_reader(file)
    }
}

impl<R: Read> CsvTransactionReader<R> {
    /// Wrap any byte source holding CSV with a `type,client,tx,amount` header
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields and headers
    /// - Allow rows without the trailing amount field
    /// - Use an 8KB buffer
    pub fn from_reader(input: R) -> Result<Self, PaymentError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(input);

        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            row: StringRecord::new(),
        })
    }
}

impl<R: Read> Iterator for CsvTransactionReader<R> {
    type Item = Result<TransactionRecord, PaymentError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.row) {
            Ok(false) => None,
            Ok(true) => {
                let line = self.row.position().map_or(0, |pos| pos.line());
                let record = self
                    .row
                    .deserialize::<CsvRecord>(Some(&self.headers))
                    .map_err(|e| PaymentError::Parse {
                        line: Some(line),
                        message: e.to_string(),
                    })
                    .and_then(|csv_record| convert_csv_record(csv_record, line));
                Some(record)
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionType;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn read_all(content: &str) -> Vec<Result<TransactionRecord, PaymentError>> {
        CsvTransactionReader::from_reader(content.as_bytes())
            .unwrap()
            .collect()
    }

    #[test]
    fn test_from_path_opens_file() {
        let file = create_temp_csv("type,client,tx,amount\ndeposit,1,1,100.0\n");

        let records: Vec<_> = CsvTransactionReader::from_path(file.path())
            .unwrap()
            .collect();

        assert_eq!(records.len(), 1);
        assert!(records[0].is_ok());
    }

    #[test]
    fn test_from_path_fails_on_missing_file() {
        let result = CsvTransactionReader::from_path(Path::new("nonexistent.csv"));

        assert_eq!(
            result.unwrap_err(),
            PaymentError::file_not_found("nonexistent.csv")
        );
    }

    #[test]
    fn test_reads_valid_deposit() {
        let records = read_all("type,client,tx,amount\ndeposit,1,1,100.0\n");

        assert_eq!(
            records[0],
            Ok(TransactionRecord::deposit(1, 1, Decimal::new(1000, 1)))
        );
    }

    #[test]
    fn test_reads_all_transaction_types() {
        let records: Vec<_> = read_all(
            "type,client,tx,amount\n\
            deposit,1,1,100.0\n\
            withdrawal,1,2,50.0\n\
            dispute,1,1,\n\
            resolve,1,1,\n\
            chargeback,1,2,\n",
        )
        .into_iter()
        .map(Result::unwrap)
        .collect();

        let types: Vec<_> = records.iter().map(|record| record.tx_type).collect();
        assert_eq!(
            types,
            vec![
                TransactionType::Deposit,
                TransactionType::Withdrawal,
                TransactionType::Dispute,
                TransactionType::Resolve,
                TransactionType::Chargeback,
            ]
        );
    }

    #[test]
    fn test_reads_rows_without_trailing_amount_field() {
        let records = read_all("type,client,tx,amount\ndeposit,1,1,5\ndispute,1,1\n");

        assert_eq!(records[1], Ok(TransactionRecord::dispute(1, 1)));
    }

    #[test]
    fn test_handles_whitespace() {
        let records = read_all("type, client, tx, amount\n  deposit  ,  1  ,  1  ,  100.0  \n");

        assert_eq!(
            records[0],
            Ok(TransactionRecord::deposit(1, 1, Decimal::new(1000, 1)))
        );
    }

    #[test]
    fn test_unknown_type_is_not_an_error() {
        let records = read_all("type,client,tx,amount\ntransfer,2,2,50.0\n");

        let record = records[0].as_ref().unwrap();
        assert_eq!(record.tx_type, TransactionType::Unknown);
        assert_eq!(record.client, 2);
    }

    #[test]
    fn test_invalid_amount_reports_line() {
        let records =
            read_all("type,client,tx,amount\ndeposit,1,1,100.0\ndeposit,2,2,invalid\n");

        assert!(records[0].is_ok());
        assert_eq!(
            records[1],
            Err(PaymentError::invalid_amount(3, "invalid", 2))
        );
    }

    #[test]
    fn test_missing_amount_reports_line() {
        let records = read_all("type,client,tx,amount\nwithdrawal,4,9,\n");

        assert_eq!(
            records[0],
            Err(PaymentError::missing_amount(2, "withdrawal", 9, 4))
        );
    }

    #[test]
    fn test_reads_wide_and_negative_identifiers() {
        let records = read_all(
            "type,client,tx,amount\n\
            deposit,70000,1,5\n\
            deposit,-2,9223372036854775807,1\n",
        );

        assert_eq!(
            records[0],
            Ok(TransactionRecord::deposit(70000, 1, Decimal::new(5, 0)))
        );
        assert_eq!(
            records[1],
            Ok(TransactionRecord::deposit(-2, i64::MAX, Decimal::ONE))
        );
    }

    #[test]
    fn test_unparseable_identifier_is_parse_error() {
        let records = read_all("type,client,tx,amount\ndeposit,abc,1,1.0\n");

        assert!(matches!(
            records[0],
            Err(PaymentError::Parse { line: Some(2), .. })
        ));
    }

    #[test]
    fn test_empty_file_after_header() {
        assert!(read_all("type,client,tx,amount\n").is_empty());
    }
}
