//! Ledger Replay CLI
//!
//! Replays the transactions of a CSV file and prints the final client balances.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv > accounts.csv
//! cargo run -- transactions.csv --output accounts.csv
//! RUST_LOG=debug cargo run -- transactions.csv
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed record, output not writable, etc.)
//! - 2: Invalid command-line arguments

use ledger_replay::cli::{self, CliArgs};
use ledger_replay::{logging, replay_file, PaymentError};
use std::{fs, io, process};
use tracing::info;

fn main() {
    let args = cli::parse_args();
    logging::init(&args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), PaymentError> {
    let report = match &args.output_file {
        None => {
            let stdout = io::stdout();
            let mut output = stdout.lock();
            replay_file(&args.input_file, &mut output)?
        }
        Some(path) => {
            // Buffer so a failed replay leaves no output file behind
            let mut buffer = Vec::new();
            let report = replay_file(&args.input_file, &mut buffer)?;
            fs::write(path, buffer)
                .map_err(|e| PaymentError::output(format!("{}: {}", path.display(), e)))?;
            report
        }
    };

    info!(
        records = report.records,
        clients = report.clients,
        "replay finished"
    );

    Ok(())
}
