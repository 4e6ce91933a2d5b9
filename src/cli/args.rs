use clap::Parser;
use std::path::PathBuf;

/// Replay a transaction ledger and report final client balances
#[derive(Parser, Debug)]
#[command(name = "ledger-replay", version)]
#[command(about = "Replay a transaction ledger and report final client balances", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing transaction records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Output CSV file path (stdout when omitted)
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Write the account summary to PATH instead of stdout"
    )]
    pub output_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log filter used when RUST_LOG is unset (e.g. 'debug', 'ledger_replay=info')"
    )]
    pub log_level: String,
}
