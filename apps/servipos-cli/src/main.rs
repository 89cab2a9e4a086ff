//! # servipos
//!
//! Entry point: parse arguments, initialize logging, run, print.
//!
//! ## Exit Status
//! - `0` result printed on stdout
//! - `1` error printed on stderr
//! - `2` bad arguments (reported by clap)

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use servipos_cli::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match servipos_cli::run(cli) {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=servipos_core=trace` - Show every priced line
/// - Default: warnings, plus info from the CLI
///
/// Logs go to stderr so JSON on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,servipos_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
