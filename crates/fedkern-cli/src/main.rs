use clap::Parser;
use fedkern_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Logs never go to stdout; it carries the report.
    if cli.verbose {
        logging::init_logging_stderr(true);
    } else if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr(false);
        tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
    }

    if let Err(err) = cli.run() {
        eprintln!("fedkern error: {:#}", err);
        std::process::exit(1);
    }
}
