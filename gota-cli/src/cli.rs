//! Argument parsing, logging setup, and exit-code mapping.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gota::{ConvertError, Registry, convert};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Convert a structured data file from one format to another.
///
/// Formats are inferred from file extensions. Supported: json, yaml, yml.
#[derive(Parser, Debug)]
#[command(name = "gota", version, about)]
pub struct Args {
    /// Input file; its extension selects the decode format
    pub input: PathBuf,

    /// Output file; its extension selects the encode format
    pub output: PathBuf,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse arguments, run the conversion, and echo the result to stdout.
///
/// # Errors
/// Returns any [`ConvertError`] from the pipeline, or an I/O error from the
/// stdout echo. Argument-count failures never reach here — clap reports
/// them and exits with code 2 itself.
pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let registry = Registry::with_defaults();
    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        "converting"
    );
    let encoded = convert(&registry, &args.input, &args.output)?;

    // Echo the converted document for interactive feedback; diagnostics go
    // to stderr, so stdout carries only the payload.
    std::io::stdout().write_all(&encoded)?;
    Ok(())
}

/// Map an error to the process exit code.
///
/// Usage-class failures (missing extension, unsupported format) exit with 2,
/// matching clap's own usage-error code; pipeline failures (I/O, decode,
/// encode) exit with 1.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ConvertError>() {
        Some(
            ConvertError::MissingExtension { .. } | ConvertError::UnsupportedFormat { .. },
        ) => 2,
        _ => 1,
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
