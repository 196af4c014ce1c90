//! # flatfile-cli
//!
//! Command-line entry point for fixed-width flat-file parsing.
//!
//! Prints the decoded records of a data file as a JSON array on stdout.
//! Skipped lines, descriptor warnings and a summary go to stderr.

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use flatfile_pipeline::{AcceptancePolicy, FlatfileParser, ParserConfig};
use flatfile_validation::FilenameConfig;
use tracing_subscriber::EnvFilter;

/// Exit code for any fatal parse error
const EXIT_FATAL: u8 = 3;

#[derive(Parser)]
#[command(name = "flatfile")]
#[command(about = "Parse a fixed-width flat file using its column descriptor")]
#[command(version)]
struct Cli {
    /// Data file, named <format>_<YYYY-MM-DD>.txt
    data_file: String,

    /// Descriptor file, named <format>.csv
    descriptor_file: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Abort on the first data line that fails to decode
    #[arg(long)]
    fail_fast: bool,

    /// Date format embedded in the data file name
    #[arg(long, default_value = "%Y-%m-%d")]
    date_format: String,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let policy = if cli.fail_fast {
        AcceptancePolicy::FailFast
    } else {
        AcceptancePolicy::SkipInvalid
    };
    let config = ParserConfig::new()
        .filenames(FilenameConfig::new().date_format(cli.date_format.as_str()))
        .policy(policy);

    tracing::info!("Parsing {} with {}", cli.data_file, cli.descriptor_file);
    let report = FlatfileParser::new()
        .with_config(config)
        .parse(&cli.data_file, &cli.descriptor_file)?;

    for notice in report.notices() {
        eprintln!("WARNING: {notice}");
    }

    let output = if cli.pretty {
        serde_json::to_string_pretty(report.records())?
    } else {
        serde_json::to_string(report.records())?
    };
    println!("{output}");

    let stats = report.stats();
    eprintln!(
        "Parse summary: records={}, skipped={}, warnings={}",
        stats.records_decoded, stats.lines_skipped, stats.schema_warnings
    );
    Ok(())
}
