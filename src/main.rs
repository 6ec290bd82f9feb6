//! seqproc - DNA to protein sequence processor
//!
//! Converts a DNA sequence through transcription (RNA) to translation
//! (protein) with the standard genetic code, reports biological anomalies
//! to a log file, and records completed runs in a CSV history.
//!
//! ## Usage
//!
//! ```bash
//! seqproc                          # interactive menu
//! seqproc -s "5'-ATGTTTTAA-3'"     # one-shot pipeline run
//! seqproc -c ATCG                  # complementary strand
//! seqproc --history                # statistics over recorded runs
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use seqproc::anomaly::LogReporter;
use seqproc::config::Config;
use seqproc::logging;
use seqproc::menu::{print_history, print_result, run_menu};
use seqproc::persist::{CsvSink, PersistenceSink};
use seqproc::pipeline::Pipeline;

/// seqproc - DNA to RNA to protein processing from the terminal
///
/// When run without arguments, opens the interactive menu. With --sequence
/// or --complement, runs one-shot and prints a structured report.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Process a raw DNA sequence end to end (clean, validate, transcribe,
    /// translate, analyze) and record the run
    #[arg(short = 's', long = "sequence")]
    sequence: Option<String>,

    /// Print the complementary strand of a raw DNA sequence
    #[arg(short = 'c', long = "complement")]
    complement: Option<String>,

    /// Print summary statistics over the recorded history
    #[arg(long = "history")]
    history: bool,

    /// History CSV file (overrides SEQPROC_HISTORY)
    #[arg(long = "history-file")]
    history_file: Option<PathBuf>,

    /// Log file (overrides SEQPROC_LOG)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Runs one-shot mode: process and/or complement, then exit.
fn run_cli_mode(args: &Args, config: &Config) -> Result<()> {
    let reporter = LogReporter;
    let pipeline = Pipeline::new(&reporter);

    if let Some(raw) = &args.sequence {
        match pipeline.run(raw) {
            Some(result) => {
                print_result(&result);
                let mut sink = CsvSink::new(&config.history_path);
                sink.append_result(&result.to_record())?;
            }
            None => anyhow::bail!(
                "Sequence rejected: invalid bases (details in {})",
                config.log_path.display()
            ),
        }
    }

    if let Some(raw) = &args.complement {
        match pipeline.complement(raw) {
            Some(comp) => println!("Complementary strand: {}", comp),
            None => anyhow::bail!(
                "Sequence rejected: invalid bases (details in {})",
                config.log_path.display()
            ),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(path) = &args.history_file {
        config.history_path = path.clone();
    }
    if let Some(path) = &args.log_file {
        config.log_path = path.clone();
    }

    logging::init(&config.log_path)?;
    match &config.telemetry_dsn {
        Some(dsn) => tracing::info!(%dsn, "telemetry collector configured"),
        None => tracing::warn!("telemetry DSN not set; telemetry disabled"),
    }

    if args.history {
        print_history(&config.history_path);
    } else if args.sequence.is_some() || args.complement.is_some() {
        run_cli_mode(&args, &config)?;
    } else {
        run_menu(&config.history_path)?;
    }

    Ok(())
}
