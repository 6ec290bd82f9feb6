//! Interactive menu loop and report formatting.
//!
//! All user-facing text lives here; the pipeline returns structured values
//! and this module decides how to print them. Anomalies raised while
//! processing go to the log file through the `LogReporter`, so the screen
//! only shows results and short rejection notices.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::anomaly::LogReporter;
use crate::model::{FrequencyEntry, ProteinSequence};
use crate::persist::{history_summary, CsvSink, HistorySummary, PersistenceSink};
use crate::pipeline::{Pipeline, PipelineResult};

const MENU: &str = "\
--- Sequence Processor ---
  1) Process a DNA sequence (transcribe, translate, analyze)
  2) Complementary strand
  3) Amino acid frequency of a protein
  4) History statistics
  5) Quit";

/// Runs the interactive menu until the user quits or stdin closes.
pub fn run_menu(history_path: &Path) -> Result<()> {
    let reporter = LogReporter;
    let pipeline = Pipeline::new(&reporter);
    let mut sink = CsvSink::new(history_path);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}", MENU);
        let Some(choice) = prompt(&mut lines, "Option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(raw) = prompt(&mut lines, "DNA sequence: ")? else {
                    break;
                };
                process_sequence(&pipeline, &mut sink, &raw)?;
            }
            "2" => {
                let Some(raw) = prompt(&mut lines, "DNA sequence: ")? else {
                    break;
                };
                match pipeline.complement(&raw) {
                    Some(comp) => println!("Complementary strand: {}", comp),
                    None => println!("Sequence rejected: invalid bases (see log)."),
                }
            }
            "3" => {
                let Some(raw) = prompt(&mut lines, "Protein sequence: ")? else {
                    break;
                };
                let protein = ProteinSequence::new(raw.trim().to_uppercase());
                print_frequencies(&pipeline.protein_frequency(&protein));
            }
            "4" => print_history(history_path),
            "5" | "q" => break,
            "" => continue,
            other => println!("Unrecognized option '{}'.", other),
        }
    }

    Ok(())
}

/// Runs the pipeline on one input, prints the report and records the run.
fn process_sequence(
    pipeline: &Pipeline<'_>,
    sink: &mut dyn PersistenceSink,
    raw: &str,
) -> Result<()> {
    match pipeline.run(raw) {
        Some(result) => {
            print_result(&result);
            sink.append_result(&result.to_record())?;
        }
        None => println!("Sequence rejected: invalid bases (see log)."),
    }
    Ok(())
}

/// Prints the structured report of a completed run.
pub fn print_result(result: &PipelineResult) {
    println!("Cleaned:  {}", result.cleaned);
    println!("RNA:      {}", result.rna);
    println!("Protein:  {}", result.protein);
    println!(
        "Length:   {} ({})",
        result.protein_length, result.classification
    );
    print_frequencies(&result.frequencies);
}

/// Prints a frequency distribution, or "no data" for an empty protein.
pub fn print_frequencies(entries: &[FrequencyEntry]) {
    if entries.is_empty() {
        println!("Frequency: no data");
        return;
    }
    println!("Frequency:");
    for entry in entries {
        println!(
            "  {}  {:>3}  {:>6.2}%",
            entry.symbol, entry.count, entry.percentage
        );
    }
}

/// Prints the history summary, or a notice when nothing is recorded yet.
pub fn print_history(history_path: &Path) {
    if !history_path.exists() {
        println!("No history recorded yet.");
        return;
    }
    match history_summary(history_path) {
        Ok(summary) => print_summary(&summary),
        Err(err) => println!("Could not read history: {}", err),
    }
}

fn print_summary(summary: &HistorySummary) {
    println!("Recorded runs:        {}", summary.runs);
    println!("Mean protein length:  {:.2}", summary.mean_protein_length);
    println!(
        "Classes:              empty {}, too short {}, normal {}, too long {}",
        summary.empty, summary.too_short, summary.normal, summary.too_long
    );
}

/// Prints `message`, reads one trimmed line. `None` when stdin is closed.
fn prompt<B: BufRead>(
    lines: &mut io::Lines<B>,
    message: &str,
) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
