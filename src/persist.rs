//! CSV history of completed pipeline runs.
//!
//! One record is appended per successfully completed run; the summary view
//! reads the file back and derives simple tabular statistics. The pipeline
//! itself never touches this module, only the orchestrating caller does.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::PipelineRecord;

/// Errors that can occur while reading or writing the history file.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to access history file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Receives one record per successfully completed pipeline run.
pub trait PersistenceSink {
    fn append_result(&mut self, record: &PipelineRecord) -> PersistResult<()>;
}

/// Appends pipeline records to a CSV file.
///
/// The header row is written when the file is first created; later appends
/// add data rows only.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PersistenceSink for CsvSink {
    fn append_result(&mut self, record: &PipelineRecord) -> PersistResult<()> {
        let write_header = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }
}

/// Summary statistics over the recorded history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySummary {
    pub runs: usize,
    pub mean_protein_length: f64,
    pub empty: usize,
    pub too_short: usize,
    pub normal: usize,
    pub too_long: usize,
}

/// Reads the history CSV back and tallies the recorded runs.
pub fn history_summary<P: AsRef<Path>>(path: P) -> PersistResult<HistorySummary> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut summary = HistorySummary::default();
    let mut total_length = 0usize;
    for row in reader.deserialize() {
        let record: PipelineRecord = row?;
        summary.runs += 1;
        total_length += record.protein_length;
        match record.classification.as_str() {
            "empty" => summary.empty += 1,
            "too short" => summary.too_short += 1,
            "normal" => summary.normal += 1,
            "too long" => summary.too_long += 1,
            // Records written by other versions are counted but unclassified
            _ => {}
        }
    }

    if summary.runs > 0 {
        summary.mean_protein_length = total_length as f64 / summary.runs as f64;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(protein: &str, classification: &str) -> PipelineRecord {
        PipelineRecord {
            timestamp: "2026-08-23 12:00:00".to_string(),
            original: "5'-ATGTTTTAA-3'".to_string(),
            cleaned: "ATGTTTTAA".to_string(),
            rna: "AUGUUUUAA".to_string(),
            protein: protein.to_string(),
            protein_length: protein.len(),
            classification: classification.to_string(),
        }
    }

    #[test]
    fn test_append_and_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");

        let mut sink = CsvSink::new(&path);
        sink.append_result(&record("MF", "too short")).unwrap();
        sink.append_result(&record("MFFLWKRTYV", "normal")).unwrap();

        let summary = history_summary(&path).unwrap();
        assert_eq!(summary.runs, 2);
        assert_eq!(summary.too_short, 1);
        assert_eq!(summary.normal, 1);
        assert_eq!(summary.mean_protein_length, 6.0);
    }

    #[test]
    fn test_header_written_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");

        let mut sink = CsvSink::new(&path);
        sink.append_result(&record("MF", "too short")).unwrap();
        sink.append_result(&record("M", "too short")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header_lines = content
            .lines()
            .filter(|l| l.starts_with("timestamp"))
            .count();
        assert_eq!(header_lines, 1);
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_summary_counts_empty_class() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");

        let mut sink = CsvSink::new(&path);
        sink.append_result(&record("", "empty")).unwrap();

        let summary = history_summary(&path).unwrap();
        assert_eq!(summary.runs, 1);
        assert_eq!(summary.empty, 1);
        assert_eq!(summary.mean_protein_length, 0.0);
    }

    #[test]
    fn test_missing_history_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.csv");
        assert!(history_summary(&path).is_err());
    }
}
