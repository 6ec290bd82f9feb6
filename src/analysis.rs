//! Protein statistics: length classification and amino acid frequency.

use std::collections::HashMap;

use crate::anomaly::{AnomalyEvent, AnomalyKind, AnomalyReporter, Severity};
use crate::model::{FrequencyEntry, LengthClass, ProteinSequence};

/// Shortest protein considered functional.
pub const MIN_FUNCTIONAL_LEN: usize = 5;
/// Longest protein considered functional.
pub const MAX_FUNCTIONAL_LEN: usize = 100;

/// Derives statistics from a translated protein.
pub struct SequenceAnalyzer<'a> {
    reporter: &'a dyn AnomalyReporter,
}

impl<'a> SequenceAnalyzer<'a> {
    pub fn new(reporter: &'a dyn AnomalyReporter) -> Self {
        Self { reporter }
    }

    /// Classifies the protein length against the functional thresholds.
    ///
    /// A zero-length protein (immediate stop codon) is a distinct case and
    /// is never flagged; only `TooShort` and `TooLong` emit an anomaly.
    pub fn classify_length(&self, protein: &ProteinSequence) -> (usize, LengthClass) {
        let length = protein.len();

        let class = if length == 0 {
            LengthClass::Empty
        } else if length < MIN_FUNCTIONAL_LEN {
            self.reporter.report(AnomalyEvent::new(
                AnomalyKind::ProteinTooShort { length },
                Severity::Warning,
                format!("protein '{}'", protein),
            ));
            LengthClass::TooShort
        } else if length > MAX_FUNCTIONAL_LEN {
            self.reporter.report(AnomalyEvent::new(
                AnomalyKind::ProteinTooLong { length },
                Severity::Warning,
                format!("protein of {} amino acids", length),
            ));
            LengthClass::TooLong
        } else {
            LengthClass::Normal
        };

        (length, class)
    }

    /// Counts amino acid occurrences, sorted by descending count.
    ///
    /// Ties keep the order in which the symbols were first encountered
    /// (the sort is stable over the counting pass). Percentages are rounded
    /// to two decimals. An empty protein yields an empty list, since no
    /// percentage can be derived from a zero length.
    pub fn amino_acid_frequency(&self, protein: &ProteinSequence) -> Vec<FrequencyEntry> {
        if protein.is_empty() {
            return Vec::new();
        }

        let mut order: Vec<char> = Vec::new();
        let mut counts: HashMap<char, usize> = HashMap::new();
        for aa in protein.chars() {
            if !counts.contains_key(&aa) {
                order.push(aa);
            }
            *counts.entry(aa).or_insert(0) += 1;
        }

        let total = protein.len() as f64;
        let mut entries: Vec<FrequencyEntry> = order
            .into_iter()
            .map(|symbol| {
                let count = counts[&symbol];
                FrequencyEntry {
                    symbol,
                    count,
                    percentage: round2(100.0 * count as f64 / total),
                }
            })
            .collect();

        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
