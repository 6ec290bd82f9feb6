//! Nucleotide cleaning, validation, transcription and complementation.
//!
//! Cleaning and validation are deliberately separate steps: a rejected
//! input can then be reported with both its original and cleaned forms
//! visible. Validation reports problems through the anomaly channel and
//! returns a plain `bool`; invalid biological input is an expected case,
//! not an error.

use std::collections::BTreeSet;

use crate::anomaly::{AnomalyEvent, AnomalyKind, AnomalyReporter, Severity};
use crate::model::{NucleotideSequence, RnaSequence};

/// Decorative strand-end markers stripped during cleaning.
const FIVE_PRIME_MARKER: &str = "5'-";
const THREE_PRIME_MARKER: &str = "-3'";

/// Returns true for the four standard DNA bases.
fn is_dna_base(c: char) -> bool {
    matches!(c, 'A' | 'T' | 'C' | 'G')
}

/// Collects the distinct characters of `seq` outside the DNA alphabet.
fn offending_bases(seq: &NucleotideSequence) -> BTreeSet<char> {
    seq.chars().filter(|c| !is_dna_base(*c)).collect()
}

/// Cleans, validates and transforms DNA sequences.
pub struct NucleotideProcessor<'a> {
    reporter: &'a dyn AnomalyReporter,
}

impl<'a> NucleotideProcessor<'a> {
    /// Creates a processor emitting anomalies to the given reporter.
    pub fn new(reporter: &'a dyn AnomalyReporter) -> Self {
        Self { reporter }
    }

    /// Strips the literal `5'-` and `-3'` markers wherever they appear and
    /// uppercases the remainder.
    ///
    /// No alphabet check is performed here; call `validate` afterwards.
    pub fn clean(&self, raw: &str) -> NucleotideSequence {
        let stripped = raw
            .replace(FIVE_PRIME_MARKER, "")
            .replace(THREE_PRIME_MARKER, "");
        NucleotideSequence::new(stripped.to_uppercase())
    }

    /// Returns true iff every character is one of A, T, C, G.
    ///
    /// On failure, emits an `InvalidBase` anomaly listing the distinct
    /// offending characters and returns false.
    pub fn validate(&self, seq: &NucleotideSequence) -> bool {
        let offending = offending_bases(seq);
        if offending.is_empty() {
            return true;
        }

        self.reporter.report(AnomalyEvent::new(
            AnomalyKind::InvalidBase { offending },
            Severity::Warning,
            format!("validation failed for '{}'", seq),
        ));
        false
    }

    /// Transcribes DNA to RNA by replacing every T with U.
    ///
    /// Pure and total: the input is assumed validated, and any non-T
    /// character simply passes through unchanged.
    pub fn transcribe(&self, seq: &NucleotideSequence) -> RnaSequence {
        RnaSequence::new(seq.as_str().replace('T', "U"))
    }

    /// Computes the complementary strand by pairing A↔T and C↔G
    /// positionally.
    ///
    /// Complementation requires validated input. If the sequence contains
    /// characters outside the DNA alphabet, an error-severity event is
    /// emitted and an empty sequence is returned instead of a partial
    /// complement.
    pub fn complement(&self, seq: &NucleotideSequence) -> NucleotideSequence {
        let offending = offending_bases(seq);
        if !offending.is_empty() {
            self.reporter.report(AnomalyEvent::new(
                AnomalyKind::InvalidBase { offending },
                Severity::Error,
                format!("complement refused for unvalidated sequence '{}'", seq),
            ));
            return NucleotideSequence::new("");
        }

        let paired: String = seq
            .chars()
            .map(|c| match c {
                'A' => 'T',
                'T' => 'A',
                'C' => 'G',
                'G' => 'C',
                other => {
                    // Unreachable after the check above; pair to a sentinel
                    // rather than failing outright.
                    self.reporter.report(AnomalyEvent::new(
                        AnomalyKind::InvalidBase {
                            offending: BTreeSet::from([other]),
                        },
                        Severity::Warning,
                        format!("unknown base '{}' paired to '?'", other),
                    ));
                    '?'
                }
            })
            .collect();

        NucleotideSequence::new(paired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anomaly::{CollectingReporter, NullReporter};

    #[test]
    fn test_clean_strips_markers_and_uppercases() {
        let reporter = NullReporter;
        let processor = NucleotideProcessor::new(&reporter);

        assert_eq!(processor.clean("5'-ATGTTTTAA-3'").as_str(), "ATGTTTTAA");
        assert_eq!(processor.clean("atcg").as_str(), "ATCG");
        assert_eq!(processor.clean("5'-atg-3'").as_str(), "ATG");
        // Markers are stripped wherever they appear, not only at the ends
        assert_eq!(processor.clean("AT5'-CG").as_str(), "ATCG");
    }

    #[test]
    fn test_clean_then_validate_accepts_dna() {
        let reporter = CollectingReporter::new();
        let processor = NucleotideProcessor::new(&reporter);

        for raw in ["ATCG", "atcg", "5'-ATGTTTTAA-3'", "5'-gattaca-3'", ""] {
            let cleaned = processor.clean(raw);
            assert!(processor.validate(&cleaned), "rejected {:?}", raw);
            assert!(!processor.transcribe(&cleaned).as_str().contains('T'));
        }
        assert_eq!(reporter.count(), 0);
    }

    #[test]
    fn test_validate_reports_distinct_offenders() {
        let reporter = CollectingReporter::new();
        let processor = NucleotideProcessor::new(&reporter);

        let seq = NucleotideSequence::new("ATXG");
        assert!(!processor.validate(&seq));

        let events = reporter.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity, Severity::Warning);
        assert_eq!(
            events[0].kind,
            AnomalyKind::InvalidBase {
                offending: BTreeSet::from(['X']),
            }
        );
    }

    #[test]
    fn test_validate_deduplicates_offenders() {
        let reporter = CollectingReporter::new();
        let processor = NucleotideProcessor::new(&reporter);

        let seq = NucleotideSequence::new("AXXZZB");
        assert!(!processor.validate(&seq));

        let events = reporter.events();
        assert_eq!(
            events[0].kind,
            AnomalyKind::InvalidBase {
                offending: BTreeSet::from(['B', 'X', 'Z']),
            }
        );
    }

    #[test]
    fn test_transcribe_replaces_every_t() {
        let reporter = NullReporter;
        let processor = NucleotideProcessor::new(&reporter);

        let rna = processor.transcribe(&NucleotideSequence::new("ATGTTTTAA"));
        assert_eq!(rna.as_str(), "AUGUUUUAA");
        assert!(!rna.as_str().contains('T'));

        // No T at all: transcription is the identity
        let rna = processor.transcribe(&NucleotideSequence::new("ACGCGA"));
        assert_eq!(rna.as_str(), "ACGCGA");
    }

    #[test]
    fn test_complement_pairs_bases() {
        let reporter = CollectingReporter::new();
        let processor = NucleotideProcessor::new(&reporter);

        let comp = processor.complement(&NucleotideSequence::new("ATCG"));
        assert_eq!(comp.as_str(), "TAGC");
        assert_eq!(reporter.count(), 0);
    }

    #[test]
    fn test_double_complement_round_trip() {
        let reporter = NullReporter;
        let processor = NucleotideProcessor::new(&reporter);

        for raw in ["ATCG", "A", "GATTACA", "TTTT", ""] {
            let seq = NucleotideSequence::new(raw);
            let twice = processor.complement(&processor.complement(&seq));
            assert_eq!(twice, seq);
        }
    }

    #[test]
    fn test_complement_refuses_invalid_input() {
        let reporter = CollectingReporter::new();
        let processor = NucleotideProcessor::new(&reporter);

        let comp = processor.complement(&NucleotideSequence::new("ATXG"));
        assert!(comp.is_empty());

        let events = reporter.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity, Severity::Error);
        assert_eq!(
            events[0].kind,
            AnomalyKind::InvalidBase {
                offending: BTreeSet::from(['X']),
            }
        );
    }
}
