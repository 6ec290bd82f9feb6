//! RNA to protein translation.
//!
//! Codons are read in non-overlapping triplets from offset 0. The first
//! stop codon terminates the scan without contributing a symbol; unknown
//! codons are counted and skipped. Neither condition is an error: both are
//! reported through the anomaly channel and translation returns a
//! best-effort protein.

use crate::anomaly::{AnomalyEvent, AnomalyKind, AnomalyReporter, Severity};
use crate::codon::{CodonProduct, CodonTable};
use crate::model::{ProteinSequence, RnaSequence};

/// Translates RNA sequences using a fixed codon table.
pub struct Translator<'a> {
    table: CodonTable,
    reporter: &'a dyn AnomalyReporter,
}

impl<'a> Translator<'a> {
    /// Creates a translator over the given codon table.
    pub fn new(table: CodonTable, reporter: &'a dyn AnomalyReporter) -> Self {
        Self { table, reporter }
    }

    /// Translates an RNA sequence into a protein.
    ///
    /// A length that is not a multiple of three is reported once
    /// (informational) and the 1-2 trailing bases are dropped. Unknown
    /// codons are skipped and reported once, with their count, after the
    /// scan. Deterministic for a fixed input and table.
    pub fn translate(&self, rna: &RnaSequence) -> ProteinSequence {
        let bases: Vec<char> = rna.chars().collect();

        if bases.len() % 3 != 0 {
            self.reporter.report(AnomalyEvent::new(
                AnomalyKind::NonMultipleOfThree { length: bases.len() },
                Severity::Info,
                format!("{} trailing base(s) cannot form a codon", bases.len() % 3),
            ));
        }

        let mut protein = String::new();
        let mut unknown = 0usize;

        let mut pos = 0;
        while pos + 3 <= bases.len() {
            let codon: String = bases[pos..pos + 3].iter().collect();
            match self.table.lookup(&codon) {
                Some(CodonProduct::Stop) => break,
                Some(CodonProduct::AminoAcid(aa)) => protein.push(aa),
                None => unknown += 1,
            }
            pos += 3;
        }

        if unknown > 0 {
            self.reporter.report(AnomalyEvent::new(
                AnomalyKind::UnknownCodon {
                    count: unknown,
                    rna: rna.as_str().to_string(),
                    partial_protein: protein.clone(),
                },
                Severity::Warning,
                format!("translation of '{}'", rna),
            ));
        }

        ProteinSequence::new(protein)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anomaly::CollectingReporter;

    fn translate_with_events(rna: &str) -> (ProteinSequence, Vec<AnomalyEvent>) {
        let reporter = CollectingReporter::new();
        let translator = Translator::new(CodonTable::standard(), &reporter);
        let protein = translator.translate(&RnaSequence::new(rna));
        (protein, reporter.events())
    }

    #[test]
    fn test_translation_halts_at_first_stop() {
        let (protein, events) = translate_with_events("AUGUUUUAA");
        assert_eq!(protein.as_str(), "MF");
        assert!(events.is_empty());
    }

    #[test]
    fn test_codons_after_stop_are_not_examined() {
        // AUG, UAA (stop), then more codons that must not appear
        let (protein, events) = translate_with_events("AUGUAAUUUGGG");
        assert_eq!(protein.as_str(), "M");
        assert!(events.is_empty());
    }

    #[test]
    fn test_immediate_stop_yields_empty_protein() {
        let (protein, events) = translate_with_events("UAAUUU");
        assert!(protein.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn test_empty_rna() {
        let (protein, events) = translate_with_events("");
        assert!(protein.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn test_output_never_contains_stop_symbol() {
        for rna in ["AUGUUUUAA", "UAGUAG", "AUGUGAUAG", "GGGCCCAAA"] {
            let (protein, _) = translate_with_events(rna);
            assert!(!protein.as_str().contains('*'), "stop leaked for {}", rna);
        }
    }

    #[test]
    fn test_ragged_length_is_reported_once_and_tail_dropped() {
        // 8 bases: AUG UUU + dangling UA
        let (protein, events) = translate_with_events("AUGUUUUA");
        assert_eq!(protein.as_str(), "MF");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity, Severity::Info);
        assert_eq!(events[0].kind, AnomalyKind::NonMultipleOfThree { length: 8 });
    }

    #[test]
    fn test_single_dangling_base() {
        let (protein, events) = translate_with_events("A");
        assert!(protein.is_empty());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, AnomalyKind::NonMultipleOfThree { length: 1 });
    }

    #[test]
    fn test_unknown_codons_are_skipped_and_counted() {
        // AXG is not a well-formed codon; UUU is F
        let (protein, events) = translate_with_events("AXGUUU");
        assert_eq!(protein.as_str(), "F");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity, Severity::Warning);
        assert_eq!(
            events[0].kind,
            AnomalyKind::UnknownCodon {
                count: 1,
                rna: "AXGUUU".to_string(),
                partial_protein: "F".to_string(),
            }
        );
    }

    #[test]
    fn test_multiple_unknown_codons_reported_as_one_event() {
        let (protein, events) = translate_with_events("AXGAXGAUG");
        assert_eq!(protein.as_str(), "M");
        assert_eq!(events.len(), 1);
        match &events[0].kind {
            AnomalyKind::UnknownCodon { count, .. } => assert_eq!(*count, 2),
            other => panic!("unexpected anomaly: {:?}", other),
        }
    }

    #[test]
    fn test_translation_is_deterministic() {
        let (first, _) = translate_with_events("AUGUUUGGGCCC");
        let (second, _) = translate_with_events("AUGUUUGGGCCC");
        assert_eq!(first, second);
    }
}
