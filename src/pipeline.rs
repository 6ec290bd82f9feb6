//! End-to-end orchestration of the sequence pipeline.
//!
//! The stages never call each other; this module owns the ordering
//! (clean, validate, transcribe, translate, analyze) and is the only place
//! that builds records for the persistence sink. Data flows one way: a
//! stage sees its input and emits anomalies, nothing reaches backward.

use chrono::Local;

use crate::analysis::SequenceAnalyzer;
use crate::anomaly::AnomalyReporter;
use crate::codon::CodonTable;
use crate::model::{
    FrequencyEntry, LengthClass, NucleotideSequence, PipelineRecord, ProteinSequence, RnaSequence,
};
use crate::nucleotide::NucleotideProcessor;
use crate::translate::Translator;

/// Every intermediate and derived value of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Raw input as received
    pub original: String,
    /// After marker stripping and uppercasing
    pub cleaned: NucleotideSequence,
    pub rna: RnaSequence,
    pub protein: ProteinSequence,
    pub protein_length: usize,
    pub classification: LengthClass,
    /// Amino acid distribution, descending by count
    pub frequencies: Vec<FrequencyEntry>,
}

impl PipelineResult {
    /// Builds the record handed to the persistence sink, timestamped now.
    pub fn to_record(&self) -> PipelineRecord {
        PipelineRecord {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            original: self.original.clone(),
            cleaned: self.cleaned.as_str().to_string(),
            rna: self.rna.as_str().to_string(),
            protein: self.protein.as_str().to_string(),
            protein_length: self.protein_length,
            classification: self.classification.to_string(),
        }
    }
}

/// Wires the pipeline stages to a single anomaly reporter.
pub struct Pipeline<'a> {
    processor: NucleotideProcessor<'a>,
    translator: Translator<'a>,
    analyzer: SequenceAnalyzer<'a>,
}

impl<'a> Pipeline<'a> {
    /// Creates a pipeline over the standard codon table.
    pub fn new(reporter: &'a dyn AnomalyReporter) -> Self {
        Self {
            processor: NucleotideProcessor::new(reporter),
            translator: Translator::new(CodonTable::standard(), reporter),
            analyzer: SequenceAnalyzer::new(reporter),
        }
    }

    /// Runs the full pipeline on raw user input.
    ///
    /// Returns `None` when validation rejects the cleaned input; the
    /// downstream stages are not invoked in that case (the rejection itself
    /// has already been reported).
    pub fn run(&self, raw: &str) -> Option<PipelineResult> {
        let cleaned = self.processor.clean(raw);
        if !self.processor.validate(&cleaned) {
            return None;
        }

        let rna = self.processor.transcribe(&cleaned);
        let protein = self.translator.translate(&rna);
        let (protein_length, classification) = self.analyzer.classify_length(&protein);
        let frequencies = self.analyzer.amino_acid_frequency(&protein);

        Some(PipelineResult {
            original: raw.to_string(),
            cleaned,
            rna,
            protein,
            protein_length,
            classification,
            frequencies,
        })
    }

    /// Cleans and validates raw input, then returns its complementary
    /// strand. `None` when validation rejects the input.
    pub fn complement(&self, raw: &str) -> Option<NucleotideSequence> {
        let cleaned = self.processor.clean(raw);
        if !self.processor.validate(&cleaned) {
            return None;
        }
        Some(self.processor.complement(&cleaned))
    }

    /// Frequency distribution of an already-translated protein.
    pub fn protein_frequency(&self, protein: &ProteinSequence) -> Vec<FrequencyEntry> {
        self.analyzer.amino_acid_frequency(protein)
    }
}
