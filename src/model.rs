//! Data model for the sequence pipeline.
//!
//! This module contains the value types flowing through the pipeline:
//! - DNA, RNA and protein sequences as distinct newtypes
//! - Protein length classification
//! - Amino acid frequency entries
//! - The record persisted for each completed run
//!
//! Sequences are never mutated in place; every transformation produces a
//! new value, so a `NucleotideSequence` that passed validation stays valid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cleaned DNA sequence over the alphabet {A, T, C, G}, uppercase.
///
/// Created by `NucleotideProcessor::clean`; cleaning does not check the
/// alphabet, so a freshly cleaned sequence may still fail validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NucleotideSequence(String);

impl NucleotideSequence {
    /// Wraps an already-cleaned string.
    pub fn new(data: impl Into<String>) -> Self {
        Self(data.into())
    }

    /// Returns the sequence as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of bases (characters, not bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true if the sequence has no bases.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the bases.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl fmt::Display for NucleotideSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An RNA sequence over the alphabet {A, U, C, G}.
///
/// Produced by transcription (T → U). The length need not be a multiple of
/// three; translation drops trailing bases that cannot form a codon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RnaSequence(String);

impl RnaSequence {
    pub fn new(data: impl Into<String>) -> Self {
        Self(data.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of bases (characters, not bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl fmt::Display for RnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A protein as single-letter amino acid symbols.
///
/// Translation halts at the first stop codon, so a protein never contains
/// the stop symbol `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinSequence(String);

impl ProteinSequence {
    pub fn new(data: impl Into<String>) -> Self {
        Self(data.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of amino acids (characters, not bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a protein length against the functional thresholds.
///
/// `Empty` is deliberately distinct from `TooShort`: a zero-length protein
/// (immediate stop codon) is not flagged as an anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthClass {
    Empty,
    TooShort,
    Normal,
    TooLong,
}

impl fmt::Display for LengthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthClass::Empty => write!(f, "empty"),
            LengthClass::TooShort => write!(f, "too short"),
            LengthClass::Normal => write!(f, "normal"),
            LengthClass::TooLong => write!(f, "too long"),
        }
    }
}

/// One row of an amino acid frequency distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyEntry {
    /// Single-letter amino acid symbol
    pub symbol: char,
    /// Number of occurrences in the protein
    pub count: usize,
    /// Share of the protein length, rounded to two decimals
    pub percentage: f64,
}

/// The values persisted for one successfully completed pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineRecord {
    /// Local time the run completed
    pub timestamp: String,
    /// Raw input as typed by the user
    pub original: String,
    /// Input after marker stripping and uppercasing
    pub cleaned: String,
    /// Transcribed RNA
    pub rna: String,
    /// Translated protein
    pub protein: String,
    /// Protein length in amino acids
    pub protein_length: usize,
    /// Length classification at the time of the run
    pub classification: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_basics() {
        let seq = NucleotideSequence::new("ATCG");
        assert_eq!(seq.len(), 4);
        assert!(!seq.is_empty());
        assert_eq!(seq.as_str(), "ATCG");
        assert_eq!(seq.to_string(), "ATCG");
    }

    #[test]
    fn test_len_counts_characters_not_bytes() {
        // Multi-byte characters can reach the newtypes through raw user
        // input; lengths must still count symbols.
        assert_eq!(NucleotideSequence::new("ÑÑ").len(), 2);
        assert_eq!(RnaSequence::new("ÑÑ").len(), 2);
        assert_eq!(ProteinSequence::new("ÑÑ").len(), 2);
    }

    #[test]
    fn test_empty_sequences() {
        assert!(NucleotideSequence::new("").is_empty());
        assert!(RnaSequence::new("").is_empty());
        assert!(ProteinSequence::new("").is_empty());
    }

    #[test]
    fn test_length_class_display() {
        assert_eq!(LengthClass::Empty.to_string(), "empty");
        assert_eq!(LengthClass::TooShort.to_string(), "too short");
        assert_eq!(LengthClass::Normal.to_string(), "normal");
        assert_eq!(LengthClass::TooLong.to_string(), "too long");
    }
}
