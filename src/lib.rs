//! # seqproc - DNA to protein sequence processor
//!
//! Converts nucleotide sequences through transcription (DNA → RNA) to
//! translation (RNA → protein) with the standard genetic code, validates
//! inputs, detects biologically anomalous results, and derives simple
//! statistics (complementary strand, amino acid frequency, length class).
//!
//! ## Architecture
//!
//! Data flows one way through pure stages; each stage sees only its input
//! and emits anomaly events through an injected reporter:
//! - `model`: sequence newtypes, classifications, persisted records
//! - `codon`: the standard genetic code table (total over 64 codons)
//! - `nucleotide`: cleaning, validation, transcription, complementation
//! - `translate`: codon-by-codon translation with stop handling
//! - `analysis`: protein length classification and amino acid frequency
//! - `anomaly`: structured anomaly events and reporters
//! - `pipeline`: orchestration of the stages
//! - `persist`: CSV history of completed runs
//! - `config`, `logging`, `menu`: application shell
//!
//! Every stage is reentrant and free of shared mutable state; the codon
//! table is the only shared structure and is read-only after construction.

pub mod analysis;
pub mod anomaly;
pub mod codon;
pub mod config;
pub mod logging;
pub mod menu;
pub mod model;
pub mod nucleotide;
pub mod persist;
pub mod pipeline;
pub mod translate;
