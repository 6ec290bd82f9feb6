//! The standard genetic code, keyed by RNA codons.
//!
//! The table is total over the 64 combinations of {A, U, C, G}: every
//! well-formed codon maps to either an amino acid or one of the three stop
//! codons (UAA, UAG, UGA). A failed lookup therefore only ever means the
//! codon contained characters outside the RNA alphabet.

use std::collections::HashMap;

/// Outcome of a codon lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodonProduct {
    /// A single-letter amino acid symbol.
    AminoAcid(char),
    /// Translation stop signal; contributes no amino acid.
    Stop,
}

/// Amino acids of the standard code in NCBI order
/// (codons enumerated U, C, A, G on each of the three positions).
const STANDARD_NCBIEAA: &str =
    "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Codon to amino acid mapping for the standard genetic code.
///
/// Built once at startup and never mutated afterwards; safe to share
/// read-only between any number of callers.
#[derive(Debug, Clone)]
pub struct CodonTable {
    table: HashMap<String, CodonProduct>,
}

impl CodonTable {
    /// Builds the standard table from the NCBI 64-character string.
    pub fn standard() -> Self {
        let bases = ['U', 'C', 'A', 'G'];
        let mut table = HashMap::with_capacity(64);

        let mut idx = 0;
        for &b1 in &bases {
            for &b2 in &bases {
                for &b3 in &bases {
                    let codon = format!("{}{}{}", b1, b2, b3);
                    let aa = STANDARD_NCBIEAA.chars().nth(idx).unwrap_or('X');
                    let product = if aa == '*' {
                        CodonProduct::Stop
                    } else {
                        CodonProduct::AminoAcid(aa)
                    };
                    table.insert(codon, product);
                    idx += 1;
                }
            }
        }

        Self { table }
    }

    /// Looks up a three-letter RNA codon.
    ///
    /// Returns `None` for anything outside the 64 well-formed codons; with
    /// validated input upstream this cannot happen.
    pub fn lookup(&self, codon: &str) -> Option<CodonProduct> {
        self.table.get(codon).copied()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}
