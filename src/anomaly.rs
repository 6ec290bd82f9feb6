//! Structured anomaly events and reporting.
//!
//! Unusual biological input (stray characters, ragged lengths, suspicious
//! protein sizes) is expected and frequent, so the pipeline never turns it
//! into an error. Each stage emits an `AnomalyEvent` through an injected
//! `AnomalyReporter` and carries on to a best-effort result. Reporters are
//! fire-and-forget: the core neither awaits nor inspects an outcome.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Mutex;

/// How serious an anomaly is; reporters map this to a log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Classified anomaly observations emitted by the pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnomalyKind {
    /// Characters outside {A, T, C, G} found in a DNA sequence.
    InvalidBase {
        /// Distinct offending characters (unordered set)
        offending: BTreeSet<char>,
    },
    /// RNA length not divisible by three; trailing bases are dropped.
    NonMultipleOfThree { length: usize },
    /// Codons absent from the table were skipped during translation.
    UnknownCodon {
        count: usize,
        rna: String,
        partial_protein: String,
    },
    /// Protein shorter than the functional minimum.
    ProteinTooShort { length: usize },
    /// Protein longer than the functional maximum.
    ProteinTooLong { length: usize },
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalyKind::InvalidBase { offending } => {
                let chars: Vec<String> = offending.iter().map(|c| c.to_string()).collect();
                write!(f, "invalid base characters: {{{}}}", chars.join(", "))
            }
            AnomalyKind::NonMultipleOfThree { length } => write!(
                f,
                "sequence length {} is not a multiple of three; trailing bases ignored",
                length
            ),
            AnomalyKind::UnknownCodon { count, .. } => {
                write!(f, "{} unknown codon(s) skipped during translation", count)
            }
            AnomalyKind::ProteinTooShort { length } => {
                write!(f, "protein length {} is below the functional minimum", length)
            }
            AnomalyKind::ProteinTooLong { length } => {
                write!(f, "protein length {} is above the functional maximum", length)
            }
        }
    }
}

/// A single reported anomaly: what happened, how serious, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnomalyEvent {
    pub kind: AnomalyKind,
    pub severity: Severity,
    /// Free-form description of the input that triggered the event
    pub context: String,
}

impl AnomalyEvent {
    pub fn new(kind: AnomalyKind, severity: Severity, context: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            context: context.into(),
        }
    }
}

/// Receives anomaly events from the pipeline stages.
///
/// Implementations decide persistence and alerting; the core only emits.
pub trait AnomalyReporter {
    fn report(&self, event: AnomalyEvent);
}

/// Discards every event. Useful when anomalies are irrelevant to a caller.
#[derive(Debug, Default)]
pub struct NullReporter;

impl AnomalyReporter for NullReporter {
    fn report(&self, _event: AnomalyEvent) {}
}

/// Forwards events to the `tracing` log at the severity-mapped level.
#[derive(Debug, Default)]
pub struct LogReporter;

impl AnomalyReporter for LogReporter {
    fn report(&self, event: AnomalyEvent) {
        match event.severity {
            Severity::Info => tracing::info!(context = %event.context, "{}", event.kind),
            Severity::Warning => tracing::warn!(context = %event.context, "{}", event.kind),
            Severity::Error => tracing::error!(context = %event.context, "{}", event.kind),
        }
    }
}

/// Collects events for later inspection; used by tests and batch callers.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    events: Mutex<Vec<AnomalyEvent>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the events reported so far.
    pub fn events(&self) -> Vec<AnomalyEvent> {
        self.events
            .lock()
            .expect("anomaly reporter mutex poisoned")
            .clone()
    }

    /// Number of events reported so far.
    pub fn count(&self) -> usize {
        self.events
            .lock()
            .expect("anomaly reporter mutex poisoned")
            .len()
    }
}

impl AnomalyReporter for CollectingReporter {
    fn report(&self, event: AnomalyEvent) {
        self.events
            .lock()
            .expect("anomaly reporter mutex poisoned")
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_reporter() {
        let reporter = CollectingReporter::new();
        assert_eq!(reporter.count(), 0);

        reporter.report(AnomalyEvent::new(
            AnomalyKind::NonMultipleOfThree { length: 7 },
            Severity::Info,
            "AUGUUUA",
        ));

        assert_eq!(reporter.count(), 1);
        let events = reporter.events();
        assert_eq!(events[0].severity, Severity::Info);
        assert_eq!(events[0].kind, AnomalyKind::NonMultipleOfThree { length: 7 });
    }

    #[test]
    fn test_invalid_base_display_lists_distinct_offenders() {
        let offending: BTreeSet<char> = ['X', 'Z'].into_iter().collect();
        let kind = AnomalyKind::InvalidBase { offending };
        assert_eq!(kind.to_string(), "invalid base characters: {X, Z}");
    }

    #[test]
    fn test_unknown_codon_display_carries_count() {
        let kind = AnomalyKind::UnknownCodon {
            count: 2,
            rna: "AXGAXG".to_string(),
            partial_protein: String::new(),
        };
        assert_eq!(kind.to_string(), "2 unknown codon(s) skipped during translation");
    }
}
