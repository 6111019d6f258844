use crate::evidence::model::EvidenceSource;
use crate::evidence::reliability::{hostname_from_url, ReliabilityTable};

pub const NEUTRAL_CONFIDENCE: f64 = 0.5;
pub const BASELINE_WEIGHT: f64 = 0.7;
pub const EXCERPT_BONUS: f64 = 0.03;
pub const COVERAGE_STEP: f64 = 0.02;
pub const COVERAGE_CAP: f64 = 0.08;

/// Aggregates evidence sources into a confidence in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceScorer<'a> {
    table: &'a ReliabilityTable,
}

impl Default for ConfidenceScorer<'static> {
    fn default() -> Self {
        Self::new(ReliabilityTable::builtin())
    }
}

impl<'a> ConfidenceScorer<'a> {
    pub fn new(table: &'a ReliabilityTable) -> Self {
        Self { table }
    }

    pub fn source_weight(&self, source: &EvidenceSource) -> f64 {
        let host = hostname_from_url(&source.url);
        let mut weight = match self.table.best_weight(&host) {
            Some(w) => w.max(BASELINE_WEIGHT),
            None => BASELINE_WEIGHT,
        };
        if source.has_excerpt() {
            weight = (weight + EXCERPT_BONUS).min(1.0);
        }
        weight
    }

    pub fn score(&self, sources: &[EvidenceSource]) -> f64 {
        if sources.is_empty() {
            // Insufficient evidence, not an error.
            return NEUTRAL_CONFIDENCE;
        }
        let count = sources.len();
        let total: f64 = sources.iter().map(|s| self.source_weight(s)).sum();
        let mean = total / count as f64;
        let coverage = (COVERAGE_STEP * (count - 1) as f64).min(COVERAGE_CAP);
        (mean + coverage).clamp(0.0, 1.0)
    }
}

/// Scores against the built-in reliability table.
pub fn score(sources: &[EvidenceSource]) -> f64 {
    ConfidenceScorer::default().score(sources)
}
