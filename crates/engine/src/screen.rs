//! The screening pipeline.

use sifter_primitives::{CompanyRecord, FactorWeights, FilterCriteria, ScoredRecord};

use crate::{CohortSummary, DEFAULT_TOP_K, apply_criteria, complete_cohort, rank, score_cohort};

/// Configuration for one screening invocation.
///
/// Weights and filter thresholds are orthogonal controls: weights shape the
/// composite score, thresholds decide which raw records are visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenConfig {
    /// Composite score weights.
    pub weights: FactorWeights,
    /// Hard thresholds on raw fundamentals.
    pub criteria: FilterCriteria,
    /// Size of the top-K view on the outcome.
    pub top_k: usize,
}

impl Default for ScreenConfig {
    /// Equal weights, no thresholds, top 10.
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            criteria: FilterCriteria::unbounded(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Factor screener: scores, filters, and ranks a universe of records.
///
/// Stateless between invocations; each [`Screener::run`] is an independent
/// pure transform of its input.
#[derive(Debug, Clone, Default)]
pub struct Screener {
    config: ScreenConfig,
}

impl Screener {
    /// Create a screener with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ScreenConfig::default())
    }

    /// Create a screener with a custom configuration.
    #[must_use]
    pub const fn with_config(config: ScreenConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// Run the full pipeline over a universe of raw records.
    ///
    /// Cohort selection → normalization and scoring → threshold filtering →
    /// stable ranking → summary aggregation. Normalization statistics come
    /// from the complete-fundamentals cohort, before thresholds are applied,
    /// so filtering never changes a surviving record's score.
    #[must_use]
    pub fn run(&self, universe: &[CompanyRecord]) -> ScreenOutcome {
        let cohort = complete_cohort(universe);
        let scored = score_cohort(&cohort, &self.config.weights);
        let filtered = apply_criteria(scored, &self.config.criteria);
        let ranked = rank(filtered);
        let summary = CohortSummary::from_records(&ranked);

        ScreenOutcome {
            ranked,
            summary,
            universe_size: universe.len(),
            cohort_size: cohort.len(),
            top_k: self.config.top_k,
        }
    }
}

/// Result of one screening invocation.
#[derive(Debug, Clone)]
pub struct ScreenOutcome {
    /// Filtered records, best score first; ties keep input order.
    pub ranked: Vec<ScoredRecord>,
    /// Aggregates over the ranked records; `None` when nothing matched.
    pub summary: Option<CohortSummary>,
    /// Number of records handed in by the provider.
    pub universe_size: usize,
    /// Number of records with complete fundamentals.
    pub cohort_size: usize,
    /// Configured top-K view size.
    pub top_k: usize,
}

impl ScreenOutcome {
    /// The top-K ranked records.
    #[must_use]
    pub fn top(&self) -> &[ScoredRecord] {
        crate::top_k(&self.ranked, self.top_k)
    }

    /// Whether no records matched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
