/// Analysis layer: independent read-only passes over one parsed
/// [`AdjustmentSet`](crate::data::model::AdjustmentSet).
///
/// ```text
///   AdjustmentSet ──┬─▶ summary       (count/mean/median/std dev/percentiles)
///                   ├─▶ distribution  (fixed monetary buckets)
///                   ├─▶ coverage      (cumulative share below each ceiling)
///                   ├─▶ categories    (per-category aggregates)
///                   └─▶ gaps          (natural breaks in the top values)
/// ```
///
/// No pass mutates shared state; `analyze` may run them in any order.
pub mod categories;
pub mod coverage;
pub mod distribution;
pub mod gaps;
pub mod summary;

use serde::Serialize;
use thiserror::Error;

use crate::data::model::{AdjustmentSet, Observation, ParseTally};

use categories::{category_stats, CategoryStats};
use coverage::{build_coverage, build_recommendations, CoveragePoint, Recommendation};
use distribution::{build_distribution, validate_buckets, Bucket, BucketResult};
use gaps::{significant_gaps, Gap};
use summary::StatsSummary;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Caller-visible analysis failures.  Per-row and per-value problems never
/// reach here; the loader absorbs them into its tally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("no parseable observations in input")]
    EmptyDataset,
    #[error("invalid bucket configuration: {0}")]
    InvalidBuckets(String),
}

/// Shared percentage guard: defined as 0 for an empty dataset instead of
/// letting NaN propagate into displayed output.
pub(crate) fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tunable inputs of one analysis run.  The defaults reproduce the standard
/// review-policy study; tests substitute alternative boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Histogram ranges, ascending and non-overlapping.
    pub buckets: Vec<Bucket>,
    /// Candidate ceilings for the coverage curve, ascending.
    pub thresholds: Vec<f64>,
    /// Named policy levels reported with their coverage.
    pub levels: Vec<(String, f64)>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            buckets: distribution::default_buckets(),
            thresholds: coverage::default_thresholds(),
            levels: coverage::default_levels(),
        }
    }
}

// ---------------------------------------------------------------------------
// AnalysisReport – everything one run produces
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// The raw observation sequence, for callers wanting the data itself.
    pub observations: Vec<Observation>,
    pub tally: ParseTally,
    pub summary: StatsSummary,
    pub distribution: Vec<BucketResult>,
    pub coverage: Vec<CoveragePoint>,
    pub categories: Vec<CategoryStats>,
    pub gaps: Vec<Gap>,
    pub recommendations: Vec<Recommendation>,
}

/// Run the full pipeline over one parsed dataset.
///
/// Fails for an empty dataset or an invalid bucket configuration; otherwise
/// deterministic — identical input and config yield an identical report.
pub fn analyze(set: AdjustmentSet, config: &AnalysisConfig) -> Result<AnalysisReport, AnalysisError> {
    validate_buckets(&config.buckets)?;

    let values = set.values();
    let summary = StatsSummary::from_values(&values)?;

    Ok(AnalysisReport {
        summary,
        distribution: build_distribution(&values, &config.buckets),
        coverage: build_coverage(&values, &config.thresholds),
        categories: category_stats(&set),
        gaps: significant_gaps(&values),
        recommendations: build_recommendations(&values, &config.levels),
        tally: set.tally,
        observations: set.observations,
    })
}
