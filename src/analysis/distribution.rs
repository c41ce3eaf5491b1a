use serde::Serialize;

use crate::money::format_usd_whole;

use super::{percentage, AnalysisError};

// ---------------------------------------------------------------------------
// Bucket configuration
// ---------------------------------------------------------------------------

/// One histogram range: `min` inclusive, `max` exclusive (`max` may be
/// `f64::INFINITY` for an open-ended top bucket).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Bucket {
    /// Bucket with a label derived from its bounds: `"$1,000-$2,500"`, or
    /// `"$50,000+"` for an open-ended top bucket.
    pub fn new(min: f64, max: f64) -> Self {
        let label = if max.is_infinite() {
            format!("{}+", format_usd_whole(min))
        } else {
            format!("{}-{}", format_usd_whole(min), format_usd_whole(max))
        };
        Bucket { label, min, max }
    }

    fn contains(&self, value: f64) -> bool {
        self.min <= value && value < self.max
    }
}

/// Default monetary ranges for the adjustment histogram.
pub fn default_buckets() -> Vec<Bucket> {
    [
        (0.0, 1_000.0),
        (1_000.0, 2_500.0),
        (2_500.0, 5_000.0),
        (5_000.0, 7_500.0),
        (7_500.0, 10_000.0),
        (10_000.0, 15_000.0),
        (15_000.0, 20_000.0),
        (20_000.0, 30_000.0),
        (30_000.0, 50_000.0),
        (50_000.0, f64::INFINITY),
    ]
    .into_iter()
    .map(|(min, max)| Bucket::new(min, max))
    .collect()
}

/// Check a bucket list for ascending, non-overlapping ranges.
///
/// Overlaps and inverted ranges are configuration errors.  Gaps only mean
/// the bucketed counts will not sum to the observation count, so they are
/// tolerated with a warning.
pub fn validate_buckets(buckets: &[Bucket]) -> Result<(), AnalysisError> {
    for bucket in buckets {
        if bucket.min >= bucket.max {
            return Err(AnalysisError::InvalidBuckets(format!(
                "bucket {:?} has an empty or inverted range",
                bucket.label
            )));
        }
    }
    for pair in buckets.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.min < prev.max {
            return Err(AnalysisError::InvalidBuckets(format!(
                "bucket {:?} overlaps {:?}",
                next.label, prev.label
            )));
        }
        if next.min > prev.max {
            log::warn!(
                "gap between buckets {:?} and {:?}: values in [{}, {}) fall in no bucket",
                prev.label,
                next.label,
                prev.max,
                next.min
            );
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// BucketResult – one histogram row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketResult {
    pub range: String,
    pub min: f64,
    pub max: f64,
    pub count: usize,
    /// Share of the whole dataset, not renormalized per bucket.
    pub percentage: f64,
}

/// Count observations per bucket: `min <= value < max`.  Buckets are
/// evaluated independently; percentages are against the total observation
/// count (0 when the dataset is empty).
pub fn build_distribution(values: &[f64], buckets: &[Bucket]) -> Vec<BucketResult> {
    buckets
        .iter()
        .map(|bucket| {
            let count = values.iter().filter(|v| bucket.contains(**v)).count();
            BucketResult {
                range: bucket.label.clone(),
                min: bucket.min,
                max: bucket.max,
                count,
                percentage: percentage(count, values.len()),
            }
        })
        .collect()
}
