use serde::Serialize;

use super::AnalysisError;

// ---------------------------------------------------------------------------
// StatsSummary – descriptive statistics over the full value sequence
// ---------------------------------------------------------------------------

/// Descriptive statistics for one analysis run.  Recomputed whole each run;
/// there are no partial updates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub count: usize,
    pub mean: f64,
    /// Average of the two central sorted values for even counts.
    pub median: f64,
    /// Population standard deviation (divisor N, not N−1).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl StatsSummary {
    /// Compute the summary.  An empty sequence is a checked error, never a
    /// NaN-filled result.
    pub fn from_values(values: &[f64]) -> Result<Self, AnalysisError> {
        let count = values.len();
        if count == 0 {
            return Err(AnalysisError::EmptyDataset);
        }

        let mean = values.iter().sum::<f64>() / count as f64;
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Ok(StatsSummary {
            count,
            mean,
            median,
            std_dev: variance.sqrt(),
            min: sorted[0],
            max: sorted[count - 1],
            p75: percentile(&sorted, 0.75),
            p90: percentile(&sorted, 0.90),
            p95: percentile(&sorted, 0.95),
            p99: percentile(&sorted, 0.99),
        })
    }
}

/// Nearest-rank percentile: `sorted[ceil(N·p) − 1]`, index clamped to
/// `[0, N−1]`.  No interpolation — at exact boundaries the lower of the two
/// candidates is returned (N=100, p=0.90 → index 89, the 90th value in
/// 1-indexed terms).
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = (sorted.len() as f64 * p).ceil() as usize;
    sorted[rank.saturating_sub(1).min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    #[test]
    fn t_nearest_rank_exactness() -> Result<()> {
        let values: Vec<f64> = (1..=100).map(f64::from).collect();
        let stats = StatsSummary::from_values(&values)?;
        assert_eq!(stats.p75, 75.0);
        assert_eq!(stats.p90, 90.0);
        assert_eq!(stats.p95, 95.0);
        assert_eq!(stats.p99, 99.0);
        Ok(())
    }

    #[test]
    fn t_percentile_monotonic() -> Result<()> {
        let values = vec![3.0, 1.0, 41.0, 7.0, 2.0, 11.0, 5.0];
        let stats = StatsSummary::from_values(&values)?;
        assert!(stats.p75 <= stats.p90);
        assert!(stats.p90 <= stats.p95);
        assert!(stats.p95 <= stats.p99);
        assert!(stats.min <= stats.median && stats.median <= stats.max);
        Ok(())
    }

    #[test]
    fn t_median() -> Result<()> {
        let stats = StatsSummary::from_values(&[1.0, 2.0, 3.0, 4.0])?;
        assert_eq!(stats.median, 2.5);

        let stats = StatsSummary::from_values(&[3.0, 1.0, 2.0])?;
        assert_eq!(stats.median, 2.0);
        Ok(())
    }

    #[test]
    fn t_population_std_dev() -> Result<()> {
        // Classic reference example: mean 5, population std dev exactly 2.
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = StatsSummary::from_values(&values)?;
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 2.0);
        Ok(())
    }

    #[test]
    fn t_count_matches_input() -> Result<()> {
        let values = vec![10.0, 20.0, 30.0];
        let stats = StatsSummary::from_values(&values)?;
        assert_eq!(stats.count, values.len());
        Ok(())
    }

    #[test]
    fn t_single_value() -> Result<()> {
        // N=1: every percentile clamps to the only value.
        let stats = StatsSummary::from_values(&[42.0])?;
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.min, 42.0);
        assert_eq!(stats.max, 42.0);
        assert_eq!(stats.p99, 42.0);
        assert_eq!(stats.std_dev, 0.0);
        Ok(())
    }

    #[test]
    fn t_empty_is_checked_error() {
        assert_eq!(
            StatsSummary::from_values(&[]),
            Err(AnalysisError::EmptyDataset)
        );
    }
}
