use serde::Serialize;

use crate::money::format_usd_whole;

use super::percentage;

// ---------------------------------------------------------------------------
// CoveragePoint – one row of the cumulative threshold curve
// ---------------------------------------------------------------------------

/// How much of the dataset a candidate review ceiling would cover.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoveragePoint {
    pub threshold: f64,
    /// Whole-dollar rendering of the threshold, e.g. `"$10,000"`.
    pub label: String,
    /// Observations with `value <= threshold` (inclusive).
    pub count: usize,
    pub percentage: f64,
}

/// Default candidate ceilings, ascending.
pub fn default_thresholds() -> Vec<f64> {
    vec![
        1_000.0, 2_500.0, 5_000.0, 7_500.0, 10_000.0, 15_000.0, 20_000.0, 25_000.0, 30_000.0,
        40_000.0, 50_000.0,
    ]
}

/// Compute coverage for each threshold, preserving threshold order.
/// Ascending thresholds are the caller's responsibility; nothing here
/// enforces the cumulative reading.
pub fn build_coverage(values: &[f64], thresholds: &[f64]) -> Vec<CoveragePoint> {
    thresholds
        .iter()
        .map(|&threshold| {
            let count = values.iter().filter(|v| **v <= threshold).count();
            CoveragePoint {
                threshold,
                label: format_usd_whole(threshold),
                count,
                percentage: percentage(count, values.len()),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Recommendations – fixed policy levels with their coverage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub level: String,
    pub threshold: f64,
    pub coverage: f64,
}

/// Default policy levels for the review-ceiling recommendation.
pub fn default_levels() -> Vec<(String, f64)> {
    vec![
        ("Conservative".to_string(), 5_000.0),
        ("Moderate".to_string(), 10_000.0),
        ("Liberal".to_string(), 20_000.0),
    ]
}

/// Coverage of each named policy level (inclusive, like [`build_coverage`]).
pub fn build_recommendations(values: &[f64], levels: &[(String, f64)]) -> Vec<Recommendation> {
    levels
        .iter()
        .map(|(level, threshold)| {
            let count = values.iter().filter(|v| **v <= *threshold).count();
            Recommendation {
                level: level.clone(),
                threshold: *threshold,
                coverage: percentage(count, values.len()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_threshold_inclusive() {
        let values = vec![500.0, 1000.0, 1500.0];
        let points = build_coverage(&values, &[1000.0]);
        assert_eq!(points[0].count, 2);
        assert!((points[0].percentage - 66.666_666).abs() < 1e-3);
        assert_eq!(points[0].label, "$1,000");
    }

    #[test]
    fn t_threshold_order_preserved() {
        // Order is taken as given, even when it is not ascending.
        let points = build_coverage(&[5.0], &[100.0, 10.0]);
        assert_eq!(points[0].threshold, 100.0);
        assert_eq!(points[1].threshold, 10.0);
    }

    #[test]
    fn t_default_curve_is_monotone() {
        let values = vec![800.0, 3_000.0, 9_000.0, 12_000.0, 45_000.0, 80_000.0];
        let points = build_coverage(&values, &default_thresholds());
        for pair in points.windows(2) {
            assert!(pair[0].count <= pair[1].count);
        }
        assert_eq!(points.last().map(|p| p.count), Some(5)); // 80,000 never covered
    }

    #[test]
    fn t_empty_dataset_guarded() {
        let points = build_coverage(&[], &default_thresholds());
        assert!(points.iter().all(|p| p.count == 0 && p.percentage == 0.0));
    }

    #[test]
    fn t_recommendation_coverage() {
        let values = vec![1_000.0, 4_000.0, 9_000.0, 25_000.0];
        let recs = build_recommendations(&values, &default_levels());
        assert_eq!(recs[0].level, "Conservative");
        assert_eq!(recs[0].coverage, 50.0);
        assert_eq!(recs[1].coverage, 75.0);
        assert_eq!(recs[2].coverage, 75.0);
    }
}
