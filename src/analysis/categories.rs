use serde::Serialize;

use crate::data::model::AdjustmentSet;

// ---------------------------------------------------------------------------
// Per-category aggregates
// ---------------------------------------------------------------------------

/// Categories with fewer observations than this are left out of the
/// breakdown; tiny groups say nothing useful about a review policy.
pub const MIN_CATEGORY_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub max: f64,
}

/// Aggregate observations per category label, sorted by category name,
/// keeping only categories with at least [`MIN_CATEGORY_COUNT`] entries.
pub fn category_stats(set: &AdjustmentSet) -> Vec<CategoryStats> {
    set.by_category()
        .into_iter()
        .filter(|(_, values)| values.len() >= MIN_CATEGORY_COUNT)
        .map(|(category, mut values)| {
            let count = values.len();
            let mean = values.iter().sum::<f64>() / count as f64;
            values.sort_by(f64::total_cmp);
            let mid = count / 2;
            let median = if count % 2 == 0 {
                (values[mid - 1] + values[mid]) / 2.0
            } else {
                values[mid]
            };
            CategoryStats {
                category: category.to_string(),
                count,
                mean,
                median,
                max: values[count - 1],
            }
        })
        .collect()
}
