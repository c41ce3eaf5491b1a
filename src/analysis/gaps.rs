use serde::Serialize;

// ---------------------------------------------------------------------------
// Natural-breaks gap analysis
// ---------------------------------------------------------------------------

/// Only the largest values matter for placing a review ceiling, so the scan
/// is limited to this many from the top of the sorted sequence.
pub const TOP_WINDOW: usize = 50;

/// A jump between consecutive values must exceed this share of the lower
/// value to count as a natural break.
pub const SIGNIFICANT_GAP_PCT: f64 = 15.0;

/// A significant jump between two consecutive sorted values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gap {
    pub lower: f64,
    pub upper: f64,
    pub gap: f64,
    /// Gap relative to the lower value, in percent.
    pub gap_percentage: f64,
}

/// Find natural breaks among the top [`TOP_WINDOW`] values, largest relative
/// gap first.  Pairs whose lower value is not positive are skipped (the
/// relative gap is undefined at zero).
pub fn significant_gaps(values: &[f64]) -> Vec<Gap> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let top = &sorted[sorted.len().saturating_sub(TOP_WINDOW)..];

    let mut gaps: Vec<Gap> = top
        .windows(2)
        .filter(|pair| pair[0] > 0.0)
        .filter_map(|pair| {
            let (lower, upper) = (pair[0], pair[1]);
            let gap = upper - lower;
            let gap_percentage = gap / lower * 100.0;
            (gap_percentage > SIGNIFICANT_GAP_PCT).then_some(Gap {
                lower,
                upper,
                gap,
                gap_percentage,
            })
        })
        .collect();

    gaps.sort_by(|a, b| b.gap_percentage.total_cmp(&a.gap_percentage));
    gaps
}
