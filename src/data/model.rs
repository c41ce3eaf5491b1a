use std::collections::BTreeMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Observation – one extracted data point
// ---------------------------------------------------------------------------

/// A single financial adjustment: a category label and a dollar amount.
///
/// Produced by the loader; the value is always finite (candidates that fail
/// to parse to a finite number are dropped before an `Observation` exists).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub category: String,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// ParseTally – how much input was silently discarded
// ---------------------------------------------------------------------------

/// Discard accounting for one parse run.  The parser is deliberately
/// tolerant (pasted tables are full of headers, separators and summary
/// rows), so the tally is the only visibility into what was skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseTally {
    /// Total lines in the input, including blank ones.
    pub lines_total: usize,
    /// Lines skipped whole: blank after trimming, or aggregate rows
    /// (containing `avg`).
    pub lines_skipped: usize,
    /// Candidate (category, amount) pairs whose amount failed to parse
    /// to a finite number.
    pub pairs_dropped: usize,
}

// ---------------------------------------------------------------------------
// AdjustmentSet – the complete parsed dataset
// ---------------------------------------------------------------------------

/// All observations extracted from one input text, in order of appearance
/// (row order; within a row, left pair before right pair).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustmentSet {
    pub observations: Vec<Observation>,
    pub tally: ParseTally,
}

impl AdjustmentSet {
    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether no observation survived parsing.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The bare value sequence, in observation order.
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Values grouped by category label, categories in sorted order.
    pub fn by_category(&self) -> BTreeMap<&str, Vec<f64>> {
        let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for obs in &self.observations {
            groups.entry(obs.category.as_str()).or_default().push(obs.value);
        }
        groups
    }
}
