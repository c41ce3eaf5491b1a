use std::path::Path;

use anyhow::{Context, Result};

use super::model::{AdjustmentSet, Observation, ParseTally};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an adjustment table from a file.
///
/// The only contract with the file system is "return the full UTF-8 text of
/// the named resource, or fail"; a read failure aborts the whole analysis
/// with no partial result.
pub fn load_file(path: &Path) -> Result<AdjustmentSet> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading adjustment table {}", path.display()))?;
    Ok(parse_text(&text))
}

// ---------------------------------------------------------------------------
// Tolerant row parser
// ---------------------------------------------------------------------------

/// Parse pasted tab-separated table text into an [`AdjustmentSet`].
///
/// Expected layout: each data line holds one or two (category, amount)
/// column pairs side by side:
///
/// ```text
/// Rent\t1,200.50\tUtilities\t300
/// Misc\t85.00
/// ```
///
/// Parsing is best-effort by design — the input is human-pasted tabular
/// text, not a validated format:
/// * blank lines and aggregate rows (any line containing `avg`) are skipped;
/// * fields that are empty after trimming are dropped, keeping field order;
/// * a row with fewer than two surviving fields yields nothing;
/// * amounts that do not parse to a finite number drop just their pair.
///
/// Never fails; the [`ParseTally`] records everything that was discarded.
pub fn parse_text(text: &str) -> AdjustmentSet {
    let mut observations = Vec::new();
    let mut tally = ParseTally::default();

    for line in text.lines() {
        tally.lines_total += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.contains("avg") {
            tally.lines_skipped += 1;
            continue;
        }

        let fields: Vec<&str> = line
            .split('\t')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();

        // Left column pair, then right column pair if present.
        for pair in [fields.first().zip(fields.get(1)), fields.get(2).zip(fields.get(3))] {
            let Some((category, amount)) = pair else {
                continue;
            };
            match parse_amount(amount) {
                Some(value) => observations.push(Observation {
                    category: (*category).to_string(),
                    value,
                }),
                None => {
                    log::debug!("dropping unparseable amount {amount:?} (category {category:?})");
                    tally.pairs_dropped += 1;
                }
            }
        }
    }

    log::info!(
        "parsed {} observations from {} lines ({} lines skipped, {} amounts dropped)",
        observations.len(),
        tally.lines_total,
        tally.lines_skipped,
        tally.pairs_dropped
    );

    AdjustmentSet { observations, tally }
}

/// Parse a monetary amount: strip comma grouping, then parse as `f64`.
/// Non-finite results (`inf`, `NaN` spellings accepted by the float parser)
/// are rejected so every stored value is finite.
fn parse_amount(s: &str) -> Option<f64> {
    let cleaned = s.replace(',', "");
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_two_pair_row() {
        let set = parse_text("Rent\t1,200.50\tUtilities\t300");
        assert_eq!(
            set.observations,
            vec![
                Observation {
                    category: "Rent".to_string(),
                    value: 1200.50
                },
                Observation {
                    category: "Utilities".to_string(),
                    value: 300.0
                },
            ]
        );
        assert_eq!(set.tally.pairs_dropped, 0);
    }

    #[test]
    fn t_avg_line_filtered() {
        let set = parse_text("subtotal avg\t500");
        assert!(set.is_empty());
        assert_eq!(set.tally.lines_skipped, 1);
    }

    #[test]
    fn t_unparseable_amount_dropped() {
        let set = parse_text("Misc\tN/A");
        assert!(set.is_empty());
        assert_eq!(set.tally.pairs_dropped, 1);
    }

    #[test]
    fn t_blank_and_short_rows() {
        let set = parse_text("\n   \nHeaderOnly\nFees\t42\n");
        assert_eq!(set.len(), 1);
        assert_eq!(set.observations[0].category, "Fees");
        assert_eq!(set.observations[0].value, 42.0);
        assert_eq!(set.tally.lines_total, 4);
        assert_eq!(set.tally.lines_skipped, 2);
    }

    #[test]
    fn t_empty_fields_dropped_order_kept() {
        // Empty-after-trim fields collapse, so the remaining four fields
        // still form two pairs.
        let set = parse_text("Rent\t\t 1,000 \t\tFees\t250.25");
        assert_eq!(set.len(), 2);
        assert_eq!(set.observations[0].value, 1000.0);
        assert_eq!(set.observations[1].category, "Fees");
        assert_eq!(set.observations[1].value, 250.25);
    }

    #[test]
    fn t_non_finite_amount_rejected() {
        let set = parse_text("Weird\tinf\tAlso\tNaN");
        assert!(set.is_empty());
        assert_eq!(set.tally.pairs_dropped, 2);
    }

    #[test]
    fn t_right_pair_with_bad_left() {
        // A broken left amount must not take the right pair with it.
        let set = parse_text("Rent\t--\tUtilities\t300");
        assert_eq!(set.len(), 1);
        assert_eq!(set.observations[0].category, "Utilities");
        assert_eq!(set.tally.pairs_dropped, 1);
    }
}
