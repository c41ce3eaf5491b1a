use crate::analysis::AnalysisReport;
use crate::money::{format_usd, format_usd_whole};

// ---------------------------------------------------------------------------
// Plain-text report
// ---------------------------------------------------------------------------

/// Number of gaps shown in the natural-breaks section.
const TOP_GAPS: usize = 5;

/// Render the full analysis as a plain-text report.  Pure formatting over
/// the computed results; nothing here recomputes anything.
pub fn render(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let s = &report.summary;

    out.push_str("=== FINANCIAL ADJUSTMENT ANALYSIS ===\n");
    out.push_str(&format!("Total adjustments: {}\n", s.count));
    out.push_str(&format!("Mean: {}\n", format_usd(s.mean)));
    out.push_str(&format!("Median: {}\n", format_usd(s.median)));
    out.push_str(&format!("Standard deviation: {}\n", format_usd(s.std_dev)));
    out.push_str(&format!("Minimum: {}\n", format_usd(s.min)));
    out.push_str(&format!("Maximum: {}\n", format_usd(s.max)));
    out.push_str(&format!("75th percentile: {}\n", format_usd(s.p75)));
    out.push_str(&format!("90th percentile: {}\n", format_usd(s.p90)));
    out.push_str(&format!("95th percentile: {}\n", format_usd(s.p95)));
    out.push_str(&format!("99th percentile: {}\n", format_usd(s.p99)));

    out.push_str("\n=== DISTRIBUTION ===\n");
    for bucket in &report.distribution {
        out.push_str(&format!(
            "{}: {} adjustments ({:.2}%)\n",
            bucket.range, bucket.count, bucket.percentage
        ));
    }

    out.push_str("\n=== CUMULATIVE THRESHOLD COVERAGE ===\n");
    for point in &report.coverage {
        out.push_str(&format!(
            "{}: {} at or below ({:.2}%)\n",
            point.label, point.count, point.percentage
        ));
    }

    if !report.categories.is_empty() {
        out.push_str("\n=== CATEGORY BREAKDOWN ===\n");
        for cat in &report.categories {
            out.push_str(&format!(
                "{}: n={}, mean {}, median {}, max {}\n",
                cat.category,
                cat.count,
                format_usd(cat.mean),
                format_usd(cat.median),
                format_usd(cat.max)
            ));
        }
    }

    if !report.gaps.is_empty() {
        out.push_str("\n=== SIGNIFICANT GAPS IN TOP VALUES ===\n");
        for gap in report.gaps.iter().take(TOP_GAPS) {
            out.push_str(&format!(
                "{} → {}: gap of {} ({:.2}%)\n",
                format_usd(gap.lower),
                format_usd(gap.upper),
                format_usd(gap.gap),
                gap.gap_percentage
            ));
        }
    }

    out.push_str("\n=== RECOMMENDED THRESHOLDS ===\n");
    for rec in &report.recommendations {
        out.push_str(&format!(
            "{} ceiling: {} (covers {:.2}% of adjustments)\n",
            rec.level,
            format_usd_whole(rec.threshold),
            rec.coverage
        ));
    }

    let tally = &report.tally;
    if tally.lines_skipped > 0 || tally.pairs_dropped > 0 {
        out.push_str(&format!(
            "\nDiscarded while parsing: {} of {} lines, {} amounts\n",
            tally.lines_skipped, tally.lines_total, tally.pairs_dropped
        ));
    }

    out
}
