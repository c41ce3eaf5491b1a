// ---------------------------------------------------------------------------
// Currency formatting
// ---------------------------------------------------------------------------

/// Format a dollar amount with comma grouping and two fraction digits:
/// `1234.5` → `"$1,234.50"`.
pub fn format_usd(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Format a dollar amount rounded to whole dollars: `10000.0` → `"$10,000"`.
/// Used for bucket and threshold labels.
pub fn format_usd_whole(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(value.abs().round() as u64))
}

/// Insert a comma every three digits from the right.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_format_usd() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(5.0), "$5.00");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(99.999), "$100.00");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(-42.25), "-$42.25");
    }

    #[test]
    fn t_format_usd_whole() {
        assert_eq!(format_usd_whole(0.0), "$0");
        assert_eq!(format_usd_whole(1000.0), "$1,000");
        assert_eq!(format_usd_whole(2500.0), "$2,500");
        assert_eq!(format_usd_whole(50_000.0), "$50,000");
        assert_eq!(format_usd_whole(999.6), "$1,000");
    }
}
