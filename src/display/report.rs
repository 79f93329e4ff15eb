//! Report formatting utilities for terminal output

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Format a percentage with one decimal place
pub fn format_percentage(pct: Decimal) -> String {
    format!("{:.1}%", pct.round_dp(1))
}

/// Format a deviation in percentage points with an explicit sign
pub fn format_points(points: Decimal) -> String {
    let rounded = points.round_dp(1);
    if rounded > Decimal::ZERO {
        format!("+{:.1} pts", rounded)
    } else {
        format!("{:.1} pts", rounded)
    }
}

/// Create a simple bar chart representation
///
/// Values past `max_value` fill the bar completely.
pub fn format_bar(value: Decimal, max_value: Decimal, width: usize) -> String {
    if max_value <= Decimal::ZERO || value <= Decimal::ZERO {
        return "░".repeat(width);
    }

    let ratio = (value / max_value).min(Decimal::ONE);
    let filled = (ratio * Decimal::from(width))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(dec!(40)), "40.0%");
        assert_eq!(format_percentage(dec!(54.94)), "54.9%");
        assert_eq!(format_percentage(dec!(33.3333)), "33.3%");
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(dec!(5)), "+5.0 pts");
        assert_eq!(format_points(dec!(-10)), "-10.0 pts");
        assert_eq!(format_points(dec!(0)), "0.0 pts");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(dec!(50), dec!(100), 10), "█████░░░░░");
        assert_eq!(format_bar(dec!(150), dec!(100), 4), "████");
        assert_eq!(format_bar(dec!(0), dec!(100), 3), "░░░");
        assert_eq!(format_bar(dec!(10), dec!(0), 3), "░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Groceries", 20), "Groceries");
        assert_eq!(truncate("Emergency Fund Contributions", 10), "Emergen...");
        assert_eq!(truncate("Internet", 2), "..");
    }
}
