//! Number formatting for tooltips and summaries.

use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::*;

/// Most fraction digits shown in a grouped number.
const MAX_FRACTION_DIGITS: u32 = 3;

fn with_sign(negative: bool, digits: String) -> String {
    if negative { format!("-{}", digits) } else { digits }
}

/// Whole numbers beyond the range of `Decimal` are grouped from their shortest
/// textual form. Values above `u128::MAX` and non-finite values are returned
/// ungrouped.
fn format_grouped_whole(value: f64) -> String {
    match format!("{}", value.abs().round()).parse::<u128>() {
        Ok(whole) => with_sign(value < 0.0, whole.to_formatted_string(&Locale::en)),
        Err(_) => format_plain(value),
    }
}

/// Formats a number with `,` thousands separators and at most three
/// fraction digits, dropping trailing zeros.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return format_plain(value);
    }
    let Some(decimal) = Decimal::from_f64(value) else {
        return format_grouped_whole(value);
    };

    let rounded = decimal
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    if rounded.is_zero() {
        return "0".to_string();
    }

    let magnitude = rounded.abs();
    let Some(whole) = magnitude.trunc().to_u128() else {
        return format_grouped_whole(value);
    };

    let mut grouped = whole.to_formatted_string(&Locale::en);
    if let Some((_, fraction)) = magnitude.to_string().split_once('.') {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    with_sign(rounded.is_sign_negative(), grouped)
}

/// Dollar amount with grouped digits, e.g. `$12,345`.
pub fn format_currency(value: f64) -> String {
    format!("${}", format_grouped(value))
}

/// Shortest textual form of a number, `42` rather than `42.0`.
pub fn format_plain(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped_inserts_separators() {
        assert_eq!(format_grouped(12345.0), "12,345");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(1234567.0), "1,234,567");
    }

    #[test]
    fn test_format_grouped_keeps_short_fractions() {
        assert_eq!(format_grouped(1234.5), "1,234.5");
        assert_eq!(format_grouped(-9876543.21), "-9,876,543.21");
        assert_eq!(format_grouped(0.12345), "0.123");
    }

    #[test]
    fn test_format_grouped_zero_and_non_finite() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(-0.0), "0");
        assert_eq!(format_grouped(0.0001), "0");
        assert_eq!(format_grouped(f64::INFINITY), "inf");
    }

    #[test]
    fn test_format_grouped_beyond_decimal_range() {
        assert_eq!(format_grouped(1e29), "100,000,000,000,000,000,000,000,000,000");
        assert_eq!(format_currency(-2e30), "$-2,000,000,000,000,000,000,000,000,000,000");
        assert_eq!(format_grouped(1e300), format_plain(1e300));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(12345.0), "$12,345");
        assert_eq!(format_currency(19.99), "$19.99");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(42.0), "42");
        assert_eq!(format_plain(42.5), "42.5");
        assert_eq!(format_plain(-0.0), "0");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("sales"), "Sales");
        assert_eq!(capitalize("pie"), "Pie");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("radarChart"), "RadarChart");
    }
}
