//! Amount parsing and currency formatting.
//!
//! This module provides the two numeric rules of the application: sanitizing
//! free-typed amount input into an `f64`, and rendering an amount as Brazilian
//! Real currency text (`R$`, period thousands separators, comma decimal
//! separator).

use format_num::format_num;

/// Parses a raw user-typed amount string into a non-negative value.
///
/// Every character that is not an ASCII digit or a period is stripped. If more
/// than one period survives, only the first is treated as the decimal
/// separator and the remaining digit groups are joined into the fraction, so
/// `"12.34.56"` parses as `12.3456`. Input that still fails to parse (an empty
/// string, a lone period) yields `0.00`.
pub fn sanitize_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let normalized = match cleaned.split_once('.') {
        Some((int, frac)) => format!("{int}.{}", frac.replace('.', "")),
        None => cleaned,
    };
    normalized.parse::<f64>().unwrap_or(0.0)
}

/// Formats an amount as Brazilian Real currency, e.g. `R$ 3.799,50`.
///
/// The amount is truncated (not rounded) to two decimal places before
/// formatting: `format_brl(10.005)` is `"R$ 10,00"`. Truncation uses
/// floor-toward-negative-infinity, matching how the totals were rendered
/// historically, so a half-cent boundary never rounds up.
pub fn format_brl(amount: f64) -> String {
    let truncated = (amount * 100.0).floor() / 100.0;
    let (sign, magnitude) = if truncated < 0.0 {
        ("-", -truncated)
    } else {
        ("", truncated)
    };

    // format_num produces en-US separators ("3,799.50"); swap them for pt-BR.
    let grouped = format_num!(",.2f", magnitude);
    let localized: String = grouped
        .chars()
        .map(|c| match c {
            ',' => '.',
            '.' => ',',
            other => other,
        })
        .collect();
    format!("{sign}R$ {localized}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_plain_decimal() {
        assert_eq!(sanitize_amount("5000.00"), 5000.0);
        assert_eq!(sanitize_amount("1200.50"), 1200.5);
    }

    #[test]
    fn test_sanitize_strips_non_numeric() {
        assert_eq!(sanitize_amount("R$ 1.200abc"), 1.2);
        assert_eq!(sanitize_amount("12,50"), 1250.0);
        assert_eq!(sanitize_amount("  42  "), 42.0);
    }

    #[test]
    fn test_sanitize_collapses_extra_periods() {
        assert_eq!(sanitize_amount("12.34.56"), 12.3456);
        assert_eq!(sanitize_amount("1.2.3.4"), 1.234);
    }

    #[test]
    fn test_sanitize_unparseable_is_zero() {
        assert_eq!(sanitize_amount(""), 0.0);
        assert_eq!(sanitize_amount("."), 0.0);
        assert_eq!(sanitize_amount("abc"), 0.0);
        assert_eq!(sanitize_amount(".."), 0.0);
    }

    #[test]
    fn test_sanitize_edge_shapes() {
        // A trailing or leading period still parses the way parseFloat would.
        assert_eq!(sanitize_amount("12."), 12.0);
        assert_eq!(sanitize_amount(".5"), 0.5);
    }

    #[test]
    fn test_format_truncates_instead_of_rounding() {
        assert_eq!(format_brl(10.005), "R$ 10,00");
        assert_eq!(format_brl(0.999), "R$ 0,99");
    }

    #[test]
    fn test_format_thousands_grouping() {
        assert_eq!(format_brl(3799.5), "R$ 3.799,50");
        assert_eq!(format_brl(1234567.0), "R$ 1.234.567,00");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_brl(-1200.5), "-R$ 1.200,50");
    }

    #[test]
    fn test_format_negative_truncates_toward_negative_infinity() {
        // Math.floor semantics: -10.005 truncates to -10.01, not -10.00.
        assert_eq!(format_brl(-10.005), "-R$ 10,01");
    }
}
