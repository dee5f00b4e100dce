// src/services/calculations.rs

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Divide, or `None` when the divisor is zero and the quotient would be unbounded.
pub fn checked_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Dashboard currency: `$1.05M`, `$123.3K`, `$950`. NaN renders as `n/a`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "n/a".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞".to_string() } else { "∞".to_string() };
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    let body = if abs >= 1_000_000.0 {
        format!("{}M", trim_decimals(abs / 1_000_000.0, 2))
    } else if abs >= 1_000.0 {
        format!("{}K", trim_decimals(abs / 1_000.0, 1))
    } else {
        format!("{}", abs.round())
    };

    format!("{}${}", sign, body)
}

fn trim_decimals(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_to(23.625, 1), 23.6);
        assert_eq!(round_to(1.4117, 1), 1.4);
        assert_eq!(round_to(84.96, 1), 85.0);
        assert_eq!(round_to(-2.25, 0), -2.0);
    }

    #[test]
    fn zero_divisor_has_no_ratio() {
        assert_eq!(checked_ratio(1.0, 0.0), None);
        assert_eq!(checked_ratio(3.0, 2.0), Some(1.5));
    }

    #[test]
    fn formats_dashboard_currency() {
        assert_eq!(format_currency(1_050_000.0), "$1.05M");
        assert_eq!(format_currency(9_000_000.0), "$9M");
        assert_eq!(format_currency(123_333.33), "$123.3K");
        assert_eq!(format_currency(950.4), "$950");
        assert_eq!(format_currency(-82_083.33), "-$82.1K");
        assert_eq!(format_currency(f64::INFINITY), "∞");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn nan_is_not_shown_as_unbounded() {
        assert_eq!(format_currency(f64::NAN), "n/a");
    }
}
