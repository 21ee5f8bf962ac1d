//! Thousands-separated number formatting for console output and chart labels.

/// Formats an integer count with thousands separators, e.g. `12345` -> "12,345".
pub fn format_thousands_u64(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Formats a float with thousands separators and a fixed number of decimals,
/// e.g. `1234567.891` at 2 decimals -> "1,234,567.89".
pub fn format_thousands_f64(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let grouped = group_thousands(digits);
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            output.push(',');
        }
        output.push(c);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands_u64() {
        assert_eq!(format_thousands_u64(0), "0");
        assert_eq!(format_thousands_u64(999), "999");
        assert_eq!(format_thousands_u64(1_000), "1,000");
        assert_eq!(format_thousands_u64(12_345), "12,345");
        assert_eq!(format_thousands_u64(1_234_567), "1,234,567");
        assert_eq!(format_thousands_u64(1_000_000_000), "1,000,000,000");
    }

    #[test]
    fn test_format_thousands_f64() {
        assert_eq!(format_thousands_f64(0.0, 2), "0.00");
        assert_eq!(format_thousands_f64(1_234.5, 2), "1,234.50");
        assert_eq!(format_thousands_f64(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(format_thousands_f64(50_000.0, 0), "50,000");
        assert_eq!(format_thousands_f64(999.999, 2), "1,000.00");
    }

    #[test]
    fn test_format_thousands_f64_negative() {
        assert_eq!(format_thousands_f64(-1_234.5, 2), "-1,234.50");
        assert_eq!(format_thousands_f64(-150_000.0, 0), "-150,000");
        assert_eq!(format_thousands_f64(-12.0, 1), "-12.0");
    }
}
