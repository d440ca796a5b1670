//! Plain number formatting (integers and decimals with locale separators)

/// Format an integer, grouping digits in threes when `thousands` is set.
pub fn format_integer(value: i64, thousands: Option<char>) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = match thousands {
        Some(sep) => group_digits(&digits, sep),
        None => digits,
    };
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a float using the shortest text that reads back to the same value.
///
/// The integer part is grouped when `thousands` is set and the decimal point
/// is replaced by `decimal`. Non-finite values render as `NaN`, `Infinity`,
/// and `-Infinity`.
pub fn format_float(value: f64, decimal: char, thousands: Option<char>) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        }
        .to_string();
    }

    // Display for f64 never uses exponent notation
    let plain = format!("{}", value.abs());
    let (integer, fraction) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut result = String::with_capacity(plain.len() + plain.len() / 3 + 1);
    if value.is_sign_negative() && value != 0.0 {
        result.push('-');
    }
    match thousands {
        Some(sep) => result.push_str(&group_digits(integer, sep)),
        None => result.push_str(integer),
    }
    if let Some(fraction) = fraction {
        result.push(decimal);
        result.push_str(fraction);
    }
    result
}

/// Insert `sep` between groups of three digits, counting from the right.
fn group_digits(digits: &str, sep: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.chars().count();

    for (i, ch) in digits.chars().enumerate() {
        // Add thousands separator if needed (but not at position 0)
        if i > 0 && (len - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(ch);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integer() {
        assert_eq!(format_integer(0, Some(',')), "0");
        assert_eq!(format_integer(999, Some(',')), "999");
        assert_eq!(format_integer(1234, Some(',')), "1,234");
        assert_eq!(format_integer(-1234567, Some('.')), "-1.234.567");
        assert_eq!(format_integer(1234567, None), "1234567");
        assert_eq!(format_integer(i64::MIN, Some(',')), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1234.5, '.', Some(',')), "1,234.5");
        assert_eq!(format_float(-1234.5, ',', Some('.')), "-1.234,5");
        assert_eq!(format_float(42.0, '.', None), "42");
        assert_eq!(format_float(-0.0, '.', None), "0");
        assert_eq!(format_float(f64::NAN, '.', None), "NaN");
        assert_eq!(format_float(f64::NEG_INFINITY, '.', None), "-Infinity");
    }
}
