use std::fmt;

/// Money is represented as integer cents to avoid floating-point drift.
/// For USD, 1 unit = 100 cents, so $50.00 = 5000 cents.
pub type Cents = i64;

/// Format cents as a decimal string with two fractional digits.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000
///
/// Only ASCII digits and a single decimal point are accepted, so inputs such
/// as "NaN", "1e3" or "12abc" are rejected instead of being partially read.
/// Trailing zeros past the cent are allowed ("1.500"), any other sub-cent
/// digit is an error.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let negative = input.starts_with('-');
    let input = input.strip_prefix('-').unwrap_or(input);

    let (units_str, decimal_str) = match input.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (input, ""),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    if !units_str.bytes().all(|b| b.is_ascii_digit())
        || !decimal_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| ParseCentsError::Overflow)?
    };

    if decimal_str.len() > 2 && decimal_str[2..].bytes().any(|b| b != b'0') {
        return Err(ParseCentsError::SubCentPrecision);
    }

    // Pad the fractional part to exactly 2 digits
    let decimal_cents: i64 = match decimal_str.len() {
        0 => 0,
        1 => i64::from(decimal_str.as_bytes()[0] - b'0') * 10,
        _ => decimal_str[..2]
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal_cents))
        .ok_or(ParseCentsError::Overflow)?;
    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    Overflow,
    SubCentPrecision,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::Overflow => write!(f, "amount out of range"),
            ParseCentsError::SubCentPrecision => write!(f, "more than 2 decimal places"),
        }
    }
}

impl std::error::Error for ParseCentsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(134056), "1340.56");
        assert_eq!(format_cents(5000), "50.00");
        assert_eq!(format_cents(1), "0.01");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-5000), "-50.00");
        assert_eq!(format_cents(-1), "-0.01");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("1340.56"), Ok(134056));
        assert_eq!(parse_cents("50"), Ok(5000));
        assert_eq!(parse_cents("12.5"), Ok(1250));
        assert_eq!(parse_cents(".50"), Ok(50));
        assert_eq!(parse_cents("7."), Ok(700));
        assert_eq!(parse_cents("  40.56 "), Ok(4056));
        assert_eq!(parse_cents("-5"), Ok(-500));
        assert_eq!(parse_cents("1.500"), Ok(150));
        assert_eq!(parse_cents("2.0000"), Ok(200));
    }

    #[test]
    fn test_parse_cents_sub_cent_digits() {
        for input in ["100.999", "1340.569", "0.001", "-0.005", "1.5001"] {
            assert_eq!(
                parse_cents(input),
                Err(ParseCentsError::SubCentPrecision),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_cents_invalid() {
        for input in ["", "-", ".", "abc", "NaN", "1e3", "12abc", "12.34.56", "1.-5", "+-1"] {
            assert_eq!(
                parse_cents(input),
                Err(ParseCentsError::InvalidFormat),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_cents_overflow() {
        assert_eq!(
            parse_cents("99999999999999999999"),
            Err(ParseCentsError::Overflow)
        );
        assert_eq!(
            parse_cents("92233720368547758.08"),
            Err(ParseCentsError::Overflow)
        );
    }
}
