// tile-quote/src/quote/input.rs

use super::errors::{InvalidReason, ValidationError};

/// Read a number from form text.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// "20m2" reads as 20 and "1.5 m²" as 1.5. Text without a numeric prefix reads
/// as NaN.
pub fn parse_number(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Validated calculator input, rebuilt from the form on every request
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationInput {
    area: f64,
    coverage_per_box: f64,
}

impl CalculationInput {
    pub fn new(area: f64, coverage_per_box: f64) -> Result<Self, ValidationError> {
        if let Some(reason) = Self::check(area) {
            return Err(ValidationError::InvalidArea(reason));
        }
        if let Some(reason) = Self::check(coverage_per_box) {
            return Err(ValidationError::InvalidCoverage(reason));
        }
        Ok(Self {
            area,
            coverage_per_box,
        })
    }

    /// Parse both values from form text; a missing selection is `None`
    pub fn parse(area: &str, coverage_per_box: Option<&str>) -> Result<Self, ValidationError> {
        let area = parse_number(area);
        let coverage = coverage_per_box.map(parse_number).unwrap_or(f64::NAN);
        Self::new(area, coverage)
    }

    fn check(value: f64) -> Option<InvalidReason> {
        if !value.is_finite() {
            Some(InvalidReason::NotANumber)
        } else if value <= 0.0 {
            Some(InvalidReason::NotPositive)
        } else {
            None
        }
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn coverage_per_box(&self) -> f64 {
        self.coverage_per_box
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_prefixes() {
        assert_eq!(parse_number("20"), 20.0);
        assert_eq!(parse_number("  20.5"), 20.5);
        assert_eq!(parse_number("20m2"), 20.0);
        assert_eq!(parse_number("1.5 m²"), 1.5);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number("-5"), -5.0);
        assert_eq!(parse_number("+3"), 3.0);
        assert_eq!(parse_number("1e2"), 100.0);
        assert_eq!(parse_number("1e"), 1.0);
        assert_eq!(parse_number("2E-1x"), 0.2);
    }

    #[test]
    fn test_parse_number_rejects() {
        assert!(parse_number("").is_nan());
        assert!(parse_number("abc").is_nan());
        assert!(parse_number(".").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number("e5").is_nan());
        assert!(parse_number("inf").is_nan());
    }

    #[test]
    fn test_input_validation() {
        assert!(CalculationInput::parse("20", Some("1.08")).is_ok());

        assert_eq!(
            CalculationInput::parse("0", Some("1.08")),
            Err(ValidationError::InvalidArea(InvalidReason::NotPositive))
        );
        assert_eq!(
            CalculationInput::parse("-5", Some("1.08")),
            Err(ValidationError::InvalidArea(InvalidReason::NotPositive))
        );
        assert_eq!(
            CalculationInput::parse("abc", Some("1.08")),
            Err(ValidationError::InvalidArea(InvalidReason::NotANumber))
        );
        assert_eq!(
            CalculationInput::parse("20", None),
            Err(ValidationError::InvalidCoverage(InvalidReason::NotANumber))
        );
        assert_eq!(
            CalculationInput::parse("20", Some("0")),
            Err(ValidationError::InvalidCoverage(InvalidReason::NotPositive))
        );
        assert_eq!(
            CalculationInput::new(f64::INFINITY, 1.0),
            Err(ValidationError::InvalidArea(InvalidReason::NotANumber))
        );
    }
}
