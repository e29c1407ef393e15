//! Canonical numeric-to-text conversion for emitted bounds.

/// Format a number the way it is written into generated output.
///
/// Uses the shortest decimal representation that parses back to the same
/// `f64`, so `0.5` stays `0.5`, `2000.0` becomes `2000` and no exponent
/// notation is ever produced. Negative zero is written as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values() {
        assert_eq!(format_number(2000.0), "2000");
        assert_eq!(format_number(-150.0), "-150");
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(50000.0), "50000");
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-0.25), "-0.25");
        assert_eq!(format_number(0.1), "0.1");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_no_exponent() {
        assert_eq!(format_number(1e21), "1000000000000000000000");
        assert_eq!(format_number(1e-7), "0.0000001");
    }

    #[test]
    fn test_round_trip() {
        for value in [0.5, 3.0, -100.0, 0.1 + 0.2, f64::MAX, f64::MIN_POSITIVE] {
            let parsed: f64 = format_number(value).parse().unwrap();
            assert_eq!(parsed, value);
        }
    }
}
