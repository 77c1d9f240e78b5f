//! Validator configuration.

use crate::validator::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Options that shape how a validator renders its messages.
///
/// Missing fields fall back to their defaults when deserialized, so a host
/// can load a partial document.
///
/// ```rust
/// use fluent_rules::ValidatorOptions;
///
/// let options = ValidatorOptions::from_json(
///     r#"{ "number_format": { "grouping_separator": ".", "decimal_separator": "," } }"#,
/// )?;
/// assert_eq!(options.number_format.format(1234.5), "1.234,5");
/// # Ok::<(), fluent_rules::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    pub number_format: NumberFormat,
}

impl ValidatorOptions {
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(json).map_err(|e| ConfigurationError::InvalidOptions(e.to_string()))
    }
}

/// Locale conventions for numbers interpolated into messages.
///
/// Defaults to the en-US convention: comma grouping, dot decimal point, at
/// most three fraction digits with trailing zeros dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub grouping_separator: Option<char>,
    pub decimal_separator: char,
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            grouping_separator: Some(','),
            decimal_separator: '.',
            max_fraction_digits: 3,
        }
    }
}

impl NumberFormat {
    /// Format a number (pure).
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let digits = format!("{:.*}", self.max_fraction_digits, value.abs());
        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
            None => (digits.as_str(), ""),
        };

        let mut out = String::with_capacity(digits.len() + integer.len() / 3 + 1);
        if value < 0.0 && (integer != "0" || !fraction.is_empty()) {
            out.push('-');
        }

        match self.grouping_separator {
            Some(separator) => {
                for (i, ch) in integer.chars().enumerate() {
                    if i > 0 && (integer.len() - i) % 3 == 0 {
                        out.push(separator);
                    }
                    out.push(ch);
                }
            }
            None => out.push_str(integer),
        }

        if !fraction.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_matches_en_us() {
        let format = NumberFormat::default();

        assert_eq!(format.format(65.0), "65");
        assert_eq!(format.format(1000.0), "1,000");
        assert_eq!(format.format(1234567.0), "1,234,567");
        assert_eq!(format.format(2.5), "2.5");
        assert_eq!(format.format(1.23456), "1.235");
        assert_eq!(format.format(-1500.25), "-1,500.25");
        assert_eq!(format.format(0.0), "0");
    }

    #[test]
    fn negative_values_rounding_to_zero_drop_sign() {
        assert_eq!(NumberFormat::default().format(-0.0001), "0");
    }

    #[test]
    fn grouping_can_be_disabled() {
        let format = NumberFormat {
            grouping_separator: None,
            ..NumberFormat::default()
        };

        assert_eq!(format.format(1234567.5), "1234567.5");
    }

    #[test]
    fn zero_fraction_digits_rounds_to_integer() {
        let format = NumberFormat {
            max_fraction_digits: 0,
            ..NumberFormat::default()
        };

        assert_eq!(format.format(2.6), "3");
    }

    #[test]
    fn non_finite_values_are_printed_verbatim() {
        let format = NumberFormat::default();

        assert_eq!(format.format(f64::INFINITY), "inf");
        assert_eq!(format.format(f64::NAN), "NaN");
    }

    #[test]
    fn options_load_partial_json() {
        let options = ValidatorOptions::from_json(r#"{ "number_format": { "grouping_separator": null } }"#)
            .unwrap();

        assert_eq!(options.number_format.grouping_separator, None);
        assert_eq!(options.number_format.decimal_separator, '.');
        assert_eq!(options.number_format.max_fraction_digits, 3);
    }

    #[test]
    fn options_reject_malformed_json() {
        let result = ValidatorOptions::from_json("{ number_format");
        assert!(matches!(result, Err(ConfigurationError::InvalidOptions(_))));
    }

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(ValidatorOptions::from_json("{}").unwrap(), ValidatorOptions::default());
    }
}
