//! Context provided to rules during evaluation.

use crate::core::property::PropertyKey;
use crate::core::rule::describe_value;
use crate::validator::{ConfigurationError, NumberFormat};
use serde_json::Value;

/// Read-only view handed to a rule while it evaluates one property.
pub struct RuleContext<'a, T> {
    pub property: &'a PropertyKey,
    pub instance: &'a T,
    pub number_format: &'a NumberFormat,
}

impl<'a, T> RuleContext<'a, T> {
    /// Format a number for a failure message using the configured format.
    pub fn format_number(&self, value: f64) -> String {
        self.number_format.format(value)
    }

    /// Interpret `value` as an optional number.
    ///
    /// Null is `Ok(None)`. Any other non-numeric value is a configuration
    /// error attributed to `rule`.
    pub fn expect_number(
        &self,
        value: &Value,
        rule: &'static str,
    ) -> Result<Option<f64>, ConfigurationError> {
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            other => Err(ConfigurationError::NotANumber {
                property: self.property.to_string(),
                rule,
                found: describe_value(other),
            }),
        }
    }
}

impl<T> Clone for RuleContext<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RuleContext<'_, T> {}
