//! Required-ness rule.

use crate::core::{Rule, RuleContext};
use crate::validator::ConfigurationError;
use serde_json::Value;

/// Fails when the property is null (`None`, unit, or a null JSON value).
///
/// This is the only built-in rule that rejects an absent value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotNull;

impl<T> Rule<T> for NotNull {
    fn name(&self) -> &'static str {
        "not_null"
    }

    fn evaluate(
        &self,
        value: &Value,
        _context: &RuleContext<'_, T>,
    ) -> Result<Option<String>, ConfigurationError> {
        Ok(value.is_null().then(|| "Value is required".to_string()))
    }
}
