//! The contract every rule kind implements.

use crate::core::context::RuleContext;
use crate::validator::ConfigurationError;
use serde_json::Value;

/// A single parameterized predicate over one property's value.
///
/// Implementations capture their parameters at construction and are never
/// mutated afterwards. `evaluate` must be pure: it may read the value and the
/// containing instance, nothing else.
///
/// - `Ok(None)`: the value passes
/// - `Ok(Some(message))`: the value fails, with a failure message
/// - `Err(_)`: the rule cannot be applied to this value at all
///
/// # Example
///
/// ```rust
/// use fluent_rules::core::{Rule, RuleContext};
/// use fluent_rules::ConfigurationError;
/// use serde_json::Value;
///
/// struct Even;
///
/// impl<T> Rule<T> for Even {
///     fn name(&self) -> &'static str {
///         "even"
///     }
///
///     fn evaluate(
///         &self,
///         value: &Value,
///         context: &RuleContext<'_, T>,
///     ) -> Result<Option<String>, ConfigurationError> {
///         Ok(context
///             .expect_number(value, "even")?
///             .filter(|n| n % 2.0 != 0.0)
///             .map(|_| "Value must be even".to_string()))
///     }
/// }
/// ```
pub trait Rule<T>: Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    fn evaluate(
        &self,
        value: &Value,
        context: &RuleContext<'_, T>,
    ) -> Result<Option<String>, ConfigurationError>;
}

/// Describe the JSON kind of a value for error messages.
pub fn describe_value(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
