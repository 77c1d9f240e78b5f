//! Custom predicate rule.

use crate::core::{Rule, RuleContext};
use crate::validator::ConfigurationError;
use serde_json::Value;
use std::fmt;

/// Wraps a caller-supplied predicate over the property value and the
/// containing instance.
///
/// The predicate must be pure. It returns `true` when the value is valid.
pub struct Must<F> {
    predicate: F,
    message: String,
}

impl<F> Must<F> {
    pub fn new<T>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value, &T) -> bool + Send + Sync,
    {
        Self {
            predicate,
            message: message.into(),
        }
    }
}

impl<T, F> Rule<T> for Must<F>
where
    F: Fn(&Value, &T) -> bool + Send + Sync,
{
    fn name(&self) -> &'static str {
        "must"
    }

    fn evaluate(
        &self,
        value: &Value,
        context: &RuleContext<'_, T>,
    ) -> Result<Option<String>, ConfigurationError> {
        if (self.predicate)(value, context.instance) {
            Ok(None)
        } else {
            Ok(Some(self.message.clone()))
        }
    }
}

impl<F> fmt::Debug for Must<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Must")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
