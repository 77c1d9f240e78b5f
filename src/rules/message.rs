//! Failure message override.

use crate::core::{Rule, RuleContext};
use crate::validator::ConfigurationError;
use serde_json::Value;

/// Replaces the failure message of an inner rule.
///
/// `{property}` in the template is replaced with the property key. The inner
/// rule still decides pass or fail, and its configuration errors pass through
/// unchanged.
pub struct WithMessage<T> {
    inner: Box<dyn Rule<T>>,
    template: String,
}

impl<T> WithMessage<T> {
    pub fn new(inner: Box<dyn Rule<T>>, template: impl Into<String>) -> Self {
        Self {
            inner,
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl<T> Rule<T> for WithMessage<T> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn evaluate(
        &self,
        value: &Value,
        context: &RuleContext<'_, T>,
    ) -> Result<Option<String>, ConfigurationError> {
        let outcome = self.inner.evaluate(value, context)?;
        Ok(outcome.map(|_| self.template.replace("{property}", context.property.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PropertyKey;
    use crate::rules::ComparisonRule;
    use crate::validator::NumberFormat;
    use serde_json::json;

    #[test]
    fn with_message_renders_property() {
        let rule = WithMessage::<()>::new(
            Box::new(ComparisonRule::less_than_or_equal_to(65)),
            "{property} is past retirement",
        );
        let key = PropertyKey::parse("age").unwrap();
        let format = NumberFormat::default();
        let context = RuleContext {
            property: &key,
            instance: &(),
            number_format: &format,
        };

        assert_eq!(rule.name(), "less_than_or_equal_to");
        assert_eq!(
            rule.evaluate(&json!(70), &context),
            Ok(Some("age is past retirement".to_string()))
        );
        assert_eq!(rule.evaluate(&json!(60), &context), Ok(None));
        assert!(rule.evaluate(&json!("old"), &context).is_err());
    }
}
