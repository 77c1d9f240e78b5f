//! Numeric comparison rules.

use crate::core::{Rule, RuleContext};
use crate::validator::ConfigurationError;
use serde_json::Value;

/// Comparison applied by a [`ComparisonRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    LessThan,
    LessThanOrEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
}

impl Comparison {
    /// Check `value` against `threshold` (pure).
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::LessThan => value < threshold,
            Self::LessThanOrEqualTo => value <= threshold,
            Self::GreaterThan => value > threshold,
            Self::GreaterThanOrEqualTo => value >= threshold,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::LessThan => "less_than",
            Self::LessThanOrEqualTo => "less_than_or_equal_to",
            Self::GreaterThan => "greater_than",
            Self::GreaterThanOrEqualTo => "greater_than_or_equal_to",
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            Self::LessThan => "less than",
            Self::LessThanOrEqualTo => "less than or equal to",
            Self::GreaterThan => "greater than",
            Self::GreaterThanOrEqualTo => "greater than or equal to",
        }
    }
}

/// Compares a numeric property against a fixed threshold.
///
/// ```rust
/// use fluent_rules::rules::ComparisonRule;
///
/// let rule = ComparisonRule::less_than_or_equal_to(65);
/// assert_eq!(rule.threshold(), 65.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRule {
    comparison: Comparison,
    threshold: f64,
}

impl ComparisonRule {
    pub fn new(comparison: Comparison, threshold: impl Into<f64>) -> Self {
        Self {
            comparison,
            threshold: threshold.into(),
        }
    }

    pub fn less_than(threshold: impl Into<f64>) -> Self {
        Self::new(Comparison::LessThan, threshold)
    }

    pub fn less_than_or_equal_to(threshold: impl Into<f64>) -> Self {
        Self::new(Comparison::LessThanOrEqualTo, threshold)
    }

    pub fn greater_than(threshold: impl Into<f64>) -> Self {
        Self::new(Comparison::GreaterThan, threshold)
    }

    pub fn greater_than_or_equal_to(threshold: impl Into<f64>) -> Self {
        Self::new(Comparison::GreaterThanOrEqualTo, threshold)
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl<T> Rule<T> for ComparisonRule {
    fn name(&self) -> &'static str {
        self.comparison.name()
    }

    fn evaluate(
        &self,
        value: &Value,
        context: &RuleContext<'_, T>,
    ) -> Result<Option<String>, ConfigurationError> {
        let Some(number) = context.expect_number(value, self.comparison.name())? else {
            return Ok(None);
        };

        if self.comparison.holds(number, self.threshold) {
            Ok(None)
        } else {
            Ok(Some(format!(
                "Value must be {} {}",
                self.comparison.phrase(),
                context.format_number(self.threshold)
            )))
        }
    }
}

/// Requires a numeric property to lie within `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InclusiveBetween {
    from: f64,
    to: f64,
}

impl InclusiveBetween {
    /// Bounds are normalized so `from <= to`.
    pub fn new(from: impl Into<f64>, to: impl Into<f64>) -> Self {
        let (from, to) = (from.into(), to.into());
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.from, self.to)
    }
}

impl<T> Rule<T> for InclusiveBetween {
    fn name(&self) -> &'static str {
        "inclusive_between"
    }

    fn evaluate(
        &self,
        value: &Value,
        context: &RuleContext<'_, T>,
    ) -> Result<Option<String>, ConfigurationError> {
        let Some(number) = context.expect_number(value, "inclusive_between")? else {
            return Ok(None);
        };

        if (self.from..=self.to).contains(&number) {
            Ok(None)
        } else {
            Ok(Some(format!(
                "Value must be between {} and {}",
                context.format_number(self.from),
                context.format_number(self.to)
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PropertyKey;
    use crate::validator::NumberFormat;
    use serde_json::json;

    fn run(rule: &dyn Rule<()>, value: Value) -> Result<Option<String>, ConfigurationError> {
        let key = PropertyKey::parse("age").unwrap();
        let format = NumberFormat::default();
        let context = RuleContext {
            property: &key,
            instance: &(),
            number_format: &format,
        };
        rule.evaluate(&value, &context)
    }

    #[test]
    fn less_than_or_equal_to_reports_threshold() {
        let rule = ComparisonRule::less_than_or_equal_to(65);

        assert_eq!(
            run(&rule, json!(70)),
            Ok(Some("Value must be less than or equal to 65".to_string()))
        );
        assert_eq!(run(&rule, json!(65)), Ok(None));
        assert_eq!(run(&rule, json!(40)), Ok(None));
    }

    #[test]
    fn comparisons_honor_strictness() {
        assert!(run(&ComparisonRule::less_than(10), json!(10)).unwrap().is_some());
        assert_eq!(run(&ComparisonRule::less_than(10), json!(9.5)), Ok(None));
        assert!(run(&ComparisonRule::greater_than(10), json!(10)).unwrap().is_some());
        assert_eq!(run(&ComparisonRule::greater_than_or_equal_to(10), json!(10)), Ok(None));
    }

    #[test]
    fn messages_use_locale_number_format() {
        let rule = ComparisonRule::greater_than_or_equal_to(1500.5);

        assert_eq!(
            run(&rule, json!(3)),
            Ok(Some("Value must be greater than or equal to 1,500.5".to_string()))
        );
    }

    #[test]
    fn null_always_passes() {
        assert_eq!(run(&ComparisonRule::less_than(0), Value::Null), Ok(None));
        assert_eq!(run(&InclusiveBetween::new(1, 2), Value::Null), Ok(None));
    }

    #[test]
    fn non_numeric_values_are_configuration_errors() {
        let result = run(&ComparisonRule::less_than_or_equal_to(65), json!("old"));

        assert_eq!(
            result,
            Err(ConfigurationError::NotANumber {
                property: "age".to_string(),
                rule: "less_than_or_equal_to",
                found: "a string",
            })
        );
        assert!(run(&InclusiveBetween::new(0, 1), json!(false)).is_err());
    }

    #[test]
    fn inclusive_between_includes_bounds() {
        let rule = InclusiveBetween::new(18, 65);

        assert_eq!(run(&rule, json!(18)), Ok(None));
        assert_eq!(run(&rule, json!(65)), Ok(None));
        assert_eq!(
            run(&rule, json!(17)),
            Ok(Some("Value must be between 18 and 65".to_string()))
        );
    }

    #[test]
    fn inclusive_between_normalizes_reversed_bounds() {
        assert_eq!(InclusiveBetween::new(10, 1).bounds(), (1.0, 10.0));
    }
}
