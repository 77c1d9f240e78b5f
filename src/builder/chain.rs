//! Rule chain bound to one property.

use crate::core::{PropertyKey, Rule};
use crate::registry::PropertyRules;
use crate::rules::{ComparisonRule, InclusiveBetween, Must, NotNull, WithMessage};
use serde_json::Value;

/// Appends rules to one property's registry entry.
///
/// Configuration only mutates the registry. Nothing is validated until
/// [`Validator::validate`](crate::Validator::validate) runs.
pub struct RuleChain<'a, T> {
    entry: &'a mut PropertyRules<T>,
}

impl<'a, T: 'static> RuleChain<'a, T> {
    pub(crate) fn new(entry: &'a mut PropertyRules<T>) -> Self {
        Self { entry }
    }

    /// The property this chain adds rules to.
    pub fn property(&self) -> &PropertyKey {
        self.entry.key()
    }

    /// Append any rule kind.
    pub fn rule<R>(self, rule: R) -> Self
    where
        R: Rule<T> + 'static,
    {
        self.entry.push(Box::new(rule));
        self
    }

    pub fn less_than(self, threshold: impl Into<f64>) -> Self {
        self.rule(ComparisonRule::less_than(threshold))
    }

    pub fn less_than_or_equal_to(self, threshold: impl Into<f64>) -> Self {
        self.rule(ComparisonRule::less_than_or_equal_to(threshold))
    }

    pub fn greater_than(self, threshold: impl Into<f64>) -> Self {
        self.rule(ComparisonRule::greater_than(threshold))
    }

    pub fn greater_than_or_equal_to(self, threshold: impl Into<f64>) -> Self {
        self.rule(ComparisonRule::greater_than_or_equal_to(threshold))
    }

    pub fn inclusive_between(self, from: impl Into<f64>, to: impl Into<f64>) -> Self {
        self.rule(InclusiveBetween::new(from, to))
    }

    pub fn not_null(self) -> Self {
        self.rule(NotNull)
    }

    /// Append a custom predicate over the value and the containing instance.
    pub fn must<F>(self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value, &T) -> bool + Send + Sync + 'static,
    {
        self.rule(Must::new(predicate, message))
    }

    /// Override the failure message of the most recently added rule.
    ///
    /// `{property}` in the template is replaced with the property key.
    /// Called before any rule was added, this does nothing.
    pub fn with_message(self, template: impl Into<String>) -> Self {
        match self.entry.pop() {
            Some(last) => self.rule(WithMessage::new(last, template)),
            None => {
                tracing::warn!(
                    property = %self.entry.key(),
                    "with_message called before any rule was added"
                );
                self
            }
        }
    }
}
