//! Per-validator rule registry.
//!
//! Maps each [`PropertyKey`] to the ordered rules registered for it.
//! Entries keep first-registration order, and rules within an entry keep
//! append order. Both orders are the evaluation order.

use crate::core::{PropertyKey, PropertyReader, Rule, RuleContext, Selector};
use crate::validator::{ConfigurationError, ValidatorOptions};

/// The rules bound to one property.
pub struct PropertyRules<T> {
    key: PropertyKey,
    reader: PropertyReader<T>,
    rules: Vec<Box<dyn Rule<T>>>,
}

impl<T> PropertyRules<T> {
    pub fn key(&self) -> &PropertyKey {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names of the registered rules, in evaluation order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    pub(crate) fn push(&mut self, rule: Box<dyn Rule<T>>) {
        tracing::debug!(
            property = %self.key,
            rule = rule.name(),
            position = self.rules.len(),
            "Rule registered"
        );
        self.rules.push(rule);
    }

    pub(crate) fn pop(&mut self) -> Option<Box<dyn Rule<T>>> {
        self.rules.pop()
    }

    /// Run every rule against `instance`, collecting all failure messages.
    ///
    /// The property is read once. No rule is skipped because an earlier one
    /// failed. The first configuration error aborts the evaluation.
    pub(crate) fn evaluate(
        &self,
        instance: &T,
        options: &ValidatorOptions,
    ) -> Result<Vec<String>, ConfigurationError> {
        if self.rules.is_empty() {
            return Ok(Vec::new());
        }

        let value = (self.reader)(instance)?;
        let context = RuleContext {
            property: &self.key,
            instance,
            number_format: &options.number_format,
        };

        let mut messages = Vec::new();
        for rule in &self.rules {
            let outcome = rule.evaluate(&value, &context)?;
            tracing::trace!(
                property = %self.key,
                rule = rule.name(),
                passed = outcome.is_none(),
                "Rule evaluated"
            );
            messages.extend(outcome);
        }

        Ok(messages)
    }
}

/// Ordered mapping from property key to its rules.
pub struct RuleRegistry<T> {
    entries: Vec<PropertyRules<T>>,
}

impl<T> RuleRegistry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Find the entry for the selector's key, creating an empty one if absent.
    ///
    /// An existing entry keeps its original reader. Rules for the same key
    /// always accumulate in one entry.
    pub fn entry(&mut self, selector: Selector<T>) -> &mut PropertyRules<T> {
        let index = match self.position(selector.key()) {
            Some(index) => index,
            None => {
                let (key, reader) = selector.into_parts();
                tracing::debug!(property = %key, "Registry entry created");
                self.entries.push(PropertyRules {
                    key,
                    reader,
                    rules: Vec::new(),
                });
                self.entries.len() - 1
            }
        };

        &mut self.entries[index]
    }

    pub fn get(&self, key: &str) -> Option<&PropertyRules<T>> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyRules<T>> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.entries.iter().map(|entry| &entry.key)
    }

    /// Number of properties with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &PropertyKey) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.key == key)
    }
}

impl<T> Default for RuleRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{ComparisonRule, NotNull};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Person {
        age: Option<u32>,
        name: Option<String>,
    }

    fn age() -> Selector<Person> {
        Selector::new("age", |p: &Person| &p.age).unwrap()
    }

    #[test]
    fn entry_is_created_once_per_key() {
        let mut registry = RuleRegistry::new();
        registry.entry(age()).push(Box::new(NotNull));
        registry.entry(age()).push(Box::new(ComparisonRule::less_than(100)));

        assert_eq!(registry.len(), 1);
        let names: Vec<_> = registry.get("age").unwrap().rule_names().collect();
        assert_eq!(names, vec!["not_null", "less_than"]);
    }

    #[test]
    fn entries_keep_registration_order() {
        let mut registry = RuleRegistry::new();
        registry.entry(Selector::named("name").unwrap());
        registry.entry(age());
        registry.entry(Selector::named("name").unwrap());

        let keys: Vec<_> = registry.keys().map(PropertyKey::as_str).collect();
        assert_eq!(keys, vec!["name", "age"]);
    }

    #[test]
    fn evaluate_collects_every_failure() {
        let mut registry = RuleRegistry::new();
        let entry = registry.entry(age());
        entry.push(Box::new(ComparisonRule::less_than(10)));
        entry.push(Box::new(ComparisonRule::greater_than(100)));
        entry.push(Box::new(ComparisonRule::less_than(50)));

        let person = Person {
            age: Some(30),
            name: None,
        };
        let messages = registry
            .get("age")
            .unwrap()
            .evaluate(&person, &ValidatorOptions::default())
            .unwrap();

        assert_eq!(
            messages,
            vec![
                "Value must be less than 10".to_string(),
                "Value must be greater than 100".to_string(),
            ]
        );
    }

    #[test]
    fn empty_entry_skips_reading() {
        let mut registry: RuleRegistry<Person> = RuleRegistry::new();
        registry.entry(Selector::named("missing").unwrap());

        let person = Person {
            age: None,
            name: None,
        };
        let messages = registry
            .get("missing")
            .unwrap()
            .evaluate(&person, &ValidatorOptions::default());

        assert_eq!(messages, Ok(Vec::new()));
    }
}
