//! Validator: fluent configuration plus execution.

use crate::builder::RuleChain;
use crate::core::{PropertyKey, Selector};
use crate::registry::RuleRegistry;
use crate::validator::definition::ValidatorDefinition;
use crate::validator::error::ConfigurationError;
use crate::validator::options::ValidatorOptions;
use crate::validator::result::{ValidationError, ValidationResult};
use serde::Serialize;
use stillwater::validation::Validation;

/// Rule engine for one model type.
///
/// Configuration takes `&mut self` and validation takes `&self`, so a
/// configured validator can be shared (for example behind an `Arc`) by any
/// number of threads calling [`validate`](Self::validate).
pub struct Validator<T> {
    registry: RuleRegistry<T>,
    options: ValidatorOptions,
}

impl<T: 'static> Validator<T> {
    pub fn new() -> Self {
        Self::with_options(ValidatorOptions::default())
    }

    pub fn with_options(options: ValidatorOptions) -> Self {
        Self {
            registry: RuleRegistry::new(),
            options,
        }
    }

    /// Build a validator from a reusable definition.
    pub fn from_definition<D>(definition: &D) -> Result<Self, ConfigurationError>
    where
        D: ValidatorDefinition<T> + ?Sized,
    {
        let mut validator = Self::new();
        validator.include(definition)?;
        Ok(validator)
    }

    /// Add a definition's rules to this validator.
    ///
    /// Rules for properties that already have an entry are appended to it.
    pub fn include<D>(&mut self, definition: &D) -> Result<&mut Self, ConfigurationError>
    where
        D: ValidatorDefinition<T> + ?Sized,
    {
        definition.define(self)?;
        Ok(self)
    }

    /// Open a rule chain for the selected property.
    ///
    /// The registry entry is created on first use. Calling this again for the
    /// same property appends to the same entry.
    pub fn rule_for(&mut self, selector: Selector<T>) -> RuleChain<'_, T> {
        RuleChain::new(self.registry.entry(selector))
    }

    /// Open a rule chain for a property named by its serialized name.
    ///
    /// The name must be a single identifier. A name the serialized instance
    /// does not contain reads as null, like an absent value. Use
    /// [`rule_for_name_in`](Self::rule_for_name_in) to reject unknown names
    /// up front.
    pub fn rule_for_name(&mut self, name: &str) -> Result<RuleChain<'_, T>, ConfigurationError>
    where
        T: Serialize,
    {
        let selector = Selector::named(name).inspect_err(|error| {
            tracing::warn!(selector = name, error = %error, "Selector rejected");
        })?;
        Ok(self.rule_for(selector))
    }

    /// Like [`rule_for_name`](Self::rule_for_name), but the name must appear
    /// in the serialized `sample`.
    pub fn rule_for_name_in(
        &mut self,
        name: &str,
        sample: &T,
    ) -> Result<RuleChain<'_, T>, ConfigurationError>
    where
        T: Serialize,
    {
        let selector = Selector::named_in(name, sample).inspect_err(|error| {
            tracing::warn!(selector = name, error = %error, "Selector rejected");
        })?;
        Ok(self.rule_for(selector))
    }

    /// Validate `instance`, accumulating ALL failures.
    ///
    /// Returns `Validation::Success(())` when every rule passes, or a failure
    /// listing each failing property once, in registration order, with all
    /// of its messages in rule order. A [`ConfigurationError`] aborts the
    /// call and is returned as `Err`.
    pub fn validate(&self, instance: &T) -> Result<ValidationResult, ConfigurationError> {
        let mut checks: Vec<ValidationResult> = Vec::with_capacity(self.registry.len());

        for entry in self.registry.iter() {
            let messages = entry.evaluate(instance, &self.options).inspect_err(|error| {
                tracing::warn!(property = %entry.key(), error = %error, "Validation aborted");
            })?;

            let check = if messages.is_empty() {
                Validation::success(())
            } else {
                Validation::fail(ValidationError {
                    property: entry.key().clone(),
                    errors: messages,
                })
            };
            checks.push(check);
        }

        let result: ValidationResult = Validation::all_vec(checks).map(|_| ());
        tracing::debug!(
            properties = self.registry.len(),
            failed = failure_count(&result),
            "Validation finished"
        );
        Ok(result)
    }

    /// Property keys with a registry entry, in registration order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyKey> {
        self.registry.keys()
    }

    /// Number of rules registered for `property`.
    pub fn rule_count(&self, property: &str) -> usize {
        self.registry.get(property).map_or(0, |entry| entry.len())
    }

    pub fn registry(&self) -> &RuleRegistry<T> {
        &self.registry
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }
}

impl<T: 'static> Default for Validator<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn failure_count(result: &ValidationResult) -> usize {
    match result {
        Validation::Success(_) => 0,
        Validation::Failure(errors) => errors.len(),
    }
}
