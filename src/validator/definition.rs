//! Reusable validator definitions.

use crate::validator::engine::Validator;
use crate::validator::error::ConfigurationError;

/// A reusable set of rules for a model.
///
/// Implement this for a named validator type, then build it with
/// [`Validator::from_definition`]. A definition can extend another by calling
/// its `define` first; rules for shared properties accumulate.
///
/// # Example
///
/// ```rust
/// use fluent_rules::{property, ConfigurationError, Validator, ValidatorDefinition};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Person {
///     age: Option<u32>,
/// }
///
/// struct AdultValidator;
///
/// impl ValidatorDefinition<Person> for AdultValidator {
///     fn define(&self, validator: &mut Validator<Person>) -> Result<(), ConfigurationError> {
///         validator
///             .rule_for(property!(Person, age)?)
///             .not_null()
///             .greater_than_or_equal_to(18);
///         Ok(())
///     }
/// }
///
/// let validator = Validator::from_definition(&AdultValidator)?;
/// assert!(validator.validate(&Person { age: Some(30) })?.is_success());
/// # Ok::<(), ConfigurationError>(())
/// ```
pub trait ValidatorDefinition<T> {
    fn define(&self, validator: &mut Validator<T>) -> Result<(), ConfigurationError>;
}

impl<T, F> ValidatorDefinition<T> for F
where
    F: Fn(&mut Validator<T>) -> Result<(), ConfigurationError>,
{
    fn define(&self, validator: &mut Validator<T>) -> Result<(), ConfigurationError> {
        self(validator)
    }
}
