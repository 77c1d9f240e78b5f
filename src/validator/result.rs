//! Validation output types.

use crate::core::PropertyKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// All failure messages for one property, in rule registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub property: PropertyKey,
    pub errors: Vec<String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.errors.join("; "))
    }
}

/// Outcome of one `validate` call.
///
/// `Validation::Success(())` is the "no errors" signal. A failure always
/// carries at least one [`ValidationError`], in registry order.
pub type ValidationResult = Validation<(), NonEmptyVec<ValidationError>>;

/// Convenience accessors for [`ValidationResult`].
pub trait ValidationResultExt {
    /// Messages reported for `property`, if it failed.
    fn errors_for(&self, property: &str) -> Option<&[String]>;

    /// All property errors, empty when validation succeeded.
    fn into_errors(self) -> Vec<ValidationError>;
}

impl ValidationResultExt for ValidationResult {
    fn errors_for(&self, property: &str) -> Option<&[String]> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(errors) => errors
                .iter()
                .find(|error| error.property == property)
                .map(|error| error.errors.as_slice()),
        }
    }

    fn into_errors(self) -> Vec<ValidationError> {
        match self {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }
}
