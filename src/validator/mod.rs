//! Validator configuration and execution.
//!
//! A [`Validator`] owns a rule registry. Configure it once with
//! [`Validator::rule_for`], then call [`Validator::validate`] as often as
//! needed. Validation accumulates ALL failures across ALL properties instead
//! of stopping at the first one, using Stillwater's `Validation` type.
//!
//! # Example
//!
//! ```rust
//! use fluent_rules::{property, ValidationResultExt, Validator};
//! use serde::Serialize;
//! use stillwater::validation::Validation;
//!
//! #[derive(Serialize)]
//! struct Person {
//!     age: Option<u32>,
//! }
//!
//! let mut validator = Validator::<Person>::new();
//! validator
//!     .rule_for(property!(Person, age)?)
//!     .less_than_or_equal_to(65);
//!
//! let result = validator.validate(&Person { age: Some(70) })?;
//! assert_eq!(
//!     result.errors_for("age"),
//!     Some(&["Value must be less than or equal to 65".to_string()][..])
//! );
//!
//! let result = validator.validate(&Person { age: None })?;
//! assert!(matches!(result, Validation::Success(())));
//! # Ok::<(), fluent_rules::ConfigurationError>(())
//! ```

mod definition;
mod engine;
mod error;
mod options;
mod result;

pub use definition::ValidatorDefinition;
pub use engine::Validator;
pub use error::ConfigurationError;
pub use options::{NumberFormat, ValidatorOptions};
pub use result::{ValidationError, ValidationResult, ValidationResultExt};
