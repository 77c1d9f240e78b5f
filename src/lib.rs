//! Fluent Rules: a declarative, per-property object validation engine
//!
//! Callers describe, per property of a model, an ordered chain of rules. The
//! engine evaluates every rule against an instance and reports all failure
//! messages grouped by property, using Stillwater's `Validation` to
//! accumulate errors instead of stopping at the first one.
//!
//! # Core Concepts
//!
//! - **Selector**: resolves a property from accessor syntax via [`property!`]
//! - **Rule**: a pure, parameterized predicate with a failure message
//! - **Registry**: the ordered rules per property, owned by one validator
//! - **Validator**: fluent configuration plus execution
//!
//! Two kinds of failure never mix. A value that breaks a rule is reported in
//! the [`ValidationResult`]. A rule that cannot be applied at all (a numeric
//! rule on a string, a selector that names no property) is a
//! [`ConfigurationError`] returned as `Err`.
//!
//! # Example
//!
//! ```rust
//! use fluent_rules::{property, ValidationResultExt, Validator};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Person {
//!     name: Option<String>,
//!     age: Option<u32>,
//! }
//!
//! let mut validator = Validator::<Person>::new();
//! validator.rule_for(property!(Person, name)?).not_null();
//! validator
//!     .rule_for(property!(Person, age)?)
//!     .greater_than_or_equal_to(18)
//!     .less_than_or_equal_to(65);
//!
//! let result = validator.validate(&Person { name: None, age: Some(70) })?;
//! let errors = result.into_errors();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].property, "name");
//! assert_eq!(errors[1].errors, vec!["Value must be less than or equal to 65"]);
//! # Ok::<(), fluent_rules::ConfigurationError>(())
//! ```

pub mod builder;
pub mod core;
pub mod registry;
pub mod rules;
pub mod validator;

// Re-export commonly used types
pub use crate::builder::RuleChain;
pub use crate::core::{PropertyKey, Rule, RuleContext, Selector};
pub use crate::validator::{
    ConfigurationError, NumberFormat, ValidationError, ValidationResult, ValidationResultExt,
    Validator, ValidatorDefinition, ValidatorOptions,
};
