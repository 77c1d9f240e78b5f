//! Configuration errors raised while building or running a validator.

use thiserror::Error;

/// Errors that indicate a mismatch between a validator's rule configuration
/// and the model it is applied to.
///
/// These are never reported through a validation result. They abort the
/// current `rule_for` or `validate` call and are returned to the caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("Selector `{selector}` cannot be resolved to a single property: {reason}")]
    UnresolvableSelector { selector: String, reason: String },

    #[error("Property `{property}` does not exist on the validated object")]
    UnknownProperty { property: String },

    #[error("Rule `{rule}` on property `{property}` expects a number, found {found}")]
    NotANumber {
        property: String,
        rule: &'static str,
        found: &'static str,
    },

    #[error("Invalid validator options: {0}")]
    InvalidOptions(String),

    #[error("Failed to read property `{property}`: {message}")]
    Serialization { property: String, message: String },
}
