//! Core rule engine types.
//!
//! This module contains the leaves of the engine:
//! - `PropertyKey` and `Selector` for resolving which property a rule chain targets
//! - The `Rule` contract every rule kind implements
//! - `RuleContext`, the read-only view a rule receives while evaluating
//!
//! Nothing in this module mutates the validated object. Rules are pure
//! functions of the property value and the containing instance.

mod context;
mod property;
mod rule;

pub use context::RuleContext;
pub use property::{PropertyKey, Selector};
pub(crate) use property::PropertyReader;
pub use rule::{describe_value, Rule};
