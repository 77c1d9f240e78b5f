//! Fluent API for registering rules per property.
//!
//! [`Validator::rule_for`](crate::Validator::rule_for) returns a
//! [`RuleChain`] bound to one registry entry. Each chain call constructs a
//! rule, appends it to that entry, and hands the chain back so calls can be
//! strung together.

pub mod chain;
pub mod macros;

pub use chain::RuleChain;
