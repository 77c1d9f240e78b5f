//! Built-in rule kinds.
//!
//! Comparison rules treat null as valid and reject present non-numeric
//! values with a configuration error. Presence is only checked by
//! [`NotNull`]. New rule kinds implement [`Rule`](crate::core::Rule) and are
//! added to a chain with [`RuleChain::rule`](crate::builder::RuleChain::rule).

mod comparison;
mod message;
mod predicate;
mod required;

pub use comparison::{Comparison, ComparisonRule, InclusiveBetween};
pub use message::WithMessage;
pub use predicate::Must;
pub use required::NotNull;
