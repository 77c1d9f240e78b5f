//! Macros for resolving properties from accessor syntax.

/// Build a [`Selector`](crate::core::Selector) for a model field.
///
/// The property name is taken from the field identifier, and the generated
/// accessor makes the compiler check that the field exists on the model.
/// Only a single field name is accepted; nested paths and method calls do not
/// match the macro's grammar.
///
/// The key is the field identifier. When serde renames the field, pass the
/// serialized name with `as` so the key matches what
/// [`Validator::rule_for_name`](crate::Validator::rule_for_name) resolves:
/// `property!(Model, kind as "type")`. The accessor still reads `kind`.
///
/// Expands to a `Result<Selector<Model>, ConfigurationError>`.
///
/// # Example
///
/// ```
/// use fluent_rules::{property, Validator};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Person {
///     age: Option<u32>,
/// }
///
/// let mut validator = Validator::<Person>::new();
/// validator
///     .rule_for(property!(Person, age)?)
///     .less_than_or_equal_to(65);
/// # Ok::<(), fluent_rules::ConfigurationError>(())
/// ```
#[macro_export]
macro_rules! property {
    ($model:ty, $field:ident as $name:literal) => {
        $crate::core::Selector::<$model>::new($name, |model: &$model| &model.$field)
    };
    ($model:ty, $field:ident) => {
        $crate::core::Selector::<$model>::new(stringify!($field), |model: &$model| &model.$field)
    };
}

/// Resolve a field and open a rule chain for it in one step.
///
/// Expands to a `Result<RuleChain<'_, Model>, ConfigurationError>`.
///
/// # Example
///
/// ```
/// use fluent_rules::{rule_for, Validator};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Person {
///     age: Option<u32>,
/// }
///
/// let mut validator = Validator::<Person>::new();
/// rule_for!(validator, Person, age)?.not_null().greater_than(0);
/// assert_eq!(validator.rule_count("age"), 2);
/// # Ok::<(), fluent_rules::ConfigurationError>(())
/// ```
#[macro_export]
macro_rules! rule_for {
    ($validator:expr, $model:ty, $field:ident $(as $name:literal)?) => {
        match $crate::property!($model, $field $(as $name)?) {
            ::std::result::Result::Ok(selector) => ::std::result::Result::Ok($validator.rule_for(selector)),
            ::std::result::Result::Err(error) => ::std::result::Result::Err(error),
        }
    };
}
