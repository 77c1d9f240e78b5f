//! Property resolution for rule chains.
//!
//! Rust has no way to intercept arbitrary field reads on a stand-in object,
//! so a property is resolved from the accessor's syntax instead. The
//! [`property!`](crate::property) macro turns `property!(Person, age)` into a
//! [`Selector`] named `"age"` whose accessor is `|p: &Person| &p.age`. The
//! accessor makes the compiler reject a selector for a field that does not
//! exist, so renaming a field without updating its rules fails to build.
//!
//! [`Selector::named`] is the explicit-string fallback. Its name shape is
//! checked at configuration time, and the property is looked up by that name
//! in the serialized instance at evaluation time. A key the serialized object
//! leaves out (for example a `None` skipped by `skip_serializing_if`) reads as
//! null, so it passes comparison rules and fails `not_null`.
//! [`Selector::named_in`] additionally checks the name against a sample
//! instance, which catches typos before any validation runs.
//!
//! Keys are serialized names. `property!(Model, field)` uses the field
//! identifier, which is the serialized name unless serde renames the field.
//! For a renamed field write `property!(Model, field as "renamed")` so typed
//! and named selectors resolve to the same registry entry.

use crate::validator::ConfigurationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Reads one property of `T` as a dynamic JSON value.
pub(crate) type PropertyReader<T> =
    Box<dyn Fn(&T) -> Result<Value, ConfigurationError> + Send + Sync>;

/// Stable identifier of a model property, used as the registry's grouping key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyKey(String);

impl PropertyKey {
    /// Parse a property name.
    ///
    /// Only a single identifier is accepted. Paths (`address.city`), method
    /// calls (`len()`), and expressions are rejected, since they do not name
    /// one property. A raw identifier prefix (`r#type`) is stripped.
    pub fn parse(name: &str) -> Result<Self, ConfigurationError> {
        let trimmed = name.trim();
        let ident = trimmed.strip_prefix("r#").unwrap_or(trimmed);

        let reject = |reason: &str| ConfigurationError::UnresolvableSelector {
            selector: name.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = ident.chars();
        match chars.next() {
            None => return Err(reject("property name is empty")),
            Some(first) if !(first.is_ascii_alphabetic() || first == '_') => {
                return Err(reject("property name must start with a letter or underscore"));
            }
            Some(_) => {}
        }

        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            let reason = match bad {
                '.' => "nested property reads are not supported".to_string(),
                '(' | ')' => "method calls are not supported".to_string(),
                other => format!("unexpected character `{other}`"),
            };
            return Err(reject(&reason));
        }

        Ok(Self(ident.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PropertyKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PropertyKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PropertyKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A resolved property: its key plus a way to read its value from `T`.
///
/// # Example
///
/// ```rust
/// use fluent_rules::core::Selector;
/// use fluent_rules::property;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Person {
///     age: Option<u32>,
/// }
///
/// let typed = property!(Person, age)?;
/// assert_eq!(typed.key().as_str(), "age");
///
/// let by_name = Selector::<Person>::named("age")?;
/// assert_eq!(by_name.key(), typed.key());
///
/// assert!(Selector::<Person>::named("address.city").is_err());
/// # Ok::<(), fluent_rules::ConfigurationError>(())
/// ```
pub struct Selector<T> {
    key: PropertyKey,
    reader: PropertyReader<T>,
}

impl<T: 'static> Selector<T> {
    /// Build a selector from a property name and a typed accessor.
    ///
    /// Usually produced by the [`property!`](crate::property) macro, which
    /// derives the name from the accessor so the two cannot drift apart.
    pub fn new<V, F>(name: &str, accessor: F) -> Result<Self, ConfigurationError>
    where
        V: Serialize + ?Sized,
        F: Fn(&T) -> &V + Send + Sync + 'static,
    {
        let key = PropertyKey::parse(name)?;
        let property = key.clone();
        let reader = move |instance: &T| {
            serde_json::to_value(accessor(instance)).map_err(|e| {
                ConfigurationError::Serialization {
                    property: property.to_string(),
                    message: e.to_string(),
                }
            })
        };

        Ok(Self {
            key,
            reader: Box::new(reader),
        })
    }

    /// Build a selector from a property name alone.
    ///
    /// The instance is serialized on each read and the property is looked up
    /// by name. A key missing from the serialized object reads as null. Only a
    /// model that does not serialize to an object is reported as
    /// [`ConfigurationError::UnknownProperty`].
    pub fn named(name: &str) -> Result<Self, ConfigurationError>
    where
        T: Serialize,
    {
        let key = PropertyKey::parse(name)?;
        let property = key.clone();
        let reader = move |instance: &T| match serialize_fields(instance, &property)? {
            Some(mut fields) => Ok(fields.remove(property.as_str()).unwrap_or(Value::Null)),
            None => Err(ConfigurationError::UnknownProperty {
                property: property.to_string(),
            }),
        };

        Ok(Self {
            key,
            reader: Box::new(reader),
        })
    }

    /// Like [`named`](Self::named), but the name must appear in the
    /// serialized `sample`.
    ///
    /// Use a sample that serializes every field. Fields skipped when empty
    /// are absent from a default sample and would be rejected.
    pub fn named_in(name: &str, sample: &T) -> Result<Self, ConfigurationError>
    where
        T: Serialize,
    {
        let selector = Self::named(name)?;
        let known = serialize_fields(sample, &selector.key)?
            .is_some_and(|fields| fields.contains_key(selector.key.as_str()));

        if known {
            Ok(selector)
        } else {
            Err(ConfigurationError::UnknownProperty {
                property: selector.key.to_string(),
            })
        }
    }
}

/// Serialize `instance`, returning its fields if it is a JSON object.
fn serialize_fields<T: Serialize>(
    instance: &T,
    property: &PropertyKey,
) -> Result<Option<serde_json::Map<String, Value>>, ConfigurationError> {
    match serde_json::to_value(instance) {
        Ok(Value::Object(fields)) => Ok(Some(fields)),
        Ok(_) => Ok(None),
        Err(e) => Err(ConfigurationError::Serialization {
            property: property.to_string(),
            message: e.to_string(),
        }),
    }
}

impl<T> Selector<T> {
    pub fn key(&self) -> &PropertyKey {
        &self.key
    }

    pub(crate) fn into_parts(self) -> (PropertyKey, PropertyReader<T>) {
        (self.key, self.reader)
    }
}

impl<T> fmt::Debug for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Person {
        name: String,
        age: Option<u32>,
        #[serde(rename = "type")]
        kind: u8,
    }

    fn person() -> Person {
        Person {
            name: "Ada".to_string(),
            age: Some(36),
            kind: 1,
        }
    }

    #[test]
    fn parse_accepts_single_identifiers() {
        assert_eq!(PropertyKey::parse("age").unwrap().as_str(), "age");
        assert_eq!(PropertyKey::parse("_private2").unwrap().as_str(), "_private2");
        assert_eq!(PropertyKey::parse(" age ").unwrap().as_str(), "age");
    }

    #[test]
    fn parse_strips_raw_identifier_prefix() {
        assert_eq!(PropertyKey::parse("r#type").unwrap().as_str(), "type");
    }

    #[test]
    fn parse_rejects_other_shapes() {
        for name in ["", "address.city", "len()", "age + 1", "1st", "x[0]"] {
            let result = PropertyKey::parse(name);
            assert!(
                matches!(result, Err(ConfigurationError::UnresolvableSelector { .. })),
                "expected `{name}` to be rejected"
            );
        }
    }

    #[test]
    fn parse_explains_nested_reads() {
        let err = PropertyKey::parse("address.city").unwrap_err();
        assert!(err.to_string().contains("nested property reads"));
    }

    #[test]
    fn key_compares_with_str() {
        let key = PropertyKey::parse("age").unwrap();
        assert_eq!(key, "age");
        assert_eq!(key.to_string(), "age");
    }

    #[test]
    fn typed_selector_reads_through_accessor() {
        let selector = Selector::new("age", |p: &Person| &p.age).unwrap();
        let (key, reader) = selector.into_parts();

        assert_eq!(key, "age");
        assert_eq!(reader(&person()).unwrap(), json!(36));
    }

    #[test]
    fn typed_selector_reads_none_as_null() {
        let selector = Selector::new("age", |p: &Person| &p.age).unwrap();
        let (_, reader) = selector.into_parts();
        let nobody = Person {
            age: None,
            ..person()
        };

        assert_eq!(reader(&nobody).unwrap(), Value::Null);
    }

    #[test]
    fn named_selector_reads_serialized_field() {
        let (_, reader) = Selector::<Person>::named("name").unwrap().into_parts();
        assert_eq!(reader(&person()).unwrap(), json!("Ada"));
    }

    #[test]
    fn named_selector_uses_serialized_names() {
        let (_, reader) = Selector::<Person>::named("type").unwrap().into_parts();
        assert_eq!(reader(&person()).unwrap(), json!(1));
    }

    #[test]
    fn named_selector_reads_skipped_field_as_null() {
        #[derive(Serialize)]
        struct Sparse {
            #[serde(skip_serializing_if = "Option::is_none")]
            age: Option<u32>,
        }

        let (_, reader) = Selector::<Sparse>::named("age").unwrap().into_parts();

        assert_eq!(reader(&Sparse { age: None }).unwrap(), Value::Null);
        assert_eq!(reader(&Sparse { age: Some(4) }).unwrap(), json!(4));
    }

    #[test]
    fn named_in_rejects_names_missing_from_sample() {
        let result = Selector::<Person>::named_in("height", &person());

        assert_eq!(
            result.map(|selector| selector.key().clone()),
            Err(ConfigurationError::UnknownProperty {
                property: "height".to_string()
            })
        );
    }

    #[test]
    fn named_in_accepts_serialized_names() {
        let selector = Selector::<Person>::named_in("type", &person()).unwrap();
        assert_eq!(selector.key(), "type");
    }

    #[test]
    fn named_selector_rejects_non_object_models() {
        let (_, reader) = Selector::<u32>::named("value").unwrap().into_parts();
        assert!(matches!(
            reader(&5),
            Err(ConfigurationError::UnknownProperty { .. })
        ));
    }
}
