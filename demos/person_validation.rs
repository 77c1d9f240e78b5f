//! Person Validation
//!
//! This example demonstrates a reusable validator definition for a model.
//!
//! Key concepts:
//! - Resolving properties with `property!` instead of string literals
//! - Chaining several rules on one property
//! - Seeing every failure in one pass
//! - Configuration errors kept apart from validation failures
//!
//! Run with: cargo run --example person_validation

use fluent_rules::{
    property, ConfigurationError, ValidationResultExt, Validator, ValidatorDefinition,
};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct Person {
    name: Option<String>,
    age: Value,
    retirement_age: u32,
}

struct PersonValidator;

impl ValidatorDefinition<Person> for PersonValidator {
    fn define(&self, validator: &mut Validator<Person>) -> Result<(), ConfigurationError> {
        validator.rule_for(property!(Person, name)?).not_null();
        validator
            .rule_for(property!(Person, age)?)
            .greater_than_or_equal_to(0)
            .less_than_or_equal_to(65)
            .must(
                |age, person: &Person| {
                    age.as_f64()
                        .map_or(true, |age| age <= f64::from(person.retirement_age))
                },
                "Value must not exceed the retirement age",
            );
        Ok(())
    }
}

fn report(label: &str, validator: &Validator<Person>, person: &Person) {
    println!("{label}");
    match validator.validate(person) {
        Ok(result) if result.is_success() => println!("  valid\n"),
        Ok(result) => {
            for error in result.into_errors() {
                println!("  {error}");
            }
            println!();
        }
        Err(error) => println!("  configuration error: {error}\n"),
    }
}

fn main() -> Result<(), ConfigurationError> {
    println!("=== Person Validation Example ===\n");

    let validator = Validator::from_definition(&PersonValidator)?;

    report(
        "Example 1: Valid person",
        &validator,
        &Person {
            name: Some("Ada".to_string()),
            age: json!(36),
            retirement_age: 60,
        },
    );

    report(
        "Example 2: Every failure reported at once",
        &validator,
        &Person {
            name: None,
            age: json!(70),
            retirement_age: 62,
        },
    );

    report(
        "Example 3: Absent age passes comparison rules",
        &validator,
        &Person {
            name: Some("Grace".to_string()),
            age: Value::Null,
            retirement_age: 65,
        },
    );

    report(
        "Example 4: Wrong type is a configuration error",
        &validator,
        &Person {
            name: Some("Linus".to_string()),
            age: json!("old"),
            retirement_age: 65,
        },
    );

    Ok(())
}
