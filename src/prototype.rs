//! Prototype: a registry of templates that are deep-copied and customized
//! instead of constructed from scratch.
//!
//! Clones own all of their data, so changing one never reaches the template
//! or any other clone.
//!
//! Run with: cargo run --bin p5_prototype

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::error::{PatternError, Result};

/// Something that can stand in as a template.
pub trait Prototype: Clone {
    /// Independent deep copy.
    fn clone_prototype(&self) -> Self {
        self.clone()
    }

    /// Override a single named attribute on a fresh copy.
    fn set_attribute(&mut self, name: &str, value: Value) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub color: String,
    pub extras: BTreeMap<String, Value>,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, model: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            color: color.into(),
            extras: BTreeMap::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

fn string_attribute(name: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(PatternError::invalid_attribute(name, "a string")),
    }
}

impl Prototype for Vehicle {
    fn set_attribute(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "make" => self.make = string_attribute(name, value)?,
            "model" => self.model = string_attribute(name, value)?,
            "color" => self.color = string_attribute(name, value)?,
            _ => {
                self.extras.insert(name.to_string(), value);
            }
        }
        Ok(())
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.color, self.make, self.model)?;
        if self.extras.is_empty() {
            return Ok(());
        }

        let extras: Vec<String> = self
            .extras
            .iter()
            .map(|(key, value)| match value {
                Value::String(s) => format!("{}: {}", key, s),
                other => format!("{}: {}", key, other),
            })
            .collect();
        write!(f, " ({})", extras.join(", "))
    }
}

/// Prototype manager: named templates, handed out as fresh copies.
#[derive(Debug)]
pub struct PrototypeRegistry<P: Prototype> {
    prototypes: HashMap<String, P>,
}

impl<P: Prototype> Default for PrototypeRegistry<P> {
    fn default() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }
}

impl<P: Prototype> PrototypeRegistry<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a template under `name`, returning the one it replaced.
    pub fn register(&mut self, name: impl Into<String>, prototype: P) -> Option<P> {
        let name = name.into();
        debug!(name = %name, "registering prototype");
        self.prototypes.insert(name, prototype)
    }

    /// Removing a name that was never registered is not an error.
    pub fn unregister(&mut self, name: &str) -> Option<P> {
        self.prototypes.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.prototypes.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.prototypes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    pub fn clone(&self, name: &str) -> Result<P> {
        let template = self
            .prototypes
            .get(name)
            .ok_or_else(|| PatternError::UnknownPrototype(name.to_string()))?;
        debug!(name, "cloning prototype");
        Ok(template.clone_prototype())
    }

    /// Clone `name`, then apply each attribute override in order.
    pub fn clone_with<I, K>(&self, name: &str, attrs: I) -> Result<P>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut copy = self.clone(name)?;
        for (key, value) in attrs {
            copy.set_attribute(key.as_ref(), value)?;
        }
        Ok(copy)
    }
}

pub fn demo() -> Result<Vec<String>> {
    let mut registry = PrototypeRegistry::new();

    let base_car = Vehicle::new("Toyota", "Corolla", "Blue");
    registry.register("base_car", base_car.clone());

    let premium_car = Vehicle::new("BMW", "5 Series", "Black")
        .with_extra("engine", "V6")
        .with_extra("navigation", true)
        .with_extra("sunroof", true);
    registry.register("premium_car", premium_car);

    let car1 = registry.clone_with("base_car", [("color", Value::from("Red"))])?;
    let car2 = registry.clone_with(
        "premium_car",
        [("color", Value::from("Silver")), ("sunroof", Value::from(false))],
    )?;

    // A completely different car, starting from the same template.
    let mut car3 = registry.clone("base_car")?;
    car3.make = "Honda".to_string();
    car3.model = "Civic".to_string();
    car3.color = "White".to_string();
    car3.extras.insert("seats".to_string(), Value::from(5));

    Ok(vec![
        format!("Original base car: {}", base_car),
        format!("Cloned car 1: {}", car1),
        format!("Cloned premium car: {}", car2),
        format!("Custom new car: {}", car3),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn registry() -> PrototypeRegistry<Vehicle> {
        let mut registry = PrototypeRegistry::new();
        registry.register("base_car", Vehicle::new("Toyota", "Corolla", "Blue"));
        registry.register(
            "premium_car",
            Vehicle::new("BMW", "5 Series", "Black").with_extra("engine", "V6"),
        );
        registry
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = registry().clone("spaceship").unwrap_err();
        assert!(matches!(err, PatternError::UnknownPrototype(ref name) if name == "spaceship"));
        assert_eq!(err.to_string(), "No prototype registered with name: spaceship");
    }

    #[test]
    fn test_clones_do_not_share_extras() {
        let registry = registry();
        let mut first = registry.clone("premium_car").unwrap();
        let second = registry.clone("premium_car").unwrap();

        first.extras.insert("seats".to_string(), json!(7));
        first.extras.insert("engine".to_string(), json!("V8"));

        assert_eq!(second.extras.get("engine"), Some(&json!("V6")));
        assert!(!second.extras.contains_key("seats"));
        assert_eq!(
            registry.clone("premium_car").unwrap().extras.get("engine"),
            Some(&json!("V6"))
        );
    }

    #[test]
    fn test_clone_with_overrides() {
        let car = registry()
            .clone_with("premium_car", [("color", json!("Silver")), ("sunroof", json!(false))])
            .unwrap();

        assert_eq!(car.color, "Silver");
        assert_eq!(car.extras.get("sunroof"), Some(&json!(false)));
    }

    #[test]
    fn test_clone_with_rejects_non_string_field() {
        let err = registry()
            .clone_with("base_car", [("color", json!(42))])
            .unwrap_err();
        assert!(matches!(err, PatternError::InvalidAttribute { ref name, .. } if name == "color"));
    }

    #[test]
    fn test_register_and_unregister() {
        let mut registry = registry();
        assert_eq!(registry.names(), vec!["base_car", "premium_car"]);

        let replaced = registry.register("base_car", Vehicle::new("Kia", "Rio", "Green"));
        assert_eq!(replaced.map(|v| v.make), Some("Toyota".to_string()));

        assert!(registry.unregister("base_car").is_some());
        assert!(registry.unregister("base_car").is_none());
        assert!(!registry.contains("base_car"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_display() {
        let plain = Vehicle::new("Toyota", "Corolla", "Blue");
        assert_eq!(plain.to_string(), "Blue Toyota Corolla");

        let loaded = plain.with_extra("seats", 5).with_extra("engine", "V6");
        assert_eq!(loaded.to_string(), "Blue Toyota Corolla (engine: V6, seats: 5)");
    }

    #[test]
    fn test_demo_output() {
        let lines = demo().unwrap();
        assert_eq!(
            lines,
            vec![
                "Original base car: Blue Toyota Corolla",
                "Cloned car 1: Red Toyota Corolla",
                "Cloned premium car: Silver BMW 5 Series (engine: V6, navigation: true, sunroof: false)",
                "Custom new car: White Honda Civic (seats: 5)",
            ]
        );
    }

    proptest! {
        #[test]
        fn test_mutating_a_clone_never_leaks(
            color in "[a-zA-Z]{1,12}",
            key in "extra_[a-z]{1,8}",
            value in any::<i64>(),
        ) {
            let registry = registry();
            let template = registry.clone("premium_car").unwrap();

            let mut first = registry.clone("premium_car").unwrap();
            let second = registry.clone("premium_car").unwrap();

            first.set_attribute("color", Value::from(color)).unwrap();
            first.set_attribute(&key, Value::from(value)).unwrap();
            first.extras.clear();

            prop_assert_eq!(&second, &template);
            prop_assert_eq!(registry.clone("premium_car").unwrap(), template);
        }
    }
}
