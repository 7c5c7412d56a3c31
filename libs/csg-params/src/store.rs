//! # Parameter Store
//!
//! In-memory parameter table. Later definitions of a key override earlier
//! ones, both within one file and when stores are merged.
//!
//! ## Example
//!
//! ```rust
//! use csg_params::{ParameterResolver, ParameterStore, Unit, UnitCategory};
//!
//! let mut store = ParameterStore::new();
//! store.set_string("Ge/Shape/Type_mother", "TsBox");
//! store.set_double("Ge/Shape/HLX_mother", 1.0, Unit::Centimeter);
//!
//! assert_eq!(store.get_double("Ge/Shape/HLX_mother", UnitCategory::Length).unwrap(), 10.0);
//! ```

use crate::error::ParameterError;
use crate::parser::parse_parameters;
use crate::resolver::ParameterResolver;
use crate::unit::Unit;
use crate::value::ParameterValue;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Parameter table keyed by fully-qualified name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterStore {
    values: BTreeMap<String, ParameterValue>,
}

impl ParameterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a parameter file into a store.
    pub fn parse(source: &str) -> Result<Self, ParameterError> {
        let mut store = Self::new();
        for definition in parse_parameters(source)? {
            if let Some(previous) = store.insert(definition.key.clone(), definition.value) {
                tracing::debug!(
                    key = %definition.key,
                    line = definition.line,
                    previous = %previous,
                    "Parameter overridden"
                );
            }
        }
        Ok(store)
    }

    /// Inserts a value, returning the one it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: ParameterValue,
    ) -> Option<ParameterValue> {
        self.values.insert(key.into(), value)
    }

    /// Removes a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<ParameterValue> {
        self.values.remove(key)
    }

    /// Sets a string parameter.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.insert(key, ParameterValue::String(value.into()));
        self
    }

    /// Sets a dimensioned parameter given in `unit`.
    pub fn set_double(&mut self, key: impl Into<String>, value: f64, unit: Unit) -> &mut Self {
        self.insert(
            key,
            ParameterValue::Double {
                value: unit.to_internal(value),
                category: unit.category(),
            },
        );
        self
    }

    /// Sets a unitless parameter.
    pub fn set_unitless(&mut self, key: impl Into<String>, value: f64) -> &mut Self {
        self.insert(key, ParameterValue::Unitless(value));
        self
    }

    /// Sets an integer parameter.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i64) -> &mut Self {
        self.insert(key, ParameterValue::Integer(value));
        self
    }

    /// Sets a boolean parameter.
    pub fn set_boolean(&mut self, key: impl Into<String>, value: bool) -> &mut Self {
        self.insert(key, ParameterValue::Boolean(value));
        self
    }

    /// Applies every definition of `overrides` on top of this store.
    ///
    /// Used for parameter-update passes: the updated store is then handed to
    /// a fresh construction pass.
    pub fn merge(&mut self, overrides: &ParameterStore) {
        for (key, value) in &overrides.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Returns the number of defined parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no parameter is defined.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl ParameterResolver for ParameterStore {
    fn value(&self, key: &str) -> Option<&ParameterValue> {
        self.values.get(key)
    }

    fn parameter_names(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}

impl FromStr for ParameterStore {
    type Err = ParameterError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse(source)
    }
}

// =============================================================================
// TESTS
// =============================================================================
