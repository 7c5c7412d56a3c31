//! # Parameter Resolver
//!
//! Read-only, typed access to parameters by fully-qualified key.
//!
//! Implementors only supply raw lookup; the typed getters are shared and
//! report `Missing` / `Malformed` uniformly.

use crate::error::ParameterError;
use crate::unit::UnitCategory;
use crate::value::ParameterValue;

/// Typed parameter lookup.
///
/// ## Example
///
/// ```rust
/// use csg_params::{ParameterResolver, ParameterStore, ParameterError, UnitCategory};
///
/// let store = ParameterStore::parse("d:Ge/Shape/RelRotX = 10 mm").unwrap();
/// let err = store.get_double("Ge/Shape/RelRotX", UnitCategory::Angle).unwrap_err();
/// assert!(matches!(err, ParameterError::Malformed { .. }));
/// ```
pub trait ParameterResolver {
    /// Returns the raw value stored under `key`.
    fn value(&self, key: &str) -> Option<&ParameterValue>;

    /// Returns every defined key in sorted order.
    fn parameter_names(&self) -> Vec<String>;

    /// Returns true if `key` is defined.
    fn has_parameter(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Resolves a string parameter.
    fn get_string(&self, key: &str) -> Result<String, ParameterError> {
        let value = self.require(key)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ParameterError::malformed(key, "string", value.describe()))
    }

    /// Resolves a dimensioned parameter in internal units.
    fn get_double(&self, key: &str, category: UnitCategory) -> Result<f64, ParameterError> {
        let value = self.require(key)?;
        value.as_double(category).ok_or_else(|| {
            ParameterError::malformed(key, format!("{} double", category), value.describe())
        })
    }

    /// Resolves a unitless number (integers are accepted).
    fn get_unitless(&self, key: &str) -> Result<f64, ParameterError> {
        let value = self.require(key)?;
        value
            .as_unitless()
            .ok_or_else(|| ParameterError::malformed(key, "unitless double", value.describe()))
    }

    /// Resolves an integer parameter.
    fn get_integer(&self, key: &str) -> Result<i64, ParameterError> {
        match self.require(key)? {
            ParameterValue::Integer(i) => Ok(*i),
            other => Err(ParameterError::malformed(key, "integer", other.describe())),
        }
    }

    /// Resolves a boolean parameter.
    fn get_boolean(&self, key: &str) -> Result<bool, ParameterError> {
        match self.require(key)? {
            ParameterValue::Boolean(b) => Ok(*b),
            other => Err(ParameterError::malformed(key, "boolean", other.describe())),
        }
    }

    /// Returns the raw value or a `Missing` error.
    fn require(&self, key: &str) -> Result<&ParameterValue, ParameterError> {
        self.value(key).ok_or_else(|| ParameterError::missing(key))
    }
}
