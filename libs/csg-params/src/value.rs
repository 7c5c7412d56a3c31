//! # Parameter Values
//!
//! Typed values stored under parameter keys. Dimensioned values are kept
//! in internal units together with their category.

use crate::unit::UnitCategory;
use std::fmt;

/// A typed parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    /// `s:` quoted string.
    String(String),
    /// `d:` dimensioned double, already converted to internal units.
    Double { value: f64, category: UnitCategory },
    /// `u:` unitless double.
    Unitless(f64),
    /// `i:` integer.
    Integer(i64),
    /// `b:` boolean.
    Boolean(bool),
}

impl ParameterValue {
    /// Describes the type of this value for diagnostics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use csg_params::{ParameterValue, UnitCategory};
    ///
    /// let value = ParameterValue::Double { value: 1.0, category: UnitCategory::Angle };
    /// assert_eq!(value.describe(), "Angle double");
    /// ```
    pub fn describe(&self) -> String {
        match self {
            ParameterValue::String(_) => "string".to_string(),
            ParameterValue::Double { category, .. } => format!("{} double", category),
            ParameterValue::Unitless(_) => "unitless double".to_string(),
            ParameterValue::Integer(_) => "integer".to_string(),
            ParameterValue::Boolean(_) => "boolean".to_string(),
        }
    }

    /// Returns the string content of a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParameterValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the internal-unit value if this is a double of the given category.
    pub fn as_double(&self, expected: UnitCategory) -> Option<f64> {
        match self {
            ParameterValue::Double { value, category } if *category == expected => Some(*value),
            _ => None,
        }
    }

    /// Returns a plain number for unitless doubles and integers.
    pub fn as_unitless(&self) -> Option<f64> {
        match self {
            ParameterValue::Unitless(n) => Some(*n),
            ParameterValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(s: &str) -> Self {
        ParameterValue::String(s.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(s: String) -> Self {
        ParameterValue::String(s)
    }
}

impl From<bool> for ParameterValue {
    fn from(b: bool) -> Self {
        ParameterValue::Boolean(b)
    }
}

impl From<i64> for ParameterValue {
    fn from(i: i64) -> Self {
        ParameterValue::Integer(i)
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::String(s) => write!(f, "\"{}\"", s),
            ParameterValue::Double { value, category } => match category {
                UnitCategory::Length => write!(f, "{} mm", value),
                UnitCategory::Angle => write!(f, "{} rad", value),
            },
            ParameterValue::Unitless(n) => write!(f, "{}", n),
            ParameterValue::Integer(i) => write!(f, "{}", i),
            ParameterValue::Boolean(b) => write!(f, "{}", if *b { "True" } else { "False" }),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
