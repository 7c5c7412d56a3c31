//! # Geometry Errors
//!
//! Error types for component construction.
//!
//! Errors fall in two groups:
//!
//! - configuration errors: unknown literals, missing or malformed
//!   parameters, broken tree links, name collisions
//! - construction errors: the solid kernel rejected the resolved dimensions,
//!   or a combinator was driven out of order

use csg_params::ParameterError;
use csg_solid::SolidError;
use thiserror::Error;

/// Errors raised while constructing geometry components.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A value outside its closed set of accepted values.
    #[error(
        "Invalid configuration for component '{component}': {field} = \"{value}\" (expected {expected})"
    )]
    InvalidConfiguration {
        component: String,
        field: String,
        value: String,
        expected: &'static str,
    },

    /// A parameter is missing or has the wrong type.
    #[error("Parameter error in component '{component}': {source}")]
    Parameter {
        component: String,
        #[source]
        source: ParameterError,
    },

    /// The solid kernel rejected a dimension.
    #[error("Solid construction failed in component '{component}': {source}")]
    Solid {
        component: String,
        #[source]
        source: SolidError,
    },

    /// A solid or volume name is already registered.
    #[error("Duplicate {kind} name '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    /// `Type` names no known component.
    #[error("Unknown component type '{type_name}' for component '{component}'")]
    UnknownComponentType { component: String, type_name: String },

    /// `Parent` names no defined component.
    #[error("Component '{component}' has unknown parent '{parent}'")]
    UnknownParent { component: String, parent: String },

    /// A combinator was executed outside its `Idle` state.
    #[error("Combinator for component '{component}' cannot execute from state {state}")]
    InvalidState {
        component: String,
        state: &'static str,
    },
}

impl GeometryError {
    /// Creates an invalid configuration error.
    pub fn invalid_configuration(
        component: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidConfiguration {
            component: component.into(),
            field: field.into(),
            value: value.into(),
            expected,
        }
    }

    /// Wraps a parameter error for `component`.
    pub fn parameter(component: impl Into<String>, source: ParameterError) -> Self {
        Self::Parameter {
            component: component.into(),
            source,
        }
    }

    /// Wraps a solid error for `component`.
    pub fn solid(component: impl Into<String>, source: SolidError) -> Self {
        Self::Solid {
            component: component.into(),
            source,
        }
    }

    /// Creates a duplicate name error.
    pub fn duplicate(kind: &'static str, name: impl Into<String>) -> Self {
        Self::DuplicateName {
            kind,
            name: name.into(),
        }
    }

    /// Returns true for errors caused by the parameter set itself.
    pub fn is_configuration_error(&self) -> bool {
        match self {
            Self::InvalidConfiguration { .. }
            | Self::Parameter { .. }
            | Self::DuplicateName { .. }
            | Self::UnknownComponentType { .. }
            | Self::UnknownParent { .. } => true,
            Self::Solid { .. } | Self::InvalidState { .. } => false,
        }
    }

    /// Returns the component the error belongs to, if any.
    pub fn component(&self) -> Option<&str> {
        match self {
            Self::InvalidConfiguration { component, .. }
            | Self::Parameter { component, .. }
            | Self::Solid { component, .. }
            | Self::UnknownComponentType { component, .. }
            | Self::UnknownParent { component, .. }
            | Self::InvalidState { component, .. } => Some(component),
            Self::DuplicateName { .. } => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_message() {
        let err = GeometryError::invalid_configuration(
            "Phantom",
            "Operation",
            "Xor",
            "Union | Subtraction | Intersection",
        );
        let text = err.to_string();
        assert!(text.contains("Phantom"));
        assert!(text.contains("Operation = \"Xor\""));
        assert!(err.is_configuration_error());
        assert_eq!(err.component(), Some("Phantom"));
    }

    #[test]
    fn test_parameter_error_chains_source() {
        use std::error::Error as _;
        let err = GeometryError::parameter("Phantom", ParameterError::missing("Ge/Phantom/HLX"));
        assert!(err.is_configuration_error());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("Ge/Phantom/HLX"));
    }

    #[test]
    fn test_solid_error_is_construction_error() {
        let err = GeometryError::solid(
            "Phantom",
            SolidError::invalid_dimension("Phantom_mother", "HLX", 0.0, "must be positive"),
        );
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn test_duplicate_has_no_component() {
        let err = GeometryError::duplicate("solid", "Phantom");
        assert_eq!(err.component(), None);
        assert_eq!(err.to_string(), "Duplicate solid name 'Phantom'");
    }
}
