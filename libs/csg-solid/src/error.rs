//! # Solid Errors
//!
//! Error types for solid construction.

use thiserror::Error;

/// Errors raised when a solid is constructed from invalid dimensions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolidError {
    /// A length is zero, negative or not finite.
    #[error("Invalid dimension for solid '{solid}': {parameter} = {value} mm ({requirement})")]
    InvalidDimension {
        solid: String,
        parameter: &'static str,
        value: f64,
        requirement: &'static str,
    },

    /// An angle is outside the range the solid accepts.
    #[error("Invalid angle for solid '{solid}': {parameter} = {value} rad ({requirement})")]
    InvalidAngle {
        solid: String,
        parameter: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

impl SolidError {
    /// Creates an invalid dimension error.
    pub fn invalid_dimension(
        solid: impl Into<String>,
        parameter: &'static str,
        value: f64,
        requirement: &'static str,
    ) -> Self {
        Self::InvalidDimension {
            solid: solid.into(),
            parameter,
            value,
            requirement,
        }
    }

    /// Creates an invalid angle error.
    pub fn invalid_angle(
        solid: impl Into<String>,
        parameter: &'static str,
        value: f64,
        requirement: &'static str,
    ) -> Self {
        Self::InvalidAngle {
            solid: solid.into(),
            parameter,
            value,
            requirement,
        }
    }

    /// Returns the name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidDimension { parameter, .. } | Self::InvalidAngle { parameter, .. } => {
                parameter
            }
        }
    }
}

/// Returns an error unless `value` is finite and strictly positive.
pub(crate) fn require_positive(
    solid: &str,
    parameter: &'static str,
    value: f64,
) -> Result<f64, SolidError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SolidError::invalid_dimension(
            solid,
            parameter,
            value,
            "must be positive",
        ))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SolidError::invalid_dimension("Shape_mother", "HLX", -1.0, "must be positive");
        let text = err.to_string();
        assert!(text.contains("Shape_mother"));
        assert!(text.contains("HLX = -1"));
        assert_eq!(err.parameter(), "HLX");
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("s", "RMax", 2.0), Ok(2.0));
        assert!(require_positive("s", "RMax", 0.0).is_err());
        assert!(require_positive("s", "RMax", f64::NAN).is_err());
        assert!(require_positive("s", "RMax", f64::INFINITY).is_err());
    }
}
