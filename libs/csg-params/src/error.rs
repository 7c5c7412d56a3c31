//! # Parameter Errors
//!
//! Error types for parameter parsing and resolution.

use thiserror::Error;

/// Errors raised while parsing or resolving parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// No parameter is defined under the key.
    #[error("Missing parameter: {key}")]
    Missing { key: String },

    /// The parameter exists but has the wrong type or unit category.
    #[error("Malformed parameter {key}: expected {expected}, found {found}")]
    Malformed {
        key: String,
        expected: String,
        found: String,
    },

    /// A line of a parameter file could not be parsed.
    #[error("Syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// A dimensioned value carries a unit symbol that is not known.
    #[error("Unknown unit '{unit}' on line {line}")]
    UnknownUnit { line: usize, unit: String },
}

impl ParameterError {
    /// Creates a missing parameter error.
    pub fn missing(key: impl Into<String>) -> Self {
        Self::Missing { key: key.into() }
    }

    /// Creates a malformed parameter error.
    pub fn malformed(
        key: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::Malformed {
            key: key.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates a syntax error for a 1-based line number.
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }

    /// Returns the parameter key the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Missing { key } | Self::Malformed { key, .. } => Some(key),
            Self::Syntax { .. } | Self::UnknownUnit { .. } => None,
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
    fn test_missing_display() {
        let err = ParameterError::missing("Ge/Shape/RMax_mother");
        assert_eq!(err.to_string(), "Missing parameter: Ge/Shape/RMax_mother");
        assert_eq!(err.key(), Some("Ge/Shape/RMax_mother"));
    }

    #[test]
    fn test_malformed_display() {
        let err = ParameterError::malformed("Ge/Shape/RelRotX", "Angle double", "Length double");
        assert!(err.to_string().contains("expected Angle double"));
        assert!(err.to_string().contains("found Length double"));
    }

    #[test]
    fn test_syntax_has_no_key() {
        let err = ParameterError::syntax(3, "expected '='");
        assert_eq!(err.key(), None);
        assert!(err.to_string().contains("line 3"));
    }
}
