//! # Parameter Scope
//!
//! Builds fully-qualified keys for one component instance.
//!
//! ## Example
//!
//! ```rust
//! use csg_params::ParameterScope;
//!
//! let scope = ParameterScope::new("Phantom");
//! assert_eq!(scope.key("Operation"), "Ge/Phantom/Operation");
//! assert_eq!(scope.suffixed("RMax", "_mother"), "Ge/Phantom/RMax_mother");
//! ```

use config::constants::{GEOMETRY_KEY_PREFIX, KEY_SEPARATOR};

/// Key builder scoped to a component instance name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterScope {
    instance: String,
}

impl ParameterScope {
    /// Creates a scope for `instance`.
    pub fn new(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
        }
    }

    /// Returns the instance name.
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// Returns `Ge/<instance>/<field>`.
    pub fn key(&self, field: &str) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            GEOMETRY_KEY_PREFIX,
            self.instance,
            field,
            sep = KEY_SEPARATOR
        )
    }

    /// Returns `Ge/<instance>/<field><suffix>`.
    pub fn suffixed(&self, field: &str, suffix: &str) -> String {
        self.key(&format!("{}{}", field, suffix))
    }

    /// Splits a geometry key into `(instance, field)`.
    ///
    /// Returns `None` for keys outside the geometry namespace or with a
    /// nested field path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use csg_params::ParameterScope;
    ///
    /// assert_eq!(ParameterScope::split_key("Ge/Shape/Parent"), Some(("Shape", "Parent")));
    /// assert_eq!(ParameterScope::split_key("Ph/Default/Modules"), None);
    /// ```
    pub fn split_key(key: &str) -> Option<(&str, &str)> {
        let mut parts = key.split(KEY_SEPARATOR);
        let prefix = parts.next()?;
        let instance = parts.next()?;
        let field = parts.next()?;
        if prefix != GEOMETRY_KEY_PREFIX
            || instance.is_empty()
            || field.is_empty()
            || parts.next().is_some()
        {
            return None;
        }
        Some((instance, field))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key() {
        let scope = ParameterScope::new("Shape");
        assert_eq!(scope.instance(), "Shape");
        assert_eq!(scope.key("Type_mother"), "Ge/Shape/Type_mother");
    }

    #[test]
    fn test_suffixed_with_empty_suffix() {
        let scope = ParameterScope::new("Box1");
        assert_eq!(scope.suffixed("HLX", ""), "Ge/Box1/HLX");
    }

    #[test]
    fn test_split_key_rejects_nested_fields() {
        assert_eq!(ParameterScope::split_key("Ge/A/B/C"), None);
        assert_eq!(ParameterScope::split_key("Ge//Parent"), None);
        assert_eq!(ParameterScope::split_key("Ge/A"), None);
    }
}
