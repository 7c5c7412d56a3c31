//! # Units
//!
//! Unit symbols accepted in parameter files and their categories.

use config::units::{
    CENTIMETER, DEGREE, METER, MICROMETER, MILLIMETER, MILLIRADIAN, NANOMETER, RADIAN,
};
use serde::Serialize;
use std::fmt;

/// Physical category a dimensioned parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnitCategory {
    /// Stored in millimeters.
    Length,
    /// Stored in radians.
    Angle,
}

impl UnitCategory {
    /// Returns the category name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Angle => "Angle",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit symbol that may follow a dimensioned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Meter,
    Radian,
    Milliradian,
    Degree,
}

impl Unit {
    /// Every supported unit.
    pub const ALL: [Unit; 8] = [
        Unit::Nanometer,
        Unit::Micrometer,
        Unit::Millimeter,
        Unit::Centimeter,
        Unit::Meter,
        Unit::Radian,
        Unit::Milliradian,
        Unit::Degree,
    ];

    /// Looks up a unit by its symbol.
    ///
    /// # Example
    ///
    /// ```rust
    /// use csg_params::Unit;
    ///
    /// assert_eq!(Unit::from_symbol("cm"), Some(Unit::Centimeter));
    /// assert_eq!(Unit::from_symbol("furlong"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Unit> {
        Unit::ALL.into_iter().find(|unit| unit.symbol() == symbol)
    }

    /// Returns the symbol written in parameter files.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Nanometer => "nm",
            Unit::Micrometer => "um",
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Meter => "m",
            Unit::Radian => "rad",
            Unit::Milliradian => "mrad",
            Unit::Degree => "deg",
        }
    }

    /// Returns the category of this unit.
    pub fn category(&self) -> UnitCategory {
        match self {
            Unit::Nanometer | Unit::Micrometer | Unit::Millimeter | Unit::Centimeter | Unit::Meter => {
                UnitCategory::Length
            }
            Unit::Radian | Unit::Milliradian | Unit::Degree => UnitCategory::Angle,
        }
    }

    /// Returns the factor converting this unit to the internal unit.
    pub fn factor(&self) -> f64 {
        match self {
            Unit::Nanometer => NANOMETER,
            Unit::Micrometer => MICROMETER,
            Unit::Millimeter => MILLIMETER,
            Unit::Centimeter => CENTIMETER,
            Unit::Meter => METER,
            Unit::Radian => RADIAN,
            Unit::Milliradian => MILLIRADIAN,
            Unit::Degree => DEGREE,
        }
    }

    /// Converts a value expressed in this unit to internal units.
    #[inline]
    pub fn to_internal(&self, value: f64) -> f64 {
        value * self.factor()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_symbols_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_symbol(unit.symbol()), Some(unit));
        }
    }

    #[test]
    fn test_symbols_are_case_sensitive() {
        assert_eq!(Unit::from_symbol("CM"), None);
        assert_eq!(Unit::from_symbol("Deg"), None);
    }

    #[test]
    fn test_categories() {
        assert_eq!(Unit::Meter.category(), UnitCategory::Length);
        assert_eq!(Unit::Nanometer.category(), UnitCategory::Length);
        assert_eq!(Unit::Degree.category(), UnitCategory::Angle);
        assert_eq!(Unit::Milliradian.category(), UnitCategory::Angle);
    }

    #[test]
    fn test_conversion_to_internal() {
        assert_relative_eq!(Unit::Centimeter.to_internal(2.5), 25.0);
        assert_relative_eq!(Unit::Meter.to_internal(0.1), 100.0);
        assert_relative_eq!(Unit::Degree.to_internal(180.0), std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(Unit::Milliradian.to_internal(500.0), 0.5);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(UnitCategory::Length.to_string(), "Length");
        assert_eq!(UnitCategory::Angle.to_string(), "Angle");
    }
}
