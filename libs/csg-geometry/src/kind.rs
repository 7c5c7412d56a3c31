//! # Kinds
//!
//! Shape and operation kinds, resolved once from configuration literals.
//!
//! | Kind        | Accepted literals                         |
//! |-------------|-------------------------------------------|
//! | `Box`       | `TsBox`, `Box`                            |
//! | `Cylinder`  | `TsCylinder`, `Cylinder`                  |
//! | `Sphere`    | `TsSphere`, `Sphere`                      |
//! | operations  | `Union`, `Subtraction`, `Intersection`    |
//!
//! Matching is exact and case-sensitive. Any other literal is rejected.

use std::fmt;

use csg_solid::BooleanOperation;
use serde::Serialize;

use crate::error::GeometryError;

// =============================================================================
// SHAPE KIND
// =============================================================================

/// Primitive shape a mother or daughter is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    Box,
    Cylinder,
    Sphere,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Box, ShapeKind::Cylinder, ShapeKind::Sphere];

    /// Description of the accepted literals, for diagnostics.
    pub const EXPECTED: &'static str = "TsBox | TsCylinder | TsSphere";

    /// Matches a literal against the closed set.
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "TsBox" | "Box" => Some(ShapeKind::Box),
            "TsCylinder" | "Cylinder" => Some(ShapeKind::Cylinder),
            "TsSphere" | "Sphere" => Some(ShapeKind::Sphere),
            _ => None,
        }
    }

    /// Resolves `value` of `field` or fails with `InvalidConfiguration`.
    pub fn resolve(component: &str, field: &str, value: &str) -> Result<Self, GeometryError> {
        Self::from_literal(value).ok_or_else(|| {
            GeometryError::invalid_configuration(component, field, value, Self::EXPECTED)
        })
    }

    /// Component type name.
    pub fn type_name(self) -> &'static str {
        match self {
            ShapeKind::Box => "TsBox",
            ShapeKind::Cylinder => "TsCylinder",
            ShapeKind::Sphere => "TsSphere",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

// =============================================================================
// OPERATION KIND
// =============================================================================

/// Boolean operation applied to mother and placed daughter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperationKind {
    Union,
    Subtraction,
    Intersection,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Union,
        OperationKind::Subtraction,
        OperationKind::Intersection,
    ];

    pub const EXPECTED: &'static str = "Union | Subtraction | Intersection";

    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "Union" => Some(OperationKind::Union),
            "Subtraction" => Some(OperationKind::Subtraction),
            "Intersection" => Some(OperationKind::Intersection),
            _ => None,
        }
    }

    pub fn resolve(component: &str, field: &str, value: &str) -> Result<Self, GeometryError> {
        Self::from_literal(value).ok_or_else(|| {
            GeometryError::invalid_configuration(component, field, value, Self::EXPECTED)
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Union => "Union",
            OperationKind::Subtraction => "Subtraction",
            OperationKind::Intersection => "Intersection",
        }
    }
}

impl From<OperationKind> for BooleanOperation {
    fn from(kind: OperationKind) -> Self {
        match kind {
            OperationKind::Union => BooleanOperation::Union,
            OperationKind::Subtraction => BooleanOperation::Subtraction,
            OperationKind::Intersection => BooleanOperation::Intersection,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TESTS
// =============================================================================
