//! # Primitive Factory
//!
//! Reads the dimensions of one primitive and builds its solid.
//!
//! ## Keys
//!
//! Field names carry a suffix: `_mother` and `_daughter` inside a combinator,
//! empty for a plain primitive component.
//!
//! | Kind       | Fields                                  |
//! |------------|-----------------------------------------|
//! | `Box`      | `HLX`, `HLY`, `HLZ`                     |
//! | `Cylinder` | `RMax`, `SPhi`, `DPhi`, `HL`            |
//! | `Sphere`   | `RMax`, `SPhi`, `DPhi`, `STheta`, `DTheta` |
//!
//! The inner radius of cylinders and spheres is always zero.

use csg_params::{ParameterError, ParameterResolver, ParameterScope, UnitCategory};
use csg_solid::{BoxSolid, PrimitiveSolid, SolidError, SphereSection, Tubs};
use serde::Serialize;

use crate::kind::ShapeKind;

/// Resolved dimensions of one primitive, lengths in mm and angles in rad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PrimitiveSpec {
    Box {
        half_x: f64,
        half_y: f64,
        half_z: f64,
    },
    Cylinder {
        r_max: f64,
        start_phi: f64,
        delta_phi: f64,
        half_z: f64,
    },
    Sphere {
        r_max: f64,
        start_phi: f64,
        delta_phi: f64,
        start_theta: f64,
        delta_theta: f64,
    },
}

impl PrimitiveSpec {
    pub fn kind(&self) -> ShapeKind {
        match self {
            PrimitiveSpec::Box { .. } => ShapeKind::Box,
            PrimitiveSpec::Cylinder { .. } => ShapeKind::Cylinder,
            PrimitiveSpec::Sphere { .. } => ShapeKind::Sphere,
        }
    }

    /// Inner radius; zero for every kind.
    pub fn r_min(&self) -> f64 {
        0.0
    }

    /// Builds the kernel solid named `name`.
    pub fn build_solid(&self, name: impl Into<String>) -> Result<PrimitiveSolid, SolidError> {
        let solid = match *self {
            PrimitiveSpec::Box {
                half_x,
                half_y,
                half_z,
            } => BoxSolid::new(name, half_x, half_y, half_z)?.into(),
            PrimitiveSpec::Cylinder {
                r_max,
                start_phi,
                delta_phi,
                half_z,
            } => Tubs::new(name, r_max, half_z, start_phi, delta_phi)?.into(),
            PrimitiveSpec::Sphere {
                r_max,
                start_phi,
                delta_phi,
                start_theta,
                delta_theta,
            } => SphereSection::new(name, r_max, start_phi, delta_phi, start_theta, delta_theta)?
                .into(),
        };
        Ok(solid)
    }
}

/// Reads the dimensions of a `kind` primitive from the `<field><suffix>` keys of `scope`.
///
/// ## Parameters
///
/// - `resolver`: parameter source
/// - `scope`: owning component instance
/// - `kind`: shape to read
/// - `suffix`: `_mother`, `_daughter` or empty
///
/// ## Returns
///
/// The primitive's dimensions, or the first missing or malformed parameter.
///
/// # Example
///
/// ```rust
/// use csg_geometry::{build_primitive, PrimitiveSpec, ShapeKind};
/// use csg_params::{ParameterScope, ParameterStore};
///
/// let store = ParameterStore::parse(r#"
///     d:Ge/Shape/HLX_mother = 10 mm
///     d:Ge/Shape/HLY_mother = 2 cm
///     d:Ge/Shape/HLZ_mother = 5 mm
/// "#).unwrap();
/// let spec = build_primitive(&store, &ParameterScope::new("Shape"), ShapeKind::Box, "_mother").unwrap();
/// assert_eq!(spec, PrimitiveSpec::Box { half_x: 10.0, half_y: 20.0, half_z: 5.0 });
/// ```
pub fn build_primitive(
    resolver: &dyn ParameterResolver,
    scope: &ParameterScope,
    kind: ShapeKind,
    suffix: &str,
) -> Result<PrimitiveSpec, ParameterError> {
    let length = |field: &str| resolver.get_double(&scope.suffixed(field, suffix), UnitCategory::Length);
    let angle = |field: &str| resolver.get_double(&scope.suffixed(field, suffix), UnitCategory::Angle);

    let spec = match kind {
        ShapeKind::Box => PrimitiveSpec::Box {
            half_x: length("HLX")?,
            half_y: length("HLY")?,
            half_z: length("HLZ")?,
        },
        ShapeKind::Cylinder => PrimitiveSpec::Cylinder {
            r_max: length("RMax")?,
            start_phi: angle("SPhi")?,
            delta_phi: angle("DPhi")?,
            half_z: length("HL")?,
        },
        ShapeKind::Sphere => PrimitiveSpec::Sphere {
            r_max: length("RMax")?,
            start_phi: angle("SPhi")?,
            delta_phi: angle("DPhi")?,
            start_theta: angle("STheta")?,
            delta_theta: angle("DTheta")?,
        },
    };
    Ok(spec)
}

// =============================================================================
// TESTS
// =============================================================================
