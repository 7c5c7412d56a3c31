//! # Transform Builder
//!
//! Relative rotation and translation of a daughter with respect to its mother.
//!
//! Rotations are applied about x, then y, then z. The order is fixed: the
//! elementary rotations do not commute.

use csg_params::{ParameterError, ParameterResolver, ParameterScope, UnitCategory};
use csg_solid::Placement;
use glam::DVec3;
use serde::Serialize;

/// Rotation angles (rad) and translation (mm) of a daughter frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RelativeTransform {
    /// Angles about x, y and z.
    pub rotation: DVec3,
    pub translation: DVec3,
}

impl RelativeTransform {
    pub fn new(rotation: DVec3, translation: DVec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Reads `<rotation>X/Y/Z` angles and `<translation>X/Y/Z` lengths.
    ///
    /// With `required` false, absent keys default to zero; present keys
    /// must still be well formed.
    pub fn resolve(
        resolver: &dyn ParameterResolver,
        scope: &ParameterScope,
        rotation: &str,
        translation: &str,
        required: bool,
    ) -> Result<Self, ParameterError> {
        let read = |field: String, category: UnitCategory| {
            let key = scope.key(&field);
            if !required && !resolver.has_parameter(&key) {
                return Ok(0.0);
            }
            resolver.get_double(&key, category)
        };
        let axis = |prefix: &str, category: UnitCategory| -> Result<DVec3, ParameterError> {
            Ok(DVec3::new(
                read(format!("{prefix}X"), category)?,
                read(format!("{prefix}Y"), category)?,
                read(format!("{prefix}Z"), category)?,
            ))
        };
        Ok(Self {
            rotation: axis(rotation, UnitCategory::Angle)?,
            translation: axis(translation, UnitCategory::Length)?,
        })
    }

    /// Returns true if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.rotation.is_finite() && self.translation.is_finite()
    }

    /// Placement of the daughter frame.
    pub fn placement(&self) -> Placement {
        build_transform(
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
            self.translation.x,
            self.translation.y,
            self.translation.z,
        )
    }
}

/// Builds the placement for six scalars: rotate about x, y, z, then translate.
///
/// # Example
///
/// ```rust
/// use csg_geometry::build_transform;
/// use glam::DVec3;
///
/// let placement = build_transform(0.0, 0.0, 0.0, 1.0, 2.0, 3.0);
/// assert_eq!(placement.to_parent(DVec3::ZERO), DVec3::new(1.0, 2.0, 3.0));
/// ```
pub fn build_transform(
    rot_x: f64,
    rot_y: f64,
    rot_z: f64,
    trans_x: f64,
    trans_y: f64,
    trans_z: f64,
) -> Placement {
    Placement::IDENTITY
        .rotate_x(rot_x)
        .rotate_y(rot_y)
        .rotate_z(rot_z)
        .with_translation(DVec3::new(trans_x, trans_y, trans_z))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use csg_params::{ParameterStore, Unit};
    use glam::DMat3;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rotation_order_matters() {
        let xy = build_transform(FRAC_PI_2, FRAC_PI_2, 0.0, 0.0, 0.0, 0.0);
        let yx = Placement::IDENTITY.rotate_y(FRAC_PI_2).rotate_x(FRAC_PI_2);
        let probe = DVec3::new(1.0, 2.0, 3.0);
        assert!((xy.to_local(probe) - yx.to_local(probe)).length() > 1.0);
    }

    #[test]
    fn test_matches_composed_matrix() {
        let placement = build_transform(0.1, 0.2, 0.3, 0.0, 0.0, 0.0);
        let expected =
            DMat3::from_rotation_z(0.3) * DMat3::from_rotation_y(0.2) * DMat3::from_rotation_x(0.1);
        let v = DVec3::new(-1.0, 0.5, 2.0);
        let (a, b) = (placement.rotation() * v, expected * v);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
    }

    #[test]
    fn test_resolve_required() {
        let mut store = ParameterStore::new();
        store
            .set_double("Ge/Shape/RelRotX", 90.0, Unit::Degree)
            .set_double("Ge/Shape/RelRotY", 0.0, Unit::Degree)
            .set_double("Ge/Shape/RelRotZ", 0.0, Unit::Degree)
            .set_double("Ge/Shape/RelTransX", 1.0, Unit::Centimeter)
            .set_double("Ge/Shape/RelTransY", 0.0, Unit::Millimeter);
        let scope = ParameterScope::new("Shape");

        let err = RelativeTransform::resolve(&store, &scope, "RelRot", "RelTrans", true)
            .unwrap_err();
        assert_eq!(err, ParameterError::missing("Ge/Shape/RelTransZ"));

        store.set_double("Ge/Shape/RelTransZ", 0.0, Unit::Millimeter);
        let transform =
            RelativeTransform::resolve(&store, &scope, "RelRot", "RelTrans", true).unwrap();
        assert_relative_eq!(transform.rotation.x, FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(transform.translation, DVec3::new(10.0, 0.0, 0.0));
        assert!(transform.is_finite());
    }

    #[test]
    fn test_resolve_optional_defaults_to_zero() {
        let mut store = ParameterStore::new();
        store.set_double("Ge/Box/TransZ", 2.0, Unit::Centimeter);
        let scope = ParameterScope::new("Box");
        let transform = RelativeTransform::resolve(&store, &scope, "Rot", "Trans", false).unwrap();
        assert_eq!(transform.rotation, DVec3::ZERO);
        assert_eq!(transform.translation, DVec3::new(0.0, 0.0, 20.0));
        assert_eq!(transform.placement().translation(), DVec3::new(0.0, 0.0, 20.0));
    }
}
