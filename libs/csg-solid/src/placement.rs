//! # Placement
//!
//! Rigid transform of a daughter solid relative to its mother.
//!
//! The rotation describes the orientation of the daughter frame. Rotations
//! compose by left multiplication, so `rotate_x(a).rotate_y(b).rotate_z(c)`
//! yields `Rz(c) · Ry(b) · Rx(a)`.
//!
//! - mother → daughter: `q = R · (p − t)`
//! - daughter → mother: `p = Rᵀ · q + t`

use glam::{DMat3, DVec3};
use serde::Serialize;

use crate::extent::Extent;

/// Rotation and translation of a daughter frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    rotation: DMat3,
    translation: DVec3,
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Placement {
    /// No rotation, no translation.
    pub const IDENTITY: Self = Self {
        rotation: DMat3::IDENTITY,
        translation: DVec3::ZERO,
    };

    /// Creates a placement from a frame rotation and a translation.
    pub fn new(rotation: DMat3, translation: DVec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Applies a further rotation about the x axis.
    pub fn rotate_x(self, angle: f64) -> Self {
        Self {
            rotation: DMat3::from_rotation_x(angle) * self.rotation,
            ..self
        }
    }

    /// Applies a further rotation about the y axis.
    pub fn rotate_y(self, angle: f64) -> Self {
        Self {
            rotation: DMat3::from_rotation_y(angle) * self.rotation,
            ..self
        }
    }

    /// Applies a further rotation about the z axis.
    pub fn rotate_z(self, angle: f64) -> Self {
        Self {
            rotation: DMat3::from_rotation_z(angle) * self.rotation,
            ..self
        }
    }

    /// Replaces the translation.
    pub fn with_translation(self, translation: DVec3) -> Self {
        Self {
            translation,
            ..self
        }
    }

    pub fn rotation(&self) -> DMat3 {
        self.rotation
    }

    pub fn translation(&self) -> DVec3 {
        self.translation
    }

    /// Maps a point from the mother frame into the daughter frame.
    #[inline]
    pub fn to_local(&self, point: DVec3) -> DVec3 {
        self.rotation * (point - self.translation)
    }

    /// Maps a point from the daughter frame into the mother frame.
    #[inline]
    pub fn to_parent(&self, point: DVec3) -> DVec3 {
        self.rotation.transpose() * point + self.translation
    }

    /// Mother-frame extent enclosing a daughter-frame extent.
    pub fn transform_extent(&self, extent: &Extent) -> Extent {
        if extent.is_empty() {
            return *extent;
        }
        Extent::from_points(extent.corners().into_iter().map(|c| self.to_parent(c)))
            .unwrap_or(*extent)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn assert_vec_eq(a: DVec3, b: DVec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
    }

    #[test]
    fn test_identity_maps_points_unchanged() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(Placement::IDENTITY.to_local(p), p);
        assert_eq!(Placement::IDENTITY.to_parent(p), p);
        assert_eq!(Placement::default(), Placement::IDENTITY);
    }

    #[test]
    fn test_translation_only() {
        let placement = Placement::IDENTITY.with_translation(DVec3::new(10.0, 0.0, 0.0));
        assert_vec_eq(placement.to_local(DVec3::new(10.0, 0.0, 0.0)), DVec3::ZERO);
        assert_vec_eq(
            placement.to_parent(DVec3::ZERO),
            DVec3::new(10.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_round_trip() {
        let placement = Placement::IDENTITY
            .rotate_x(0.3)
            .rotate_y(-1.1)
            .rotate_z(2.0)
            .with_translation(DVec3::new(1.0, -2.0, 5.0));
        let p = DVec3::new(3.0, 4.0, -7.0);
        assert_vec_eq(placement.to_parent(placement.to_local(p)), p);
    }

    #[test]
    fn test_composition_order() {
        let placement = Placement::IDENTITY
            .rotate_x(0.4)
            .rotate_y(0.5)
            .rotate_z(0.6);
        let expected =
            DMat3::from_rotation_z(0.6) * DMat3::from_rotation_y(0.5) * DMat3::from_rotation_x(0.4);
        let v = DVec3::new(0.2, -0.7, 1.3);
        assert_vec_eq(placement.rotation() * v, expected * v);
    }

    #[test]
    fn test_daughter_axis_in_mother_frame() {
        // Frame rotated by +90° about z: the daughter x axis points along mother -y.
        let placement = Placement::IDENTITY.rotate_z(FRAC_PI_2);
        assert_vec_eq(placement.to_parent(DVec3::X), DVec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_transform_extent_rotated_slab() {
        let slab = Extent::from_half_lengths(DVec3::new(10.0, 1.0, 1.0));
        let placement = Placement::IDENTITY
            .rotate_z(FRAC_PI_2)
            .with_translation(DVec3::new(0.0, 0.0, 5.0));
        let moved = placement.transform_extent(&slab);
        assert_vec_eq(moved.min, DVec3::new(-1.0, -10.0, 4.0));
        assert_vec_eq(moved.max, DVec3::new(1.0, 10.0, 6.0));
    }
}
