//! # Tubs
//!
//! Solid cylinder section along the z axis, centered on the origin.
//!
//! The inner radius is always zero; the section is a full cylinder when the
//! phi section is a full turn and a wedge otherwise.

use config::constants::KERNEL_TOLERANCE;
use glam::DVec3;
use serde::Serialize;

use crate::angles::PhiSection;
use crate::containment::Containment;
use crate::error::{require_positive, SolidError};
use crate::extent::Extent;
use crate::solid::Shape;

/// Cylinder section with outer radius, half length and phi range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tubs {
    name: String,
    r_max: f64,
    half_z: f64,
    phi: PhiSection,
}

impl Tubs {
    /// Creates a cylinder section.
    ///
    /// ## Parameters
    ///
    /// - `r_max`: outer radius, positive
    /// - `half_z`: half length along z, positive
    /// - `start_phi`, `delta_phi`: azimuthal range in radians
    ///
    /// ## Returns
    ///
    /// The section, or `SolidError` for a non-positive dimension or delta.
    pub fn new(
        name: impl Into<String>,
        r_max: f64,
        half_z: f64,
        start_phi: f64,
        delta_phi: f64,
    ) -> Result<Self, SolidError> {
        let name = name.into();
        let r_max = require_positive(&name, "RMax", r_max)?;
        let half_z = require_positive(&name, "HL", half_z)?;
        let phi = PhiSection::new(&name, start_phi, delta_phi)?;
        Ok(Self {
            name,
            r_max,
            half_z,
            phi,
        })
    }

    pub fn r_min(&self) -> f64 {
        0.0
    }

    pub fn r_max(&self) -> f64 {
        self.r_max
    }

    pub fn half_z(&self) -> f64 {
        self.half_z
    }

    pub fn phi(&self) -> &PhiSection {
        &self.phi
    }
}

impl Shape for Tubs {
    fn name(&self) -> &str {
        &self.name
    }

    fn inside(&self, point: DVec3) -> Containment {
        let rho = point.truncate().length();
        let distance = (rho - self.r_max).max(point.z.abs() - self.half_z);
        let radial = Containment::from_signed_distance(distance, KERNEL_TOLERANCE);
        if radial == Containment::Outside || self.phi.is_full() {
            return radial;
        }
        // The z axis lies on both cut planes.
        if rho <= 0.5 * KERNEL_TOLERANCE {
            return Containment::Surface;
        }
        radial.and(self.phi.classify(point.y.atan2(point.x)))
    }

    fn extent(&self) -> Extent {
        let (min, max) = self.phi.planar_bounds(self.r_max);
        Extent::new(min.extend(-self.half_z), max.extend(self.half_z))
    }

    fn cubic_volume(&self) -> f64 {
        self.phi.delta() * self.half_z * self.r_max * self.r_max
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_full_cylinder_volume() {
        let tubs = Tubs::new("t", 2.0, 5.0, 0.0, 2.0 * PI).unwrap();
        assert_relative_eq!(tubs.cubic_volume(), PI * 4.0 * 10.0, epsilon = 1e-9);
        assert_eq!(tubs.r_min(), 0.0);
    }

    #[test]
    fn test_half_cylinder_volume() {
        let full = Tubs::new("t", 2.0, 5.0, 0.0, 2.0 * PI).unwrap();
        let half = Tubs::new("t", 2.0, 5.0, 0.0, PI).unwrap();
        assert_relative_eq!(half.cubic_volume() * 2.0, full.cubic_volume(), epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_invalid() {
        assert_eq!(Tubs::new("t", 0.0, 1.0, 0.0, PI).unwrap_err().parameter(), "RMax");
        assert_eq!(Tubs::new("t", 1.0, -1.0, 0.0, PI).unwrap_err().parameter(), "HL");
        assert_eq!(Tubs::new("t", 1.0, 1.0, 0.0, 0.0).unwrap_err().parameter(), "DPhi");
    }

    #[test]
    fn test_inside_full() {
        let tubs = Tubs::new("t", 2.0, 5.0, 0.0, 2.0 * PI).unwrap();
        assert_eq!(tubs.inside(DVec3::ZERO), Containment::Inside);
        assert_eq!(tubs.inside(DVec3::new(2.0, 0.0, 0.0)), Containment::Surface);
        assert_eq!(tubs.inside(DVec3::new(0.0, 0.0, -5.0)), Containment::Surface);
        assert_eq!(tubs.inside(DVec3::new(1.5, 1.5, 0.0)), Containment::Outside);
        assert_eq!(tubs.inside(DVec3::new(0.0, 0.0, 6.0)), Containment::Outside);
    }

    #[test]
    fn test_inside_wedge() {
        let tubs = Tubs::new("t", 2.0, 5.0, 0.0, FRAC_PI_2).unwrap();
        assert_eq!(tubs.inside(DVec3::new(0.5, 0.5, 0.0)), Containment::Inside);
        assert_eq!(tubs.inside(DVec3::new(-0.5, 0.5, 0.0)), Containment::Outside);
        assert_eq!(tubs.inside(DVec3::new(1.0, 0.0, 0.0)), Containment::Surface);
        assert_eq!(tubs.inside(DVec3::new(0.0, 0.0, 1.0)), Containment::Surface);
    }

    #[test]
    fn test_wedge_extent() {
        let tubs = Tubs::new("t", 2.0, 5.0, 0.0, FRAC_PI_2).unwrap();
        let extent = tubs.extent();
        assert_relative_eq!(extent.min.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(extent.min.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(extent.max.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(extent.max.y, 2.0, epsilon = 1e-12);
        assert_eq!(extent.min.z, -5.0);
        assert_eq!(extent.max.z, 5.0);
    }
}
