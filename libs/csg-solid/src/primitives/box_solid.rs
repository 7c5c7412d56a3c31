//! # Box
//!
//! Rectangular box centered on the origin.

use config::constants::KERNEL_TOLERANCE;
use glam::DVec3;
use serde::Serialize;

use crate::containment::Containment;
use crate::error::{require_positive, SolidError};
use crate::extent::Extent;
use crate::solid::Shape;

/// Box given by its three half lengths.
///
/// # Example
///
/// ```rust
/// use csg_solid::{BoxSolid, Containment, Shape};
/// use glam::DVec3;
///
/// let b = BoxSolid::new("slab", 5.0, 2.0, 1.0).unwrap();
/// assert_eq!(b.cubic_volume(), 80.0);
/// assert_eq!(b.inside(DVec3::new(5.0, 0.0, 0.0)), Containment::Surface);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSolid {
    name: String,
    half_lengths: DVec3,
}

impl BoxSolid {
    /// Creates a box; every half length must be positive.
    pub fn new(
        name: impl Into<String>,
        half_x: f64,
        half_y: f64,
        half_z: f64,
    ) -> Result<Self, SolidError> {
        let name = name.into();
        let half_lengths = DVec3::new(
            require_positive(&name, "HLX", half_x)?,
            require_positive(&name, "HLY", half_y)?,
            require_positive(&name, "HLZ", half_z)?,
        );
        Ok(Self { name, half_lengths })
    }

    pub fn half_lengths(&self) -> DVec3 {
        self.half_lengths
    }
}

impl Shape for BoxSolid {
    fn name(&self) -> &str {
        &self.name
    }

    fn inside(&self, point: DVec3) -> Containment {
        let distance = (point.abs() - self.half_lengths).max_element();
        Containment::from_signed_distance(distance, KERNEL_TOLERANCE)
    }

    fn extent(&self) -> Extent {
        Extent::from_half_lengths(self.half_lengths)
    }

    fn cubic_volume(&self) -> f64 {
        8.0 * self.half_lengths.x * self.half_lengths.y * self.half_lengths.z
    }
}

// =============================================================================
// TESTS
// =============================================================================
