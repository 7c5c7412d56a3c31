//! # Sphere Section
//!
//! Solid sphere section centered on the origin, restricted by a phi range
//! and a polar (theta) range measured from +z.
//!
//! ## Theta Normalization
//!
//! - `start_theta` must lie in `[0, π]`.
//! - `delta_theta` must be positive; `start + delta` beyond π is clamped to π.

use std::f64::consts::{FRAC_PI_2, PI};

use config::constants::{ANGULAR_TOLERANCE, KERNEL_TOLERANCE};
use glam::DVec3;
use serde::Serialize;

use crate::angles::PhiSection;
use crate::containment::Containment;
use crate::error::{require_positive, SolidError};
use crate::extent::Extent;
use crate::solid::Shape;

/// Sphere section with outer radius, phi range and theta range.
///
/// # Example
///
/// ```rust
/// use csg_solid::{Shape, SphereSection};
/// use std::f64::consts::PI;
///
/// let hemisphere = SphereSection::new("dome", 1.0, 0.0, 2.0 * PI, 0.0, PI / 2.0).unwrap();
/// assert!((hemisphere.cubic_volume() - 2.0 * PI / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SphereSection {
    name: String,
    r_max: f64,
    phi: PhiSection,
    start_theta: f64,
    delta_theta: f64,
}

impl SphereSection {
    /// Creates a sphere section.
    ///
    /// ## Parameters
    ///
    /// - `r_max`: outer radius, positive
    /// - `start_phi`, `delta_phi`: azimuthal range in radians
    /// - `start_theta`, `delta_theta`: polar range in radians
    pub fn new(
        name: impl Into<String>,
        r_max: f64,
        start_phi: f64,
        delta_phi: f64,
        start_theta: f64,
        delta_theta: f64,
    ) -> Result<Self, SolidError> {
        let name = name.into();
        let r_max = require_positive(&name, "RMax", r_max)?;
        let phi = PhiSection::new(&name, start_phi, delta_phi)?;

        if !(start_theta.is_finite()
            && start_theta >= -ANGULAR_TOLERANCE
            && start_theta <= PI + ANGULAR_TOLERANCE)
        {
            return Err(SolidError::invalid_angle(
                name,
                "STheta",
                start_theta,
                "must lie in [0, 180] deg",
            ));
        }
        if !(delta_theta.is_finite() && delta_theta > 0.0) {
            return Err(SolidError::invalid_angle(
                name,
                "DTheta",
                delta_theta,
                "must be positive",
            ));
        }
        let start_theta = start_theta.clamp(0.0, PI);
        let delta_theta = delta_theta.min(PI - start_theta);
        if delta_theta <= ANGULAR_TOLERANCE {
            return Err(SolidError::invalid_angle(
                name,
                "STheta",
                start_theta,
                "leaves an empty theta range",
            ));
        }

        Ok(Self {
            name,
            r_max,
            phi,
            start_theta,
            delta_theta,
        })
    }

    pub fn r_min(&self) -> f64 {
        0.0
    }

    pub fn r_max(&self) -> f64 {
        self.r_max
    }

    pub fn phi(&self) -> &PhiSection {
        &self.phi
    }

    pub fn start_theta(&self) -> f64 {
        self.start_theta
    }

    pub fn delta_theta(&self) -> f64 {
        self.delta_theta
    }

    pub fn end_theta(&self) -> f64 {
        self.start_theta + self.delta_theta
    }

    fn has_upper_cone(&self) -> bool {
        self.start_theta > ANGULAR_TOLERANCE
    }

    fn has_lower_cone(&self) -> bool {
        self.end_theta() < PI - ANGULAR_TOLERANCE
    }

    /// Returns true when neither theta bound cuts the sphere.
    pub fn is_full_theta(&self) -> bool {
        !self.has_upper_cone() && !self.has_lower_cone()
    }

    fn classify_theta(&self, theta: f64) -> Containment {
        let half = 0.5 * ANGULAR_TOLERANCE;
        let (start, end) = (self.start_theta, self.end_theta());
        if (self.has_upper_cone() && theta < start - half)
            || (self.has_lower_cone() && theta > end + half)
        {
            return Containment::Outside;
        }
        if (self.has_upper_cone() && (theta - start).abs() <= half)
            || (self.has_lower_cone() && (theta - end).abs() <= half)
        {
            return Containment::Surface;
        }
        Containment::Inside
    }
}

impl Shape for SphereSection {
    fn name(&self) -> &str {
        &self.name
    }

    fn inside(&self, point: DVec3) -> Containment {
        let r = point.length();
        let radial = Containment::from_signed_distance(r - self.r_max, KERNEL_TOLERANCE);
        if radial == Containment::Outside {
            return radial;
        }
        let sectioned = !self.phi.is_full() || !self.is_full_theta();
        if !sectioned {
            return radial;
        }
        // Apex of the cut cones and planes.
        if r <= 0.5 * KERNEL_TOLERANCE {
            return Containment::Surface;
        }

        let mut state = radial;
        if !self.is_full_theta() {
            let theta = (point.z / r).clamp(-1.0, 1.0).acos();
            state = state.and(self.classify_theta(theta));
        }
        if !self.phi.is_full() && state != Containment::Outside {
            let rho = point.truncate().length();
            // Points on the z axis lie on both phi cut planes.
            let phi_state = if rho <= 0.5 * KERNEL_TOLERANCE {
                Containment::Surface
            } else {
                self.phi.classify(point.y.atan2(point.x))
            };
            state = state.and(phi_state);
        }
        state
    }

    fn extent(&self) -> Extent {
        let (start, end) = (self.start_theta, self.end_theta());
        let z_max = self.r_max * start.cos().max(0.0);
        let z_min = self.r_max * end.cos().min(0.0);
        let rho_max = if start <= FRAC_PI_2 && end >= FRAC_PI_2 {
            self.r_max
        } else {
            self.r_max * start.sin().max(end.sin())
        };
        let (min, max) = self.phi.planar_bounds(rho_max);
        Extent::new(min.extend(z_min), max.extend(z_max))
    }

    fn cubic_volume(&self) -> f64 {
        let cap = self.start_theta.cos() - self.end_theta().cos();
        self.r_max.powi(3) / 3.0 * self.phi.delta() * cap
    }
}

// =============================================================================
// TESTS
// =============================================================================
