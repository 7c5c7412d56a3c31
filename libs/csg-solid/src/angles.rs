//! # Angular Sections
//!
//! Azimuthal (phi) sections shared by the cylinder and sphere primitives.
//!
//! ## Normalization
//!
//! - A delta of a full turn or more is clamped to exactly one full turn.
//! - A start angle is folded into `[0, 2π)`; for full turns it is zero.
//! - A delta that is zero, negative or not finite is rejected.

use std::f64::consts::FRAC_PI_2;

use config::constants::ANGULAR_TOLERANCE;
use config::units::FULL_TURN;
use glam::DVec2;
use serde::Serialize;

use crate::containment::Containment;
use crate::error::SolidError;

/// Azimuthal range `[start, start + delta]` around the z axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhiSection {
    start: f64,
    delta: f64,
}

impl PhiSection {
    /// Full turn.
    pub const FULL: Self = Self {
        start: 0.0,
        delta: FULL_TURN,
    };

    /// Creates a normalized section.
    ///
    /// ## Parameters
    ///
    /// - `solid`: solid name for error reporting
    /// - `start`: start angle in radians
    /// - `delta`: opening angle in radians
    ///
    /// # Example
    ///
    /// ```rust
    /// use csg_solid::PhiSection;
    /// use std::f64::consts::PI;
    ///
    /// let section = PhiSection::new("tube", -PI / 2.0, 7.0).unwrap();
    /// assert!(section.is_full());
    /// assert_eq!(section.start(), 0.0);
    /// ```
    pub fn new(solid: &str, start: f64, delta: f64) -> Result<Self, SolidError> {
        if !(delta.is_finite() && delta > 0.0) {
            return Err(SolidError::invalid_angle(
                solid,
                "DPhi",
                delta,
                "must be positive",
            ));
        }
        if !start.is_finite() {
            return Err(SolidError::invalid_angle(
                solid,
                "SPhi",
                start,
                "must be finite",
            ));
        }
        if delta >= FULL_TURN - ANGULAR_TOLERANCE {
            return Ok(Self::FULL);
        }
        Ok(Self {
            start: start.rem_euclid(FULL_TURN),
            delta,
        })
    }

    /// Start angle in `[0, 2π)`.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Opening angle in `(0, 2π]`.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// End angle; may exceed 2π.
    pub fn end(&self) -> f64 {
        self.start + self.delta
    }

    /// Returns true for a complete turn.
    pub fn is_full(&self) -> bool {
        self.delta >= FULL_TURN
    }

    /// Classifies an azimuth against the section.
    ///
    /// Azimuths within half the angular tolerance of either cut are
    /// `Surface`. Full sections contain every azimuth.
    pub fn classify(&self, phi: f64) -> Containment {
        if self.is_full() {
            return Containment::Inside;
        }
        let half = 0.5 * ANGULAR_TOLERANCE;
        let offset = (phi - self.start).rem_euclid(FULL_TURN);
        if offset <= self.delta {
            let margin = offset.min(self.delta - offset);
            if margin <= half {
                Containment::Surface
            } else {
                Containment::Inside
            }
        } else {
            let margin = (offset - self.delta).min(FULL_TURN - offset);
            if margin <= half {
                Containment::Surface
            } else {
                Containment::Outside
            }
        }
    }

    /// Bounds in the xy plane of the sector of `radius` covered by the section.
    ///
    /// The sector includes the origin. Besides the two cut end points, every
    /// axis crossing (a multiple of π/2) inside the section widens the box.
    pub fn planar_bounds(&self, radius: f64) -> (DVec2, DVec2) {
        if self.is_full() {
            return (DVec2::splat(-radius), DVec2::splat(radius));
        }
        let (start, end) = (self.start, self.end());
        let mut min = DVec2::ZERO;
        let mut max = DVec2::ZERO;
        let mut include = |angle: f64| {
            let p = DVec2::new(angle.cos(), angle.sin()) * radius;
            min = min.min(p);
            max = max.max(p);
        };
        include(start);
        include(end);
        // start < 2π and delta < 2π, so crossings lie below 4π.
        for quadrant in 0..8 {
            let angle = quadrant as f64 * FRAC_PI_2;
            if angle > start && angle < end {
                include(angle);
            }
        }
        (min, max)
    }
}

// =============================================================================
// TESTS
// =============================================================================
