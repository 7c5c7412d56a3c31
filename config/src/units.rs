//! # Units
//!
//! Multiplicative factors converting user units to internal units.
//! Lengths are stored in millimeters and angles in radians.

use std::f64::consts::PI;

// =============================================================================
// LENGTH
// =============================================================================

/// Internal length unit.
pub const MILLIMETER: f64 = 1.0;
/// 10 millimeters.
pub const CENTIMETER: f64 = 10.0 * MILLIMETER;
/// 1000 millimeters.
pub const METER: f64 = 1000.0 * MILLIMETER;
/// 1e-3 millimeters.
pub const MICROMETER: f64 = 1e-3 * MILLIMETER;
/// 1e-6 millimeters.
pub const NANOMETER: f64 = 1e-6 * MILLIMETER;

// =============================================================================
// ANGLE
// =============================================================================

/// Internal angle unit.
pub const RADIAN: f64 = 1.0;
/// 1e-3 radians.
pub const MILLIRADIAN: f64 = 1e-3 * RADIAN;
/// PI / 180 radians.
///
/// # Example
///
/// ```rust
/// use config::units::DEGREE;
///
/// assert!((180.0 * DEGREE - std::f64::consts::PI).abs() < 1e-12);
/// ```
pub const DEGREE: f64 = PI / 180.0 * RADIAN;

/// A full turn in radians.
pub const FULL_TURN: f64 = 2.0 * PI;
