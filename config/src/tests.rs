//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;
use crate::units::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_tolerances_are_positive() {
    assert!(KERNEL_TOLERANCE > 0.0, "KERNEL_TOLERANCE must be positive");
    assert!(RADIAL_TOLERANCE > 0.0, "RADIAL_TOLERANCE must be positive");
    assert!(ANGULAR_TOLERANCE > 0.0, "ANGULAR_TOLERANCE must be positive");
}

#[test]
fn test_tolerances_are_small() {
    assert!(KERNEL_TOLERANCE < 1e-6);
    assert!(ANGULAR_TOLERANCE < 1e-6);
}

#[test]
fn test_epsilon_smaller_than_kernel_tolerance() {
    assert!(EPSILON <= KERNEL_TOLERANCE);
}

// =============================================================================
// ESTIMATION TESTS
// =============================================================================

#[test]
fn test_volume_grid_bounds_are_ordered() {
    assert!(MIN_VOLUME_GRID <= DEFAULT_VOLUME_GRID);
    assert!(DEFAULT_VOLUME_GRID <= MAX_VOLUME_GRID);
}

#[test]
fn test_clamp_volume_grid_zero_selects_default() {
    assert_eq!(clamp_volume_grid(0), DEFAULT_VOLUME_GRID);
}

#[test]
fn test_clamp_volume_grid_lower_bound() {
    assert_eq!(clamp_volume_grid(1), MIN_VOLUME_GRID);
}

#[test]
fn test_clamp_volume_grid_upper_bound() {
    assert_eq!(clamp_volume_grid(u32::MAX), MAX_VOLUME_GRID);
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[test]
fn test_length_units() {
    assert_eq!(MILLIMETER, 1.0);
    assert_eq!(CENTIMETER, 10.0);
    assert_eq!(METER, 1000.0);
    assert!(approx_equal(MICROMETER * 1000.0, MILLIMETER));
    assert!(approx_equal(NANOMETER * 1000.0, MICROMETER));
}

#[test]
fn test_angle_units() {
    assert_eq!(RADIAN, 1.0);
    assert!(approx_equal(360.0 * DEGREE, FULL_TURN));
    assert!(approx_equal(1000.0 * MILLIRADIAN, RADIAN));
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(1.0, 1.0 + EPSILON / 2.0));
    assert!(!approx_equal(1.0, 1.0 + EPSILON * 2.0));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(EPSILON / 2.0));
    assert!(!approx_zero(EPSILON * 2.0));
}

#[test]
fn test_key_layout() {
    assert_eq!(GEOMETRY_KEY_PREFIX, "Ge");
    assert_eq!(KEY_SEPARATOR, '/');
    assert_eq!(WORLD_NAME, "World");
}
