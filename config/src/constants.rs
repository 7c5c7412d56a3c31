//! # Configuration Constants
//!
//! Centralized constants for the geometry kernel. Point classification
//! tolerances and volume estimation parameters are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Surface tolerances used by point classification
//! - **Estimation**: Sampling grid used to estimate boolean solid volumes
//! - **Parameters**: Key layout shared by the parameter and geometry crates

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Cartesian surface tolerance in millimeters.
///
/// A point closer than half of this distance to a face is classified as
/// being on the surface rather than inside or outside.
///
/// # Example
///
/// ```rust
/// use config::constants::KERNEL_TOLERANCE;
///
/// let distance_to_face: f64 = 1e-11;
/// assert!(distance_to_face.abs() <= 0.5 * KERNEL_TOLERANCE);
/// ```
pub const KERNEL_TOLERANCE: f64 = 1e-9;

/// Radial surface tolerance in millimeters.
///
/// Used for the curved faces of cylinders and spheres.
pub const RADIAL_TOLERANCE: f64 = 1e-9;

/// Angular surface tolerance in radians.
///
/// Used for the phi and theta boundaries of cylinder and sphere sections.
///
/// # Example
///
/// ```rust
/// use config::constants::ANGULAR_TOLERANCE;
///
/// let full_circle = 2.0 * std::f64::consts::PI;
/// let delta_phi = full_circle - 1e-12;
/// assert!(full_circle - delta_phi < ANGULAR_TOLERANCE);
/// ```
pub const ANGULAR_TOLERANCE: f64 = 1e-9;

/// Epsilon for comparing derived floating-point quantities.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// assert!((0.1 + 0.2 - 0.3_f64).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// ESTIMATION CONSTANTS
// =============================================================================

/// Default number of sampling cells per axis for volume estimation.
///
/// The extent of a boolean solid is divided into `N³` equal cells and the
/// midpoint of each cell is classified. 100 cells per axis gives one million
/// samples.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_VOLUME_GRID;
///
/// let samples = (DEFAULT_VOLUME_GRID as u64).pow(3);
/// assert_eq!(samples, 1_000_000);
/// ```
pub const DEFAULT_VOLUME_GRID: u32 = 100;

/// Minimum number of sampling cells per axis.
pub const MIN_VOLUME_GRID: u32 = 2;

/// Maximum number of sampling cells per axis.
///
/// Safety limit; 1000³ classifications is already a long estimation.
pub const MAX_VOLUME_GRID: u32 = 1000;

// =============================================================================
// PARAMETER CONSTANTS
// =============================================================================

/// Prefix of every geometry parameter key (`Ge/<instance>/<field>`).
pub const GEOMETRY_KEY_PREFIX: &str = "Ge";

/// Separator between the segments of a parameter key.
pub const KEY_SEPARATOR: char = '/';

/// Instance name of the root component of every geometry tree.
pub const WORLD_NAME: &str = "World";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a requested sampling grid to the supported range.
///
/// A request of zero selects [`DEFAULT_VOLUME_GRID`].
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_volume_grid, DEFAULT_VOLUME_GRID, MAX_VOLUME_GRID};
///
/// assert_eq!(clamp_volume_grid(0), DEFAULT_VOLUME_GRID);
/// assert_eq!(clamp_volume_grid(40), 40);
/// assert_eq!(clamp_volume_grid(50_000), MAX_VOLUME_GRID);
/// ```
pub fn clamp_volume_grid(requested: u32) -> u32 {
    if requested == 0 {
        return DEFAULT_VOLUME_GRID;
    }
    requested.clamp(MIN_VOLUME_GRID, MAX_VOLUME_GRID)
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
