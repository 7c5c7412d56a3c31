//! # Config Crate
//!
//! Centralized configuration constants for the CSG geometry pipeline.
//! Kernel tolerances, unit factors and volume-estimation bounds are defined
//! here so that the parameter layer, the solid kernel and the component
//! framework agree on a single set of numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{KERNEL_TOLERANCE, DEFAULT_VOLUME_GRID};
//! use config::units::{CENTIMETER, DEGREE};
//!
//! // Lengths are stored in millimeters, angles in radians
//! let half_length = 2.5 * CENTIMETER;
//! assert_eq!(half_length, 25.0);
//! assert!((90.0 * DEGREE - std::f64::consts::FRAC_PI_2).abs() < KERNEL_TOLERANCE);
//! assert!(DEFAULT_VOLUME_GRID >= 2);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Kernel Compatible**: Internal units are millimeter and radian
//! - **Dependency Free**: Every crate in the workspace can depend on this one

pub mod constants;
pub mod units;

#[cfg(test)]
mod tests;
