//! # CSG Solid
//!
//! Solid kernel for composite geometry built from two primitives.
//!
//! ## Architecture
//!
//! ```text
//! BoxSolid / Tubs / SphereSection → PrimitiveSolid ─┐
//!                                    Placement ─────┼→ BooleanSolid → Solid
//!                                    BooleanOperation ┘
//! ```
//!
//! Solids answer three questions: where a point lies ([`Containment`]),
//! how far they reach ([`Extent`]) and how much space they fill
//! (analytic volume for primitives, sampled volume for booleans).
//!
//! ## Example
//!
//! ```rust
//! use csg_solid::{BooleanOperation, BooleanSolid, BoxSolid, Placement, Shape};
//!
//! let mother = BoxSolid::new("mother", 10.0, 10.0, 10.0).unwrap();
//! let daughter = BoxSolid::new("daughter", 5.0, 5.0, 5.0).unwrap();
//! let hollow = BooleanSolid::new(
//!     "hollow",
//!     BooleanOperation::Subtraction,
//!     mother.into(),
//!     daughter.into(),
//!     Placement::IDENTITY,
//! );
//! assert!((hollow.estimate_cubic_volume(40) - 7000.0).abs() < 1e-6);
//! ```

pub mod angles;
pub mod boolean;
pub mod containment;
pub mod error;
pub mod extent;
pub mod placement;
pub mod primitives;
pub mod solid;
pub mod volume;

pub use angles::PhiSection;
pub use boolean::{BooleanOperation, BooleanSolid};
pub use containment::Containment;
pub use error::SolidError;
pub use extent::Extent;
pub use placement::Placement;
pub use primitives::{BoxSolid, PrimitiveSolid, SphereSection, Tubs};
pub use solid::{Shape, Solid};
pub use volume::estimate_volume;
