//! # Primitives
//!
//! The three primitive solids a composite can be built from.
//!
//! | Solid           | Parameters                                   |
//! |-----------------|----------------------------------------------|
//! | `BoxSolid`      | half lengths x, y, z                         |
//! | `Tubs`          | outer radius, half length, phi range         |
//! | `SphereSection` | outer radius, phi range, theta range         |
//!
//! Every primitive is centered on the origin of its own frame.

mod box_solid;
mod sphere;
mod tubs;

pub use box_solid::BoxSolid;
pub use sphere::SphereSection;
pub use tubs::Tubs;

use glam::DVec3;
use serde::Serialize;

use crate::containment::Containment;
use crate::extent::Extent;
use crate::solid::Shape;

/// One of the primitive solids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PrimitiveSolid {
    Box(BoxSolid),
    Tubs(Tubs),
    Sphere(SphereSection),
}

impl PrimitiveSolid {
    /// Short lowercase kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            PrimitiveSolid::Box(_) => "box",
            PrimitiveSolid::Tubs(_) => "tubs",
            PrimitiveSolid::Sphere(_) => "sphere",
        }
    }

    fn as_shape(&self) -> &dyn Shape {
        match self {
            PrimitiveSolid::Box(s) => s,
            PrimitiveSolid::Tubs(s) => s,
            PrimitiveSolid::Sphere(s) => s,
        }
    }
}

impl Shape for PrimitiveSolid {
    fn name(&self) -> &str {
        self.as_shape().name()
    }

    fn inside(&self, point: DVec3) -> Containment {
        self.as_shape().inside(point)
    }

    fn extent(&self) -> Extent {
        self.as_shape().extent()
    }

    fn cubic_volume(&self) -> f64 {
        self.as_shape().cubic_volume()
    }
}

impl From<BoxSolid> for PrimitiveSolid {
    fn from(solid: BoxSolid) -> Self {
        PrimitiveSolid::Box(solid)
    }
}

impl From<Tubs> for PrimitiveSolid {
    fn from(solid: Tubs) -> Self {
        PrimitiveSolid::Tubs(solid)
    }
}

impl From<SphereSection> for PrimitiveSolid {
    fn from(solid: SphereSection) -> Self {
        PrimitiveSolid::Sphere(solid)
    }
}

// =============================================================================
// TESTS
// =============================================================================
