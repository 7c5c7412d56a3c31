//! # Solid
//!
//! The [`Shape`] trait shared by every solid, and [`Solid`], the closed set
//! of solids a geometry component can register.

use config::constants::DEFAULT_VOLUME_GRID;
use glam::DVec3;
use serde::Serialize;

use crate::boolean::BooleanSolid;
use crate::containment::Containment;
use crate::extent::Extent;
use crate::primitives::PrimitiveSolid;

/// Common queries on a solid, in its own frame.
pub trait Shape: Send + Sync {
    /// Name given at construction.
    fn name(&self) -> &str;

    /// Classifies a point.
    fn inside(&self, point: DVec3) -> Containment;

    /// Axis-aligned bounds.
    fn extent(&self) -> Extent;

    /// Cubic volume in mm³.
    fn cubic_volume(&self) -> f64;
}

/// A primitive or a boolean composite of two primitives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Solid {
    Primitive(PrimitiveSolid),
    Boolean(BooleanSolid),
}

impl Solid {
    /// Returns true for boolean composites.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Solid::Boolean(_))
    }

    pub fn as_boolean(&self) -> Option<&BooleanSolid> {
        match self {
            Solid::Boolean(b) => Some(b),
            Solid::Primitive(_) => None,
        }
    }

    /// Cubic volume using an explicit sampling grid for composites.
    ///
    /// Primitives ignore `grid` and return their analytic volume.
    pub fn cubic_volume_with_grid(&self, grid: u32) -> f64 {
        match self {
            Solid::Primitive(p) => p.cubic_volume(),
            Solid::Boolean(b) => b.estimate_cubic_volume(grid),
        }
    }
}

impl Shape for Solid {
    fn name(&self) -> &str {
        match self {
            Solid::Primitive(p) => p.name(),
            Solid::Boolean(b) => b.name(),
        }
    }

    fn inside(&self, point: DVec3) -> Containment {
        match self {
            Solid::Primitive(p) => p.inside(point),
            Solid::Boolean(b) => b.inside(point),
        }
    }

    fn extent(&self) -> Extent {
        match self {
            Solid::Primitive(p) => p.extent(),
            Solid::Boolean(b) => b.extent(),
        }
    }

    fn cubic_volume(&self) -> f64 {
        self.cubic_volume_with_grid(DEFAULT_VOLUME_GRID)
    }
}

impl From<PrimitiveSolid> for Solid {
    fn from(solid: PrimitiveSolid) -> Self {
        Solid::Primitive(solid)
    }
}

impl From<BooleanSolid> for Solid {
    fn from(solid: BooleanSolid) -> Self {
        Solid::Boolean(solid)
    }
}
