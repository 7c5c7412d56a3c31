//! # Extent
//!
//! Axis-aligned bounding box of a solid.

use glam::DVec3;
use serde::Serialize;

/// Axis-aligned box given by its minimum and maximum corners.
///
/// An extent whose minimum exceeds its maximum on any axis is empty; the
/// intersection of disjoint extents produces one.
///
/// # Example
///
/// ```rust
/// use csg_solid::Extent;
/// use glam::DVec3;
///
/// let a = Extent::from_half_lengths(DVec3::splat(10.0));
/// let b = Extent::new(DVec3::splat(5.0), DVec3::splat(15.0));
/// assert_eq!(a.intersection(&b).volume(), 125.0);
/// assert_eq!(a.union(&b).max, DVec3::splat(15.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub min: DVec3,
    pub max: DVec3,
}

impl Extent {
    /// Creates an extent from its corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Creates an extent centered on the origin.
    pub fn from_half_lengths(half: DVec3) -> Self {
        Self {
            min: -half,
            max: half,
        }
    }

    /// Smallest extent containing every point.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut extent = Self::new(first, first);
        for p in points {
            extent.min = extent.min.min(p);
            extent.max = extent.max.max(p);
        }
        Some(extent)
    }

    /// Returns true if the extent contains no point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Smallest extent containing both.
    pub fn union(&self, other: &Extent) -> Extent {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Extent::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Overlap of both; empty if they are disjoint.
    pub fn intersection(&self, other: &Extent) -> Extent {
        Extent::new(self.min.max(other.min), self.max.min(other.max))
    }

    /// Edge lengths, zero for empty extents.
    pub fn size(&self) -> DVec3 {
        (self.max - self.min).max(DVec3::ZERO)
    }

    /// Half edge lengths.
    pub fn half_lengths(&self) -> DVec3 {
        self.size() * 0.5
    }

    /// Center point.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Enclosed volume, zero for empty extents.
    pub fn volume(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let size = self.size();
        size.x * size.y * size.z
    }

    /// Returns true if `point` lies inside or on the boundary.
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// The eight corners.
    pub fn corners(&self) -> [DVec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(lo.x, lo.y, hi.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(hi.x, hi.y, hi.z),
            DVec3::new(lo.x, hi.y, hi.z),
        ]
    }
}

// =============================================================================
// TESTS
// =============================================================================
