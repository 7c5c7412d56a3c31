//! # Boolean Solids
//!
//! Composite of a mother primitive and a placed daughter primitive.
//!
//! ## Point Classification
//!
//! | Operation    | Inside when                  | Outside when                  |
//! |--------------|------------------------------|-------------------------------|
//! | Union        | mother or daughter inside    | both outside                  |
//! | Subtraction  | mother inside, daughter out  | mother out or daughter inside |
//! | Intersection | both inside                  | either outside                |
//!
//! Everything else is `Surface`. The composite lives in the mother frame;
//! the daughter is sampled through its [`Placement`].

use std::fmt;

use glam::DVec3;
use serde::Serialize;

use crate::containment::Containment;
use crate::extent::Extent;
use crate::placement::Placement;
use crate::primitives::PrimitiveSolid;
use crate::solid::Shape;
use crate::volume::estimate_volume;

/// Boolean operation combining two solids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BooleanOperation {
    Union,
    Subtraction,
    Intersection,
}

impl BooleanOperation {
    pub const ALL: [BooleanOperation; 3] = [
        BooleanOperation::Union,
        BooleanOperation::Subtraction,
        BooleanOperation::Intersection,
    ];

    /// Combines the classifications of a point against mother and daughter.
    pub fn combine(self, mother: Containment, daughter: Containment) -> Containment {
        use Containment::*;
        match self {
            BooleanOperation::Union => match (mother, daughter) {
                (Inside, _) | (_, Inside) => Inside,
                (Outside, Outside) => Outside,
                _ => Surface,
            },
            BooleanOperation::Subtraction => match (mother, daughter) {
                (Outside, _) | (_, Inside) => Outside,
                (Inside, Outside) => Inside,
                _ => Surface,
            },
            BooleanOperation::Intersection => match (mother, daughter) {
                (Outside, _) | (_, Outside) => Outside,
                (Inside, Inside) => Inside,
                _ => Surface,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BooleanOperation::Union => "Union",
            BooleanOperation::Subtraction => "Subtraction",
            BooleanOperation::Intersection => "Intersection",
        }
    }
}

impl fmt::Display for BooleanOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mother primitive combined with a placed daughter primitive.
///
/// Both operands are primitives, so composites never nest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BooleanSolid {
    name: String,
    operation: BooleanOperation,
    mother: PrimitiveSolid,
    daughter: PrimitiveSolid,
    placement: Placement,
}

impl BooleanSolid {
    /// Creates a composite; `placement` positions the daughter in the mother frame.
    pub fn new(
        name: impl Into<String>,
        operation: BooleanOperation,
        mother: PrimitiveSolid,
        daughter: PrimitiveSolid,
        placement: Placement,
    ) -> Self {
        Self {
            name: name.into(),
            operation,
            mother,
            daughter,
            placement,
        }
    }

    pub fn operation(&self) -> BooleanOperation {
        self.operation
    }

    pub fn mother(&self) -> &PrimitiveSolid {
        &self.mother
    }

    pub fn daughter(&self) -> &PrimitiveSolid {
        &self.daughter
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Extent of the daughter expressed in the mother frame.
    pub fn placed_daughter_extent(&self) -> Extent {
        self.placement.transform_extent(&self.daughter.extent())
    }

    /// Sampled cubic volume on a `grid³` midpoint grid.
    pub fn estimate_cubic_volume(&self, grid: u32) -> f64 {
        estimate_volume(self, grid)
    }
}

impl Shape for BooleanSolid {
    fn name(&self) -> &str {
        &self.name
    }

    fn inside(&self, point: DVec3) -> Containment {
        let mother = self.mother.inside(point);
        match (self.operation, mother) {
            (BooleanOperation::Union, Containment::Inside) => return Containment::Inside,
            (BooleanOperation::Subtraction | BooleanOperation::Intersection, Containment::Outside) => {
                return Containment::Outside
            }
            _ => {}
        }
        let daughter = self.daughter.inside(self.placement.to_local(point));
        self.operation.combine(mother, daughter)
    }

    fn extent(&self) -> Extent {
        let mother = self.mother.extent();
        match self.operation {
            BooleanOperation::Union => mother.union(&self.placed_daughter_extent()),
            BooleanOperation::Subtraction => mother,
            BooleanOperation::Intersection => mother.intersection(&self.placed_daughter_extent()),
        }
    }

    fn cubic_volume(&self) -> f64 {
        self.estimate_cubic_volume(config::constants::DEFAULT_VOLUME_GRID)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::BoxSolid;

    fn cube(name: &str, half: f64) -> PrimitiveSolid {
        BoxSolid::new(name, half, half, half).unwrap().into()
    }

    #[test]
    fn test_combine_tables() {
        use Containment::*;
        let states = [Inside, Surface, Outside];
        for m in states {
            for d in states {
                let union = BooleanOperation::Union.combine(m, d);
                let sub = BooleanOperation::Subtraction.combine(m, d);
                let inter = BooleanOperation::Intersection.combine(m, d);
                assert_eq!(union == Inside, m == Inside || d == Inside);
                assert_eq!(union == Outside, m == Outside && d == Outside);
                assert_eq!(sub == Inside, m == Inside && d == Outside);
                assert_eq!(sub == Outside, m == Outside || d == Inside);
                assert_eq!(inter == Inside, m == Inside && d == Inside);
                assert_eq!(inter == Outside, m == Outside || d == Outside);
            }
        }
    }

    #[test]
    fn test_subtraction_classification() {
        let hollow = BooleanSolid::new(
            "hollow",
            BooleanOperation::Subtraction,
            cube("m", 10.0),
            cube("d", 5.0),
            Placement::IDENTITY,
        );
        assert_eq!(hollow.inside(DVec3::ZERO), Containment::Outside);
        assert_eq!(hollow.inside(DVec3::new(7.0, 0.0, 0.0)), Containment::Inside);
        assert_eq!(hollow.inside(DVec3::new(5.0, 0.0, 0.0)), Containment::Surface);
        assert_eq!(hollow.inside(DVec3::new(11.0, 0.0, 0.0)), Containment::Outside);
    }

    #[test]
    fn test_translated_union_extent() {
        let placement = Placement::IDENTITY.with_translation(DVec3::new(20.0, 0.0, 0.0));
        let joined = BooleanSolid::new(
            "joined",
            BooleanOperation::Union,
            cube("m", 10.0),
            cube("d", 5.0),
            placement,
        );
        let extent = joined.extent();
        assert_eq!(extent.min, DVec3::splat(-10.0));
        assert_eq!(extent.max, DVec3::new(25.0, 10.0, 10.0));
        assert_eq!(joined.inside(DVec3::new(22.0, 0.0, 0.0)), Containment::Inside);
    }

    #[test]
    fn test_disjoint_intersection() {
        let placement = Placement::IDENTITY.with_translation(DVec3::new(100.0, 0.0, 0.0));
        let overlap = BooleanSolid::new(
            "overlap",
            BooleanOperation::Intersection,
            cube("m", 10.0),
            cube("d", 5.0),
            placement,
        );
        assert!(overlap.extent().is_empty());
        assert_eq!(overlap.estimate_cubic_volume(20), 0.0);
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(BooleanOperation::Subtraction.to_string(), "Subtraction");
        assert_eq!(BooleanOperation::ALL.len(), 3);
    }
}
