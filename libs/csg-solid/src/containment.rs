//! # Containment
//!
//! Result of classifying a point against a solid.

use serde::Serialize;

/// Where a point lies relative to a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Containment {
    /// Strictly inside, further than half a tolerance from every face.
    Inside,
    /// Within half a tolerance of a face.
    Surface,
    /// Strictly outside.
    Outside,
}

impl Containment {
    /// Classifies a signed distance (negative inside) against a tolerance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use csg_solid::Containment;
    ///
    /// assert_eq!(Containment::from_signed_distance(-1.0, 1e-9), Containment::Inside);
    /// assert_eq!(Containment::from_signed_distance(0.0, 1e-9), Containment::Surface);
    /// assert_eq!(Containment::from_signed_distance(1.0, 1e-9), Containment::Outside);
    /// ```
    #[inline]
    pub fn from_signed_distance(distance: f64, tolerance: f64) -> Self {
        let half = 0.5 * tolerance;
        if distance > half {
            Containment::Outside
        } else if distance < -half {
            Containment::Inside
        } else {
            Containment::Surface
        }
    }

    /// Returns true for `Inside` and `Surface`.
    #[inline]
    pub fn is_contained(self) -> bool {
        self != Containment::Outside
    }

    /// Restricts `self` by a further condition: the weaker of the two wins.
    ///
    /// `Outside` beats `Surface`, which beats `Inside`.
    #[inline]
    pub fn and(self, other: Containment) -> Containment {
        match (self, other) {
            (Containment::Outside, _) | (_, Containment::Outside) => Containment::Outside,
            (Containment::Surface, _) | (_, Containment::Surface) => Containment::Surface,
            _ => Containment::Inside,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
