use derive_more::{AsMut, AsRef, Deref, DerefMut, From, Into};
use nalgebra::{Point2, Vector2};
use num_traits::Float;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A camera position on the ground plane in a planar metric coordinate system,
/// such as projected UTM easting/northing in meters. Components are assumed
/// finite.
///
/// This type should be used wherever a GPS record has already been projected
/// onto the plane. Distances between positions are real-world meters, which is
/// what makes them usable as regression targets for embedding distances.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsMut, AsRef, Deref, DerefMut, From, Into)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Position(pub Point2<f64>);

impl Position {
    /// Creates a position from easting/northing coordinates.
    pub fn new(easting: f64, northing: f64) -> Self {
        Self(Point2::new(easting, northing))
    }

    /// Euclidean ground distance to another position, in the units of the
    /// underlying coordinate system (meters for UTM).
    ///
    /// ```
    /// use vpr_core::Position;
    /// let a = Position::new(0.0, 0.0);
    /// let b = Position::new(3.0, 4.0);
    /// assert_eq!(a.distance(b), 5.0);
    /// ```
    pub fn distance(self, other: Position) -> f64 {
        (self.0 - other.0).norm()
    }

    /// The point reached by travelling `distance` from this position along a
    /// cartesian angle in radians (0 = east, counter-clockwise positive).
    pub fn offset(self, angle: f64, distance: f64) -> Position {
        Position(self.0 + Vector2::new(distance * angle.cos(), distance * angle.sin()))
    }
}
