use crate::Position;
use nalgebra::Point2;
use num_traits::Float;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A camera's field-of-view sector: the triangular wedge of ground assumed
/// visible from `origin`. `edge1` and `edge2` are the far corners of the wedge,
/// one on each side of the heading.
///
/// The triangle is simple (non-self-intersecting) whenever it was built from a
/// view angle below π. A zero-area sector, with all three vertices coincident,
/// is a valid degenerate value; overlap computations must treat it as
/// overlapping nothing rather than fail.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ViewSector {
    /// The camera position the wedge protrudes from.
    pub origin: Position,
    /// Far corner of the wedge on the counter-clockwise side of the heading.
    pub edge1: Position,
    /// Far corner of the wedge on the clockwise side of the heading.
    pub edge2: Position,
}

impl ViewSector {
    /// The vertices of the sector triangle in construction order.
    pub fn vertices(&self) -> [Point2<f64>; 3] {
        [self.origin.0, self.edge1.0, self.edge2.0]
    }

    /// Area of the sector triangle via the cross product of its edge vectors.
    pub fn area(&self) -> f64 {
        let a = self.edge1.0 - self.origin.0;
        let b = self.edge2.0 - self.origin.0;
        0.5 * (a.x * b.y - a.y * b.x).abs()
    }

    /// Whether the sector has collapsed to zero area and therefore cannot
    /// overlap anything.
    pub fn is_degenerate(&self) -> bool {
        self.area() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_of_a_right_triangle() {
        let sector = ViewSector {
            origin: Position::new(0.0, 0.0),
            edge1: Position::new(4.0, 0.0),
            edge2: Position::new(0.0, 3.0),
        };
        assert_eq!(sector.area(), 6.0);
        assert!(!sector.is_degenerate());
    }

    #[test]
    fn coincident_vertices_are_degenerate() {
        let p = Position::new(5.0, 5.0);
        let sector = ViewSector {
            origin: p,
            edge1: p,
            edge2: p,
        };
        assert_eq!(sector.area(), 0.0);
        assert!(sector.is_degenerate());
    }

    #[test]
    fn area_ignores_winding() {
        let ccw = ViewSector {
            origin: Position::new(0.0, 0.0),
            edge1: Position::new(2.0, 0.0),
            edge2: Position::new(0.0, 2.0),
        };
        let cw = ViewSector {
            origin: Position::new(0.0, 0.0),
            edge1: Position::new(0.0, 2.0),
            edge2: Position::new(2.0, 0.0),
        };
        assert_eq!(ccw.area(), cw.area());
    }
}
