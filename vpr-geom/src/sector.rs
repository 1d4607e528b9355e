//! Construction of view sectors from GPS positions and compass headings, and
//! the overlap (IoU) computations between them.

use crate::clip;
use alloc::vec::Vec;
use core::f64::consts::FRAC_PI_2;
use float_ord::FloatOrd;
use vpr_core::nalgebra::Point2;
use vpr_core::{Heading, Position, ViewSector};

/// How far out a camera is assumed to see, in meters.
pub const DEFAULT_VIEW_DISTANCE: f64 = 50.0;

/// The angular width of a camera's view wedge, in radians.
pub const DEFAULT_VIEW_ANGLE: f64 = FRAC_PI_2;

/// Contains the configuration parameters for building view sectors.
///
/// The defaults assume a street-level camera that sees roughly 50 meters out
/// with a 90 degree field of view. Both parameters can be adjusted with the
/// builder methods.
///
/// ```
/// use vpr_core::{Heading, Position};
/// use vpr_geom::sector::FieldOfView;
///
/// let fov = FieldOfView::new().view_distance(30.0);
/// let sector = fov.sector(Position::new(0.0, 0.0), Heading(0.0));
/// // Compass north points up the northing axis.
/// assert!(sector.edge1.y > 0.0 && sector.edge2.y > 0.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FieldOfView {
    /// Distance from the camera to the far corners of the wedge (meters).
    pub view_distance: f64,
    /// Angular width of the wedge (radians). Must be below π for the sector
    /// triangle to be simple.
    pub view_angle: f64,
}

impl Default for FieldOfView {
    fn default() -> Self {
        Self {
            view_distance: DEFAULT_VIEW_DISTANCE,
            view_angle: DEFAULT_VIEW_ANGLE,
        }
    }
}

impl FieldOfView {
    /// Creates a `FieldOfView` with default values.
    ///
    /// Same as calling [`Default::default`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the view distance in meters.
    ///
    /// Default is `50.0`.
    #[must_use]
    pub fn view_distance(self, view_distance: f64) -> Self {
        Self {
            view_distance,
            ..self
        }
    }

    /// Set the view angle in radians.
    ///
    /// Default is `π/2`.
    #[must_use]
    pub fn view_angle(self, view_angle: f64) -> Self {
        Self { view_angle, ..self }
    }

    /// Builds the view sector of a camera at `position` pointing along
    /// `heading`.
    ///
    /// The two edge points sit at `heading ± view_angle / 2` (in cartesian
    /// angle space), `view_distance` away from the position. A non-positive
    /// view distance or view angle collapses the sector to zero area at the
    /// position instead of failing; such a sector has IoU 0 with everything.
    pub fn sector(&self, position: Position, heading: Heading) -> ViewSector {
        if self.view_distance <= 0.0 || self.view_angle <= 0.0 {
            return ViewSector {
                origin: position,
                edge1: position,
                edge2: position,
            };
        }
        let theta = heading.cartesian_radians();
        ViewSector {
            origin: position,
            edge1: position.offset(theta + self.view_angle / 2.0, self.view_distance),
            edge2: position.offset(theta - self.view_angle / 2.0, self.view_distance),
        }
    }

    /// Builds one sector per `(position, heading)` pair, preserving order.
    pub fn sectors(&self, points: impl IntoIterator<Item = (Position, Heading)>) -> Vec<ViewSector> {
        points
            .into_iter()
            .map(|(position, heading)| self.sector(position, heading))
            .collect()
    }
}

/// Intersection-over-union of two view sectors, in `[0, 1]`.
///
/// Returns 1 for identical sectors, 0 for disjoint ones, and 0 (never NaN or
/// an error) whenever either sector is degenerate. Symmetric in its arguments
/// up to floating point accumulation.
///
/// ```
/// use vpr_core::{Heading, Position};
/// use vpr_geom::sector::{iou, FieldOfView};
///
/// let fov = FieldOfView::new();
/// let a = fov.sector(Position::new(0.0, 0.0), Heading(45.0));
/// let b = fov.sector(Position::new(0.0, 0.0), Heading(45.0));
/// assert_eq!(iou(&a, &b), 1.0);
/// ```
pub fn iou(a: &ViewSector, b: &ViewSector) -> f64 {
    let pa = counter_clockwise(a.vertices());
    let pb = counter_clockwise(b.vertices());
    // All three areas go through the same shoelace so that clipping a sector
    // against itself divides two bit-identical values.
    let area_a = clip::area(&pa);
    let area_b = clip::area(&pb);
    let intersection = clip::area(&clip::intersection(&pa, &pb));
    let union = area_a + area_b - intersection;
    if union <= 0.0 {
        return 0.0;
    }
    (intersection / union).clamp(0.0, 1.0)
}

/// IoU of a query sector against each candidate, preserving order.
pub fn batch_ious(query: &ViewSector, candidates: &[ViewSector]) -> Vec<f64> {
    candidates
        .iter()
        .map(|candidate| iou(query, candidate))
        .collect()
}

/// Index and IoU of the candidate overlapping the query most, or `None` for an
/// empty candidate list.
pub fn best_overlap(query: &ViewSector, candidates: &[ViewSector]) -> Option<(usize, f64)> {
    batch_ious(query, candidates)
        .into_iter()
        .enumerate()
        .max_by_key(|&(_, overlap)| FloatOrd(overlap))
}

// The clipper requires counter-clockwise winding.
fn counter_clockwise(mut vertices: [Point2<f64>; 3]) -> [Point2<f64>; 3] {
    if clip::signed_area(&vertices) < 0.0 {
        vertices.swap(1, 2);
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    fn close(a: f64, b: f64) -> bool {
        let d = a - b;
        let d = if d < 0.0 { -d } else { d };
        d < 1e-9
    }

    #[test]
    fn identical_sectors_have_full_overlap() {
        let fov = FieldOfView::new();
        let a = fov.sector(Position::new(312.0, 7.5), Heading(123.0));
        let b = fov.sector(Position::new(312.0, 7.5), Heading(123.0));
        assert_eq!(iou(&a, &b), 1.0);
        assert_eq!(iou(&a, &a), 1.0);
    }

    #[test]
    fn distant_sectors_are_disjoint() {
        let fov = FieldOfView::new();
        let a = fov.sector(Position::new(0.0, 0.0), Heading(0.0));
        let b = fov.sector(Position::new(10_000.0, 0.0), Heading(0.0));
        assert_eq!(iou(&a, &b), 0.0);
    }

    #[test]
    fn opposed_headings_from_one_position_share_only_the_origin() {
        let fov = FieldOfView::new();
        let north = fov.sector(Position::new(0.0, 0.0), Heading(0.0));
        let south = fov.sector(Position::new(0.0, 0.0), Heading(180.0));
        // The wedges touch at the shared origin, which contributes no area.
        assert!(iou(&north, &south) < 1e-9);
    }

    #[test]
    fn partial_overlap_is_strictly_between_zero_and_one() {
        let fov = FieldOfView::new();
        let a = fov.sector(Position::new(0.0, 0.0), Heading(0.0));
        let b = fov.sector(Position::new(0.0, 0.0), Heading(45.0));
        let overlap = iou(&a, &b);
        assert!(overlap > 0.0 && overlap < 1.0);
    }

    #[test]
    fn degenerate_sectors_overlap_nothing() {
        let fov = FieldOfView::new();
        let real = fov.sector(Position::new(0.0, 0.0), Heading(0.0));
        let flat = fov
            .view_distance(0.0)
            .sector(Position::new(0.0, 0.0), Heading(0.0));
        assert!(flat.is_degenerate());
        assert_eq!(iou(&flat, &real), 0.0);
        assert_eq!(iou(&real, &flat), 0.0);
        assert_eq!(iou(&flat, &flat), 0.0);
        assert!(!iou(&flat, &real).is_nan());
    }

    #[test]
    fn randomized_pairs_stay_in_range_and_symmetric() {
        let mut rng = Pcg64::seed_from_u64(0x7eac);
        let fov = FieldOfView::new();
        for _ in 0..500 {
            let a = fov.sector(
                Position::new(rng.gen_range(-60.0..60.0), rng.gen_range(-60.0..60.0)),
                Heading(rng.gen_range(-360.0..720.0)),
            );
            let b = fov.sector(
                Position::new(rng.gen_range(-60.0..60.0), rng.gen_range(-60.0..60.0)),
                Heading(rng.gen_range(-360.0..720.0)),
            );
            let ab = iou(&a, &b);
            let ba = iou(&b, &a);
            assert!((0.0..=1.0).contains(&ab));
            assert!(close(ab, ba));
        }
    }

    #[test]
    fn sectors_preserves_input_order() {
        let fov = FieldOfView::new();
        let points = [
            (Position::new(0.0, 0.0), Heading(0.0)),
            (Position::new(5.0, 5.0), Heading(90.0)),
            (Position::new(-3.0, 8.0), Heading(270.0)),
        ];
        let sectors = fov.sectors(points);
        assert_eq!(sectors.len(), 3);
        for ((position, _), sector) in points.iter().zip(sectors.iter()) {
            assert_eq!(sector.origin, *position);
        }
    }

    #[test]
    fn best_overlap_picks_the_closest_candidate() {
        let fov = FieldOfView::new();
        let query = fov.sector(Position::new(0.0, 0.0), Heading(0.0));
        let candidates = [
            fov.sector(Position::new(500.0, 0.0), Heading(0.0)),
            fov.sector(Position::new(1.0, 1.0), Heading(5.0)),
            fov.sector(Position::new(40.0, 0.0), Heading(0.0)),
        ];
        let (index, overlap) = best_overlap(&query, &candidates).unwrap();
        assert_eq!(index, 1);
        assert!(overlap > 0.5);
        assert!(best_overlap(&query, &[]).is_none());
    }

    #[test]
    fn batch_ious_matches_pairwise_iou() {
        let fov = FieldOfView::new();
        let query = fov.sector(Position::new(0.0, 0.0), Heading(0.0));
        let candidates = [
            fov.sector(Position::new(0.0, 0.0), Heading(30.0)),
            fov.sector(Position::new(20.0, 0.0), Heading(0.0)),
        ];
        let all = batch_ious(&query, &candidates);
        assert_eq!(all.len(), 2);
        for (overlap, candidate) in all.iter().zip(candidates.iter()) {
            assert_eq!(*overlap, iou(&query, candidate));
        }
    }
}
