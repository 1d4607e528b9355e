//! A minimal convex polygon clipper.
//!
//! The sectors produced by this crate are always triangles, so polygon
//! intersection only ever needs to handle one convex polygon clipped against
//! another. Sutherland-Hodgman is sufficient for that and keeps the crate free
//! of a general computational geometry dependency.

use alloc::vec::Vec;
use vpr_core::nalgebra::Point2;

/// Signed shoelace area of a polygon. Positive for counter-clockwise winding,
/// negative for clockwise.
pub fn signed_area(polygon: &[Point2<f64>]) -> f64 {
    let mut sum = 0.0;
    for i in 0..polygon.len() {
        let p = polygon[i];
        let q = polygon[(i + 1) % polygon.len()];
        sum += p.x * q.y - q.x * p.y;
    }
    0.5 * sum
}

/// Absolute shoelace area of a polygon.
pub fn area(polygon: &[Point2<f64>]) -> f64 {
    let signed = signed_area(polygon);
    if signed < 0.0 {
        -signed
    } else {
        signed
    }
}

/// Clips `subject` against a convex `clip` polygon with Sutherland-Hodgman and
/// returns the vertices of the intersection polygon.
///
/// The clip polygon must be wound counter-clockwise. Vertices of the subject
/// that lie exactly on a clip edge are kept, so clipping a polygon against
/// itself returns it unchanged. Degenerate inputs never panic; they produce a
/// polygon whose [`area`] is zero.
pub fn intersection(subject: &[Point2<f64>], clip: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let mut output: Vec<Point2<f64>> = subject.to_vec();
    for i in 0..clip.len() {
        if output.is_empty() {
            break;
        }
        let a = clip[i];
        let b = clip[(i + 1) % clip.len()];
        let input = core::mem::take(&mut output);
        for j in 0..input.len() {
            let previous = input[(j + input.len() - 1) % input.len()];
            let current = input[j];
            let previous_inside = is_inside(a, b, previous);
            let current_inside = is_inside(a, b, current);
            if current_inside {
                if !previous_inside {
                    if let Some(p) = edge_crossing(previous, current, a, b) {
                        output.push(p);
                    }
                }
                output.push(current);
            } else if previous_inside {
                if let Some(p) = edge_crossing(previous, current, a, b) {
                    output.push(p);
                }
            }
        }
    }
    output
}

/// A point is inside the half-plane of a counter-clockwise clip edge when it
/// lies on or to the left of the directed line from `a` to `b`.
fn is_inside(a: Point2<f64>, b: Point2<f64>, p: Point2<f64>) -> bool {
    (b - a).perp(&(p - a)) >= 0.0
}

/// Intersection of the segment from `p` to `q` with the infinite line through
/// `a` and `b`. `None` when the segment is parallel to the line, in which case
/// the endpoint handling of the clip loop already covers it.
fn edge_crossing(
    p: Point2<f64>,
    q: Point2<f64>,
    a: Point2<f64>,
    b: Point2<f64>,
) -> Option<Point2<f64>> {
    let r = q - p;
    let s = b - a;
    let denominator = r.perp(&s);
    if denominator == 0.0 {
        return None;
    }
    let t = (a - p).perp(&s) / denominator;
    Some(p + r * t)
}
