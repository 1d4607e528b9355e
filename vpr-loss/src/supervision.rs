//! Builders for the per-pair target vectors consumed by the regression loss.
//!
//! Both builders produce one value per query/reference pair of a batch, ready
//! to be passed to [`TupleLoss::regression_loss`](crate::TupleLoss) or
//! [`TupleLoss::forward`](crate::TupleLoss::forward). They are computed once
//! per batch from the GPS records and consumed immediately; nothing is
//! persisted.

use ndarray::Array1;
use vpr_core::{Heading, Position};
use vpr_geom::sector::{batch_ious, FieldOfView};

/// Ground-truth geographic distance from a query to each of its references,
/// in the units of the position coordinate system.
pub fn geographic_targets(query: Position, references: &[Position]) -> Array1<f64> {
    references
        .iter()
        .map(|&reference| query.distance(reference))
        .collect()
}

/// Overlap-based supervision for one tuple: target distances together with the
/// relevance weights the continuous IoU loss expects.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapTargets {
    /// `1 - IoU` per reference: cameras that see the same scene should embed
    /// close together.
    pub targets: Array1<f64>,
    /// The raw IoU per reference, used as the continuous relevance weight.
    pub relevance: Array1<f64>,
}

/// Builds overlap supervision for a query camera against its references.
///
/// Each camera's view sector is constructed with `fov`, and every reference
/// gets a target of `1 - IoU` with relevance `IoU`. Degenerate sectors
/// (zero view distance or angle) produce an IoU of 0 and therefore a target
/// of 1 with zero relevance.
pub fn overlap_targets(
    fov: &FieldOfView,
    query: (Position, Heading),
    references: &[(Position, Heading)],
) -> OverlapTargets {
    let query_sector = fov.sector(query.0, query.1);
    let reference_sectors = fov.sectors(references.iter().copied());
    let relevance = batch_ious(&query_sector, &reference_sectors);
    let targets = relevance.iter().map(|&overlap| 1.0 - overlap).collect();
    OverlapTargets {
        targets,
        relevance: Array1::from_vec(relevance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geographic_targets_are_plain_distances() {
        let query = Position::new(0.0, 0.0);
        let references = [
            Position::new(3.0, 4.0),
            Position::new(0.0, 0.0),
            Position::new(-6.0, 8.0),
        ];
        let targets = geographic_targets(query, &references);
        assert_eq!(targets, ndarray::array![5.0, 0.0, 10.0]);
    }

    #[test]
    fn overlap_targets_complement_relevance() {
        let fov = FieldOfView::new();
        let query = (Position::new(0.0, 0.0), Heading(0.0));
        let references = [
            (Position::new(0.0, 0.0), Heading(0.0)),
            (Position::new(0.0, 0.0), Heading(45.0)),
            (Position::new(5000.0, 0.0), Heading(0.0)),
        ];
        let supervision = overlap_targets(&fov, query, &references);
        assert_eq!(supervision.targets.len(), 3);
        for (target, relevance) in supervision
            .targets
            .iter()
            .zip(supervision.relevance.iter())
        {
            assert!((target + relevance - 1.0).abs() < 1e-12);
        }
        // Identical cameras overlap fully, far-away ones not at all.
        assert_eq!(supervision.relevance[0], 1.0);
        assert!(supervision.relevance[1] > 0.0 && supervision.relevance[1] < 1.0);
        assert_eq!(supervision.relevance[2], 0.0);
    }

    #[test]
    fn degenerate_fov_yields_zero_relevance() {
        let fov = FieldOfView::new().view_angle(0.0);
        let supervision = overlap_targets(
            &fov,
            (Position::new(0.0, 0.0), Heading(0.0)),
            &[(Position::new(0.0, 0.0), Heading(0.0))],
        );
        assert_eq!(supervision.relevance[0], 0.0);
        assert_eq!(supervision.targets[0], 1.0);
    }
}
