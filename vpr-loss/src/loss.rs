use crate::{broadcast_query_distances, split_tuples, ShapeError};
use itertools::izip;
use log::debug;
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Selects the close-pair penalty of the margin regression loss.
///
/// All variants share the same relevance-weighted structure; only the term
/// applied to relevant (geographically close or high-overlap) pairs differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossKind {
    /// Squared error `(target - distance)²` on relevant pairs.
    MseMargin,
    /// Huber penalty on relevant pairs: quadratic within `delta` of the
    /// target, linear beyond it. Robust to outlier target distances at the
    /// cost of non-smoothness at the threshold.
    HuberMargin,
    /// Same arithmetic as [`LossKind::MseMargin`], for batches supervised by
    /// view overlap: the caller derives `target` as `1 - IoU` and `relevance`
    /// as the IoU itself, so supervision strength grows with visual overlap.
    /// See [`overlap_targets`](crate::overlap_targets).
    IouMargin,
}

/// The scalar loss of a batch along with the per-pair embedding distances it
/// was computed from. The distances are the quantity downstream logging and
/// correlation plots consume.
#[derive(Debug, Clone, PartialEq)]
pub struct LossOutput {
    /// Sum of the per-pair penalties over the whole batch.
    pub loss: f64,
    /// One query-to-reference distance per non-query column, in column order.
    pub distances: Array1<f64>,
}

/// Contains the configuration parameters of the tuple margin regression loss.
///
/// The defaults mirror common place-recognition training setups: a 25 meter
/// margin (the positive-distance threshold of the dataset), a Huber threshold
/// of 2.5, and a stability epsilon of `1e-6` inside the distance root.
///
/// ```
/// use ndarray::array;
/// use vpr_loss::{LossKind, TupleLoss};
///
/// let loss = TupleLoss::new(LossKind::MseMargin).margin(1.0);
/// let total = loss
///     .regression_loss(
///         array![5.0, 0.0].view(),
///         array![5.0, 0.0].view(),
///         array![1.0, 0.0].view(),
///     )
///     .unwrap();
/// // The relevant pair matches its target exactly; the irrelevant pair sits
/// // a full margin short of separation and pays 0.5 * 1².
/// assert!((total - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TupleLoss {
    /// Minimum desired embedding distance for irrelevant pairs. Pairs at or
    /// beyond the margin incur no penalty.
    pub margin: f64,
    /// Huber threshold used by [`LossKind::HuberMargin`].
    pub delta: f64,
    /// Stability constant added under the distance square root.
    pub epsilon: f64,
    /// The close-pair penalty variant.
    pub kind: LossKind,
}

impl Default for TupleLoss {
    fn default() -> Self {
        Self {
            margin: 25.0,
            delta: 2.5,
            epsilon: 1e-6,
            kind: LossKind::MseMargin,
        }
    }
}

impl TupleLoss {
    /// Creates a `TupleLoss` of the given kind with default parameters.
    pub fn new(kind: LossKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Set the margin, in the same units as the target distances.
    ///
    /// Default is `25.0`.
    #[must_use]
    pub fn margin(self, margin: f64) -> Self {
        Self { margin, ..self }
    }

    /// Set the Huber threshold.
    ///
    /// Default is `2.5`.
    #[must_use]
    pub fn delta(self, delta: f64) -> Self {
        Self { delta, ..self }
    }

    /// Set the epsilon added under the distance square root.
    ///
    /// Default is `1e-6`.
    #[must_use]
    pub fn epsilon(self, epsilon: f64) -> Self {
        Self { epsilon, ..self }
    }

    /// Regresses embedding distances against target distances.
    ///
    /// Each pair contributes the relevance-weighted combination
    /// `relevance · close(target, distance) + (1 - relevance) · 0.5 · max(margin - distance, 0)²`
    /// and the batch loss is the sum over all pairs. The far term is clamped
    /// at zero before squaring, so negatives separated beyond the margin
    /// contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::LengthMismatch`] when the three vectors disagree
    /// in length.
    pub fn regression_loss(
        &self,
        distances: ArrayView1<f64>,
        targets: ArrayView1<f64>,
        relevance: ArrayView1<f64>,
    ) -> Result<f64, ShapeError> {
        if distances.len() != targets.len() {
            return Err(ShapeError::LengthMismatch {
                left: distances.len(),
                right: targets.len(),
            });
        }
        if distances.len() != relevance.len() {
            return Err(ShapeError::LengthMismatch {
                left: distances.len(),
                right: relevance.len(),
            });
        }
        let total = izip!(distances.iter(), targets.iter(), relevance.iter())
            .map(|(&distance, &target, &relevance)| {
                let short = (self.margin - distance).max(0.0);
                relevance * self.close_term(distance, target)
                    + (1.0 - relevance) * 0.5 * short * short
            })
            .sum();
        Ok(total)
    }

    /// Runs the whole engine on one batch: validates the tuple structure,
    /// computes the query-to-reference distances, and regresses them against
    /// the targets. Returns the scalar loss together with the distances for
    /// downstream logging.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] from [`split_tuples`] on a malformed batch, or
    /// [`ShapeError::LengthMismatch`] when `targets` or `relevance` do not
    /// have one entry per non-query column.
    pub fn forward(
        &self,
        embeddings: ArrayView2<f64>,
        labels: ArrayView1<f64>,
        targets: ArrayView1<f64>,
        relevance: ArrayView1<f64>,
    ) -> Result<LossOutput, ShapeError> {
        let split = split_tuples(embeddings, labels)?;
        let distances = broadcast_query_distances(embeddings, &split, self.epsilon);
        let loss = self.regression_loss(distances.view(), targets, relevance)?;
        debug!(
            "batch of {} tuples (stride {}): loss {}",
            split.num_tuples(),
            split.tuple_size,
            loss
        );
        Ok(LossOutput { loss, distances })
    }

    // The penalty applied to relevant pairs. The Huber threshold applies per
    // pair, never to the batch as a whole.
    fn close_term(&self, distance: f64, target: f64) -> f64 {
        let residual = target - distance;
        match self.kind {
            LossKind::MseMargin | LossKind::IouMargin => residual * residual,
            LossKind::HuberMargin => {
                if residual.abs() <= self.delta {
                    residual * residual
                } else {
                    // Continuous with the quadratic branch at |residual| == delta.
                    self.delta * (2.0 * residual.abs() - self.delta)
                }
            }
        }
    }
}
