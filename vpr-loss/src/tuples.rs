use crate::ShapeError;
use log::trace;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Reserved label marking the query column of each tuple.
pub const QUERY_SENTINEL: f64 = -1.0;

/// The query columns extracted from a tuple batch, together with the tuple
/// stride that was validated against the label vector.
#[derive(Debug, Clone, PartialEq)]
pub struct TupleSplit {
    /// One column per tuple: the query embeddings, `D×Q`.
    pub queries: Array2<f64>,
    /// Columns per tuple, including the query.
    pub tuple_size: usize,
}

impl TupleSplit {
    /// Number of tuples in the batch.
    pub fn num_tuples(&self) -> usize {
        self.queries.ncols()
    }
}

/// Validates the tuple structure of a batch and extracts its query columns.
///
/// The columns of `embeddings` must be partitioned into contiguous tuples of
/// equal size, each led by its query column, and `labels` must carry
/// [`QUERY_SENTINEL`] exactly at those leading columns. The tuple size is
/// derived from the sentinel count and the whole contract is checked up front,
/// so downstream indexing can trust the stride.
///
/// # Errors
///
/// Returns a [`ShapeError`] when the label vector length disagrees with the
/// column count, when no sentinel is present, when the column count is not a
/// multiple of the sentinel count, or when any sentinel sits away from the
/// head of its tuple.
pub fn split_tuples(
    embeddings: ArrayView2<f64>,
    labels: ArrayView1<f64>,
) -> Result<TupleSplit, ShapeError> {
    let columns = embeddings.ncols();
    if labels.len() != columns {
        return Err(ShapeError::LabelLength {
            labels: labels.len(),
            columns,
        });
    }
    let queries = labels.iter().filter(|&&label| label == QUERY_SENTINEL).count();
    if queries == 0 {
        return Err(ShapeError::NoQueries);
    }
    if columns % queries != 0 {
        return Err(ShapeError::RaggedTuples { columns, queries });
    }
    let tuple_size = columns / queries;
    for (i, &label) in labels.iter().enumerate() {
        let is_sentinel = label == QUERY_SENTINEL;
        let leads_tuple = i % tuple_size == 0;
        if is_sentinel != leads_tuple {
            return Err(ShapeError::MisplacedSentinel {
                tuple: i / tuple_size,
            });
        }
    }
    let query_columns: Vec<usize> = (0..columns).step_by(tuple_size).collect();
    trace!(
        "split {} columns into {} tuples of size {}",
        columns,
        queries,
        tuple_size
    );
    Ok(TupleSplit {
        queries: embeddings.select(Axis(1), &query_columns),
        tuple_size,
    })
}

/// Euclidean distance from each tuple's query to every reference column of
/// that tuple, in column order with the query columns themselves excluded.
///
/// `epsilon` is added to the summed squared difference before the square root,
/// so the distance between identical embeddings is `sqrt(epsilon)` rather than
/// 0 and the gradient of the root never degenerates. `split` must have been
/// produced by [`split_tuples`] on the same `embeddings` matrix.
pub fn broadcast_query_distances(
    embeddings: ArrayView2<f64>,
    split: &TupleSplit,
    epsilon: f64,
) -> Array1<f64> {
    let stride = split.tuple_size;
    let mut distances = Array1::zeros(embeddings.ncols() - split.num_tuples());
    let mut pair = 0;
    for (tuple, query) in split.queries.axis_iter(Axis(1)).enumerate() {
        for offset in 1..stride {
            let reference = embeddings.column(tuple * stride + offset);
            let squared: f64 = query
                .iter()
                .zip(reference.iter())
                .map(|(q, r)| (q - r) * (q - r))
                .sum();
            distances[pair] = (squared + epsilon).sqrt();
            pair += 1;
        }
    }
    distances
}
