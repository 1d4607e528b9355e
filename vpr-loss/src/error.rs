use thiserror::Error;

/// Batch-structure violations.
///
/// Every variant signals a caller bug in how the batch was assembled, so none
/// of them is retryable: the batch must be rebuilt before the engine is called
/// again. Degenerate geometry is deliberately not represented here; a
/// zero-area view sector simply produces an overlap of 0.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("label vector has {labels} entries but the embedding matrix has {columns} columns")]
    LabelLength { labels: usize, columns: usize },

    #[error("no query sentinel in the label vector")]
    NoQueries,

    #[error("{columns} embedding columns cannot be split into {queries} equal tuples")]
    RaggedTuples { columns: usize, queries: usize },

    #[error("tuple {tuple} does not carry the query sentinel at its first column")]
    MisplacedSentinel { tuple: usize },

    #[error("per-pair vectors disagree in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}
