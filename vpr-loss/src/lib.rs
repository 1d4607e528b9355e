//! This crate contains the tuple-structured distance engine used by
//! [vpr](https://github.com/rust-cv/vpr).
//!
//! Training batches arrive as a `D×N` embedding matrix whose columns are
//! grouped into fixed-size tuples: one query image followed by one positive
//! and several negative reference images. A parallel label vector marks each
//! tuple's query column with the sentinel `-1`. The engine
//!
//! 1. validates the tuple structure and extracts the query columns
//!    ([`split_tuples`]),
//! 2. computes the Euclidean distance from each query to every reference in
//!    its tuple ([`broadcast_query_distances`]), and
//! 3. regresses those distances against target distances from weak
//!    geographic supervision under a margin loss ([`TupleLoss`]).
//!
//! Target distances come either from ground-truth GPS distance
//! ([`geographic_targets`]) or from the view-overlap of the cameras
//! ([`overlap_targets`], built on [`vpr_geom`]).
//!
//! Everything here is a pure function of its inputs: no state is kept across
//! batches, and concurrent invocations on disjoint inputs are safe.

mod error;
mod loss;
mod supervision;
mod tuples;

pub use error::*;
pub use loss::*;
pub use ndarray;
pub use supervision::*;
pub use tuples::*;
