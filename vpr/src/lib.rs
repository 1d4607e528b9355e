//! # `vpr`
//!
//! Batteries-included pure-Rust geo-supervised visual place recognition crate
//!
//! This crate should only be used for documentation/reference and for quickly
//! creating and running a place-recognition sample/routine. If you are making
//! a production application, import the dependencies from this crate
//! individually so that you don't have an explosive number of dependencies.
//!
//! All of the basic types (positions, headings, view sectors) are included in
//! the root of the crate. Modules are created to store the algorithms that
//! operate on them:
//!
//! ## Modules
//! * [`geom`] - field-of-view sector construction and overlap (IoU) geometry
//! * [`loss`] - tuple-structured embedding distances and margin regression
//!   losses under geographic or overlap supervision
//!
//! A typical training step builds supervision with [`geom`] and [`loss`]
//! target builders, then evaluates the loss:
//!
//! ```
//! use ndarray::array;
//! use vpr::loss::{LossKind, TupleLoss};
//!
//! // One tuple: a query at the origin and two references.
//! let embeddings = array![[0.0, 3.0, 0.0], [0.0, 4.0, 0.0]];
//! let labels = array![-1.0, 1.0, 0.0];
//! let output = TupleLoss::new(LossKind::MseMargin)
//!     .margin(1.0)
//!     .forward(
//!         embeddings.view(),
//!         labels.view(),
//!         array![5.0, 0.0].view(),
//!         array![1.0, 0.0].view(),
//!     )
//!     .unwrap();
//! assert!(output.loss < 0.5);
//! ```

#![no_std]

pub use vpr_core::*;

/// Field-of-view geometry (sector construction, IoU)
pub mod geom {
    #[cfg(feature = "vpr-geom")]
    pub use vpr_geom::clip;
    #[cfg(feature = "vpr-geom")]
    pub use vpr_geom::sector;
    #[cfg(feature = "vpr-geom")]
    pub use vpr_geom::sector::{batch_ious, best_overlap, iou, FieldOfView};
}

/// Tuple-structured distance engine and margin regression losses
pub mod loss {
    #[cfg(feature = "vpr-loss")]
    pub use vpr_loss::*;
}
