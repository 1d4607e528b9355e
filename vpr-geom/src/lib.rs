//! This crate contains the field-of-view geometry used by [vpr](https://github.com/rust-cv/vpr).
//!
//! ## Visual overlap
//!
//! In this problem we know where two cameras stood and which way they pointed,
//! and we want to quantify how likely they are to have photographed the same
//! scene. Each camera's visible ground area is approximated by a triangular
//! wedge (a [`vpr_core::ViewSector`]) protruding from its position along its
//! heading, and the likelihood of shared content is the intersection-over-union
//! of the two wedges.
//!
//! - `O` the position of a camera
//! - `e1`/`e2` the far corners of its view wedge
//! - `#` the overlap region that IoU measures
//!
//! ```text
//!   e1         e2
//!    \         /
//!     \       /   e1'        e2'
//!      \     /#\  /          /
//!       \   /###\/          /
//!        \ /####/\         /
//!         O####/  \       /
//!          \##/    \     /
//!           \/      \   /
//!                    \ /
//!                     O'
//! ```
//!
//! Both wedges are triangles, so the intersection is computed with a small
//! Sutherland-Hodgman clipper in [`clip`] rather than a general computational
//! geometry dependency.

#![no_std]

extern crate alloc;

pub mod clip;
pub mod sector;
