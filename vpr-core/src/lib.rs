//! # VPR Core
//!
//! This library provides common abstractions and types for geo-supervised visual
//! place recognition (VPR) in Rust. All the crates in the vpr ecosystem that have
//! or depend on VPR types depend on this crate. This includes things like camera
//! positions, compass headings, and field-of-view sectors. The crate is designed
//! to be very small so that it adds negligable build time.
//!
//! The crate is designed to work with `#![no_std]`. `libm` is used (through
//! [`num-traits`] and `nalgebra`) for all math algorithms that aren't present in
//! `core`. Any code that doesn't need to be shared across all VPR crates should
//! not belong in this crate.
//!
//! ## Conventions
//!
//! Positions live on a planar metric grid (projected UTM-like easting/northing
//! in meters). Headings arrive in compass convention (0 = north, clockwise
//! positive, degrees) and are converted to the standard mathematical convention
//! (0 = east, counter-clockwise positive, radians) before any geometry is built
//! from them. The conversion is a fixed rule:
//!
//! ```text
//! cartesian_deg = (450 - compass_deg) mod 360
//! ```
//!
//! A camera's visible ground area is approximated by a triangular wedge
//! protruding from its position along its heading:
//!
//! ```text
//!         e1        e2
//!          \        /
//!           \      /
//!            \    /
//!             \  /
//!              O      O = camera position, e1/e2 = wedge edge points
//! ```

#![no_std]

mod heading;
mod position;
mod sector;

pub use heading::*;
pub use nalgebra;
pub use position::*;
pub use sector::*;
