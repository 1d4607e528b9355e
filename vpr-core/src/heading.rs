use derive_more::{AsMut, AsRef, Deref, DerefMut, From, Into};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A camera heading in compass convention: 0 degrees points north and angles
/// grow clockwise. Any real value is accepted; the angle is reduced into
/// `[0, 360)` degree space when converted.
///
/// GPS records commonly store the camera azimuth this way, while all of the
/// geometry in the vpr crates is performed in the standard mathematical
/// convention (0 = east, counter-clockwise positive, radians). Use
/// [`Heading::cartesian_radians`] to cross that boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsMut, AsRef, Deref, DerefMut, From, Into)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Heading(pub f64);

impl Heading {
    /// Creates a heading from compass degrees.
    pub fn new(compass_degrees: f64) -> Self {
        Self(compass_degrees)
    }

    /// The heading in the mathematical convention, in degrees within `[0, 360)`.
    ///
    /// Compass north (0) maps to cartesian up (90) and compass east (90) maps
    /// to cartesian right (0).
    ///
    /// ```
    /// use vpr_core::Heading;
    /// assert_eq!(Heading(0.0).cartesian_degrees(), 90.0);
    /// assert_eq!(Heading(90.0).cartesian_degrees(), 0.0);
    /// ```
    pub fn cartesian_degrees(self) -> f64 {
        // `%` keeps the sign of the dividend, so fold negatives back into range.
        let degrees = (450.0 - self.0) % 360.0;
        if degrees < 0.0 {
            degrees + 360.0
        } else {
            degrees
        }
    }

    /// The heading in the mathematical convention, in radians within `[0, 2π)`.
    ///
    /// This is a total function: any real compass angle, including values far
    /// outside `[0, 360)`, reduces to the equivalent cartesian angle.
    ///
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use vpr_core::Heading;
    /// assert!((Heading(0.0).cartesian_radians() - FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn cartesian_radians(self) -> f64 {
        self.cartesian_degrees() * core::f64::consts::PI / 180.0
    }
}
