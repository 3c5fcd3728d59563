//! Typed angles for rotation parameters.
//!
//! This module provides [`Angle`], the angular measurement type used for tilt
//! parameters. Angles are stored internally as radians (f64) but can be
//! constructed from and converted to degrees.
//!
//! **Why radians internally?** Trigonometric functions operate on radians.
//! Storing radians avoids repeated conversions when building rotation
//! matrices. The degree-based constructor and accessor provide ergonomic APIs
//! for human-readable values, which is how scene tilts are usually specified.
//!
//! # Quick Start
//!
//! ```
//! use maptilt_core::Angle;
//!
//! let tilt = Angle::from_degrees(-65.80);
//! assert!((tilt.degrees() - (-65.80)).abs() < 1e-10);
//!
//! let (sin, cos) = tilt.sin_cos();
//! assert!((sin * sin + cos * cos - 1.0).abs() < 1e-15);
//! ```
//!
//! For terser code, use the free functions [`deg`] and [`rad`]:
//!
//! ```
//! use maptilt_core::angle::{deg, rad};
//!
//! let a = deg(90.0);
//! let b = rad(maptilt_core::constants::HALF_PI);
//! assert!((a.radians() - b.radians()).abs() < 1e-15);
//! ```

use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};

/// An angular measurement stored as radians.
///
/// Both constructors are `const`, so fixed tilt configurations can live in
/// `const` items.
///
/// Note: `Eq` and `Ord` are not implemented because f64 can be NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle (0 radians).
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Creates an angle from radians.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    ///
    /// # Example
    ///
    /// ```
    /// use maptilt_core::Angle;
    ///
    /// let angle = Angle::from_degrees(180.0);
    /// assert!((angle.radians() - std::f64::consts::PI).abs() < 1e-10);
    /// ```
    #[inline]
    pub const fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg * DEG_TO_RAD,
        }
    }

    /// Returns the angle in radians.
    ///
    /// This is the internal representation, so no conversion occurs.
    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad * RAD_TO_DEG
    }

    /// Returns the sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.rad.sin()
    }

    /// Returns the cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.rad.cos()
    }

    /// Returns both sine and cosine of the angle as `(sin, cos)`.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.rad.sin_cos()
    }
}

/// Creates an angle from radians. Shorthand for [`Angle::from_radians`].
#[inline]
pub fn rad(v: f64) -> Angle {
    Angle::from_radians(v)
}

/// Creates an angle from degrees. Shorthand for [`Angle::from_degrees`].
///
/// # Example
///
/// ```
/// use maptilt_core::angle::deg;
///
/// let angle = deg(45.0);
/// assert!((angle.radians() - std::f64::consts::FRAC_PI_4).abs() < 1e-10);
/// ```
#[inline]
pub fn deg(v: f64) -> Angle {
    Angle::from_degrees(v)
}
