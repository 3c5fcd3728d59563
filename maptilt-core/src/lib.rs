//! Low-level rotation math for tilting flat maps into 3D scenes.
//!
//! `maptilt-core` provides the mathematical building blocks behind the
//! map-to-scene coordinate pipeline: rotation matrices, 3D vectors, and a
//! typed angle. It has no opinion about which way a particular scene is
//! tilted; that configuration lives one layer up.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Typed angles with degree/radian conversion |
//! | [`matrix`] | 3×3 rotation matrices and 3D vectors |
//! | [`constants`] | Unit conversions and circle constants |
//!
//! # Building a Tilt
//!
//! Axis rotations compose by multiplication, rightmost first:
//!
//! ```
//! use maptilt_core::{Angle, RotationMatrix3, Vector3};
//!
//! let pitch = Angle::from_degrees(-65.80);
//! let cant = Angle::from_degrees(-9.20);
//! let turn = Angle::from_degrees(-78.00);
//!
//! // Pitch about X first, then cant about Y, then turn about Z
//! let tilt = RotationMatrix3::about_z(turn.radians())
//!     * RotationMatrix3::about_y(cant.radians())
//!     * RotationMatrix3::about_x(pitch.radians());
//!
//! let marker = tilt * Vector3::new(1.0, 0.0, 0.0);
//! assert!((marker.magnitude() - 1.0).abs() < 1e-12);
//! ```
//!
//! # Design Notes
//!
//! - **Radians internally**: all angular computations use radians. The
//!   [`Angle`] type converts on the way in and out.
//!
//! - **Active rotations**: matrices rotate the vector, not the frame. See
//!   the [`matrix`] module docs for the exact convention.

pub mod angle;
pub mod constants;
pub mod matrix;

pub use angle::Angle;
pub use matrix::{RotationMatrix3, Vector3};
