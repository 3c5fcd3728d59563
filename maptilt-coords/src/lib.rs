//! Conversion between flat map coordinates and tilted scene coordinates.
//!
//! The landing scene draws its 2D map as a plane rotated into 3D. This crate
//! holds the two coordinate frames on either side of that rotation, the
//! fixed production tilt ([`MAP_TILT`]), and the `maptilt` binary that
//! converts one point per invocation:
//!
//! ```
//! use maptilt_coords::{MapPoint, MAP_TILT};
//!
//! let marker = MapPoint::flat(0.4, -1.2);
//! let scene = marker.to_scene(&MAP_TILT);
//! assert!((scene.z - 1.1444166888082188).abs() < 1e-12);
//! ```

pub mod frames;
pub mod tilt;

pub use frames::{MapPoint, ScenePoint};
pub use tilt::{TiltAngles, MAP_TILT};

pub use maptilt_core::{Angle, RotationMatrix3, Vector3};
