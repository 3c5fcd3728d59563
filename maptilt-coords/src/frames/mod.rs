//! Coordinate frames on either side of the tilt.
//!
//! - [`MapPoint`]: the flat 2D map (z = 0 on the map surface)
//! - [`ScenePoint`]: the tilted 3D scene

mod map;
mod scene;

pub use map::MapPoint;
pub use scene::ScenePoint;
