use maptilt_core::Vector3;

use crate::frames::MapPoint;
use crate::tilt::TiltAngles;

/// A point in the tilted scene frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ScenePoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_vector3(v: &Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }

    pub fn to_vector3(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Carries the point back onto the flat map.
    ///
    /// Uses the transpose of the tilt rotation, which is its inverse.
    pub fn to_map(&self, tilt: &TiltAngles) -> MapPoint {
        let restored = tilt.inverse_rotation() * self.to_vector3();
        MapPoint::from_vector3(&restored)
    }
}
