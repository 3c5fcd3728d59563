use maptilt_core::Vector3;

use crate::frames::ScenePoint;
use crate::tilt::TiltAngles;

/// A point in the flat map frame.
///
/// `x` and `y` locate the point on the 2D map. `z` is height above the map
/// plane; anything drawn on the map itself sits at z = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MapPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A point on the map surface itself. The map is flat, so z = 0.
    pub fn flat(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
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

    /// Rotates the point into the tilted scene frame.
    pub fn to_scene(&self, tilt: &TiltAngles) -> ScenePoint {
        let rotated = tilt.rotation() * self.to_vector3();
        ScenePoint::from_vector3(&rotated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tilt::MAP_TILT;

    #[test]
    fn test_flat_sits_on_plane() {
        let p = MapPoint::flat(0.4, -1.2);
        assert_eq!(p, MapPoint::new(0.4, -1.2, 0.0));
    }

    #[test]
    fn test_vector3_roundtrip() {
        let p = MapPoint::new(1.5, -2.5, 0.25);
        assert_eq!(MapPoint::from_vector3(&p.to_vector3()), p);
    }

    #[test]
    fn test_origin_stays_put() {
        let origin = MapPoint::new(0.0, 0.0, 0.0).to_scene(&MAP_TILT);
        assert_eq!(origin.x, 0.0);
        assert_eq!(origin.y, 0.0);
        assert_eq!(origin.z, 0.0);
    }

    #[test]
    fn test_unit_x_to_scene() {
        let scene = MapPoint::new(1.0, 0.0, 0.0).to_scene(&MAP_TILT);

        let tol = 1e-12;
        assert!((scene.x - 0.2052371699388529).abs() < tol, "X component");
        assert!((scene.y - (-0.965564969278473)).abs() < tol, "Y component");
        assert!((scene.z - 0.15988118769183485).abs() < tol, "Z component");
    }
}
