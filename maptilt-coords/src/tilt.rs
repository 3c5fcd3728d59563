//! The fixed rotation that tilts the flat map into the scene.
//!
//! The landing scene renders the 2D map as a plane pitched back, canted, and
//! turned so it reads as a surface in 3D. [`TiltAngles`] names the three axis
//! angles of that orientation and builds the composite rotation; [`MAP_TILT`]
//! holds the production values.

use maptilt_core::{Angle, RotationMatrix3};

/// Axis angles describing how the map plane is oriented in a scene.
///
/// The composite rotation applies the X rotation first, then Y, then Z:
/// `rotation() = Rz · Ry · Rx`. The order is part of the meaning; the same
/// three angles composed another way give a different orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TiltAngles {
    /// Pitch of the map plane about the X axis.
    pub about_x: Angle,
    /// Cant about the Y axis.
    pub about_y: Angle,
    /// Turn about the Z axis (the map's compass heading in the scene).
    pub about_z: Angle,
}

/// The production map tilt: -65.80° about X, -9.20° about Y, -78.00° about Z.
///
/// These are the angles the landing scene applies to the map plane, so a
/// marker converted with them lands exactly where the rendered map expects
/// it. They are deliberately a constant rather than runtime input: positions
/// computed against one tilt would sit in the wrong place under any other.
pub const MAP_TILT: TiltAngles = TiltAngles {
    about_x: Angle::from_degrees(-65.80),
    about_y: Angle::from_degrees(-9.20),
    about_z: Angle::from_degrees(-78.00),
};

impl TiltAngles {
    /// Creates tilt angles from degrees about X, Y, and Z.
    pub fn from_degrees(about_x: f64, about_y: f64, about_z: f64) -> Self {
        Self {
            about_x: Angle::from_degrees(about_x),
            about_y: Angle::from_degrees(about_y),
            about_z: Angle::from_degrees(about_z),
        }
    }

    /// Builds the composite map-to-scene rotation `Rz · Ry · Rx`.
    ///
    /// The rightmost factor acts first on the vector: a point is pitched
    /// about X, then canted about Y, then turned about Z.
    ///
    /// ```
    /// use maptilt_coords::MAP_TILT;
    ///
    /// assert!(MAP_TILT.rotation().is_rotation_matrix(1e-12));
    /// ```
    pub fn rotation(&self) -> RotationMatrix3 {
        RotationMatrix3::about_z(self.about_z.radians())
            * RotationMatrix3::about_y(self.about_y.radians())
            * RotationMatrix3::about_x(self.about_x.radians())
    }

    /// Builds the scene-to-map rotation.
    ///
    /// This is the transpose of [`rotation`](Self::rotation), which for a
    /// rotation matrix is its inverse.
    pub fn inverse_rotation(&self) -> RotationMatrix3 {
        self.rotation().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maptilt_core::RotationMatrix3;

    #[test]
    fn test_map_tilt_angles() {
        assert!((MAP_TILT.about_x.degrees() - (-65.80)).abs() < 1e-12);
        assert!((MAP_TILT.about_y.degrees() - (-9.20)).abs() < 1e-12);
        assert!((MAP_TILT.about_z.degrees() - (-78.00)).abs() < 1e-12);
    }

    #[test]
    fn test_from_degrees_matches_constant() {
        let tilt = TiltAngles::from_degrees(-65.80, -9.20, -78.00);
        assert_eq!(tilt, MAP_TILT);
        assert_eq!(tilt.rotation(), MAP_TILT.rotation());
    }

    #[test]
    fn test_rotation_is_orthogonal() {
        let r = MAP_TILT.rotation();
        assert!(r.is_rotation_matrix(1e-9));
        assert!((r.determinant() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_arbitrary_angles_still_give_a_rotation() {
        let r = TiltAngles::from_degrees(33.0, -120.0, 7.5).rotation();
        assert!(r.is_rotation_matrix(1e-9));
    }

    #[test]
    fn test_zero_tilt_is_identity() {
        let level = TiltAngles {
            about_x: Angle::ZERO,
            about_y: Angle::ZERO,
            about_z: Angle::ZERO,
        };
        assert_eq!(level.rotation(), RotationMatrix3::identity());
    }

    #[test]
    fn test_unit_x_regression() {
        // First basis vector through the production tilt.
        let rotated = MAP_TILT.rotation().apply_to_vector([1.0, 0.0, 0.0]);
        assert!((rotated[0] - 0.2052371699388529).abs() < 1e-12);
        assert!((rotated[1] - (-0.965564969278473)).abs() < 1e-12);
        assert!((rotated[2] - 0.15988118769183485).abs() < 1e-12);
    }

    #[test]
    fn test_composition_order_is_z_then_y_then_x() {
        let rz = RotationMatrix3::about_z(MAP_TILT.about_z.radians());
        let ry = RotationMatrix3::about_y(MAP_TILT.about_y.radians());
        let rx = RotationMatrix3::about_x(MAP_TILT.about_x.radians());

        assert_eq!(MAP_TILT.rotation(), rz.multiply(&ry).multiply(&rx));

        // The reversed order is a materially different orientation.
        let reversed = rx * ry * rz;
        assert!(MAP_TILT.rotation().max_difference(&reversed) > 0.1);
    }

    #[test]
    fn test_inverse_rotation_inverts() {
        let product = MAP_TILT.rotation() * MAP_TILT.inverse_rotation();
        assert!(product.max_difference(&RotationMatrix3::identity()) < 1e-15);
    }
}
