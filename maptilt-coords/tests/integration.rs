use maptilt_core::{RotationMatrix3, Vector3};
use maptilt_coords::{MapPoint, ScenePoint, TiltAngles, MAP_TILT};

// Points a developer would actually feed through the tool: map corners,
// a marker with height, and the origin.
const SAMPLE_POINTS: [[f64; 3]; 5] = [
    [1.0, 0.0, 0.0],
    [10.0, 20.0, 5.0],
    [-1.808, -0.505, 0.53],
    [0.4, -1.2, 0.0],
    [0.0, 0.0, 0.0],
];

// --- Composite rotation properties ---

#[test]
fn production_tilt_is_a_rotation() {
    let r = MAP_TILT.rotation();
    assert!(r.is_rotation_matrix(1e-9));
    assert!((r.determinant() - 1.0).abs() < 1e-12);
}

#[test]
fn arbitrary_tilts_are_rotations() {
    for (x, y, z) in [
        (0.0, 0.0, 0.0),
        (90.0, 0.0, 0.0),
        (-65.8, -9.2, -78.0),
        (12.5, 170.0, -44.0),
        (-179.0, 91.0, 3.0),
    ] {
        let r = TiltAngles::from_degrees(x, y, z).rotation();
        assert!(r.is_rotation_matrix(1e-9), "tilt ({x}, {y}, {z})");
    }
}

#[test]
fn composite_matches_explicit_product() {
    let rx = RotationMatrix3::about_x(MAP_TILT.about_x.radians());
    let ry = RotationMatrix3::about_y(MAP_TILT.about_y.radians());
    let rz = RotationMatrix3::about_z(MAP_TILT.about_z.radians());

    assert_eq!(MAP_TILT.rotation(), rz * ry * rx);
}

#[test]
fn norms_survive_the_tilt() {
    for p in SAMPLE_POINTS {
        let before = Vector3::from_array(p).magnitude();
        let scene = MapPoint::new(p[0], p[1], p[2]).to_scene(&MAP_TILT);
        let after = scene.to_vector3().magnitude();
        assert!((before - after).abs() < 1e-12, "norm changed for {p:?}");
    }
}

#[test]
fn rotated_map_basis_stays_orthonormal() {
    let r = MAP_TILT.rotation();
    let east = r * Vector3::x_axis();
    let north = r * Vector3::y_axis();
    let up = r * Vector3::z_axis();

    assert!((east.magnitude() - 1.0).abs() < 1e-14);
    assert!((north.magnitude() - 1.0).abs() < 1e-14);
    assert!(east.dot(&north).abs() < 1e-14);
    assert!((east.cross(&north) - up).magnitude() < 1e-14);
}

// --- Pinned regression values ---

#[test]
fn unit_x_regression() {
    let scene = MapPoint::new(1.0, 0.0, 0.0).to_scene(&MAP_TILT);

    let tol = 1e-12;
    assert!((scene.x - 0.2052371699388529).abs() < tol);
    assert!((scene.y - (-0.965564969278473)).abs() < tol);
    assert!((scene.z - 0.15988118769183485).abs() < tol);
}

#[test]
fn marker_with_height_regression() {
    let scene = MapPoint::new(10.0, 20.0, 5.0).to_scene(&MAP_TILT);

    let tol = 1e-12;
    assert!((scene.x - 15.07088401541818).abs() < tol);
    assert!((scene.y - (-9.535239577574512)).abs() < tol);
    assert!((scene.z - (-14.38567555563761)).abs() < tol);
}

#[test]
fn flat_marker_regression() {
    let scene = MapPoint::flat(0.4, -1.2).to_scene(&MAP_TILT);

    let tol = 1e-12;
    assert!((scene.x - (-0.43544733615999515)).abs() < tol);
    assert!((scene.y - (-0.317326424692928)).abs() < tol);
    assert!((scene.z - 1.1444166888082188).abs() < tol);
}

// --- Round trips ---

#[test]
fn map_scene_map_roundtrip() {
    for p in SAMPLE_POINTS {
        let map = MapPoint::new(p[0], p[1], p[2]);
        let back = map.to_scene(&MAP_TILT).to_map(&MAP_TILT);

        assert!((map.x - back.x).abs() < 1e-12, "x for {p:?}");
        assert!((map.y - back.y).abs() < 1e-12, "y for {p:?}");
        assert!((map.z - back.z).abs() < 1e-12, "z for {p:?}");
    }
}

#[test]
fn scene_map_scene_roundtrip() {
    let scene = ScenePoint::new(15.07088401541818, -9.535239577574512, -14.38567555563761);
    let back = scene.to_map(&MAP_TILT).to_scene(&MAP_TILT);

    assert!((scene.x - back.x).abs() < 1e-12);
    assert!((scene.y - back.y).abs() < 1e-12);
    assert!((scene.z - back.z).abs() < 1e-12);
}

#[test]
fn inverse_rotation_is_transpose() {
    let r = MAP_TILT.rotation();
    assert_eq!(MAP_TILT.inverse_rotation(), r.transpose());

    let product = r * MAP_TILT.inverse_rotation();
    assert!(product.max_difference(&RotationMatrix3::identity()) < 1e-15);
}
