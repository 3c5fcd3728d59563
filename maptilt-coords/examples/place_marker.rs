use maptilt_coords::{MapPoint, TiltAngles, MAP_TILT};

fn main() {
    // --- The production tilt ---

    println!("Map tilt:");
    println!("  about X: {:.2} deg (pitch)", MAP_TILT.about_x.degrees());
    println!("  about Y: {:.2} deg (cant)", MAP_TILT.about_y.degrees());
    println!("  about Z: {:.2} deg (turn)", MAP_TILT.about_z.degrees());
    println!();
    println!("{}", MAP_TILT.rotation());

    // --- Place a few markers picked off the flat map ---

    let markers = [
        ("city hall", MapPoint::flat(0.4, -1.2)),
        ("harbour", MapPoint::flat(-1.808, -0.505)),
        ("antenna, 0.53 up", MapPoint::new(0.0, 0.75, 0.53)),
    ];

    println!("Markers in the scene frame:");
    for (label, map) in markers {
        let scene = map.to_scene(&MAP_TILT);
        println!(
            "  {label:18} map ({:.3}, {:.3}, {:.3}) -> scene ({:.4}, {:.4}, {:.4})",
            map.x, map.y, map.z, scene.x, scene.y, scene.z
        );
    }
    println!();

    // --- Going back: scene coordinates onto the flat map ---

    let scene = markers[0].1.to_scene(&MAP_TILT);
    let restored = scene.to_map(&MAP_TILT);
    println!(
        "Round trip for {}: ({:.4}, {:.4}, {:.4})",
        markers[0].0, restored.x, restored.y, restored.z
    );
    println!();

    // --- A custom tilt, for comparison ---

    let gentle = TiltAngles::from_degrees(-30.0, 0.0, 0.0);
    let scene = MapPoint::flat(0.4, -1.2).to_scene(&gentle);
    println!(
        "Same marker under a gentle -30 deg pitch: ({:.4}, {:.4}, {:.4})",
        scene.x, scene.y, scene.z
    );
}
