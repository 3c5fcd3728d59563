use clap::Parser;
use maptilt_coords::{MapPoint, ScenePoint, MAP_TILT};

#[derive(Parser, Debug)]
#[command(name = "maptilt")]
#[command(about = "Rotate a flat-map coordinate into the tilted 3D scene frame")]
struct Cli {
    /// X coordinate on the flat map
    #[arg(allow_negative_numbers = true)]
    x: f64,

    /// Y coordinate on the flat map
    #[arg(allow_negative_numbers = true)]
    y: f64,

    /// Height above the map plane (the map itself is flat)
    #[arg(allow_negative_numbers = true, default_value_t = 0.0)]
    z: f64,
}

fn main() {
    let cli = Cli::parse();

    let point = MapPoint::new(cli.x, cli.y, cli.z);
    let rotated = point.to_scene(&MAP_TILT);

    println!("{}", original_line(&point));
    println!("{}", rotated_line(&rotated));
}

/// Echoes the input coordinates. `{:?}` keeps the shortest round-trip float
/// form, so an input of `10` prints as `10.0`.
fn original_line(point: &MapPoint) -> String {
    format!(
        "Original point: ({:?}, {:?}, {:?})",
        point.x, point.y, point.z
    )
}

/// Scene coordinates at four decimal places, ready to paste into scene code.
fn rotated_line(point: &ScenePoint) -> String {
    format!(
        "Rotated point: ({:.4}, {:.4}, {:.4})",
        point.x, point.y, point.z
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_two_args_default_z() {
        let cli = Cli::try_parse_from(["maptilt", "0.4", "-1.2"]).unwrap();
        assert_eq!(cli.x, 0.4);
        assert_eq!(cli.y, -1.2);
        assert_eq!(cli.z, 0.0);
    }

    #[test]
    fn test_three_args() {
        let cli = Cli::try_parse_from(["maptilt", "10", "20", "5"]).unwrap();
        assert_eq!(cli.x, 10.0);
        assert_eq!(cli.y, 20.0);
        assert_eq!(cli.z, 5.0);
    }

    #[test]
    fn test_negative_coordinates() {
        let cli = Cli::try_parse_from(["maptilt", "-1.808", "-0.505", "0.53"]).unwrap();
        assert_eq!(cli.x, -1.808);
        assert_eq!(cli.y, -0.505);
        assert_eq!(cli.z, 0.53);
    }

    #[test]
    fn test_missing_arguments_rejected() {
        let err = Cli::try_parse_from(["maptilt", "1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);

        let err = Cli::try_parse_from(["maptilt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_non_numeric_argument_rejected() {
        let err = Cli::try_parse_from(["maptilt", "a", "2", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_extra_argument_rejected() {
        let err = Cli::try_parse_from(["maptilt", "1", "2", "3", "4"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_nan_and_infinity_parse() {
        // Valid f64 literals; they propagate through the rotation untouched.
        let cli = Cli::try_parse_from(["maptilt", "NaN", "inf", "1"]).unwrap();
        assert!(cli.x.is_nan());
        assert!(cli.y.is_infinite());
    }

    #[test]
    fn test_original_line_formatting() {
        let point = MapPoint::new(10.0, 20.0, 5.0);
        assert_eq!(original_line(&point), "Original point: (10.0, 20.0, 5.0)");

        let fractional = MapPoint::new(0.4, -1.2, 0.0);
        assert_eq!(
            original_line(&fractional),
            "Original point: (0.4, -1.2, 0.0)"
        );
    }

    #[test]
    fn test_rotated_line_formatting() {
        let rotated = MapPoint::new(10.0, 20.0, 5.0).to_scene(&MAP_TILT);
        assert_eq!(
            rotated_line(&rotated),
            "Rotated point: (15.0709, -9.5352, -14.3857)"
        );
    }
}
