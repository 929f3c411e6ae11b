//! Unit tests for the distance command.

use super::*;
use crate::distance::{DistanceConfig, run_distance_with, write_distance};
use mallmap_core::Coordinate;
use rstest::rstest;

const BANGKOK: Coordinate = Coordinate::new(13.7563, 100.5018);

fn render(config: DistanceConfig) -> String {
    let mut stdout = Vec::new();
    write_distance(&mut stdout, config).expect("write distance");
    String::from_utf8(stdout).expect("stdout utf-8")
}

#[rstest]
#[case::siam(Coordinate::new(13.7462, 100.5347), "3.727 (3.7 km)\n")]
#[case::same_point(BANGKOK, "0.000 (0 m)\n")]
#[case::short_walk(Coordinate::new(13.7563, 100.5063), "0.486 (486 m)\n")]
fn prints_kilometres_and_label(#[case] to: Coordinate, #[case] expected: &str) {
    let output = render(DistanceConfig { from: BANGKOK, to });
    assert_eq!(output, expected);
}

#[rstest]
#[case(None, Some("13.7,100.5"), ARG_DISTANCE_FROM, ENV_DISTANCE_FROM)]
#[case(Some("13.7,100.5"), None, ARG_DISTANCE_TO, ENV_DISTANCE_TO)]
fn converting_without_required_coordinates_errors(
    #[case] from: Option<&str>,
    #[case] to: Option<&str>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = DistanceArgs {
        from: from.map(str::to_owned),
        to: to.map(str::to_owned),
    };
    let err = DistanceConfig::try_from(args).expect_err("missing coordinate should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn malformed_coordinates_are_rejected() {
    let args = DistanceArgs {
        from: Some("bangkok".to_owned()),
        to: Some("13.7,100.5".to_owned()),
    };
    let err = DistanceConfig::try_from(args).expect_err("malformed coordinate should error");
    match err {
        CliError::InvalidCoordinate { field, value, .. } => {
            assert_eq!(field, ARG_DISTANCE_FROM);
            assert_eq!(value, "bangkok");
        }
        other => panic!("expected InvalidCoordinate, found {other:?}"),
    }
}

#[rstest]
fn parses_negative_coordinates_from_the_command_line() {
    let cli = Cli::try_parse_from([
        "mallmap",
        "distance",
        "--from",
        "-6.2088,106.8456",
        "--to",
        "-6.9175,107.6191",
    ])
    .expect("arguments should parse");
    let Command::Distance(args) = cli.command else {
        panic!("expected distance command");
    };

    let mut stdout = Vec::new();
    run_distance_with(args, &mut stdout).expect("distance should succeed");
    let output = String::from_utf8(stdout).expect("stdout utf-8");
    assert!(output.starts_with("11"), "unexpected output {output:?}");
    assert!(output.ends_with(" km)\n"), "unexpected output {output:?}");
}

#[rstest]
fn distant_points_render_as_unavailable() {
    let london = Coordinate::new(51.5074, -0.1278);
    let output = render(DistanceConfig {
        from: BANGKOK,
        to: london,
    });
    assert!(output.ends_with(" (distance unavailable)\n"));
}
