//! Distance command: great-circle distance between two points.

use std::io::Write;

use clap::Parser;
use mallmap_core::{Coordinate, DistanceLabel, distance_km};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_DISTANCE_FROM, ARG_DISTANCE_TO, CliError, ENV_DISTANCE_FROM, ENV_DISTANCE_TO};

/// CLI arguments for the `distance` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    about = "Print the Haversine distance between two coordinates",
    long_about = "Print the great-circle distance in kilometres between two \
                 LAT,LNG coordinates followed by its display label."
)]
#[ortho_config(prefix = "MALLMAP")]
pub(crate) struct DistanceArgs {
    /// Origin as `LAT,LNG`.
    #[arg(long = ARG_DISTANCE_FROM, value_name = "lat,lng", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) from: Option<String>,
    /// Destination as `LAT,LNG`.
    #[arg(long = ARG_DISTANCE_TO, value_name = "lat,lng", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) to: Option<String>,
}

impl DistanceArgs {
    fn into_config(self) -> Result<DistanceConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DistanceConfig::try_from(merged)
    }
}

/// Resolved `distance` command configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DistanceConfig {
    pub(crate) from: Coordinate,
    pub(crate) to: Coordinate,
}

impl TryFrom<DistanceArgs> for DistanceConfig {
    type Error = CliError;

    fn try_from(args: DistanceArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            from: require_coordinate(args.from, ARG_DISTANCE_FROM, ENV_DISTANCE_FROM)?,
            to: require_coordinate(args.to, ARG_DISTANCE_TO, ENV_DISTANCE_TO)?,
        })
    }
}

fn require_coordinate(
    raw: Option<String>,
    field: &'static str,
    env: &'static str,
) -> Result<Coordinate, CliError> {
    let value = raw.ok_or(CliError::MissingArgument { field, env })?;
    value
        .parse::<Coordinate>()
        .map_err(|reason| CliError::InvalidCoordinate {
            field,
            value,
            reason,
        })
}

pub(crate) fn run_distance(args: DistanceArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_distance_with(args, &mut stdout)
}

pub(crate) fn run_distance_with(
    args: DistanceArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    write_distance(writer, config)
}

pub(crate) fn write_distance(
    writer: &mut dyn Write,
    config: DistanceConfig,
) -> Result<(), CliError> {
    let km = distance_km(config.from, config.to);
    writeln!(writer, "{km:.3} ({})", DistanceLabel::new(km)).map_err(CliError::WriteOutput)
}
