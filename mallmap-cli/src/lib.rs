//! Command-line interface for ranking Mallmap search results.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod distance;
mod error;
mod fs;
mod rank;

pub use error::CliError;

use distance::{DistanceArgs, run_distance};
use rank::{RankArgs, run_rank};

const ARG_RANK_REQUEST: &str = "request";
const ARG_RANK_CHUNK_SIZE: &str = "chunk-size";
const ARG_RANK_YIELD_EVERY: &str = "yield-every";
const ARG_RANK_QUEUE_CAPACITY: &str = "queue-capacity";
const ENV_RANK_REQUEST: &str = "MALLMAP_CMDS_RANK_REQUEST_PATH";
const ARG_DISTANCE_FROM: &str = "from";
const ARG_DISTANCE_TO: &str = "to";
const ENV_DISTANCE_FROM: &str = "MALLMAP_CMDS_DISTANCE_FROM";
const ENV_DISTANCE_TO: &str = "MALLMAP_CMDS_DISTANCE_TO";

/// Run the Mallmap CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// request file cannot be read, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
        Command::Distance(args) => run_distance(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "mallmap",
    about = "Rank malls and stores by distance from a location",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a JSON request of candidates and print the ordered results.
    Rank(RankArgs),
    /// Print the distance between two coordinates.
    Distance(DistanceArgs),
}

#[cfg(test)]
mod tests;
