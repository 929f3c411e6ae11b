//! Rank command implementation for the Mallmap CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use mallmap_core::RankedResult;
use mallmap_ranker::{
    DEFAULT_CHUNK_SIZE, DEFAULT_QUEUE_CAPACITY, DEFAULT_YIELD_EVERY, RankRequest, RankerConfig,
    RankingHandle,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::open_utf8_file;
use crate::{
    ARG_RANK_CHUNK_SIZE, ARG_RANK_QUEUE_CAPACITY, ARG_RANK_REQUEST, ARG_RANK_YIELD_EVERY,
    CliError, ENV_RANK_REQUEST,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the candidates of a JSON request message by distance \
                 from its origin, preferring open venues and malls. The \
                 response message is written to stdout as JSON. Chunking \
                 options can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Rank candidates by distance and preference"
)]
#[ortho_config(prefix = "MALLMAP")]
pub(crate) struct RankArgs {
    /// Path to a JSON file containing a rank request message.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Candidates evaluated per chunk.
    #[arg(long = ARG_RANK_CHUNK_SIZE, value_name = "count")]
    #[serde(default)]
    pub(crate) chunk_size: Option<usize>,
    /// Chunks evaluated between cooperative yields.
    #[arg(long = ARG_RANK_YIELD_EVERY, value_name = "chunks")]
    #[serde(default)]
    pub(crate) yield_every: Option<usize>,
    /// Requests buffered by the ranking worker.
    #[arg(long = ARG_RANK_QUEUE_CAPACITY, value_name = "count")]
    #[serde(default)]
    pub(crate) queue_capacity: Option<usize>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Chunking and queueing for the ranking worker.
    pub(crate) ranker: RankerConfig,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_RANK_REQUEST,
            env: ENV_RANK_REQUEST,
        })?;
        let ranker = RankerConfig::new(
            args.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
            args.yield_every.unwrap_or(DEFAULT_YIELD_EVERY),
        )?
        .with_queue_capacity(args.queue_capacity.unwrap_or(DEFAULT_QUEUE_CAPACITY))?;
        Ok(Self {
            request_path,
            ranker,
        })
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let request = load_rank_request(&config.request_path)?;
    let results = rank_on_worker(request, config.ranker)?;
    write_rank_response(writer, &results)
}

/// Rank `request` on a background worker hosted by a dedicated runtime.
pub(crate) fn rank_on_worker(
    request: RankRequest,
    config: RankerConfig,
) -> Result<Vec<RankedResult>, CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(CliError::StartRuntime)?;
    let candidates = request.rows.len();
    let results = runtime.block_on(async move {
        let handle = RankingHandle::spawn(config);
        handle.rank(request).await
    });
    log::info!("ranked {} of {candidates} candidates", results.len());
    Ok(results)
}

/// Loads a JSON-encoded [`RankRequest`] from disk.
pub(crate) fn load_rank_request(path: &Utf8Path) -> Result<RankRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRankRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRankRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_rank_response(writer: &mut dyn Write, results: &[RankedResult]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(results).map_err(CliError::SerializeRankResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
