//! Error types emitted by the Mallmap CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use mallmap_ranker::ConfigError;
use thiserror::Error;

/// Errors emitted by the Mallmap CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A coordinate option was not in `LAT,LNG` form.
    #[error("invalid {field} coordinate {value:?}: {reason}")]
    InvalidCoordinate {
        /// Name of the offending option.
        field: &'static str,
        /// Raw value supplied.
        value: String,
        /// Why parsing failed.
        reason: String,
    },
    /// Chunking options were rejected by the ranker.
    #[error("invalid ranking options: {0}")]
    RankerConfig(#[from] ConfigError),
    /// Opening the rank request file failed.
    #[error("failed to open rank request at {path:?}: {source}")]
    OpenRankRequest {
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Rank request JSON could not be decoded.
    #[error("failed to parse rank request JSON at {path:?}: {source}")]
    ParseRankRequest {
        /// Path of the malformed request.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The async runtime hosting the ranking worker could not start.
    #[error("failed to start ranking runtime: {0}")]
    StartRuntime(#[source] std::io::Error),
    /// Serializing the rank response failed.
    #[error("failed to serialize rank response: {0}")]
    SerializeRankResponse(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
