//! Batch ranking coordinator for Mallmap search results.
//!
//! The crate drives the `mallmap-core` scoring kernel over arbitrarily large
//! candidate lists:
//! - [`rank`] and [`CooperativeRanker`] evaluate candidates in chunks,
//!   substitute a sentinel for any candidate that cannot be scored, and sort
//!   the results by ascending score. The cooperative path yields to the Tokio
//!   scheduler between chunks.
//! - [`RankingHandle`] runs ranking on a background task and exchanges
//!   request and response messages with callers. It always answers with a
//!   list, never an error.
//!
//! # Examples
//!
//! ```
//! use mallmap_ranker::{RankerConfig, RankingHandle};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let handle = RankingHandle::spawn(RankerConfig::default());
//! let response = handle
//!     .rank_json(r#"{"origin":{"lat":13.7563,"lng":100.5018},"rows":[{"id":"C"}]}"#)
//!     .await;
//! assert_eq!(response, r#"[{"id":"C","distanceKm":999.0,"score":999.0}]"#);
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod coordinator;
mod request;
mod worker;

pub use config::{
    ConfigError, DEFAULT_CHUNK_SIZE, DEFAULT_QUEUE_CAPACITY, DEFAULT_YIELD_EVERY, RankerConfig,
};
pub use coordinator::{CooperativeRanker, RankReport, Ranker, evaluate, rank, sort_by_score};
pub use request::{RankRequest, encode_response};
pub use worker::RankingHandle;
