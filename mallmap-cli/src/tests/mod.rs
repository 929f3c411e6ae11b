//! Shared test harness modules for the Mallmap CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod distance_unit;
mod helpers;
mod rank_steps;
