//! Behaviour-driven step definitions driving the rank CLI scenarios.

use super::helpers::{MIXED_REQUEST, Workspace, ranked_ids, write_utf8};
use super::*;
use crate::rank::run_rank_with;
use camino::Utf8PathBuf;
use mallmap_ranker::ConfigError;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct RankWorld {
    _workspace: Workspace,
    request_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RankWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let request_path = workspace.path("request.json");
        Self {
            _workspace: workspace,
            request_path,
            include_request: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["mallmap".to_owned(), "rank".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> RankWorld {
    RankWorld::new()
}

#[given("a rank request with a mall, a store and an unlocated candidate exists on disk")]
fn mixed_request_exists(#[from(world)] world: &RankWorld) {
    write_utf8(&world.request_path, MIXED_REQUEST.as_bytes());
}

#[given("the rank request contains invalid JSON")]
fn rank_request_contains_invalid_json(#[from(world)] world: &RankWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[given("I omit the rank request path")]
fn omit_rank_request_path(#[from(world)] world: &RankWorld) {
    *world.include_request.borrow_mut() = false;
}

#[given("I pass a chunk size of zero")]
fn pass_zero_chunk_size(#[from(world)] world: &RankWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_RANK_CHUNK_SIZE}"), "0".to_owned()]);
}

#[when("I run the rank command")]
fn run_rank_command(#[from(world)] world: &RankWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Rank(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_rank_with(args, &mut *buffer)
        }
        Command::Distance(_) => panic!("expected rank command"),
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints the results ordered A, B, C")]
fn command_succeeds_and_prints_results(#[from(world)] world: &RankWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    assert_eq!(ranked_ids(&world.stdout.borrow()), ["A", "B", "C"]);
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &RankWorld) {
    match &*world.error() {
        CliError::ParseRankRequest { path, .. } => assert_eq!(*path, world.request_path),
        other => panic!("expected ParseRankRequest, found {other:?}"),
    }
}

#[then("the command fails because the request path is missing")]
fn command_fails_missing_request_path(#[from(world)] world: &RankWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_RANK_REQUEST),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the chunk size is invalid")]
fn command_fails_invalid_chunk_size(#[from(world)] world: &RankWorld) {
    match &*world.error() {
        CliError::RankerConfig(ConfigError::Zero { field }) => assert_eq!(*field, "chunk size"),
        other => panic!("expected RankerConfig, found {other:?}"),
    }
}

macro_rules! register_rank_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/rank_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RankWorld) {
            let _ = world;
        }
    };
}

register_rank_scenario!(rank_happy_path, "ranking a request from JSON");
register_rank_scenario!(rank_invalid_json, "rejecting invalid JSON input");
register_rank_scenario!(rank_missing_request, "rejecting missing request paths");
register_rank_scenario!(rank_zero_chunk_size, "rejecting a zero chunk size");
