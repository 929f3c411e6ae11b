//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported to the terminal"
)]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = mallmap_cli::run() {
        eprintln!("mallmap: {err}");
        std::process::exit(1);
    }
}
