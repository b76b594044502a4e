//! Config parser entry point.
//!
//! Parses the `KEY=VALUE` file given as the first argument, or a built-in
//! demo configuration when no argument is passed, and prints one report line
//! per input line.

use std::fs;
use std::process::ExitCode;

use pipeline_sample::config;
use railway::control::Outcome;
use railway::lift::try_outcome;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEMO_INPUT: &str = "HOST=localhost
PORT=8000
DEBUG=true
LOG_LEVEL=info
INVALID_LINE
";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pipeline_sample=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let content = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(%path, "parsing configuration file");
            let read = try_outcome(|path: String| fs::read_to_string(path));
            let Outcome::Ok(content) =
                read(path).on_err(|failure| tracing::error!(%failure, "cannot read input"))
            else {
                return ExitCode::FAILURE;
            };
            content
        }
        None => {
            tracing::info!("no input given, parsing the demo configuration");
            DEMO_INPUT.to_string()
        }
    };

    for line in config::parse(&content) {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
