//! Batch pipeline entry point.
//!
//! Usage: `batch-pipeline <output> <input>...`
//!
//! Measures every input file, skips the ones that fail and writes the
//! aggregated report to `<output>`.

use std::path::PathBuf;
use std::process::ExitCode;

use pipeline_sample::batch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pipeline_sample=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut arguments = std::env::args().skip(1).map(PathBuf::from);
    let Some(output) = arguments.next() else {
        tracing::error!("usage: batch-pipeline <output> <input>...");
        return ExitCode::FAILURE;
    };
    let inputs: Vec<PathBuf> = arguments.collect();

    tracing::info!(inputs = inputs.len(), output = %output.display(), "starting batch");

    batch::run(&inputs, &output).fold(
        |summary| {
            print!("{summary}");
            ExitCode::SUCCESS
        },
        |_| ExitCode::FAILURE,
    )
}
