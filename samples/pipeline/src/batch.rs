//! A batch pipeline over sample files.
//!
//! Every input file holds whitespace-separated integer samples. Each file
//! is loaded and measured on its own; files that cannot be read or parsed
//! are logged and skipped. The surviving measurements are aggregated into a
//! [`Summary`], which is written to the output file as a text report.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use railway::control::{Iter, Outcome};
use railway::lift::{Failure, try_outcome, try_outcome2};
use thiserror::Error;

/// Errors raised by the measuring and aggregation steps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// A token in a sample file is not an integer.
    #[error("{path}: invalid sample {token:?}")]
    InvalidSample {
        /// The file containing the token.
        path: String,
        /// The token as written.
        token: String,
    },
    /// A sample file contains no samples.
    #[error("{path}: no samples")]
    NoSamples {
        /// The empty file.
        path: String,
    },
    /// The running total no longer fits in an `i64`.
    #[error("sample total overflowed")]
    Overflow,
}

/// The samples read from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Where the samples came from.
    pub source: PathBuf,
    /// The samples, in file order.
    pub samples: Vec<i64>,
}

/// Aggregated statistics over every successful measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of files that contributed.
    pub files: usize,
    /// Number of samples across those files.
    pub samples: usize,
    /// Sum of all samples.
    pub total: i64,
    /// Smallest sample.
    pub min: i64,
    /// Largest sample.
    pub max: i64,
}

impl fmt::Display for Summary {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "files: {}", self.files)?;
        writeln!(formatter, "samples: {}", self.samples)?;
        writeln!(formatter, "total: {}", self.total)?;
        writeln!(formatter, "min: {}", self.min)?;
        writeln!(formatter, "max: {}", self.max)
    }
}

/// Parses the samples of one file.
///
/// # Errors
///
/// Returns [`BatchError::InvalidSample`] on the first token that is not an
/// integer and [`BatchError::NoSamples`] when the content is blank.
pub fn measure(path: &Path, content: &str) -> Result<Vec<i64>, BatchError> {
    let samples = content
        .split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| BatchError::InvalidSample {
                path: path.display().to_string(),
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if samples.is_empty() {
        return Err(BatchError::NoSamples {
            path: path.display().to_string(),
        });
    }
    Ok(samples)
}

/// Combines measurements into a single [`Summary`].
///
/// # Errors
///
/// Returns [`BatchError::NoSamples`] for an empty batch and
/// [`BatchError::Overflow`] when the total does not fit in an `i64`.
pub fn aggregate(measurements: Vec<Measurement>) -> Result<Summary, BatchError> {
    let samples = || measurements.iter().flat_map(|measurement| &measurement.samples);

    let (Some(&min), Some(&max)) = (samples().min(), samples().max()) else {
        return Err(BatchError::NoSamples {
            path: "<batch>".to_string(),
        });
    };
    let total = samples()
        .try_fold(0_i64, |total, &sample| total.checked_add(sample))
        .ok_or(BatchError::Overflow)?;

    Ok(Summary {
        files: measurements.len(),
        samples: samples().count(),
        total,
        min,
        max,
    })
}

fn write_report(report: &str, output: &Path) -> std::io::Result<()> {
    fs::write(output, report)
}

fn save(summary: Summary, output: &Path) -> Outcome<Failure, Summary> {
    let report = summary.to_string();
    try_outcome2(write_report)(report.as_str(), output).map(|()| summary)
}

/// Loads and measures one file.
///
/// A failure is logged here, with the file it belongs to, before it is
/// returned.
pub fn run_task(path: &Path) -> Outcome<Failure, Measurement> {
    let load = try_outcome(|path: &Path| fs::read_to_string(path));

    load(path)
        .and_then(|content| try_outcome2(measure)(path, content.as_str()))
        .map(|samples| Measurement {
            source: path.to_path_buf(),
            samples,
        })
        .inspect(|measurement| {
            tracing::debug!(
                path = %path.display(),
                samples = measurement.samples.len(),
                "measured"
            );
        })
        .on_err(|failure| tracing::error!(path = %path.display(), %failure, "task failed"))
}

/// Runs [`run_task`] over every input, aggregates the successful
/// measurements and writes the report to `output`.
///
/// Files that fail are skipped. The run as a whole fails only when no file
/// succeeds, when aggregation fails, or when the report cannot be written.
pub fn run(inputs: &[PathBuf], output: &Path) -> Outcome<Failure, Summary> {
    Iter::new(inputs)
        .for_each(|path| run_task(path))
        .flatten_outcome()
        .map_err(Failure::from)
        .and_then(try_outcome(aggregate))
        .and_then(|summary| save(summary, output))
        .inspect(|summary| {
            tracing::info!(files = summary.files, total = summary.total, "report saved");
        })
        .on_err(|failure| tracing::error!(%failure, "batch pipeline failed"))
}
