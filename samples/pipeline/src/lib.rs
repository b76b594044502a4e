//! Pipeline sample for the railway crate.
//!
//! Two small programs built from `Outcome` chains:
//!
//! - [`config`]: parses `KEY=VALUE` lines, one report line per input line
//! - [`batch`]: runs a task per input file, keeps the successful results
//!   and writes an aggregated report
//!
//! In both, a failing item is reported and its siblings keep going.

pub mod batch;
pub mod config;
