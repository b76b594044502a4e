//! `KEY=VALUE` configuration parsing.
//!
//! Each line goes through two steps: [`parse_var`] splits it at the `=`
//! separator and a lifted coercion turns the raw text into a typed
//! [`Value`]. A line that fails either step becomes an `Err` without
//! stopping the lines after it.
//!
//! # Examples
//!
//! ```
//! use pipeline_sample::config::{parse_line, Value};
//! use railway::control::Outcome;
//!
//! assert_eq!(
//!     parse_line("PORT=8000"),
//!     Outcome::Ok(("PORT".to_string(), Value::Integer(8000)))
//! );
//! assert!(parse_line("PORT").is_err());
//! ```

use std::fmt;
use std::num::ParseIntError;

use railway::control::{Iter, Outcome};
use railway::lift::{Failure, try_outcome};
use thiserror::Error;

/// A coerced configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// `true` or `false`, in any letter case.
    Bool(bool),
    /// A run of ASCII digits.
    Integer(i64),
    /// Anything else, kept as written.
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Integer(number) => write!(formatter, "{number}"),
            Self::Text(text) => write!(formatter, "'{text}'"),
        }
    }
}

/// Errors raised while splitting a line into key and value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line has no `=` at all.
    #[error("Missing '=' in line: {line:?}")]
    MissingSeparator {
        /// The offending line.
        line: String,
    },
    /// The line has more than one `=`.
    #[error("Too many '=' in line: {line:?}")]
    ExtraSeparator {
        /// The offending line.
        line: String,
    },
}

/// Splits a line into its key and raw value.
///
/// # Examples
///
/// ```
/// use pipeline_sample::config::{parse_var, ParseError};
/// use railway::control::Outcome;
///
/// assert_eq!(
///     parse_var("HOST=localhost"),
///     Outcome::Ok(("HOST".to_string(), "localhost".to_string()))
/// );
/// assert_eq!(
///     parse_var("INVALID_LINE"),
///     Outcome::Err(ParseError::MissingSeparator { line: "INVALID_LINE".to_string() })
/// );
/// ```
pub fn parse_var(line: &str) -> Outcome<ParseError, (String, String)> {
    match line.split_once('=') {
        None => Outcome::Err(ParseError::MissingSeparator {
            line: line.to_string(),
        }),
        Some((_, value)) if value.contains('=') => Outcome::Err(ParseError::ExtraSeparator {
            line: line.to_string(),
        }),
        Some((key, value)) => Outcome::Ok((key.to_string(), value.to_string())),
    }
}

fn coerce((key, raw): (String, String)) -> Result<(String, Value), ParseIntError> {
    let lowered = raw.to_lowercase();
    let value = if lowered == "true" || lowered == "false" {
        Value::Bool(lowered == "true")
    } else if !raw.is_empty() && raw.bytes().all(|byte| byte.is_ascii_digit()) {
        Value::Integer(raw.parse()?)
    } else {
        Value::Text(raw)
    };
    Ok((key, value))
}

/// Parses and coerces one line.
///
/// Splitting errors are widened into a [`Failure`] so that they share the
/// error channel with the lifted coercion (which fails on integers that do
/// not fit in an `i64`).
pub fn parse_line(line: &str) -> Outcome<Failure, (String, Value)> {
    parse_var(line)
        .map_err(Failure::from_error)
        .and_then(try_outcome(coerce))
}

/// Formats the outcome of the line at `index` for display.
///
/// # Examples
///
/// ```
/// use pipeline_sample::config::{parse_line, render};
///
/// assert_eq!(render(1, parse_line("PORT=8000")), "[OK #1] PORT = 8000");
/// assert_eq!(
///     render(4, parse_line("INVALID_LINE")),
///     r#"[ERR #4] error: Missing '=' in line: "INVALID_LINE""#
/// );
/// ```
pub fn render(index: usize, outcome: Outcome<Failure, (String, Value)>) -> String {
    outcome.map_or_else(
        |failure| format!("[ERR #{index}] {}: {failure}", failure.kind()),
        |(key, value)| format!("[OK #{index}] {key} = {value}"),
    )
}

/// Parses every line of `content` and returns one report line per input
/// line, in order.
pub fn parse(content: &str) -> Vec<String> {
    Iter::new(content.lines())
        .map(parse_line)
        .enumerate()
        .map(|(index, outcome)| render(index, outcome))
        .collect()
}
