//! The error value produced by the lift adapters.
//!
//! A [`Failure`] records where an error came from (a panic or a returned
//! `std` error) together with its message. Two failures are equal when both
//! the kind and the message match; the optional source error is never
//! compared.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::control::{EmptyIterError, Outcome};

/// How a [`Failure`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The wrapped operation panicked.
    Panic,
    /// The wrapped operation returned an error value.
    Error,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panic => formatter.write_str("panic"),
            Self::Error => formatter.write_str("error"),
        }
    }
}

/// An error captured by a lift adapter.
///
/// # Examples
///
/// ```rust
/// use railway::lift::{Failure, FailureKind};
///
/// let failure = Failure::new(FailureKind::Error, "disk full");
/// assert_eq!(failure.kind(), FailureKind::Error);
/// assert_eq!(failure.to_string(), "disk full");
/// ```
#[derive(Clone)]
pub struct Failure {
    kind: FailureKind,
    message: String,
    source: Option<Arc<dyn Error + Send + Sync>>,
}

impl Failure {
    /// Creates a failure without a source error.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Wraps an error returned by an operation.
    ///
    /// The message is the error's `Display` form and the error itself is
    /// kept as the [`Error::source`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::error::Error;
    /// use railway::lift::{Failure, FailureKind};
    ///
    /// let parse_error = "x".parse::<u8>().unwrap_err();
    /// let failure = Failure::from_error(parse_error);
    ///
    /// assert_eq!(failure.kind(), FailureKind::Error);
    /// assert_eq!(failure.message(), "invalid digit found in string");
    /// assert!(failure.source().is_some());
    /// ```
    pub fn from_error<X>(error: X) -> Self
    where
        X: Error + Send + Sync + 'static,
    {
        Self {
            kind: FailureKind::Error,
            message: error.to_string(),
            source: Some(Arc::new(error)),
        }
    }

    /// Converts a caught panic payload into a failure.
    ///
    /// A payload that already is a `Failure` (raised by
    /// [`Outcome::propagate`]) is returned unchanged. String payloads keep
    /// their text; anything else becomes `"Unknown panic"`.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<Self>() {
            Ok(failure) => *failure,
            Err(payload) => {
                let message = if let Some(string) = payload.downcast_ref::<&str>() {
                    (*string).to_string()
                } else if let Some(string) = payload.downcast_ref::<String>() {
                    string.clone()
                } else {
                    "Unknown panic".to_string()
                };
                Self::new(FailureKind::Panic, message)
            }
        }
    }

    /// Returns how this failure was produced.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Failure")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for Failure {}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}

impl From<EmptyIterError> for Failure {
    fn from(error: EmptyIterError) -> Self {
        Self::from_error(error)
    }
}

impl<T> Outcome<Failure, T> {
    /// Returns the success value, or unwinds with the failure itself.
    ///
    /// Inside a lift adapter this hands the original [`Failure`] to the
    /// enclosing adapter unchanged, where [`Outcome::unwrap`] would replace it
    /// with a panic message. Outside an adapter the default panic hook cannot
    /// print the payload, so prefer `unwrap` or `expect` at the top level.
    ///
    /// # Panics
    ///
    /// Panics with the failure as payload if this is an `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    /// use railway::lift::{as_outcome, try_outcome};
    ///
    /// let parse = try_outcome(|text: &str| text.parse::<u8>());
    /// let doubled = as_outcome(move |text: &str| parse(text).propagate() * 2);
    ///
    /// assert_eq!(doubled("21"), Outcome::Ok(42));
    /// assert_eq!(
    ///     doubled("x").err().map(|failure| failure.to_string()),
    ///     Some("invalid digit found in string".to_string())
    /// );
    /// ```
    #[track_caller]
    pub fn propagate(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(failure) => std::panic::panic_any(failure),
        }
    }
}
