//! Error types for the control containers.
//!
//! This module provides the error produced when an [`Iter`](super::Iter)
//! terminal operation needs at least one element and the sequence has none.

use std::fmt;

/// Represents an iterator that produced no usable element.
///
/// Returned by [`Iter::fold1`](super::Iter::fold1),
/// [`Iter::as_outcome`](super::Iter::as_outcome) and
/// [`Iter::flatten_outcome`](super::Iter::flatten_outcome).
///
/// The same value is used whether the source was empty or every element was
/// filtered out, so the two situations cannot be told apart.
///
/// # Examples
///
/// ```rust
/// use railway::control::EmptyIterError;
///
/// assert_eq!(format!("{}", EmptyIterError), "Empty Iter");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmptyIterError;

impl fmt::Display for EmptyIterError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Empty Iter")
    }
}

impl std::error::Error for EmptyIterError {}
