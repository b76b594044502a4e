//! Outcome type - the result of an operation that may fail.
//!
//! This module provides the `Outcome<E, T>` type, which is either `Ok(T)` or
//! `Err(E)`. Every combinator consumes the outcome and returns a new one, so
//! an error produced anywhere in a chain is carried unchanged to the end of
//! it, where a single [`fold`](Outcome::fold) or [`on_err`](Outcome::on_err)
//! observes it.
//!
//! The error parameter comes first, mirroring how the type is read: an
//! outcome that fails with `E` or succeeds with `T`.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Outcome;
//!
//! fn parse(text: &str) -> Outcome<String, i32> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let report = parse("20")
//!     .map(|number| number + 1)
//!     .and_then(|number| parse("2").map(|factor| number * factor))
//!     .fold(|number| format!("got {number}"), |error| format!("failed: {error}"));
//! assert_eq!(report, "got 42");
//! ```

use std::fmt;

use super::maybe::Maybe;

/// The outcome of an operation that may fail.
///
/// `Outcome<E, T>` is either `Ok(T)`, holding the value of a successful
/// operation, or `Err(E)`, holding the error of a failed one. The error type
/// is unconstrained, so any value can travel down the error track.
///
/// # Type Parameters
///
/// * `E` - The type of the error
/// * `T` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use railway::control::Outcome;
///
/// let success: Outcome<String, i32> = Outcome::Ok(42);
/// let failure: Outcome<String, i32> = Outcome::Err("boom".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Outcome::Ok(84));
/// assert_eq!(failure.map(|x| x * 2), Outcome::Err("boom".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<E, T> {
    /// The success variant, holding the value produced by the operation.
    Ok(T),
    /// The failure variant, holding the error raised by the operation.
    Err(E),
}

impl<E, T> Outcome<E, T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let success: Outcome<String, i32> = Outcome::Ok(42);
    /// assert!(success.is_ok());
    ///
    /// let failure: Outcome<String, i32> = Outcome::Err("boom".to_string());
    /// assert!(!failure.is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let failure: Outcome<String, i32> = Outcome::Err("boom".to_string());
    /// assert!(failure.is_err());
    /// ```
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Converts from `&Outcome<E, T>` to `Outcome<&E, &T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let success: Outcome<String, String> = Outcome::Ok("hello".to_string());
    /// assert_eq!(success.as_ref().map(|text| text.len()), Outcome::Ok(5));
    /// assert!(success.is_ok());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&E, &T> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the outcome by applying one of two functions.
    ///
    /// Exactly one of `on_ok` and `on_err` is invoked. This is the point where
    /// a chain leaves the railway and becomes a plain value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let success: Outcome<String, i32> = Outcome::Ok(42);
    /// assert_eq!(success.fold(|x| x.to_string(), |error| error), "42");
    ///
    /// let failure: Outcome<String, i32> = Outcome::Err("boom".to_string());
    /// assert_eq!(failure.fold(|x| x.to_string(), |error| error), "boom");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, on_ok: F, on_err: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// If this is `Ok(t)`, returns `Ok(function(t))`.
    /// If this is `Err(e)`, returns `Err(e)` without calling `function`.
    ///
    /// `function` must not fail. Wrap a fallible function with one of the
    /// [`lift`](crate::lift) adapters and use [`and_then`](Self::and_then).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let success: Outcome<String, i32> = Outcome::Ok(42);
    /// assert_eq!(success.map(|x| x + 1), Outcome::Ok(43));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies a function to the error, leaving a success value untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let failure: Outcome<&str, i32> = Outcome::Err("boom");
    /// assert_eq!(failure.map_err(|error| error.len()), Outcome::Err(4));
    ///
    /// let success: Outcome<&str, i32> = Outcome::Ok(1);
    /// assert_eq!(success.map_err(|error| error.len()), Outcome::Ok(1));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, function: F) -> Outcome<E2, T>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// If this is `Ok(t)`, returns `function(t)` as-is. If this is `Err(e)`,
    /// `function` is never called and `Err(e)` is forwarded unchanged.
    ///
    /// Satisfies associativity:
    /// `m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let checked_half = |x: i32| {
    ///     if x % 2 == 0 { Outcome::Ok(x / 2) } else { Outcome::Err(format!("{x} is odd")) }
    /// };
    ///
    /// assert_eq!(Outcome::Ok(8).and_then(checked_half), Outcome::Ok(4));
    /// assert_eq!(Outcome::Ok(7).and_then(checked_half), Outcome::Err("7 is odd".to_string()));
    ///
    /// let failure: Outcome<String, i32> = Outcome::Err("earlier".to_string());
    /// assert_eq!(failure.and_then(checked_half), Outcome::Err("earlier".to_string()));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> Outcome<E, U>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Derived Folds
    // =========================================================================

    /// Applies a function to the success value, or returns `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let success: Outcome<&str, i32> = Outcome::Ok(42);
    /// assert_eq!(success.map_or(0, |x| x + 1), 43);
    ///
    /// let failure: Outcome<&str, i32> = Outcome::Err("boom");
    /// assert_eq!(failure.map_or(0, |x| x + 1), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.fold(function, |_| default)
    }

    /// Applies `function` to the success value, or `on_err` to the error.
    ///
    /// The failure handler comes first, like every `map_or_else` in this crate
    /// and in `std`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let failure: Outcome<&str, i32> = Outcome::Err("boom");
    /// assert_eq!(failure.map_or_else(|error| error.len() as i32, |x| x * 2), 4);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, on_err: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        self.fold(function, on_err)
    }

    /// Returns the success value, or `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let failure: Outcome<&str, &str> = Outcome::Err("broken");
    /// assert_eq!(failure.unwrap_or("fallback"), "fallback");
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.fold(|value| value, |_| default)
    }

    /// Returns the success value, or computes one from the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let failure: Outcome<&str, usize> = Outcome::Err("broken");
    /// assert_eq!(failure.unwrap_or_else(|error| error.len()), 6);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.fold(|value| value, function)
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Calls `function` with the success value and returns the outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let success: Outcome<String, i32> = Outcome::Ok(42);
    /// let success = success.inspect(|value| seen.push(*value));
    ///
    /// assert_eq!(success, Outcome::Ok(42));
    /// assert_eq!(seen, vec![42]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with the error and returns the outcome unchanged.
    ///
    /// Placed at the end of a chain it observes an error raised by any step,
    /// since an `Err` skips every step after the one that produced it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let mut log = Vec::new();
    /// let result = Outcome::<String, i32>::Err("disk full".to_string())
    ///     .map(|x| x + 1)
    ///     .and_then(|x| Outcome::Ok(x * 2))
    ///     .on_err(|error| log.push(error.clone()));
    ///
    /// assert!(result.is_err());
    /// assert_eq!(log, vec!["disk full".to_string()]);
    /// ```
    #[inline]
    pub fn on_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a [`Maybe`], discarding the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{Maybe, Outcome};
    ///
    /// let success: Outcome<&str, i32> = Outcome::Ok(42);
    /// assert_eq!(success.as_maybe(), Maybe::Some(42));
    ///
    /// let failure: Outcome<&str, i32> = Outcome::Err("boom");
    /// assert_eq!(failure.as_maybe(), Maybe::Nil);
    /// ```
    #[inline]
    pub fn as_maybe(self) -> Maybe<T> {
        self.fold(Maybe::Some, |_| Maybe::Nil)
    }

    /// Converts into a `std` `Option` of the success value.
    #[inline]
    pub fn ok(self) -> Option<T> {
        self.fold(Some, |_| None)
    }

    /// Converts into a `std` `Option` of the error.
    #[inline]
    pub fn err(self) -> Option<E> {
        self.fold(|_| None, Some)
    }
}

// =============================================================================
// Unwrap Operations
// =============================================================================

impl<E: fmt::Debug, T> Outcome<E, T> {
    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Err`, with a message carrying the error's
    /// `Debug` form. A lift adapter that catches the panic keeps that message
    /// in the `Failure` it returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let success: Outcome<String, i32> = Outcome::Ok(42);
    /// assert_eq!(success.unwrap(), 42);
    ///
    /// let failure: Outcome<String, i32> = Outcome::Err("boom".to_string());
    /// let payload = std::panic::catch_unwind(|| failure.unwrap()).unwrap_err();
    /// assert_eq!(
    ///     payload.downcast_ref::<String>().map(String::as_str),
    ///     Some("called `Outcome::unwrap()` on an `Err` value: \"boom\"")
    /// );
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => unwrap_failed(&error),
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_failed(error: &dyn fmt::Debug) -> ! {
    panic!("called `Outcome::unwrap()` on an `Err` value: {error:?}")
}

impl<E: fmt::Display, T> Outcome<E, T> {
    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Err`, with `message` followed by the error's
    /// `Display` form.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use railway::control::Outcome;
    ///
    /// let failure: Outcome<String, i32> = Outcome::Err("boom".to_string());
    /// failure.expect("configuration must load"); // panics with `configuration must load: boom`
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => panic!("{message}: {error}"),
        }
    }
}

// =============================================================================
// IntoIterator Implementation
// =============================================================================

impl<E, T> IntoIterator for Outcome<E, T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    /// Yields the success value, or nothing for an `Err`.
    ///
    /// The result is a plain `std` iterator. Wrap the outcome with
    /// [`Iter::new`](super::Iter::new) to get back to the lazy combinators,
    /// adding `flatten` when the success value is itself a collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{Iter, Outcome};
    ///
    /// let batch: Outcome<String, Vec<i32>> = Outcome::Ok(vec![1, 2, 3]);
    /// let doubled: Vec<i32> = Iter::new(batch.into_iter().flatten()).map(|n| n * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    ///
    /// let failed: Outcome<String, i32> = Outcome::Err("offline".to_string());
    /// assert_eq!(Iter::new(failed).as_maybe(), railway::control::Maybe::Nil);
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<E, T> From<Result<T, E>> for Outcome<E, T> {
    /// Converts a `std` `Result` into an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let parsed: Outcome<_, i32> = "42".parse::<i32>().into();
    /// assert_eq!(parsed, Outcome::Ok(42));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<E, T> From<Outcome<E, T>> for Result<T, E> {
    /// Converts an `Outcome` back into a `std` `Result`, so `?` can be used
    /// at the edge of a chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// fn load() -> Result<i32, String> {
    ///     let value = Result::from(Outcome::<String, i32>::Ok(41))?;
    ///     Ok(value + 1)
    /// }
    ///
    /// assert_eq!(load(), Ok(42));
    /// ```
    #[inline]
    fn from(outcome: Outcome<E, T>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}
