//! Lift adapters: wrap fallible operations into container-returning ones.
//!
//! An operation that may panic is turned into one that never does:
//!
//! - [`as_outcome`] returns `Ok(value)` on a normal return and
//!   `Err(Failure)` when the operation panics.
//! - [`as_maybe`] returns `Some(value)` or `Nil`.
//! - [`try_outcome`] and [`try_maybe`] do the same for operations that
//!   already report errors through `std::result::Result`.
//!
//! Every adapter exists for zero to three arguments (`as_outcome0`,
//! `as_outcome2`, `as_outcome3`, ...), so the lifted operation keeps the
//! parameter list of the original one. The unprefixed names are the unary
//! forms.
//!
//! Decorator-style result libraries call these `as_result` / `as_option`,
//! or `lift.result` / `lift.option`. Here they are named after the
//! containers they return: `as_outcome` and `try_outcome` produce an
//! [`Outcome`], `as_maybe` and `try_maybe` produce a [`Maybe`].
//!
//! Panics are caught with [`std::panic::catch_unwind`]. The global panic
//! hook is left untouched, so the default hook still prints the panic
//! message. Panics are only caught when the crate is built with
//! `panic = "unwind"`.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Maybe, Outcome};
//! use railway::lift::{as_maybe, as_outcome2, Failure, FailureKind};
//!
//! let divide = as_outcome2(|dividend: i32, divisor: i32| {
//!     assert!(divisor != 0, "division by zero");
//!     dividend / divisor
//! });
//!
//! assert_eq!(divide(10, 2), Outcome::Ok(5));
//! assert_eq!(
//!     divide(1, 0),
//!     Outcome::Err(Failure::new(FailureKind::Panic, "division by zero"))
//! );
//!
//! let first_char = as_maybe(|text: &str| text.chars().next().unwrap());
//! assert_eq!(first_char("rail"), Maybe::Some('r'));
//! assert_eq!(first_char(""), Maybe::Nil);
//! ```

mod failure;

pub use failure::{Failure, FailureKind};

use std::error::Error;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::control::{Maybe, Outcome};

/// Runs `operation`, turning a panic into `Err(Failure)`.
fn capture<T>(operation: impl FnOnce() -> T) -> Outcome<Failure, T> {
    match catch_unwind(AssertUnwindSafe(operation)) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => Outcome::Err(Failure::from_panic(payload)),
    }
}

fn settle<T, X>(result: Result<T, X>) -> Outcome<Failure, T>
where
    X: Error + Send + Sync + 'static,
{
    Outcome::<X, T>::from(result).map_err(Failure::from_error)
}

// =============================================================================
// Unary adapters
// =============================================================================

/// Lifts a one-argument operation into one that returns an [`Outcome`].
///
/// A normal return becomes `Ok(value)`. Any panic raised inside the operation
/// is caught and becomes `Err(Failure)`. When the panic payload is already a
/// [`Failure`] (as raised by [`Outcome::propagate`]) it is returned unchanged.
/// [`Outcome::unwrap`] on any other error keeps the error's `Debug` form in
/// the failure message.
///
/// # Examples
///
/// ```rust
/// use railway::control::Outcome;
/// use railway::lift::{as_outcome, FailureKind};
///
/// let checked_sqrt = as_outcome(|value: f64| {
///     if value < 0.0 {
///         panic!("negative input: {value}");
///     }
///     value.sqrt()
/// });
///
/// assert_eq!(checked_sqrt(9.0), Outcome::Ok(3.0));
///
/// let failure = checked_sqrt(-1.0).err().unwrap();
/// assert_eq!(failure.kind(), FailureKind::Panic);
/// assert_eq!(failure.message(), "negative input: -1");
/// ```
pub fn as_outcome<A, T, F>(operation: F) -> impl Fn(A) -> Outcome<Failure, T>
where
    F: Fn(A) -> T,
{
    move |argument| capture(|| operation(argument))
}

/// Lifts a one-argument operation into one that returns a [`Maybe`].
///
/// A normal return becomes `Some(value)`; a panic becomes `Nil`.
pub fn as_maybe<A, T, F>(operation: F) -> impl Fn(A) -> Maybe<T>
where
    F: Fn(A) -> T,
{
    move |argument| capture(|| operation(argument)).as_maybe()
}

/// Lifts a one-argument operation returning a `std` [`Result`] into one
/// that returns an [`Outcome`].
///
/// `Err(error)` becomes a [`Failure`] of kind [`FailureKind::Error`] whose
/// message is the error's `Display` form and whose source is the error.
/// Panics are caught exactly as in [`as_outcome`].
///
/// # Examples
///
/// ```rust
/// use railway::control::Outcome;
/// use railway::lift::{try_outcome, FailureKind};
///
/// let parse_port = try_outcome(|text: &str| text.parse::<u16>());
///
/// assert_eq!(parse_port("8080"), Outcome::Ok(8080));
///
/// let failure = parse_port("http").err().unwrap();
/// assert_eq!(failure.kind(), FailureKind::Error);
/// assert_eq!(failure.message(), "invalid digit found in string");
/// ```
pub fn try_outcome<A, T, X, F>(operation: F) -> impl Fn(A) -> Outcome<Failure, T>
where
    F: Fn(A) -> Result<T, X>,
    X: Error + Send + Sync + 'static,
{
    move |argument| capture(|| operation(argument)).and_then(settle)
}

/// Lifts a one-argument operation returning a `std` [`Result`] into one
/// that returns a [`Maybe`]. Both `Err` and panics become `Nil`.
pub fn try_maybe<A, T, X, F>(operation: F) -> impl Fn(A) -> Maybe<T>
where
    F: Fn(A) -> Result<T, X>,
    X: Error + Send + Sync + 'static,
{
    move |argument| {
        capture(|| operation(argument))
            .and_then(settle)
            .as_maybe()
    }
}

pub use self::as_maybe as as_maybe1;
pub use self::as_outcome as as_outcome1;
pub use self::try_maybe as try_maybe1;
pub use self::try_outcome as try_outcome1;

// =============================================================================
// Arity families
// =============================================================================

macro_rules! lift_arity {
    ($arity:tt; $($argument:ident: $parameter:ident),*) => {
        paste::paste! {
            #[doc = "Lifts a " $arity "-argument operation into one that returns an [`Outcome`]."]
            ///
            /// Behaves like [`as_outcome`].
            pub fn [<as_outcome $arity>]<$($parameter,)* T, F>(
                operation: F,
            ) -> impl Fn($($parameter),*) -> Outcome<Failure, T>
            where
                F: Fn($($parameter),*) -> T,
            {
                move |$($argument),*| capture(|| operation($($argument),*))
            }

            #[doc = "Lifts a " $arity "-argument operation into one that returns a [`Maybe`]."]
            ///
            /// Behaves like [`as_maybe`].
            pub fn [<as_maybe $arity>]<$($parameter,)* T, F>(
                operation: F,
            ) -> impl Fn($($parameter),*) -> Maybe<T>
            where
                F: Fn($($parameter),*) -> T,
            {
                move |$($argument),*| capture(|| operation($($argument),*)).as_maybe()
            }

            #[doc = "Lifts a " $arity "-argument operation returning a `std` [`Result`] into one that returns an [`Outcome`]."]
            ///
            /// Behaves like [`try_outcome`].
            pub fn [<try_outcome $arity>]<$($parameter,)* T, X, F>(
                operation: F,
            ) -> impl Fn($($parameter),*) -> Outcome<Failure, T>
            where
                F: Fn($($parameter),*) -> Result<T, X>,
                X: Error + Send + Sync + 'static,
            {
                move |$($argument),*| capture(|| operation($($argument),*)).and_then(settle)
            }

            #[doc = "Lifts a " $arity "-argument operation returning a `std` [`Result`] into one that returns a [`Maybe`]."]
            ///
            /// Behaves like [`try_maybe`].
            pub fn [<try_maybe $arity>]<$($parameter,)* T, X, F>(
                operation: F,
            ) -> impl Fn($($parameter),*) -> Maybe<T>
            where
                F: Fn($($parameter),*) -> Result<T, X>,
                X: Error + Send + Sync + 'static,
            {
                move |$($argument),*| {
                    capture(|| operation($($argument),*))
                        .and_then(settle)
                        .as_maybe()
                }
            }
        }
    };
}

lift_arity!(0;);
lift_arity!(2; first: A, second: B);
lift_arity!(3; first: A, second: B, third: C);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    struct Rejected(&'static str);

    impl std::fmt::Display for Rejected {
        fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(formatter, "rejected: {}", self.0)
        }
    }

    impl Error for Rejected {}

    #[rstest]
    fn as_outcome0_wraps_value() {
        let answer = as_outcome0(|| 42);
        assert_eq!(answer(), Outcome::Ok(42));
    }

    #[rstest]
    fn as_outcome0_catches_panic() {
        let explode = as_outcome0(|| -> i32 { panic!("boom") });
        assert_eq!(explode(), Outcome::Err(Failure::new(FailureKind::Panic, "boom")));
    }

    #[rstest]
    fn as_outcome_recovers_propagated_failure() {
        let original = Failure::new(FailureKind::Error, "upstream failed");
        let upstream: Outcome<Failure, i32> = Outcome::Err(original.clone());
        let lifted = as_outcome(move |offset: i32| upstream.clone().propagate() + offset);
        assert_eq!(lifted(1), Outcome::Err(original));
    }

    #[rstest]
    fn as_outcome_keeps_message_of_unwrapped_error() {
        let lifted = as_outcome(|code: u16| {
            let outcome: Outcome<Rejected, u16> = Outcome::Err(Rejected("not found"));
            outcome.unwrap() + code
        });
        assert_eq!(
            lifted(404),
            Outcome::Err(Failure::new(
                FailureKind::Panic,
                "called `Outcome::unwrap()` on an `Err` value: Rejected(\"not found\")"
            ))
        );
    }

    #[rstest]
    fn as_outcome_reports_unknown_payload() {
        let lifted = as_outcome(|_: ()| -> i32 { std::panic::panic_any(7_u32) });
        assert_eq!(
            lifted(()),
            Outcome::Err(Failure::new(FailureKind::Panic, "Unknown panic"))
        );
    }

    #[rstest]
    #[case(3, Maybe::Some(4))]
    #[case(0, Maybe::Nil)]
    fn as_maybe3_preserves_arity(#[case] divisor: i32, #[case] expected: Maybe<i32>) {
        let lifted = as_maybe3(|a: i32, b: i32, divisor: i32| (a + b) / divisor);
        assert_eq!(lifted(5, 7, divisor), expected);
    }

    #[rstest]
    fn try_outcome2_maps_error_to_failure() {
        let check = try_outcome2(|value: i32, limit: i32| {
            if value <= limit {
                Ok(value)
            } else {
                Err(Rejected("over limit"))
            }
        });
        assert_eq!(check(1, 2), Outcome::Ok(1));

        let failure = check(3, 2).err().unwrap();
        assert_eq!(failure, Failure::new(FailureKind::Error, "rejected: over limit"));
        assert!(failure.source().is_some());
    }

    #[rstest]
    fn try_maybe_turns_error_and_panic_into_nil() {
        let lifted = try_maybe(|text: &str| {
            assert!(!text.is_empty(), "empty input");
            text.parse::<i64>()
        });
        assert_eq!(lifted("12"), Maybe::Some(12));
        assert_eq!(lifted("twelve"), Maybe::Nil);
        assert_eq!(lifted(""), Maybe::Nil);
    }

    #[rstest]
    fn unary_aliases_match() {
        let lifted = as_outcome1(|n: u8| n.saturating_add(1));
        assert_eq!(lifted(255), Outcome::Ok(255));
    }
}
