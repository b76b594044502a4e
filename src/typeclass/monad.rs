//! Monad type class - sequencing computations with context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to chain computations where each step depends on the result
//! of the previous one. For the railway containers this is the short-circuit:
//! once a step lands on the failure track, later steps are never called.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Outcome;
//! use railway::typeclass::Monad;
//!
//! fn parse(text: &str) -> Outcome<String, i32> {
//!     text.parse::<i32>().map_err(|_| format!("not a number: {text}")).into()
//! }
//!
//! fn positive(n: i32) -> Outcome<String, i32> {
//!     if n > 0 { Outcome::Ok(n) } else { Outcome::Err(format!("not positive: {n}")) }
//! }
//!
//! assert_eq!(parse("7").flat_map(positive), Outcome::Ok(7));
//! assert_eq!(parse("-7").flat_map(positive), Outcome::Err("not positive: -7".to_string()));
//! assert_eq!(parse("x").flat_map(positive), Outcome::Err("not a number: x".to_string()));
//! ```

use super::applicative::Applicative;

/// A type class for sequencing computations within a context.
///
/// # Laws
///
/// ## Left Identity
///
/// ```text
/// pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity
///
/// ```text
/// m.flat_map(pure) == m
/// ```
///
/// ## Associativity
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Applies a function returning a container to the contained value and
    /// flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    /// use railway::typeclass::Monad;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Maybe::Some(n / 2) } else { Maybe::Nil };
    /// assert_eq!(Maybe::Some(8).flat_map(halve), Maybe::Some(4));
    /// assert_eq!(Maybe::Some(3).flat_map(halve), Maybe::Nil);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// The first computation still decides which track the result is on.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

#[cfg(feature = "control")]
mod control_impls {
    use super::Monad;
    use crate::control::{Maybe, Outcome};

    impl<A> Monad for Maybe<A> {
        #[inline]
        fn flat_map<B, F>(self, function: F) -> Maybe<B>
        where
            F: FnOnce(A) -> Maybe<B>,
        {
            Self::and_then(self, function)
        }
    }

    impl<E: Clone, T> Monad for Outcome<E, T> {
        #[inline]
        fn flat_map<B, F>(self, function: F) -> Outcome<E, B>
        where
            F: FnOnce(T) -> Outcome<E, B>,
        {
            Self::and_then(self, function)
        }
    }
}
