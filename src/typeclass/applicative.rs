//! Applicative type class - applying functions within contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift pure values into the context (`pure`)
//! - Combine independent containers with a function (`map2`, `map3`)
//! - Pair containers up (`product`)
//!
//! For the railway containers, combining fails as soon as one input is on
//! the failure track; with several `Err` inputs the leftmost error wins.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Outcome;
//! use railway::typeclass::Applicative;
//!
//! let host: Outcome<String, &str> = Outcome::Ok("localhost");
//! let port: Outcome<String, u16> = Outcome::Ok(8000);
//! assert_eq!(
//!     host.map2(port, |host, port| format!("{host}:{port}")),
//!     Outcome::Ok("localhost:8000".to_string())
//! );
//! ```

use super::functor::Functor;

/// A type class for lifting values and combining independent computations.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{Maybe, Outcome};
    /// use railway::typeclass::Applicative;
    ///
    /// let x: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(x, Maybe::Some(42));
    ///
    /// let y: Outcome<String, &str> = <Outcome<String, ()>>::pure("hello");
    /// assert_eq!(y, Outcome::Ok("hello"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    /// use railway::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::Some(1).map2(Maybe::Some(2), |x, y| x + y), Maybe::Some(3));
    /// assert_eq!(Maybe::Some(1).map2(Maybe::<i32>::Nil, |x, y| x + y), Maybe::Nil);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self::Inner: FnOnce(B) -> Output;
}

#[cfg(feature = "control")]
mod control_impls {
    use super::Applicative;
    use crate::control::{Maybe, Outcome};

    // =========================================================================
    // Maybe<A> Implementation
    // =========================================================================

    impl<A> Applicative for Maybe<A> {
        #[inline]
        fn pure<B>(value: B) -> Maybe<B> {
            Maybe::Some(value)
        }

        #[inline]
        fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
        where
            F: FnOnce(A, B) -> C,
        {
            match (self, other) {
                (Self::Some(a), Maybe::Some(b)) => Maybe::Some(function(a, b)),
                _ => Maybe::Nil,
            }
        }

        #[inline]
        fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
        where
            F: FnOnce(A, B, C) -> D,
        {
            match (self, second, third) {
                (Self::Some(a), Maybe::Some(b), Maybe::Some(c)) => Maybe::Some(function(a, b, c)),
                _ => Maybe::Nil,
            }
        }

        #[inline]
        fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
        where
            A: FnOnce(B) -> Output,
        {
            match (self, other) {
                (Self::Some(function), Maybe::Some(b)) => Maybe::Some(function(b)),
                _ => Maybe::Nil,
            }
        }
    }

    // =========================================================================
    // Outcome<E, T> Implementation
    // =========================================================================

    impl<E: Clone, T> Applicative for Outcome<E, T> {
        #[inline]
        fn pure<B>(value: B) -> Outcome<E, B> {
            Outcome::Ok(value)
        }

        #[inline]
        fn map2<B, C, F>(self, other: Outcome<E, B>, function: F) -> Outcome<E, C>
        where
            F: FnOnce(T, B) -> C,
        {
            match (self, other) {
                (Self::Ok(a), Outcome::Ok(b)) => Outcome::Ok(function(a, b)),
                (Self::Err(error), _) | (_, Outcome::Err(error)) => Outcome::Err(error),
            }
        }

        #[inline]
        fn map3<B, C, D, F>(
            self,
            second: Outcome<E, B>,
            third: Outcome<E, C>,
            function: F,
        ) -> Outcome<E, D>
        where
            F: FnOnce(T, B, C) -> D,
        {
            match (self, second, third) {
                (Self::Ok(a), Outcome::Ok(b), Outcome::Ok(c)) => Outcome::Ok(function(a, b, c)),
                (Self::Err(error), _, _)
                | (_, Outcome::Err(error), _)
                | (_, _, Outcome::Err(error)) => Outcome::Err(error),
            }
        }

        #[inline]
        fn apply<B, Output>(self, other: Outcome<E, B>) -> Outcome<E, Output>
        where
            T: FnOnce(B) -> Output,
        {
            match (self, other) {
                (Self::Ok(function), Outcome::Ok(b)) => Outcome::Ok(function(b)),
                (Self::Err(error), _) | (_, Outcome::Err(error)) => Outcome::Err(error),
            }
        }
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Maybe, Outcome};
    use rstest::rstest;

    #[rstest]
    fn maybe_pure_creates_some() {
        let x: Maybe<i32> = <Maybe<()>>::pure(42);
        assert_eq!(x, Maybe::Some(42));
    }

    #[rstest]
    fn maybe_map3_with_nil() {
        let result = Maybe::Some(1).map3(Maybe::<i32>::Nil, Maybe::Some(3), |a, b, c| a + b + c);
        assert_eq!(result, Maybe::Nil);
    }

    #[rstest]
    fn outcome_map2_leftmost_error_wins() {
        let first: Outcome<&str, i32> = Outcome::Err("first");
        let second: Outcome<&str, i32> = Outcome::Err("second");
        assert_eq!(first.map2(second, |a, b| a + b), Outcome::Err("first"));
    }

    #[rstest]
    fn outcome_map3_all_ok() {
        let result = Outcome::<&str, i32>::Ok(1).map3(Outcome::Ok(2), Outcome::Ok(3), |a, b, c| a + b + c);
        assert_eq!(result, Outcome::Ok(6));
    }

    #[rstest]
    fn outcome_product_right_keeps_error() {
        let left: Outcome<&str, i32> = Outcome::Err("left failed");
        assert_eq!(left.product_right(Outcome::Ok("ignored")), Outcome::Err("left failed"));
    }

    /// Homomorphism law: pure(f).apply(pure(x)) == pure(f(x))
    #[rstest]
    fn outcome_homomorphism_law() {
        let function = |n: i32| n * 3;
        let left: Outcome<(), i32> =
            <Outcome<(), ()>>::pure(function).apply(<Outcome<(), ()>>::pure(14));
        assert_eq!(left, Outcome::Ok(function(14)));
    }

    /// Identity law: pure(|x| x).apply(v) == v
    #[rstest]
    fn maybe_identity_law() {
        let value = Maybe::Some(7);
        let left = <Maybe<()>>::pure(|x: i32| x).apply(value);
        assert_eq!(left, value);
    }
}
