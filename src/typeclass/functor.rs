//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value while preserving the
//! structure: an `Ok` stays `Ok`, a `Nil` stays `Nil`.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Maybe;
//! use railway::typeclass::Functor;
//!
//! let present: Maybe<i32> = Maybe::Some(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Maybe::Some("5".to_string()));
//!
//! let absent: Maybe<i32> = Maybe::Nil;
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::Nil);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    /// use railway::typeclass::Functor;
    ///
    /// let success: Outcome<String, i32> = Outcome::Ok(5);
    /// assert_eq!(success.fmap(|n| n * 2), Outcome::Ok(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor must stay available afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    /// use railway::typeclass::Functor;
    ///
    /// let name = Maybe::Some("hello".to_string());
    /// assert_eq!(name.fmap_ref(|s| s.len()), Maybe::Some(5));
    /// assert!(name.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    /// use railway::typeclass::Functor;
    ///
    /// let saved: Outcome<String, usize> = Outcome::Ok(512);
    /// assert_eq!(saved.void(), Outcome::Ok(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

#[cfg(feature = "control")]
mod control_impls {
    use super::Functor;
    use crate::control::{Maybe, Outcome};

    // =========================================================================
    // Maybe<A> Implementation
    // =========================================================================

    impl<A> Functor for Maybe<A> {
        #[inline]
        fn fmap<B, F>(self, function: F) -> Maybe<B>
        where
            F: FnOnce(A) -> B,
        {
            self.map(function)
        }

        #[inline]
        fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
        where
            F: FnOnce(&A) -> B,
        {
            self.as_ref().map(function)
        }
    }

    // =========================================================================
    // Outcome<E, T> Implementation
    // =========================================================================

    impl<E: Clone, T> Functor for Outcome<E, T> {
        #[inline]
        fn fmap<B, F>(self, function: F) -> Outcome<E, B>
        where
            F: FnOnce(T) -> B,
        {
            self.map(function)
        }

        #[inline]
        fn fmap_ref<B, F>(&self, function: F) -> Outcome<E, B>
        where
            F: FnOnce(&T) -> B,
        {
            match self {
                Outcome::Ok(value) => Outcome::Ok(function(value)),
                Outcome::Err(error) => Outcome::Err(error.clone()),
            }
        }
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Maybe, Outcome};
    use rstest::rstest;

    // =========================================================================
    // Maybe<A> Tests
    // =========================================================================

    #[rstest]
    fn maybe_fmap_some() {
        let x: Maybe<i32> = Maybe::Some(5);
        let y: Maybe<String> = x.fmap(|n| n.to_string());
        assert_eq!(y, Maybe::Some("5".to_string()));
    }

    #[rstest]
    fn maybe_fmap_nil() {
        let x: Maybe<i32> = Maybe::Nil;
        let y: Maybe<String> = x.fmap(|n| n.to_string());
        assert_eq!(y, Maybe::Nil);
    }

    #[rstest]
    fn maybe_replace_some() {
        let x: Maybe<i32> = Maybe::Some(5);
        assert_eq!(x.replace("replaced"), Maybe::Some("replaced"));
    }

    // =========================================================================
    // Outcome<E, T> Tests
    // =========================================================================

    #[rstest]
    fn outcome_fmap_err() {
        let x: Outcome<&str, i32> = Outcome::Err("error");
        let y: Outcome<&str, String> = x.fmap(|n| n.to_string());
        assert_eq!(y, Outcome::Err("error"));
    }

    #[rstest]
    fn outcome_fmap_ref_ok() {
        let x: Outcome<String, String> = Outcome::Ok("hello".to_string());
        let y: Outcome<String, usize> = x.fmap_ref(|s| s.len());
        assert_eq!(y, Outcome::Ok(5));
        // Verify x is still available
        assert_eq!(x, Outcome::Ok("hello".to_string()));
    }

    #[rstest]
    fn outcome_fmap_ref_err() {
        let x: Outcome<String, String> = Outcome::Err("error".to_string());
        let y: Outcome<String, usize> = x.fmap_ref(|s| s.len());
        assert_eq!(y, Outcome::Err("error".to_string()));
    }

    #[rstest]
    fn outcome_void_err() {
        let x: Outcome<&str, i32> = Outcome::Err("error");
        assert_eq!(x.void(), Outcome::Err("error"));
    }

    // =========================================================================
    // Law Tests (Unit Tests)
    // =========================================================================

    /// Composition law: fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
    #[rstest]
    fn outcome_composition_law() {
        let ok_value: Outcome<&str, i32> = Outcome::Ok(5);
        let function1 = |n: i32| n + 1;
        let function2 = |n: i32| n * 2;

        let left = ok_value.fmap(function1).fmap(function2);
        let right = ok_value.fmap(move |x| function2(function1(x)));

        assert_eq!(left, right);
        assert_eq!(left, Outcome::Ok(12));
    }
}
