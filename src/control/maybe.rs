//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<T>` type, which is either `Some(T)` or
//! `Nil`. It mirrors [`Outcome`] with the error track replaced by plain
//! absence: a `Nil` skips every following step of a chain in the same way an
//! `Err` does.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Maybe, Outcome};
//!
//! let port = Maybe::Some("8000")
//!     .and_then(|text| Maybe::from(text.parse::<u16>().ok()))
//!     .map(|port| port + 1);
//! assert_eq!(port, Maybe::Some(8001));
//!
//! // Supplying an error turns absence into a failure.
//! let missing: Maybe<u16> = Maybe::Nil;
//! assert_eq!(missing.as_outcome("no port"), Outcome::Err("no port"));
//! ```

use super::outcome::Outcome;

/// A value that may be absent.
///
/// `Maybe<T>` is either `Some(T)` or `Nil`. Unlike [`Outcome`] it carries no
/// information about why a value is missing.
///
/// # Examples
///
/// ```rust
/// use railway::control::Maybe;
///
/// let present = Maybe::Some(5);
/// let absent: Maybe<i32> = Maybe::Nil;
///
/// assert_eq!(present.map(|x| x * 2), Maybe::Some(10));
/// assert_eq!(absent.map(|x| x * 2), Maybe::Nil);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// The present variant, holding the value.
    Some(T),
    /// The absent variant.
    Nil,
}

impl<T> Maybe<T> {
    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `Nil`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::Nil => Maybe::Nil,
        }
    }

    /// Eliminates the `Maybe` by applying `on_some` to a present value or
    /// calling `on_nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// let present = Maybe::Some(3);
    /// assert_eq!(present.fold(|x| x * 2, || 0), 6);
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, on_some: F, on_nil: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::Nil => on_nil(),
        }
    }

    /// Applies a function to a present value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::Nil => Maybe::Nil,
        }
    }

    /// Chains a computation that may produce nothing.
    ///
    /// On `Nil`, `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// let positive = |x: i32| if x > 0 { Maybe::Some(x) } else { Maybe::Nil };
    ///
    /// assert_eq!(Maybe::Some(4).and_then(positive), Maybe::Some(4));
    /// assert_eq!(Maybe::Some(-4).and_then(positive), Maybe::Nil);
    /// assert_eq!(Maybe::Nil.and_then(positive), Maybe::Nil);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::Nil => Maybe::Nil,
        }
    }

    /// Applies a function to a present value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.fold(function, || default)
    }

    /// Applies `function` to a present value, or calls `on_nil`.
    ///
    /// The absence handler comes first, as for [`Outcome::map_or_else`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// let absent: Maybe<&str> = Maybe::Nil;
    /// assert_eq!(absent.map_or_else(|| 0, |text| text.len()), 0);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, on_nil: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        self.fold(function, on_nil)
    }

    /// Returns the value, or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.fold(|value| value, || default)
    }

    /// Returns the value, or computes one.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.fold(|value| value, function)
    }

    /// Returns the value, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// assert_eq!(Maybe::Some(42).unwrap(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nil => panic!("called `Maybe::unwrap()` on a `Nil` value"),
        }
    }

    /// Returns the value, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nil`, with `message` as a prefix.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nil => panic!("{message}: called `Maybe::expect()` on a `Nil` value"),
        }
    }

    /// Calls `function` with a present value and returns `self` unchanged.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` if this is `Nil` and returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// let mut missing = 0;
    /// let absent: Maybe<i32> = Maybe::Nil;
    /// let absent = absent.map(|x| x + 1).on_nil(|| missing += 1);
    ///
    /// assert_eq!(absent, Maybe::Nil);
    /// assert_eq!(missing, 1);
    /// ```
    #[inline]
    pub fn on_nil<F>(self, function: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            function();
        }
        self
    }

    /// Converts into an [`Outcome`], using `error` for the `Nil` case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::Some(1).as_outcome("missing"), Outcome::Ok(1));
    /// assert_eq!(Maybe::<i32>::Nil.as_outcome("missing"), Outcome::Err("missing"));
    /// ```
    #[inline]
    pub fn as_outcome<E>(self, error: E) -> Outcome<E, T> {
        self.fold(Outcome::Ok, || Outcome::Err(error))
    }
}

impl<T> Default for Maybe<T> {
    /// Returns `Nil`.
    #[inline]
    fn default() -> Self {
        Self::Nil
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    /// Yields the value, or nothing for `Nil`.
    ///
    /// `Iter::new(maybe)` wraps the same sequence in the lazy
    /// [`Iter`](super::Iter) combinators.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Option::<T>::from(self).into_iter()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::Nil,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::Nil => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::Some(1), Maybe::Some(1), true)]
    #[case(Maybe::Some(1), Maybe::Some(2), false)]
    #[case(Maybe::Nil, Maybe::Nil, true)]
    #[case(Maybe::Some(1), Maybe::Nil, false)]
    fn test_equality(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: bool) {
        assert_eq!(left == right, expected);
    }

    #[rstest]
    fn test_default_is_nil() {
        assert_eq!(Maybe::<String>::default(), Maybe::Nil);
    }

    #[rstest]
    #[should_panic(expected = "called `Maybe::unwrap()` on a `Nil` value")]
    fn test_unwrap_on_nil_panics() {
        let absent: Maybe<i32> = Maybe::Nil;
        let _ = absent.unwrap();
    }

    #[rstest]
    #[should_panic(expected = "config missing: called `Maybe::expect()` on a `Nil` value")]
    fn test_expect_on_nil_panics_with_prefix() {
        let absent: Maybe<i32> = Maybe::Nil;
        let _ = absent.expect("config missing");
    }

    #[rstest]
    fn test_std_option_conversion_roundtrip() {
        let maybe: Maybe<i32> = Some(42).into();
        assert_eq!(maybe, Maybe::Some(42));
        assert_eq!(Option::<i32>::from(maybe), Some(42));

        let maybe = Maybe::from(None::<i32>);
        assert_eq!(Option::<i32>::from(maybe), None);
    }

    #[rstest]
    fn test_debug_format_nil() {
        assert_eq!(format!("{:?}", Maybe::<i32>::Nil), "Nil");
        assert_eq!(format!("{:?}", Maybe::Some(1)), "Some(1)");
    }
}
