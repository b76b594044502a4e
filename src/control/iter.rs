//! Lazy, single-pass sequences.
//!
//! This module provides the `Iter<I>` type, a thin wrapper around any
//! [`Iterator`] that adds the terminal operations needed to bring a sequence
//! of [`Outcome`] or [`Maybe`] values back onto a single railway.
//!
//! Intermediate operations (`map`, `filter`, `for_each`, `enumerate`, `take`)
//! only build a new wrapper; no element is produced and no function is called
//! until a terminal operation pulls elements through the chain. Terminal
//! operations take `self` by value, so an exhausted `Iter` cannot be used
//! again:
//!
//! ```rust,compile_fail
//! use railway::control::Iter;
//!
//! let numbers = Iter::new(vec![1, 2, 3]);
//! let total = numbers.fold(0, |sum, x| sum + x);
//! let again = numbers.fold(0, |sum, x| sum + x); // use of moved value
//! ```
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Iter, Outcome};
//!
//! let lines = ["7", "x", "35"];
//! let parsed = Iter::new(lines)
//!     .map(|line| Outcome::from(line.parse::<i32>()))
//!     .flatten_outcome()
//!     .map(|numbers| numbers.iter().sum::<i32>());
//!
//! assert_eq!(parsed, Outcome::Ok(42));
//! ```

use std::iter::{Enumerate, Filter, FusedIterator, Map, Take};

use super::error::EmptyIterError;
use super::maybe::Maybe;
use super::outcome::Outcome;

/// A lazy, forward-only sequence.
///
/// `Iter<I>` wraps a source iterator `I`. The source may be finite or
/// infinite; a terminal operation over an infinite source only returns if the
/// chain bounds it first (for example with [`take`](Self::take)).
///
/// `Iter` is itself an [`Iterator`], so it can also be consumed with a `for`
/// loop or any `std` adapter.
///
/// # Examples
///
/// ```rust
/// use railway::control::Iter;
///
/// let squares: Vec<u64> = Iter::new(1..)
///     .map(|x: u64| x * x)
///     .filter(|square| square % 2 == 1)
///     .take(3)
///     .collect();
///
/// assert_eq!(squares, vec![1, 9, 25]);
/// ```
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<I> {
    source: I,
}

impl<I: Iterator> Iter<I> {
    /// Wraps any iterable source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Iter;
    ///
    /// let letters = Iter::new("abc".chars());
    /// assert_eq!(letters.collect::<String>(), "abc");
    /// ```
    #[inline]
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            source: source.into_iter(),
        }
    }

    // =========================================================================
    // Lazy Operations
    // =========================================================================

    /// Lazily applies `function` to every element.
    ///
    /// `function` is not called here; each element goes through it exactly
    /// once, in source order, when a terminal operation pulls it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Iter;
    /// use std::cell::Cell;
    ///
    /// let calls = Cell::new(0);
    /// let doubled = Iter::new(vec![1, 2, 3]).map(|x| {
    ///     calls.set(calls.get() + 1);
    ///     x * 2
    /// });
    /// assert_eq!(calls.get(), 0);
    ///
    /// assert_eq!(doubled.collect::<Vec<_>>(), vec![2, 4, 6]);
    /// assert_eq!(calls.get(), 3);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Iter<Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        Iter {
            source: self.source.map(function),
        }
    }

    /// Lazily applies `function` to every element.
    ///
    /// Same as [`map`](Self::map), named for call sites where the function is
    /// run for what it does to each element. Unlike [`Iterator::for_each`]
    /// this does not consume the sequence; a terminal operation still has to
    /// drive it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{Iter, Outcome};
    ///
    /// fn run_task(path: &str) -> Outcome<String, usize> {
    ///     if path.ends_with(".csv") {
    ///         Outcome::Ok(path.len())
    ///     } else {
    ///         Outcome::Err(format!("unsupported file: {path}"))
    ///     }
    /// }
    ///
    /// let sizes = Iter::new(["a.csv", "b.txt", "cc.csv"])
    ///     .for_each(run_task)
    ///     .flatten_outcome();
    /// assert_eq!(sizes, Outcome::Ok(vec![5, 6]));
    /// ```
    #[inline]
    pub fn for_each<U, F>(self, function: F) -> Iter<Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        self.map(function)
    }

    /// Lazily keeps only the elements for which `predicate` holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Iter<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Iter {
            source: self.source.filter(predicate),
        }
    }

    /// Lazily pairs every element with its position, starting at zero.
    #[inline]
    pub fn enumerate(self) -> Iter<Enumerate<I>> {
        Iter {
            source: self.source.enumerate(),
        }
    }

    /// Lazily keeps at most the first `count` elements.
    #[inline]
    pub fn take(self, count: usize) -> Iter<Take<I>> {
        Iter {
            source: self.source.take(count),
        }
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Reduces the sequence from left to right, starting with `initial`.
    ///
    /// The initial value comes first, as in [`Iterator::fold`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Iter;
    ///
    /// let digits = Iter::new([1, 2, 3]).fold(String::new(), |mut text, digit| {
    ///     text.push_str(&digit.to_string());
    ///     text
    /// });
    /// assert_eq!(digits, "123");
    /// ```
    #[inline]
    pub fn fold<U, F>(self, initial: U, function: F) -> U
    where
        F: FnMut(U, I::Item) -> U,
    {
        self.source.fold(initial, function)
    }

    /// Reduces the sequence using its first element as the initial value.
    ///
    /// # Errors
    ///
    /// Returns `Err(EmptyIterError)` if the sequence has no element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{EmptyIterError, Iter, Outcome};
    ///
    /// assert_eq!(Iter::new([3, 9, 4]).fold1(i32::max), Outcome::Ok(9));
    /// assert_eq!(Iter::new(Vec::<i32>::new()).fold1(i32::max), Outcome::Err(EmptyIterError));
    /// ```
    #[inline]
    pub fn fold1<F>(mut self, function: F) -> Outcome<EmptyIterError, I::Item>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        match self.source.next() {
            Some(first) => Outcome::Ok(self.source.fold(first, function)),
            None => Outcome::Err(EmptyIterError),
        }
    }

    /// Collects the remaining elements into any [`FromIterator`] container,
    /// preserving source order.
    #[inline]
    pub fn collect<B>(self) -> B
    where
        B: FromIterator<I::Item>,
    {
        self.source.collect()
    }

    /// Collects every element into `Ok(Vec)`.
    ///
    /// # Errors
    ///
    /// Returns `Err(EmptyIterError)` if the sequence yields nothing.
    #[inline]
    pub fn as_outcome(self) -> Outcome<EmptyIterError, Vec<I::Item>> {
        let items: Vec<I::Item> = self.collect();
        if items.is_empty() {
            Outcome::Err(EmptyIterError)
        } else {
            Outcome::Ok(items)
        }
    }

    /// Collects every element into `Some(Vec)`, or `Nil` if the sequence
    /// yields nothing.
    #[inline]
    pub fn as_maybe(self) -> Maybe<Vec<I::Item>> {
        self.as_outcome().as_maybe()
    }
}

impl<E, T, I> Iter<I>
where
    I: Iterator<Item = Outcome<E, T>>,
{
    /// Keeps the success values of a sequence of outcomes, in order.
    ///
    /// Every `Err` element is dropped without being reported. If nothing
    /// succeeds the result is `Err(EmptyIterError)`, which is also what an
    /// empty source produces: "every element failed" and "there were no
    /// elements" are indistinguishable here. Attach [`Outcome::on_err`] to the
    /// elements upstream when the individual errors matter.
    ///
    /// # Errors
    ///
    /// Returns `Err(EmptyIterError)` when no element is `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{EmptyIterError, Iter, Outcome};
    ///
    /// let mixed = vec![Outcome::Ok(1), Outcome::Err("x"), Outcome::Ok(2)];
    /// assert_eq!(Iter::new(mixed).flatten_outcome(), Outcome::Ok(vec![1, 2]));
    ///
    /// let failed: Vec<Outcome<&str, i32>> = vec![Outcome::Err("x"), Outcome::Err("y")];
    /// assert_eq!(Iter::new(failed).flatten_outcome(), Outcome::Err(EmptyIterError));
    /// ```
    pub fn flatten_outcome(self) -> Outcome<EmptyIterError, Vec<T>> {
        Iter {
            source: self.source.filter_map(Outcome::ok),
        }
        .as_outcome()
    }
}

impl<T, I> Iter<I>
where
    I: Iterator<Item = Maybe<T>>,
{
    /// Keeps the present values of a sequence of `Maybe`s, in order.
    ///
    /// Returns `Nil` when nothing is present, whether the source was empty or
    /// every element was `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{Iter, Maybe};
    ///
    /// let sparse = vec![Maybe::Nil, Maybe::Some('a'), Maybe::Some('b')];
    /// assert_eq!(Iter::new(sparse).flatten_maybe(), Maybe::Some(vec!['a', 'b']));
    /// ```
    pub fn flatten_maybe(self) -> Maybe<Vec<T>> {
        Iter {
            source: self.source.filter_map(Option::<T>::from),
        }
        .as_maybe()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

impl<I: Iterator> Iterator for Iter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.source.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for Iter<I> {}

impl<I: Iterator> From<I> for Iter<I> {
    #[inline]
    fn from(source: I) -> Self {
        Self { source }
    }
}
