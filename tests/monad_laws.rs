#![cfg(feature = "control")]
//! Property-based tests for Monad laws and the short-circuit rule.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! The inherent `and_then` of `Outcome` and `Maybe` is checked alongside
//! the trait method, since both must obey the same laws.

use std::cell::Cell;

use proptest::prelude::*;
use railway::control::{Maybe, Outcome};
use railway::typeclass::{Applicative, Monad};

fn halve(n: i32) -> Outcome<String, i32> {
    if n % 2 == 0 {
        Outcome::Ok(n / 2)
    } else {
        Outcome::Err(format!("{n} is odd"))
    }
}

fn below_limit(n: i32) -> Outcome<String, i32> {
    if n < 1_000 {
        Outcome::Ok(n)
    } else {
        Outcome::Err(format!("{n} is too large"))
    }
}

fn non_zero(n: i32) -> Maybe<i32> {
    if n == 0 { Maybe::Nil } else { Maybe::Some(n) }
}

fn reciprocal_sign(n: i32) -> Maybe<i32> {
    if n > 0 { Maybe::Some(1) } else { Maybe::Nil }
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<String, i32>> {
    any::<Result<i32, String>>().prop_map(Outcome::from)
}

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

// =============================================================================
// Outcome<E, T> Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_left_identity(value in any::<i32>()) {
        let left = <Outcome<String, ()>>::pure(value).flat_map(halve);
        prop_assert_eq!(left, halve(value));
    }

    #[test]
    fn prop_outcome_right_identity(value in outcome_strategy()) {
        let left = value.clone().flat_map(<Outcome<String, ()>>::pure);
        prop_assert_eq!(left, value);
    }

    #[test]
    fn prop_outcome_associativity(value in outcome_strategy()) {
        let left = value.clone().and_then(halve).and_then(below_limit);
        let right = value.and_then(|x| halve(x).and_then(below_limit));
        prop_assert_eq!(left, right);
    }

    /// and_then on Err never calls the function and keeps the error
    #[test]
    fn prop_outcome_short_circuit(error in any::<String>()) {
        let calls = Cell::new(0);
        let failed: Outcome<String, i32> = Outcome::Err(error.clone());

        let result = failed.and_then(|n| {
            calls.set(calls.get() + 1);
            halve(n)
        });

        prop_assert_eq!(result, Outcome::Err(error));
        prop_assert_eq!(calls.get(), 0);
    }
}

// =============================================================================
// Maybe<A> Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        let left = <Maybe<()>>::pure(value).flat_map(non_zero);
        prop_assert_eq!(left, non_zero(value));
    }

    #[test]
    fn prop_maybe_right_identity(value in maybe_strategy()) {
        prop_assert_eq!(value.flat_map(<Maybe<()>>::pure), value);
    }

    #[test]
    fn prop_maybe_associativity(value in maybe_strategy()) {
        let left = value.and_then(non_zero).and_then(reciprocal_sign);
        let right = value.and_then(|x| non_zero(x).and_then(reciprocal_sign));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_nil_short_circuit(_seed in any::<u8>()) {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::Nil.and_then(|n| {
            calls.set(calls.get() + 1);
            non_zero(n)
        });
        prop_assert_eq!(result, Maybe::Nil);
        prop_assert_eq!(calls.get(), 0);
    }
}
