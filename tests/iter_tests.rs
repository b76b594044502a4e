#![cfg(feature = "control")]
//! Integration tests for `Iter`: laziness, ordering and flattening.

use std::cell::{Cell, RefCell};

use proptest::prelude::*;
use railway::control::{EmptyIterError, Iter, Maybe, Outcome};
use rstest::rstest;

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
fn map_is_not_evaluated_until_terminal() {
    let visited = RefCell::new(Vec::new());

    let pending = Iter::new(vec![1, 2, 3]).map(|n| {
        visited.borrow_mut().push(n);
        n * n
    });
    assert!(visited.borrow().is_empty());

    let total = pending.fold(0, |sum, n| sum + n);
    assert_eq!(total, 14);
    assert_eq!(*visited.borrow(), vec![1, 2, 3]);
}

#[rstest]
fn for_each_is_lazy() {
    let calls = Cell::new(0);
    let pending = Iter::new(0..5).for_each(|n| calls.set(calls.get() + n));
    assert_eq!(calls.get(), 0);

    let _: Vec<()> = pending.collect();
    assert_eq!(calls.get(), 10);
}

#[rstest]
fn infinite_source_is_fine_with_take() {
    let squares: Vec<u64> = Iter::new(1_u64..).map(|n| n * n).take(4).collect();
    assert_eq!(squares, vec![1, 4, 9, 16]);
}

#[rstest]
fn filter_and_enumerate_keep_order() {
    let odd: Vec<(usize, char)> = Iter::new("railway".chars())
        .filter(|c| *c != 'a')
        .enumerate()
        .collect();
    assert_eq!(odd, vec![(0, 'r'), (1, 'i'), (2, 'l'), (3, 'w'), (4, 'y')]);
}

#[rstest]
fn iter_drives_a_for_loop() {
    let mut seen = Vec::new();
    for item in Iter::new(["a", "b"]).map(str::to_uppercase) {
        seen.push(item);
    }
    assert_eq!(seen, vec!["A", "B"]);
}

// =============================================================================
// Terminal operations
// =============================================================================

#[rstest]
fn fold1_on_empty_is_error() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(Iter::new(empty).fold1(|a, b| a + b), Outcome::Err(EmptyIterError));
}

#[rstest]
fn fold1_seeds_with_first_element() {
    let joined = Iter::new(["a", "b", "c"].map(String::from)).fold1(|mut acc, s| {
        acc.push('-');
        acc.push_str(&s);
        acc
    });
    assert_eq!(joined, Outcome::Ok("a-b-c".to_string()));
}

#[rstest]
#[case(vec![], Outcome::Err(EmptyIterError))]
#[case(vec![7], Outcome::Ok(vec![7]))]
fn as_outcome_collects(#[case] source: Vec<i32>, #[case] expected: Outcome<EmptyIterError, Vec<i32>>) {
    assert_eq!(Iter::new(source).as_outcome(), expected);
}

#[rstest]
fn as_maybe_on_empty_is_nil() {
    assert_eq!(Iter::new(std::iter::empty::<u8>()).as_maybe(), Maybe::Nil);
}

// =============================================================================
// Flattening
// =============================================================================

#[rstest]
fn flatten_outcome_discards_failures() {
    let source = vec![Outcome::Ok(1), Outcome::Err("x"), Outcome::Ok(2)];
    assert_eq!(Iter::new(source).flatten_outcome(), Outcome::Ok(vec![1, 2]));
}

#[rstest]
fn flatten_outcome_when_all_fail_is_empty_error() {
    let source: Vec<Outcome<&str, i32>> = vec![Outcome::Err("x"), Outcome::Err("y")];
    assert_eq!(Iter::new(source).flatten_outcome(), Outcome::Err(EmptyIterError));
}

#[rstest]
fn flatten_outcome_on_empty_source_is_the_same_error() {
    let source: Vec<Outcome<&str, i32>> = Vec::new();
    assert_eq!(Iter::new(source).flatten_outcome(), Outcome::Err(EmptyIterError));
}

#[rstest]
fn flatten_maybe_discards_nil() {
    let source = vec![Maybe::Nil, Maybe::Some("a"), Maybe::Nil, Maybe::Some("b")];
    assert_eq!(Iter::new(source).flatten_maybe(), Maybe::Some(vec!["a", "b"]));
    assert_eq!(Iter::new(vec![Maybe::<u8>::Nil]).flatten_maybe(), Maybe::Nil);
}

#[rstest]
fn batch_with_one_failure_keeps_siblings() {
    let parse = |text: &str| Outcome::from(text.parse::<u8>());

    let values = Iter::new(["1", "300", "3"]).map(parse).flatten_outcome();

    assert_eq!(values, Outcome::Ok(vec![1, 3]));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_map_visits_each_element_once_in_order(source in prop::collection::vec(any::<i16>(), 0..50)) {
        let visited = RefCell::new(Vec::new());
        let collected: Vec<i16> = Iter::new(source.clone())
            .map(|n| {
                visited.borrow_mut().push(n);
                n
            })
            .collect();

        prop_assert_eq!(&collected, &source);
        prop_assert_eq!(&*visited.borrow(), &source);
    }

    #[test]
    fn prop_flatten_outcome_matches_filter(source in prop::collection::vec(any::<Result<u8, u8>>(), 0..50)) {
        let expected: Vec<u8> = source.iter().filter_map(|item| item.ok()).collect();
        let flattened = Iter::new(source.into_iter().map(Outcome::from)).flatten_outcome();

        if expected.is_empty() {
            prop_assert_eq!(flattened, Outcome::Err(EmptyIterError));
        } else {
            prop_assert_eq!(flattened, Outcome::Ok(expected));
        }
    }
}
