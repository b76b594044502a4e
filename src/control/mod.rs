//! Containers for railway-oriented error handling.
//!
//! This module provides the three data types the rest of the crate is built
//! around:
//!
//! - [`Outcome`]: the result of an operation that may fail (`Ok` or `Err`)
//! - [`Maybe`]: a value that may be absent (`Some` or `Nil`)
//! - [`Iter`]: a lazy, single-pass sequence that can flatten sequences of
//!   `Outcome` or `Maybe` values
//!
//! `Outcome` and `Maybe` convert into each other: dropping the error goes one
//! way, supplying an error goes the other.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```rust
//! use railway::control::Outcome;
//!
//! fn halve(number: i32) -> Outcome<String, i32> {
//!     if number % 2 == 0 {
//!         Outcome::Ok(number / 2)
//!     } else {
//!         Outcome::Err(format!("{number} is odd"))
//!     }
//! }
//!
//! assert_eq!(Outcome::Ok(12).and_then(halve).and_then(halve), Outcome::Ok(3));
//! assert_eq!(
//!     Outcome::Ok(6).and_then(halve).and_then(halve),
//!     Outcome::Err("3 is odd".to_string())
//! );
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use railway::control::{Iter, Maybe};
//!
//! let present = Iter::new(vec![Maybe::Some(1), Maybe::Nil, Maybe::Some(3)]).flatten_maybe();
//! assert_eq!(present, Maybe::Some(vec![1, 3]));
//! ```

mod error;
mod iter;
mod maybe;
mod outcome;

pub use error::EmptyIterError;
pub use iter::Iter;
pub use maybe::Maybe;
pub use outcome::Outcome;

static_assertions::assert_impl_all!(Outcome<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Outcome<std::rc::Rc<i32>, i32>: Send, Sync);
