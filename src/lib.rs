//! # railway
//!
//! Railway-oriented error handling for Rust: failures and absent values
//! travel as ordinary data through chains of combinators instead of
//! escaping as panics.
//!
//! ## Overview
//!
//! - **Containers**: [`Outcome`](control::Outcome) (success or failure),
//!   [`Maybe`](control::Maybe) (present or absent) and the lazy
//!   [`Iter`](control::Iter) sequence wrapper
//! - **Lift adapters**: turn any operation that may panic (or return a `std`
//!   `Result`) into one that returns an `Outcome` or a `Maybe`
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` over the containers
//!
//! Batch processing is the motivating use case: one failing item becomes an
//! `Err` and its siblings keep going.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `control`: `Outcome`, `Maybe`, `Iter`
//! - `lift`: Lift adapters and the `Failure` capture type
//! - `serde`: `Serialize`/`Deserialize` for `Outcome` and `Maybe`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use railway::prelude::*;
//!
//! let parse = try_outcome(|text: &str| text.trim().parse::<i32>());
//!
//! let doubled = Iter::new(["21", "oops", "4"])
//!     .map(|text| parse(text).map(|number| number * 2))
//!     .flatten_outcome();
//!
//! assert_eq!(doubled, Outcome::Ok(vec![42, 8]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use railway::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "lift")]
    pub use crate::lift::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "lift")]
pub mod lift;
