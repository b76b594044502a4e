//! Type class traits for the railway containers.
//!
//! This module provides the type classes (traits) that describe what
//! [`Outcome`](crate::control::Outcome) and [`Maybe`](crate::control::Maybe)
//! have in common:
//!
//! - [`Functor`]: Mapping over the contained value
//! - [`Applicative`]: Lifting plain values and combining independent containers
//! - [`Monad`]: Sequencing computations where each step depends on the last
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! which is what lets `Functor` and `Monad` talk about "the same container
//! holding a different type".
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Maybe, Outcome};
//! use railway::typeclass::{Applicative, Functor, Monad};
//!
//! fn double_inside<F>(container: F) -> F::WithType<i32>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.fmap(|x| x * 2)
//! }
//!
//! assert_eq!(double_inside(Maybe::Some(21)), Maybe::Some(42));
//! assert_eq!(double_inside(Outcome::<String, i32>::Ok(21)), Outcome::Ok(42));
//!
//! let sum = Maybe::Some(1).map2(Maybe::Some(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::Some(3));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
