//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot write a trait that abstracts over `Maybe<_>` and
//! `Outcome<E, _>` as type constructors. This module works around that with a
//! GAT: every container names itself applied to another type.
//!
//! # Example
//!
//! ```rust
//! use railway::control::Maybe;
//! use railway::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Maybe<i32> = Maybe::Some(42);
//! let absent: Maybe<String> = transform_type(present);
//! assert_eq!(absent, Maybe::Nil);
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`; for `Outcome<E, i32>` it is also `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The error type of an `Outcome` is part of the constructor, so
    /// `Outcome<E, i32>::WithType<String>` is `Outcome<E, String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(feature = "control")]
mod control_impls {
    use super::TypeConstructor;
    use crate::control::{Maybe, Outcome};

    impl<A> TypeConstructor for Maybe<A> {
        type Inner = A;
        type WithType<B> = Maybe<B>;
    }

    impl<E, T> TypeConstructor for Outcome<E, T> {
        type Inner = T;
        type WithType<B> = Outcome<E, B>;
    }
}
