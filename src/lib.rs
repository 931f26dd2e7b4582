//! # lawful
//!
//! Algebraic sum-type containers with lawful Functor, Applicative, and
//! Traversable operations, plus a property-based harness that verifies
//! the Traversable laws hold for arbitrary nested instances.
//!
//! ## Overview
//!
//! This library provides three base containers and one combinator:
//!
//! - **`Identity<A>`**: the trivial container, wrapping exactly one value
//! - **`Option<A>`**: the standard library type, used as Maybe
//! - **`Either<L, R>`**: a left/right sum type with a right-biased
//!   Applicative (`pure` is `Right`, `Left` propagates untouched)
//! - **`Compose<FG>`**: the functor composition of two containers,
//!   wrapping a value of type `F (G a)`
//!
//! Each container implements the [`typeclass`] traits:
//!
//! - [`TypeConstructor`](typeclass::TypeConstructor): higher-kinded type
//!   emulation via Generic Associated Types
//! - [`Functor`](typeclass::Functor): `fmap` over the payload
//! - [`Applicative`](typeclass::Applicative): `pure` and lifted application
//! - [`Traversable`](typeclass::Traversable): `traverse` and `sequence`,
//!   generic over the target Applicative
//!
//! The [`laws`] module states the three Traversable laws (naturality,
//! identity, composition) as pure predicates, and the [`arbitrary`] module
//! (feature `arbitrary`, enabled by default) lifts proptest strategies into
//! container strategies so the laws can be checked over arbitrary nested
//! structures.
//!
//! ## Example
//!
//! ```rust
//! use lawful::prelude::*;
//!
//! let either: Either<&str, Identity<i32>> = Either::Right(Identity(3));
//!
//! // sequence flips Either<L, Identity<A>> into Identity<Either<L, A>>
//! let flipped: Identity<Either<&str, i32>> = either.sequence();
//! assert_eq!(flipped, Identity(Either::Right(3)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the container types and the type class traits.
///
/// # Usage
///
/// ```rust
/// use lawful::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::{Compose, Either};
    pub use crate::typeclass::{Applicative, Functor, Identity, Traversable, TypeConstructor};
}

pub mod container;
pub mod laws;
pub mod typeclass;

#[cfg(feature = "arbitrary")]
pub mod arbitrary;
