//! The container variants of the algebra.
//!
//! This module provides the sum-type containers that, together with
//! [`Identity`](crate::typeclass::Identity) and `Option`, make up the
//! container algebra:
//!
//! - [`Either`]: a two-slot sum type with a right-biased Applicative
//! - [`Compose`]: the functor composition of two containers, used to state
//!   the Traversable composition law
//!
//! # Examples
//!
//! ```rust
//! use lawful::container::Either;
//! use lawful::typeclass::Functor;
//!
//! let right: Either<String, i32> = Either::Right(21);
//! assert_eq!(right.fmap(|n| n * 2), Either::Right(42));
//! ```

mod compose;
mod either;

pub use compose::Compose;
pub use either::Either;
