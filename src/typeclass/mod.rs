//! Type class traits for the container algebra.
//!
//! This module provides the traits shared by every container in the crate:
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and applying functions within containers
//! - [`Traversable`]: Flipping a container of containers inside out
//! - [`Identity`]: The trivial container, used as the base case for the laws
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, which is what allows `traverse` and `sequence` to be generic
//! over the target Applicative, including the
//! [`Compose`](crate::container::Compose) applicative used to state the
//! Traversable composition law.
//!
//! # Examples
//!
//! ## Using Applicative
//!
//! ```rust
//! use lawful::typeclass::Applicative;
//!
//! // Lifting a pure value
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! // Combining two Option values
//! let a = Some(1);
//! let b = Some(2);
//! let sum = a.map2(b, |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```
//!
//! ## Using Traversable
//!
//! ```rust
//! use lawful::typeclass::{Identity, Traversable};
//!
//! let nested: Option<Identity<i32>> = Some(Identity(5));
//! let flipped: Identity<Option<i32>> = nested.sequence();
//! assert_eq!(flipped, Identity(Some(5)));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod traversable;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use traversable::Traversable;
