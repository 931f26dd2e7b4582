//! Applicative type class - applying functions within contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift pure values into the applicative context (`pure`)
//! - Combine two applicative values using a function (`map2`)
//! - Apply a wrapped function to a wrapped value (`apply`)
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::Applicative;
//!
//! // Lifting a pure value into Option context
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! // Applying a wrapped function to a wrapped value
//! let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
//! assert_eq!(function.apply(Some(5)), Some(6));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for types that support lifting values and combining contexts.
///
/// `Applicative` extends `Functor` with `pure` (lift a bare value into the
/// minimal context) and `apply` (apply a wrapped function to a wrapped
/// value). For a two-slot container like `Either`, `pure` always resolves to
/// the right-biased success slot; the failure slot has no `pure` and
/// short-circuits every combination.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// pure(|x| x).apply(v) == v
/// ```
///
/// ## Homomorphism Law
///
/// ```text
/// pure(f).apply(pure(x)) == pure(f(x))
/// ```
///
/// ## Interchange Law
///
/// ```text
/// u.apply(pure(y)) == pure(|f| f(y)).apply(u)
/// ```
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::Applicative;
///
/// let a = Some(3);
/// let b = Some(4);
/// let sum = a.map2(b, |x, y| x + y);
/// assert_eq!(sum, Some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// This is the canonical single-payload constructor for the container:
    /// `Some` for `Option`, `Right` for `Either`, `Identity` for `Identity`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side is in its failure/empty slot, the result carries that
    /// slot; the receiver's failure wins when both sides fail.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function that takes both inner values and produces a result
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Applicative;
    ///
    /// let a = Some(1);
    /// let b = Some(2);
    /// assert_eq!(a.map2(b, |x, y| x + y), Some(3));
    ///
    /// let a = Some(1);
    /// let b: Option<i32> = None;
    /// assert_eq!(a.map2(b, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Applies a function inside the context to a value inside the context.
    ///
    /// This method is available when `Self` contains a function type. It
    /// applies the contained function to the value in `other`, short-circuiting
    /// to the failure/empty slot if either side is not payload-bearing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// let value = Some(5);
    /// assert_eq!(function.apply(value), Some(6));
    /// ```
    #[inline]
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Applicative;
    ///
    /// let a = Some(1);
    /// let b = Some("hello");
    /// assert_eq!(a.product(b), Some((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }
}
