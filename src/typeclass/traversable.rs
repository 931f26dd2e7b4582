//! Traversable type class - flipping a container of containers inside out.
//!
//! This module provides the `Traversable` trait, which represents types that
//! can have an effectful function applied to their payload while collecting
//! the result inside the effect: traversing a `C (D a)` produces a `D (C a)`.
//!
//! # Motivation
//!
//! Consider an `Either<L, Identity<A>>`. Sequencing it produces an
//! `Identity<Either<L, A>>`: the inner context moves to the outside and the
//! outer structure is rebuilt around the payload. If the outer container is
//! in its failure/empty slot, the result is that slot lifted with the inner
//! context's `pure`: nothing to traverse, structure preserved.
//!
//! Because `traverse` is generic over any [`Applicative`], the same
//! definitions work when the inner context is itself a composition of two
//! containers ([`Compose`](crate::container::Compose)), which is exactly what
//! the Traversable composition law requires.
//!
//! # Laws
//!
//! Implementations must satisfy three laws, stated as runnable predicates in
//! [`crate::laws`]:
//!
//! ## Naturality
//!
//! For any natural transformation `t` between applicative contexts:
//! ```text
//! t(x.sequence()) == x.fmap(t).sequence()
//! ```
//!
//! ## Identity
//!
//! Wrapping every payload in `Identity` and flattening recovers the original
//! structure, wrapped once:
//! ```text
//! x.fmap(Identity).sequence() == Identity::pure(x)
//! ```
//!
//! ## Composition
//!
//! Traversing through the composition of two contexts equals traversing each
//! layer independently and recombining:
//! ```text
//! u.fmap(Compose).sequence() == Compose(u.sequence().fmap(|x| x.sequence()))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Identity, Traversable};
//!
//! // Traverse an Option with a fallible projection
//! let value: Option<&str> = Some("5");
//! let parsed: Option<Option<i32>> = value.traverse(|s| s.parse::<i32>().ok());
//! assert_eq!(parsed, Some(Some(5)));
//! ```

use super::applicative::Applicative;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for structures that can be traversed with effects.
///
/// `Traversable` extends `Functor` with `traverse`: apply a function
/// producing a value in some applicative context `G` to the payload, and
/// collect the rebuilt structure inside `G`. `sequence` is the special case
/// where the payload already is the context.
///
/// The target context is a type parameter bound only by [`Applicative`], so
/// one implementation per container serves every inner context: `Identity`,
/// `Option`, `Either`, or a `Compose` of any two of them.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::{Identity, Traversable};
/// use lawful::container::Either;
///
/// // A present payload is rebuilt inside the inner context
/// let right: Either<&str, Identity<i32>> = Either::Right(Identity(3));
/// assert_eq!(right.sequence(), Identity(Either::Right(3)));
///
/// // A failure slot passes through untouched, lifted with the inner pure
/// let left: Either<&str, Identity<i32>> = Either::Left("e");
/// assert_eq!(left.sequence(), Identity(Either::Left("e")));
/// ```
pub trait Traversable: Functor {
    /// Applies an effectful function to the payload and collects the result
    /// inside the effect.
    ///
    /// If the container is in its failure/empty slot, the function is never
    /// called and the slot is lifted into the target context with `G::pure`.
    ///
    /// # Arguments
    ///
    /// * `function` - A function from the payload into the target context
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::Either;
    /// use lawful::typeclass::Traversable;
    ///
    /// let right: Either<&str, i32> = Either::Right(5);
    /// let traversed: Option<Either<&str, i32>> = right.traverse(Some);
    /// assert_eq!(traversed, Some(Either::Right(5)));
    /// ```
    fn traverse<G, F>(self, function: F) -> G::WithType<Self::WithType<G::Inner>>
    where
        Self: Sized,
        G: Applicative,
        F: FnOnce(Self::Inner) -> G;

    /// Flips a container of containers into the opposite nesting order.
    ///
    /// Converts `Self` holding a `G`-context payload into `G` holding a
    /// `Self`-shaped payload. This is `traverse` with the identity function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Identity, Traversable};
    ///
    /// let nested: Option<Identity<i32>> = Some(Identity(5));
    /// assert_eq!(nested.sequence(), Identity(Some(5)));
    /// ```
    #[inline]
    fn sequence(
        self,
    ) -> <Self::Inner as TypeConstructor>::WithType<
        Self::WithType<<Self::Inner as TypeConstructor>::Inner>,
    >
    where
        Self: Sized,
        Self::Inner: Applicative,
    {
        self.traverse(|inner| inner)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Traversable for Option<A> {
    #[inline]
    fn traverse<G, F>(self, function: F) -> G::WithType<Option<G::Inner>>
    where
        G: Applicative,
        F: FnOnce(A) -> G,
    {
        match self {
            Some(value) => function(value).fmap(Some),
            None => G::pure(None),
        }
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Traversable for Identity<A> {
    #[inline]
    fn traverse<G, F>(self, function: F) -> G::WithType<Identity<G::Inner>>
    where
        G: Applicative,
        F: FnOnce(A) -> G,
    {
        function(self.0).fmap(Identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Option<A> Tests
    // =========================================================================

    #[rstest]
    fn option_traverse_some() {
        let value: Option<i32> = Some(5);
        let result: Identity<Option<i32>> = value.traverse(|n| Identity(n * 2));
        assert_eq!(result, Identity(Some(10)));
    }

    #[rstest]
    fn option_traverse_none_lifts_with_pure() {
        let value: Option<i32> = None;
        let result: Identity<Option<i32>> = value.traverse(|n| Identity(n * 2));
        assert_eq!(result, Identity(None));
    }

    #[rstest]
    fn option_sequence_flips_nesting() {
        let nested: Option<Identity<i32>> = Some(Identity(5));
        assert_eq!(nested.sequence(), Identity(Some(5)));
    }

    #[rstest]
    fn option_sequence_of_option() {
        let nested: Option<Option<i32>> = Some(Some(5));
        assert_eq!(nested.sequence(), Some(Some(5)));

        let inner_none: Option<Option<i32>> = Some(None);
        assert_eq!(inner_none.sequence(), None);

        let outer_none: Option<Option<i32>> = None;
        assert_eq!(outer_none.sequence(), Some(None));
    }

    // =========================================================================
    // Identity<A> Tests
    // =========================================================================

    #[rstest]
    fn identity_traverse_rebuilds_inside_effect() {
        let value = Identity(5);
        let result: Option<Identity<i32>> = value.traverse(|n| Some(n + 1));
        assert_eq!(result, Some(Identity(6)));
    }

    #[rstest]
    fn identity_traverse_propagates_empty_effect() {
        let value = Identity(5);
        let result: Option<Identity<i32>> = value.traverse(|_| None);
        assert_eq!(result, None);
    }

    #[rstest]
    fn identity_sequence_flips_nesting() {
        let nested: Identity<Option<i32>> = Identity(Some(5));
        assert_eq!(nested.sequence(), Some(Identity(5)));
    }

    // =========================================================================
    // Law Tests (Unit Tests)
    // =========================================================================

    /// Identity law: x.fmap(Identity).sequence() == Identity::pure(x)
    #[rstest]
    fn option_traversable_identity_law() {
        let some_value: Option<i32> = Some(42);
        assert_eq!(some_value.fmap(Identity).sequence(), Identity(some_value));

        let none_value: Option<i32> = None;
        assert_eq!(none_value.fmap(Identity).sequence(), Identity(none_value));
    }

    /// No information loss through double-wrapping.
    #[rstest]
    fn identity_traversable_identity_law() {
        let value = Identity(Some(3));
        assert_eq!(value.fmap(Identity).sequence(), Identity(value));
    }
}
