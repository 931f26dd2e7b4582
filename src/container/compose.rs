//! Compose combinator - the functor composition of two containers.
//!
//! This module provides `Compose<FG>`, a container wrapping a value of type
//! `F (G a)` for two inner containers `F` and `G`. The composition is itself
//! a Functor and an Applicative whenever both layers are, with every
//! operation pushed through the two layers in lock-step: the outer structure
//! is preserved and the inner structure transformed elementwise.
//!
//! `Compose` exists so the Traversable composition law can be stated
//! generically: traversing through the composition in one step must equal
//! traversing each layer independently and recombining. Without it, every
//! pair of containers under test would need a bespoke nested type. See
//! [`crate::laws::composition`].
//!
//! # Examples
//!
//! ```rust
//! use lawful::container::Compose;
//! use lawful::typeclass::{Applicative, Functor, Identity};
//!
//! // pure goes through both layers
//! let lifted: Compose<Identity<Option<i32>>> = <Compose<Identity<Option<()>>>>::pure(5);
//! assert_eq!(lifted, Compose(Identity(Some(5))));
//!
//! // fmap transforms the innermost payload
//! let doubled = lifted.fmap(|n| n * 2);
//! assert_eq!(doubled, Compose(Identity(Some(10))));
//! ```

use crate::typeclass::{Applicative, Functor, TypeConstructor};

/// The composition of two containers, wrapping a value of type `F (G a)`.
///
/// The type parameter `FG` is the already-nested value (for example
/// `Identity<Either<String, i32>>`); `Compose` reinterprets it as a single
/// unary container over the innermost payload. The two layers are recovered
/// through the [`TypeConstructor`] encoding: `FG` is the outer layer and
/// `FG::Inner` the inner one.
///
/// # Invariants
///
/// - `pure(x)` wraps through both layers: `Compose(F::pure(G::pure(x)))`
/// - `fmap`/`map2`/`apply` preserve the outer structure and transform the
///   inner structure elementwise
/// - equality is structural equality of the underlying doubly-wrapped value
///
/// # Examples
///
/// ```rust
/// use lawful::container::{Compose, Either};
/// use lawful::typeclass::{Functor, Identity};
///
/// let nested: Compose<Identity<Either<String, i32>>> =
///     Compose(Identity(Either::Right(21)));
/// assert_eq!(
///     nested.fmap(|n| n * 2),
///     Compose(Identity(Either::Right(42))),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Compose<FG>(pub FG);

impl<FG> Compose<FG> {
    /// Creates a new `Compose` from an already-nested container value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::Compose;
    /// use lawful::typeclass::Identity;
    ///
    /// let composed = Compose::new(Identity(Some(5)));
    /// assert_eq!(composed.into_inner(), Identity(Some(5)));
    /// ```
    #[inline]
    pub const fn new(value: FG) -> Self {
        Self(value)
    }

    /// Consumes the `Compose` and returns the underlying nested value.
    #[inline]
    pub fn into_inner(self) -> FG {
        self.0
    }

    /// Returns a reference to the underlying nested value.
    #[inline]
    pub const fn as_inner(&self) -> &FG {
        &self.0
    }
}

// =============================================================================
// Type Class Implementations
//
// The innermost payload is the Inner type; swapping it out rebuilds both
// layers through their own WithType projections.
// =============================================================================

impl<FG> TypeConstructor for Compose<FG>
where
    FG: TypeConstructor,
    FG::Inner: TypeConstructor,
{
    type Inner = <FG::Inner as TypeConstructor>::Inner;
    type WithType<B> = Compose<FG::WithType<<FG::Inner as TypeConstructor>::WithType<B>>>;
}

impl<FG> Functor for Compose<FG>
where
    FG: Functor,
    FG::Inner: Functor,
{
    #[inline]
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B,
    {
        Compose(self.0.fmap(|inner| inner.fmap(function)))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B,
    {
        Compose(self.0.fmap_ref(|inner| inner.fmap_ref(function)))
    }
}

impl<FG> Applicative for Compose<FG>
where
    FG: Applicative,
    FG::Inner: Applicative,
{
    #[inline]
    fn pure<B>(value: B) -> Self::WithType<B> {
        Compose(FG::pure(<FG::Inner as Applicative>::pure(value)))
    }

    #[inline]
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C,
    {
        Compose(
            self.0
                .map2(other.0, |inner_self, inner_other| {
                    inner_self.map2(inner_other, function)
                }),
        )
    }
}
