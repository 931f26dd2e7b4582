//! Law oracle - the Traversable laws as pure, runnable predicates.
//!
//! Each function in this module evaluates one Traversable law for a single
//! generated instance and returns a boolean. The predicates are pure and
//! share no state, so a property-testing driver can evaluate them over many
//! independently generated instances, stop at the first counterexample, and
//! shrink it. The driver lives in `tests/traversable_laws.rs`; this module
//! only states the laws.
//!
//! The nested shapes mirror the way the laws are classically exercised:
//! an `Either` outer structure whose payload is an `Identity`, with
//! [`Compose`] providing the two-layer context the composition law needs.
//!
//! # Examples
//!
//! ```rust
//! use lawful::container::Either;
//! use lawful::typeclass::Identity;
//!
//! let value: Either<i32, Identity<String>> = Either::Right(Identity("x".to_string()));
//! assert!(lawful::laws::naturality(value));
//! ```

use crate::container::{Compose, Either};
use crate::typeclass::{Applicative, Functor, Identity, Traversable};

/// The natural transformation used to state the naturality law.
///
/// Collapses an `Identity` into the Maybe context. It always produces the
/// present branch (a `Some`), never the empty one; the law is deliberately
/// exercised with this narrower transformation.
///
/// # Examples
///
/// ```rust
/// use lawful::laws::identity_to_maybe;
/// use lawful::typeclass::Identity;
///
/// assert_eq!(identity_to_maybe(Identity(5)), Some(5));
/// ```
#[inline]
pub fn identity_to_maybe<A>(identity: Identity<A>) -> Option<A> {
    Some(identity.into_inner())
}

/// The Traversable naturality law.
///
/// For the natural transformation [`identity_to_maybe`], applying it after
/// sequencing must equal mapping it over the payload and sequencing into the
/// target context:
///
/// ```text
/// identity_to_maybe(x.sequence()) == x.fmap(identity_to_maybe).sequence()
/// ```
///
/// # Examples
///
/// ```rust
/// use lawful::container::Either;
/// use lawful::laws::naturality;
/// use lawful::typeclass::Identity;
///
/// let value: Either<i32, Identity<String>> = Either::Left(9);
/// assert!(naturality(value));
/// ```
pub fn naturality<L, A>(value: Either<L, Identity<A>>) -> bool
where
    L: Clone + PartialEq,
    A: Clone + PartialEq,
{
    let lhs = identity_to_maybe(value.clone().sequence());
    let rhs = value.fmap(identity_to_maybe).sequence();
    lhs == rhs
}

/// The Traversable identity law.
///
/// Wrapping every payload in the minimal context and then flattening must
/// recover the original structure, unchanged, now wrapped once:
///
/// ```text
/// x.fmap(Identity).sequence() == Identity::pure(x)
/// ```
///
/// # Examples
///
/// ```rust
/// use lawful::container::Either;
/// use lawful::laws::identity;
///
/// let value: Either<i32, String> = Either::Right("hello".to_string());
/// assert!(identity(value));
/// ```
pub fn identity<L, A>(value: Either<L, A>) -> bool
where
    L: Clone + PartialEq,
    A: Clone + PartialEq,
{
    let lhs = value.clone().fmap(Identity).sequence();
    lhs == <Identity<()>>::pure(value)
}

/// The Traversable composition law.
///
/// For a structure whose payloads are themselves traversable, traversing
/// through the [`Compose`] of the two inner contexts in one step must equal
/// traversing each layer independently and recombining:
///
/// ```text
/// u.fmap(Compose).sequence() == Compose(u.sequence().fmap(|x| x.sequence()))
/// ```
///
/// # Examples
///
/// ```rust
/// use lawful::container::Either;
/// use lawful::laws::composition;
/// use lawful::typeclass::Identity;
///
/// let value: Either<String, Identity<Either<String, i32>>> =
///     Either::Right(Identity(Either::Right(5)));
/// assert!(composition(value));
/// ```
pub fn composition<L, M, A>(value: Either<L, Identity<Either<M, A>>>) -> bool
where
    L: Clone + PartialEq,
    M: Clone + PartialEq,
    A: Clone + PartialEq,
{
    let lhs = value.clone().fmap(Compose).sequence();
    let rhs = Compose(value.sequence().fmap(|inner| inner.sequence()));
    lhs == rhs
}
