//! Strategy adapters for generating container values with proptest.
//!
//! This module lifts base proptest strategies into strategies over the
//! containers of this crate. Each adapter samples the base strategy and
//! wraps the value with the container's constructor; shrinking walks back
//! through the same mapping, so a failing case is reported as the minimal
//! container value, not a raw scalar.
//!
//! Adapters nest freely: a strategy for
//! `Either<String, Identity<Either<String, i32>>>`, the shape the
//! Traversable composition law is checked over, is built by composition:
//!
//! ```rust
//! use lawful::arbitrary::{either, identity};
//! use proptest::prelude::*;
//!
//! let strategy = either(any::<String>(), identity(either(any::<String>(), any::<i32>())));
//! # drop(strategy);
//! ```
//!
//! `Identity` and `Either` also implement [`proptest::arbitrary::Arbitrary`],
//! so `any::<Either<i32, String>>()` works directly in property blocks.
//!
//! Available when the `arbitrary` feature is enabled (the default).

use std::fmt;

use proptest::arbitrary::{any_with, Arbitrary};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;

use crate::container::{Compose, Either};
use crate::typeclass::Identity;

// =============================================================================
// Variant-Lifted Strategies
// =============================================================================

/// Lifts a strategy into a strategy of `Identity`-wrapped values.
///
/// # Examples
///
/// ```rust
/// use lawful::arbitrary::identity;
/// use proptest::prelude::*;
///
/// proptest!(|(value in identity(any::<i32>()))| {
///     let _ = value.into_inner();
/// });
/// ```
pub fn identity<S>(base: S) -> impl Strategy<Value = Identity<S::Value>>
where
    S: Strategy,
{
    base.prop_map(Identity)
}

/// Lifts a strategy into a strategy of present (`Some`) Maybe values.
pub fn just<S>(base: S) -> impl Strategy<Value = Option<S::Value>>
where
    S: Strategy,
{
    base.prop_map(Some)
}

/// A strategy producing only the empty Maybe value.
pub fn nothing<A>() -> impl Strategy<Value = Option<A>>
where
    A: Clone + fmt::Debug,
{
    Just(None)
}

/// A sum strategy over both Maybe constructors.
///
/// Both branches are reachable with non-trivial probability, so law
/// violations in either branch surface under repeated sampling.
pub fn maybe<S>(base: S) -> impl Strategy<Value = Option<S::Value>>
where
    S: Strategy,
{
    prop::option::of(base)
}

/// Lifts a strategy into a strategy of `Left`-tagged `Either` values.
pub fn left<S, R>(base: S) -> impl Strategy<Value = Either<S::Value, R>>
where
    S: Strategy,
    R: fmt::Debug,
{
    base.prop_map(Either::Left)
}

/// Lifts a strategy into a strategy of `Right`-tagged `Either` values.
pub fn right<S, L>(base: S) -> impl Strategy<Value = Either<L, S::Value>>
where
    S: Strategy,
    L: fmt::Debug,
{
    base.prop_map(Either::Right)
}

/// A sum strategy over both `Either` constructors, fairly distributed.
///
/// # Examples
///
/// ```rust
/// use lawful::arbitrary::either;
/// use proptest::prelude::*;
///
/// proptest!(|(value in either(any::<i32>(), any::<String>()))| {
///     assert!(value.is_left() || value.is_right());
/// });
/// ```
pub fn either<SL, SR>(
    left_base: SL,
    right_base: SR,
) -> impl Strategy<Value = Either<SL::Value, SR::Value>>
where
    SL: Strategy,
    SR: Strategy,
{
    prop_oneof![
        left_base.prop_map(Either::Left),
        right_base.prop_map(Either::Right),
    ]
}

/// Lifts a strategy of nested container values into a strategy of `Compose`.
pub fn compose<S>(base: S) -> impl Strategy<Value = Compose<S::Value>>
where
    S: Strategy,
{
    base.prop_map(Compose)
}

// =============================================================================
// Arbitrary Implementations
// =============================================================================

impl<A> Arbitrary for Identity<A>
where
    A: Arbitrary + 'static,
{
    type Parameters = A::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(parameters: Self::Parameters) -> Self::Strategy {
        any_with::<A>(parameters).prop_map(Identity).boxed()
    }
}

impl<L, R> Arbitrary for Either<L, R>
where
    L: Arbitrary + 'static,
    R: Arbitrary + 'static,
{
    type Parameters = (L::Parameters, R::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(parameters: Self::Parameters) -> Self::Strategy {
        let (left_parameters, right_parameters) = parameters;
        prop_oneof![
            any_with::<L>(left_parameters).prop_map(Either::Left),
            any_with::<R>(right_parameters).prop_map(Either::Right),
        ]
        .boxed()
    }
}
