#![cfg(feature = "arbitrary")]
//! Property-based tests for Applicative laws.
//!
//! This module verifies that all Applicative implementations satisfy the
//! required laws:
//!
//! - **Identity Law**: `pure(|x| x).apply(v) == v`
//! - **Homomorphism Law**: `pure(f).apply(pure(x)) == pure(f(x))`
//! - **Interchange Law**: `u.apply(pure(y)) == pure(|f| f(y)).apply(u)`
//!
//! The function side of each equation uses `fn` pointers so the same
//! function value can appear on both sides of the comparison.

use lawful::arbitrary;
use lawful::container::{Compose, Either};
use lawful::typeclass::{Applicative, Identity};
use proptest::prelude::*;

// =============================================================================
// Option<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Option<i32>
    #[test]
    fn prop_option_applicative_identity_law(value in any::<Option<i32>>()) {
        let identity: Option<fn(i32) -> i32> = <Option<()>>::pure(|x| x);
        prop_assert_eq!(identity.apply(value), value);
    }

    /// Homomorphism Law for Option<i32>
    #[test]
    fn prop_option_applicative_homomorphism_law(value in any::<i32>()) {
        let function: fn(i32) -> i32 = |x| x.wrapping_add(7);

        let left = <Option<()>>::pure(function).apply(<Option<()>>::pure(value));
        let right: Option<i32> = <Option<()>>::pure(function(value));

        prop_assert_eq!(left, right);
    }

    /// Interchange Law for Option<i32>
    #[test]
    fn prop_option_applicative_interchange_law(y in any::<i32>()) {
        let u: Option<fn(i32) -> i32> = Some(|x| x.wrapping_mul(2));

        let left = u.apply(<Option<()>>::pure(y));
        let right = <Option<()>>::pure(move |f: fn(i32) -> i32| f(y)).apply(u);

        prop_assert_eq!(left, right);
    }

    /// product agrees with map2 into a tuple
    #[test]
    fn prop_option_map2_consistent_with_product(a in any::<Option<i32>>(), b in any::<Option<i32>>()) {
        let left = a.map2(b, |x, y| (x, y));
        let right = a.product(b);
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either<L, R> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Either<String, i32>
    #[test]
    fn prop_either_applicative_identity_law(value in any::<Either<String, i32>>()) {
        let identity: Either<String, fn(i32) -> i32> = <Either<String, ()>>::pure(|x| x);
        prop_assert_eq!(identity.apply(value.clone()), value);
    }

    /// Homomorphism Law for Either<String, i32>
    #[test]
    fn prop_either_applicative_homomorphism_law(value in any::<i32>()) {
        let function: fn(i32) -> i32 = |x| x.wrapping_add(7);

        let left = <Either<String, ()>>::pure(function).apply(<Either<String, ()>>::pure(value));
        let right: Either<String, i32> = <Either<String, ()>>::pure(function(value));

        prop_assert_eq!(left, right);
    }

    /// A Left function container short-circuits apply for any argument.
    #[test]
    fn prop_either_apply_short_circuits_left(
        error in any::<String>(),
        value in any::<Either<String, i32>>()
    ) {
        let function: Either<String, fn(i32) -> i32> = Either::Left(error.clone());
        prop_assert_eq!(function.apply(value), Either::Left(error));
    }

    /// pure is right-biased for every payload.
    #[test]
    fn prop_either_pure_is_right(value in any::<i32>()) {
        let lifted: Either<String, i32> = <Either<String, ()>>::pure(value);
        prop_assert_eq!(lifted, Either::Right(value));
    }
}

// =============================================================================
// Identity<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Identity<i32>
    #[test]
    fn prop_identity_applicative_identity_law(value in any::<Identity<i32>>()) {
        let identity: Identity<fn(i32) -> i32> = <Identity<()>>::pure(|x| x);
        prop_assert_eq!(identity.apply(value), value);
    }

    /// Interchange Law for Identity<i32>
    #[test]
    fn prop_identity_applicative_interchange_law(y in any::<i32>()) {
        let u: Identity<fn(i32) -> i32> = Identity(|x| x.wrapping_mul(3));

        let left = u.apply(<Identity<()>>::pure(y));
        let right = <Identity<()>>::pure(move |f: fn(i32) -> i32| f(y)).apply(u);

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Compose<FG> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Compose over Identity<Either<String, i32>>
    #[test]
    fn prop_compose_applicative_identity_law(
        value in arbitrary::compose(arbitrary::identity(arbitrary::either(any::<String>(), any::<i32>())))
    ) {
        let identity: Compose<Identity<Either<String, fn(i32) -> i32>>> =
            <Compose<Identity<Either<String, ()>>>>::pure(|x| x);
        prop_assert_eq!(identity.apply(value.clone()), value);
    }

    /// Homomorphism Law for Compose over Option<Identity<i32>>
    #[test]
    fn prop_compose_applicative_homomorphism_law(value in any::<i32>()) {
        type C = Compose<Option<Identity<()>>>;
        let function: fn(i32) -> i32 = |x| x.wrapping_add(7);

        let left = C::pure(function).apply(C::pure(value));
        let right: Compose<Option<Identity<i32>>> = C::pure(function(value));

        prop_assert_eq!(left, right);
    }

    /// pure on a Compose equals wrapping through both layers' pure.
    #[test]
    fn prop_compose_pure_layers(value in any::<i32>()) {
        let composed: Compose<Identity<Option<i32>>> =
            <Compose<Identity<Option<()>>>>::pure(value);
        let layered = Compose(<Identity<()>>::pure(<Option<()>>::pure(value)));
        prop_assert_eq!(composed, layered);
    }
}
