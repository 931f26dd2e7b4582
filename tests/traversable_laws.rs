#![cfg(feature = "arbitrary")]
//! Property-based tests for the Traversable laws.
//!
//! This is the verification driver: for each law, proptest generates many
//! arbitrary nested container instances, feeds each one to the corresponding
//! oracle predicate in `lawful::laws`, and reports the first (shrunk)
//! counterexample on failure.
//!
//! - **Naturality**: `identity_to_maybe(x.sequence()) ==
//!   x.fmap(identity_to_maybe).sequence()`
//! - **Identity**: `x.fmap(Identity).sequence() == Identity::pure(x)`
//! - **Composition**: `u.fmap(Compose).sequence() ==
//!   Compose(u.sequence().fmap(|x| x.sequence()))`
//!
//! The generated shapes mirror the classical statement of the laws: an
//! `Either` outer structure over an `Identity` payload, with the composition
//! law exercised over `Either<String, Identity<Either<String, i32>>>`.

use lawful::arbitrary;
use lawful::laws;
use lawful::typeclass::{Applicative, Functor, Identity, Traversable};
use proptest::prelude::*;

// =============================================================================
// Either<L, R> Traversable Laws (via the law oracle)
// =============================================================================

proptest! {
    /// Naturality law over Either<i32, Identity<String>>.
    #[test]
    fn prop_either_satisfies_naturality(
        value in arbitrary::either(any::<i32>(), arbitrary::identity(any::<String>()))
    ) {
        prop_assert!(laws::naturality(value));
    }

    /// Identity law over Either<i32, String>.
    #[test]
    fn prop_either_satisfies_identity(
        value in arbitrary::either(any::<i32>(), any::<String>())
    ) {
        prop_assert!(laws::identity(value));
    }

    /// Composition law over Either<String, Identity<Either<String, i32>>>.
    #[test]
    fn prop_either_satisfies_composition(
        value in arbitrary::either(
            any::<String>(),
            arbitrary::identity(arbitrary::either(any::<String>(), any::<i32>())),
        )
    ) {
        prop_assert!(laws::composition(value));
    }
}

// =============================================================================
// Additional Traversable Law Checks
//
// The oracle states the laws over the Either outer shape; the same equations
// are checked here inline for the other containers.
// =============================================================================

proptest! {
    /// Identity law for Option: x.fmap(Identity).sequence() == Identity::pure(x)
    #[test]
    fn prop_option_satisfies_identity(value in any::<Option<i32>>()) {
        let lhs = value.fmap(Identity).sequence();
        prop_assert_eq!(lhs, <Identity<()>>::pure(value));
    }

    /// Identity law for Identity itself.
    #[test]
    fn prop_identity_satisfies_identity(value in any::<Identity<String>>()) {
        let lhs = value.clone().fmap(Identity).sequence();
        prop_assert_eq!(lhs, <Identity<()>>::pure(value));
    }

    /// Naturality for Option: collapsing the Identity payload before or
    /// after sequencing gives the same result.
    #[test]
    fn prop_option_satisfies_naturality(
        value in arbitrary::maybe(arbitrary::identity(any::<i32>()))
    ) {
        let lhs = laws::identity_to_maybe(value.sequence());
        let rhs = value.fmap(laws::identity_to_maybe).sequence();
        prop_assert_eq!(lhs, rhs);
    }

    /// Sequencing is consistent with traversing the identity function.
    #[test]
    fn prop_sequence_is_traverse_of_identity_function(
        value in arbitrary::either(any::<i32>(), arbitrary::identity(any::<String>()))
    ) {
        let lhs = value.clone().sequence();
        let rhs = value.traverse(|inner| inner);
        prop_assert_eq!(lhs, rhs);
    }
}

// =============================================================================
// Structural Round-Trip Properties
// =============================================================================

proptest! {
    /// equals against itself after a fmap(id) round-trip is always true.
    #[test]
    fn prop_fmap_id_round_trip_is_reflexive(
        value in arbitrary::either(any::<i32>(), any::<String>())
    ) {
        let round_tripped = value.clone().fmap(|x| x);
        prop_assert_eq!(round_tripped, value);
    }

    /// Sequencing a generated nested structure never invents or drops a
    /// failure slot: the outer tag survives inside the flipped nesting.
    #[test]
    fn prop_sequence_preserves_outer_tag(
        value in arbitrary::either(any::<i32>(), arbitrary::identity(any::<String>()))
    ) {
        let was_left = value.is_left();
        let flipped = value.sequence();
        prop_assert_eq!(flipped.into_inner().is_left(), was_left);
    }
}
