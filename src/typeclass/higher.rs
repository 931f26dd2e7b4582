//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types (HKT)
//! in Rust using Generic Associated Types (GAT). This is essential for defining
//! type class traits like Functor, Applicative, and Traversable.
//!
//! # Background
//!
//! Rust does not natively support Higher-Kinded Types. For example, we cannot
//! write a trait that abstracts over `Option<_>` and `Either<L, _>` as type
//! constructors. This module uses GAT to work around this limitation.
//!
//! The uniform representation is what lets `fmap`, `map2`, and `sequence` be
//! defined once per container and still compose correctly across nested
//! containers such as `Either<L, Identity<A>>`.

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated Types.
/// It allows abstracting over type constructors like `Option<_>`,
/// `Either<L, _>`, or `Identity<_>`.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use lawful::typeclass::TypeConstructor;
///
/// // Option<i32> implements TypeConstructor
/// fn example<T: TypeConstructor<Inner = i32>>() {
///     // T::WithType<String> would be the same constructor with String
/// }
///
/// example::<Option<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`. For a two-slot
    /// container like `Either<L, R>`, it is the payload slot (`R`).
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Option<i32>`, `WithType<String>` would be
    /// `Option<String>`; for `Either<L, R>`, it is `Either<L, B>` with the
    /// failure slot's type fixed.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures that the resulting
    /// type is also a valid type constructor, maintaining the ability to
    /// chain transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}
