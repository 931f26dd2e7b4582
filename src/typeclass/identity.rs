//! Identity wrapper type - the trivial container.
//!
//! This module provides the `Identity` type, which wraps exactly one value
//! and adds no structure. It plays two roles in this crate:
//!
//! - The minimal Applicative context: `sequence`-ing into `Identity` must
//!   recover the original structure unchanged (the Traversable identity law)
//! - The source of the natural transformation used to state the naturality
//!   law (see [`laws::identity_to_maybe`](crate::laws::identity_to_maybe))

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// `Identity` is the simplest possible type constructor: one tag, one
/// payload. Because it carries no structure of its own, it is the reference
/// point for the Traversable laws: traversing with `Identity` as the target
/// context can only rearrange wrappers, never lose information.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// assert_eq!(x.as_inner(), "hello");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
