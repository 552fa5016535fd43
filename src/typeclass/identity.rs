//! Identity wrapper type - the identity functor.
//!
//! `Identity` is the plain container of the library: it wraps one value and
//! adds no behaviour, so `map` always applies, `chain` always continues, and
//! `fold` always extracts. It is the context used to chain ordinary
//! computations in the same style as fallible ones.

use std::fmt;

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::{Functor, Identity};
///
/// let result = Identity::new(3)
///     .map(|x| x + 4)
///     .map(|x| x * 5)
///     .fold(|x| f64::from(x) / 10.0);
/// assert!((result - 3.5).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Identity;
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
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Extracts the value by applying `function` to it.
    ///
    /// There is no failure branch, so this never short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Identity;
    ///
    /// let length = Identity::new("hello").fold(str::len);
    /// assert_eq!(length, 5);
    /// ```
    #[inline]
    pub fn fold<T, F>(self, function: F) -> T
    where
        F: FnOnce(A) -> T,
    {
        function(self.0)
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

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity({})", self.0)
    }
}
