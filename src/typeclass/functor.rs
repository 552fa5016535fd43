//! Functor type class - mapping over wrapped values.
//!
//! A `Functor` applies a function to the payload of a wrapper while keeping
//! the wrapper's shape: an [`Identity`] stays an `Identity`, a `Right` stays
//! a `Right`, and a `Left` is passed through untouched.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.map(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.map(f).map(g) == fa.map(|x| g(f(x)))
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for wrappers that can have a function mapped over their payload.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::{Functor, Identity};
///
/// let x = Identity::new(5);
/// let y: Identity<String> = x.map(|n| n.to_string());
/// assert_eq!(y, Identity::new("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the payload, returning the same wrapper around
    /// the result.
    ///
    /// Wrappers that represent failure return themselves unchanged and never
    /// invoke `function`.
    fn map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the payload with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::{Functor, Identity};
    ///
    /// assert_eq!(Identity::new(5).replace("replaced"), Identity::new("replaced"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map(|_| value)
    }

    /// Discards the payload, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}
