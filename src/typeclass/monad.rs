//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends [`Functor`] with `chain`: the function returns a wrapped
//! value itself, and that value becomes the result without an extra layer of
//! wrapping. For a failure-carrying wrapper such as `Either`, a failed step
//! stops the chain.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! wrap(a).chain(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.chain(wrap) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for wrappers that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::{Identity, Monad};
///
/// let x = Identity::new(5);
/// let y = x.chain(|n| Identity::new(n * 2));
/// assert_eq!(y, Identity::new(10));
/// ```
pub trait Monad: Functor {
    /// Applies a function returning a wrapped value, and returns that value.
    ///
    /// This is `>>=` (bind) in Haskell and `and_then` on `Option`/`Result`.
    fn chain<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the first result.
    ///
    /// If `self` represents a failure, the failure propagates and `next` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::{Identity, Monad};
    ///
    /// assert_eq!(Identity::new(5).then(Identity::new("next")), Identity::new("next"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.chain(|_| next)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_chain_returns_function_result() {
        let result = Identity::new(3).chain(|x| Identity::new(x.to_string()));
        assert_eq!(result, Identity::new("3".to_string()));
    }

    #[rstest]
    fn identity_chain_sequences_steps() {
        let result = Identity::new(2)
            .chain(|x| Identity::new(x + 1))
            .chain(|x| Identity::new(x * 10))
            .fold(|x| x);
        assert_eq!(result, 30);
    }

    #[rstest]
    fn identity_then_discards_first_value() {
        assert_eq!(Identity::new(1).then(Identity::new(2)), Identity::new(2));
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================
