//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an identity element. A type `T` is a monoid
//! if it has:
//!
//! 1. An associative binary operation `concat: (T, T) -> T` (from Semigroup)
//! 2. An identity element `identity: T` such that for all `a`:
//!    - `identity.concat(a) == a` (left identity)
//!    - `a.concat(identity) == a` (right identity)
//!
//! The identity belongs to the family, not to any instance, so it is exposed
//! as an associated function: `Sum::<i32>::identity()`.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::{All, Any, Monoid, Semigroup};
//!
//! assert_eq!(All::<bool>::identity().concat(All::new(false)), All::new(false));
//! assert_eq!(Any::new(true).concat(Any::identity()), Any::new(true));
//! ```

use super::nested::Nested;
use super::numeric::{Boolean, Bounded, Numeric};
use super::semigroup::Semigroup;
use super::wrapped::Wrapped;
use super::wrappers::{All, Any, Average, Flatten, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// ## Left Identity
///
/// ```text
/// Self::identity().concat(a) == a
/// ```
///
/// ## Right Identity
///
/// ```text
/// a.concat(Self::identity()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element of this family.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::{Monoid, Product, Sum};
    ///
    /// assert_eq!(Sum::<i32>::identity(), Sum::new(0));
    /// assert_eq!(Product::<i32>::identity(), Product::new(1));
    /// ```
    fn identity() -> Self;

    /// Combines all elements of an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this always returns a value: the
    /// identity element for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::{Monoid, Sum};
    ///
    /// let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
    /// assert_eq!(Sum::concat_all(numbers), Sum::new(6));
    ///
    /// let empty: Vec<Sum<i32>> = vec![];
    /// assert_eq!(Sum::concat_all(empty), Sum::identity());
    /// ```
    fn concat_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::identity(), |accumulator, element| {
                accumulator.concat(element)
            })
    }

    /// Returns whether this value equals the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::{Max, Monoid};
    ///
    /// assert!(Max::new(i32::MIN).is_identity());
    /// assert!(!Max::new(0).is_identity());
    /// ```
    fn is_identity(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::identity()
    }
}

// =============================================================================
// Numeric Families
// =============================================================================

/// Sum forms a monoid under addition with 0 as the identity.
impl<A: Numeric> Monoid for Sum<A> {
    fn identity() -> Self {
        Self(A::ZERO)
    }
}

/// Product forms a monoid under multiplication with 1 as the identity.
impl<A: Numeric> Monoid for Product<A> {
    fn identity() -> Self {
        Self(A::ONE)
    }
}

/// Max forms a monoid with the minimum bound as the identity.
impl<A: PartialOrd + Bounded> Monoid for Max<A> {
    fn identity() -> Self {
        Self(A::MIN_VALUE)
    }
}

/// Min forms a monoid with the maximum bound as the identity.
impl<A: PartialOrd + Bounded> Monoid for Min<A> {
    fn identity() -> Self {
        Self(A::MAX_VALUE)
    }
}

/// Average forms a monoid whose identity has sum 0 and count 0.
impl<A: Numeric> Monoid for Average<A> {
    fn identity() -> Self {
        Self::from_parts(A::ZERO, 0)
    }
}

// =============================================================================
// Boolean Families
// =============================================================================

/// All forms a monoid with `true` as the identity.
impl<A: Boolean> Monoid for All<A> {
    fn identity() -> Self {
        Self(A::TRUE)
    }
}

/// Any forms a monoid with `false` as the identity.
impl<A: Boolean> Monoid for Any<A> {
    fn identity() -> Self {
        Self(A::FALSE)
    }
}

// =============================================================================
// Sequence Family
// =============================================================================

/// Flatten forms a monoid with the empty sequence as the identity.
impl<T> Monoid for Flatten<T> {
    fn identity() -> Self {
        Self(Vec::new())
    }
}

impl<T> Flatten<T> {
    /// Flattens a nested value into a `Flatten`, recursing through lists
    /// with the `Flatten` monoid itself.
    pub(crate) fn from_nested(nested: Nested<T>) -> Self {
        match nested {
            Nested::Leaf(value) => Self(vec![value]),
            Nested::List(items) => Self::concat_all(items.into_iter().map(Self::wrap)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Identity element tests
    // =========================================================================

    #[rstest]
    fn numeric_identities() {
        assert_eq!(Sum::<i32>::identity(), Sum::new(0));
        assert_eq!(Product::<u64>::identity(), Product::new(1));
        assert_eq!(Product::<f64>::identity(), Product::new(1.0));
        assert_eq!(Max::<i8>::identity(), Max::new(i8::MIN));
        assert_eq!(Min::<u16>::identity(), Min::new(u16::MAX));
    }

    #[rstest]
    fn float_extrema_identities_are_infinite() {
        assert_eq!(Max::<f64>::identity(), Max::new(f64::NEG_INFINITY));
        assert_eq!(Min::<f32>::identity(), Min::new(f32::INFINITY));
    }

    #[rstest]
    fn average_identity_has_zero_value() {
        let identity = Average::<i32>::identity();
        assert_eq!(identity.count(), 0);
        assert_eq!(identity.value(), 0);
    }

    #[rstest]
    fn boolean_identities() {
        assert_eq!(All::<bool>::identity(), All::new(true));
        assert_eq!(Any::<bool>::identity(), Any::new(false));
    }

    #[rstest]
    fn flatten_identity_is_empty() {
        assert!(Flatten::<i32>::identity().as_inner().is_empty());
    }

    // =========================================================================
    // Identity law tests
    // =========================================================================

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(-42)]
    fn sum_identity_law(#[case] value: i32) {
        assert_eq!(Sum::identity().concat(Sum::new(value)), Sum::new(value));
        assert_eq!(Sum::new(value).concat(Sum::identity()), Sum::new(value));
    }

    #[rstest]
    fn average_identity_law() {
        let average = Average::from_parts(12, 3);
        assert_eq!(Average::identity().concat(average), average);
        assert_eq!(average.concat(Average::identity()), average);
    }

    #[rstest]
    fn flatten_identity_law() {
        let flatten = Flatten::new(vec![1, 2]);
        assert_eq!(Flatten::identity().concat(flatten.clone()), flatten);
        assert_eq!(flatten.clone().concat(Flatten::identity()), flatten);
    }

    // =========================================================================
    // concat_all / is_identity tests
    // =========================================================================

    #[rstest]
    fn concat_all_empty_returns_identity() {
        let empty: Vec<Product<i32>> = vec![];
        assert_eq!(Product::concat_all(empty), Product::new(1));
    }

    #[rstest]
    fn concat_all_folds_every_element() {
        let values = vec![Average::new(1), Average::new(2), Average::new(6)];
        assert_eq!(Average::concat_all(values).value(), 3);
    }

    #[rstest]
    fn is_identity_detects_identity() {
        assert!(Sum::new(0).is_identity());
        assert!(!Sum::new(1).is_identity());
        assert!(All::new(true).is_identity());
        assert!(Flatten::<u8>::new(vec![]).is_identity());
    }

    // =========================================================================
    // Nested flattening tests
    // =========================================================================

    #[rstest]
    fn from_nested_leaf_is_singleton() {
        assert_eq!(Flatten::from_nested(Nested::Leaf(3)), Flatten::new(vec![3]));
    }

    #[rstest]
    fn from_nested_collapses_depth() {
        let nested = Nested::List(vec![
            Nested::Leaf(0),
            Nested::List(vec![Nested::List(vec![Nested::Leaf(1)])]),
            Nested::List(vec![]),
            Nested::Leaf(2),
        ]);
        assert_eq!(Flatten::from_nested(nested), Flatten::new(vec![0, 1, 2]));
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================
