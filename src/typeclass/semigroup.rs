//! Semigroup type class - types with an associative binary operation.
//!
//! A semigroup is a set together with an associative binary operation. In
//! this library every family that implements [`Semigroup`] is a wrapper type
//! selecting one particular operation for its payload (addition for
//! [`Sum`], logical AND for [`All`], and so on).
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.concat(b)).concat(c) == a.concat(b.concat(c))
//! ```
//!
//! The library does not check this law at runtime; a family that breaks it
//! simply folds differently depending on grouping.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::{Max, Semigroup, Sum};
//!
//! assert_eq!(Sum::new(3).concat(Sum::new(5)), Sum::new(8));
//! assert_eq!(Max::new(3).concat(Max::new(5)), Max::new(5));
//! ```

use std::ops::{Add, Mul};

use super::numeric::Boolean;
use super::wrappers::{All, Any, Average, Flatten, Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.concat(b)).concat(c) == a.concat(b.concat(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::{All, Semigroup};
///
/// assert_eq!(All::new(true).concat(All::new(false)), All::new(false));
/// ```
pub trait Semigroup {
    /// Combines two values of the same family into a new one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::{Product, Semigroup};
    ///
    /// assert_eq!(Product::new(4).concat(Product::new(5)), Product::new(20));
    /// ```
    #[must_use]
    fn concat(self, other: Self) -> Self;

    /// Combines two values by reference, leaving both operands untouched.
    ///
    /// The default implementation clones both values and calls `concat`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::{Flatten, Semigroup};
    ///
    /// let left = Flatten::new(vec![1, 2]);
    /// let right = Flatten::new(vec![3]);
    /// assert_eq!(left.concat_ref(&right), Flatten::new(vec![1, 2, 3]));
    /// assert_eq!(left, Flatten::new(vec![1, 2]));
    /// ```
    #[must_use]
    fn concat_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().concat(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// `concat_n(x, 1)` returns `x`, `concat_n(x, 3)` returns
    /// `x.concat(x).concat(x)`.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::{Semigroup, Sum};
    ///
    /// assert_eq!(Sum::new(4).concat_n(3), Sum::new(12));
    /// ```
    #[must_use]
    fn concat_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "concat_n requires count > 0");

        let mut result = self.clone();
        for _ in 1..count {
            result = result.concat(self.clone());
        }
        result
    }

    /// Reduces all elements of an iterator with `concat`.
    ///
    /// Returns `None` for an empty iterator. For a version seeded with the
    /// identity element, see [`Monoid::concat_all`](super::Monoid::concat_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::{Min, Semigroup};
    ///
    /// let values = vec![Min::new(4), Min::new(2), Min::new(9)];
    /// assert_eq!(Min::reduce_all(values), Some(Min::new(2)));
    ///
    /// let empty: Vec<Min<i32>> = vec![];
    /// assert_eq!(Min::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.concat(element))
    }
}

// =============================================================================
// Numeric Families
// =============================================================================

/// Sum forms a semigroup under addition.
impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn concat(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Product forms a semigroup under multiplication.
impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn concat(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

/// Max forms a semigroup by keeping the larger value. Ties keep the right operand.
impl<A: PartialOrd> Semigroup for Max<A> {
    fn concat(self, other: Self) -> Self {
        if self.0 > other.0 { self } else { other }
    }
}

/// Min forms a semigroup by keeping the smaller value. Ties keep the right operand.
impl<A: PartialOrd> Semigroup for Min<A> {
    fn concat(self, other: Self) -> Self {
        if self.0 < other.0 { self } else { other }
    }
}

/// Average adds running sums and counts componentwise.
impl<A: Add<Output = A>> Semigroup for Average<A> {
    fn concat(self, other: Self) -> Self {
        Self::from_parts(self.sum + other.sum, self.count + other.count)
    }
}

// =============================================================================
// Boolean Families
// =============================================================================

/// All forms a semigroup under logical AND.
impl<A: Boolean> Semigroup for All<A> {
    fn concat(self, other: Self) -> Self {
        Self(self.0.and(other.0))
    }
}

/// Any forms a semigroup under logical OR.
impl<A: Boolean> Semigroup for Any<A> {
    fn concat(self, other: Self) -> Self {
        Self(self.0.or(other.0))
    }
}

// =============================================================================
// Sequence Family
// =============================================================================

/// Flatten forms a semigroup under sequence concatenation.
///
/// Both operands already hold flat sequences; nested input is flattened when
/// it is wrapped (see [`Wrapped`](super::Wrapped) for `Flatten`).
impl<T> Semigroup for Flatten<T> {
    fn concat(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }
}


// =============================================================================
// Property-Based Tests
// =============================================================================
