//! Newtype wrappers selecting one combine rule per family.
//!
//! The same payload type can be combined in different ways: integers can be
//! added ([`Sum`]) or multiplied ([`Product`]), booleans can be required to
//! hold everywhere ([`All`]) or somewhere ([`Any`]). Each wrapper here picks
//! one of those rules; the [`Semigroup`](super::Semigroup) and
//! [`Monoid`](super::Monoid) implementations live next to the traits.
//!
//! # Available Wrappers
//!
//! - [`Sum`]: addition (identity: 0)
//! - [`Product`]: multiplication (identity: 1)
//! - [`Max`]: maximum (identity: type minimum)
//! - [`Min`]: minimum (identity: type maximum)
//! - [`Average`]: running sum and count (identity: empty average, value 0)
//! - [`All`]: logical AND (identity: true)
//! - [`Any`]: logical OR (identity: false)
//! - [`Flatten`]: sequence concatenation (identity: empty sequence)
//!
//! Every wrapper displays as `Family(value)`, e.g. `Sum(15)`.

use std::fmt;

use super::numeric::Numeric;

/// Generates the newtype accessors shared by the single-payload wrappers.
macro_rules! newtype_accessors {
    ($wrapper:ident) => {
        impl<A> $wrapper<A> {
            #[doc = concat!("Creates a new `", stringify!($wrapper), "` wrapping the given value.")]
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            #[doc = concat!("Consumes the `", stringify!($wrapper), "` and returns the inner value.")]
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $wrapper<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }

        impl<A: fmt::Display> fmt::Display for $wrapper<A> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, concat!(stringify!($wrapper), "({})"), self.0)
            }
        }
    };
}

// =============================================================================
// Sum Wrapper
// =============================================================================

/// The additive monoid.
///
/// `Sum(a).concat(Sum(b))` equals `Sum(a + b)`; the identity is `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).concat(Sum::new(5)), Sum::new(8));
/// assert_eq!(Sum::<i32>::identity(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<A>(pub A);

newtype_accessors!(Sum);

// =============================================================================
// Product Wrapper
// =============================================================================

/// The multiplicative monoid.
///
/// `Product(a).concat(Product(b))` equals `Product(a * b)`; the identity is
/// `Product(1)`.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product::new(3).concat(Product::new(5)), Product::new(15));
/// assert_eq!(Product::<i32>::identity(), Product::new(1));
/// ```
// Default is not derived: it would be 0, while the identity is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<A>(pub A);

newtype_accessors!(Product);

// =============================================================================
// Max / Min Wrappers
// =============================================================================

/// The maximum monoid.
///
/// `Max(a).concat(Max(b))` keeps the larger value; the identity is
/// `Max(A::MIN_VALUE)`, negative infinity for floats.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::{Max, Monoid, Semigroup};
///
/// assert_eq!(Max::new(3).concat(Max::new(5)), Max::new(5));
/// assert_eq!(Max::<f64>::identity(), Max::new(f64::NEG_INFINITY));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Max<A>(pub A);

newtype_accessors!(Max);

/// The minimum monoid.
///
/// `Min(a).concat(Min(b))` keeps the smaller value; the identity is
/// `Min(A::MAX_VALUE)`, positive infinity for floats.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::{Min, Monoid, Semigroup};
///
/// assert_eq!(Min::new(3).concat(Min::new(5)), Min::new(3));
/// assert_eq!(Min::<i32>::identity(), Min::new(i32::MAX));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Min<A>(pub A);

newtype_accessors!(Min);

// =============================================================================
// Average Wrapper
// =============================================================================

/// The average monoid.
///
/// An `Average` keeps a running sum and element count rather than a mean, so
/// combining is exact regardless of grouping. The exposed [`value`](Self::value)
/// is `sum / count`, and `0` when nothing has been combined yet.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::{Average, Monoid, Semigroup};
///
/// let average = Average::new(2.0).concat(Average::new(4.0)).concat(Average::new(9.0));
/// assert_eq!(average.value(), 5.0);
/// assert_eq!(Average::<f64>::identity().value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Average<A> {
    pub(crate) sum: A,
    pub(crate) count: usize,
}

impl<A> Average<A> {
    /// Creates an `Average` of a single element.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self::from_parts(value, 1)
    }

    /// Creates an `Average` from a running sum and an element count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Average;
    ///
    /// assert_eq!(Average::from_parts(15, 5).value(), 3);
    /// assert_eq!(Average::from_parts(0, 0).value(), 0);
    /// ```
    #[inline]
    pub const fn from_parts(sum: A, count: usize) -> Self {
        Self { sum, count }
    }

    /// Returns the running sum.
    #[inline]
    pub const fn sum(&self) -> &A {
        &self.sum
    }

    /// Returns the number of combined elements.
    #[inline]
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl<A: Numeric> Average<A> {
    /// Returns `sum / count`, or zero when the count is zero.
    #[inline]
    pub fn value(&self) -> A {
        if self.count == 0 {
            A::ZERO
        } else {
            A::div_count(self.sum, self.count)
        }
    }
}

impl<A: fmt::Display> fmt::Display for Average<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Average(sum={}, count={})", self.sum, self.count)
    }
}

// =============================================================================
// All / Any Wrappers
// =============================================================================

/// The conjunction monoid.
///
/// `All(a).concat(All(b))` equals `All(a && b)`; the identity is `All(true)`.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::{All, Monoid, Semigroup};
///
/// assert_eq!(All::new(true).concat(All::new(false)), All::new(false));
/// assert_eq!(All::<bool>::identity(), All::new(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct All<A>(pub A);

newtype_accessors!(All);

/// The disjunction monoid ("some element holds").
///
/// `Any(a).concat(Any(b))` equals `Any(a || b)`; the identity is `Any(false)`.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::{Any, Monoid, Semigroup};
///
/// assert_eq!(Any::new(false).concat(Any::new(true)), Any::new(true));
/// assert_eq!(Any::<bool>::identity(), Any::new(false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Any<A>(pub A);

newtype_accessors!(Any);

// =============================================================================
// Flatten Wrapper
// =============================================================================

/// The sequence-concatenation monoid.
///
/// A `Flatten` always holds a flat sequence. Wrapping a
/// [`Nested`](super::Nested) value through [`Wrapped`](super::Wrapped)
/// flattens it recursively, so folding nested input with `Flatten` collapses
/// any depth of nesting while preserving order.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::{Flatten, Monoid, Semigroup};
///
/// let joined = Flatten::new(vec![0, 1]).concat(Flatten::new(vec![3, 8]));
/// assert_eq!(joined.into_inner(), vec![0, 1, 3, 8]);
/// assert!(Flatten::<i32>::identity().as_inner().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flatten<T>(pub Vec<T>);

impl<T> Flatten<T> {
    /// Creates a new `Flatten` holding the given flat sequence.
    #[inline]
    pub const fn new(values: Vec<T>) -> Self {
        Self(values)
    }

    /// Consumes the `Flatten` and returns the flat sequence.
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }

    /// Returns the flat sequence as a slice.
    #[inline]
    pub fn as_inner(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Flatten<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T: fmt::Debug> fmt::Display for Flatten<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Flatten({:?})", self.0)
    }
}

static_assertions::assert_impl_all!(Sum<i64>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Average<f64>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Flatten<String>: Clone, Send, Sync);
static_assertions::assert_not_impl_any!(Product<i32>: Default);
