//! Wrapping raw values into a family and reading the exposed value back.
//!
//! A fold takes raw values (plain numbers, booleans, nested sequences),
//! lifts each into a monoid family, combines them, and hands back a plain
//! value. [`Wrapped`] describes the two ends of that pipeline for one family.
//!
//! For most families both ends are the payload itself. Two families differ:
//!
//! - [`Average`]: wraps a single number as a one-element average and exposes
//!   `sum / count`.
//! - [`Flatten`]: wraps a [`Nested`] value, flattening it, and exposes the
//!   flat `Vec`.

use super::nested::Nested;
use super::numeric::Numeric;
use super::wrappers::{All, Any, Average, Flatten, Max, Min, Product, Sum};

/// A family that can lift a raw value and expose its combined value.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::{Average, Semigroup, Wrapped};
///
/// let average = Average::wrap(4).concat(Average::wrap(8));
/// assert_eq!(average.into_value(), 6);
/// ```
pub trait Wrapped: Sized {
    /// The raw input type lifted by [`wrap`](Self::wrap).
    type Raw;

    /// The plain value produced by [`into_value`](Self::into_value).
    type Value;

    /// Lifts a raw value into this family.
    fn wrap(raw: Self::Raw) -> Self;

    /// Consumes the wrapper and returns the exposed value.
    fn into_value(self) -> Self::Value;
}

macro_rules! impl_wrapped_newtype {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<A> Wrapped for $wrapper<A> {
                type Raw = A;
                type Value = A;

                #[inline]
                fn wrap(raw: A) -> Self {
                    Self(raw)
                }

                #[inline]
                fn into_value(self) -> A {
                    self.0
                }
            }
        )*
    };
}

impl_wrapped_newtype!(Sum, Product, Max, Min, All, Any);

impl<A: Numeric> Wrapped for Average<A> {
    type Raw = A;
    type Value = A;

    #[inline]
    fn wrap(raw: A) -> Self {
        Self::new(raw)
    }

    #[inline]
    fn into_value(self) -> A {
        self.value()
    }
}

impl<T> Wrapped for Flatten<T> {
    type Raw = Nested<T>;
    type Value = Vec<T>;

    fn wrap(raw: Nested<T>) -> Self {
        Self::from_nested(raw)
    }

    #[inline]
    fn into_value(self) -> Vec<T> {
        self.0
    }
}
