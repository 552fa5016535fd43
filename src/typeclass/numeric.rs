//! Payload capabilities for the numeric and boolean monoid families.
//!
//! - [`Numeric`]: zero, one, the four arithmetic operations needed by
//!   [`Sum`](super::Sum), [`Product`](super::Product) and
//!   [`Average`](super::Average)
//! - [`Bounded`]: extreme values used as identities by [`Max`](super::Max)
//!   and [`Min`](super::Min)
//! - [`Boolean`]: conjunction and disjunction for [`All`](super::All) and
//!   [`Any`](super::Any)

use std::ops::{Add, Div, Mul};

// =============================================================================
// Numeric Trait
// =============================================================================

/// A trait for number-like payloads.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::Numeric;
///
/// assert_eq!(i32::ZERO, 0);
/// assert_eq!(f64::ONE, 1.0);
/// assert_eq!(u8::div_count(200, 300), 0);
/// assert_eq!(f64::div_count(7.0, 2), 3.5);
/// ```
pub trait Numeric:
    Copy + PartialOrd + Add<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// Divides a running sum by a non-zero element count.
    ///
    /// Integers divide in a 128-bit type and truncate toward zero, so counts
    /// larger than `Self::MAX` still give the mean. The quotient always lies
    /// between zero and `sum`, so narrowing it back cannot overflow. Floats
    /// convert the count with `as`, losing precision only beyond 2^53.
    fn div_count(sum: Self, count: usize) -> Self;
}

macro_rules! impl_numeric_integer {
    ($wide:ty => $($numeric_type:ty),* $(,)?) => {
        $(
            impl Numeric for $numeric_type {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    clippy::cast_sign_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast,
                    trivial_numeric_casts
                )]
                fn div_count(sum: Self, count: usize) -> Self {
                    (sum as $wide / count as $wide) as Self
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($numeric_type:ty),* $(,)?) => {
        $(
            impl Numeric for $numeric_type {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                #[allow(clippy::cast_precision_loss)]
                fn div_count(sum: Self, count: usize) -> Self {
                    sum / count as Self
                }
            }
        )*
    };
}

impl_numeric_integer!(i128 => i8, i16, i32, i64, i128, isize);
impl_numeric_integer!(u128 => u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

// =============================================================================
// Bounded Trait
// =============================================================================

/// A trait for types that have minimum and maximum bounds.
///
/// - `Max<A>` uses `A::MIN_VALUE` as its identity
/// - `Min<A>` uses `A::MAX_VALUE` as its identity
///
/// Floating point types use the infinities, so `Max<f64>` starts from
/// negative infinity and `Min<f64>` from positive infinity.
///
/// # Implementing Bounded
///
/// ```rust
/// use fpkit::typeclass::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Score(u8);
///
/// impl Bounded for Score {
///     const MIN_VALUE: Self = Score(0);
///     const MAX_VALUE: Self = Score(100);
/// }
///
/// assert_eq!(Score::MIN_VALUE.0, 0);
/// assert_eq!(Score::MAX_VALUE.0, 100);
/// ```
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded_integer {
    ($($bounded_type:ty),* $(,)?) => {
        $(
            impl Bounded for $bounded_type {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

impl_bounded_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for f32 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for f64 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = Self::MAX;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

// =============================================================================
// Boolean Trait
// =============================================================================

/// A trait for truth-valued payloads.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::Boolean;
///
/// assert!(true.and(true));
/// assert!(false.or(true));
/// assert!(!bool::FALSE);
/// ```
pub trait Boolean: Copy {
    /// The identity of conjunction.
    const TRUE: Self;

    /// The identity of disjunction.
    const FALSE: Self;

    /// Logical AND.
    #[must_use]
    fn and(self, other: Self) -> Self;

    /// Logical OR.
    #[must_use]
    fn or(self, other: Self) -> Self;
}

impl Boolean for bool {
    const TRUE: Self = true;
    const FALSE: Self = false;

    #[inline]
    fn and(self, other: Self) -> Self {
        self && other
    }

    #[inline]
    fn or(self, other: Self) -> Self {
        self || other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn numeric_identities_for_integers() {
        assert_eq!(i64::ZERO, 0);
        assert_eq!(i64::ONE, 1);
        assert_eq!(u128::ZERO, 0);
        assert_eq!(u128::ONE, 1);
    }

    #[rstest]
    fn numeric_identities_for_floats() {
        assert!(f32::ZERO.abs() < f32::EPSILON);
        assert!((f64::ONE - 1.0).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(15, 5, 3)]
    #[case(127, 130, 0)]
    #[case(-128, 200, 0)]
    #[case(-100, 3, -33)]
    #[case(i8::MIN, 1, i8::MIN)]
    fn div_count_i8_handles_counts_beyond_range(
        #[case] sum: i8,
        #[case] count: usize,
        #[case] expected: i8,
    ) {
        assert_eq!(i8::div_count(sum, count), expected);
    }

    #[rstest]
    #[case(0, 256, 0)]
    #[case(255, 255, 1)]
    #[case(255, 70_000, 0)]
    fn div_count_u8_never_divides_by_wrapped_zero(
        #[case] sum: u8,
        #[case] count: usize,
        #[case] expected: u8,
    ) {
        assert_eq!(u8::div_count(sum, count), expected);
    }

    #[rstest]
    fn div_count_wide_integers() {
        assert_eq!(u128::div_count(u128::MAX, 1), u128::MAX);
        assert_eq!(i128::div_count(i128::MIN, usize::MAX), i128::MIN / usize::MAX as i128);
        assert_eq!(usize::div_count(usize::MAX, usize::MAX), 1);
    }

    #[rstest]
    fn div_count_floats() {
        assert!((f64::div_count(7.0, 2) - 3.5).abs() < f64::EPSILON);
        assert!((f32::div_count(1.0, 4) - 0.25).abs() < f32::EPSILON);
    }

    #[rstest]
    fn bounded_integer_values() {
        assert_eq!(i32::MIN_VALUE, i32::MIN);
        assert_eq!(i32::MAX_VALUE, i32::MAX);
        assert_eq!(u8::MIN_VALUE, 0);
        assert_eq!(u8::MAX_VALUE, 255);
    }

    #[rstest]
    fn bounded_float_values_are_infinite() {
        assert!(f64::MIN_VALUE.is_infinite() && f64::MIN_VALUE.is_sign_negative());
        assert!(f64::MAX_VALUE.is_infinite() && f64::MAX_VALUE.is_sign_positive());
        assert!(f32::MIN_VALUE.is_infinite() && f32::MIN_VALUE.is_sign_negative());
    }

    #[rstest]
    fn bounded_char_and_bool_values() {
        assert_eq!(char::MIN_VALUE, '\0');
        assert_eq!(char::MAX_VALUE, char::MAX);
        assert!(!bool::MIN_VALUE);
        assert!(bool::MAX_VALUE);
    }

    #[rstest]
    #[case(true, true)]
    #[case(true, false)]
    #[case(false, true)]
    #[case(false, false)]
    fn boolean_matches_native_operators(#[case] left: bool, #[case] right: bool) {
        assert_eq!(left.and(right), left && right);
        assert_eq!(left.or(right), left || right);
    }
}
