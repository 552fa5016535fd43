//! Arbitrarily nested sequences.
//!
//! [`Nested`] is the raw input of the [`Flatten`](super::Flatten) family: a
//! tree whose leaves hold values and whose inner nodes hold ordered lists of
//! further nested values, in any mix and to any depth.
//!
//! The [`nested!`](crate::nested) macro builds a sequence of nested values
//! from bracket literals.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::nested;
//! use fpkit::typeclass::Nested;
//!
//! let values = nested![[0, [1]], 3];
//! assert_eq!(
//!     values,
//!     vec![
//!         Nested::List(vec![Nested::Leaf(0), Nested::List(vec![Nested::Leaf(1)])]),
//!         Nested::Leaf(3),
//!     ]
//! );
//! ```

use std::fmt;

/// A value or an ordered list of nested values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A single value.
    Leaf(T),
    /// An ordered list of nested values.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns `true` if this is a single value.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns `true` if this is a list.
    #[inline]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the nesting depth: 0 for a leaf, one more than the deepest
    /// element for a list (an empty list has depth 1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Nested;
    ///
    /// assert_eq!(Nested::Leaf(1).depth(), 0);
    /// assert_eq!(Nested::List(vec![Nested::List(vec![Nested::Leaf(1)])]).depth(), 2);
    /// ```
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::List(items) => 1 + items.iter().map(Self::depth).max().unwrap_or(0),
        }
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl<T: fmt::Display> fmt::Display for Nested<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(value) => write!(formatter, "{value}"),
            Self::List(items) => {
                write!(formatter, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                write!(formatter, "]")
            }
        }
    }
}

/// Builds a `Vec<Nested<T>>` from bracket literals.
///
/// Brackets become [`Nested::List`], everything else becomes
/// [`Nested::Leaf`]. Leaves must be single tokens, so wrap compound
/// expressions such as negative numbers in parentheses.
///
/// # Examples
///
/// ```rust
/// use fpkit::nested;
/// use fpkit::typeclass::Nested;
///
/// let values: Vec<Nested<i32>> = nested![[(-1), [2]], 3];
/// assert_eq!(values.len(), 2);
/// assert_eq!(values[0].depth(), 2);
/// ```
#[macro_export]
macro_rules! nested {
    (@item [$($inner:tt),* $(,)?]) => {
        $crate::typeclass::Nested::List(::std::vec![$($crate::nested!(@item $inner)),*])
    };
    (@item $leaf:expr) => {
        $crate::typeclass::Nested::Leaf($leaf)
    };
    ($($item:tt),* $(,)?) => {
        ::std::vec![$($crate::nested!(@item $item)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn leaf_and_list_predicates() {
        let leaf = Nested::Leaf(1);
        let list: Nested<i32> = Nested::List(vec![]);
        assert!(leaf.is_leaf() && !leaf.is_list());
        assert!(list.is_list() && !list.is_leaf());
    }

    #[rstest]
    fn depth_counts_deepest_branch() {
        let values = crate::nested![[0, [1]], [3, [[[8]]]]];
        let nested = Nested::List(values);
        assert_eq!(nested.depth(), 5);
    }

    #[rstest]
    fn empty_list_has_depth_one() {
        assert_eq!(Nested::<u8>::List(vec![]).depth(), 1);
    }

    #[rstest]
    fn macro_builds_leaves_and_lists() {
        let values = crate::nested![1, [2, [3]]];
        assert_eq!(
            values,
            vec![
                Nested::Leaf(1),
                Nested::List(vec![Nested::Leaf(2), Nested::List(vec![Nested::Leaf(3)])]),
            ]
        );
    }

    #[rstest]
    fn macro_accepts_trailing_comma_and_parenthesised_leaves() {
        let values = crate::nested![[(-1), (2 * 3),], 4,];
        assert_eq!(
            values,
            vec![
                Nested::List(vec![Nested::Leaf(-1), Nested::Leaf(6)]),
                Nested::Leaf(4),
            ]
        );
    }

    #[rstest]
    fn from_vec_builds_list() {
        let nested: Nested<i32> = vec![Nested::Leaf(1)].into();
        assert_eq!(nested, Nested::List(vec![Nested::Leaf(1)]));
    }

    #[rstest]
    fn display_renders_brackets() {
        let nested = Nested::List(crate::nested![0, [1, [2]]]);
        assert_eq!(format!("{nested}"), "[0, [1, [2]]]");
    }
}
