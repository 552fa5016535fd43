//! Fold utilities parameterised by a monoid family.

use std::any::type_name;

use tracing::trace;

use crate::typeclass::{Flatten, Functor, Identity, Monoid, Nested, Wrapped};

/// Reduces `values` with the monoid family `M`.
///
/// Each raw value is wrapped, the wrappers are combined left to right
/// starting from `M::identity()`, and the exposed value of the result is
/// returned. An empty input yields the identity's value.
///
/// # Examples
///
/// ```rust
/// use fpkit::traversal::fold;
/// use fpkit::typeclass::{All, Any, Average, Product, Sum};
///
/// let values = vec![1, 2, 3, 4, 5];
/// assert_eq!(fold::<Sum<i32>, _>(values.clone()), 15);
/// assert_eq!(fold::<Average<i32>, _>(values), 3);
///
/// assert_eq!(fold::<Sum<i32>, _>(Vec::new()), 0);
/// assert_eq!(fold::<Product<i32>, _>(Vec::new()), 1);
/// assert!(fold::<All<bool>, _>(Vec::new()));
/// assert!(fold::<Any<bool>, _>([false, true]));
/// ```
pub fn fold<M, I>(values: I) -> M::Value
where
    M: Monoid + Wrapped,
    I: IntoIterator<Item = M::Raw>,
{
    let mut elements = 0_usize;
    let combined = M::concat_all(
        values
            .into_iter()
            .inspect(|_| elements += 1)
            .map(M::wrap),
    );
    trace!(family = type_name::<M>(), elements, "folded values");
    combined.into_value()
}

/// Flattens a nested sequence into a flat `Vec`, depth-first and in order.
///
/// # Examples
///
/// ```rust
/// use fpkit::nested;
/// use fpkit::traversal::flatten;
///
/// assert_eq!(flatten(nested![[0, [1]], [3, [[[8]]]]]), vec![0, 1, 3, 8]);
///
/// let empty: Vec<i32> = flatten(nested![[], [[]]]);
/// assert!(empty.is_empty());
/// ```
pub fn flatten<T, I>(nested: I) -> Vec<T>
where
    I: IntoIterator<Item = Nested<T>>,
{
    fold::<Flatten<T>, _>(nested)
}

/// Flattens a nested sequence, then reduces it with the monoid family `M`.
///
/// # Examples
///
/// ```rust
/// use fpkit::nested;
/// use fpkit::traversal::flat_fold;
/// use fpkit::typeclass::Sum;
///
/// assert_eq!(flat_fold::<Sum<i32>, _>(nested![[0, [1]], [3, [[[8]]]]]), 12);
/// ```
pub fn flat_fold<M, I>(nested: I) -> M::Value
where
    M: Monoid + Wrapped,
    I: IntoIterator<Item = Nested<M::Raw>>,
{
    fold::<M, _>(flatten(nested))
}

/// Flattens a nested sequence and maps `function` over the flat `Vec` as a
/// whole, returning the result in an [`Identity`].
///
/// `function` receives the entire flat sequence once, not each element.
///
/// # Examples
///
/// ```rust
/// use fpkit::nested;
/// use fpkit::traversal::flat_map;
///
/// let total = flat_map(|values: Vec<i32>| values.iter().sum::<i32>(), nested![[1, [2]], 3]);
/// assert_eq!(total.into_inner(), 6);
/// ```
pub fn flat_map<T, B, F, I>(function: F, nested: I) -> Identity<B>
where
    F: FnOnce(Vec<T>) -> B,
    I: IntoIterator<Item = Nested<T>>,
{
    Identity::new(flatten(nested)).map(function)
}
