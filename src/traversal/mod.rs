//! Monoidal folding over sequences and nested sequences.
//!
//! Every utility here is driven by a monoid family chosen at the call site:
//! the raw values are lifted with [`Wrapped::wrap`](crate::typeclass::Wrapped::wrap),
//! combined left to right starting from the family's identity, and read back
//! with [`Wrapped::into_value`](crate::typeclass::Wrapped::into_value).
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`fold`] | flat sequence of raw values | the family's value |
//! | [`flatten`] | nested sequence | flat `Vec` in depth-first order |
//! | [`flat_fold`] | nested sequence | the family's value over all leaves |
//! | [`flat_map`] | nested sequence | `Identity` of a function of the flat `Vec` |
//!
//! # Examples
//!
//! ```rust
//! use fpkit::nested;
//! use fpkit::traversal::{flat_fold, fold};
//! use fpkit::typeclass::{All, Max, Product};
//!
//! assert_eq!(fold::<Product<i32>, _>(vec![1, 2, 3, 4, 5]), 120);
//! assert_eq!(fold::<Max<i32>, _>(vec![1, 2, 3, 4, 5]), 5);
//! assert!(!fold::<All<bool>, _>(vec![true, true, false]));
//! assert_eq!(flat_fold::<Max<i32>, _>(nested![[0, [1]], [3, [[[8]]]]]), 8);
//! ```

mod fold;

pub use fold::{flat_fold, flat_map, flatten, fold};
