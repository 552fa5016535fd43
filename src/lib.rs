//! # fpkit
//!
//! A small algebra library for Rust providing monoids for uniform reduction,
//! and `Identity`/`Either` wrappers for uniform chaining of computations that
//! may fail or be absent.
//!
//! ## Overview
//!
//! - **Type Classes**: `Semigroup`, `Monoid`, `Functor`, `Monad`
//! - **Monoid Families**: `Sum`, `Product`, `Max`, `Min`, `Average`, `All`,
//!   `Any`, `Flatten`
//! - **Control Structures**: `Either`, plus the `from_nullable` and
//!   `try_catch` adapters
//! - **Traversal**: `fold`, `flat_fold`, `flatten`, `flat_map`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and monoid families
//! - `control`: `Either` and the adapters into it
//! - `traversal`: Monoidal folding utilities
//! - `serde`: `Serialize`/`Deserialize` for every value type
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpkit::prelude::*;
//!
//! assert_eq!(fold::<Sum<i32>, _>(vec![1, 2, 3, 4, 5]), 15);
//! assert_eq!(fold::<Average<i32>, _>(vec![1, 2, 3, 4, 5]), 3);
//! assert_eq!(flatten(fpkit::nested![[0, [1]], [3, [[[8]]]]]), vec![0, 1, 3, 8]);
//!
//! let result = from_nullable(Some(5))
//!     .map(|x| x + 1)
//!     .fold(|()| "Whoops".to_string(), |x| x.to_string());
//! assert_eq!(result, "6");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use fpkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "traversal")]
    pub use crate::traversal::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "traversal")]
pub mod traversal;
