//! Type class traits and the monoid families built on them.
//!
//! This module provides the capability contracts of the library:
//!
//! - [`Semigroup`]: Associative binary operation (`concat`)
//! - [`Monoid`]: Semigroup with an identity element (`identity`)
//! - [`Wrapped`]: Wrapping a raw value into a family and reading it back
//! - [`Functor`]: Mapping over a wrapped value
//! - [`Monad`]: Sequencing wrapped computations
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! so `Functor` and `Monad` can name "the same wrapper around another type".
//!
//! ## Monoid Families
//!
//! | Family | Combine | Identity |
//! |---|---|---|
//! | [`Sum`] | addition | `0` |
//! | [`Product`] | multiplication | `1` |
//! | [`Max`] | maximum | type minimum (`-inf` for floats) |
//! | [`Min`] | minimum | type maximum (`+inf` for floats) |
//! | [`Average`] | running sum and count | sum `0`, count `0` |
//! | [`All`] | logical AND | `true` |
//! | [`Any`] | logical OR | `false` |
//! | [`Flatten`] | sequence concatenation | empty sequence |
//!
//! Payloads are constrained by [`Numeric`], [`Bounded`] and [`Boolean`].
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::{Monoid, Semigroup, Sum};
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::concat_all(numbers), Sum::new(6));
//! assert_eq!(Sum::<i32>::identity().concat(Sum::new(7)), Sum::new(7));
//! ```
//!
//! ```rust
//! use fpkit::typeclass::{Functor, Identity, Monad};
//!
//! let result = Identity::new(3)
//!     .map(|x| x + 4)
//!     .chain(|x| Identity::new(x * 5))
//!     .fold(|x| f64::from(x) / 10.0);
//! assert!((result - 3.5).abs() < f64::EPSILON);
//! ```

mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod nested;
mod numeric;
mod semigroup;
mod wrapped;
mod wrappers;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use nested::Nested;
pub use numeric::{Boolean, Bounded, Numeric};
pub use semigroup::Semigroup;
pub use wrapped::Wrapped;
pub use wrappers::{All, Any, Average, Flatten, Max, Min, Product, Sum};
