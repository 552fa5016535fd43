//! Control structures for computations that may fail.
//!
//! This module provides:
//!
//! - [`Either`]: A value that is either a failure (`Left`) or a success (`Right`)
//! - [`from_nullable`]: Lifts an `Option` into `Either`
//! - [`try_catch`]: Runs a computation behind a panic boundary
//! - [`try_catch_result`]: Same, for computations that return `Result`
//!
//! # Examples
//!
//! ## Absent values
//!
//! ```rust
//! use fpkit::control::from_nullable;
//! use fpkit::typeclass::Functor;
//!
//! let lookup = |key: &str| if key == "port" { Some(8080) } else { None };
//!
//! let port = from_nullable(lookup("port"))
//!     .map(|port| port + 1)
//!     .fold(|()| 0, |port| port);
//! assert_eq!(port, 8081);
//! ```
//!
//! ## Failing computations
//!
//! ```rust
//! use fpkit::control::try_catch;
//! use fpkit::typeclass::Functor;
//!
//! let divide = |a: i32, b: i32| try_catch(move || a / b);
//!
//! assert_eq!(divide(10, 2).map(|x| x * 3).right(), Some(15));
//! assert!(divide(1, 0).is_left());
//! ```

mod either;
mod error;
mod lift;

pub use either::Either;
pub use error::{CaughtError, PanicError};
pub use lift::{from_nullable, try_catch, try_catch_result};
