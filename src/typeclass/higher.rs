//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Identity<_>` on its
//! own. [`TypeConstructor`] records the payload type of a wrapper together
//! with "the same wrapper applied to another type", which is all that
//! [`Functor`](super::Functor) and [`Monad`](super::Monad) need.
//!
//! # Example
//!
//! ```rust
//! use fpkit::typeclass::{Identity, TypeConstructor};
//!
//! fn rewrap<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let rewrapped: Identity<String> = rewrap(Identity::new(42));
//! assert_eq!(rewrapped.into_inner(), "");
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// is `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Identity<i32>` this is `i32`; for `Either<String, i32>` it is the
    /// right-hand `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` keeps the result chainable.
    type WithType<B>: TypeConstructor<Inner = B>;
}
