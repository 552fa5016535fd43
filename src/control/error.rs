//! Error types produced when a computation is lifted into [`Either`](super::Either).

use std::any::Any;

use thiserror::Error;

/// A panic captured by [`try_catch`](super::try_catch).
///
/// Keeps the original panic payload so callers can recover typed panic
/// values, and a readable message extracted from `&str` or `String` payloads.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::try_catch;
///
/// let error = try_catch(|| -> i32 { panic!("bad input") })
///     .left()
///     .unwrap();
/// assert_eq!(error.message(), "bad input");
/// assert_eq!(error.to_string(), "computation panicked: bad input");
/// ```
#[derive(Debug, Error)]
#[error("computation panicked: {message}")]
pub struct PanicError {
    message: String,
    payload: Box<dyn Any + Send>,
}

impl PanicError {
    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| String::from("<non-string panic payload>"));
        Self { message, payload }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a reference to the payload if it has type `E`.
    pub fn payload_ref<E: Any>(&self) -> Option<&E> {
        self.payload.downcast_ref::<E>()
    }

    /// Recovers the payload as `E`, or returns the error unchanged if the
    /// payload has another type.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when the payload is not an `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::try_catch;
    ///
    /// let error = try_catch(|| -> u8 { std::panic::panic_any(7_u32) })
    ///     .left()
    ///     .unwrap();
    /// let error = error.downcast::<String>().unwrap_err();
    /// assert_eq!(error.downcast::<u32>().ok(), Some(7));
    /// ```
    pub fn downcast<E: Any>(self) -> Result<E, Self> {
        let Self { message, payload } = self;
        payload
            .downcast::<E>()
            .map(|boxed| *boxed)
            .map_err(|payload| Self { message, payload })
    }
}

/// Failure of a `Result`-returning computation run through
/// [`try_catch_result`](super::try_catch_result).
#[derive(Debug, Error)]
pub enum CaughtError<E> {
    /// The computation returned `Err`.
    #[error("computation failed: {0}")]
    Failed(E),

    /// The computation panicked.
    #[error(transparent)]
    Panicked(#[from] PanicError),
}

impl<E> CaughtError<E> {
    /// Returns `true` if the computation panicked.
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }

    /// Returns the explicit failure, if any.
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Failed(error) => Some(error),
            Self::Panicked(_) => None,
        }
    }
}

static_assertions::assert_impl_all!(PanicError: Send, std::error::Error);
static_assertions::assert_not_impl_any!(PanicError: Clone, Sync);
static_assertions::assert_impl_all!(CaughtError<std::io::Error>: Send, std::error::Error);
