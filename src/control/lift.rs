//! Lifting absent values and failing computations into [`Either`].

use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use super::either::Either;
use super::error::{CaughtError, PanicError};
use crate::typeclass::Monad;

/// Lifts an optional value: `Some(x)` becomes `Right(x)`, `None` becomes
/// `Left(())`.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::from_nullable;
/// use fpkit::typeclass::Functor;
///
/// let missing = from_nullable(None::<i32>)
///     .map(|x| x + 1)
///     .fold(|()| "Whoops".to_string(), |x| x.to_string());
/// assert_eq!(missing, "Whoops");
///
/// let present = from_nullable(Some(5))
///     .map(|x| x + 1)
///     .fold(|()| "Whoops".to_string(), |x| x.to_string());
/// assert_eq!(present, "6");
/// ```
#[inline]
pub fn from_nullable<T>(value: Option<T>) -> Either<(), T> {
    value.map_or(Either::Left(()), Either::Right)
}

/// Runs `computation`, returning `Right(result)` on normal completion or
/// `Left(PanicError)` if it panics.
///
/// The panic is captured exactly once and any payload type is accepted.
///
/// The process-wide panic hook still runs before the panic is captured. With
/// the default hook this writes a `thread '...' panicked at ...` report to
/// stderr even though the panic becomes a `Left`. Install a quieter hook with
/// [`std::panic::set_hook`] if that output is unwanted.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::try_catch;
///
/// assert!(try_catch(|| 40 + 2).is_right());
///
/// let failed = try_catch(|| -> u32 { panic!("no config") });
/// assert_eq!(
///     failed.fold(|error| error.message().to_string(), |value| value.to_string()),
///     "no config"
/// );
///
/// // Silence the default stderr report while capturing.
/// let previous = std::panic::take_hook();
/// std::panic::set_hook(Box::new(|_| {}));
/// let quiet = try_catch(|| -> u8 { panic!("silent") });
/// std::panic::set_hook(previous);
/// assert!(quiet.is_left());
/// ```
pub fn try_catch<T, F>(computation: F) -> Either<PanicError, T>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(computation))
        .map_err(|payload| {
            let error = PanicError::from_payload(payload);
            debug!(panic_message = %error.message(), "captured panic as Left");
            error
        })
        .into()
}

/// Runs a `Result`-returning computation, mapping `Err(e)` to
/// `Left(CaughtError::Failed(e))` and a panic to `Left(CaughtError::Panicked(_))`.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::{try_catch_result, CaughtError};
///
/// let parsed = try_catch_result(|| "12".parse::<i32>());
/// assert_eq!(parsed.right(), Some(12));
///
/// let rejected = try_catch_result(|| "x".parse::<i32>());
/// assert!(matches!(rejected.left(), Some(CaughtError::Failed(_))));
/// ```
pub fn try_catch_result<T, E, F>(computation: F) -> Either<CaughtError<E>, T>
where
    F: FnOnce() -> Result<T, E>,
{
    try_catch(computation)
        .map_left(CaughtError::Panicked)
        .chain(|result| Either::from(result.map_err(CaughtError::Failed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Functor;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(5), Either::Right(5))]
    #[case(None, Either::Left(()))]
    fn from_nullable_lifts_option(#[case] input: Option<i32>, #[case] expected: Either<(), i32>) {
        assert_eq!(from_nullable(input), expected);
    }

    #[rstest]
    fn from_nullable_none_skips_map() {
        let calls = Cell::new(0);
        let result = from_nullable(None::<i32>)
            .map(|x| {
                calls.set(calls.get() + 1);
                x + 1
            })
            .fold(|()| "Whoops".to_string(), |x| x.to_string());
        assert_eq!(result, "Whoops");
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn try_catch_returns_right_on_success() {
        assert_eq!(try_catch(|| "ok").right(), Some("ok"));
    }

    #[rstest]
    fn try_catch_captures_panic_once() {
        let runs = Cell::new(0);
        let result = try_catch(|| -> i32 {
            runs.set(runs.get() + 1);
            panic!("fail {}", 7)
        });
        assert_eq!(runs.get(), 1);
        let error = result.left().unwrap();
        assert_eq!(error.message(), "fail 7");
        assert_eq!(error.payload_ref::<String>().map(String::as_str), Some("fail 7"));
    }

    #[rstest]
    fn try_catch_captures_non_string_payload() {
        let error = try_catch(|| -> u8 { panic::panic_any(vec![1, 2]) })
            .left()
            .unwrap();
        assert_eq!(error.message(), "<non-string panic payload>");
        assert_eq!(error.downcast::<Vec<i32>>().unwrap(), vec![1, 2]);
    }

    #[rstest]
    fn try_catch_result_distinguishes_failures() {
        let ok = try_catch_result(|| Ok::<_, String>(3));
        assert_eq!(ok.right(), Some(3));

        let failed = try_catch_result(|| Err::<i32, _>("bad".to_string()));
        assert_eq!(failed.left().and_then(CaughtError::failure), Some("bad".to_string()));

        let panicked = try_catch_result(|| -> Result<i32, String> { panic!("boom") });
        assert!(panicked.left().is_some_and(|error| error.is_panic()));
    }
}
