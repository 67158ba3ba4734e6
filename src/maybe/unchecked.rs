//! Unchecked access to the value inside a `Maybe`.
//!
//! These functions are for code paths that have already proven presence by
//! other means. Everywhere else, prefer [`Maybe::match_with`] or
//! [`Maybe::or_default`].
//!
//! # Examples
//!
//! ```rust
//! use maybers::maybe::{Maybe, unchecked};
//!
//! let present = Maybe::of(7);
//! assert!(present.is_some());
//! assert_eq!(unchecked::unwrap(present), 7);
//!
//! let missing: Maybe<i32> = Maybe::none();
//! assert_eq!(unchecked::unwrap_or_throw(missing, "no value"), Err("no value"));
//! ```

use super::value::Maybe;

/// Returns the value of a `Some`, consuming the `Maybe`.
///
/// # Panics
///
/// Panics if `option` is `None`. This signals a programming error and is not
/// meant to be caught.
///
/// # Examples
///
/// ```rust
/// use maybers::maybe::{Maybe, unchecked};
///
/// assert_eq!(unchecked::unwrap(Maybe::of("present")), "present");
/// ```
///
/// ```rust,should_panic
/// use maybers::maybe::{Maybe, unchecked};
///
/// unchecked::unwrap(Maybe::<i32>::none());
/// ```
#[inline]
#[track_caller]
pub fn unwrap<T>(option: Maybe<T>) -> T {
    option.get_unsafe()
}

/// Returns the value of a `Some`, or the caller-supplied error.
///
/// Unlike [`unwrap`], absence does not panic: `error` is handed back as
/// `Err` so the caller decides how to surface it.
///
/// # Errors
///
/// Returns `Err(error)` if `option` is `None`.
///
/// # Examples
///
/// ```rust
/// use maybers::maybe::{Maybe, unchecked};
///
/// #[derive(Debug, PartialEq)]
/// struct MissingConfig;
///
/// assert_eq!(unchecked::unwrap_or_throw(Maybe::of(1), MissingConfig), Ok(1));
/// assert_eq!(
///     unchecked::unwrap_or_throw(Maybe::<i32>::none(), MissingConfig),
///     Err(MissingConfig)
/// );
/// ```
#[inline]
pub fn unwrap_or_throw<T, E>(option: Maybe<T>, error: E) -> Result<T, E> {
    match option {
        Maybe::Some(value) => Ok(value),
        Maybe::None => Err(error),
    }
}
