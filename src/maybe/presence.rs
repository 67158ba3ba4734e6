//! The presence check shared by every `Maybe` factory.
//!
//! A Rust value of type `T` is always present. Absence only shows up in
//! carrier types such as `Option<T>` or a failed `Result<T, E>`, so the
//! presence check is a conversion from those carriers into [`Maybe`].

use super::value::Maybe;

/// Conversion into a [`Maybe`] that inspects presence.
///
/// Implementations must map every absent-equivalent input to `Maybe::None`
/// and every present input to `Maybe::Some`.
///
/// | Input          | Result           |
/// |----------------|------------------|
/// | `Some(v)`      | `Maybe::Some(v)` |
/// | `None`         | `Maybe::None`    |
/// | `Ok(v)`        | `Maybe::Some(v)` |
/// | `Err(_)`       | `Maybe::None`    |
/// | `Maybe<T>`     | unchanged        |
///
/// # Examples
///
/// ```rust
/// use maybers::maybe::{IntoMaybe, Maybe};
///
/// assert_eq!(Some(1).into_maybe(), Maybe::Some(1));
/// assert_eq!(None::<i32>.into_maybe(), Maybe::None);
/// assert_eq!("42".parse::<i32>().into_maybe(), Maybe::Some(42));
/// assert_eq!("x".parse::<i32>().into_maybe(), Maybe::None);
/// ```
pub trait IntoMaybe<T> {
    /// Converts `self` into a `Maybe`, yielding `None` for absent input.
    fn into_maybe(self) -> Maybe<T>;
}

impl<T> IntoMaybe<T> for Maybe<T> {
    #[inline]
    fn into_maybe(self) -> Self {
        self
    }
}

impl<T> IntoMaybe<T> for Option<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        match self {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T, E> IntoMaybe<T> for Result<T, E> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        match self {
            Ok(value) => Maybe::Some(value),
            Err(_) => Maybe::None,
        }
    }
}
