//! Error type for absence surfaced through `Result`.

/// Returned when a `Maybe` is converted into a `Result` and holds no value.
///
/// Absence is an ordinary value in this crate, so `NoneError` only appears
/// when a caller explicitly asks for a `Result`, for example to use `?`
/// inside a function returning `Result<_, NoneError>`.
///
/// # Examples
///
/// ```rust
/// use maybers::maybe::{Maybe, NoneError};
///
/// fn double(input: Maybe<i32>) -> Result<i32, NoneError> {
///     Ok(input.ok_or_none_error()? * 2)
/// }
///
/// assert_eq!(double(Maybe::of(21)), Ok(42));
/// assert_eq!(double(Maybe::none()), Err(NoneError));
/// assert_eq!(NoneError.to_string(), "expected a Some value but found None");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("expected a Some value but found None")]
pub struct NoneError;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn none_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_error: &E) {}
        assert_error(&NoneError);
    }

    #[rstest]
    fn none_error_display() {
        assert_eq!(format!("{NoneError}"), "expected a Some value but found None");
    }
}
