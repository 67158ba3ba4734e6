use std::fmt;

use crate::maybe::Maybe;

/// Fluent assertions over one borrowed `Maybe<T>`.
///
/// Every check is expressed through the public combinators of `Maybe`
/// (`is_some`, `filter`, `match_with`). The asserted value is never mutated.
///
/// Failing assertions panic with `#[track_caller]`, so the reported location
/// is the assertion call in the test.
#[derive(Clone, Copy)]
pub struct MaybeAssertion<'a, T> {
    actual: &'a Maybe<T>,
}

impl<T> Maybe<T> {
    /// Starts a chain of assertions on this value.
    pub const fn test(&self) -> MaybeAssertion<'_, T> {
        MaybeAssertion::new(self)
    }
}

impl<'a, T> MaybeAssertion<'a, T> {
    /// Wraps `actual` for assertions.
    pub const fn new(actual: &'a Maybe<T>) -> Self {
        Self { actual }
    }
}

impl<T: fmt::Debug> MaybeAssertion<'_, T> {
    /// Fails unless the value is `None`.
    ///
    /// # Panics
    ///
    /// Panics with `Maybe was not None` if the value is `Some`.
    #[track_caller]
    pub fn assert_is_none(&self) {
        if !self.actual.is_none() {
            self.fail(format_args!("Maybe was not None"));
        }
    }

    /// Fails unless the value is `Some`.
    ///
    /// # Panics
    ///
    /// Panics with `Maybe was not Some` if the value is `None`.
    #[track_caller]
    pub fn assert_is_some(&self) -> &Self {
        if !self.actual.is_some() {
            self.fail(format_args!("Maybe was not Some"));
        }
        self
    }

    /// Fails unless the value is `Some` and `predicate` holds for it.
    ///
    /// # Panics
    ///
    /// Panics if the value is `None` or the predicate rejects it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// Maybe::of("value").test().assert_value_matching(|value| value.starts_with('v'));
    /// ```
    #[track_caller]
    pub fn assert_value_matching<P>(&self, predicate: P) -> &Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.assert_is_some();
        if self.actual.as_ref().filter(|value| predicate(*value)).is_none() {
            self.fail(format_args!(
                "Actual Maybe value: <{:?}> did not match predicate",
                self.value()
            ));
        }
        self
    }
}

impl<T: fmt::Debug + PartialEq> MaybeAssertion<'_, T> {
    /// Fails unless the value is `Some` and equal to `expected`.
    ///
    /// `expected` is a plain `T`, so it is always present. To assert
    /// absence use [`assert_is_none`](Self::assert_is_none).
    ///
    /// # Panics
    ///
    /// Panics if the value is `None` or differs from `expected`.
    #[track_caller]
    pub fn assert_value(&self, expected: T) -> &Self {
        self.assert_is_some();
        if self
            .actual
            .as_ref()
            .filter(|value| **value == expected)
            .is_none()
        {
            self.fail(format_args!(
                "Actual Maybe value: <{:?}> did not equal expected value: <{expected:?}>",
                self.value()
            ));
        }
        self
    }
}

impl<T: fmt::Debug> MaybeAssertion<'_, T> {
    #[track_caller]
    fn value(&self) -> &T {
        match self.actual {
            Maybe::Some(value) => value,
            Maybe::None => self.fail(format_args!("Maybe was not Some")),
        }
    }

    #[track_caller]
    fn fail(&self, message: fmt::Arguments<'_>) -> ! {
        panic!("{message} (actual = {:?})", self.actual);
    }
}

impl<T: fmt::Debug> fmt::Debug for MaybeAssertion<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MaybeAssertion")
            .field("actual", self.actual)
            .finish()
    }
}
