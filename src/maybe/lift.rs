//! Lift combinators - all-or-nothing joins over several `Maybe` values.
//!
//! Lifting combines independent `Maybe` values with an N-ary function. The
//! result is `Some` only if every operand is `Some`; the combining function
//! is never invoked otherwise.
//!
//! The fixed arities are built on each other: `lift4` combines the receiver's
//! value with the `lift3` of the remaining operands, `lift3` with the `lift`
//! of the remaining two. The variadic [`Maybe::lift_all`] walks an ordered
//! sequence with an accumulator and stops at the first `None`.
//!
//! # Examples
//!
//! ```rust
//! use maybers::maybe::Maybe;
//!
//! let sum = Maybe::of(1).lift(Maybe::of(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::Some(3));
//!
//! let missing = Maybe::of(1).lift(Maybe::<i32>::none(), |a, b| a + b);
//! assert_eq!(missing, Maybe::None);
//!
//! let values = Maybe::of(1).lift_all([Maybe::of(2), Maybe::of(3)], |values| values);
//! assert_eq!(values, Maybe::Some(vec![1, 2, 3]));
//! ```

use super::value::Maybe;

impl<T> Maybe<T> {
    /// Combines this value with `other` using `function`.
    ///
    /// Returns `Some(function(a, b))` if both are `Some`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let label = Maybe::of("width").lift(Maybe::of(80), |name, value| format!("{name}={value}"));
    /// assert_eq!(label, Maybe::Some("width=80".to_string()));
    /// ```
    #[inline]
    pub fn lift<B, OUT, F>(self, other: Maybe<B>, function: F) -> Maybe<OUT>
    where
        F: FnOnce(T, B) -> OUT,
    {
        match self {
            Self::Some(first) => other.map(|second| function(first, second)),
            Self::None => Maybe::None,
        }
    }

    /// Combines this value with two others using `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let total = Maybe::of(1).lift3(Maybe::of(2), Maybe::of(3), |a, b, c| a + b + c);
    /// assert_eq!(total, Maybe::Some(6));
    ///
    /// let total = Maybe::of(1).lift3(Maybe::<i32>::none(), Maybe::of(3), |a, b, c| a + b + c);
    /// assert_eq!(total, Maybe::None);
    /// ```
    #[inline]
    pub fn lift3<B, C, OUT, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<OUT>
    where
        F: FnOnce(T, B, C) -> OUT,
    {
        match self {
            Self::Some(first) => second.lift(third, |second, third| function(first, second, third)),
            Self::None => Maybe::None,
        }
    }

    /// Combines this value with three others using `function`.
    #[inline]
    pub fn lift4<B, C, D, OUT, F>(
        self,
        second: Maybe<B>,
        third: Maybe<C>,
        fourth: Maybe<D>,
        function: F,
    ) -> Maybe<OUT>
    where
        F: FnOnce(T, B, C, D) -> OUT,
    {
        match self {
            Self::Some(first) => second.lift3(third, fourth, |second, third, fourth| {
                function(first, second, third, fourth)
            }),
            Self::None => Maybe::None,
        }
    }

    /// Combines this value with an ordered sequence of others.
    ///
    /// `function` receives the values in order, this value first:
    /// `[self] ++ rest`. The sequence is not consumed past the first `None`,
    /// and `function` is only invoked when every operand is `Some`.
    ///
    /// An empty `rest` is not an error: the receiver alone forms the operand
    /// sequence, so `function` receives a single-element vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let sum = Maybe::of(1).lift_all((2..=4).map(Maybe::of), |values| values.iter().sum::<i32>());
    /// assert_eq!(sum, Maybe::Some(10));
    ///
    /// let broken = Maybe::of(1).lift_all([Maybe::of(2), Maybe::none()], |values| values.len());
    /// assert_eq!(broken, Maybe::None);
    ///
    /// let alone = Maybe::of(7).lift_all(std::iter::empty(), |values| values);
    /// assert_eq!(alone, Maybe::Some(vec![7]));
    /// ```
    pub fn lift_all<I, OUT, F>(self, rest: I, function: F) -> Maybe<OUT>
    where
        I: IntoIterator<Item = Self>,
        F: FnOnce(Vec<T>) -> OUT,
    {
        let Self::Some(first) = self else {
            return Maybe::None;
        };

        let rest = rest.into_iter();
        let mut values = Vec::with_capacity(rest.size_hint().0.saturating_add(1));
        values.push(first);

        for operand in rest {
            match operand {
                Self::Some(value) => values.push(value),
                Self::None => return Maybe::None,
            }
        }

        Maybe::Some(function(values))
    }
}
