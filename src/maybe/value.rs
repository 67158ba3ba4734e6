//! Maybe type - a value that may be absent.
//!
//! `Maybe<T>` is either `Some(T)` or `None`. Every combinator is total:
//! both variants handle every operation, functions supplied for the `Some`
//! branch are never invoked on `None`, and no combinator mutates the value
//! it is called on.
//!
//! # Examples
//!
//! ```rust
//! use maybers::maybe::Maybe;
//!
//! let name = Maybe::of("ferris");
//! let greeting = name.match_with(|name| format!("hello, {name}"), || "hello".to_string());
//! assert_eq!(greeting, "hello, ferris");
//!
//! let nobody: Maybe<&str> = Maybe::none();
//! assert_eq!(nobody.or_default(|| "anonymous"), "anonymous");
//! ```

use std::any::Any;
use std::fmt;

use super::error::NoneError;
use super::presence::IntoMaybe;

/// A value that is either present (`Some`) or absent (`None`).
///
/// `None` carries no payload, so a single `Maybe::None` serves every `T`
/// and all `None` values compare equal.
///
/// Variants are declared with `None` first so that ordering agrees with
/// `std::option::Option`: `None < Some(_)`.
///
/// # Type Parameters
///
/// * `T` - The type of the wrapped value
///
/// # Examples
///
/// ```rust
/// use maybers::maybe::Maybe;
///
/// let present = Maybe::of(3);
/// let absent: Maybe<i32> = Maybe::of_nullable(None);
///
/// assert!(present.is_some());
/// assert!(absent.is_none());
/// assert!(absent < present);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Maybe<T> {
    /// No value.
    None,
    /// A present value.
    Some(T),
}

impl<T> Maybe<T> {
    /// The shared absent value.
    pub const NONE: Self = Self::None;

    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value that is present by construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(5), Maybe::Some(5));
    /// ```
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Some(value)
    }

    /// Builds a `Maybe` from a carrier that may represent absence.
    ///
    /// This is the presence-checking factory: `Some`/`Ok` become
    /// `Maybe::Some`, `None`/`Err` become `Maybe::None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of_nullable(Some("x")), Maybe::Some("x"));
    /// assert_eq!(Maybe::<&str>::of_nullable(None), Maybe::None);
    /// ```
    #[inline]
    pub fn of_nullable<N: IntoMaybe<T>>(value: N) -> Self {
        value.into_maybe()
    }

    /// Returns the absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Evaluates `supplier` and wraps its outcome through the presence check.
    ///
    /// A supplier that fails by returning `Err` (or an absent `Option`)
    /// yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::try_as_maybe(|| "12".parse::<u8>()), Maybe::Some(12));
    /// assert_eq!(Maybe::try_as_maybe(|| "1200".parse::<u8>()), Maybe::None);
    /// ```
    #[inline]
    pub fn try_as_maybe<N, F>(supplier: F) -> Self
    where
        N: IntoMaybe<T>,
        F: FnOnce() -> N,
    {
        supplier().into_maybe()
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `action` on the value if present and returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let value = Maybe::of(1).if_some(|value| seen.push(*value));
    /// assert_eq!(value, Maybe::Some(1));
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn if_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` if absent and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn if_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            action();
        }
        self
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the value if present.
    ///
    /// `function` is never invoked on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of("x").map(|s| format!("{s}y")), Maybe::Some("xy".to_string()));
    /// assert_eq!(Maybe::<&str>::none().map(|s| format!("{s}y")), Maybe::None);
    /// ```
    #[inline]
    pub fn map<OUT, F>(self, function: F) -> Maybe<OUT>
    where
        F: FnOnce(T) -> OUT,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Applies `function` to the value if present and re-applies the
    /// presence check to its result.
    ///
    /// A transform yielding an absent-equivalent result (`None`, `Err`)
    /// demotes the whole value to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let lookup = |key: &str| if key == "a" { Some(1) } else { None };
    /// assert_eq!(Maybe::of("a").map_nullable(lookup), Maybe::Some(1));
    /// assert_eq!(Maybe::of("b").map_nullable(lookup), Maybe::None);
    /// ```
    #[inline]
    pub fn map_nullable<OUT, N, F>(self, function: F) -> Maybe<OUT>
    where
        N: IntoMaybe<OUT>,
        F: FnOnce(T) -> N,
    {
        match self {
            Self::Some(value) => function(value).into_maybe(),
            Self::None => Maybe::None,
        }
    }

    /// Binds the value to another `Maybe`, without double wrapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::of(n / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::of(8).flat_map(half), Maybe::Some(4));
    /// assert_eq!(Maybe::of(3).flat_map(half), Maybe::None);
    /// ```
    #[inline]
    pub fn flat_map<OUT, F>(self, function: F) -> Maybe<OUT>
    where
        F: FnOnce(T) -> Maybe<OUT>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(4).filter(|n| n % 2 == 0), Maybe::Some(4));
    /// assert_eq!(Maybe::of(3).filter(|n| n % 2 == 0), Maybe::None);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn id(self) -> Self {
        self
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// Returns `self` if present, otherwise the `Maybe` produced by `fallback`.
    ///
    /// `fallback` is only evaluated when `self` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(1).or_maybe(|| Maybe::of(2)), Maybe::Some(1));
    /// assert_eq!(Maybe::none().or_maybe(|| Maybe::of(2)), Maybe::Some(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_maybe<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            present @ Self::Some(_) => present,
            Self::None => fallback(),
        }
    }

    /// Returns the value if present, otherwise the value produced by `default`.
    ///
    /// `default` is only evaluated when `self` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(1).or_default(|| 0), 1);
    /// assert_eq!(Maybe::none().or_default(|| 0), 0);
    /// ```
    #[inline]
    pub fn or_default<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Eliminates the `Maybe` by evaluating exactly one of two branches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.match_with(|n| format!("got {n}"), || "nothing".to_string());
    /// assert_eq!(describe(Maybe::of(2)), "got 2");
    /// assert_eq!(describe(Maybe::none()), "nothing");
    /// ```
    #[inline]
    pub fn match_with<OUT, S, N>(self, on_some: S, on_none: N) -> OUT
    where
        S: FnOnce(T) -> OUT,
        N: FnOnce() -> OUT,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Runs exactly one of two side-effecting branches.
    #[inline]
    pub fn match_action<S, N>(self, on_some: S, on_none: N)
    where
        S: FnOnce(T),
        N: FnOnce(),
    {
        self.match_with(on_some, on_none);
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Converts into a standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Converts into a `Result`, mapping absence to [`NoneError`].
    ///
    /// # Errors
    ///
    /// Returns `Err(NoneError)` if `self` is `None`.
    #[inline]
    pub fn ok_or_none_error(self) -> Result<T, NoneError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(NoneError),
        }
    }

    #[inline]
    #[track_caller]
    pub(crate) fn get_unsafe(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("called `unchecked::unwrap()` on a `None` value"),
        }
    }

    // =========================================================================
    // Logging
    // =========================================================================

    /// Sends a rendering of `self` to `sink` and returns `self` unchanged.
    ///
    /// The message is `"<tag>: <rendering>"`, or the bare rendering when
    /// `tag` is empty. A present value renders as the value itself and
    /// `None` as `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let mut lines = Vec::new();
    /// let value = Maybe::of(3).log("count", |line| lines.push(line));
    /// let _ = Maybe::<i32>::none().log("", |line| lines.push(line));
    ///
    /// assert_eq!(value, Maybe::Some(3));
    /// assert_eq!(lines, vec!["count: 3".to_string(), "None".to_string()]);
    /// ```
    #[must_use]
    pub fn log<S>(self, tag: &str, sink: S) -> Self
    where
        T: fmt::Display,
        S: FnOnce(String),
    {
        if tag.is_empty() {
            sink(self.to_string());
        } else {
            sink(format!("{tag}: {self}"));
        }
        self
    }

    /// Same as [`log`](Self::log) with an empty tag.
    #[must_use]
    pub fn log_untagged<S>(self, sink: S) -> Self
    where
        T: fmt::Display,
        S: FnOnce(String),
    {
        self.log("", sink)
    }

    /// Emits a `tracing` debug event describing `self` and returns it unchanged.
    ///
    /// The event uses the `maybers` target and records `tag`, `present` and
    /// the `Debug` rendering of the value.
    #[cfg(feature = "tracing")]
    #[must_use]
    pub fn trace(self, tag: &str) -> Self
    where
        T: fmt::Debug,
    {
        tracing::debug!(
            target: "maybers",
            tag,
            present = self.is_some(),
            value = ?self,
            "maybe observed"
        );
        self
    }
}

// =============================================================================
// Runtime Type Checks
// =============================================================================

impl<T: Any> Maybe<T> {
    /// Reinterprets the value as `OUT` if its runtime type is `OUT`.
    ///
    /// The check goes through the `Any` type capability. Rust has no
    /// subtyping, so the value must be exactly an `OUT`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of("text").of_type::<&str>(), Maybe::Some("text"));
    /// assert_eq!(Maybe::of("text").of_type::<i32>(), Maybe::None);
    /// ```
    pub fn of_type<OUT: Any>(self) -> Maybe<OUT> {
        self.flat_map(|value| {
            let mut slot = Some(value);
            let any: &mut dyn Any = &mut slot;
            Maybe::from(any.downcast_mut::<Option<OUT>>().and_then(Option::take))
        })
    }
}

impl Maybe<Box<dyn Any>> {
    /// Looks through the box and keeps the value if it is an `OUT`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    /// use maybers::maybe::Maybe;
    ///
    /// let boxed: Box<dyn Any> = Box::new(5_u32);
    /// assert_eq!(Maybe::of(boxed).downcast::<u32>(), Maybe::Some(5));
    /// ```
    pub fn downcast<OUT: Any>(self) -> Maybe<OUT> {
        self.flat_map(|boxed| Maybe::from(boxed.downcast::<OUT>().ok()).map(|value| *value))
    }
}

impl Maybe<Box<dyn Any + Send>> {
    /// Looks through the box and keeps the value if it is an `OUT`.
    pub fn downcast<OUT: Any>(self) -> Maybe<OUT> {
        self.flat_map(|boxed| Maybe::from(boxed.downcast::<OUT>().ok()).map(|value| *value))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    /// Returns `None`.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

/// Renders a present value as the value itself and absence as `None`.
impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => fmt::Display::fmt(value, formatter),
            Self::None => write!(formatter, "None"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.into_maybe()
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}
