//! Atomic cell holding one `Maybe`.
//!
//! `AtomicMaybe<T>` is meant to be used as a field shared between threads.
//! Its content only changes through single atomic read-modify-write steps
//! on one pointer, so no partial state is ever observable:
//!
//! - [`get_and_clear`](AtomicMaybe::get_and_clear) is one `swap`
//! - [`set_if_none`](AtomicMaybe::set_if_none) is one `compare_and_swap`
//!
//! Values are stored behind `Arc<T>`. Reads hand out `Maybe<Arc<T>>`
//! snapshots that stay valid after the cell changes.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::maybe::Maybe;

/// A thread-safe mutable cell holding exactly one `Maybe<T>`.
///
/// # Thread Safety
///
/// `AtomicMaybe<T>` is `Send` and `Sync` when `T: Send + Sync`. All
/// operations are lock-free.
///
/// # Examples
///
/// ```rust
/// use maybers::maybe::Maybe;
/// use maybers::sync::AtomicMaybe;
///
/// let pending = AtomicMaybe::from_value("job");
///
/// // Consume once: the second take sees nothing.
/// assert_eq!(pending.get_and_clear().map(|job| *job), Maybe::Some("job"));
/// assert!(pending.get_and_clear().is_none());
///
/// // First write wins.
/// assert!(pending.set_if_none("first"));
/// assert!(!pending.set_if_none("second"));
/// assert_eq!(pending.get().map(|job| *job), Maybe::Some("first"));
/// ```
pub struct AtomicMaybe<T> {
    cell: ArcSwapOption<T>,
}

impl<T> AtomicMaybe<T> {
    /// Creates an empty cell holding `None`.
    pub fn new() -> Self {
        Self {
            cell: ArcSwapOption::empty(),
        }
    }

    /// Creates a cell holding `Some(value)`.
    pub fn from_value(value: T) -> Self {
        Self::from_maybe(Maybe::of(value))
    }

    /// Creates a cell holding `initial`.
    pub fn from_maybe(initial: Maybe<T>) -> Self {
        Self {
            cell: ArcSwapOption::new(to_pointer(initial)),
        }
    }

    /// Returns a snapshot of the current content.
    pub fn get(&self) -> Maybe<Arc<T>> {
        self.cell.load_full().into()
    }

    /// Returns `true` if the cell currently holds a value.
    pub fn is_some(&self) -> bool {
        self.cell.load().is_some()
    }

    /// Replaces the content unconditionally.
    pub fn set(&self, value: Maybe<T>) {
        self.cell.store(to_pointer(value));
    }

    /// Atomically replaces the content and returns the previous one.
    pub fn get_and_set(&self, value: Maybe<T>) -> Maybe<Arc<T>> {
        self.cell.swap(to_pointer(value)).into()
    }

    /// Atomically sets the content to `None` and returns the previous one.
    ///
    /// Of several threads racing on a `Some`, exactly one receives it.
    pub fn get_and_clear(&self) -> Maybe<Arc<T>> {
        self.cell.swap(None).into()
    }

    /// Stores `Some(value)` only if the cell currently holds `None`.
    ///
    /// Returns `true` if the write happened. When several threads race from
    /// `None`, exactly one succeeds and the others leave the cell untouched.
    pub fn set_if_none(&self, value: T) -> bool {
        let empty: Option<Arc<T>> = None;
        let previous = self.cell.compare_and_swap(&empty, Some(Arc::new(value)));
        previous.is_none()
    }

    /// Stores `new` only if the cell still holds `expected`.
    ///
    /// `expected` is a snapshot obtained from this cell (through [`get`],
    /// [`get_and_set`] or [`get_and_clear`]). A `Some` snapshot matches only
    /// the very `Arc` it was read from, not an equal value stored later;
    /// `None` matches `None`. Returns `true` if the write happened.
    ///
    /// [`get`]: AtomicMaybe::get
    /// [`get_and_set`]: AtomicMaybe::get_and_set
    /// [`get_and_clear`]: AtomicMaybe::get_and_clear
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    /// use maybers::sync::AtomicMaybe;
    ///
    /// let counter = AtomicMaybe::from_value(1);
    /// let seen = counter.get();
    ///
    /// assert!(counter.compare_and_set(&seen, Maybe::of(2)));
    /// // `seen` no longer refers to the current content.
    /// assert!(!counter.compare_and_set(&seen, Maybe::of(3)));
    /// assert_eq!(counter.get().map(|value| *value), Maybe::Some(2));
    /// ```
    pub fn compare_and_set(&self, expected: &Maybe<Arc<T>>, new: Maybe<T>) -> bool {
        let current = expected.as_ref().map(Arc::clone).into_option();
        let previous = self.cell.compare_and_swap(&current, to_pointer(new));
        match (&*previous, &current) {
            (Some(previous), Some(current)) => Arc::ptr_eq(previous, current),
            (None, None) => true,
            _ => false,
        }
    }

    /// Consumes the cell and returns its content.
    pub fn into_inner(self) -> Maybe<Arc<T>> {
        self.cell.into_inner().into()
    }
}

fn to_pointer<T>(value: Maybe<T>) -> Option<Arc<T>> {
    value.map(Arc::new).into_option()
}

impl<T> Default for AtomicMaybe<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Maybe<T>> for AtomicMaybe<T> {
    fn from(initial: Maybe<T>) -> Self {
        Self::from_maybe(initial)
    }
}

impl<T: fmt::Debug> fmt::Debug for AtomicMaybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("AtomicMaybe")
            .field(&self.get())
            .finish()
    }
}

static_assertions::assert_impl_all!(AtomicMaybe<i32>: Send, Sync);
static_assertions::assert_impl_all!(AtomicMaybe<String>: Send, Sync);
static_assertions::assert_not_impl_any!(AtomicMaybe<std::rc::Rc<i32>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_is_none() {
        assert_eq!(AtomicMaybe::<i32>::new().get(), Maybe::None);
        assert_eq!(AtomicMaybe::<i32>::default().get(), Maybe::None);
    }

    #[rstest]
    fn from_maybe_none_is_none() {
        let cell = AtomicMaybe::from_maybe(Maybe::<u8>::None);
        assert!(!cell.is_some());
    }

    #[rstest]
    fn get_and_set_returns_previous() {
        let cell = AtomicMaybe::from_value(1);
        let previous = cell.get_and_set(Maybe::of(2));
        assert_eq!(previous, Maybe::Some(Arc::new(1)));
        assert_eq!(cell.get(), Maybe::Some(Arc::new(2)));
    }

    #[rstest]
    fn snapshot_survives_clear() {
        let cell = AtomicMaybe::from_value("kept".to_string());
        let snapshot = cell.get();
        let _ = cell.get_and_clear();
        assert_eq!(snapshot.map(|value| value.len()), Maybe::Some(4));
    }

    #[rstest]
    fn compare_and_set_from_none_snapshot() {
        let cell = AtomicMaybe::new();
        assert!(cell.compare_and_set(&Maybe::None, Maybe::of(1)));
        assert!(!cell.compare_and_set(&Maybe::None, Maybe::of(2)));
        assert_eq!(cell.get(), Maybe::Some(Arc::new(1)));
    }

    #[rstest]
    fn compare_and_set_to_none_clears() {
        let cell = AtomicMaybe::from_value(1);
        let seen = cell.get();
        assert!(cell.compare_and_set(&seen, Maybe::None));
        assert!(!cell.is_some());
    }

    #[rstest]
    fn debug_shows_content() {
        let cell = AtomicMaybe::from_value(3);
        assert_eq!(format!("{cell:?}"), "AtomicMaybe(Some(3))");
    }
}
