//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! `TypeConstructor` lets a trait talk about "the same container holding a
//! different type", which is what `Functor` and friends need to express
//! `fmap: F<A> -> F<B>`.

use crate::maybe::Maybe;

/// A type that can be viewed as a type constructor applied to `Inner`.
///
/// # Examples
///
/// ```rust
/// use maybers::maybe::Maybe;
/// use maybers::typeclass::TypeConstructor;
///
/// fn empty_like<M: TypeConstructor>(_value: &M) -> M::WithType<String>
/// where
///     M::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let empty: Maybe<String> = empty_like(&Maybe::of(42));
/// assert_eq!(empty, Maybe::None);
/// ```
pub trait TypeConstructor {
    /// The type currently held.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}
