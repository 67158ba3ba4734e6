//! Type class instances for `Maybe`.
//!
//! Rust has no higher-kinded types, so the type classes below emulate them
//! with Generic Associated Types:
//!
//! - [`TypeConstructor`]: `Maybe<A>` as the constructor `Maybe<_>` applied to `A`
//! - [`Functor`]: mapping over the value
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing dependent computations
//!
//! Code written against these traits works with `Maybe` without naming it.
//!
//! # Examples
//!
//! ```rust
//! use maybers::maybe::Maybe;
//! use maybers::typeclass::{Applicative, Functor, Monad};
//!
//! fn add_checked<M>(left: M, right: M::WithType<i32>) -> M::WithType<i32>
//! where
//!     M: Applicative<Inner = i32>,
//! {
//!     left.map2(right, |a, b| a + b)
//! }
//!
//! assert_eq!(add_checked(Maybe::of(1), Maybe::of(2)), Maybe::Some(3));
//! assert_eq!(Maybe::of(2).fmap(|n| n * 10), Maybe::Some(20));
//! assert_eq!(Maybe::of(2).then(Maybe::of("next")), Maybe::Some("next"));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
