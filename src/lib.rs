//! # maybers
//!
//! An immutable `Maybe<T>` value type with a full combinator algebra,
//! a lock-free atomic cell and a fluent assertion helper for tests.
//!
//! ## Overview
//!
//! `Maybe<T>` represents a value that may be absent as an ordinary value
//! instead of a sentinel. It includes:
//!
//! - **Maybe**: the `Some`/`None` sum type with `map`, `flat_map`, `filter`,
//!   `match_with`, `or_default` and friends
//! - **Lift**: all-or-nothing joins of 2, 3, 4 or N values
//! - **Unchecked access**: `unwrap` / `unwrap_or_throw` for code that has
//!   already proven presence
//! - **AtomicMaybe**: a compare-and-swap cell holding one `Maybe`
//! - **MaybeAssertion**: chained assertions for tests
//!
//! ## Feature Flags
//!
//! - `typeclass`: Functor, Applicative and Monad instances for `Maybe`
//! - `sync`: `AtomicMaybe`
//! - `testing`: `MaybeAssertion` and `Maybe::test`
//! - `serde`: Serialize / Deserialize for `Maybe`
//! - `tracing`: `Maybe::trace` structured logging
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybers::prelude::*;
//!
//! let greeting = Maybe::of("x").map(|s| format!("{s}y"));
//! assert_eq!(greeting, Maybe::Some("xy".to_string()));
//!
//! let sum = Maybe::of(1).lift(Maybe::of(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::Some(3));
//!
//! let missing = Maybe::of(1).lift(Maybe::<i32>::none(), |a, b| a + b);
//! assert!(missing.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use maybers::prelude::*;
/// ```
pub mod prelude {
    pub use crate::maybe::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "sync")]
    pub use crate::sync::*;

    #[cfg(feature = "testing")]
    pub use crate::testing::*;
}

pub mod maybe;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "sync")]
pub mod sync;

#[cfg(feature = "testing")]
pub mod testing;
