//! The `Maybe` value type and its combinators.
//!
//! This module provides the core of the crate:
//!
//! - [`Maybe`]: a value that is either `Some(T)` or `None`
//! - [`IntoMaybe`]: the presence check used by every factory
//! - Lift combinators joining several `Maybe` values at once
//! - [`unchecked`]: unwrapping for code that has already proven presence
//! - [`NoneError`]: absence expressed as a `Result` error
//!
//! # Examples
//!
//! ## Transforming a present value
//!
//! ```rust
//! use maybers::maybe::Maybe;
//!
//! let length = Maybe::of("hello").map(str::len).filter(|length| *length > 3);
//! assert_eq!(length, Maybe::Some(5));
//! ```
//!
//! ## Absence flows through every combinator
//!
//! ```rust
//! use maybers::maybe::Maybe;
//!
//! let mut calls = 0;
//! let result = Maybe::<i32>::of_nullable(None).map(|value| {
//!     calls += 1;
//!     value * 2
//! });
//! assert!(result.is_none());
//! assert_eq!(calls, 0);
//! ```
//!
//! ## Joining several values
//!
//! ```rust
//! use maybers::maybe::Maybe;
//!
//! let total = Maybe::of(1).lift3(Maybe::of(2), Maybe::of(3), |a, b, c| a + b + c);
//! assert_eq!(total, Maybe::Some(6));
//! ```

mod error;
mod lift;
mod presence;
pub mod unchecked;
mod value;

pub use error::NoneError;
pub use presence::IntoMaybe;
pub use value::Maybe;
