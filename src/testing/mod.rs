//! Test helpers for code that returns `Maybe`.
//!
//! [`Maybe::test`](crate::maybe::Maybe::test) starts a chain of assertions
//! on a borrowed value. Failures panic with a message that includes the
//! `Debug` rendering of the asserted value, so they abort the running test.
//!
//! # Examples
//!
//! ```rust
//! use maybers::maybe::Maybe;
//!
//! Maybe::of(5).test().assert_is_some().assert_value(5);
//! Maybe::<i32>::none().test().assert_is_none();
//! ```
//!
//! ```rust,should_panic
//! use maybers::maybe::Maybe;
//!
//! // panics with "Maybe was not Some (actual = None)"
//! Maybe::<i32>::none().test().assert_value(5);
//! ```

mod assertion;

pub use assertion::MaybeAssertion;
