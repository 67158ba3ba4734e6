//! Shared mutable state built on `Maybe`.
//!
//! - [`AtomicMaybe`]: a lock-free cell holding one `Maybe` with
//!   compare-and-swap semantics
//!
//! # Examples
//!
//! ```rust
//! use maybers::sync::AtomicMaybe;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cell = Arc::new(AtomicMaybe::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|id| {
//!         let cell = Arc::clone(&cell);
//!         thread::spawn(move || cell.set_if_none(id))
//!     })
//!     .collect();
//!
//! let winners = handles
//!     .into_iter()
//!     .map(|handle| handle.join().unwrap())
//!     .filter(|won| *won)
//!     .count();
//! assert_eq!(winners, 1);
//! ```

mod atomic_maybe;

pub use atomic_maybe::AtomicMaybe;
