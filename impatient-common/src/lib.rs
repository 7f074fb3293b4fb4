//! # Impatient Common Utilities
//!
//! Shared utilities for the functional-idiom exercises.
//!
//! ## Modules
//!
//! - [`error`]: The error type shared by every exercise crate
//! - [`counting`]: An instrumented iterator adapter that records how many elements were pulled
//! - [`logging`]: `tracing` subscriber bootstrap for the demo binaries
//!
//! ## Design Principles
//!
//! 1. **Lazy by default**: Streams are plain `Iterator`s; nothing is computed before `next()`
//! 2. **Single pass**: A stream is consumed by value; restarting means cloning or recreating it
//! 3. **Fail fast**: Invalid arguments become a [`StreamError`] at construction time
//! 4. **Observable**: Consumers can be checked for over-consumption with [`Counted`]

pub mod counting;
pub mod error;
pub mod logging;

// Re-export main types for convenience
pub use counting::{Counted, PullCounter};
pub use error::{Result, StreamError};
