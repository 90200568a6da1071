//! Common types and utilities shared across modules.
//!
//! The parsing and conversion stages are pure, infallible text
//! transformations (malformed input degrades to literal output instead of
//! failing), so the error type here only covers the packaging boundary
//! where real I/O happens.

pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};
