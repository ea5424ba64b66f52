//! Common utilities and shared functionality.
//!
//! - Logging setup
//! - `CustomError` - error type for binary-level failures

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
