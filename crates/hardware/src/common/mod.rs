//! Common types and constants used throughout the control unit.
//!
//! This module provides the building blocks shared by the ISA and control layers:
//! 1. **Constants:** Field widths, positions and encoding-space sizes.
//! 2. **Error Handling:** Field-range and configuration errors.

/// Common constants used throughout the decoder.
pub mod constants;

/// Error types for caller contract violations.
pub mod error;

pub use error::{ConfigError, FieldError};
