//! Error definitions.
//!
//! Decoding itself never fails: an illegal encoding is ordinary decoded data
//! (a suppressed `reg_write`). The errors here cover caller contract
//! violations around the decoder:
//! 1. **Field Range:** Field values wider than their encoding slot.
//! 2. **Configuration:** Unreadable or malformed configuration documents.

use std::io;

use thiserror::Error;

/// An instruction field value that does not fit in its encoding slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Opcode wider than 7 bits.
    #[error("opcode {0:#b} does not fit in 7 bits")]
    OpcodeOutOfRange(u32),

    /// funct3 wider than 3 bits.
    #[error("funct3 {0:#b} does not fit in 3 bits")]
    Funct3OutOfRange(u32),

    /// funct7 wider than 7 bits.
    #[error("funct7 {0:#b} does not fit in 7 bits")]
    Funct7OutOfRange(u32),
}

/// Failure to load a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    /// The configuration document is not valid JSON for [`Config`](crate::config::Config).
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
