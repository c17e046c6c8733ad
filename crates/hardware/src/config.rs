//! Configuration for the control unit.
//!
//! This module defines the configuration structures used to parameterize
//! decoding. It provides:
//! 1. **Defaults:** Baseline policy constants.
//! 2. **Structures:** Root `Config` and the `DecodeConfig` section.
//! 3. **Enums:** Policy for funct7 values that no RV32I instruction assigns.
//!
//! Configuration is supplied as JSON (`Config::from_json`, `Config::from_file`)
//! or built with `Config::default()`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    use super::Funct7Policy;

    /// Unassigned funct7 values on register-register instructions suppress the write.
    pub const REG_FUNCT7: Funct7Policy = Funct7Policy::Strict;
}

/// How register-register instructions treat funct7 values outside the
/// encodings RV32I assigns (`0000000`, and `0100000` for SUB/SRA).
///
/// Shift instructions (`funct3` `001`/`101`) always check funct7, for both
/// register and immediate forms; this policy only governs the remaining
/// register-register operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum Funct7Policy {
    /// Unassigned funct7 makes the instruction illegal: `reg_write` is suppressed.
    #[default]
    #[serde(alias = "strict", alias = "STRICT")]
    Strict,

    /// funct7 is a don't-care outside the shift group; only bit 5 of funct7
    /// picks SUB over ADD.
    #[serde(alias = "lenient", alias = "LENIENT")]
    Lenient,
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use rvctl_core::config::{Config, Funct7Policy};
///
/// let config = Config::from_json(r#"{ "decode": { "reg_funct7": "Lenient" } }"#)?;
/// assert_eq!(config.decode.reg_funct7, Funct7Policy::Lenient);
/// # Ok::<(), rvctl_core::common::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Decoder policy section.
    #[serde(default)]
    pub decode: DecodeConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing sections and fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON or
    /// names an unknown policy.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Decoder policy settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DecodeConfig {
    /// Treatment of unassigned funct7 values on register-register instructions.
    #[serde(default = "DecodeConfig::default_reg_funct7")]
    pub reg_funct7: Funct7Policy,
}

impl DecodeConfig {
    const fn default_reg_funct7() -> Funct7Policy {
        defaults::REG_FUNCT7
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            reg_funct7: defaults::REG_FUNCT7,
        }
    }
}
