//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization and file loading.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use rvctl_core::common::ConfigError;
use rvctl_core::config::{Config, DecodeConfig, Funct7Policy};

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.decode.reg_funct7, Funct7Policy::Strict);
    assert_eq!(config.decode, DecodeConfig::default());
}

#[test]
fn test_empty_document_takes_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    assert_eq!(
        Config::from_json(r#"{ "decode": {} }"#).unwrap(),
        Config::default()
    );
}

#[test]
fn test_policy_spellings() {
    for (text, policy) in [
        ("Strict", Funct7Policy::Strict),
        ("strict", Funct7Policy::Strict),
        ("STRICT", Funct7Policy::Strict),
        ("Lenient", Funct7Policy::Lenient),
        ("lenient", Funct7Policy::Lenient),
        ("LENIENT", Funct7Policy::Lenient),
    ] {
        let json = format!(r#"{{ "decode": {{ "reg_funct7": "{text}" }} }}"#);
        assert_eq!(Config::from_json(&json).unwrap().decode.reg_funct7, policy);
    }
}

#[test]
fn test_unknown_policy_is_parse_error() {
    let err = Config::from_json(r#"{ "decode": { "reg_funct7": "Relaxed" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse config"));
}

#[test]
fn test_malformed_json_is_parse_error() {
    assert!(matches!(
        Config::from_json("{ decode: "),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_serialize_round_trip() {
    let mut config = Config::default();
    config.decode.reg_funct7 = Funct7Policy::Lenient;
    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(Config::from_json(&text).unwrap(), config);
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "decode": { "reg_funct7": "Lenient" } }"#)
        .unwrap();
    file.flush().unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.decode.reg_funct7, Funct7Policy::Lenient);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
