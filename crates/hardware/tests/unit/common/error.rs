//! # Error Tests
//!
//! Field range errors raised when building decoder inputs.

use pretty_assertions::assert_eq;

use rvctl_core::common::FieldError;
use rvctl_core::Fields;

#[test]
fn test_opcode_out_of_range() {
    assert_eq!(
        Fields::new(0b1000_0000, 0, 0),
        Err(FieldError::OpcodeOutOfRange(0b1000_0000))
    );
}

#[test]
fn test_funct3_out_of_range() {
    assert_eq!(
        Fields::new(0b0110011, 8, 0),
        Err(FieldError::Funct3OutOfRange(8))
    );
}

#[test]
fn test_funct7_out_of_range() {
    assert_eq!(
        Fields::new(0b0110011, 0, 0x80),
        Err(FieldError::Funct7OutOfRange(0x80))
    );
}

#[test]
fn test_first_offending_field_is_reported() {
    assert_eq!(
        Fields::new(u32::MAX, u32::MAX, u32::MAX),
        Err(FieldError::OpcodeOutOfRange(u32::MAX))
    );
}

#[test]
fn test_display_names_the_field() {
    assert_eq!(
        FieldError::Funct3OutOfRange(9).to_string(),
        "funct3 0b1001 does not fit in 3 bits"
    );
    assert!(FieldError::OpcodeOutOfRange(200).to_string().starts_with("opcode "));
    assert!(FieldError::Funct7OutOfRange(200).to_string().ends_with("7 bits"));
}

#[test]
fn test_boundary_values_are_accepted() {
    let f = Fields::new(0x7F, 0x7, 0x7F).unwrap();
    assert_eq!((f.opcode(), f.funct3(), f.funct7()), (0x7F, 0x7, 0x7F));
}
