//! # Control Unit Tests
//!
//! Tests for the single-cycle control unit, grouped by behavior.


/// Unassigned funct7 and funct3 encodings.
pub mod illegal_encodings;

/// Flag changes within one instruction.
pub mod reevaluation;
