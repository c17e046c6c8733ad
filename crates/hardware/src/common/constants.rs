//! Global Decoder Constants.
//!
//! This module defines constants shared by the ISA and control layers. It includes:
//! 1. **Field Widths:** Bit widths of the fields the control unit consumes.
//! 2. **Field Positions:** Shifts locating each field inside a 32-bit instruction word.
//! 3. **Encoding Space:** Sizes of the opcode, funct3 and funct7 value ranges.

/// Width of the opcode field in bits.
pub const OPCODE_BITS: u32 = 7;

/// Width of the funct3 field in bits.
pub const FUNCT3_BITS: u32 = 3;

/// Width of the funct7 field in bits.
pub const FUNCT7_BITS: u32 = 7;

/// Width of a register index field (rd, rs1, rs2) in bits.
pub const REG_BITS: u32 = 5;

/// Bit position shift for the destination register (rd) field.
pub const RD_SHIFT: u32 = 7;

/// Bit position shift for the funct3 field.
pub const FUNCT3_SHIFT: u32 = 12;

/// Bit position shift for the first source register (rs1) field.
pub const RS1_SHIFT: u32 = 15;

/// Bit position shift for the second source register (rs2) field.
pub const RS2_SHIFT: u32 = 20;

/// Bit position shift for the funct7 field.
pub const FUNCT7_SHIFT: u32 = 25;

/// Number of distinct opcode values (2^7).
pub const OPCODE_SPACE: u32 = 1 << OPCODE_BITS;

/// Number of distinct funct3 values (2^3).
pub const FUNCT3_SPACE: u32 = 1 << FUNCT3_BITS;

/// Number of distinct funct7 values (2^7).
pub const FUNCT7_SPACE: u32 = 1 << FUNCT7_BITS;
