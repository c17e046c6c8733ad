//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and structures for decoding
//! RISC-V instruction fields from 32-bit instruction encodings.

use serde::Serialize;

use crate::common::constants::{
    FUNCT3_BITS, FUNCT3_SHIFT, FUNCT7_BITS, FUNCT7_SHIFT, OPCODE_BITS, RD_SHIFT, REG_BITS, RS1_SHIFT,
    RS2_SHIFT,
};
use crate::common::error::FieldError;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = (1 << OPCODE_BITS) - 1;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = (1 << REG_BITS) - 1;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = (1 << REG_BITS) - 1;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = (1 << REG_BITS) - 1;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = (1 << FUNCT3_BITS) - 1;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = (1 << FUNCT7_BITS) - 1;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract the standard RV32I instruction fields
/// from a 32-bit instruction encoding.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    ///
    /// The opcode determines the instruction format and operation category.
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Used to distinguish between different operations within the same opcode.
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Distinguishes standard and alternate encodings (ADD vs SUB, SRL vs SRA).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}

/// The three fields the control unit decodes.
///
/// Every value is guaranteed to fit its slot: `opcode` and `funct7` in 7 bits,
/// `funct3` in 3 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Fields {
    opcode: u32,
    funct3: u32,
    funct7: u32,
}

impl Fields {
    /// Builds a field set from separate values.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] naming the first field whose value is wider
    /// than its encoding slot.
    pub const fn new(opcode: u32, funct3: u32, funct7: u32) -> Result<Self, FieldError> {
        if opcode & !OPCODE_MASK != 0 {
            return Err(FieldError::OpcodeOutOfRange(opcode));
        }
        if funct3 & !FUNCT3_MASK != 0 {
            return Err(FieldError::Funct3OutOfRange(funct3));
        }
        if funct7 & !FUNCT7_MASK != 0 {
            return Err(FieldError::Funct7OutOfRange(funct7));
        }
        Ok(Self {
            opcode,
            funct3,
            funct7,
        })
    }

    /// Extracts the fields from a raw 32-bit instruction word.
    pub fn from_word(inst: u32) -> Self {
        Self {
            opcode: inst.opcode(),
            funct3: inst.funct3(),
            funct7: inst.funct7(),
        }
    }

    /// The 7-bit major opcode.
    pub const fn opcode(self) -> u32 {
        self.opcode
    }

    /// The 3-bit minor opcode.
    pub const fn funct3(self) -> u32 {
        self.funct3
    }

    /// The 7-bit function code.
    pub const fn funct7(self) -> u32 {
        self.funct7
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Contains all instruction fields extracted during decoding, including
/// opcode, register indices, function codes, and sign-extended immediate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Sign-extended immediate value (zero for formats without one).
    pub imm: i32,
}

impl Decoded {
    /// The control-relevant subset of the decoded fields.
    pub fn fields(&self) -> Fields {
        Fields::from_word(self.raw)
    }
}
