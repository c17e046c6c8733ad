//! RISC-V Instruction Decoder.
//!
//! This module handles the decoding of 32-bit RV32I instruction encodings into
//! a structured `Decoded` format. It extracts opcodes, register indices, function
//! codes, and implements the sign-extension unit: the immediate is rebuilt
//! according to the [`ImmFormat`] the control unit selects for the opcode.

use crate::core::control::classify::InstrClass;
use crate::core::control::mux::MuxSelects;
use crate::core::control::signals::ImmFormat;
use crate::isa::instruction::{Decoded, InstructionBits};

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Bit shift for extracting I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for extracting S-Type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for S-Type immediate low field (5 bits: imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit shift for extracting S-Type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Bit mask for S-Type immediate high field (7 bits: imm[11:5]).
const S_IMM_HIGH_MASK: u32 = 0x7F;

/// Total number of bits in S-Type immediate (12 bits).
const S_IMM_BITS: u32 = 12;

/// Total number of bits in B-Type immediate (13 bits, sign-extended).
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
const B_IMM_BITS: u32 = 13;

/// Bit mask for extracting U-Type immediate field (bits 12-31).
///
/// U-Type format: `imm[31:12] | rd | opcode`
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Total number of bits in J-Type immediate (21 bits, sign-extended).
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
const J_IMM_BITS: u32 = 21;

/// Decodes a RISC-V instruction into its component fields.
///
/// The immediate is extracted in the format the control unit selects for the
/// opcode; opcodes without an immediate (R-type, unknown) carry `imm == 0`.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();
    let format = MuxSelects::for_class(InstrClass::from_opcode(opcode)).imm_format;

    Decoded {
        raw: inst,
        opcode,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm: immediate(inst, format).unwrap_or(0),
    }
}

/// Rebuilds the immediate of `inst` in the given format.
///
/// Returns `None` for [`ImmFormat::None`].
pub const fn immediate(inst: u32, format: ImmFormat) -> Option<i32> {
    match format {
        ImmFormat::I => Some(decode_i_type_imm(inst)),
        ImmFormat::S => Some(decode_s_type_imm(inst)),
        ImmFormat::B => Some(decode_b_type_imm(inst)),
        ImmFormat::J => Some(decode_j_type_imm(inst)),
        ImmFormat::U => Some(decode_u_type_imm(inst)),
        ImmFormat::None => None,
    }
}

/// Used for Load, JALR, and Immediate Arithmetic instructions.
const fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

const fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    sign_extend((high << 5) | low, S_IMM_BITS)
}

/// The immediate represents an even offset; bit 0 is always zero.
const fn decode_b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> 7) & 0x1;
    let bits_4_1 = (inst >> 8) & 0xF;
    let bits_10_5 = (inst >> 25) & 0x3F;
    let bit_12 = (inst >> 31) & 0x1;

    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// LUI and AUIPC: the upper 20 bits in place, low 12 bits zero.
const fn decode_u_type_imm(inst: u32) -> i32 {
    (inst & U_IMM_MASK) as i32
}

const fn decode_j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> 12) & 0xFF;
    let bit_11 = (inst >> 20) & 0x1;
    let bits_10_1 = (inst >> 21) & 0x3FF;
    let bit_20 = (inst >> 31) & 0x1;

    let combined = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val as i32) << shift) >> shift
}
