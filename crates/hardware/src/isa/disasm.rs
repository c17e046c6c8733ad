//! Instruction Disassembler for RISC-V RV32I.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for decode tracing, the CLI and test diagnostics.
//!
//! Shift encodings whose funct7 RV32I does not assign render with a `?`
//! suffix (`slli?`, `sr?i`, `sll?`, `sr?`), matching the encodings the control unit refuses
//! to write back.
//!
//! # Usage
//!
//! ```
//! use rvctl_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A0_0513); // ADDI x10, x0, 10
//! assert_eq!(text, "addi a0, zero, 10");
//! ```

use crate::core::control::signals::ImmFormat;
use crate::isa::decode::immediate;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3 as i_f3, funct7 as i_f7, opcodes as i_op};

/// ABI register names for x0–x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Shift amount mask for RV32 (5 bits).
const SHAMT_MASK: u32 = 0x1F;

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Disassembles a 32-bit RISC-V instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"` or `"unknown (0x...)"` for
/// opcodes outside RV32I.
pub fn disassemble(inst: u32) -> String {
    let rd = inst.rd();
    let rs1 = inst.rs1();
    let rs2 = inst.rs2();
    let f3 = inst.funct3();
    let imm = |format| immediate(inst, format).unwrap_or(0);

    match inst.opcode() {
        i_op::OP_REG => disasm_op_reg(rd, rs1, rs2, f3, inst.funct7()),
        i_op::OP_IMM => disasm_op_imm(inst, rd, rs1, f3, imm(ImmFormat::I)),

        i_op::OP_LOAD => {
            let mn = match f3 {
                i_f3::LB => "lb",
                i_f3::LH => "lh",
                i_f3::LW => "lw",
                i_f3::LBU => "lbu",
                i_f3::LHU => "lhu",
                _ => "l??",
            };
            format!("{mn} {}, {}({})", xreg(rd), imm(ImmFormat::I), xreg(rs1))
        }

        i_op::OP_STORE => {
            let mn = match f3 {
                i_f3::SB => "sb",
                i_f3::SH => "sh",
                i_f3::SW => "sw",
                _ => "s??",
            };
            format!("{mn} {}, {}({})", xreg(rs2), imm(ImmFormat::S), xreg(rs1))
        }

        i_op::OP_BRANCH => {
            let mn = match f3 {
                i_f3::BEQ => "beq",
                i_f3::BNE => "bne",
                i_f3::BLT => "blt",
                i_f3::BGE => "bge",
                i_f3::BLTU => "bltu",
                i_f3::BGEU => "bgeu",
                _ => "b??",
            };
            format!("{mn} {}, {}, {}", xreg(rs1), xreg(rs2), imm(ImmFormat::B))
        }

        i_op::OP_LUI => format!("lui {}, {:#x}", xreg(rd), (inst >> 12) & 0xFFFFF),
        i_op::OP_AUIPC => format!("auipc {}, {:#x}", xreg(rd), (inst >> 12) & 0xFFFFF),

        i_op::OP_JAL => format!("jal {}, {}", xreg(rd), imm(ImmFormat::J)),
        i_op::OP_JALR => format!("jalr {}, {}({})", xreg(rd), imm(ImmFormat::I), xreg(rs1)),

        _ => format!("unknown ({inst:#010x})"),
    }
}

/// Disassemble `OP_REG` (R-type register-register).
fn disasm_op_reg(rd: usize, rs1: usize, rs2: usize, f3: u32, f7: u32) -> String {
    let mn = match (f3, f7) {
        (i_f3::ADD_SUB, i_f7::DEFAULT) => "add",
        (i_f3::ADD_SUB, i_f7::SUB) => "sub",
        (i_f3::SLL, i_f7::DEFAULT) => "sll",
        (i_f3::SLL, _) => "sll?",
        (i_f3::SLT, _) => "slt",
        (i_f3::SLTU, _) => "sltu",
        (i_f3::XOR, _) => "xor",
        (i_f3::SRL_SRA, i_f7::DEFAULT) => "srl",
        (i_f3::SRL_SRA, i_f7::SRA) => "sra",
        (i_f3::SRL_SRA, _) => "sr?",
        (i_f3::OR, _) => "or",
        (i_f3::AND, _) => "and",
        _ => "r??",
    };
    format!("{mn} {}, {}, {}", xreg(rd), xreg(rs1), xreg(rs2))
}

/// Disassemble `OP_IMM` (I-type immediate arithmetic).
fn disasm_op_imm(inst: u32, rd: usize, rs1: usize, f3: u32, imm: i32) -> String {
    let shamt = inst.rs2() as u32 & SHAMT_MASK;
    let mn = match f3 {
        i_f3::ADD_SUB => "addi",
        i_f3::SLT => "slti",
        i_f3::SLTU => "sltiu",
        i_f3::XOR => "xori",
        i_f3::OR => "ori",
        i_f3::AND => "andi",
        i_f3::SLL => {
            let mn = if inst.funct7() == i_f7::DEFAULT {
                "slli"
            } else {
                "slli?"
            };
            return format!("{mn} {}, {}, {shamt}", xreg(rd), xreg(rs1));
        }
        i_f3::SRL_SRA => {
            let mn = match inst.funct7() {
                i_f7::DEFAULT => "srli",
                i_f7::SRA => "srai",
                _ => "sr?i",
            };
            return format!("{mn} {}, {}, {shamt}", xreg(rd), xreg(rs1));
        }
        _ => "i??",
    };
    format!("{mn} {}, {}, {imm}", xreg(rd), xreg(rs1))
}
