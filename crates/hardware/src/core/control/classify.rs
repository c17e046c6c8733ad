//! Opcode classifier.
//!
//! Maps the 7-bit major opcode onto the instruction-format class that the
//! rest of the control unit dispatches on. This is the only place opcode
//! constants are compared.

use serde::Serialize;

use crate::isa::rv32i::opcodes;

/// Instruction-format class derived from the opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum InstrClass {
    /// Memory load (`LB`..`LHU`).
    Load,
    /// Memory store (`SB`, `SH`, `SW`).
    Store,
    /// Register-register ALU operation.
    RegReg,
    /// Register-immediate ALU operation.
    RegImm,
    /// Conditional branch.
    Branch,
    /// Jump and link.
    Jal,
    /// Jump and link register.
    Jalr,
    /// Load upper immediate.
    Lui,
    /// Add upper immediate to PC.
    Auipc,
    /// Opcode outside RV32I's recognised set.
    Unknown,
}

impl InstrClass {
    /// Every class, recognised ones first.
    pub const ALL: [Self; 10] = [
        Self::Load,
        Self::Store,
        Self::RegReg,
        Self::RegImm,
        Self::Branch,
        Self::Jal,
        Self::Jalr,
        Self::Lui,
        Self::Auipc,
        Self::Unknown,
    ];

    /// Classifies a major opcode.
    pub const fn from_opcode(opcode: u32) -> Self {
        match opcode {
            opcodes::OP_LOAD => Self::Load,
            opcodes::OP_STORE => Self::Store,
            opcodes::OP_REG => Self::RegReg,
            opcodes::OP_IMM => Self::RegImm,
            opcodes::OP_BRANCH => Self::Branch,
            opcodes::OP_JAL => Self::Jal,
            opcodes::OP_JALR => Self::Jalr,
            opcodes::OP_LUI => Self::Lui,
            opcodes::OP_AUIPC => Self::Auipc,
            _ => Self::Unknown,
        }
    }

    /// The opcode this class decodes from, `None` for [`InstrClass::Unknown`].
    pub const fn opcode(self) -> Option<u32> {
        match self {
            Self::Load => Some(opcodes::OP_LOAD),
            Self::Store => Some(opcodes::OP_STORE),
            Self::RegReg => Some(opcodes::OP_REG),
            Self::RegImm => Some(opcodes::OP_IMM),
            Self::Branch => Some(opcodes::OP_BRANCH),
            Self::Jal => Some(opcodes::OP_JAL),
            Self::Jalr => Some(opcodes::OP_JALR),
            Self::Lui => Some(opcodes::OP_LUI),
            Self::Auipc => Some(opcodes::OP_AUIPC),
            Self::Unknown => None,
        }
    }

    /// Position of this class in [`InstrClass::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short lowercase name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Store => "store",
            Self::RegReg => "reg-reg",
            Self::RegImm => "reg-imm",
            Self::Branch => "branch",
            Self::Jal => "jal",
            Self::Jalr => "jalr",
            Self::Lui => "lui",
            Self::Auipc => "auipc",
            Self::Unknown => "unknown",
        }
    }
}
