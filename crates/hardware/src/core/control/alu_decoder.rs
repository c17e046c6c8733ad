//! ALU-operation selector.
//!
//! Maps (class, funct3, funct7) onto the 4-bit ALU operation and decides
//! whether the encoding is legal. An illegal encoding still drives the
//! operation funct3 selects; the caller only gates `reg_write` with the
//! legality bit.

use crate::config::Funct7Policy;
use crate::core::control::classify::InstrClass;
use crate::core::control::signals::AluOp;
use crate::isa::rv32i::{funct3, funct7};

/// Outcome of ALU-operation selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluDecision {
    /// Operation driven onto `alu_control`.
    pub op: AluOp,
    /// The encoding is one RV32I assigns (under the configured policy).
    pub legal: bool,
}

impl AluDecision {
    const fn legal(op: AluOp) -> Self {
        Self { op, legal: true }
    }

    const fn illegal(op: AluOp) -> Self {
        Self { op, legal: false }
    }

    const fn when(op: AluOp, legal: bool) -> Self {
        Self { op, legal }
    }
}

/// Selects the ALU operation for an instruction.
///
/// Legality depends only on the arguments, never on the ALU flags.
pub const fn select(class: InstrClass, f3: u32, f7: u32, policy: Funct7Policy) -> AluDecision {
    match class {
        InstrClass::Load
        | InstrClass::Store
        | InstrClass::Jal
        | InstrClass::Jalr
        | InstrClass::Lui
        | InstrClass::Auipc => AluDecision::legal(AluOp::Add),
        InstrClass::RegImm => select_reg_imm(f3, f7),
        InstrClass::RegReg => select_reg_reg(f3, f7, policy),
        InstrClass::Branch => select_branch(f3),
        InstrClass::Unknown => AluDecision::illegal(AluOp::Add),
    }
}

/// Immediate forms: funct7 is `imm[11:5]`, so only the shifts inspect it.
const fn select_reg_imm(f3: u32, f7: u32) -> AluDecision {
    match f3 {
        funct3::ADD_SUB => AluDecision::legal(AluOp::Add),
        funct3::SLL | funct3::SRL_SRA => select_shift(f3, f7),
        _ => AluDecision::legal(logic_op(f3)),
    }
}

const fn select_reg_reg(f3: u32, f7: u32, policy: Funct7Policy) -> AluDecision {
    let lenient = matches!(policy, Funct7Policy::Lenient);
    match f3 {
        funct3::ADD_SUB => {
            let op = if f7 & funct7::ALT_BIT != 0 {
                AluOp::Sub
            } else {
                AluOp::Add
            };
            AluDecision::when(
                op,
                lenient || f7 == funct7::DEFAULT || f7 == funct7::SUB,
            )
        }
        funct3::SLL | funct3::SRL_SRA => select_shift(f3, f7),
        _ => AluDecision::when(logic_op(f3), lenient || f7 == funct7::DEFAULT),
    }
}

/// Shared by both ALU classes: SLL needs funct7 `0000000`; the right shift
/// needs `0000000` (SRL) or `0100000` (SRA) and falls back to SRL otherwise.
const fn select_shift(f3: u32, f7: u32) -> AluDecision {
    if f3 == funct3::SLL {
        return AluDecision::when(AluOp::Sll, f7 == funct7::DEFAULT);
    }
    match f7 {
        funct7::DEFAULT => AluDecision::legal(AluOp::Srl),
        funct7::SRA => AluDecision::legal(AluOp::Sra),
        _ => AluDecision::illegal(AluOp::Srl),
    }
}

/// The funct3 values whose operation never depends on funct7.
const fn logic_op(f3: u32) -> AluOp {
    match f3 {
        funct3::SLT => AluOp::Slt,
        funct3::SLTU => AluOp::Sltu,
        funct3::XOR => AluOp::Xor,
        funct3::OR => AluOp::Or,
        funct3::AND => AluOp::And,
        // ADD_SUB and the shifts are routed before reaching here.
        _ => AluOp::Add,
    }
}

/// Branches compare through the ALU: SUB for (in)equality, SLT/SLTU for ordering.
const fn select_branch(f3: u32) -> AluDecision {
    match f3 {
        funct3::BEQ | funct3::BNE => AluDecision::legal(AluOp::Sub),
        funct3::BLT | funct3::BGE => AluDecision::legal(AluOp::Slt),
        funct3::BLTU | funct3::BGEU => AluDecision::legal(AluOp::Sltu),
        _ => AluDecision::illegal(AluOp::Sub),
    }
}
