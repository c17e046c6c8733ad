//! Branch-condition resolver.
//!
//! Turns a branch's funct3 and the live ALU flags into a taken/not-taken
//! decision. The resolver holds no state: every call sees only the flags it
//! is given, so a flag change within one instruction is reflected on the
//! next evaluation.

use serde::Serialize;

use crate::core::control::classify::InstrClass;
use crate::core::control::signals::AluFlags;
use crate::isa::rv32i::funct3;

/// Branch condition selected by funct3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BranchCond {
    /// `BEQ`: taken when the SUB result is zero.
    Eq,
    /// `BNE`: taken when the SUB result is non-zero.
    Ne,
    /// `BLT`: taken when SLT yields 1.
    Lt,
    /// `BGE`: taken when SLT yields 0.
    Ge,
    /// `BLTU`: taken when SLTU yields 1.
    Ltu,
    /// `BGEU`: taken when SLTU yields 0.
    Geu,
}

impl BranchCond {
    /// Maps a branch funct3 onto its condition; `010` and `011` are unassigned.
    pub const fn from_funct3(f3: u32) -> Option<Self> {
        match f3 {
            funct3::BEQ => Some(Self::Eq),
            funct3::BNE => Some(Self::Ne),
            funct3::BLT => Some(Self::Lt),
            funct3::BGE => Some(Self::Ge),
            funct3::BLTU => Some(Self::Ltu),
            funct3::BGEU => Some(Self::Geu),
            _ => None,
        }
    }

    /// Evaluates the condition against the current ALU flags.
    pub const fn taken(self, flags: AluFlags) -> bool {
        match self {
            Self::Eq => flags.zero,
            Self::Ne => !flags.zero,
            Self::Lt | Self::Ltu => flags.last_bit,
            Self::Ge | Self::Geu => !flags.last_bit,
        }
    }
}

/// Resolves whether a branch redirects the PC.
///
/// Non-branch classes and unassigned branch funct3 values are never taken.
pub const fn resolve_branch(class: InstrClass, f3: u32, flags: AluFlags) -> bool {
    if !matches!(class, InstrClass::Branch) {
        return false;
    }
    match BranchCond::from_funct3(f3) {
        Some(cond) => cond.taken(flags),
        None => false,
    }
}
