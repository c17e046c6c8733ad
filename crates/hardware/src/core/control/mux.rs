//! Mux-select generator.
//!
//! Derives every datapath select that depends only on the instruction class.
//! `reg_write` here is the class default, before legality gating.

use crate::core::control::classify::InstrClass;
use crate::core::control::signals::{ImmFormat, SecondAddSrc, WriteBackSrc};

/// Class-determined select lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MuxSelects {
    /// Immediate format for the sign-extension unit.
    pub imm_format: ImmFormat,
    /// ALU operand B is the immediate.
    pub alu_src_imm: bool,
    /// Memory write enable.
    pub mem_write: bool,
    /// Register write enable before legality gating.
    pub reg_write: bool,
    /// Write-back source.
    pub write_back: WriteBackSrc,
    /// Conditional branch.
    pub branch: bool,
    /// Unconditional jump.
    pub jump: bool,
    /// Second-adder base operand.
    pub second_add: SecondAddSrc,
}

impl MuxSelects {
    /// The select lines for a class.
    ///
    /// | Class   | imm  | alu src | mem w | reg w | write back | br | jump | 2nd add |
    /// |---------|------|---------|-------|-------|------------|----|------|---------|
    /// | Load    | I    | imm     | 0     | 1     | memory     | 0  | 0    | -       |
    /// | Store   | S    | imm     | 1     | 0     | -          | 0  | 0    | -       |
    /// | RegReg  | none | rs2     | 0     | 1     | ALU        | 0  | 0    | -       |
    /// | RegImm  | I    | imm     | 0     | 1     | ALU        | 0  | 0    | -       |
    /// | Branch  | B    | rs2     | 0     | 0     | -          | 1  | 0    | PC      |
    /// | Jal     | J    | -       | 0     | 1     | PC + 4     | 0  | 1    | PC      |
    /// | Jalr    | I    | -       | 0     | 1     | PC + 4     | 0  | 1    | rs1     |
    /// | Lui     | U    | -       | 0     | 1     | upper imm  | 0  | 0    | zero    |
    /// | Auipc   | U    | -       | 0     | 1     | upper imm  | 0  | 0    | PC      |
    /// | Unknown | none | rs2     | 0     | 0     | -          | 0  | 0    | -       |
    ///
    /// `-` entries take the select's default.
    pub const fn for_class(class: InstrClass) -> Self {
        let base = Self {
            imm_format: ImmFormat::None,
            alu_src_imm: false,
            mem_write: false,
            reg_write: false,
            write_back: WriteBackSrc::AluResult,
            branch: false,
            jump: false,
            second_add: SecondAddSrc::Pc,
        };

        match class {
            InstrClass::Load => Self {
                imm_format: ImmFormat::I,
                alu_src_imm: true,
                reg_write: true,
                write_back: WriteBackSrc::MemoryData,
                ..base
            },
            InstrClass::Store => Self {
                imm_format: ImmFormat::S,
                alu_src_imm: true,
                mem_write: true,
                ..base
            },
            InstrClass::RegReg => Self {
                reg_write: true,
                ..base
            },
            InstrClass::RegImm => Self {
                imm_format: ImmFormat::I,
                alu_src_imm: true,
                reg_write: true,
                ..base
            },
            InstrClass::Branch => Self {
                imm_format: ImmFormat::B,
                branch: true,
                ..base
            },
            InstrClass::Jal => Self {
                imm_format: ImmFormat::J,
                reg_write: true,
                write_back: WriteBackSrc::Link,
                jump: true,
                ..base
            },
            InstrClass::Jalr => Self {
                imm_format: ImmFormat::I,
                reg_write: true,
                write_back: WriteBackSrc::Link,
                jump: true,
                second_add: SecondAddSrc::Rs1,
                ..base
            },
            InstrClass::Lui => Self {
                imm_format: ImmFormat::U,
                reg_write: true,
                write_back: WriteBackSrc::UpperImm,
                second_add: SecondAddSrc::Zero,
                ..base
            },
            InstrClass::Auipc => Self {
                imm_format: ImmFormat::U,
                reg_write: true,
                write_back: WriteBackSrc::UpperImm,
                ..base
            },
            InstrClass::Unknown => base,
        }
    }
}
