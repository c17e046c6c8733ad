//! Single-cycle control unit.
//!
//! The control unit is a combinational function of five inputs: opcode,
//! funct3, funct7 and the two ALU status flags. It is split the way the
//! hardware is:
//! 1. **Classifier:** opcode to [`InstrClass`].
//! 2. **ALU Selector:** (class, funct3, funct7) to [`AluOp`] plus legality.
//! 3. **Branch Resolver:** branch funct3 and live flags to taken/not-taken.
//! 4. **Mux Generator:** class to the remaining datapath selects.
//!
//! Decoding happens in two phases. [`ControlUnit::decode_static`] computes
//! everything that depends on the instruction alone; [`StaticControl::resolve`]
//! folds in the flags, which arrive later in the same cycle from the ALU.
//! Resolving the same [`StaticControl`] again with new flags is how a flag
//! change within one instruction is observed.

/// ALU-operation selection and legality.
pub mod alu_decoder;

/// Branch-condition resolution against the ALU flags.
pub mod branch;

/// Opcode to instruction-class mapping.
pub mod classify;

/// Class-determined datapath selects.
pub mod mux;

/// Control signal and select types.
pub mod signals;

use crate::config::{Config, DecodeConfig};
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Fields;

pub use alu_decoder::AluDecision;
pub use branch::{BranchCond, resolve_branch};
pub use classify::InstrClass;
pub use mux::MuxSelects;
pub use signals::{
    AluFlags, AluOp, ControlSignals, ImmFormat, PcSrc, SecondAddSrc, WireSignals, WriteBackSrc,
};

/// The flag-independent half of a decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticControl {
    /// Fields the decode was computed from.
    pub fields: Fields,
    /// Instruction class.
    pub class: InstrClass,
    /// Selected ALU operation and legality.
    pub alu: AluDecision,
    /// Class-determined selects.
    pub selects: MuxSelects,
}

impl StaticControl {
    /// Whether the encoding is legal.
    pub const fn legal(&self) -> bool {
        self.alu.legal
    }

    /// Completes the decode with the current ALU flags.
    ///
    /// `reg_write` is gated by legality; `pc_src` selects the target for
    /// jumps and for branches whose condition holds under `flags`.
    pub const fn resolve(&self, flags: AluFlags) -> ControlSignals {
        let s = self.selects;
        let taken = resolve_branch(self.class, self.fields.funct3(), flags);
        let pc_src = if s.jump || (s.branch && taken) {
            PcSrc::Target
        } else {
            PcSrc::Sequential
        };

        ControlSignals {
            alu_op: self.alu.op,
            imm_format: s.imm_format,
            mem_write: s.mem_write,
            reg_write: s.reg_write && self.alu.legal,
            alu_src_imm: s.alu_src_imm,
            write_back: s.write_back,
            pc_src,
            branch: s.branch,
            jump: s.jump,
            second_add: s.second_add,
        }
    }
}

/// The control unit.
///
/// Holds only its immutable policy, so one instance can be shared freely
/// across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlUnit {
    config: DecodeConfig,
}

impl ControlUnit {
    /// Creates a control unit with the decode policy from `config`.
    pub const fn new(config: &Config) -> Self {
        Self {
            config: config.decode,
        }
    }

    /// The decode policy in effect.
    pub const fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Decodes everything that does not depend on the ALU flags.
    pub fn decode_static(&self, fields: Fields) -> StaticControl {
        let class = InstrClass::from_opcode(fields.opcode());
        let alu = alu_decoder::select(
            class,
            fields.funct3(),
            fields.funct7(),
            self.config.reg_funct7,
        );
        let selects = MuxSelects::for_class(class);

        tracing::trace!(
            opcode = fields.opcode(),
            funct3 = fields.funct3(),
            funct7 = fields.funct7(),
            class = class.name(),
            alu_op = ?alu.op,
            "static decode"
        );
        if !alu.legal {
            tracing::debug!(
                class = class.name(),
                "illegal encoding op={:07b} funct3={:03b} funct7={:07b}, register write suppressed",
                fields.opcode(),
                fields.funct3(),
                fields.funct7(),
            );
        }

        StaticControl {
            fields,
            class,
            alu,
            selects,
        }
    }

    /// Decodes the fields against the current ALU flags.
    pub fn decode(&self, fields: Fields, flags: AluFlags) -> ControlSignals {
        self.decode_static(fields).resolve(flags)
    }

    /// Decodes a raw 32-bit instruction word against the current ALU flags.
    pub fn decode_word(&self, inst: u32, flags: AluFlags) -> ControlSignals {
        tracing::trace!(asm = %disassemble(inst), "decode word {inst:#010x}");
        self.decode(Fields::from_word(inst), flags)
    }
}

/// Decodes with the default policy. See [`ControlUnit::decode_static`].
pub fn decode_static(fields: Fields) -> StaticControl {
    ControlUnit::default().decode_static(fields)
}

/// Decodes with the default policy. See [`ControlUnit::decode`].
///
/// # Examples
///
/// ```
/// use rvctl_core::core::control::{decode, AluFlags, AluOp, WriteBackSrc};
/// use rvctl_core::isa::instruction::Fields;
///
/// let and = Fields::new(0b0110011, 0b111, 0b0000000)?;
/// let c = decode(and, AluFlags::default());
/// assert_eq!(c.alu_op, AluOp::And);
/// assert!(c.reg_write);
/// assert!(!c.alu_src_imm);
/// assert_eq!(c.write_back, WriteBackSrc::AluResult);
/// # Ok::<(), rvctl_core::common::FieldError>(())
/// ```
pub fn decode(fields: Fields, flags: AluFlags) -> ControlSignals {
    ControlUnit::default().decode(fields, flags)
}
