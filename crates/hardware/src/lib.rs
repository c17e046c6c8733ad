//! RISC-V RV32I single-cycle control unit.
//!
//! This crate implements the combinational decoder that steers a single-cycle
//! RV32I datapath:
//! 1. **Control:** Opcode classification, ALU-operation selection with
//!    illegal-encoding suppression, branch resolution and mux selects.
//! 2. **ISA:** RV32I encodings, field extraction, immediates and disassembly.
//! 3. **Configuration:** Decode policy for encodings RV32I leaves unassigned.
//! 4. **Statistics:** Counters over decoded instructions.
//!
//! # Examples
//!
//! ```
//! use rvctl_core::{AluFlags, ControlUnit, Fields, PcSrc};
//!
//! let unit = ControlUnit::default();
//! let beq = Fields::new(0b1100011, 0b000, 0)?;
//! let pending = unit.decode_static(beq);
//! assert_eq!(pending.resolve(AluFlags::new(false, false)).pc_src, PcSrc::Sequential);
//! assert_eq!(pending.resolve(AluFlags::new(true, false)).pc_src, PcSrc::Target);
//! # Ok::<(), rvctl_core::common::FieldError>(())
//! ```

/// Common constants and error types.
pub mod common;
/// Decoder configuration (policies, JSON loading).
pub mod config;
/// Processor core (control unit).
pub mod core;
/// Instruction set (encodings, field extraction, immediates, disassembly).
pub mod isa;
/// Decode statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// The control unit and its signal types.
pub use crate::core::control::{
    AluFlags, AluOp, ControlSignals, ControlUnit, ImmFormat, InstrClass, PcSrc, SecondAddSrc,
    StaticControl, WireSignals, WriteBackSrc,
};
/// Instruction fields consumed by the control unit.
pub use crate::isa::instruction::Fields;
/// Decode statistics.
pub use crate::stats::DecodeStats;
