//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the RV32I base encodings, field extraction, the sign-extension
//! unit and a disassembler.

/// Instruction word decoding and immediate extraction.
pub mod decode;

/// Instruction disassembler for decode tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;
