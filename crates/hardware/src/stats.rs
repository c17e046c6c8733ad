//! Decode statistics collection and reporting.
//!
//! This module tracks what the control unit decoded. It provides:
//! 1. **Instruction mix:** Decode counts per instruction class.
//! 2. **Legality:** Encodings decoded as illegal (register write suppressed).
//! 3. **Effects:** Register writes, memory writes and PC redirects.

use std::fmt;

use serde::Serialize;

use crate::core::control::{ControlSignals, InstrClass, PcSrc};

/// Counters over a stream of decodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    /// Total decodes recorded.
    pub decoded: u64,
    /// Decodes per class, indexed by [`InstrClass::index`].
    pub per_class: [u64; InstrClass::ALL.len()],
    /// Decodes whose encoding was illegal.
    pub illegal: u64,
    /// Decodes that enabled a register write.
    pub reg_writes: u64,
    /// Decodes that enabled a memory write.
    pub mem_writes: u64,
    /// Decodes that selected the computed PC target.
    pub redirects: u64,
}

impl DecodeStats {
    /// Creates an empty counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one decode.
    pub fn record(&mut self, class: InstrClass, legal: bool, signals: &ControlSignals) {
        self.decoded += 1;
        self.per_class[class.index()] += 1;
        if !legal {
            self.illegal += 1;
        }
        if signals.reg_write {
            self.reg_writes += 1;
        }
        if signals.mem_write {
            self.mem_writes += 1;
        }
        if signals.pc_src == PcSrc::Target {
            self.redirects += 1;
        }
    }

    /// Adds another counter set into this one.
    pub fn merge(&mut self, other: &Self) {
        self.decoded += other.decoded;
        for (mine, theirs) in self.per_class.iter_mut().zip(other.per_class.iter()) {
            *mine += theirs;
        }
        self.illegal += other.illegal;
        self.reg_writes += other.reg_writes;
        self.mem_writes += other.mem_writes;
        self.redirects += other.redirects;
    }

    /// Decode count for one class.
    pub const fn class_count(&self, class: InstrClass) -> u64 {
        self.per_class[class.index()]
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for DecodeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "RV32I CONTROL UNIT DECODE STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "decoded                  {}", self.decoded)?;
        writeln!(f, "illegal                  {}", self.illegal)?;
        writeln!(f, "reg_writes               {}", self.reg_writes)?;
        writeln!(f, "mem_writes               {}", self.mem_writes)?;
        writeln!(f, "pc_redirects             {}", self.redirects)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "CLASS MIX")?;
        for class in InstrClass::ALL {
            writeln!(
                f,
                "  {:<22} {}",
                class.name(),
                self.per_class[class.index()]
            )?;
        }
        write!(f, "----------------------------------------------------------")
    }
}
