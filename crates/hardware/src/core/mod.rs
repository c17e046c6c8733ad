//! Processor core logic.
//!
//! Only the control path lives here; the datapath (register file, ALU,
//! memories) is external and consumes the signals this module produces.

/// Combinational control unit (classifier, ALU selector, branch resolver, mux generator).
pub mod control;

pub use control::ControlUnit;
