
/// Stimulus harness for the control unit.
pub mod harness;
