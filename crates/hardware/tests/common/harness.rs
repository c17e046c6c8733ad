use rvctl_core::config::{Config, Funct7Policy};
use rvctl_core::{AluFlags, ControlSignals, ControlUnit, Fields, StaticControl, WireSignals};

/// Drives the control unit the way a testbench drives the combinational block:
/// inputs are set one at a time and the outputs are re-evaluated after each change.
pub struct TestContext {
    pub unit: ControlUnit,
    pub fields: Fields,
    pub flags: AluFlags,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();

        Self {
            unit: ControlUnit::new(config),
            fields: Fields::default(),
            flags: AluFlags::default(),
        }
    }

    pub fn with_policy(policy: Funct7Policy) -> Self {
        let mut config = Config::default();
        config.decode.reg_funct7 = policy;
        Self::with_config(&config)
    }

    /// Presents a raw instruction word.
    pub fn load(&mut self, inst: u32) -> &mut Self {
        self.fields = Fields::from_word(inst);
        self
    }

    /// Presents explicit field values.
    pub fn set_fields(&mut self, opcode: u32, funct3: u32, funct7: u32) -> &mut Self {
        self.fields = Fields::new(opcode, funct3, funct7).expect("field out of range");
        self
    }

    pub fn set_zero(&mut self, zero: bool) -> &mut Self {
        self.flags.zero = zero;
        self
    }

    pub fn set_last_bit(&mut self, last_bit: bool) -> &mut Self {
        self.flags.last_bit = last_bit;
        self
    }

    pub fn pending(&self) -> StaticControl {
        self.unit.decode_static(self.fields)
    }

    /// Current outputs for the current inputs.
    pub fn signals(&self) -> ControlSignals {
        self.unit.decode(self.fields, self.flags)
    }

    pub fn wire(&self) -> WireSignals {
        self.signals().wire()
    }
}
