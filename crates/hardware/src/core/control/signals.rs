//! Control signals and datapath select types.
//!
//! This module defines the signals the control unit drives. It covers:
//! 1. **Operation Select:** The 4-bit ALU operation code.
//! 2. **Operand Selection:** Immediate format and ALU operand B source.
//! 3. **Write-Back and PC:** Register write-back source and next-PC source.
//! 4. **Address Adder:** Base operand for the second (target) adder.
//!
//! Each select enum carries its wire encoding as the discriminant; the
//! [`WireSignals`] view renders a whole [`ControlSignals`] bundle in that form.

use std::fmt;

use serde::Serialize;

/// ALU operation select (4-bit `alu_control` wire).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum AluOp {
    /// Addition; also address and offset computation.
    #[default]
    Add = 0b0000,

    /// Subtraction; equality comparison for BEQ/BNE.
    Sub = 0b0001,

    /// Bitwise AND.
    And = 0b0010,

    /// Bitwise OR.
    Or = 0b0011,

    /// Shift left logical.
    Sll = 0b0100,

    /// Set less than (signed).
    Slt = 0b0101,

    /// Shift right logical.
    Srl = 0b0110,

    /// Set less than unsigned.
    Sltu = 0b0111,

    /// Bitwise XOR.
    Xor = 0b1000,

    /// Shift right arithmetic.
    Sra = 0b1001,
}

impl AluOp {
    /// Every operation, in wire-code order.
    pub const ALL: [Self; 10] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Sll,
        Self::Slt,
        Self::Srl,
        Self::Sltu,
        Self::Xor,
        Self::Sra,
    ];

    /// The 4-bit wire code.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Looks up the operation driven by a 4-bit code; codes `1010`-`1111` are unused.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if (bits as usize) < Self::ALL.len() {
            Some(Self::ALL[bits as usize])
        } else {
            None
        }
    }
}

/// Immediate format select (3-bit `imm_source` wire).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum ImmFormat {
    /// `imm[11:0]` from bits 31-20.
    I = 0b000,

    /// Split store immediate.
    S = 0b001,

    /// Branch offset (even).
    B = 0b010,

    /// Jump offset (even).
    J = 0b011,

    /// Upper 20 bits.
    U = 0b100,

    /// Instruction carries no immediate.
    #[default]
    None = 0b111,
}

impl ImmFormat {
    /// The 3-bit wire code.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Register write-back source (2-bit `write_back_source` wire).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum WriteBackSrc {
    /// ALU result.
    #[default]
    AluResult = 0b00,

    /// Data read from memory.
    MemoryData = 0b01,

    /// Link address `PC + 4`.
    Link = 0b10,

    /// Second-adder result (LUI/AUIPC upper immediate).
    UpperImm = 0b11,
}

impl WriteBackSrc {
    /// The 2-bit wire code.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Next program counter source (1-bit `pc_source` wire).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum PcSrc {
    /// `PC + 4`.
    #[default]
    Sequential = 0,

    /// Branch or jump target from the second adder.
    Target = 1,
}

impl PcSrc {
    /// The 1-bit wire code.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Base operand of the second adder (2-bit `second_add_source` wire).
///
/// The second adder sums this base with the immediate to form branch/jump
/// targets and the LUI/AUIPC result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum SecondAddSrc {
    /// Program counter (branches, JAL, AUIPC).
    #[default]
    Pc = 0b00,

    /// Zero constant (LUI).
    Zero = 0b01,

    /// `rs1` register value (JALR).
    Rs1 = 0b10,
}

impl SecondAddSrc {
    /// The 2-bit wire code.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// ALU status flags fed back into the control unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct AluFlags {
    /// ALU result equals zero.
    pub zero: bool,
    /// Least-significant bit of the ALU result (the SLT/SLTU comparison outcome).
    pub last_bit: bool,
}

impl AluFlags {
    /// Builds a flag pair.
    pub const fn new(zero: bool, last_bit: bool) -> Self {
        Self { zero, last_bit }
    }

    /// All four flag combinations.
    pub const ALL: [Self; 4] = [
        Self::new(false, false),
        Self::new(false, true),
        Self::new(true, false),
        Self::new(true, true),
    ];
}

/// Control signals for one instruction.
///
/// Every field is always driven; table entries the datapath ignores carry the
/// select's default value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ControlSignals {
    /// ALU operation to perform.
    pub alu_op: AluOp,
    /// Immediate format for the sign-extension unit.
    pub imm_format: ImmFormat,
    /// Enable memory write (store).
    pub mem_write: bool,
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// ALU operand B is the immediate rather than `rs2`.
    pub alu_src_imm: bool,
    /// Source of the value written to `rd`.
    pub write_back: WriteBackSrc,
    /// Next program counter source.
    pub pc_src: PcSrc,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Instruction is an unconditional jump (`JAL`/`JALR`).
    pub jump: bool,
    /// Base operand of the second adder.
    pub second_add: SecondAddSrc,
}

impl ControlSignals {
    /// Renders the bundle as raw wire codes.
    pub fn wire(&self) -> WireSignals {
        WireSignals {
            alu_control: self.alu_op.bits(),
            imm_source: self.imm_format.bits(),
            mem_write: u8::from(self.mem_write),
            reg_write: u8::from(self.reg_write),
            alu_source: u8::from(self.alu_src_imm),
            write_back_source: self.write_back.bits(),
            pc_source: self.pc_src.bits(),
            branch: u8::from(self.branch),
            jump: u8::from(self.jump),
            second_add_source: self.second_add.bits(),
        }
    }
}

/// A [`ControlSignals`] bundle as the integer values on each wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct WireSignals {
    /// 4-bit ALU operation code.
    pub alu_control: u8,
    /// 3-bit immediate format.
    pub imm_source: u8,
    /// 1-bit memory write enable.
    pub mem_write: u8,
    /// 1-bit register write enable.
    pub reg_write: u8,
    /// 1-bit ALU operand B select.
    pub alu_source: u8,
    /// 2-bit write-back source.
    pub write_back_source: u8,
    /// 1-bit next-PC source.
    pub pc_source: u8,
    /// 1-bit branch flag.
    pub branch: u8,
    /// 1-bit jump flag.
    pub jump: u8,
    /// 2-bit second-adder base.
    pub second_add_source: u8,
}

impl fmt::Display for WireSignals {
    /// Formats each wire as a fixed-width bit string, e.g. `alu_control=0010`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alu_control={:04b} imm_source={:03b} mem_write={:01b} reg_write={:01b} \
             alu_source={:01b} write_back_source={:02b} pc_source={:01b} branch={:01b} \
             jump={:01b} second_add_source={:02b}",
            self.alu_control,
            self.imm_source,
            self.mem_write,
            self.reg_write,
            self.alu_source,
            self.write_back_source,
            self.pc_source,
            self.branch,
            self.jump,
            self.second_add_source,
        )
    }
}
