//! RV32I control unit CLI.
//!
//! This binary drives the control unit from the command line. It performs:
//! 1. **Word decode:** Decode a raw 32-bit instruction word against given ALU flags.
//! 2. **Field decode:** Decode explicit opcode/funct3/funct7 values.
//! 3. **Table:** Print the reference control table for every RV32I instruction.
//! 4. **Sweep:** Decode the whole field and flag space, check the signal invariants and report statistics.

use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use rvctl_core::config::Config;
use rvctl_core::core::control::{AluFlags, ControlSignals, ControlUnit, InstrClass, PcSrc};
use rvctl_core::common::constants::{FUNCT3_SPACE, FUNCT7_SPACE, OPCODE_SPACE};
use rvctl_core::isa::disasm::disassemble;
use rvctl_core::isa::instruction::Fields;
use rvctl_core::isa::rv32i::{funct3 as f3, funct7 as f7, opcodes as op};
use rvctl_core::stats::DecodeStats;

#[derive(Parser, Debug)]
#[command(
    name = "rvctl",
    author,
    version,
    about = "RV32I single-cycle control unit",
    long_about = "Decode RV32I instructions into datapath control signals.\n\nNumbers accept 0b, 0x or decimal notation.\n\nExamples:\n  rvctl decode 0x00208063 --zero\n  rvctl fields --opcode 0b0010011 --funct3 0b101 --funct7 0b0100000\n  rvctl table --json\n  rvctl sweep"
)]
struct Cli {
    /// JSON configuration file (decode policy).
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a raw 32-bit instruction word.
    Decode {
        /// Instruction word.
        #[arg(value_parser = parse_number)]
        word: u32,

        #[command(flatten)]
        flags: FlagArgs,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Decode explicit opcode/funct3/funct7 values.
    Fields {
        /// 7-bit opcode.
        #[arg(long, value_parser = parse_number)]
        opcode: u32,

        /// 3-bit funct3.
        #[arg(long, value_parser = parse_number, default_value = "0")]
        funct3: u32,

        /// 7-bit funct7.
        #[arg(long, value_parser = parse_number, default_value = "0")]
        funct7: u32,

        #[command(flatten)]
        flags: FlagArgs,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the control table for every RV32I instruction.
    Table {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Decode every opcode/funct3/funct7/flag combination and check the signal invariants.
    Sweep,
}

#[derive(clap::Args, Debug, Clone, Copy)]
struct FlagArgs {
    /// ALU zero flag.
    #[arg(long)]
    zero: bool,

    /// ALU last-bit (comparison) flag.
    #[arg(long)]
    last_bit: bool,
}

impl From<FlagArgs> for AluFlags {
    fn from(args: FlagArgs) -> Self {
        Self::new(args.zero, args.last_bit)
    }
}

/// One line of decode output.
#[derive(Serialize, Debug)]
struct Report {
    mnemonic: String,
    fields: Fields,
    class: InstrClass,
    legal: bool,
    flags: AluFlags,
    signals: ControlSignals,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading config {path}: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    let unit = ControlUnit::new(&config);
    tracing::debug!(policy = ?unit.config().reg_funct7, "control unit ready");

    match cli.command {
        Commands::Decode { word, flags, json } => {
            let report = report(&unit, Fields::from_word(word), disassemble(word), flags.into());
            emit(&[report], json);
        }
        Commands::Fields {
            opcode,
            funct3,
            funct7,
            flags,
            json,
        } => {
            let fields = Fields::new(opcode, funct3, funct7).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                process::exit(1);
            });
            let word = (fields.funct7() << 25) | (fields.funct3() << 12) | fields.opcode();
            let report = report(&unit, fields, disassemble(word), flags.into());
            emit(&[report], json);
        }
        Commands::Table { json } => cmd_table(&unit, json),
        Commands::Sweep => cmd_sweep(&unit),
    }
}

/// Parses `0b`/`0x`-prefixed or decimal numbers.
fn parse_number(s: &str) -> Result<u32, String> {
    let s = s.replace('_', "");
    let parsed = if let Some(bin) = s.strip_prefix("0b") {
        u32::from_str_radix(bin, 2)
    } else if let Some(hex) = s.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid number '{s}': {e}"))
}

fn report(unit: &ControlUnit, fields: Fields, mnemonic: String, flags: AluFlags) -> Report {
    let pending = unit.decode_static(fields);
    Report {
        mnemonic,
        fields,
        class: pending.class,
        legal: pending.legal(),
        flags,
        signals: pending.resolve(flags),
    }
}

fn emit(reports: &[Report], json: bool) {
    if json {
        match serde_json::to_string_pretty(reports) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing output: {e}");
                process::exit(1);
            }
        }
        return;
    }

    for r in reports {
        println!(
            "{:<22} op={:07b} f3={:03b} f7={:07b} zero={} last_bit={} {}{}",
            r.mnemonic,
            r.fields.opcode(),
            r.fields.funct3(),
            r.fields.funct7(),
            u8::from(r.flags.zero),
            u8::from(r.flags.last_bit),
            r.signals.wire(),
            if r.legal { "" } else { "  [illegal]" },
        );
    }
}

/// Reference encodings: (mnemonic, opcode, funct3, funct7).
const REFERENCE: &[(&str, u32, u32, u32)] = &[
    ("lw", op::OP_LOAD, f3::LW, 0),
    ("sw", op::OP_STORE, f3::SW, 0),
    ("add", op::OP_REG, f3::ADD_SUB, f7::DEFAULT),
    ("sub", op::OP_REG, f3::ADD_SUB, f7::SUB),
    ("sll", op::OP_REG, f3::SLL, f7::DEFAULT),
    ("slt", op::OP_REG, f3::SLT, f7::DEFAULT),
    ("sltu", op::OP_REG, f3::SLTU, f7::DEFAULT),
    ("xor", op::OP_REG, f3::XOR, f7::DEFAULT),
    ("srl", op::OP_REG, f3::SRL_SRA, f7::DEFAULT),
    ("sra", op::OP_REG, f3::SRL_SRA, f7::SRA),
    ("or", op::OP_REG, f3::OR, f7::DEFAULT),
    ("and", op::OP_REG, f3::AND, f7::DEFAULT),
    ("addi", op::OP_IMM, f3::ADD_SUB, 0),
    ("slti", op::OP_IMM, f3::SLT, 0),
    ("sltiu", op::OP_IMM, f3::SLTU, 0),
    ("xori", op::OP_IMM, f3::XOR, 0),
    ("ori", op::OP_IMM, f3::OR, 0),
    ("andi", op::OP_IMM, f3::AND, 0),
    ("slli", op::OP_IMM, f3::SLL, f7::DEFAULT),
    ("srli", op::OP_IMM, f3::SRL_SRA, f7::DEFAULT),
    ("srai", op::OP_IMM, f3::SRL_SRA, f7::SRA),
    ("beq", op::OP_BRANCH, f3::BEQ, 0),
    ("bne", op::OP_BRANCH, f3::BNE, 0),
    ("blt", op::OP_BRANCH, f3::BLT, 0),
    ("bge", op::OP_BRANCH, f3::BGE, 0),
    ("bltu", op::OP_BRANCH, f3::BLTU, 0),
    ("bgeu", op::OP_BRANCH, f3::BGEU, 0),
    ("jal", op::OP_JAL, 0, 0),
    ("jalr", op::OP_JALR, f3::JALR, 0),
    ("lui", op::OP_LUI, 0, 0),
    ("auipc", op::OP_AUIPC, 0, 0),
];

fn cmd_table(unit: &ControlUnit, json: bool) {
    let mut reports = Vec::new();
    for &(name, opcode, funct3, funct7) in REFERENCE {
        let Ok(fields) = Fields::new(opcode, funct3, funct7) else {
            continue;
        };
        let flag_sets: &[AluFlags] = if opcode == op::OP_BRANCH {
            &AluFlags::ALL
        } else {
            &AluFlags::ALL[..1]
        };
        for &flags in flag_sets {
            reports.push(report(unit, fields, name.to_string(), flags));
        }
    }
    emit(&reports, json);
}

fn cmd_sweep(unit: &ControlUnit) {
    let mut stats = DecodeStats::new();
    let mut violations = 0u64;

    for opcode in 0..OPCODE_SPACE {
        for funct3 in 0..FUNCT3_SPACE {
            for funct7 in 0..FUNCT7_SPACE {
                let Ok(fields) = Fields::new(opcode, funct3, funct7) else {
                    continue;
                };
                let pending = unit.decode_static(fields);
                for flags in AluFlags::ALL {
                    let c = pending.resolve(flags);
                    stats.record(pending.class, pending.legal(), &c);
                    if let Some(reason) = violation(pending.legal(), &c, flags, fields) {
                        violations += 1;
                        tracing::error!(
                            "invariant violated ({reason}): op={opcode:07b} f3={funct3:03b} f7={funct7:07b} {flags:?}"
                        );
                    }
                }
            }
        }
    }

    stats.print();
    if violations > 0 {
        eprintln!("[!] {violations} invariant violations");
        process::exit(1);
    }
    println!("[*] all invariants hold");
}

/// Checks the invariants every decode must satisfy.
fn violation(
    legal: bool,
    c: &ControlSignals,
    flags: AluFlags,
    fields: Fields,
) -> Option<&'static str> {
    let taken = rvctl_core::core::control::resolve_branch(
        InstrClass::from_opcode(fields.opcode()),
        fields.funct3(),
        flags,
    );
    let expect_target = c.jump || (c.branch && taken);
    if (c.pc_src == PcSrc::Target) != expect_target {
        return Some("pc source");
    }
    if !legal && c.reg_write {
        return Some("illegal encoding writes a register");
    }
    if c.branch && c.jump {
        return Some("branch and jump both set");
    }
    None
}
