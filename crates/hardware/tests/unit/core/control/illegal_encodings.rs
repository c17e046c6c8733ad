//! Illegal encodings.
//!
//! Shift instructions accept only funct7 `0000000` (and `0100000` for the
//! right shift); anything else keeps the ALU and mux selects but drops the
//! register write. Unassigned branch funct3 values and unrecognised opcodes
//! are covered here too.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::harness::TestContext;
use rvctl_core::isa::rv32i::{funct3, funct7, opcodes};
use rvctl_core::{AluFlags, AluOp, ControlSignals, ImmFormat, PcSrc, WriteBackSrc};

fn shift_imm(f3: u32, f7: u32) -> ControlSignals {
    let mut ctx = TestContext::new();
    let _ = ctx.set_fields(opcodes::OP_IMM, f3, f7);
    ctx.signals()
}

/// Everything an immediate shift drives apart from the op and the write enable.
fn assert_imm_shift_selects(c: &ControlSignals) {
    assert_eq!(c.imm_format, ImmFormat::I);
    assert!(!c.mem_write);
    assert!(c.alu_src_imm);
    assert_eq!(c.write_back, WriteBackSrc::AluResult);
    assert_eq!(c.pc_src, PcSrc::Sequential);
}

fn unassigned_right_shift_funct7() -> impl Strategy<Value = u32> {
    (1u32..128).prop_filter("SRA encoding is legal", |f7| *f7 != funct7::SRA)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn slli_with_unassigned_funct7_suppresses_write(f7 in 1u32..128) {
        let c = shift_imm(funct3::SLL, f7);
        prop_assert_eq!(c.alu_op, AluOp::Sll);
        prop_assert!(!c.reg_write);
        assert_imm_shift_selects(&c);
    }

    #[test]
    fn srli_with_unassigned_funct7_suppresses_write(f7 in unassigned_right_shift_funct7()) {
        let c = shift_imm(funct3::SRL_SRA, f7);
        prop_assert_eq!(c.alu_op, AluOp::Srl);
        prop_assert!(!c.reg_write);
        assert_imm_shift_selects(&c);
    }

    #[test]
    fn srai_neighbours_fall_back_to_srl(f7 in unassigned_right_shift_funct7()) {
        // Same samples as above, seen from the SRAI side: the op never latches SRA.
        let c = shift_imm(funct3::SRL_SRA, f7);
        prop_assert_ne!(c.alu_op, AluOp::Sra);
        prop_assert!(!c.reg_write);
    }

    #[test]
    fn reg_sll_with_unassigned_funct7_suppresses_write(f7 in 1u32..128) {
        let mut ctx = TestContext::new();
        let _ = ctx.set_fields(opcodes::OP_REG, funct3::SLL, f7);
        let c = ctx.signals();
        prop_assert_eq!(c.alu_op, AluOp::Sll);
        prop_assert!(!c.reg_write);
        prop_assert!(!c.alu_src_imm);
    }

    #[test]
    fn reg_srl_with_unassigned_funct7_suppresses_write(f7 in unassigned_right_shift_funct7()) {
        let mut ctx = TestContext::new();
        let _ = ctx.set_fields(opcodes::OP_REG, funct3::SRL_SRA, f7);
        let c = ctx.signals();
        prop_assert_eq!(c.alu_op, AluOp::Srl);
        prop_assert!(!c.reg_write);
    }

    #[test]
    fn illegal_shift_ignores_flags(f7 in 1u32..128, zero in any::<bool>(), last_bit in any::<bool>()) {
        let mut ctx = TestContext::new();
        let _ = ctx.set_fields(opcodes::OP_IMM, funct3::SLL, f7);
        let at_rest = ctx.signals();
        let _ = ctx.set_zero(zero).set_last_bit(last_bit);
        prop_assert_eq!(ctx.signals(), at_rest);
    }
}

#[test]
fn test_every_slli_funct7_exhaustively() {
    for f7 in 0..128 {
        let c = shift_imm(funct3::SLL, f7);
        assert_eq!(c.alu_op, AluOp::Sll, "f7={f7:07b}");
        assert_eq!(c.reg_write, f7 == funct7::DEFAULT, "f7={f7:07b}");
        assert_imm_shift_selects(&c);
    }
}

#[test]
fn test_every_right_shift_funct7_exhaustively() {
    for f7 in 0..128 {
        let c = shift_imm(funct3::SRL_SRA, f7);
        let expected = if f7 == funct7::SRA {
            AluOp::Sra
        } else {
            AluOp::Srl
        };
        assert_eq!(c.alu_op, expected, "f7={f7:07b}");
        assert_eq!(
            c.reg_write,
            f7 == funct7::DEFAULT || f7 == funct7::SRA,
            "f7={f7:07b}"
        );
    }
}

#[test]
fn test_illegal_srai_does_not_depend_on_history() {
    let mut ctx = TestContext::new();

    let _ = ctx.set_fields(opcodes::OP_IMM, funct3::SRL_SRA, funct7::SRA);
    assert_eq!(ctx.signals().alu_op, AluOp::Sra);

    let _ = ctx.set_fields(opcodes::OP_IMM, funct3::SRL_SRA, 0b0100001);
    let after_srai = ctx.signals();

    let _ = ctx.set_fields(opcodes::OP_IMM, funct3::ADD_SUB, 0);
    let _ = ctx.set_fields(opcodes::OP_IMM, funct3::SRL_SRA, 0b0100001);
    let after_addi = ctx.signals();

    assert_eq!(after_srai, after_addi);
    assert_eq!(after_srai.alu_op, AluOp::Srl);
    assert!(!after_srai.reg_write);
}

#[test]
fn test_unassigned_branch_funct3_never_redirects() {
    let mut ctx = TestContext::new();
    for f3 in [0b010, 0b011] {
        let _ = ctx.set_fields(opcodes::OP_BRANCH, f3, 0);
        assert!(!ctx.pending().legal());
        for flags in AluFlags::ALL {
            let c = ctx.pending().resolve(flags);
            assert!(c.branch);
            assert!(!c.reg_write);
            assert_eq!(c.alu_op, AluOp::Sub);
            assert_eq!(c.pc_src, PcSrc::Sequential, "f3={f3:03b} {flags:?}");
        }
    }
}

#[test]
fn test_unknown_opcode_is_inert() {
    let mut ctx = TestContext::new();
    // FENCE, SYSTEM, and an opcode from the custom space.
    for op in [0b0001111, 0b1110011, 0b0001011, 0b0000000, 0b1111111] {
        for f3 in 0..8 {
            let _ = ctx.set_fields(op, f3, 0b0100000);
            let pending = ctx.pending();
            assert!(!pending.legal());
            for flags in AluFlags::ALL {
                let c = pending.resolve(flags);
                assert_eq!(c, ControlSignals::default(), "op={op:07b} f3={f3:03b}");
            }
        }
    }
}
