//! Flag re-evaluation.
//!
//! The ALU flags settle after the instruction fields. Changing them while the
//! instruction is held must move `pc_src` for branches and nothing else.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;
use rvctl_core::isa::rv32i::opcodes;
use rvctl_core::{AluFlags, ControlSignals, Fields, PcSrc};

/// Signals with `pc_src` masked out.
fn without_pc(c: ControlSignals) -> ControlSignals {
    ControlSignals {
        pc_src: PcSrc::Sequential,
        ..c
    }
}

#[rstest]
#[case::beq(InstructionBuilder::new().beq(1, 2, 8).build(), (false, false), (true, false))]
#[case::bne(InstructionBuilder::new().bne(1, 2, 8).build(), (true, false), (false, false))]
#[case::blt(InstructionBuilder::new().blt(1, 2, 8).build(), (false, false), (false, true))]
#[case::bge(InstructionBuilder::new().bge(1, 2, 8).build(), (false, true), (false, false))]
#[case::bltu(InstructionBuilder::new().bltu(1, 2, 8).build(), (false, false), (false, true))]
#[case::bgeu(InstructionBuilder::new().bgeu(1, 2, 8).build(), (false, true), (false, false))]
fn test_flag_flip_redirects_branch(
    #[case] inst: u32,
    #[case] not_taken: (bool, bool),
    #[case] taken: (bool, bool),
) {
    let mut ctx = TestContext::new();
    let _ = ctx.load(inst).set_zero(not_taken.0).set_last_bit(not_taken.1);
    let before = ctx.signals();
    assert_eq!(before.pc_src, PcSrc::Sequential);

    let _ = ctx.set_zero(taken.0).set_last_bit(taken.1);
    let after = ctx.signals();
    assert_eq!(after.pc_src, PcSrc::Target);
    assert_eq!(without_pc(before), without_pc(after));

    // And back again.
    let _ = ctx.set_zero(not_taken.0).set_last_bit(not_taken.1);
    assert_eq!(ctx.signals(), before);
}

#[test]
fn test_resolve_matches_full_decode_for_every_input() {
    let ctx = TestContext::new();
    for opcode in 0..128 {
        for f3 in 0..8 {
            for f7 in [0, 0b0000001, 0b0100000, 0b1111111] {
                let fields = Fields::new(opcode, f3, f7).unwrap();
                let pending = ctx.unit.decode_static(fields);
                for flags in AluFlags::ALL {
                    assert_eq!(pending.resolve(flags), ctx.unit.decode(fields, flags));
                }
            }
        }
    }
}

#[test]
fn test_only_pc_src_depends_on_flags() {
    let ctx = TestContext::new();
    for opcode in 0..128 {
        for f3 in 0..8 {
            let pending = ctx.unit.decode_static(Fields::new(opcode, f3, 0).unwrap());
            let base = without_pc(pending.resolve(AluFlags::default()));
            for flags in AluFlags::ALL {
                assert_eq!(without_pc(pending.resolve(flags)), base, "op={opcode:07b} f3={f3:03b}");
            }
        }
    }
}

#[test]
fn test_jumps_redirect_regardless_of_flags() {
    let mut ctx = TestContext::new();
    for op in [opcodes::OP_JAL, opcodes::OP_JALR] {
        let _ = ctx.set_fields(op, 0, 0);
        for flags in AluFlags::ALL {
            assert_eq!(ctx.pending().resolve(flags).pc_src, PcSrc::Target);
        }
    }
}

#[test]
fn test_resolve_is_repeatable() {
    let ctx = TestContext::new();
    let pending = ctx.unit.decode_static(InstructionBuilder::new().blt(3, 4, -4).fields());
    let flags = AluFlags::new(false, true);
    let first = pending.resolve(flags);
    for _ in 0..16 {
        assert_eq!(pending.resolve(flags), first);
    }
}
