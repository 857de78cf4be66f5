//! End-to-end block translation tests.
//!
//! Each test feeds machine code (little-endian bytes) into the translator
//! and asserts on the recorded IR stream: which guest registers are
//! written, which memory ops appear, and how blocks end. Single-step mode
//! is used to isolate one instruction where the instruction itself does
//! not end the block.

use cpu_tricore::{CpuTriCore, Feature, TranslationBlock, Translator};
use tricore_ir::{Cond, Helper, IrBuilder, MemOp, Op, Reg};

/// Translate `code` placed at `pc`, returning everything the assertions
/// need.
fn translate_with(
    cpu: &CpuTriCore,
    pc: u32,
    code: &[u8],
    singlestep: bool,
) -> (Translator, IrBuilder, TranslationBlock) {
    let mut ir = IrBuilder::new();
    let translator = Translator::new(&mut ir);
    let mut mem = vec![0u8; pc as usize];
    mem.extend_from_slice(code);
    let mut tb = TranslationBlock::new(pc);
    tb.singlestep = singlestep;
    translator.translate_block(cpu, mem.as_slice(), &mut tb, &mut ir);
    (translator, ir, tb)
}

fn translate(pc: u32, code: &[u8], singlestep: bool) -> (Translator, IrBuilder, TranslationBlock) {
    translate_with(&CpuTriCore::new(), pc, code, singlestep)
}

/// The register an op writes, if any.
fn dest(op: &Op) -> Option<Reg> {
    match *op {
        Op::Mov { d, .. }
        | Op::Movi { d, .. }
        | Op::Add { d, .. }
        | Op::Addi { d, .. }
        | Op::Sub { d, .. }
        | Op::Neg { d, .. }
        | Op::Not { d, .. }
        | Op::And { d, .. }
        | Op::Andi { d, .. }
        | Op::Or { d, .. }
        | Op::Ori { d, .. }
        | Op::Xor { d, .. }
        | Op::Xori { d, .. }
        | Op::Andc { d, .. }
        | Op::Orc { d, .. }
        | Op::Nand { d, .. }
        | Op::Nor { d, .. }
        | Op::Eqv { d, .. }
        | Op::Shl { d, .. }
        | Op::Shli { d, .. }
        | Op::Shr { d, .. }
        | Op::Shri { d, .. }
        | Op::Sar { d, .. }
        | Op::Sari { d, .. }
        | Op::Rem { d, .. }
        | Op::Setcond { d, .. }
        | Op::Setcondi { d, .. }
        | Op::Movcond { d, .. }
        | Op::Deposit { d, .. }
        | Op::Ld { d, .. } => Some(d),
        Op::CallHelper { ret, .. } => ret,
        _ => None,
    }
}

fn writes_to(ops: &[Op], r: Reg) -> bool {
    ops.iter().any(|op| dest(op) == Some(r))
}

// === Decode-length classification ===

#[test]
fn nop_is_16_bit_and_advances_pc_by_2() {
    // 0x0000 = SR NOP; single-step saves next_pc before exiting.
    let (tr, ir, tb) = translate(0x1000, &[0x00, 0x00], true);
    assert_eq!(tb.icount, 1);
    assert!(
        ir.ops()
            .contains(&Op::Movi { d: tr.regs.pc, value: 0x1002 })
    );
}

#[test]
fn lea_is_32_bit_and_advances_pc_by_4() {
    // LEA A1, 0x0: primary opcode 0xc5 has bit 0 set.
    let (tr, ir, tb) = translate(0x1000, &[0xc5, 0x01, 0x00, 0x00], true);
    assert_eq!(tb.icount, 1);
    assert!(
        ir.ops()
            .contains(&Op::Movi { d: tr.regs.pc, value: 0x1004 })
    );
}

// === Scenario: short ADD (SRR) ===

#[test]
fn srr_add_writes_destination_and_all_arith_flags() {
    // ADD D1, D2 (op1 0x42, S1D=1, S2=2).
    let (tr, ir, _) = translate(0x1000, &[0x42, 0x21], true);
    let ops = ir.ops();

    let d1 = tr.regs.gpr_d[1];
    let d2 = tr.regs.gpr_d[2];
    assert!(
        ops.iter()
            .any(|op| matches!(*op, Op::Add { a, b, .. } if a == d1 && b == d2))
    );
    assert!(ops.iter().any(|op| matches!(*op, Op::Mov { d, .. } if d == d1)));

    // Flag discipline: all four of V/SV/AV/SAV written, C untouched.
    assert!(writes_to(ops, tr.regs.psw_v));
    assert!(writes_to(ops, tr.regs.psw_sv));
    assert!(writes_to(ops, tr.regs.psw_av));
    assert!(writes_to(ops, tr.regs.psw_sav));
    assert!(!writes_to(ops, tr.regs.psw_c));

    // No spurious guest register writes.
    for r in 0..16 {
        if r != 1 {
            assert!(!writes_to(ops, tr.regs.gpr_d[r]), "spurious write to d{r}");
        }
        assert!(!writes_to(ops, tr.regs.gpr_a[r]), "spurious write to a{r}");
    }
}

#[test]
fn srr_mul_writes_all_arith_flags_but_not_carry() {
    // MUL D1, D2 (op1 0xe2).
    let (tr, ir, _) = translate(0x1000, &[0xe2, 0x21], true);
    let ops = ir.ops();
    assert!(ops.iter().any(|op| matches!(op, Op::Muls2 { .. })));
    assert!(writes_to(ops, tr.regs.psw_v));
    assert!(writes_to(ops, tr.regs.psw_sv));
    assert!(writes_to(ops, tr.regs.psw_av));
    assert!(writes_to(ops, tr.regs.psw_sav));
    assert!(!writes_to(ops, tr.regs.psw_c));
}

// === Scenario: unconditional 16-bit J ===

#[test]
fn sb_j_chains_to_target_on_same_page() {
    // J disp8=2 at 0x1000 → target 0x1004.
    let (tr, ir, tb) = translate(0x1000, &[0x3c, 0x02], false);
    assert_eq!(
        ir.ops(),
        &[
            Op::GotoTb { slot: 0 },
            Op::Movi { d: tr.regs.pc, value: 0x1004 },
            Op::ExitTb { link: 1 },
        ]
    );
    assert_eq!(tb.size, 2);
    assert_eq!(tb.icount, 1);
}

#[test]
fn sb_j_does_not_chain_across_pages() {
    // J disp8=2 at 0x3ffe → target 0x4002 lies on the next 16 KiB page.
    let (tr, ir, _) = translate(0x3ffe, &[0x3c, 0x02], false);
    assert_eq!(
        ir.ops(),
        &[
            Op::Movi { d: tr.regs.pc, value: 0x4002 },
            Op::ExitTb { link: 0 },
        ]
    );
}

#[test]
fn sb_j_does_not_chain_in_singlestep_mode() {
    let (_, ir, _) = translate(0x1000, &[0x3c, 0x02], true);
    assert!(!ir.ops().iter().any(|op| matches!(op, Op::GotoTb { .. })));
}

#[test]
fn sb_call_saves_return_address_then_jumps() {
    // CALL disp8=4 at 0x1000: helper gets next_pc 0x1002, target 0x1008.
    let (tr, ir, _) = translate(0x1000, &[0x5c, 0x04], false);
    let ops = ir.ops();
    let call_at = ops
        .iter()
        .position(|op| matches!(op, Op::CallHelper { func: Helper::Call, .. }))
        .expect("call helper emitted");
    assert!(matches!(ops[call_at - 1], Op::Movi { value: 0x1002, .. }));
    assert!(
        ops.contains(&Op::Movi { d: tr.regs.pc, value: 0x1008 })
    );
}

// === Scenario: LD.W with post-increment (SLR) ===

#[test]
fn slr_ld_w_postinc_loads_then_bumps_base() {
    // LD.W D1, [A2+] (op1 0x44, D=1, S2=2).
    let (tr, ir, _) = translate(0x2000, &[0x44, 0x21], true);
    let ops = ir.ops();

    let d1 = tr.regs.gpr_d[1];
    let a2 = tr.regs.gpr_a[2];
    // The load is issued as a sign-extended half-word access (known
    // translator anomaly, kept as-is).
    let ld = ops
        .iter()
        .position(|op| matches!(*op, Op::Ld { d, addr, op: MemOp::S16, .. } if d == d1 && addr == a2))
        .expect("load emitted");
    let bump = ops
        .iter()
        .position(|op| matches!(*op, Op::Addi { d, a, value: 4 } if d == a2 && a == a2))
        .expect("post-increment emitted");
    assert!(ld < bump, "post-increment must follow the access");
}

// === Scenario: LDMST absolute ===

#[test]
fn abs_ldmst_loads_merges_stores() {
    // LDMST 0x30000010, E0 (op1 0xe5, op2 1, off18 0xc010).
    let (tr, ir, _) = translate(0x1000, &[0xe5, 0x30, 0x10, 0x04], true);
    let ops = ir.ops();

    assert!(ops.contains(&Op::Movi { d: dest(&ops[0]).expect("ea const"), value: 0x3000_0010 }));

    let value = tr.regs.gpr_d[0];
    let mask = tr.regs.gpr_d[1];
    let ld = ops
        .iter()
        .position(|op| matches!(op, Op::Ld { op: MemOp::U32, .. }))
        .expect("memory read");
    let st = ops
        .iter()
        .position(|op| matches!(op, Op::St { op: MemOp::U32, .. }))
        .expect("memory write");
    assert!(ld < st, "load-modify-store order");

    // Same effective address for both halves.
    let (Op::Ld { addr: ld_addr, .. }, Op::St { addr: st_addr, .. }) = (&ops[ld], &ops[st]) else {
        unreachable!();
    };
    assert_eq!(ld_addr, st_addr);

    // Merge: (mem & !E0.hi) | (E0.lo & E0.hi).
    assert!(ops.iter().any(|op| matches!(*op, Op::Andc { b, .. } if b == mask)));
    assert!(ops.iter().any(|op| matches!(*op, Op::And { a, b, .. } if a == value && b == mask)));
}

// === Scenario: LOOP ===

#[test]
fn sbr_loop_decrements_and_biases_target() {
    // LOOP A2, disp4=5 at 0x1000 → taken target 0x1000 + 10 - 32 = 0x0fea.
    let (tr, ir, _) = translate(0x1000, &[0xfc, 0x25], false);
    let ops = ir.ops();

    let a2 = tr.regs.gpr_a[2];
    assert!(ops.contains(&Op::Addi { d: a2, a: a2, value: -1 }));
    assert!(
        ops.iter()
            .any(|op| matches!(*op, Op::Brcondi { cond: Cond::Eq, a, value: -1, .. } if a == a2))
    );
    // Loop-taken exit and fall-through exit.
    assert!(ops.contains(&Op::Movi { d: tr.regs.pc, value: 0x0fea }));
    assert!(ops.contains(&Op::Movi { d: tr.regs.pc, value: 0x1002 }));
}

// === Scenario: SHA with positive count ===

#[test]
fn src_sha_by_4_sets_carry_mask_and_overflow_bounds() {
    // SHA D1, #4 (op1 0x86, S1D=1, const4=4).
    let (tr, ir, _) = translate(0x1000, &[0x86, 0x41], true);
    let ops = ir.ops();

    let d1 = tr.regs.gpr_d[1];
    // C takes the four bits that get shifted out.
    assert!(
        ops.iter()
            .any(|op| matches!(*op, Op::Andi { d, a, value: 0xf000_0000 } if d == tr.regs.psw_c && a == d1))
    );
    // Overflow bounds 0x7fffffff >> 4 and i32::MIN >> 4.
    assert!(ops.iter().any(|op| matches!(op, Op::Movi { value: 0x07ff_ffff, .. })));
    assert!(ops.iter().any(|op| matches!(op, Op::Movi { value: 0xf800_0000, .. })));
    assert!(ops.iter().any(|op| matches!(op, Op::Setcond { cond: Cond::Gt, .. })));
    assert!(ops.iter().any(|op| matches!(op, Op::Setcond { cond: Cond::Lt, .. })));
    // The shift itself, and the sticky updates.
    assert!(ops.contains(&Op::Shli { d: d1, a: d1, count: 4 }));
    assert!(writes_to(ops, tr.regs.psw_sv));
    assert!(writes_to(ops, tr.regs.psw_av));
    assert!(writes_to(ops, tr.regs.psw_sav));
}

// === Paired-register atomicity ===

#[test]
fn abs_ld_d_is_one_64_bit_access() {
    // LD.D E0, 0x0 (op1 0x85, op2 1, S1D=0).
    let (tr, ir, _) = translate(0x1000, &[0x85, 0x00, 0x00, 0x04], true);
    let ops = ir.ops();
    assert_eq!(
        ops.iter().filter(|op| matches!(op, Op::Ld64 { .. })).count(),
        1
    );
    assert!(!ops.iter().any(|op| matches!(op, Op::Ld { .. })));
    assert!(
        ops.iter()
            .any(|op| matches!(*op, Op::Extract { lo, hi, .. } if lo == tr.regs.gpr_d[0] && hi == tr.regs.gpr_d[1]))
    );
}

#[test]
fn circular_ld_d_wraps_each_half_independently() {
    // LD.D E0, [A4/A5+c]8 (major 0x29, op2 0x15, S2=4, off10=8).
    let (tr, ir, _) = translate(0x1000, &[0x29, 0x40, 0x48, 0x05], true);
    let ops = ir.ops();

    // Two independent 32-bit halves, never a 64-bit op.
    assert_eq!(
        ops.iter().filter(|op| matches!(op, Op::Ld { op: MemOp::U32, .. })).count(),
        2
    );
    assert!(!ops.iter().any(|op| matches!(op, Op::Ld64 { .. })));
    // index' = (index + 4) mod length for the second half.
    assert!(ops.iter().any(|op| matches!(op, Op::Addi { value: 4, .. })));
    assert!(ops.iter().any(|op| matches!(op, Op::Rem { .. })));
    // One circular update of A5 at the end.
    let a5 = tr.regs.gpr_a[5];
    assert_eq!(
        ops.iter()
            .filter(|op| matches!(op, Op::CallHelper { func: Helper::CircUpdate, ret, .. } if *ret == Some(a5)))
            .count(),
        1
    );
}

// === ADDSC.A 6-bit opcode handling ===

#[test]
fn srrs_addsc_a_matches_through_6_bit_mask() {
    // ADDSC.A A1, A2, D15 << 1: major byte 0x50 (low six bits 0x10, n=1).
    let (tr, ir, _) = translate(0x1000, &[0x50, 0x21], true);
    let ops = ir.ops();
    let d15 = tr.regs.gpr_d[15];
    assert!(ops.iter().any(|op| matches!(*op, Op::Shli { a, count: 1, .. } if a == d15)));
    assert!(
        ops.iter()
            .any(|op| matches!(*op, Op::Add { d, a, .. } if d == tr.regs.gpr_a[1] && a == tr.regs.gpr_a[2]))
    );
}

// === Returns and exceptions ===

#[test]
fn sr_ret_calls_helper_and_exits_unchained() {
    // RET (SR system group, op2 9).
    let (_, ir, tb) = translate(0x1000, &[0x00, 0x90], false);
    let ops = ir.ops();
    assert!(
        ops.iter()
            .any(|op| matches!(op, Op::CallHelper { func: Helper::Ret, .. }))
    );
    assert_eq!(ops.last(), Some(&Op::ExitTb { link: 0 }));
    assert_eq!(tb.size, 2);
}

#[test]
fn sr_rfe_calls_helper_and_exits_unchained() {
    let (_, ir, _) = translate(0x1000, &[0x00, 0x80], false);
    assert!(
        ir.ops()
            .iter()
            .any(|op| matches!(op, Op::CallHelper { func: Helper::Rfe, .. }))
    );
}

#[test]
fn sr_debug_raises_debug_exception() {
    let (tr, ir, _) = translate(0x1000, &[0x00, 0xa0], false);
    let ops = ir.ops();
    assert!(
        ops.iter()
            .any(|op| matches!(op, Op::CallHelper { func: Helper::Debug, .. }))
    );
    // PC is written back before the exit.
    assert!(ops.contains(&Op::Movi { d: tr.regs.pc, value: 0x1002 }));
    assert_eq!(ops.last(), Some(&Op::ExitTb { link: 0 }));
}

#[test]
fn cachei_w_postinc_updates_register_before_1_3() {
    // CACHEI.W [D3+]8 (major 0x89, op2 0x0b, S2=3, off10=8).
    let code = [0x89, 0x30, 0xc8, 0x02];
    let (tr, ir, _) = translate(0x1000, &code, true);
    let d3 = tr.regs.gpr_d[3];
    assert!(ir.ops().contains(&Op::Addi { d: d3, a: d3, value: 8 }));
}

#[test]
fn cachei_w_postinc_traps_on_1_3() {
    let code = [0x89, 0x30, 0xc8, 0x02];
    let mut cpu = CpuTriCore::new();
    cpu.enable_feature(Feature::TriCore13);
    let (tr, ir, _) = translate_with(&cpu, 0x1000, &code, false);
    let ops = ir.ops();
    assert!(
        ops.iter()
            .any(|op| matches!(op, Op::CallHelper { func: Helper::IllegalOpc, .. }))
    );
    // Faulting PC, not next_pc.
    assert!(ops.contains(&Op::Movi { d: tr.regs.pc, value: 0x1000 }));
}

// === Decode errors ===

#[test]
fn unknown_16_bit_opcode_ends_block_without_ir() {
    // 0xfe is not a valid 16-bit primary opcode.
    let (_, ir, tb) = translate(0x1000, &[0xfe, 0x00], false);
    assert!(ir.ops().is_empty());
    assert_eq!(tb.icount, 1);
    assert_eq!(tb.size, 2);
}

// === Temporary balance across a spread of encodings ===

#[test]
fn temporaries_balance_for_every_instruction_shape() {
    let cases: &[&[u8]] = &[
        &[0x42, 0x21],             // ADD (SRR)
        &[0x82, 0xf1],             // MOV D1, #-1 (SRC)
        &[0x8a, 0x31],             // CADD (SRC)
        &[0xaa, 0x51],             // CMOV (SRC)
        &[0x86, 0xc1],             // SHA negative count
        &[0x06, 0x21],             // SH
        &[0x22, 0x21],             // ADDS
        &[0x32, 0x51],             // RSUB (SR accu)
        &[0x32, 0x11],             // SAT.BU
        &[0x50, 0x21],             // ADDSC.A
        &[0xe0, 0x7f],             // BISR
        &[0x58, 0x04],             // LD.W (SC)
        &[0x44, 0x21],             // LD.W post-increment (SLR)
        &[0x6c, 0x32],             // ST.W (SRO)
        &[0x68, 0x32],             // ST.W (SSRO)
        &[0x2e, 0x45],             // JZ.T (SBRN)
        &[0x1e, 0x45],             // JEQ (SBC)
        &[0x3e, 0x45],             // JEQ (SBR)
        &[0xfc, 0x25],             // LOOP
        &[0xdc, 0x03],             // JI
        &[0x00, 0x90],             // RET
        &[0xe5, 0x30, 0x10, 0x04], // LDMST absolute
        &[0xe5, 0x30, 0x10, 0x00], // SWAP.W absolute
        &[0x85, 0x00, 0x00, 0x04], // LD.D absolute
        &[0xa5, 0x20, 0x00, 0x04], // ST.D absolute
        &[0x15, 0x00, 0x00, 0x08], // LDLCX absolute
        &[0x65, 0x01, 0x00, 0x00], // ST.Q absolute
        &[0xd5, 0x03, 0x00, 0x00], // ST.T
        &[0x6d, 0x00, 0x02, 0x00], // CALL (32-bit)
        &[0xdd, 0x00, 0x02, 0x00], // JLA
        &[0x47, 0x21, 0x02, 0x30], // AND.AND.T
        &[0x67, 0x21, 0x02, 0x30], // INS.T
        &[0x27, 0x21, 0x02, 0x30], // SH.AND.T
        &[0x09, 0x40, 0x88, 0x09], // LD.A short offset (BO)
        &[0x09, 0x40, 0x48, 0x05], // LD.D pre-increment (BO)
        &[0x89, 0x40, 0x48, 0x05], // ST.D pre-increment (BO)
        &[0x89, 0x30, 0xc8, 0x02], // CACHEI.W post-increment
        &[0x29, 0x40, 0x48, 0x05], // LD.D circular
        &[0x29, 0x40, 0x48, 0x00], // LD.BU bit-reverse
        &[0xa9, 0x40, 0x48, 0x05], // ST.D circular
        &[0x49, 0x40, 0x08, 0x00], // SWAP.W post-increment (BO)
        &[0x69, 0x40, 0x08, 0x00], // SWAP.W bit-reverse
        &[0x69, 0x40, 0x48, 0x04], // LDMST circular
    ];

    for code in cases {
        let (_, ir, _) = translate(0x1000, code, true);
        assert_eq!(ir.live_temps(), 0, "temp leak for encoding {code:02x?}");
    }
}

// === Driver-level properties ===

#[test]
fn straight_line_code_accumulates_until_branch() {
    // ADD D1,D2; ADD D1,D2; J +0: three instructions, one block.
    let (_, ir, tb) = translate(0x1000, &[0x42, 0x21, 0x42, 0x21, 0x3c, 0x00], false);
    assert_eq!(tb.icount, 3);
    assert_eq!(tb.size, 6);
    assert!(ir.ops().iter().any(|op| matches!(op, Op::GotoTb { .. })));
}

#[test]
fn global_register_names_follow_convention() {
    let mut ir = IrBuilder::new();
    let tr = Translator::new(&mut ir);
    assert_eq!(ir.global_name(tr.regs.gpr_a[10]), Some("sp"));
    assert_eq!(ir.global_name(tr.regs.gpr_a[11]), Some("a11"));
    assert_eq!(ir.global_name(tr.regs.gpr_d[15]), Some("d15"));
    assert_eq!(ir.global_name(tr.regs.pc), Some("PC"));
    assert_eq!(ir.global_name(tr.regs.psw_sav), Some("PSW_SAV"));
}
