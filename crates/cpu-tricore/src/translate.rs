//! Block translation driver and translator context.
//!
//! `Translator` is created once per translation thread: it declares the IR
//! globals mirroring guest state. `translate_block` then drives decode for
//! one basic block at a time: fetch, classify 16/32-bit, dispatch to the
//! per-format decoders, and stop at the first control-flow boundary (or
//! when the IR buffer runs short, or after every instruction when
//! single-stepping).

use thiserror::Error;
use tricore_ir::{Helper, IrBuilder, Reg};

use crate::state::{CodeMemory, CpuTriCore, TranslationBlock};

/// Guest page granularity for block chaining: 16 KiB pages.
pub(crate) const PAGE_BITS: u32 = 14;
pub(crate) const PAGE_MASK: u32 = !((1 << PAGE_BITS) - 1);

/// Decode-loop terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    /// Keep decoding.
    None,
    /// Reserved terminal state (debug stop).
    Stop,
    /// Control flow left the block; exits are already emitted.
    Branch,
    /// An exception was raised; exits are already emitted.
    Excp,
}

/// An opcode that matched the 16/32-bit size classification but has no case
/// in its format decoder. The driver logs it and ends the block cleanly.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("no 16-bit decode for opcode {opcode:#06x} at pc {pc:#010x}")]
    Invalid16 { pc: u32, opcode: u16 },
    #[error("no 32-bit decode for opcode {opcode:#010x} at pc {pc:#010x}")]
    Invalid32 { pc: u32, opcode: u32 },
}

const REGNAMES_A: [&str; 16] = [
    "a0", "a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8", "a9", "sp", "a11", "a12", "a13", "a14",
    "a15",
];

const REGNAMES_D: [&str; 16] = [
    "d0", "d1", "d2", "d3", "d4", "d5", "d6", "d7", "d8", "d9", "d10", "d11", "d12", "d13", "d14",
    "d15",
];

/// IR globals mirroring the guest architectural state.
///
/// Declared once per translator; every emitted block references the same
/// handles. Only bit 31 of each `psw_*` flag register is architecturally
/// significant.
#[derive(Debug, Clone)]
pub struct TriCoreRegs {
    pub pc: Reg,
    pub pcxi: Reg,
    pub psw: Reg,
    pub icr: Reg,
    pub gpr_a: [Reg; 16],
    pub gpr_d: [Reg; 16],
    pub psw_c: Reg,
    pub psw_v: Reg,
    pub psw_sv: Reg,
    pub psw_av: Reg,
    pub psw_sav: Reg,
}

/// TriCore translation front-end.
pub struct Translator {
    pub regs: TriCoreRegs,
}

impl Translator {
    /// Declare the guest register file as IR globals on `ir`.
    ///
    /// Must run before any block is translated with that builder.
    #[must_use]
    pub fn new(ir: &mut IrBuilder) -> Self {
        let gpr_a = REGNAMES_A.map(|name| ir.global(name));
        let gpr_d = REGNAMES_D.map(|name| ir.global(name));
        let pcxi = ir.global("PCXI");
        let psw = ir.global("PSW");
        let pc = ir.global("PC");
        let icr = ir.global("ICR");
        let psw_c = ir.global("PSW_C");
        let psw_v = ir.global("PSW_V");
        let psw_sv = ir.global("PSW_SV");
        let psw_av = ir.global("PSW_AV");
        let psw_sav = ir.global("PSW_SAV");
        Self {
            regs: TriCoreRegs {
                pc,
                pcxi,
                psw,
                icr,
                gpr_a,
                gpr_d,
                psw_c,
                psw_v,
                psw_sv,
                psw_av,
                psw_sav,
            },
        }
    }

    /// Translate one basic block starting at `tb.pc`.
    ///
    /// Fills `tb.size` and `tb.icount`; the emitted stream is left in `ir`.
    /// Never fails: a decode error ends the block early after a logged
    /// diagnostic.
    pub fn translate_block(
        &self,
        env: &CpuTriCore,
        code: &(impl CodeMemory + ?Sized),
        tb: &mut TranslationBlock,
        ir: &mut IrBuilder,
    ) {
        ir.begin_block();
        let mut ctx = BlockCtx {
            regs: &self.regs,
            ir,
            env,
            tb_pc: tb.pc,
            pc: tb.pc,
            next_pc: tb.pc,
            opcode: 0,
            mem_idx: env.mmu_index(),
            singlestep: tb.singlestep,
            bstate: BlockState::None,
        };

        let mut icount = 0;
        while ctx.bstate == BlockState::None {
            ctx.opcode = code.fetch_code(ctx.pc);
            if let Err(err) = ctx.decode_insn() {
                tracing::warn!("{err}");
                ctx.bstate = BlockState::Branch;
            }

            icount += 1;

            if ctx.ir.nearly_full() || ctx.singlestep {
                ctx.save_pc(ctx.next_pc);
                ctx.ir.exit_tb(0);
                break;
            }
            ctx.pc = ctx.next_pc;
        }

        tb.size = ctx.pc.wrapping_sub(tb.pc);
        tb.icount = icount;

        let leaked = ctx.ir.live_temps();
        if leaked != 0 {
            tracing::error!(
                "temporary leak: {leaked} live at end of block, pc {:#010x}",
                env.pc
            );
        }
    }
}

/// Per-block decode context: the current instruction's fields plus borrows
/// of everything emission needs.
pub(crate) struct BlockCtx<'a> {
    pub regs: &'a TriCoreRegs,
    pub ir: &'a mut IrBuilder,
    pub env: &'a CpuTriCore,
    /// Start PC of the block (chaining-gate page check).
    pub tb_pc: u32,
    /// PC of the instruction being decoded.
    pub pc: u32,
    /// PC immediately after it.
    pub next_pc: u32,
    /// The fetched encoding; 16-bit instructions use the low half.
    pub opcode: u32,
    pub mem_idx: u32,
    pub singlestep: bool,
    pub bstate: BlockState,
}

impl BlockCtx<'_> {
    /// Classify the fetched word by size and dispatch. Bit 0 clear means a
    /// 16-bit encoding.
    fn decode_insn(&mut self) -> Result<(), DecodeError> {
        if self.opcode & 1 == 0 {
            self.next_pc = self.pc.wrapping_add(2);
            self.decode_16()
        } else {
            self.next_pc = self.pc.wrapping_add(4);
            self.decode_32()
        }
    }

    pub(crate) fn invalid16(&self) -> DecodeError {
        DecodeError::Invalid16 {
            pc: self.pc,
            opcode: self.opcode as u16,
        }
    }

    pub(crate) fn invalid32(&self) -> DecodeError {
        DecodeError::Invalid32 {
            pc: self.pc,
            opcode: self.opcode,
        }
    }

    /// Invoke a run-time helper taking one constant argument.
    pub(crate) fn helper_1arg(&mut self, func: Helper, value: u32) {
        let temp = self.ir.const_i32(value);
        self.ir.call_helper(func, None, &[temp]);
        self.ir.free_temp(temp);
    }

    /// Raise the illegal-opcode trap: guest PC points at the faulting
    /// instruction, then an unchained exit.
    pub(crate) fn raise_illegal_opc(&mut self) {
        self.save_pc(self.pc);
        self.ir.call_helper(Helper::IllegalOpc, None, &[]);
        self.ir.exit_tb(0);
        self.bstate = BlockState::Excp;
    }

    /// Raise a debug exception after the DEBUG instruction completes.
    pub(crate) fn raise_debug(&mut self) {
        self.save_pc(self.next_pc);
        self.ir.call_helper(Helper::Debug, None, &[]);
        self.ir.exit_tb(0);
        self.bstate = BlockState::Excp;
    }
}
