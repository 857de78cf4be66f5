//! Branch, call and return emission with block chaining.
//!
//! Both exits of a conditional branch go through [`BlockCtx::goto_tb`]:
//! when the destination lies on the same guest page as the block start and
//! single-step is off, the exit is a patchable chain slot; otherwise it is
//! an unchained exit. Guest PC is always written back before leaving the
//! block.

use tricore_ir::{Cond, Helper, Reg};

use crate::fields;
use crate::opcodes::*;
use crate::translate::{BlockCtx, BlockState, DecodeError, PAGE_MASK};

impl BlockCtx<'_> {
    /// Write a known PC value back to guest state.
    pub(crate) fn save_pc(&mut self, pc: u32) {
        self.ir.movi(self.regs.pc, pc);
    }

    /// Leave the block towards `dest` through chain slot `slot` when the
    /// chaining gate allows, unchained otherwise.
    pub(crate) fn goto_tb(&mut self, slot: u32, dest: u32) {
        if (self.tb_pc & PAGE_MASK) == (dest & PAGE_MASK) && !self.singlestep {
            self.ir.goto_tb(slot);
            self.save_pc(dest);
            self.ir.exit_tb(slot + 1);
        } else {
            self.save_pc(dest);
            self.ir.exit_tb(0);
        }
    }

    /// Conditional branch: taken → `pc + 2·disp`, fall-through →
    /// `next_pc`.
    pub(crate) fn branch_cond(&mut self, cond: Cond, r1: Reg, r2: Reg, disp: i32) {
        let taken = self.ir.new_label();
        self.ir.brcond(cond, r1, r2, taken);
        self.goto_tb(1, self.next_pc);
        self.ir.set_label(taken);
        self.goto_tb(0, self.pc.wrapping_add((disp << 1) as u32));
    }

    /// Conditional branch against a constant.
    pub(crate) fn branch_condi(&mut self, cond: Cond, r1: Reg, value: i32, disp: i32) {
        let temp = self.ir.const_i32(value as u32);
        self.branch_cond(cond, r1, temp, disp);
        self.ir.free_temp(temp);
    }

    /// LOOP: decrement `A[r1]`; branch while the result is not -1. The
    /// caller has already applied the encoding's displacement bias.
    fn loop_branch(&mut self, r1: usize, offset: i32) {
        let done = self.ir.new_label();
        let a = self.regs.gpr_a[r1];
        self.ir.addi(a, a, -1);
        self.ir.brcondi(Cond::Eq, a, -1, done);
        self.goto_tb(1, self.pc.wrapping_add(offset as u32));
        self.ir.set_label(done);
        self.goto_tb(0, self.next_pc);
    }

    /// Dispatch for every control-transfer opcode. `offset` is the raw
    /// (unscaled) displacement field; `constant` carries SBC compare
    /// values and SBRN bit positions.
    pub(crate) fn compute_branch(
        &mut self,
        opc: u32,
        r1: usize,
        constant: i32,
        offset: i32,
    ) -> Result<(), DecodeError> {
        let d15 = self.regs.gpr_d[15];
        match opc {
            // SB-format jumps
            OPC1_16_SB_J | OPC1_32_B_J => {
                self.goto_tb(0, self.pc.wrapping_add((offset << 1) as u32));
            }
            OPC1_32_B_CALL | OPC1_16_SB_CALL => {
                self.helper_1arg(Helper::Call, self.next_pc);
                self.goto_tb(0, self.pc.wrapping_add((offset << 1) as u32));
            }
            OPC1_16_SB_JZ => self.branch_condi(Cond::Eq, d15, 0, offset),
            OPC1_16_SB_JNZ => self.branch_condi(Cond::Ne, d15, 0, offset),
            // SBC-format jumps
            OPC1_16_SBC_JEQ => self.branch_condi(Cond::Eq, d15, constant, offset),
            OPC1_16_SBC_JNE => self.branch_condi(Cond::Ne, d15, constant, offset),
            // SBRN-format bit-test jumps
            OPC1_16_SBRN_JZ_T => {
                let temp = self.ir.new_temp();
                self.ir.andi(temp, d15, 1 << constant);
                self.branch_condi(Cond::Eq, temp, 0, offset);
                self.ir.free_temp(temp);
            }
            OPC1_16_SBRN_JNZ_T => {
                let temp = self.ir.new_temp();
                self.ir.andi(temp, d15, 1 << constant);
                self.branch_condi(Cond::Ne, temp, 0, offset);
                self.ir.free_temp(temp);
            }
            // SBR-format jumps
            OPC1_16_SBR_JEQ => self.branch_cond(Cond::Eq, self.regs.gpr_d[r1], d15, offset),
            OPC1_16_SBR_JNE => self.branch_cond(Cond::Ne, self.regs.gpr_d[r1], d15, offset),
            OPC1_16_SBR_JNZ => self.branch_condi(Cond::Ne, self.regs.gpr_d[r1], 0, offset),
            OPC1_16_SBR_JNZ_A => self.branch_condi(Cond::Ne, self.regs.gpr_a[r1], 0, offset),
            OPC1_16_SBR_JGEZ => self.branch_condi(Cond::Ge, self.regs.gpr_d[r1], 0, offset),
            OPC1_16_SBR_JGTZ => self.branch_condi(Cond::Gt, self.regs.gpr_d[r1], 0, offset),
            OPC1_16_SBR_JLEZ => self.branch_condi(Cond::Le, self.regs.gpr_d[r1], 0, offset),
            OPC1_16_SBR_JLTZ => self.branch_condi(Cond::Lt, self.regs.gpr_d[r1], 0, offset),
            OPC1_16_SBR_JZ => self.branch_condi(Cond::Eq, self.regs.gpr_d[r1], 0, offset),
            OPC1_16_SBR_JZ_A => self.branch_condi(Cond::Eq, self.regs.gpr_a[r1], 0, offset),
            // The 16-bit LOOP target carries a -32 bias.
            OPC1_16_SBR_LOOP => self.loop_branch(r1, (offset << 1) - 32),
            // SR-format indirect jump
            OPC1_16_SR_JI => {
                self.ir.andi(self.regs.pc, self.regs.gpr_a[r1], 0xffff_fffe);
                self.ir.exit_tb(0);
            }
            OPC2_16_SR_RET => {
                self.ir.call_helper(Helper::Ret, None, &[]);
                self.ir.exit_tb(0);
            }
            // B-format
            OPC1_32_B_CALLA => {
                self.helper_1arg(Helper::Call, self.next_pc);
                self.goto_tb(0, fields::ea_b_absolute(offset as u32 & 0x00ff_ffff));
            }
            OPC1_32_B_JA => {
                self.goto_tb(0, fields::ea_b_absolute(offset as u32 & 0x00ff_ffff));
            }
            OPC1_32_B_JLA => {
                self.ir.movi(self.regs.gpr_a[11], self.next_pc);
                self.goto_tb(0, fields::ea_b_absolute(offset as u32 & 0x00ff_ffff));
            }
            OPC1_32_B_JL => {
                self.ir.movi(self.regs.gpr_a[11], self.next_pc);
                self.goto_tb(0, self.pc.wrapping_add((offset << 1) as u32));
            }
            _ => {
                return Err(if self.opcode & 1 == 0 {
                    self.invalid16()
                } else {
                    self.invalid32()
                });
            }
        }
        self.bstate = BlockState::Branch;
        Ok(())
    }
}
