//! 16-bit instruction decode, one function per encoding format.
//!
//! The primary opcode is an 8-bit field except for SRRS ADDSC.A, whose
//! opcode is only 6 bits wide; the top level masks with 0x3f to catch it
//! before the 8-bit match.

use tricore_ir::{Cond, Helper, MemOp};

use crate::fields;
use crate::opcodes::*;
use crate::translate::{BlockCtx, BlockState, DecodeError};

impl BlockCtx<'_> {
    pub(crate) fn decode_16(&mut self) -> Result<(), DecodeError> {
        let major = fields::op_major(self.opcode);
        // ADDSC.A has a 6-bit primary opcode.
        let op1 = if major & 0x3f == OPC1_16_SRRS_ADDSC_A {
            OPC1_16_SRRS_ADDSC_A
        } else {
            major
        };

        match op1 {
            // SRC-format
            OPC1_16_SRC_ADD
            | OPC1_16_SRC_ADD_A15
            | OPC1_16_SRC_ADD_15A
            | OPC1_16_SRC_ADD_A
            | OPC1_16_SRC_CADD
            | OPC1_16_SRC_CADDN
            | OPC1_16_SRC_CMOV
            | OPC1_16_SRC_CMOVN
            | OPC1_16_SRC_EQ
            | OPC1_16_SRC_LT
            | OPC1_16_SRC_MOV
            | OPC1_16_SRC_MOV_A
            | OPC1_16_SRC_SH
            | OPC1_16_SRC_SHA => self.decode_src(op1),
            // SRR-format
            OPC1_16_SRR_ADD
            | OPC1_16_SRR_ADD_A15
            | OPC1_16_SRR_ADD_15A
            | OPC1_16_SRR_ADD_A
            | OPC1_16_SRR_ADDS
            | OPC1_16_SRR_AND
            | OPC1_16_SRR_CMOV
            | OPC1_16_SRR_CMOVN
            | OPC1_16_SRR_EQ
            | OPC1_16_SRR_LT
            | OPC1_16_SRR_MOV
            | OPC1_16_SRR_MOV_A
            | OPC1_16_SRR_MOV_AA
            | OPC1_16_SRR_MOV_D
            | OPC1_16_SRR_MUL
            | OPC1_16_SRR_OR
            | OPC1_16_SRR_SUB
            | OPC1_16_SRR_SUB_A15B
            | OPC1_16_SRR_SUB_15AB
            | OPC1_16_SRR_SUBS
            | OPC1_16_SRR_XOR => self.decode_srr(op1),
            // SSR-format
            OPC1_16_SSR_ST_A
            | OPC1_16_SSR_ST_A_POSTINC
            | OPC1_16_SSR_ST_B
            | OPC1_16_SSR_ST_B_POSTINC
            | OPC1_16_SSR_ST_H
            | OPC1_16_SSR_ST_H_POSTINC
            | OPC1_16_SSR_ST_W
            | OPC1_16_SSR_ST_W_POSTINC => self.decode_ssr(op1),
            // SRRS-format
            OPC1_16_SRRS_ADDSC_A => {
                let r1 = fields::srrs_s1d(self.opcode);
                let r2 = fields::srrs_s2(self.opcode);
                let n = fields::srrs_n(self.opcode);
                let temp = self.ir.new_temp();
                self.ir.shli(temp, self.regs.gpr_d[15], n);
                self.ir.add(self.regs.gpr_a[r1], self.regs.gpr_a[r2], temp);
                self.ir.free_temp(temp);
                Ok(())
            }
            // SLRO-format
            OPC1_16_SLRO_LD_A => {
                let r1 = fields::slro_d(self.opcode);
                let off = fields::slro_off4(self.opcode);
                self.offset_ld(self.regs.gpr_a[r1], self.regs.gpr_a[15], off * 4, MemOp::S32);
                Ok(())
            }
            OPC1_16_SLRO_LD_BU => {
                let r1 = fields::slro_d(self.opcode);
                let off = fields::slro_off4(self.opcode);
                self.offset_ld(self.regs.gpr_d[r1], self.regs.gpr_a[15], off, MemOp::U8);
                Ok(())
            }
            OPC1_16_SLRO_LD_H => {
                let r1 = fields::slro_d(self.opcode);
                let off = fields::slro_off4(self.opcode);
                self.offset_ld(self.regs.gpr_d[r1], self.regs.gpr_a[15], off * 2, MemOp::S16);
                Ok(())
            }
            OPC1_16_SLRO_LD_W => {
                let r1 = fields::slro_d(self.opcode);
                let off = fields::slro_off4(self.opcode);
                self.offset_ld(self.regs.gpr_d[r1], self.regs.gpr_a[15], off * 4, MemOp::S32);
                Ok(())
            }
            // SB-format
            OPC1_16_SB_CALL | OPC1_16_SB_J | OPC1_16_SB_JNZ | OPC1_16_SB_JZ => {
                let address = fields::sb_disp8_sext(self.opcode);
                self.compute_branch(op1, 0, 0, address)
            }
            // SBC-format
            OPC1_16_SBC_JEQ | OPC1_16_SBC_JNE => {
                let address = fields::sbc_disp4(self.opcode);
                let constant = fields::sbc_const4_sext(self.opcode);
                self.compute_branch(op1, 0, constant, address)
            }
            // SBRN-format
            OPC1_16_SBRN_JNZ_T | OPC1_16_SBRN_JZ_T => {
                let address = fields::sbrn_disp4(self.opcode);
                let constant = fields::sbrn_n(self.opcode) as i32;
                self.compute_branch(op1, 0, constant, address)
            }
            // SBR-format
            OPC1_16_SBR_JEQ
            | OPC1_16_SBR_JGEZ
            | OPC1_16_SBR_JGTZ
            | OPC1_16_SBR_JLEZ
            | OPC1_16_SBR_JLTZ
            | OPC1_16_SBR_JNE
            | OPC1_16_SBR_JNZ
            | OPC1_16_SBR_JNZ_A
            | OPC1_16_SBR_JZ
            | OPC1_16_SBR_JZ_A
            | OPC1_16_SBR_LOOP => {
                let r1 = fields::sbr_s2(self.opcode);
                let address = fields::sbr_disp4(self.opcode);
                self.compute_branch(op1, r1, 0, address)
            }
            // SC-format
            OPC1_16_SC_AND
            | OPC1_16_SC_BISR
            | OPC1_16_SC_LD_A
            | OPC1_16_SC_LD_W
            | OPC1_16_SC_MOV
            | OPC1_16_SC_OR
            | OPC1_16_SC_ST_A
            | OPC1_16_SC_ST_W
            | OPC1_16_SC_SUB_A => self.decode_sc(op1),
            // SLR-format
            OPC1_16_SLR_LD_A
            | OPC1_16_SLR_LD_A_POSTINC
            | OPC1_16_SLR_LD_BU
            | OPC1_16_SLR_LD_BU_POSTINC
            | OPC1_16_SLR_LD_H
            | OPC1_16_SLR_LD_H_POSTINC
            | OPC1_16_SLR_LD_W
            | OPC1_16_SLR_LD_W_POSTINC => self.decode_slr(op1),
            // SRO-format
            OPC1_16_SRO_LD_A
            | OPC1_16_SRO_LD_BU
            | OPC1_16_SRO_LD_H
            | OPC1_16_SRO_LD_W
            | OPC1_16_SRO_ST_A
            | OPC1_16_SRO_ST_B
            | OPC1_16_SRO_ST_H
            | OPC1_16_SRO_ST_W => self.decode_sro(op1),
            // SSRO-format
            OPC1_16_SSRO_ST_A => {
                let r1 = fields::ssro_s1(self.opcode);
                let off = fields::ssro_off4(self.opcode);
                self.offset_st(self.regs.gpr_a[r1], self.regs.gpr_a[15], off * 4, MemOp::S32);
                Ok(())
            }
            OPC1_16_SSRO_ST_B => {
                let r1 = fields::ssro_s1(self.opcode);
                let off = fields::ssro_off4(self.opcode);
                self.offset_st(self.regs.gpr_d[r1], self.regs.gpr_a[15], off, MemOp::U8);
                Ok(())
            }
            OPC1_16_SSRO_ST_H => {
                let r1 = fields::ssro_s1(self.opcode);
                let off = fields::ssro_off4(self.opcode);
                self.offset_st(self.regs.gpr_d[r1], self.regs.gpr_a[15], off * 2, MemOp::S16);
                Ok(())
            }
            OPC1_16_SSRO_ST_W => {
                let r1 = fields::ssro_s1(self.opcode);
                let off = fields::ssro_off4(self.opcode);
                self.offset_st(self.regs.gpr_d[r1], self.regs.gpr_a[15], off * 4, MemOp::S32);
                Ok(())
            }
            // SR-format
            OPCM_16_SR_SYSTEM => self.decode_sr_system(),
            OPCM_16_SR_ACCU => self.decode_sr_accu(),
            OPC1_16_SR_JI => {
                let r1 = fields::sr_s1d(self.opcode);
                self.compute_branch(op1, r1, 0, 0)
            }
            OPC1_16_SR_NOT => {
                let r1 = fields::sr_s1d(self.opcode);
                self.ir.not(self.regs.gpr_d[r1], self.regs.gpr_d[r1]);
                Ok(())
            }
            _ => Err(self.invalid16()),
        }
    }

    fn decode_src(&mut self, op1: u32) -> Result<(), DecodeError> {
        let r1 = fields::src_s1d(self.opcode);
        let const4 = fields::src_const4_sext(self.opcode);

        match op1 {
            OPC1_16_SRC_ADD => {
                self.addi_d(self.regs.gpr_d[r1], self.regs.gpr_d[r1], const4);
            }
            OPC1_16_SRC_ADD_A15 => {
                self.addi_d(self.regs.gpr_d[r1], self.regs.gpr_d[15], const4);
            }
            OPC1_16_SRC_ADD_15A => {
                self.addi_d(self.regs.gpr_d[15], self.regs.gpr_d[r1], const4);
            }
            OPC1_16_SRC_ADD_A => {
                self.ir.addi(self.regs.gpr_a[r1], self.regs.gpr_a[r1], const4);
            }
            OPC1_16_SRC_CADD => {
                self.condi_add(
                    Cond::Ne,
                    self.regs.gpr_d[r1],
                    const4,
                    self.regs.gpr_d[r1],
                    self.regs.gpr_d[15],
                );
            }
            OPC1_16_SRC_CADDN => {
                self.condi_add(
                    Cond::Eq,
                    self.regs.gpr_d[r1],
                    const4,
                    self.regs.gpr_d[r1],
                    self.regs.gpr_d[15],
                );
            }
            OPC1_16_SRC_CMOV => {
                let zero = self.ir.const_i32(0);
                let value = self.ir.const_i32(const4 as u32);
                let d = self.regs.gpr_d[r1];
                self.ir.movcond(Cond::Ne, d, self.regs.gpr_d[15], zero, value, d);
                self.ir.free_temp(value);
                self.ir.free_temp(zero);
            }
            OPC1_16_SRC_CMOVN => {
                let zero = self.ir.const_i32(0);
                let value = self.ir.const_i32(const4 as u32);
                let d = self.regs.gpr_d[r1];
                self.ir.movcond(Cond::Eq, d, self.regs.gpr_d[15], zero, value, d);
                self.ir.free_temp(value);
                self.ir.free_temp(zero);
            }
            OPC1_16_SRC_EQ => {
                self.ir
                    .setcondi(Cond::Eq, self.regs.gpr_d[15], self.regs.gpr_d[r1], const4);
            }
            OPC1_16_SRC_LT => {
                self.ir
                    .setcondi(Cond::Lt, self.regs.gpr_d[15], self.regs.gpr_d[r1], const4);
            }
            OPC1_16_SRC_MOV => {
                self.ir.movi(self.regs.gpr_d[r1], const4 as u32);
            }
            // The address-register form takes the immediate zero-extended.
            OPC1_16_SRC_MOV_A => {
                let const4 = fields::src_const4(self.opcode);
                self.ir.movi(self.regs.gpr_a[r1], const4);
            }
            OPC1_16_SRC_SH => {
                self.shi(self.regs.gpr_d[r1], self.regs.gpr_d[r1], const4);
            }
            OPC1_16_SRC_SHA => {
                self.shaci(self.regs.gpr_d[r1], self.regs.gpr_d[r1], const4);
            }
            _ => return Err(self.invalid16()),
        }
        Ok(())
    }

    fn decode_srr(&mut self, op1: u32) -> Result<(), DecodeError> {
        let r1 = fields::srr_s1d(self.opcode);
        let r2 = fields::srr_s2(self.opcode);

        match op1 {
            OPC1_16_SRR_ADD => {
                self.add_d(self.regs.gpr_d[r1], self.regs.gpr_d[r1], self.regs.gpr_d[r2]);
            }
            OPC1_16_SRR_ADD_A15 => {
                self.add_d(self.regs.gpr_d[r1], self.regs.gpr_d[15], self.regs.gpr_d[r2]);
            }
            OPC1_16_SRR_ADD_15A => {
                self.add_d(self.regs.gpr_d[15], self.regs.gpr_d[r1], self.regs.gpr_d[r2]);
            }
            OPC1_16_SRR_ADD_A => {
                self.ir
                    .add(self.regs.gpr_a[r1], self.regs.gpr_a[r1], self.regs.gpr_a[r2]);
            }
            OPC1_16_SRR_ADDS => {
                self.adds(self.regs.gpr_d[r1], self.regs.gpr_d[r1], self.regs.gpr_d[r2]);
            }
            OPC1_16_SRR_AND => {
                self.ir
                    .and(self.regs.gpr_d[r1], self.regs.gpr_d[r1], self.regs.gpr_d[r2]);
            }
            OPC1_16_SRR_CMOV => {
                let zero = self.ir.const_i32(0);
                let d = self.regs.gpr_d[r1];
                self.ir
                    .movcond(Cond::Ne, d, self.regs.gpr_d[15], zero, self.regs.gpr_d[r2], d);
                self.ir.free_temp(zero);
            }
            OPC1_16_SRR_CMOVN => {
                let zero = self.ir.const_i32(0);
                let d = self.regs.gpr_d[r1];
                self.ir
                    .movcond(Cond::Eq, d, self.regs.gpr_d[15], zero, self.regs.gpr_d[r2], d);
                self.ir.free_temp(zero);
            }
            OPC1_16_SRR_EQ => {
                self.ir.setcond(
                    Cond::Eq,
                    self.regs.gpr_d[15],
                    self.regs.gpr_d[r1],
                    self.regs.gpr_d[r2],
                );
            }
            OPC1_16_SRR_LT => {
                self.ir.setcond(
                    Cond::Lt,
                    self.regs.gpr_d[15],
                    self.regs.gpr_d[r1],
                    self.regs.gpr_d[r2],
                );
            }
            OPC1_16_SRR_MOV => {
                self.ir.mov(self.regs.gpr_d[r1], self.regs.gpr_d[r2]);
            }
            OPC1_16_SRR_MOV_A => {
                self.ir.mov(self.regs.gpr_a[r1], self.regs.gpr_d[r2]);
            }
            OPC1_16_SRR_MOV_AA => {
                self.ir.mov(self.regs.gpr_a[r1], self.regs.gpr_a[r2]);
            }
            OPC1_16_SRR_MOV_D => {
                self.ir.mov(self.regs.gpr_d[r1], self.regs.gpr_a[r2]);
            }
            OPC1_16_SRR_MUL => {
                self.mul_i32s(self.regs.gpr_d[r1], self.regs.gpr_d[r1], self.regs.gpr_d[r2]);
            }
            OPC1_16_SRR_OR => {
                self.ir
                    .or(self.regs.gpr_d[r1], self.regs.gpr_d[r1], self.regs.gpr_d[r2]);
            }
            OPC1_16_SRR_SUB => {
                self.sub_d(self.regs.gpr_d[r1], self.regs.gpr_d[r1], self.regs.gpr_d[r2]);
            }
            OPC1_16_SRR_SUB_A15B => {
                self.sub_d(self.regs.gpr_d[r1], self.regs.gpr_d[15], self.regs.gpr_d[r2]);
            }
            OPC1_16_SRR_SUB_15AB => {
                self.sub_d(self.regs.gpr_d[15], self.regs.gpr_d[r1], self.regs.gpr_d[r2]);
            }
            OPC1_16_SRR_SUBS => {
                self.subs(self.regs.gpr_d[r1], self.regs.gpr_d[r1], self.regs.gpr_d[r2]);
            }
            OPC1_16_SRR_XOR => {
                self.ir
                    .xor(self.regs.gpr_d[r1], self.regs.gpr_d[r1], self.regs.gpr_d[r2]);
            }
            _ => return Err(self.invalid16()),
        }
        Ok(())
    }

    fn decode_ssr(&mut self, op1: u32) -> Result<(), DecodeError> {
        let r1 = fields::ssr_s1(self.opcode);
        let r2 = fields::ssr_s2(self.opcode);
        let base = self.regs.gpr_a[r2];

        match op1 {
            OPC1_16_SSR_ST_A => {
                self.ir.qemu_st(self.regs.gpr_a[r1], base, MemOp::U32, self.mem_idx);
            }
            OPC1_16_SSR_ST_A_POSTINC => {
                self.ir.qemu_st(self.regs.gpr_a[r1], base, MemOp::U32, self.mem_idx);
                self.ir.addi(base, base, 4);
            }
            OPC1_16_SSR_ST_B => {
                self.ir.qemu_st(self.regs.gpr_d[r1], base, MemOp::U8, self.mem_idx);
            }
            OPC1_16_SSR_ST_B_POSTINC => {
                self.ir.qemu_st(self.regs.gpr_d[r1], base, MemOp::U8, self.mem_idx);
                self.ir.addi(base, base, 1);
            }
            OPC1_16_SSR_ST_H => {
                self.ir.qemu_st(self.regs.gpr_d[r1], base, MemOp::U16, self.mem_idx);
            }
            OPC1_16_SSR_ST_H_POSTINC => {
                self.ir.qemu_st(self.regs.gpr_d[r1], base, MemOp::U16, self.mem_idx);
                self.ir.addi(base, base, 2);
            }
            OPC1_16_SSR_ST_W => {
                self.ir.qemu_st(self.regs.gpr_d[r1], base, MemOp::U32, self.mem_idx);
            }
            OPC1_16_SSR_ST_W_POSTINC => {
                self.ir.qemu_st(self.regs.gpr_d[r1], base, MemOp::U32, self.mem_idx);
                self.ir.addi(base, base, 4);
            }
            _ => return Err(self.invalid16()),
        }
        Ok(())
    }

    fn decode_sc(&mut self, op1: u32) -> Result<(), DecodeError> {
        let const16 = fields::sc_const8(self.opcode);
        let d15 = self.regs.gpr_d[15];
        let sp = self.regs.gpr_a[10];

        match op1 {
            OPC1_16_SC_AND => self.ir.andi(d15, d15, const16),
            OPC1_16_SC_BISR => self.helper_1arg(Helper::Bisr, const16 & 0xff),
            OPC1_16_SC_LD_A => {
                self.offset_ld(self.regs.gpr_a[15], sp, const16 as i32 * 4, MemOp::S32);
            }
            OPC1_16_SC_LD_W => {
                self.offset_ld(d15, sp, const16 as i32 * 4, MemOp::S32);
            }
            OPC1_16_SC_MOV => self.ir.movi(d15, const16),
            OPC1_16_SC_OR => self.ir.ori(d15, d15, const16),
            OPC1_16_SC_ST_A => {
                self.offset_st(self.regs.gpr_a[15], sp, const16 as i32 * 4, MemOp::S32);
            }
            OPC1_16_SC_ST_W => {
                self.offset_st(d15, sp, const16 as i32 * 4, MemOp::S32);
            }
            OPC1_16_SC_SUB_A => self.ir.addi(sp, sp, -(const16 as i32)),
            _ => return Err(self.invalid16()),
        }
        Ok(())
    }

    fn decode_slr(&mut self, op1: u32) -> Result<(), DecodeError> {
        let r1 = fields::slr_d(self.opcode);
        let r2 = fields::slr_s2(self.opcode);
        let base = self.regs.gpr_a[r2];

        match op1 {
            OPC1_16_SLR_LD_A => {
                self.ir.qemu_ld(self.regs.gpr_a[r1], base, MemOp::S32, self.mem_idx);
            }
            OPC1_16_SLR_LD_A_POSTINC => {
                self.ir.qemu_ld(self.regs.gpr_a[r1], base, MemOp::S32, self.mem_idx);
                self.ir.addi(base, base, 4);
            }
            OPC1_16_SLR_LD_BU => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], base, MemOp::U8, self.mem_idx);
            }
            OPC1_16_SLR_LD_BU_POSTINC => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], base, MemOp::U8, self.mem_idx);
                self.ir.addi(base, base, 1);
            }
            OPC1_16_SLR_LD_H => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], base, MemOp::S16, self.mem_idx);
            }
            OPC1_16_SLR_LD_H_POSTINC => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], base, MemOp::S16, self.mem_idx);
                self.ir.addi(base, base, 2);
            }
            // TODO: LD.W here issues a sign-extended half-word access;
            // cross-check against the ISA manual, which reads a full word.
            OPC1_16_SLR_LD_W => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], base, MemOp::S16, self.mem_idx);
            }
            OPC1_16_SLR_LD_W_POSTINC => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], base, MemOp::S16, self.mem_idx);
                self.ir.addi(base, base, 4);
            }
            _ => return Err(self.invalid16()),
        }
        Ok(())
    }

    fn decode_sro(&mut self, op1: u32) -> Result<(), DecodeError> {
        let r2 = fields::sro_s2(self.opcode);
        let off = fields::sro_off4(self.opcode);
        let base = self.regs.gpr_a[r2];

        match op1 {
            OPC1_16_SRO_LD_A => {
                self.offset_ld(self.regs.gpr_a[15], base, off * 4, MemOp::S32);
            }
            OPC1_16_SRO_LD_BU => {
                self.offset_ld(self.regs.gpr_d[15], base, off, MemOp::U8);
            }
            OPC1_16_SRO_LD_H => {
                self.offset_ld(self.regs.gpr_d[15], base, off, MemOp::S16);
            }
            OPC1_16_SRO_LD_W => {
                self.offset_ld(self.regs.gpr_d[15], base, off * 4, MemOp::S32);
            }
            OPC1_16_SRO_ST_A => {
                self.offset_st(self.regs.gpr_a[15], base, off * 4, MemOp::S32);
            }
            OPC1_16_SRO_ST_B => {
                self.offset_st(self.regs.gpr_d[15], base, off, MemOp::U8);
            }
            OPC1_16_SRO_ST_H => {
                self.offset_st(self.regs.gpr_d[15], base, off * 2, MemOp::S16);
            }
            OPC1_16_SRO_ST_W => {
                self.offset_st(self.regs.gpr_d[15], base, off * 4, MemOp::S32);
            }
            _ => return Err(self.invalid16()),
        }
        Ok(())
    }

    fn decode_sr_system(&mut self) -> Result<(), DecodeError> {
        let op2 = fields::sr_op2(self.opcode);

        match op2 {
            OPC2_16_SR_NOP => {}
            OPC2_16_SR_RET => self.compute_branch(op2, 0, 0, 0)?,
            OPC2_16_SR_RFE => {
                self.ir.call_helper(Helper::Rfe, None, &[]);
                self.ir.exit_tb(0);
                self.bstate = BlockState::Branch;
            }
            OPC2_16_SR_DEBUG => self.raise_debug(),
            _ => return Err(self.invalid16()),
        }
        Ok(())
    }

    fn decode_sr_accu(&mut self) -> Result<(), DecodeError> {
        let r1 = fields::sr_s1d(self.opcode);
        let op2 = fields::sr_op2(self.opcode);
        let d = self.regs.gpr_d[r1];

        match op2 {
            OPC2_16_SR_RSUB => self.rsub(d),
            OPC2_16_SR_SAT_B => self.saturate(d, d, 0x7f, -0x80),
            OPC2_16_SR_SAT_BU => self.saturate_u(d, d, 0xff),
            OPC2_16_SR_SAT_H => self.saturate(d, d, 0x7fff, -0x8000),
            OPC2_16_SR_SAT_HU => self.saturate_u(d, d, 0xffff),
            _ => return Err(self.invalid16()),
        }
        Ok(())
    }
}
