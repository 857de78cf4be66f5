//! 32-bit instruction decode, one function per encoding format group.
//!
//! Each group extracts its fields up front, then dispatches on the
//! secondary opcode. A missing case is a decode error; temporaries are
//! released on the error path before it propagates.

use tricore_ir::{Helper, MemOp, Reg};

use crate::bitops::BitOp;
use crate::fields;
use crate::opcodes::*;
use crate::state::Feature;
use crate::translate::{BlockCtx, DecodeError};

impl BlockCtx<'_> {
    pub(crate) fn decode_32(&mut self) -> Result<(), DecodeError> {
        let op1 = fields::op_major(self.opcode);

        match op1 {
            // ABS-format
            OPCM_32_ABS_LDW => self.decode_abs_ldw(),
            OPCM_32_ABS_LDB => self.decode_abs_ldb(),
            OPCM_32_ABS_LDMST_SWAP => self.decode_abs_ldmst_swap(),
            OPCM_32_ABS_LDST_CONTEXT => self.decode_abs_context(),
            OPCM_32_ABS_STORE => self.decode_abs_store(),
            OPCM_32_ABS_STOREB_H => self.decode_abs_storeb_h(),
            OPC1_32_ABS_STOREQ => {
                let r1 = fields::abs_s1d(self.opcode);
                let ea = fields::ea_abs(fields::abs_off18(self.opcode));
                let addr = self.ir.const_i32(ea);
                let temp = self.ir.new_temp();
                self.ir.shri(temp, self.regs.gpr_d[r1], 16);
                self.ir.qemu_st(temp, addr, MemOp::U16, self.mem_idx);
                self.ir.free_temp(temp);
                self.ir.free_temp(addr);
                Ok(())
            }
            OPC1_32_ABS_LD_Q => {
                let r1 = fields::abs_s1d(self.opcode);
                let ea = fields::ea_abs(fields::abs_off18(self.opcode));
                let addr = self.ir.const_i32(ea);
                self.ir.qemu_ld(self.regs.gpr_d[r1], addr, MemOp::U16, self.mem_idx);
                self.ir.shli(self.regs.gpr_d[r1], self.regs.gpr_d[r1], 16);
                self.ir.free_temp(addr);
                Ok(())
            }
            OPC1_32_ABS_LEA => {
                let r1 = fields::abs_s1d(self.opcode);
                let ea = fields::ea_abs(fields::abs_off18(self.opcode));
                self.ir.movi(self.regs.gpr_a[r1], ea);
                Ok(())
            }
            // ABSB-format: store-bit into a byte
            OPC1_32_ABSB_ST_T => {
                let ea = fields::ea_abs(fields::abs_off18(self.opcode));
                let b = fields::absb_b(self.opcode);
                let bpos = fields::absb_bpos(self.opcode);
                let addr = self.ir.const_i32(ea);
                let temp = self.ir.new_temp();
                self.ir.qemu_ld(temp, addr, MemOp::U8, self.mem_idx);
                self.ir.andi(temp, temp, !(0x1 << bpos));
                self.ir.ori(temp, temp, b << bpos);
                self.ir.qemu_st(temp, addr, MemOp::U8, self.mem_idx);
                self.ir.free_temp(temp);
                self.ir.free_temp(addr);
                Ok(())
            }
            // B-format
            OPC1_32_B_CALL | OPC1_32_B_CALLA | OPC1_32_B_J | OPC1_32_B_JA | OPC1_32_B_JL
            | OPC1_32_B_JLA => {
                let address = fields::b_disp24_sext(self.opcode);
                self.compute_branch(op1, 0, 0, address)
            }
            // BIT-format
            OPCM_32_BIT_ANDACC => self.decode_bit_andacc(),
            OPCM_32_BIT_LOGICAL_T1 => self.decode_bit_logical_t1(),
            OPCM_32_BIT_INSERT => self.decode_bit_insert_group(),
            OPCM_32_BIT_LOGICAL_T2 => self.decode_bit_logical_t2(),
            OPCM_32_BIT_ORAND => self.decode_bit_orand(),
            OPCM_32_BIT_SH_LOGIC1 => self.decode_bit_sh_logic1(),
            OPCM_32_BIT_SH_LOGIC2 => self.decode_bit_sh_logic2(),
            // BO-format
            OPCM_32_BO_ADDRMODE_POST_PRE_BASE => self.decode_bo_st_post_pre_base(),
            OPCM_32_BO_ADDRMODE_BITREVERSE_CIRCULAR => self.decode_bo_st_bitrev_circ(),
            OPCM_32_BO_ADDRMODE_LD_POST_PRE_BASE => self.decode_bo_ld_post_pre_base(),
            OPCM_32_BO_ADDRMODE_LD_BITREVERSE_CIRCULAR => self.decode_bo_ld_bitrev_circ(),
            OPCM_32_BO_ADDRMODE_STCTX_POST_PRE_BASE => self.decode_bo_stctx_post_pre_base(),
            OPCM_32_BO_ADDRMODE_LDMST_BITREVERSE_CIRCULAR => self.decode_bo_ldmst_bitrev_circ(),
            _ => Err(self.invalid32()),
        }
    }

    // === ABS format ===

    fn decode_abs_ldw(&mut self) -> Result<(), DecodeError> {
        let r1 = fields::abs_s1d(self.opcode);
        let op2 = fields::abs_op2(self.opcode);
        let ea = fields::ea_abs(fields::abs_off18(self.opcode));
        let addr = self.ir.const_i32(ea);

        match op2 {
            OPC2_32_ABS_LD_A => {
                self.ir.qemu_ld(self.regs.gpr_a[r1], addr, MemOp::S32, self.mem_idx);
            }
            OPC2_32_ABS_LD_D => {
                let hi = self.regs.gpr_d[fields::pair_hi(r1)];
                self.ld_2regs_64(hi, self.regs.gpr_d[r1], addr);
            }
            OPC2_32_ABS_LD_DA => {
                let hi = self.regs.gpr_a[fields::pair_hi(r1)];
                self.ld_2regs_64(hi, self.regs.gpr_a[r1], addr);
            }
            OPC2_32_ABS_LD_W => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], addr, MemOp::S32, self.mem_idx);
            }
            _ => {
                self.ir.free_temp(addr);
                return Err(self.invalid32());
            }
        }
        self.ir.free_temp(addr);
        Ok(())
    }

    fn decode_abs_ldb(&mut self) -> Result<(), DecodeError> {
        let r1 = fields::abs_s1d(self.opcode);
        let op2 = fields::abs_op2(self.opcode);
        let ea = fields::ea_abs(fields::abs_off18(self.opcode));
        let addr = self.ir.const_i32(ea);
        let d = self.regs.gpr_d[r1];

        match op2 {
            OPC2_32_ABS_LD_B => self.ir.qemu_ld(d, addr, MemOp::S8, self.mem_idx),
            OPC2_32_ABS_LD_BU => self.ir.qemu_ld(d, addr, MemOp::U8, self.mem_idx),
            OPC2_32_ABS_LD_H => self.ir.qemu_ld(d, addr, MemOp::S16, self.mem_idx),
            OPC2_32_ABS_LD_HU => self.ir.qemu_ld(d, addr, MemOp::U16, self.mem_idx),
            _ => {
                self.ir.free_temp(addr);
                return Err(self.invalid32());
            }
        }
        self.ir.free_temp(addr);
        Ok(())
    }

    fn decode_abs_ldmst_swap(&mut self) -> Result<(), DecodeError> {
        let r1 = fields::abs_s1d(self.opcode);
        let op2 = fields::abs_op2(self.opcode);
        let ea = fields::ea_abs(fields::abs_off18(self.opcode));
        let addr = self.ir.const_i32(ea);

        match op2 {
            OPC2_32_ABS_LDMST => self.ldmst(r1, addr),
            OPC2_32_ABS_SWAP_W => self.swap(r1, addr),
            _ => {
                self.ir.free_temp(addr);
                return Err(self.invalid32());
            }
        }
        self.ir.free_temp(addr);
        Ok(())
    }

    fn decode_abs_context(&mut self) -> Result<(), DecodeError> {
        let op2 = fields::abs_op2(self.opcode);
        let ea = fields::ea_abs(fields::abs_off18(self.opcode));

        match op2 {
            OPC2_32_ABS_LDLCX => self.helper_1arg(Helper::Ldlcx, ea),
            OPC2_32_ABS_LDUCX => self.helper_1arg(Helper::Lducx, ea),
            OPC2_32_ABS_STLCX => self.helper_1arg(Helper::Stlcx, ea),
            OPC2_32_ABS_STUCX => self.helper_1arg(Helper::Stucx, ea),
            _ => return Err(self.invalid32()),
        }
        Ok(())
    }

    fn decode_abs_store(&mut self) -> Result<(), DecodeError> {
        let r1 = fields::abs_s1d(self.opcode);
        let op2 = fields::abs_op2(self.opcode);
        let ea = fields::ea_abs(fields::abs_off18(self.opcode));
        let addr = self.ir.const_i32(ea);

        match op2 {
            OPC2_32_ABS_ST_A => {
                self.ir.qemu_st(self.regs.gpr_a[r1], addr, MemOp::S32, self.mem_idx);
            }
            OPC2_32_ABS_ST_D => {
                let hi = self.regs.gpr_d[fields::pair_hi(r1)];
                self.st_2regs_64(hi, self.regs.gpr_d[r1], addr);
            }
            OPC2_32_ABS_ST_DA => {
                let hi = self.regs.gpr_a[fields::pair_hi(r1)];
                self.st_2regs_64(hi, self.regs.gpr_a[r1], addr);
            }
            OPC2_32_ABS_ST_W => {
                self.ir.qemu_st(self.regs.gpr_d[r1], addr, MemOp::S32, self.mem_idx);
            }
            _ => {
                self.ir.free_temp(addr);
                return Err(self.invalid32());
            }
        }
        self.ir.free_temp(addr);
        Ok(())
    }

    fn decode_abs_storeb_h(&mut self) -> Result<(), DecodeError> {
        let r1 = fields::abs_s1d(self.opcode);
        let op2 = fields::abs_op2(self.opcode);
        let ea = fields::ea_abs(fields::abs_off18(self.opcode));
        let addr = self.ir.const_i32(ea);
        let d = self.regs.gpr_d[r1];

        match op2 {
            OPC2_32_ABS_ST_B => self.ir.qemu_st(d, addr, MemOp::U8, self.mem_idx),
            OPC2_32_ABS_ST_H => self.ir.qemu_st(d, addr, MemOp::U16, self.mem_idx),
            _ => {
                self.ir.free_temp(addr);
                return Err(self.invalid32());
            }
        }
        self.ir.free_temp(addr);
        Ok(())
    }

    // === BIT format ===

    fn bit_operands(&self) -> (Reg, Reg, Reg, u32, u32, u32) {
        let d = self.regs.gpr_d[fields::bit_d(self.opcode)];
        let s1 = self.regs.gpr_d[fields::bit_s1(self.opcode)];
        let s2 = self.regs.gpr_d[fields::bit_s2(self.opcode)];
        let pos1 = fields::bit_pos1(self.opcode);
        let pos2 = fields::bit_pos2(self.opcode);
        let op2 = fields::bit_op2(self.opcode);
        (d, s1, s2, pos1, pos2, op2)
    }

    fn decode_bit_andacc(&mut self) -> Result<(), DecodeError> {
        let (d, s1, s2, pos1, pos2, op2) = self.bit_operands();

        let (inner, outer) = match op2 {
            OPC2_32_BIT_AND_AND_T => (BitOp::And, BitOp::And),
            OPC2_32_BIT_AND_ANDN_T => (BitOp::Andc, BitOp::And),
            OPC2_32_BIT_AND_NOR_T => (BitOp::Or, BitOp::Andc),
            OPC2_32_BIT_AND_OR_T => (BitOp::Or, BitOp::And),
            _ => return Err(self.invalid32()),
        };
        self.bit_2op(d, s1, s2, pos1, pos2, inner, outer);
        Ok(())
    }

    fn decode_bit_logical_t1(&mut self) -> Result<(), DecodeError> {
        let (d, s1, s2, pos1, pos2, op2) = self.bit_operands();

        let op = match op2 {
            OPC2_32_BIT_AND_T => BitOp::And,
            OPC2_32_BIT_ANDN_T => BitOp::Andc,
            OPC2_32_BIT_NOR_T => BitOp::Nor,
            OPC2_32_BIT_OR_T => BitOp::Or,
            _ => return Err(self.invalid32()),
        };
        self.bit_1op(d, s1, s2, pos1, pos2, op);
        Ok(())
    }

    fn decode_bit_insert_group(&mut self) -> Result<(), DecodeError> {
        let (d, s1, s2, pos1, pos2, op2) = self.bit_operands();

        let invert = match op2 {
            OPC2_32_BIT_INS_T => false,
            OPC2_32_BIT_INSN_T => true,
            _ => return Err(self.invalid32()),
        };
        self.bit_insert(d, s1, s2, pos1, pos2, invert);
        Ok(())
    }

    fn decode_bit_logical_t2(&mut self) -> Result<(), DecodeError> {
        let (d, s1, s2, pos1, pos2, op2) = self.bit_operands();

        let op = match op2 {
            OPC2_32_BIT_NAND_T => BitOp::Nand,
            OPC2_32_BIT_ORN_T => BitOp::Orc,
            OPC2_32_BIT_XNOR_T => BitOp::Eqv,
            OPC2_32_BIT_XOR_T => BitOp::Xor,
            _ => return Err(self.invalid32()),
        };
        self.bit_1op(d, s1, s2, pos1, pos2, op);
        Ok(())
    }

    fn decode_bit_orand(&mut self) -> Result<(), DecodeError> {
        let (d, s1, s2, pos1, pos2, op2) = self.bit_operands();

        let (inner, outer) = match op2 {
            OPC2_32_BIT_OR_AND_T => (BitOp::And, BitOp::Or),
            OPC2_32_BIT_OR_ANDN_T => (BitOp::Andc, BitOp::Or),
            OPC2_32_BIT_OR_NOR_T => (BitOp::Or, BitOp::Orc),
            OPC2_32_BIT_OR_OR_T => (BitOp::Or, BitOp::Or),
            _ => return Err(self.invalid32()),
        };
        self.bit_2op(d, s1, s2, pos1, pos2, inner, outer);
        Ok(())
    }

    fn decode_bit_sh_logic1(&mut self) -> Result<(), DecodeError> {
        let (d, s1, s2, pos1, pos2, op2) = self.bit_operands();

        let op = match op2 {
            OPC2_32_BIT_SH_AND_T => BitOp::And,
            OPC2_32_BIT_SH_ANDN_T => BitOp::Andc,
            OPC2_32_BIT_SH_NOR_T => BitOp::Nor,
            OPC2_32_BIT_SH_OR_T => BitOp::Or,
            _ => return Err(self.invalid32()),
        };
        self.bit_sh_logic(d, s1, s2, pos1, pos2, op);
        Ok(())
    }

    fn decode_bit_sh_logic2(&mut self) -> Result<(), DecodeError> {
        let (d, s1, s2, pos1, pos2, op2) = self.bit_operands();

        let op = match op2 {
            OPC2_32_BIT_SH_NAND_T => BitOp::Nand,
            OPC2_32_BIT_SH_ORN_T => BitOp::Orc,
            OPC2_32_BIT_SH_XNOR_T => BitOp::Eqv,
            OPC2_32_BIT_SH_XOR_T => BitOp::Xor,
            _ => return Err(self.invalid32()),
        };
        self.bit_sh_logic(d, s1, s2, pos1, pos2, op);
        Ok(())
    }

    // === BO format ===

    fn decode_bo_st_post_pre_base(&mut self) -> Result<(), DecodeError> {
        let r1 = fields::bo_s1d(self.opcode);
        let r2 = fields::bo_s2(self.opcode);
        let off10 = fields::bo_off10_sext(self.opcode);
        let op2 = fields::bo_op2(self.opcode);
        let base = self.regs.gpr_a[r2];

        match op2 {
            OPC2_32_BO_CACHEA_WI_SHORTOFF
            | OPC2_32_BO_CACHEA_W_SHORTOFF
            | OPC2_32_BO_CACHEA_I_SHORTOFF => {
                // Cache hint; nothing to emit.
            }
            OPC2_32_BO_CACHEA_WI_POSTINC
            | OPC2_32_BO_CACHEA_W_POSTINC
            | OPC2_32_BO_CACHEA_I_POSTINC
            | OPC2_32_BO_CACHEA_WI_PREINC
            | OPC2_32_BO_CACHEA_W_PREINC
            | OPC2_32_BO_CACHEA_I_PREINC => {
                // Cache hint, but the addressing-mode update still happens.
                // TODO: this updates D[b]; the ISA reads A[b]. Cross-check.
                let d2 = self.regs.gpr_d[r2];
                self.ir.addi(d2, d2, off10);
            }
            OPC2_32_BO_CACHEI_WI_SHORTOFF | OPC2_32_BO_CACHEI_W_SHORTOFF => {
                if self.env.has_feature(Feature::TriCore13) {
                    self.raise_illegal_opc();
                }
            }
            OPC2_32_BO_CACHEI_W_POSTINC
            | OPC2_32_BO_CACHEI_WI_POSTINC
            | OPC2_32_BO_CACHEI_W_PREINC
            | OPC2_32_BO_CACHEI_WI_PREINC => {
                if self.env.has_feature(Feature::TriCore13) {
                    self.raise_illegal_opc();
                } else {
                    // TODO: this updates D[b]; the ISA reads A[b]. Cross-check.
                    let d2 = self.regs.gpr_d[r2];
                    self.ir.addi(d2, d2, off10);
                }
            }
            OPC2_32_BO_ST_A_SHORTOFF => {
                self.offset_st(self.regs.gpr_a[r1], base, off10, MemOp::U32);
            }
            OPC2_32_BO_ST_A_POSTINC => {
                self.ir.qemu_st(self.regs.gpr_a[r1], base, MemOp::U32, self.mem_idx);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_ST_A_PREINC => {
                self.st_preincr(self.regs.gpr_a[r1], base, off10, MemOp::U32);
            }
            OPC2_32_BO_ST_B_SHORTOFF => {
                self.offset_st(self.regs.gpr_d[r1], base, off10, MemOp::U8);
            }
            OPC2_32_BO_ST_B_POSTINC => {
                self.ir.qemu_st(self.regs.gpr_d[r1], base, MemOp::U8, self.mem_idx);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_ST_B_PREINC => {
                self.st_preincr(self.regs.gpr_d[r1], base, off10, MemOp::U8);
            }
            OPC2_32_BO_ST_D_SHORTOFF => {
                let hi = self.regs.gpr_d[fields::pair_hi(r1)];
                self.offset_st_2regs(hi, self.regs.gpr_d[r1], base, off10);
            }
            OPC2_32_BO_ST_D_POSTINC => {
                let hi = self.regs.gpr_d[fields::pair_hi(r1)];
                self.st_2regs_64(hi, self.regs.gpr_d[r1], base);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_ST_D_PREINC => {
                let hi = self.regs.gpr_d[fields::pair_hi(r1)];
                let temp = self.ir.new_temp();
                self.ir.addi(temp, base, off10);
                self.st_2regs_64(hi, self.regs.gpr_d[r1], temp);
                self.ir.mov(base, temp);
                self.ir.free_temp(temp);
            }
            OPC2_32_BO_ST_DA_SHORTOFF => {
                let hi = self.regs.gpr_a[fields::pair_hi(r1)];
                self.offset_st_2regs(hi, self.regs.gpr_a[r1], base, off10);
            }
            OPC2_32_BO_ST_DA_POSTINC => {
                let hi = self.regs.gpr_a[fields::pair_hi(r1)];
                self.st_2regs_64(hi, self.regs.gpr_a[r1], base);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_ST_DA_PREINC => {
                let hi = self.regs.gpr_a[fields::pair_hi(r1)];
                let temp = self.ir.new_temp();
                self.ir.addi(temp, base, off10);
                self.st_2regs_64(hi, self.regs.gpr_a[r1], temp);
                self.ir.mov(base, temp);
                self.ir.free_temp(temp);
            }
            OPC2_32_BO_ST_H_SHORTOFF => {
                self.offset_st(self.regs.gpr_d[r1], base, off10, MemOp::U16);
            }
            OPC2_32_BO_ST_H_POSTINC => {
                self.ir.qemu_st(self.regs.gpr_d[r1], base, MemOp::U16, self.mem_idx);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_ST_H_PREINC => {
                self.st_preincr(self.regs.gpr_d[r1], base, off10, MemOp::U16);
            }
            OPC2_32_BO_ST_Q_SHORTOFF => {
                let temp = self.ir.new_temp();
                self.ir.shri(temp, self.regs.gpr_d[r1], 16);
                self.offset_st(temp, base, off10, MemOp::U16);
                self.ir.free_temp(temp);
            }
            OPC2_32_BO_ST_Q_POSTINC => {
                let temp = self.ir.new_temp();
                self.ir.shri(temp, self.regs.gpr_d[r1], 16);
                self.ir.qemu_st(temp, base, MemOp::U16, self.mem_idx);
                self.ir.addi(base, base, off10);
                self.ir.free_temp(temp);
            }
            OPC2_32_BO_ST_Q_PREINC => {
                let temp = self.ir.new_temp();
                self.ir.shri(temp, self.regs.gpr_d[r1], 16);
                self.st_preincr(temp, base, off10, MemOp::U16);
                self.ir.free_temp(temp);
            }
            OPC2_32_BO_ST_W_SHORTOFF => {
                self.offset_st(self.regs.gpr_d[r1], base, off10, MemOp::U32);
            }
            OPC2_32_BO_ST_W_POSTINC => {
                self.ir.qemu_st(self.regs.gpr_d[r1], base, MemOp::U32, self.mem_idx);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_ST_W_PREINC => {
                self.st_preincr(self.regs.gpr_d[r1], base, off10, MemOp::U32);
            }
            _ => return Err(self.invalid32()),
        }
        Ok(())
    }

    fn decode_bo_st_bitrev_circ(&mut self) -> Result<(), DecodeError> {
        let r1 = fields::bo_s1d(self.opcode);
        let r2 = fields::bo_s2(self.opcode);
        let off10 = fields::bo_off10_sext(self.opcode);
        let op2 = fields::bo_op2(self.opcode);
        let e = self.br_circ_ea(r2, off10);

        match op2 {
            OPC2_32_BO_CACHEA_WI_BR | OPC2_32_BO_CACHEA_W_BR | OPC2_32_BO_CACHEA_I_BR => {
                self.br_update(r2);
            }
            OPC2_32_BO_CACHEA_WI_CIRC | OPC2_32_BO_CACHEA_W_CIRC | OPC2_32_BO_CACHEA_I_CIRC => {
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_ST_A_BR => {
                self.ir.qemu_st(self.regs.gpr_a[r1], e.ea, MemOp::U32, self.mem_idx);
                self.br_update(r2);
            }
            OPC2_32_BO_ST_A_CIRC => {
                self.ir.qemu_st(self.regs.gpr_a[r1], e.ea, MemOp::U32, self.mem_idx);
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_ST_B_BR => {
                self.ir.qemu_st(self.regs.gpr_d[r1], e.ea, MemOp::U8, self.mem_idx);
                self.br_update(r2);
            }
            OPC2_32_BO_ST_B_CIRC => {
                self.ir.qemu_st(self.regs.gpr_d[r1], e.ea, MemOp::U8, self.mem_idx);
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_ST_D_BR => {
                let hi = self.regs.gpr_d[fields::pair_hi(r1)];
                self.st_2regs_64(hi, self.regs.gpr_d[r1], e.ea);
                self.br_update(r2);
            }
            OPC2_32_BO_ST_D_CIRC => {
                // Each 32-bit half wraps independently.
                self.ir.qemu_st(self.regs.gpr_d[r1], e.ea, MemOp::U32, self.mem_idx);
                self.circ_second_half_ea(r2, &e);
                let hi = self.regs.gpr_d[fields::pair_hi(r1)];
                self.ir.qemu_st(hi, e.ea, MemOp::U32, self.mem_idx);
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_ST_DA_BR => {
                let hi = self.regs.gpr_a[fields::pair_hi(r1)];
                self.st_2regs_64(hi, self.regs.gpr_a[r1], e.ea);
                self.br_update(r2);
            }
            OPC2_32_BO_ST_DA_CIRC => {
                self.ir.qemu_st(self.regs.gpr_a[r1], e.ea, MemOp::U32, self.mem_idx);
                self.circ_second_half_ea(r2, &e);
                let hi = self.regs.gpr_a[fields::pair_hi(r1)];
                self.ir.qemu_st(hi, e.ea, MemOp::U32, self.mem_idx);
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_ST_H_BR => {
                self.ir.qemu_st(self.regs.gpr_d[r1], e.ea, MemOp::U16, self.mem_idx);
                self.br_update(r2);
            }
            OPC2_32_BO_ST_H_CIRC => {
                self.ir.qemu_st(self.regs.gpr_d[r1], e.ea, MemOp::U16, self.mem_idx);
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_ST_Q_BR => {
                self.ir.shri(e.index, self.regs.gpr_d[r1], 16);
                self.ir.qemu_st(e.index, e.ea, MemOp::U16, self.mem_idx);
                self.br_update(r2);
            }
            OPC2_32_BO_ST_Q_CIRC => {
                self.ir.shri(e.index, self.regs.gpr_d[r1], 16);
                self.ir.qemu_st(e.index, e.ea, MemOp::U16, self.mem_idx);
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_ST_W_BR => {
                self.ir.qemu_st(self.regs.gpr_d[r1], e.ea, MemOp::U32, self.mem_idx);
                self.br_update(r2);
            }
            OPC2_32_BO_ST_W_CIRC => {
                self.ir.qemu_st(self.regs.gpr_d[r1], e.ea, MemOp::U32, self.mem_idx);
                self.circ_update(r2, e.off);
            }
            _ => {
                self.free_br_circ(e);
                return Err(self.invalid32());
            }
        }
        self.free_br_circ(e);
        Ok(())
    }

    fn decode_bo_ld_post_pre_base(&mut self) -> Result<(), DecodeError> {
        let r1 = fields::bo_s1d(self.opcode);
        let r2 = fields::bo_s2(self.opcode);
        let off10 = fields::bo_off10_sext(self.opcode);
        let op2 = fields::bo_op2(self.opcode);
        let base = self.regs.gpr_a[r2];

        match op2 {
            OPC2_32_BO_LD_A_SHORTOFF => {
                self.offset_ld(self.regs.gpr_a[r1], base, off10, MemOp::U32);
            }
            OPC2_32_BO_LD_A_POSTINC => {
                self.ir.qemu_ld(self.regs.gpr_a[r1], base, MemOp::U32, self.mem_idx);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_LD_A_PREINC => {
                self.ld_preincr(self.regs.gpr_a[r1], base, off10, MemOp::U32);
            }
            OPC2_32_BO_LD_B_SHORTOFF => {
                self.offset_ld(self.regs.gpr_d[r1], base, off10, MemOp::S8);
            }
            OPC2_32_BO_LD_B_POSTINC => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], base, MemOp::S8, self.mem_idx);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_LD_B_PREINC => {
                self.ld_preincr(self.regs.gpr_d[r1], base, off10, MemOp::S8);
            }
            OPC2_32_BO_LD_BU_SHORTOFF => {
                self.offset_ld(self.regs.gpr_d[r1], base, off10, MemOp::U8);
            }
            OPC2_32_BO_LD_BU_POSTINC => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], base, MemOp::U8, self.mem_idx);
                self.ir.addi(base, base, off10);
            }
            // TODO: LD.BU pre-increment sign-extends the byte here;
            // cross-check against the ISA manual, which zero-extends.
            OPC2_32_BO_LD_BU_PREINC => {
                self.ld_preincr(self.regs.gpr_d[r1], base, off10, MemOp::S8);
            }
            OPC2_32_BO_LD_D_SHORTOFF => {
                let hi = self.regs.gpr_d[fields::pair_hi(r1)];
                self.offset_ld_2regs(hi, self.regs.gpr_d[r1], base, off10);
            }
            OPC2_32_BO_LD_D_POSTINC => {
                let hi = self.regs.gpr_d[fields::pair_hi(r1)];
                self.ld_2regs_64(hi, self.regs.gpr_d[r1], base);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_LD_D_PREINC => {
                let hi = self.regs.gpr_d[fields::pair_hi(r1)];
                let temp = self.ir.new_temp();
                self.ir.addi(temp, base, off10);
                self.ld_2regs_64(hi, self.regs.gpr_d[r1], temp);
                self.ir.mov(base, temp);
                self.ir.free_temp(temp);
            }
            OPC2_32_BO_LD_DA_SHORTOFF => {
                let hi = self.regs.gpr_a[fields::pair_hi(r1)];
                self.offset_ld_2regs(hi, self.regs.gpr_a[r1], base, off10);
            }
            OPC2_32_BO_LD_DA_POSTINC => {
                let hi = self.regs.gpr_a[fields::pair_hi(r1)];
                self.ld_2regs_64(hi, self.regs.gpr_a[r1], base);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_LD_DA_PREINC => {
                let hi = self.regs.gpr_a[fields::pair_hi(r1)];
                let temp = self.ir.new_temp();
                self.ir.addi(temp, base, off10);
                self.ld_2regs_64(hi, self.regs.gpr_a[r1], temp);
                self.ir.mov(base, temp);
                self.ir.free_temp(temp);
            }
            OPC2_32_BO_LD_H_SHORTOFF => {
                self.offset_ld(self.regs.gpr_d[r1], base, off10, MemOp::S16);
            }
            OPC2_32_BO_LD_H_POSTINC => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], base, MemOp::S16, self.mem_idx);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_LD_H_PREINC => {
                self.ld_preincr(self.regs.gpr_d[r1], base, off10, MemOp::S16);
            }
            OPC2_32_BO_LD_HU_SHORTOFF => {
                self.offset_ld(self.regs.gpr_d[r1], base, off10, MemOp::U16);
            }
            OPC2_32_BO_LD_HU_POSTINC => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], base, MemOp::U16, self.mem_idx);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_LD_HU_PREINC => {
                self.ld_preincr(self.regs.gpr_d[r1], base, off10, MemOp::U16);
            }
            OPC2_32_BO_LD_Q_SHORTOFF => {
                self.offset_ld(self.regs.gpr_d[r1], base, off10, MemOp::U16);
                self.ir.shli(self.regs.gpr_d[r1], self.regs.gpr_d[r1], 16);
            }
            OPC2_32_BO_LD_Q_POSTINC => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], base, MemOp::U16, self.mem_idx);
                self.ir.shli(self.regs.gpr_d[r1], self.regs.gpr_d[r1], 16);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_LD_Q_PREINC => {
                self.ld_preincr(self.regs.gpr_d[r1], base, off10, MemOp::U16);
                self.ir.shli(self.regs.gpr_d[r1], self.regs.gpr_d[r1], 16);
            }
            OPC2_32_BO_LD_W_SHORTOFF => {
                self.offset_ld(self.regs.gpr_d[r1], base, off10, MemOp::U32);
            }
            OPC2_32_BO_LD_W_POSTINC => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], base, MemOp::U32, self.mem_idx);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_LD_W_PREINC => {
                self.ld_preincr(self.regs.gpr_d[r1], base, off10, MemOp::U32);
            }
            _ => return Err(self.invalid32()),
        }
        Ok(())
    }

    fn decode_bo_ld_bitrev_circ(&mut self) -> Result<(), DecodeError> {
        let r1 = fields::bo_s1d(self.opcode);
        let r2 = fields::bo_s2(self.opcode);
        let off10 = fields::bo_off10_sext(self.opcode);
        let op2 = fields::bo_op2(self.opcode);
        let e = self.br_circ_ea(r2, off10);

        match op2 {
            OPC2_32_BO_LD_A_BR => {
                self.ir.qemu_ld(self.regs.gpr_a[r1], e.ea, MemOp::U32, self.mem_idx);
                self.br_update(r2);
            }
            OPC2_32_BO_LD_A_CIRC => {
                self.ir.qemu_ld(self.regs.gpr_a[r1], e.ea, MemOp::U32, self.mem_idx);
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_LD_B_BR => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], e.ea, MemOp::S8, self.mem_idx);
                self.br_update(r2);
            }
            OPC2_32_BO_LD_B_CIRC => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], e.ea, MemOp::S8, self.mem_idx);
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_LD_BU_BR => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], e.ea, MemOp::U8, self.mem_idx);
                self.br_update(r2);
            }
            OPC2_32_BO_LD_BU_CIRC => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], e.ea, MemOp::U8, self.mem_idx);
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_LD_D_BR => {
                let hi = self.regs.gpr_d[fields::pair_hi(r1)];
                self.ld_2regs_64(hi, self.regs.gpr_d[r1], e.ea);
                self.br_update(r2);
            }
            OPC2_32_BO_LD_D_CIRC => {
                // Each 32-bit half wraps independently.
                self.ir.qemu_ld(self.regs.gpr_d[r1], e.ea, MemOp::U32, self.mem_idx);
                self.circ_second_half_ea(r2, &e);
                let hi = self.regs.gpr_d[fields::pair_hi(r1)];
                self.ir.qemu_ld(hi, e.ea, MemOp::U32, self.mem_idx);
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_LD_DA_BR => {
                let hi = self.regs.gpr_a[fields::pair_hi(r1)];
                self.ld_2regs_64(hi, self.regs.gpr_a[r1], e.ea);
                self.br_update(r2);
            }
            OPC2_32_BO_LD_DA_CIRC => {
                self.ir.qemu_ld(self.regs.gpr_a[r1], e.ea, MemOp::U32, self.mem_idx);
                self.circ_second_half_ea(r2, &e);
                let hi = self.regs.gpr_a[fields::pair_hi(r1)];
                self.ir.qemu_ld(hi, e.ea, MemOp::U32, self.mem_idx);
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_LD_H_BR => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], e.ea, MemOp::S16, self.mem_idx);
                self.br_update(r2);
            }
            OPC2_32_BO_LD_H_CIRC => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], e.ea, MemOp::S16, self.mem_idx);
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_LD_HU_BR => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], e.ea, MemOp::U16, self.mem_idx);
                self.br_update(r2);
            }
            OPC2_32_BO_LD_HU_CIRC => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], e.ea, MemOp::U16, self.mem_idx);
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_LD_Q_BR => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], e.ea, MemOp::U16, self.mem_idx);
                self.ir.shli(self.regs.gpr_d[r1], self.regs.gpr_d[r1], 16);
                self.br_update(r2);
            }
            OPC2_32_BO_LD_Q_CIRC => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], e.ea, MemOp::U16, self.mem_idx);
                self.ir.shli(self.regs.gpr_d[r1], self.regs.gpr_d[r1], 16);
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_LD_W_BR => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], e.ea, MemOp::U32, self.mem_idx);
                self.br_update(r2);
            }
            OPC2_32_BO_LD_W_CIRC => {
                self.ir.qemu_ld(self.regs.gpr_d[r1], e.ea, MemOp::U32, self.mem_idx);
                self.circ_update(r2, e.off);
            }
            _ => {
                self.free_br_circ(e);
                return Err(self.invalid32());
            }
        }
        self.free_br_circ(e);
        Ok(())
    }

    fn decode_bo_stctx_post_pre_base(&mut self) -> Result<(), DecodeError> {
        let r1 = fields::bo_s1d(self.opcode);
        let r2 = fields::bo_s2(self.opcode);
        let off10 = fields::bo_off10_sext(self.opcode);
        let op2 = fields::bo_op2(self.opcode);
        let base = self.regs.gpr_a[r2];

        match op2 {
            OPC2_32_BO_LDLCX_SHORTOFF => {
                let temp = self.ir.new_temp();
                self.ir.addi(temp, base, off10);
                self.ir.call_helper(Helper::Ldlcx, None, &[temp]);
                self.ir.free_temp(temp);
            }
            OPC2_32_BO_LDMST_SHORTOFF => {
                let temp = self.ir.new_temp();
                self.ir.addi(temp, base, off10);
                self.ldmst(r1, temp);
                self.ir.free_temp(temp);
            }
            OPC2_32_BO_LDMST_POSTINC => {
                self.ldmst(r1, base);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_LDMST_PREINC => {
                self.ir.addi(base, base, off10);
                self.ldmst(r1, base);
            }
            OPC2_32_BO_LDUCX_SHORTOFF => {
                let temp = self.ir.new_temp();
                self.ir.addi(temp, base, off10);
                self.ir.call_helper(Helper::Lducx, None, &[temp]);
                self.ir.free_temp(temp);
            }
            OPC2_32_BO_LEA_SHORTOFF => {
                self.ir.addi(self.regs.gpr_a[r1], base, off10);
            }
            OPC2_32_BO_STLCX_SHORTOFF => {
                let temp = self.ir.new_temp();
                self.ir.addi(temp, base, off10);
                self.ir.call_helper(Helper::Stlcx, None, &[temp]);
                self.ir.free_temp(temp);
            }
            OPC2_32_BO_STUCX_SHORTOFF => {
                let temp = self.ir.new_temp();
                self.ir.addi(temp, base, off10);
                self.ir.call_helper(Helper::Stucx, None, &[temp]);
                self.ir.free_temp(temp);
            }
            OPC2_32_BO_SWAP_W_SHORTOFF => {
                let temp = self.ir.new_temp();
                self.ir.addi(temp, base, off10);
                self.swap(r1, temp);
                self.ir.free_temp(temp);
            }
            OPC2_32_BO_SWAP_W_POSTINC => {
                self.swap(r1, base);
                self.ir.addi(base, base, off10);
            }
            OPC2_32_BO_SWAP_W_PREINC => {
                self.ir.addi(base, base, off10);
                self.swap(r1, base);
            }
            _ => return Err(self.invalid32()),
        }
        Ok(())
    }

    fn decode_bo_ldmst_bitrev_circ(&mut self) -> Result<(), DecodeError> {
        let r1 = fields::bo_s1d(self.opcode);
        let r2 = fields::bo_s2(self.opcode);
        let off10 = fields::bo_off10_sext(self.opcode);
        let op2 = fields::bo_op2(self.opcode);
        let e = self.br_circ_ea(r2, off10);

        match op2 {
            OPC2_32_BO_LDMST_BR => {
                self.ldmst(r1, e.ea);
                self.br_update(r2);
            }
            OPC2_32_BO_LDMST_CIRC => {
                self.ldmst(r1, e.ea);
                self.circ_update(r2, e.off);
            }
            OPC2_32_BO_SWAP_W_BR => {
                self.swap(r1, e.ea);
                self.br_update(r2);
            }
            OPC2_32_BO_SWAP_W_CIRC => {
                self.swap(r1, e.ea);
                self.circ_update(r2, e.off);
            }
            _ => {
                self.free_br_circ(e);
                return Err(self.invalid32());
            }
        }
        self.free_br_circ(e);
        Ok(())
    }
}
