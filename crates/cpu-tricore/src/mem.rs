//! Memory-access emitters.
//!
//! All guest data accesses are little-endian. Higher-order patterns built
//! on the raw load/store ops: base+offset, pre-/post-increment, 64-bit
//! register pairs (a single 64-bit access when the address mode allows),
//! load-modify-store, swap, and the effective-address setup shared by the
//! bit-reverse and circular addressing modes.

use tricore_ir::{Helper, MemOp, Reg};

use crate::fields;
use crate::translate::BlockCtx;

/// Registers backing one bit-reverse/circular access: the extracted index,
/// the computed effective address, and the constant offset operand.
pub(crate) struct BrCircEa {
    pub index: Reg,
    pub ea: Reg,
    pub off: Reg,
}

impl BlockCtx<'_> {
    /// Load from `base + off`.
    pub(crate) fn offset_ld(&mut self, d: Reg, base: Reg, off: i32, mop: MemOp) {
        let temp = self.ir.new_temp();
        self.ir.addi(temp, base, off);
        self.ir.qemu_ld(d, temp, mop, self.mem_idx);
        self.ir.free_temp(temp);
    }

    /// Store to `base + off`.
    pub(crate) fn offset_st(&mut self, s: Reg, base: Reg, off: i32, mop: MemOp) {
        let temp = self.ir.new_temp();
        self.ir.addi(temp, base, off);
        self.ir.qemu_st(s, temp, mop, self.mem_idx);
        self.ir.free_temp(temp);
    }

    /// Pre-increment load: `base += off`, then load from the new base.
    pub(crate) fn ld_preincr(&mut self, d: Reg, base: Reg, off: i32, mop: MemOp) {
        let temp = self.ir.new_temp();
        self.ir.addi(temp, base, off);
        self.ir.qemu_ld(d, temp, mop, self.mem_idx);
        self.ir.mov(base, temp);
        self.ir.free_temp(temp);
    }

    /// Pre-increment store.
    pub(crate) fn st_preincr(&mut self, s: Reg, base: Reg, off: i32, mop: MemOp) {
        let temp = self.ir.new_temp();
        self.ir.addi(temp, base, off);
        self.ir.qemu_st(s, temp, mop, self.mem_idx);
        self.ir.mov(base, temp);
        self.ir.free_temp(temp);
    }

    /// 64-bit load into an even/odd register pair as one memory operation.
    pub(crate) fn ld_2regs_64(&mut self, rh: Reg, rl: Reg, addr: Reg) {
        let temp = self.ir.new_temp64();
        self.ir.qemu_ld_i64(temp, addr, self.mem_idx);
        self.ir.extract_i64(rl, rh, temp);
        self.ir.free_temp64(temp);
    }

    /// 64-bit store of an even/odd register pair as one memory operation.
    pub(crate) fn st_2regs_64(&mut self, rh: Reg, rl: Reg, addr: Reg) {
        let temp = self.ir.new_temp64();
        self.ir.concat_i64(temp, rl, rh);
        self.ir.qemu_st_i64(temp, addr, self.mem_idx);
        self.ir.free_temp64(temp);
    }

    /// 64-bit pair load from `base + off`.
    pub(crate) fn offset_ld_2regs(&mut self, rh: Reg, rl: Reg, base: Reg, off: i32) {
        let temp = self.ir.new_temp();
        self.ir.addi(temp, base, off);
        self.ld_2regs_64(rh, rl, temp);
        self.ir.free_temp(temp);
    }

    /// 64-bit pair store to `base + off`.
    pub(crate) fn offset_st_2regs(&mut self, rh: Reg, rl: Reg, base: Reg, off: i32) {
        let temp = self.ir.new_temp();
        self.ir.addi(temp, base, off);
        self.st_2regs_64(rh, rl, temp);
        self.ir.free_temp(temp);
    }

    /// Load-modify-store: `M[ea] = (M[ea] & !E[r].hi) | (E[r].lo & E[r].hi)`
    /// in load → merge → store order.
    pub(crate) fn ldmst(&mut self, ereg: usize, ea: Reg) {
        let value = self.regs.gpr_d[ereg];
        let mask = self.regs.gpr_d[fields::pair_hi(ereg)];
        let temp = self.ir.new_temp();
        let temp2 = self.ir.new_temp();
        self.ir.qemu_ld(temp, ea, MemOp::U32, self.mem_idx);
        self.ir.andc(temp, temp, mask);
        self.ir.and(temp2, value, mask);
        self.ir.or(temp, temp, temp2);
        self.ir.qemu_st(temp, ea, MemOp::U32, self.mem_idx);
        self.ir.free_temp(temp2);
        self.ir.free_temp(temp);
    }

    /// Exchange `D[reg]` with `M[ea]`.
    pub(crate) fn swap(&mut self, reg: usize, ea: Reg) {
        let temp = self.ir.new_temp();
        self.ir.qemu_ld(temp, ea, MemOp::U32, self.mem_idx);
        self.ir.qemu_st(self.regs.gpr_d[reg], ea, MemOp::U32, self.mem_idx);
        self.ir.mov(self.regs.gpr_d[reg], temp);
        self.ir.free_temp(temp);
    }

    /// Effective-address setup shared by bit-reverse and circular modes:
    /// index is the low half of `A[b+1]`, the address is `A[b] + index`.
    pub(crate) fn br_circ_ea(&mut self, r2: usize, off10: i32) -> BrCircEa {
        let index = self.ir.new_temp();
        let ea = self.ir.new_temp();
        let off = self.ir.const_i32(off10 as u32);
        let a_hi = self.regs.gpr_a[fields::pair_hi(r2)];
        self.ir.andi(index, a_hi, 0xffff);
        self.ir.add(ea, self.regs.gpr_a[r2], index);
        BrCircEa { index, ea, off }
    }

    pub(crate) fn free_br_circ(&mut self, e: BrCircEa) {
        self.ir.free_temp(e.off);
        self.ir.free_temp(e.ea);
        self.ir.free_temp(e.index);
    }

    /// Second 32-bit half of a circular 64-bit pair access: the index
    /// advances by 4 modulo the length packed in `A[b+1][31:16]`, and
    /// `e.ea` is recomputed from it. Each half wraps independently.
    pub(crate) fn circ_second_half_ea(&mut self, r2: usize, e: &BrCircEa) {
        let a_hi = self.regs.gpr_a[fields::pair_hi(r2)];
        self.ir.shri(e.ea, a_hi, 16);
        self.ir.addi(e.index, e.index, 4);
        self.ir.rem(e.index, e.index, e.ea);
        self.ir.add(e.ea, self.regs.gpr_a[r2], e.index);
    }

    /// Post-access update of `A[b+1]` for bit-reverse mode.
    pub(crate) fn br_update(&mut self, r2: usize) {
        let a_hi = self.regs.gpr_a[fields::pair_hi(r2)];
        self.ir.call_helper(Helper::BrUpdate, Some(a_hi), &[a_hi]);
    }

    /// Post-access update of `A[b+1]` for circular mode.
    pub(crate) fn circ_update(&mut self, r2: usize, off: Reg) {
        let a_hi = self.regs.gpr_a[fields::pair_hi(r2)];
        self.ir.call_helper(Helper::CircUpdate, Some(a_hi), &[a_hi, off]);
    }
}
