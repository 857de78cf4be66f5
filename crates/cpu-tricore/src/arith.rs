//! Arithmetic emitters with PSW flag-cache updates.
//!
//! Flag rules for a 32-bit signed result:
//! - V: add → `(result ^ a) & !(a ^ b)`, sub → `(result ^ a) & (a ^ b)`.
//!   The full computed word lands in the V cache; only bit 31 is
//!   architecturally significant.
//! - SV: `SV | V` (sticky).
//! - AV: `(result + result) ^ result`: bit 31 flags a bit-30/31 mismatch.
//! - SAV: `SAV | AV` (sticky).
//! - C: written only by `shaci` here; the saturating ops go through
//!   run-time helpers that own both result and flags.

use tricore_ir::{Cond, Helper, Reg};

use crate::translate::BlockCtx;

impl BlockCtx<'_> {
    /// `ret = r1 + r2`, updating V/SV/AV/SAV.
    pub(crate) fn add_d(&mut self, ret: Reg, r1: Reg, r2: Reg) {
        let t0 = self.ir.new_temp();
        let result = self.ir.new_temp();
        self.ir.add(result, r1, r2);
        // V
        self.ir.xor(self.regs.psw_v, result, r1);
        self.ir.xor(t0, r1, r2);
        self.ir.andc(self.regs.psw_v, self.regs.psw_v, t0);
        // SV
        self.ir.or(self.regs.psw_sv, self.regs.psw_sv, self.regs.psw_v);
        // AV / SAV
        self.ir.add(self.regs.psw_av, result, result);
        self.ir.xor(self.regs.psw_av, result, self.regs.psw_av);
        self.ir.or(self.regs.psw_sav, self.regs.psw_sav, self.regs.psw_av);
        self.ir.mov(ret, result);
        self.ir.free_temp(result);
        self.ir.free_temp(t0);
    }

    /// `ret = r1 + const`, updating V/SV/AV/SAV.
    pub(crate) fn addi_d(&mut self, ret: Reg, r1: Reg, value: i32) {
        let temp = self.ir.const_i32(value as u32);
        self.add_d(ret, r1, temp);
        self.ir.free_temp(temp);
    }

    /// `ret = r1 - r2`, updating V/SV/AV/SAV.
    pub(crate) fn sub_d(&mut self, ret: Reg, r1: Reg, r2: Reg) {
        let temp = self.ir.new_temp();
        let result = self.ir.new_temp();
        self.ir.sub(result, r1, r2);
        // V
        self.ir.xor(self.regs.psw_v, result, r1);
        self.ir.xor(temp, r1, r2);
        self.ir.and(self.regs.psw_v, self.regs.psw_v, temp);
        // SV
        self.ir.or(self.regs.psw_sv, self.regs.psw_sv, self.regs.psw_v);
        // AV / SAV
        self.ir.add(self.regs.psw_av, result, result);
        self.ir.xor(self.regs.psw_av, result, self.regs.psw_av);
        self.ir.or(self.regs.psw_sav, self.regs.psw_sav, self.regs.psw_av);
        self.ir.mov(ret, result);
        self.ir.free_temp(result);
        self.ir.free_temp(temp);
    }

    /// Widening signed multiply, low 32 bits kept. V is set when the high
    /// half disagrees with the sign-extension of the low half.
    pub(crate) fn mul_i32s(&mut self, ret: Reg, r1: Reg, r2: Reg) {
        let high = self.ir.new_temp();
        let low = self.ir.new_temp();
        self.ir.muls2(low, high, r1, r2);
        self.ir.mov(ret, low);
        // V
        self.ir.sari(low, low, 31);
        self.ir.setcond(Cond::Ne, self.regs.psw_v, high, low);
        self.ir.shli(self.regs.psw_v, self.regs.psw_v, 31);
        // SV
        self.ir.or(self.regs.psw_sv, self.regs.psw_sv, self.regs.psw_v);
        // AV / SAV
        self.ir.add(self.regs.psw_av, ret, ret);
        self.ir.xor(self.regs.psw_av, ret, self.regs.psw_av);
        self.ir.or(self.regs.psw_sav, self.regs.psw_sav, self.regs.psw_av);
        self.ir.free_temp(high);
        self.ir.free_temp(low);
    }

    /// Conditional `r3 = r1 + r2`, gated on `cond(r4, 0)` over the full
    /// source word. Flags and destination are preserved when the condition
    /// does not hold.
    pub(crate) fn cond_add(&mut self, cond: Cond, r1: Reg, r2: Reg, r3: Reg, r4: Reg) {
        let temp = self.ir.new_temp();
        let temp2 = self.ir.new_temp();
        let result = self.ir.new_temp();
        let mask = self.ir.new_temp();
        let t0 = self.ir.const_i32(0);

        // Bit-31 mask for the sticky updates.
        self.ir.setcond(cond, mask, r4, t0);
        self.ir.shli(mask, mask, 31);

        self.ir.add(result, r1, r2);
        // V
        self.ir.xor(temp, result, r1);
        self.ir.xor(temp2, r1, r2);
        self.ir.andc(temp, temp, temp2);
        self.ir.movcond(cond, self.regs.psw_v, r4, t0, temp, self.regs.psw_v);
        // SV
        self.ir.and(temp, temp, mask);
        self.ir.or(self.regs.psw_sv, temp, self.regs.psw_sv);
        // AV
        self.ir.add(temp, result, result);
        self.ir.xor(temp, temp, result);
        self.ir.movcond(cond, self.regs.psw_av, r4, t0, temp, self.regs.psw_av);
        // SAV
        self.ir.and(temp, temp, mask);
        self.ir.or(self.regs.psw_sav, temp, self.regs.psw_sav);

        self.ir.movcond(cond, r3, r4, t0, result, r3);

        self.ir.free_temp(t0);
        self.ir.free_temp(mask);
        self.ir.free_temp(result);
        self.ir.free_temp(temp2);
        self.ir.free_temp(temp);
    }

    /// Conditional add with a constant addend.
    pub(crate) fn condi_add(&mut self, cond: Cond, r1: Reg, value: i32, r3: Reg, r4: Reg) {
        let temp = self.ir.const_i32(value as u32);
        self.cond_add(cond, r1, temp, r3, r4);
        self.ir.free_temp(temp);
    }

    /// Saturating signed add (helper owns result and flags).
    pub(crate) fn adds(&mut self, ret: Reg, r1: Reg, r2: Reg) {
        self.ir.call_helper(Helper::AddSsov, Some(ret), &[r1, r2]);
    }

    /// Saturating signed subtract.
    pub(crate) fn subs(&mut self, ret: Reg, r1: Reg, r2: Reg) {
        self.ir.call_helper(Helper::SubSsov, Some(ret), &[r1, r2]);
    }

    /// Reflexive negate with overflow tracking: V only for `i32::MIN`.
    pub(crate) fn rsub(&mut self, reg: Reg) {
        let temp = self.ir.const_i32(0x8000_0000);
        // V
        self.ir.setcond(Cond::Eq, self.regs.psw_v, reg, temp);
        self.ir.shli(self.regs.psw_v, self.regs.psw_v, 31);
        // SV
        self.ir.or(self.regs.psw_sv, self.regs.psw_sv, self.regs.psw_v);
        self.ir.neg(reg, reg);
        // AV / SAV
        self.ir.add(self.regs.psw_av, reg, reg);
        self.ir.xor(self.regs.psw_av, reg, self.regs.psw_av);
        self.ir.or(self.regs.psw_sav, self.regs.psw_sav, self.regs.psw_av);
        self.ir.free_temp(temp);
    }

    /// Clamp `arg` into `[low, up]` (signed). No flag updates.
    pub(crate) fn saturate(&mut self, ret: Reg, arg: Reg, up: i32, low: i32) {
        let sat_neg = self.ir.const_i32(low as u32);
        let temp = self.ir.const_i32(up as u32);
        // sat_neg = max(arg, low)
        self.ir.movcond(Cond::Lt, sat_neg, arg, sat_neg, sat_neg, arg);
        // ret = min(sat_neg, up)
        self.ir.movcond(Cond::Gt, ret, sat_neg, temp, temp, sat_neg);
        self.ir.free_temp(temp);
        self.ir.free_temp(sat_neg);
    }

    /// Clamp `arg` to at most `up` (unsigned).
    pub(crate) fn saturate_u(&mut self, ret: Reg, arg: Reg, up: u32) {
        let temp = self.ir.const_i32(up);
        self.ir.movcond(Cond::Gtu, ret, arg, temp, temp, arg);
        self.ir.free_temp(temp);
    }

    /// Logical shift by a constant: left for positive counts, right for
    /// negative; -32 clears the result. No flag updates.
    pub(crate) fn shi(&mut self, ret: Reg, r1: Reg, shift_count: i32) {
        if shift_count == -32 {
            self.ir.movi(ret, 0);
        } else if shift_count >= 0 {
            self.ir.shli(ret, r1, shift_count as u32);
        } else {
            self.ir.shri(ret, r1, (-shift_count) as u32);
        }
    }

    /// Arithmetic shift by a constant with C and V updates.
    ///
    /// - count 0: C and V cleared.
    /// - count -32: C takes the whole source word, result fills with the
    ///   sign bit, V cleared.
    /// - count > 0: C holds the bits shifted out of the top; V is set when
    ///   a significant bit would be lost (`r1 > 0x7FFFFFFF >> count` or
    ///   `r1 < i32::MIN >> count`).
    /// - count < 0: arithmetic right shift, C holds the low bits shifted
    ///   out, V cleared.
    ///
    /// AV/SAV always follow the final result.
    pub(crate) fn shaci(&mut self, ret: Reg, r1: Reg, shift_count: i32) {
        let temp = self.ir.new_temp();
        let temp2 = self.ir.new_temp();

        if shift_count == 0 {
            self.ir.movi(self.regs.psw_c, 0);
            self.ir.mov(self.regs.psw_v, self.regs.psw_c);
            self.ir.mov(ret, r1);
        } else if shift_count == -32 {
            self.ir.mov(self.regs.psw_c, r1);
            self.ir.sari(ret, r1, 31);
            self.ir.movi(self.regs.psw_v, 0);
        } else if shift_count > 0 {
            let t_max = self.ir.const_i32(0x7fff_ffff_u32 >> shift_count);
            let t_min = self.ir.const_i32((i32::MIN >> shift_count) as u32);
            // C: the top `count` bits before the shift.
            let msk_start = 32 - shift_count as u32;
            let msk = ((1u32 << shift_count) - 1) << msk_start;
            self.ir.andi(self.regs.psw_c, r1, msk);
            // V / SV
            self.ir.setcond(Cond::Gt, temp, r1, t_max);
            self.ir.setcond(Cond::Lt, temp2, r1, t_min);
            self.ir.or(self.regs.psw_v, temp, temp2);
            self.ir.shli(self.regs.psw_v, self.regs.psw_v, 31);
            self.ir.or(self.regs.psw_sv, self.regs.psw_v, self.regs.psw_sv);
            self.ir.shli(ret, r1, shift_count as u32);
            self.ir.free_temp(t_min);
            self.ir.free_temp(t_max);
        } else {
            self.ir.movi(self.regs.psw_v, 0);
            // C: the low `-count` bits before the shift.
            let msk = (1u32 << -shift_count) - 1;
            self.ir.andi(self.regs.psw_c, r1, msk);
            self.ir.sari(ret, r1, (-shift_count) as u32);
        }

        // AV / SAV on the final result.
        self.ir.add(self.regs.psw_av, ret, ret);
        self.ir.xor(self.regs.psw_av, ret, self.regs.psw_av);
        self.ir.or(self.regs.psw_sav, self.regs.psw_sav, self.regs.psw_av);

        self.ir.free_temp(temp2);
        self.ir.free_temp(temp);
    }
}
