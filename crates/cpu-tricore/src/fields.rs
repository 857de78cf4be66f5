//! Operand field extraction, one pure function per (format, field) pair.
//!
//! Sign-extension and any fixed scaling are baked in here so call sites
//! cannot forget them. 16-bit encodings occupy the low half-word of the
//! fetched 32-bit `insn`; their extractors only look at bits \[15:0\].
//!
//! Field positions per format:
//!
//! - SRC/SRR/SSR/SLR/SRO/SR/SBR/SBC/SBRN/SSRO/SLRO: register or immediate
//!   operands in \[11:8\] and \[15:12\]
//! - SB/SC: 8-bit operand in \[15:8\]
//! - SRRS: scale factor n in \[7:6\]
//! - ABS: off18 scattered over \[21:16\]∥\[31:28\]∥\[25:22\]∥\[15:12\]
//! - B: disp24 as \[31:16\] low, \[15:8\] high
//! - BIT: d \[31:28\], pos2 \[27:23\], op2 \[22:21\], pos1 \[20:16\]
//! - BO: off10 as \[21:16\] low, \[31:28\] high (signed), op2 \[27:22\]

#[inline]
fn field(insn: u32, lo: u32, len: u32) -> u32 {
    (insn >> lo) & ((1 << len) - 1)
}

#[inline]
fn field_sext(insn: u32, lo: u32, len: u32) -> i32 {
    ((insn << (32 - lo - len)) as i32) >> (32 - len)
}

/// Primary opcode, bits \[7:0\] of either encoding width.
#[inline]
pub fn op_major(insn: u32) -> u32 {
    insn & 0xff
}

// === 16-bit formats ===

#[inline]
pub fn src_s1d(insn: u32) -> usize {
    field(insn, 8, 4) as usize
}

/// Zero-extended const4 (used by the address-register immediate move).
#[inline]
pub fn src_const4(insn: u32) -> u32 {
    field(insn, 12, 4)
}

#[inline]
pub fn src_const4_sext(insn: u32) -> i32 {
    field_sext(insn, 12, 4)
}

#[inline]
pub fn srr_s1d(insn: u32) -> usize {
    field(insn, 8, 4) as usize
}

#[inline]
pub fn srr_s2(insn: u32) -> usize {
    field(insn, 12, 4) as usize
}

#[inline]
pub fn ssr_s1(insn: u32) -> usize {
    field(insn, 8, 4) as usize
}

#[inline]
pub fn ssr_s2(insn: u32) -> usize {
    field(insn, 12, 4) as usize
}

#[inline]
pub fn srrs_s1d(insn: u32) -> usize {
    field(insn, 8, 4) as usize
}

#[inline]
pub fn srrs_s2(insn: u32) -> usize {
    field(insn, 12, 4) as usize
}

/// SRRS scale factor n, bits \[7:6\].
#[inline]
pub fn srrs_n(insn: u32) -> u32 {
    field(insn, 6, 2)
}

#[inline]
pub fn sb_disp8_sext(insn: u32) -> i32 {
    field_sext(insn, 8, 8)
}

#[inline]
pub fn sbc_const4_sext(insn: u32) -> i32 {
    field_sext(insn, 12, 4)
}

#[inline]
pub fn sbc_disp4(insn: u32) -> i32 {
    field(insn, 8, 4) as i32
}

/// SBRN bit position n in \[0, 15\].
#[inline]
pub fn sbrn_n(insn: u32) -> u32 {
    field(insn, 12, 4)
}

#[inline]
pub fn sbrn_disp4(insn: u32) -> i32 {
    field(insn, 8, 4) as i32
}

#[inline]
pub fn sbr_s2(insn: u32) -> usize {
    field(insn, 12, 4) as usize
}

#[inline]
pub fn sbr_disp4(insn: u32) -> i32 {
    field(insn, 8, 4) as i32
}

/// Zero-extended const8, bits \[15:8\].
#[inline]
pub fn sc_const8(insn: u32) -> u32 {
    field(insn, 8, 8)
}

#[inline]
pub fn slr_d(insn: u32) -> usize {
    field(insn, 8, 4) as usize
}

#[inline]
pub fn slr_s2(insn: u32) -> usize {
    field(insn, 12, 4) as usize
}

#[inline]
pub fn slro_d(insn: u32) -> usize {
    field(insn, 8, 4) as usize
}

#[inline]
pub fn slro_off4(insn: u32) -> i32 {
    field(insn, 12, 4) as i32
}

#[inline]
pub fn sro_s2(insn: u32) -> usize {
    field(insn, 12, 4) as usize
}

#[inline]
pub fn sro_off4(insn: u32) -> i32 {
    field(insn, 8, 4) as i32
}

#[inline]
pub fn ssro_s1(insn: u32) -> usize {
    field(insn, 8, 4) as usize
}

#[inline]
pub fn ssro_off4(insn: u32) -> i32 {
    field(insn, 12, 4) as i32
}

#[inline]
pub fn sr_s1d(insn: u32) -> usize {
    field(insn, 8, 4) as usize
}

/// SR secondary opcode, bits \[15:12\].
#[inline]
pub fn sr_op2(insn: u32) -> u32 {
    field(insn, 12, 4)
}

// === 32-bit formats ===

#[inline]
pub fn abs_s1d(insn: u32) -> usize {
    field(insn, 8, 4) as usize
}

#[inline]
pub fn abs_op2(insn: u32) -> u32 {
    field(insn, 26, 2)
}

/// Reassemble the scattered 18-bit absolute offset field.
#[inline]
pub fn abs_off18(insn: u32) -> u32 {
    field(insn, 16, 6)
        | field(insn, 28, 4) << 6
        | field(insn, 22, 4) << 10
        | field(insn, 12, 4) << 14
}

/// Absolute effective address encoded by off18: the top four bits become
/// address bits \[31:28\], the low fourteen bits \[13:0\].
#[inline]
pub fn ea_abs(off18: u32) -> u32 {
    ((off18 & 0x3_c000) << 14) | (off18 & 0x3fff)
}

/// ABSB bit value b, bit \[11\].
#[inline]
pub fn absb_b(insn: u32) -> u32 {
    field(insn, 11, 1)
}

/// ABSB bit position within the byte, bits \[10:8\].
#[inline]
pub fn absb_bpos(insn: u32) -> u32 {
    field(insn, 8, 3)
}

#[inline]
pub fn b_disp24_sext(insn: u32) -> i32 {
    let disp = field(insn, 16, 16) | field(insn, 8, 8) << 16;
    ((disp << 8) as i32) >> 8
}

/// Absolute target encoded by a 24-bit B-format displacement: the top four
/// bits become address bits \[31:28\], the rest is a half-word-scaled
/// offset.
#[inline]
pub fn ea_b_absolute(disp24: u32) -> u32 {
    ((disp24 & 0xf0_0000) << 8) | ((disp24 & 0x0f_ffff) << 1)
}

#[inline]
pub fn bit_s1(insn: u32) -> usize {
    field(insn, 8, 4) as usize
}

#[inline]
pub fn bit_s2(insn: u32) -> usize {
    field(insn, 12, 4) as usize
}

#[inline]
pub fn bit_d(insn: u32) -> usize {
    field(insn, 28, 4) as usize
}

#[inline]
pub fn bit_pos1(insn: u32) -> u32 {
    field(insn, 16, 5)
}

#[inline]
pub fn bit_pos2(insn: u32) -> u32 {
    field(insn, 23, 5)
}

#[inline]
pub fn bit_op2(insn: u32) -> u32 {
    field(insn, 21, 2)
}

#[inline]
pub fn bo_s1d(insn: u32) -> usize {
    field(insn, 8, 4) as usize
}

#[inline]
pub fn bo_s2(insn: u32) -> usize {
    field(insn, 12, 4) as usize
}

#[inline]
pub fn bo_op2(insn: u32) -> u32 {
    field(insn, 22, 6)
}

#[inline]
pub fn bo_off10_sext(insn: u32) -> i32 {
    (field(insn, 16, 6) as i32) | field_sext(insn, 28, 4) << 6
}

/// High half of an even/odd register pair. Encodings are required to
/// supply an even index; odd indices are implementation-defined and only
/// checked in debug builds.
#[inline]
pub fn pair_hi(r: usize) -> usize {
    debug_assert_eq!(r & 1, 0, "register pair index must be even");
    r + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn const4_sign_extension() {
        // const4 = 0b0111 → 7, 0b1000 → -8
        assert_eq!(src_const4_sext(0x7082), 7);
        assert_eq!(src_const4_sext(0x8082), -8);
        assert_eq!(src_const4(0x8082), 8);
    }

    #[test]
    fn disp8_sign_extension() {
        assert_eq!(sb_disp8_sext(0x023c), 2);
        assert_eq!(sb_disp8_sext(0xff3c), -1);
        assert_eq!(sb_disp8_sext(0x803c), -128);
    }

    #[test]
    fn off10_sign_extension() {
        // off10 low six bits in [21:16], top four (signed) in [31:28].
        let insn = 0x3f << 16; // +0x3f
        assert_eq!(bo_off10_sext(insn), 0x3f);
        let insn = (0xf << 28) | (0x3f << 16); // all ones → -1
        assert_eq!(bo_off10_sext(insn), -1);
        let insn = 0x8 << 28; // sign bit only → -512
        assert_eq!(bo_off10_sext(insn), -512);
    }

    #[test]
    fn abs_off18_reassembly() {
        // Scatter off18 = 0x3ffff over its four fields and reassemble.
        let insn = (0x3f << 16) | (0xf << 28) | (0xf << 22) | (0xf << 12);
        assert_eq!(abs_off18(insn), 0x3_ffff);
        // Single-field checks.
        assert_eq!(abs_off18(0x3f << 16), 0x3f);
        assert_eq!(abs_off18(0xf << 28), 0xf << 6);
        assert_eq!(abs_off18(0xf << 22), 0xf << 10);
        assert_eq!(abs_off18(0xf << 12), 0xf << 14);
    }

    #[test]
    fn ea_abs_layout() {
        // All 18 bits set: address bits [31:28] and [13:0].
        assert_eq!(ea_abs(0x3_ffff), 0xf000_3fff);
        assert_eq!(ea_abs(0xc010), 0x3000_0010);
        assert_eq!(ea_abs(0), 0);
        // Exhaustive: the two halves never overlap and reassemble exactly.
        for off in (0..0x4_0000u32).step_by(0x123) {
            let ea = ea_abs(off);
            assert_eq!(ea, ((off & 0x3_c000) << 14) | (off & 0x3fff));
            assert_eq!(ea & 0x0fff_c000, 0);
        }
    }

    #[test]
    fn ea_b_absolute_layout() {
        assert_eq!(ea_b_absolute(0xff_ffff), 0xf01f_fffe);
        assert_eq!(ea_b_absolute(0x10_0000), 0x1000_0000);
        assert_eq!(ea_b_absolute(1), 2);
    }

    #[test]
    fn disp24_sign_extension() {
        // disp24 low 16 bits from [31:16], high 8 from [15:8].
        let insn = (0x0002 << 16) | (0x00 << 8);
        assert_eq!(b_disp24_sext(insn), 2);
        let insn = (0xffff << 16) | (0xff << 8);
        assert_eq!(b_disp24_sext(insn), -1);
        let insn = 0x80 << 8;
        assert_eq!(b_disp24_sext(insn), -(1 << 23));
    }

    #[test]
    fn bit_fields() {
        let insn = (0x5u32 << 28) | (0x1f << 23) | (0x2 << 21) | (0x1f << 16) | (0x3 << 12) | (0x4 << 8);
        assert_eq!(bit_d(insn), 5);
        assert_eq!(bit_pos2(insn), 31);
        assert_eq!(bit_op2(insn), 2);
        assert_eq!(bit_pos1(insn), 31);
        assert_eq!(bit_s2(insn), 3);
        assert_eq!(bit_s1(insn), 4);
    }
}
