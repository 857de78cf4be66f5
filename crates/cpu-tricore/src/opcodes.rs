//! TriCore opcode catalog.
//!
//! Numeric opcode values from the TriCore architecture manual's instruction
//! tables, grouped by encoding format. Naming scheme:
//!
//! - `OPC1_*`: a primary opcode that fully selects one instruction.
//! - `OPCM_*`: a primary opcode shared by a format group; a secondary
//!   opcode field (`OPC2_*`) selects the instruction within the group.
//!
//! 16-bit primary opcodes live in bits \[7:0\] of the half-word (always
//! even; bit 0 clear marks a 16-bit encoding). 32-bit primary opcodes live
//! in bits \[7:0\] of the word with bit 0 set. Secondary opcode fields are
//! format-specific (see `fields`).

// === 16-bit: SRC format ===

pub const OPC1_16_SRC_ADD: u32 = 0xc2;
pub const OPC1_16_SRC_ADD_A15: u32 = 0x92;
pub const OPC1_16_SRC_ADD_15A: u32 = 0x9a;
pub const OPC1_16_SRC_ADD_A: u32 = 0xb0;
pub const OPC1_16_SRC_CADD: u32 = 0x8a;
pub const OPC1_16_SRC_CADDN: u32 = 0xca;
pub const OPC1_16_SRC_CMOV: u32 = 0xaa;
pub const OPC1_16_SRC_CMOVN: u32 = 0xea;
pub const OPC1_16_SRC_EQ: u32 = 0xba;
pub const OPC1_16_SRC_LT: u32 = 0xfa;
pub const OPC1_16_SRC_MOV: u32 = 0x82;
pub const OPC1_16_SRC_MOV_A: u32 = 0xa0;
pub const OPC1_16_SRC_SH: u32 = 0x06;
pub const OPC1_16_SRC_SHA: u32 = 0x86;

// === 16-bit: SRR format ===

pub const OPC1_16_SRR_ADD: u32 = 0x42;
pub const OPC1_16_SRR_ADD_A15: u32 = 0x12;
pub const OPC1_16_SRR_ADD_15A: u32 = 0x1a;
pub const OPC1_16_SRR_ADD_A: u32 = 0x30;
pub const OPC1_16_SRR_ADDS: u32 = 0x22;
pub const OPC1_16_SRR_AND: u32 = 0x26;
pub const OPC1_16_SRR_CMOV: u32 = 0x2a;
pub const OPC1_16_SRR_CMOVN: u32 = 0x6a;
pub const OPC1_16_SRR_EQ: u32 = 0x3a;
pub const OPC1_16_SRR_LT: u32 = 0x7a;
pub const OPC1_16_SRR_MOV: u32 = 0x02;
pub const OPC1_16_SRR_MOV_A: u32 = 0x60;
pub const OPC1_16_SRR_MOV_AA: u32 = 0x40;
pub const OPC1_16_SRR_MOV_D: u32 = 0x80;
pub const OPC1_16_SRR_MUL: u32 = 0xe2;
pub const OPC1_16_SRR_OR: u32 = 0xa6;
pub const OPC1_16_SRR_SUB: u32 = 0xa2;
pub const OPC1_16_SRR_SUB_A15B: u32 = 0x52;
pub const OPC1_16_SRR_SUB_15AB: u32 = 0x5a;
pub const OPC1_16_SRR_SUBS: u32 = 0x62;
pub const OPC1_16_SRR_XOR: u32 = 0xc6;

// === 16-bit: SSR format (stores, optional post-increment) ===

pub const OPC1_16_SSR_ST_A: u32 = 0xf4;
pub const OPC1_16_SSR_ST_A_POSTINC: u32 = 0xe4;
pub const OPC1_16_SSR_ST_B: u32 = 0x34;
pub const OPC1_16_SSR_ST_B_POSTINC: u32 = 0x24;
pub const OPC1_16_SSR_ST_H: u32 = 0xb4;
pub const OPC1_16_SSR_ST_H_POSTINC: u32 = 0xa4;
pub const OPC1_16_SSR_ST_W: u32 = 0x74;
pub const OPC1_16_SSR_ST_W_POSTINC: u32 = 0x64;

// === 16-bit: SRRS format ===

/// ADDSC.A has a 6-bit primary opcode; the top-level decoder masks the
/// major with 0x3f before matching this value.
pub const OPC1_16_SRRS_ADDSC_A: u32 = 0x10;

// === 16-bit: SLRO format (A15-relative loads) ===

pub const OPC1_16_SLRO_LD_A: u32 = 0xc8;
pub const OPC1_16_SLRO_LD_BU: u32 = 0x08;
pub const OPC1_16_SLRO_LD_H: u32 = 0x88;
pub const OPC1_16_SLRO_LD_W: u32 = 0x48;

// === 16-bit: SB format ===

pub const OPC1_16_SB_CALL: u32 = 0x5c;
pub const OPC1_16_SB_J: u32 = 0x3c;
pub const OPC1_16_SB_JNZ: u32 = 0xee;
pub const OPC1_16_SB_JZ: u32 = 0x6e;

// === 16-bit: SBC format ===

pub const OPC1_16_SBC_JEQ: u32 = 0x1e;
pub const OPC1_16_SBC_JNE: u32 = 0x5e;

// === 16-bit: SBRN format (bit-test branches) ===

pub const OPC1_16_SBRN_JNZ_T: u32 = 0xae;
pub const OPC1_16_SBRN_JZ_T: u32 = 0x2e;

// === 16-bit: SBR format ===

pub const OPC1_16_SBR_JEQ: u32 = 0x3e;
pub const OPC1_16_SBR_JGEZ: u32 = 0xce;
pub const OPC1_16_SBR_JGTZ: u32 = 0x4e;
pub const OPC1_16_SBR_JLEZ: u32 = 0x8e;
pub const OPC1_16_SBR_JLTZ: u32 = 0x0e;
pub const OPC1_16_SBR_JNE: u32 = 0x7e;
pub const OPC1_16_SBR_JNZ: u32 = 0xf6;
pub const OPC1_16_SBR_JNZ_A: u32 = 0x7c;
pub const OPC1_16_SBR_JZ: u32 = 0x76;
pub const OPC1_16_SBR_JZ_A: u32 = 0xbc;
pub const OPC1_16_SBR_LOOP: u32 = 0xfc;

// === 16-bit: SC format (D15/A10-implicit) ===

pub const OPC1_16_SC_AND: u32 = 0x16;
pub const OPC1_16_SC_BISR: u32 = 0xe0;
pub const OPC1_16_SC_LD_A: u32 = 0xd8;
pub const OPC1_16_SC_LD_W: u32 = 0x58;
pub const OPC1_16_SC_MOV: u32 = 0xda;
pub const OPC1_16_SC_OR: u32 = 0x96;
pub const OPC1_16_SC_ST_A: u32 = 0xf8;
pub const OPC1_16_SC_ST_W: u32 = 0x78;
pub const OPC1_16_SC_SUB_A: u32 = 0x20;

// === 16-bit: SLR format (loads, optional post-increment) ===

pub const OPC1_16_SLR_LD_A: u32 = 0xd4;
pub const OPC1_16_SLR_LD_A_POSTINC: u32 = 0xc4;
pub const OPC1_16_SLR_LD_BU: u32 = 0x14;
pub const OPC1_16_SLR_LD_BU_POSTINC: u32 = 0x04;
pub const OPC1_16_SLR_LD_H: u32 = 0x94;
pub const OPC1_16_SLR_LD_H_POSTINC: u32 = 0x84;
pub const OPC1_16_SLR_LD_W: u32 = 0x54;
pub const OPC1_16_SLR_LD_W_POSTINC: u32 = 0x44;

// === 16-bit: SRO format (offset loads/stores via A15) ===

pub const OPC1_16_SRO_LD_A: u32 = 0xcc;
pub const OPC1_16_SRO_LD_BU: u32 = 0x0c;
pub const OPC1_16_SRO_LD_H: u32 = 0x8c;
pub const OPC1_16_SRO_LD_W: u32 = 0x4c;
pub const OPC1_16_SRO_ST_A: u32 = 0xec;
pub const OPC1_16_SRO_ST_B: u32 = 0x2c;
pub const OPC1_16_SRO_ST_H: u32 = 0xac;
pub const OPC1_16_SRO_ST_W: u32 = 0x6c;

// === 16-bit: SSRO format (A15-relative stores) ===

pub const OPC1_16_SSRO_ST_A: u32 = 0xe8;
pub const OPC1_16_SSRO_ST_B: u32 = 0x28;
pub const OPC1_16_SSRO_ST_H: u32 = 0xa8;
pub const OPC1_16_SSRO_ST_W: u32 = 0x68;

// === 16-bit: SR format ===

pub const OPCM_16_SR_SYSTEM: u32 = 0x00;
pub const OPCM_16_SR_ACCU: u32 = 0x32;
pub const OPC1_16_SR_JI: u32 = 0xdc;
pub const OPC1_16_SR_NOT: u32 = 0x46;

/// SR system group secondary opcodes (bits \[15:12\]).
pub const OPC2_16_SR_NOP: u32 = 0x00;
pub const OPC2_16_SR_RET: u32 = 0x09;
pub const OPC2_16_SR_RFE: u32 = 0x08;
pub const OPC2_16_SR_DEBUG: u32 = 0x0a;

/// SR accumulator group secondary opcodes (bits \[15:12\]).
pub const OPC2_16_SR_RSUB: u32 = 0x05;
pub const OPC2_16_SR_SAT_B: u32 = 0x00;
pub const OPC2_16_SR_SAT_BU: u32 = 0x01;
pub const OPC2_16_SR_SAT_H: u32 = 0x02;
pub const OPC2_16_SR_SAT_HU: u32 = 0x03;

// === 32-bit: ABS format groups ===

pub const OPCM_32_ABS_LDW: u32 = 0x85;
pub const OPCM_32_ABS_LDB: u32 = 0x05;
pub const OPCM_32_ABS_LDMST_SWAP: u32 = 0xe5;
pub const OPCM_32_ABS_LDST_CONTEXT: u32 = 0x15;
pub const OPCM_32_ABS_STORE: u32 = 0xa5;
pub const OPCM_32_ABS_STOREB_H: u32 = 0x25;
pub const OPC1_32_ABS_STOREQ: u32 = 0x65;
pub const OPC1_32_ABS_LD_Q: u32 = 0x45;
pub const OPC1_32_ABS_LEA: u32 = 0xc5;

/// ABS secondary opcodes (bits \[27:26\]), per group.
pub const OPC2_32_ABS_LD_A: u32 = 0x02;
pub const OPC2_32_ABS_LD_D: u32 = 0x01;
pub const OPC2_32_ABS_LD_DA: u32 = 0x03;
pub const OPC2_32_ABS_LD_W: u32 = 0x00;

pub const OPC2_32_ABS_LD_B: u32 = 0x00;
pub const OPC2_32_ABS_LD_BU: u32 = 0x01;
pub const OPC2_32_ABS_LD_H: u32 = 0x02;
pub const OPC2_32_ABS_LD_HU: u32 = 0x03;

pub const OPC2_32_ABS_LDMST: u32 = 0x01;
pub const OPC2_32_ABS_SWAP_W: u32 = 0x00;

pub const OPC2_32_ABS_LDLCX: u32 = 0x02;
pub const OPC2_32_ABS_LDUCX: u32 = 0x03;
pub const OPC2_32_ABS_STLCX: u32 = 0x00;
pub const OPC2_32_ABS_STUCX: u32 = 0x01;

pub const OPC2_32_ABS_ST_A: u32 = 0x02;
pub const OPC2_32_ABS_ST_D: u32 = 0x01;
pub const OPC2_32_ABS_ST_DA: u32 = 0x03;
pub const OPC2_32_ABS_ST_W: u32 = 0x00;

pub const OPC2_32_ABS_ST_B: u32 = 0x00;
pub const OPC2_32_ABS_ST_H: u32 = 0x02;

// === 32-bit: ABSB format ===

pub const OPC1_32_ABSB_ST_T: u32 = 0xd5;

// === 32-bit: B format ===

pub const OPC1_32_B_CALL: u32 = 0x6d;
pub const OPC1_32_B_CALLA: u32 = 0xed;
pub const OPC1_32_B_J: u32 = 0x1d;
pub const OPC1_32_B_JA: u32 = 0x9d;
pub const OPC1_32_B_JL: u32 = 0x5d;
pub const OPC1_32_B_JLA: u32 = 0xdd;

// === 32-bit: BIT format groups ===

pub const OPCM_32_BIT_ANDACC: u32 = 0x47;
pub const OPCM_32_BIT_LOGICAL_T1: u32 = 0x87;
pub const OPCM_32_BIT_INSERT: u32 = 0x67;
pub const OPCM_32_BIT_LOGICAL_T2: u32 = 0x07;
pub const OPCM_32_BIT_ORAND: u32 = 0xc7;
pub const OPCM_32_BIT_SH_LOGIC1: u32 = 0x27;
pub const OPCM_32_BIT_SH_LOGIC2: u32 = 0xa7;

/// BIT secondary opcodes (bits \[22:21\]), per group.
pub const OPC2_32_BIT_AND_AND_T: u32 = 0x00;
pub const OPC2_32_BIT_AND_ANDN_T: u32 = 0x03;
pub const OPC2_32_BIT_AND_NOR_T: u32 = 0x02;
pub const OPC2_32_BIT_AND_OR_T: u32 = 0x01;

pub const OPC2_32_BIT_AND_T: u32 = 0x00;
pub const OPC2_32_BIT_ANDN_T: u32 = 0x03;
pub const OPC2_32_BIT_NOR_T: u32 = 0x02;
pub const OPC2_32_BIT_OR_T: u32 = 0x01;

pub const OPC2_32_BIT_INS_T: u32 = 0x00;
pub const OPC2_32_BIT_INSN_T: u32 = 0x01;

pub const OPC2_32_BIT_NAND_T: u32 = 0x00;
pub const OPC2_32_BIT_ORN_T: u32 = 0x01;
pub const OPC2_32_BIT_XNOR_T: u32 = 0x02;
pub const OPC2_32_BIT_XOR_T: u32 = 0x03;

pub const OPC2_32_BIT_OR_AND_T: u32 = 0x00;
pub const OPC2_32_BIT_OR_ANDN_T: u32 = 0x03;
pub const OPC2_32_BIT_OR_NOR_T: u32 = 0x02;
pub const OPC2_32_BIT_OR_OR_T: u32 = 0x01;

pub const OPC2_32_BIT_SH_AND_T: u32 = 0x00;
pub const OPC2_32_BIT_SH_ANDN_T: u32 = 0x03;
pub const OPC2_32_BIT_SH_NOR_T: u32 = 0x02;
pub const OPC2_32_BIT_SH_OR_T: u32 = 0x01;

pub const OPC2_32_BIT_SH_NAND_T: u32 = 0x00;
pub const OPC2_32_BIT_SH_ORN_T: u32 = 0x01;
pub const OPC2_32_BIT_SH_XNOR_T: u32 = 0x02;
pub const OPC2_32_BIT_SH_XOR_T: u32 = 0x03;

// === 32-bit: BO format groups ===

pub const OPCM_32_BO_ADDRMODE_POST_PRE_BASE: u32 = 0x89;
pub const OPCM_32_BO_ADDRMODE_BITREVERSE_CIRCULAR: u32 = 0xa9;
pub const OPCM_32_BO_ADDRMODE_LD_POST_PRE_BASE: u32 = 0x09;
pub const OPCM_32_BO_ADDRMODE_LD_BITREVERSE_CIRCULAR: u32 = 0x29;
pub const OPCM_32_BO_ADDRMODE_STCTX_POST_PRE_BASE: u32 = 0x49;
pub const OPCM_32_BO_ADDRMODE_LDMST_BITREVERSE_CIRCULAR: u32 = 0x69;

// BO secondary opcodes (bits [27:22]). Within the post/pre/base groups,
// 0x20|n is short-offset, 0x00|n post-increment, 0x10|n pre-increment; the
// bit-reverse/circular groups reuse 0x00|n for bit-reverse and 0x10|n for
// circular.

pub const OPC2_32_BO_CACHEA_I_SHORTOFF: u32 = 0x2e;
pub const OPC2_32_BO_CACHEA_I_POSTINC: u32 = 0x0e;
pub const OPC2_32_BO_CACHEA_I_PREINC: u32 = 0x1e;
pub const OPC2_32_BO_CACHEA_I_BR: u32 = 0x0e;
pub const OPC2_32_BO_CACHEA_I_CIRC: u32 = 0x1e;
pub const OPC2_32_BO_CACHEA_W_SHORTOFF: u32 = 0x2c;
pub const OPC2_32_BO_CACHEA_W_POSTINC: u32 = 0x0c;
pub const OPC2_32_BO_CACHEA_W_PREINC: u32 = 0x1c;
pub const OPC2_32_BO_CACHEA_W_BR: u32 = 0x0c;
pub const OPC2_32_BO_CACHEA_W_CIRC: u32 = 0x1c;
pub const OPC2_32_BO_CACHEA_WI_SHORTOFF: u32 = 0x2d;
pub const OPC2_32_BO_CACHEA_WI_POSTINC: u32 = 0x0d;
pub const OPC2_32_BO_CACHEA_WI_PREINC: u32 = 0x1d;
pub const OPC2_32_BO_CACHEA_WI_BR: u32 = 0x0d;
pub const OPC2_32_BO_CACHEA_WI_CIRC: u32 = 0x1d;

pub const OPC2_32_BO_CACHEI_W_SHORTOFF: u32 = 0x2b;
pub const OPC2_32_BO_CACHEI_W_POSTINC: u32 = 0x0b;
pub const OPC2_32_BO_CACHEI_W_PREINC: u32 = 0x1b;
pub const OPC2_32_BO_CACHEI_WI_SHORTOFF: u32 = 0x2f;
pub const OPC2_32_BO_CACHEI_WI_POSTINC: u32 = 0x0f;
pub const OPC2_32_BO_CACHEI_WI_PREINC: u32 = 0x1f;

pub const OPC2_32_BO_ST_A_SHORTOFF: u32 = 0x26;
pub const OPC2_32_BO_ST_A_POSTINC: u32 = 0x06;
pub const OPC2_32_BO_ST_A_PREINC: u32 = 0x16;
pub const OPC2_32_BO_ST_A_BR: u32 = 0x06;
pub const OPC2_32_BO_ST_A_CIRC: u32 = 0x16;
pub const OPC2_32_BO_ST_B_SHORTOFF: u32 = 0x20;
pub const OPC2_32_BO_ST_B_POSTINC: u32 = 0x00;
pub const OPC2_32_BO_ST_B_PREINC: u32 = 0x10;
pub const OPC2_32_BO_ST_B_BR: u32 = 0x00;
pub const OPC2_32_BO_ST_B_CIRC: u32 = 0x10;
pub const OPC2_32_BO_ST_D_SHORTOFF: u32 = 0x25;
pub const OPC2_32_BO_ST_D_POSTINC: u32 = 0x05;
pub const OPC2_32_BO_ST_D_PREINC: u32 = 0x15;
pub const OPC2_32_BO_ST_D_BR: u32 = 0x05;
pub const OPC2_32_BO_ST_D_CIRC: u32 = 0x15;
pub const OPC2_32_BO_ST_DA_SHORTOFF: u32 = 0x27;
pub const OPC2_32_BO_ST_DA_POSTINC: u32 = 0x07;
pub const OPC2_32_BO_ST_DA_PREINC: u32 = 0x17;
pub const OPC2_32_BO_ST_DA_BR: u32 = 0x07;
pub const OPC2_32_BO_ST_DA_CIRC: u32 = 0x17;
pub const OPC2_32_BO_ST_H_SHORTOFF: u32 = 0x22;
pub const OPC2_32_BO_ST_H_POSTINC: u32 = 0x02;
pub const OPC2_32_BO_ST_H_PREINC: u32 = 0x12;
pub const OPC2_32_BO_ST_H_BR: u32 = 0x02;
pub const OPC2_32_BO_ST_H_CIRC: u32 = 0x12;
pub const OPC2_32_BO_ST_Q_SHORTOFF: u32 = 0x28;
pub const OPC2_32_BO_ST_Q_POSTINC: u32 = 0x08;
pub const OPC2_32_BO_ST_Q_PREINC: u32 = 0x18;
pub const OPC2_32_BO_ST_Q_BR: u32 = 0x08;
pub const OPC2_32_BO_ST_Q_CIRC: u32 = 0x18;
pub const OPC2_32_BO_ST_W_SHORTOFF: u32 = 0x24;
pub const OPC2_32_BO_ST_W_POSTINC: u32 = 0x04;
pub const OPC2_32_BO_ST_W_PREINC: u32 = 0x14;
pub const OPC2_32_BO_ST_W_BR: u32 = 0x04;
pub const OPC2_32_BO_ST_W_CIRC: u32 = 0x14;

pub const OPC2_32_BO_LD_A_SHORTOFF: u32 = 0x26;
pub const OPC2_32_BO_LD_A_POSTINC: u32 = 0x06;
pub const OPC2_32_BO_LD_A_PREINC: u32 = 0x16;
pub const OPC2_32_BO_LD_A_BR: u32 = 0x06;
pub const OPC2_32_BO_LD_A_CIRC: u32 = 0x16;
pub const OPC2_32_BO_LD_B_SHORTOFF: u32 = 0x20;
pub const OPC2_32_BO_LD_B_POSTINC: u32 = 0x00;
pub const OPC2_32_BO_LD_B_PREINC: u32 = 0x10;
pub const OPC2_32_BO_LD_B_BR: u32 = 0x00;
pub const OPC2_32_BO_LD_B_CIRC: u32 = 0x10;
pub const OPC2_32_BO_LD_BU_SHORTOFF: u32 = 0x21;
pub const OPC2_32_BO_LD_BU_POSTINC: u32 = 0x01;
pub const OPC2_32_BO_LD_BU_PREINC: u32 = 0x11;
pub const OPC2_32_BO_LD_BU_BR: u32 = 0x01;
pub const OPC2_32_BO_LD_BU_CIRC: u32 = 0x11;
pub const OPC2_32_BO_LD_D_SHORTOFF: u32 = 0x25;
pub const OPC2_32_BO_LD_D_POSTINC: u32 = 0x05;
pub const OPC2_32_BO_LD_D_PREINC: u32 = 0x15;
pub const OPC2_32_BO_LD_D_BR: u32 = 0x05;
pub const OPC2_32_BO_LD_D_CIRC: u32 = 0x15;
pub const OPC2_32_BO_LD_DA_SHORTOFF: u32 = 0x27;
pub const OPC2_32_BO_LD_DA_POSTINC: u32 = 0x07;
pub const OPC2_32_BO_LD_DA_PREINC: u32 = 0x17;
pub const OPC2_32_BO_LD_DA_BR: u32 = 0x07;
pub const OPC2_32_BO_LD_DA_CIRC: u32 = 0x17;
pub const OPC2_32_BO_LD_H_SHORTOFF: u32 = 0x22;
pub const OPC2_32_BO_LD_H_POSTINC: u32 = 0x02;
pub const OPC2_32_BO_LD_H_PREINC: u32 = 0x12;
pub const OPC2_32_BO_LD_H_BR: u32 = 0x02;
pub const OPC2_32_BO_LD_H_CIRC: u32 = 0x12;
pub const OPC2_32_BO_LD_HU_SHORTOFF: u32 = 0x23;
pub const OPC2_32_BO_LD_HU_POSTINC: u32 = 0x03;
pub const OPC2_32_BO_LD_HU_PREINC: u32 = 0x13;
pub const OPC2_32_BO_LD_HU_BR: u32 = 0x03;
pub const OPC2_32_BO_LD_HU_CIRC: u32 = 0x13;
pub const OPC2_32_BO_LD_Q_SHORTOFF: u32 = 0x28;
pub const OPC2_32_BO_LD_Q_POSTINC: u32 = 0x08;
pub const OPC2_32_BO_LD_Q_PREINC: u32 = 0x18;
pub const OPC2_32_BO_LD_Q_BR: u32 = 0x08;
pub const OPC2_32_BO_LD_Q_CIRC: u32 = 0x18;
pub const OPC2_32_BO_LD_W_SHORTOFF: u32 = 0x24;
pub const OPC2_32_BO_LD_W_POSTINC: u32 = 0x04;
pub const OPC2_32_BO_LD_W_PREINC: u32 = 0x14;
pub const OPC2_32_BO_LD_W_BR: u32 = 0x04;
pub const OPC2_32_BO_LD_W_CIRC: u32 = 0x14;

pub const OPC2_32_BO_LDLCX_SHORTOFF: u32 = 0x24;
pub const OPC2_32_BO_LDMST_SHORTOFF: u32 = 0x21;
pub const OPC2_32_BO_LDMST_POSTINC: u32 = 0x01;
pub const OPC2_32_BO_LDMST_PREINC: u32 = 0x11;
pub const OPC2_32_BO_LDMST_BR: u32 = 0x01;
pub const OPC2_32_BO_LDMST_CIRC: u32 = 0x11;
pub const OPC2_32_BO_LDUCX_SHORTOFF: u32 = 0x25;
pub const OPC2_32_BO_LEA_SHORTOFF: u32 = 0x28;
pub const OPC2_32_BO_STLCX_SHORTOFF: u32 = 0x26;
pub const OPC2_32_BO_STUCX_SHORTOFF: u32 = 0x27;
pub const OPC2_32_BO_SWAP_W_SHORTOFF: u32 = 0x20;
pub const OPC2_32_BO_SWAP_W_POSTINC: u32 = 0x00;
pub const OPC2_32_BO_SWAP_W_PREINC: u32 = 0x10;
pub const OPC2_32_BO_SWAP_W_BR: u32 = 0x00;
pub const OPC2_32_BO_SWAP_W_CIRC: u32 = 0x10;
