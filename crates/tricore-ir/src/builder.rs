//! Recording IR builder: globals, pooled temporaries, labels, op stream.

use crate::cond::Cond;
use crate::memop::MemOp;
use crate::op::{Helper, Op};

/// Capacity of the per-block op buffer.
const OP_BUFFER_CAPACITY: usize = 640;

/// Worst-case ops a single guest instruction may emit. The driver stops the
/// block while at least this much headroom remains.
const MAX_OPS_PER_INSN: usize = 64;

/// Handle to a 32-bit IR register (global or temporary).
///
/// Globals occupy the low indices and are declared before any temporary is
/// ever allocated; everything above the global watermark is a temporary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reg(u32);

/// Handle to a 64-bit IR temporary (no 64-bit globals exist).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reg64(u32);

/// Branch target within a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label(u32);

/// Records IR operations for one translated block at a time.
///
/// Lifecycle: declare globals once via [`IrBuilder::global`], then per block
/// call [`IrBuilder::begin_block`], emit, and read the stream back with
/// [`IrBuilder::ops`]. Temporaries are pooled; [`IrBuilder::live_temps`]
/// must be zero at block boundaries (the translator driver checks).
#[derive(Debug, Default)]
pub struct IrBuilder {
    ops: Vec<Op>,
    /// Names of declared globals; `Reg(i)` with `i < globals.len()` is a
    /// global.
    globals: Vec<&'static str>,
    /// High-water mark of 32-bit register handles (globals + temps).
    next_reg: u32,
    free_temps: Vec<u32>,
    live_temps: u32,
    next_reg64: u32,
    free_temps64: Vec<u32>,
    live_temps64: u32,
    next_label: u32,
}

impl IrBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Globals ===

    /// Declare a named global register mirroring guest state.
    ///
    /// All globals must be declared before the first temporary allocation.
    pub fn global(&mut self, name: &'static str) -> Reg {
        debug_assert!(
            self.next_reg as usize == self.globals.len(),
            "globals must be declared before any temporary"
        );
        let r = Reg(self.next_reg);
        self.next_reg += 1;
        self.globals.push(name);
        r
    }

    /// Name of a global, if `r` is one.
    #[must_use]
    pub fn global_name(&self, r: Reg) -> Option<&'static str> {
        self.globals.get(r.0 as usize).copied()
    }

    /// True if `r` is a declared global.
    #[must_use]
    pub fn is_global(&self, r: Reg) -> bool {
        (r.0 as usize) < self.globals.len()
    }

    // === Temporaries ===

    /// Acquire a 32-bit temporary from the pool.
    pub fn new_temp(&mut self) -> Reg {
        self.live_temps += 1;
        if let Some(idx) = self.free_temps.pop() {
            return Reg(idx);
        }
        let r = Reg(self.next_reg);
        self.next_reg += 1;
        r
    }

    /// Release a 32-bit temporary back to the pool.
    pub fn free_temp(&mut self, r: Reg) {
        debug_assert!(!self.is_global(r), "attempt to free a global register");
        debug_assert!(self.live_temps > 0, "temporary freed twice");
        self.live_temps -= 1;
        self.free_temps.push(r.0);
    }

    /// Acquire a 64-bit temporary.
    pub fn new_temp64(&mut self) -> Reg64 {
        self.live_temps64 += 1;
        if let Some(idx) = self.free_temps64.pop() {
            return Reg64(idx);
        }
        let r = Reg64(self.next_reg64);
        self.next_reg64 += 1;
        r
    }

    /// Release a 64-bit temporary.
    pub fn free_temp64(&mut self, r: Reg64) {
        debug_assert!(self.live_temps64 > 0, "64-bit temporary freed twice");
        self.live_temps64 -= 1;
        self.free_temps64.push(r.0);
    }

    /// Allocate a temporary holding a constant. The caller frees it.
    pub fn const_i32(&mut self, value: u32) -> Reg {
        let t = self.new_temp();
        self.movi(t, value);
        t
    }

    /// Count of currently live temporaries (32- and 64-bit together).
    #[must_use]
    pub fn live_temps(&self) -> u32 {
        self.live_temps + self.live_temps64
    }

    // === Block lifecycle ===

    /// Reset per-block state (op stream, labels, temp pool). Globals
    /// survive.
    pub fn begin_block(&mut self) {
        self.ops.clear();
        self.next_label = 0;
        self.free_temps.clear();
        self.free_temps64.clear();
        self.live_temps = 0;
        self.live_temps64 = 0;
        self.next_reg = self.globals.len() as u32;
        self.next_reg64 = 0;
    }

    /// The recorded op stream for the current block.
    #[must_use]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// True once the op buffer is close enough to capacity that another
    /// guest instruction might not fit.
    #[must_use]
    pub fn nearly_full(&self) -> bool {
        self.ops.len() >= OP_BUFFER_CAPACITY - MAX_OPS_PER_INSN
    }

    // === Labels ===

    pub fn new_label(&mut self) -> Label {
        let l = Label(self.next_label);
        self.next_label += 1;
        l
    }

    pub fn set_label(&mut self, label: Label) {
        self.ops.push(Op::SetLabel { label });
    }

    // === Moves and constants ===

    pub fn mov(&mut self, d: Reg, s: Reg) {
        self.ops.push(Op::Mov { d, s });
    }

    pub fn movi(&mut self, d: Reg, value: u32) {
        self.ops.push(Op::Movi { d, value });
    }

    // === Arithmetic ===

    pub fn add(&mut self, d: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::Add { d, a, b });
    }

    pub fn addi(&mut self, d: Reg, a: Reg, value: i32) {
        self.ops.push(Op::Addi { d, a, value });
    }

    pub fn sub(&mut self, d: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::Sub { d, a, b });
    }

    pub fn neg(&mut self, d: Reg, s: Reg) {
        self.ops.push(Op::Neg { d, s });
    }

    pub fn muls2(&mut self, lo: Reg, hi: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::Muls2 { lo, hi, a, b });
    }

    pub fn rem(&mut self, d: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::Rem { d, a, b });
    }

    // === Bit logic ===

    pub fn not(&mut self, d: Reg, s: Reg) {
        self.ops.push(Op::Not { d, s });
    }

    pub fn and(&mut self, d: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::And { d, a, b });
    }

    pub fn andi(&mut self, d: Reg, a: Reg, value: u32) {
        self.ops.push(Op::Andi { d, a, value });
    }

    pub fn or(&mut self, d: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::Or { d, a, b });
    }

    pub fn ori(&mut self, d: Reg, a: Reg, value: u32) {
        self.ops.push(Op::Ori { d, a, value });
    }

    pub fn xor(&mut self, d: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::Xor { d, a, b });
    }

    pub fn xori(&mut self, d: Reg, a: Reg, value: u32) {
        self.ops.push(Op::Xori { d, a, value });
    }

    pub fn andc(&mut self, d: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::Andc { d, a, b });
    }

    pub fn orc(&mut self, d: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::Orc { d, a, b });
    }

    pub fn nand(&mut self, d: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::Nand { d, a, b });
    }

    pub fn nor(&mut self, d: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::Nor { d, a, b });
    }

    pub fn eqv(&mut self, d: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::Eqv { d, a, b });
    }

    // === Shifts ===

    pub fn shl(&mut self, d: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::Shl { d, a, b });
    }

    pub fn shli(&mut self, d: Reg, a: Reg, count: u32) {
        debug_assert!(count < 32);
        self.ops.push(Op::Shli { d, a, count });
    }

    pub fn shr(&mut self, d: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::Shr { d, a, b });
    }

    pub fn shri(&mut self, d: Reg, a: Reg, count: u32) {
        debug_assert!(count < 32);
        self.ops.push(Op::Shri { d, a, count });
    }

    pub fn sar(&mut self, d: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::Sar { d, a, b });
    }

    pub fn sari(&mut self, d: Reg, a: Reg, count: u32) {
        debug_assert!(count < 32);
        self.ops.push(Op::Sari { d, a, count });
    }

    // === Conditionals ===

    pub fn setcond(&mut self, cond: Cond, d: Reg, a: Reg, b: Reg) {
        self.ops.push(Op::Setcond { cond, d, a, b });
    }

    pub fn setcondi(&mut self, cond: Cond, d: Reg, a: Reg, value: i32) {
        self.ops.push(Op::Setcondi { cond, d, a, value });
    }

    pub fn movcond(&mut self, cond: Cond, d: Reg, c1: Reg, c2: Reg, t: Reg, f: Reg) {
        self.ops.push(Op::Movcond { cond, d, c1, c2, t, f });
    }

    // === Bit-field ===

    pub fn deposit(&mut self, d: Reg, base: Reg, src: Reg, pos: u32, width: u32) {
        debug_assert!(pos < 32 && width >= 1 && pos + width <= 32);
        self.ops.push(Op::Deposit { d, base, src, pos, width });
    }

    // === 32 ↔ 64 plumbing ===

    pub fn concat_i64(&mut self, d: Reg64, lo: Reg, hi: Reg) {
        self.ops.push(Op::Concat { d, lo, hi });
    }

    pub fn extract_i64(&mut self, lo: Reg, hi: Reg, s: Reg64) {
        self.ops.push(Op::Extract { lo, hi, s });
    }

    // === Guest memory ===

    pub fn qemu_ld(&mut self, d: Reg, addr: Reg, op: MemOp, mem_idx: u32) {
        self.ops.push(Op::Ld { d, addr, op, mem_idx });
    }

    pub fn qemu_st(&mut self, s: Reg, addr: Reg, op: MemOp, mem_idx: u32) {
        self.ops.push(Op::St { s, addr, op, mem_idx });
    }

    pub fn qemu_ld_i64(&mut self, d: Reg64, addr: Reg, mem_idx: u32) {
        self.ops.push(Op::Ld64 { d, addr, mem_idx });
    }

    pub fn qemu_st_i64(&mut self, s: Reg64, addr: Reg, mem_idx: u32) {
        self.ops.push(Op::St64 { s, addr, mem_idx });
    }

    // === Control flow ===

    pub fn brcond(&mut self, cond: Cond, a: Reg, b: Reg, target: Label) {
        self.ops.push(Op::Brcond { cond, a, b, target });
    }

    pub fn brcondi(&mut self, cond: Cond, a: Reg, value: i32, target: Label) {
        self.ops.push(Op::Brcondi { cond, a, value, target });
    }

    pub fn goto_tb(&mut self, slot: u32) {
        debug_assert!(slot < 2, "a block has two chain slots");
        self.ops.push(Op::GotoTb { slot });
    }

    pub fn exit_tb(&mut self, link: u32) {
        self.ops.push(Op::ExitTb { link });
    }

    // === Runtime helpers ===

    pub fn call_helper(&mut self, func: Helper, ret: Option<Reg>, args: &[Reg]) {
        self.ops.push(Op::CallHelper {
            func,
            ret,
            args: args.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn globals_then_temps() {
        let mut b = IrBuilder::new();
        let g = b.global("pc");
        assert!(b.is_global(g));
        assert_eq!(b.global_name(g), Some("pc"));

        let t = b.new_temp();
        assert!(!b.is_global(t));
        assert_eq!(b.live_temps(), 1);
        b.free_temp(t);
        assert_eq!(b.live_temps(), 0);
    }

    #[test]
    fn temp_pool_reuses_released_handles() {
        let mut b = IrBuilder::new();
        let t1 = b.new_temp();
        b.free_temp(t1);
        let t2 = b.new_temp();
        assert_eq!(t1, t2);
        b.free_temp(t2);
    }

    #[test]
    fn begin_block_keeps_globals_resets_ops() {
        let mut b = IrBuilder::new();
        let g = b.global("pc");
        b.movi(g, 4);
        assert_eq!(b.ops().len(), 1);

        b.begin_block();
        assert!(b.ops().is_empty());
        assert_eq!(b.global_name(g), Some("pc"));
        assert_eq!(b.live_temps(), 0);
    }

    #[test]
    fn const_i32_records_movi() {
        let mut b = IrBuilder::new();
        let t = b.const_i32(0xdead_beef);
        assert_eq!(b.ops(), &[Op::Movi { d: t, value: 0xdead_beef }]);
        b.free_temp(t);
    }

    #[test]
    fn nearly_full_trips_before_capacity() {
        let mut b = IrBuilder::new();
        let g = b.global("pc");
        while !b.nearly_full() {
            b.movi(g, 0);
        }
        // There must still be headroom for one worst-case instruction.
        assert!(b.ops().len() < OP_BUFFER_CAPACITY);
    }
}
