//! Guest architectural state and external collaborator interfaces.
//!
//! The translator core never executes guest code; it only reads the CPU
//! model for feature gates and declares IR globals mirroring this state.
//! The run-time that executes the emitted IR owns the real state.

/// ISA revision gates for opcodes whose behavior changed between cores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// TriCore 1.3.
    TriCore13 = 0,
    /// TriCore 1.3.1.
    TriCore131 = 1,
    /// TriCore 1.6.
    TriCore16 = 2,
}

/// TriCore guest CPU state.
///
/// `gpr_a[10]` is conventionally the stack pointer and `gpr_a[11]` the
/// return address. The five `psw_usb_*` words cache the PSW status flags;
/// only bit 31 of each is architecturally significant, and the full PSW is
/// reconstituted from them on demand by the run-time.
#[derive(Debug, Clone)]
pub struct CpuTriCore {
    /// Program counter.
    pub pc: u32,
    /// Previous context information.
    pub pcxi: u32,
    /// Program status word.
    pub psw: u32,
    /// Interrupt control register.
    pub icr: u32,
    /// Address registers A0-A15.
    pub gpr_a: [u32; 16],
    /// Data registers D0-D15.
    pub gpr_d: [u32; 16],
    /// Carry flag cache.
    pub psw_usb_c: u32,
    /// Overflow flag cache.
    pub psw_usb_v: u32,
    /// Sticky overflow flag cache.
    pub psw_usb_sv: u32,
    /// Advance overflow flag cache.
    pub psw_usb_av: u32,
    /// Sticky advance overflow flag cache.
    pub psw_usb_sav: u32,
    features: u32,
}

impl CpuTriCore {
    /// Create a CPU model in reset state with no optional features.
    #[must_use]
    pub fn new() -> Self {
        let mut cpu = Self {
            pc: 0,
            pcxi: 0,
            psw: 0,
            icr: 0,
            gpr_a: [0; 16],
            gpr_d: [0; 16],
            psw_usb_c: 0,
            psw_usb_v: 0,
            psw_usb_sv: 0,
            psw_usb_av: 0,
            psw_usb_sav: 0,
            features: 0,
        };
        cpu.reset();
        cpu
    }

    /// Reset registers to their architectural defaults.
    pub fn reset(&mut self) {
        self.psw = 0xb80;
    }

    /// Enable an ISA revision feature.
    pub fn enable_feature(&mut self, feature: Feature) {
        self.features |= 1 << feature as u32;
    }

    /// Query an ISA revision feature.
    #[must_use]
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features & (1 << feature as u32) != 0
    }

    /// MMU index passed through to memory-access IR ops. TriCore has a
    /// single translation regime here.
    #[must_use]
    pub fn mmu_index(&self) -> u32 {
        0
    }
}

impl Default for CpuTriCore {
    fn default() -> Self {
        Self::new()
    }
}

/// Source of guest code bytes.
///
/// `fetch_code` reads 32 bits at `pc`; for a 16-bit instruction the driver
/// consumes only the low half. Encodings are stored little-endian, so the
/// over-read is harmless.
pub trait CodeMemory {
    fn fetch_code(&self, pc: u32) -> u32;
}

impl CodeMemory for [u8] {
    fn fetch_code(&self, pc: u32) -> u32 {
        let at = |off: u32| {
            let i = pc.wrapping_add(off) as usize;
            self.get(i).copied().unwrap_or(0)
        };
        u32::from(at(0))
            | u32::from(at(1)) << 8
            | u32::from(at(2)) << 16
            | u32::from(at(3)) << 24
    }
}

/// One translated block's record, owned by the translation cache.
///
/// The core fills `size` and `icount` when the block ends.
#[derive(Debug, Clone)]
pub struct TranslationBlock {
    /// Guest PC of the first instruction.
    pub pc: u32,
    /// Bytes of guest code covered.
    pub size: u32,
    /// Guest instructions translated.
    pub icount: u32,
    /// Disables chained exits and forces a block break after every
    /// instruction.
    pub singlestep: bool,
}

impl TranslationBlock {
    /// New empty block starting at `pc`.
    #[must_use]
    pub fn new(pc: u32) -> Self {
        Self {
            pc,
            size: 0,
            icount: 0,
            singlestep: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_psw_default() {
        let cpu = CpuTriCore::new();
        assert_eq!(cpu.psw, 0xb80);
    }

    #[test]
    fn feature_gates() {
        let mut cpu = CpuTriCore::new();
        assert!(!cpu.has_feature(Feature::TriCore13));
        cpu.enable_feature(Feature::TriCore13);
        assert!(cpu.has_feature(Feature::TriCore13));
        assert!(!cpu.has_feature(Feature::TriCore16));
    }

    #[test]
    fn slice_code_fetch_is_little_endian() {
        let bytes = [0x42u8, 0x21, 0x3c, 0x02];
        assert_eq!(bytes.as_slice().fetch_code(0), 0x023c_2142);
        assert_eq!(bytes.as_slice().fetch_code(2), 0x0000_023c);
    }
}
