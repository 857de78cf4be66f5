//! Target-independent IR surface for the TriCore translator front-end.
//!
//! The translator core decodes guest instructions and emits operations into
//! an [`IrBuilder`]. The builder records the stream as plain data so a
//! backend (or a test) can walk it; nothing here generates host code.
//!
//! The surface follows the usual micro-op translator split:
//! - **Globals**: registers declared once per translator that mirror guest
//!   architectural state. They live for the whole translator lifetime.
//! - **Temporaries**: pooled per-block scratch registers. Every temporary
//!   acquired during emission must be released before the block ends; the
//!   builder keeps an acquire/release balance so leaks are detectable.
//! - **Ops**: forward-only operation stream. No reordering ever happens, so
//!   guest memory-access order is preserved by construction.

mod builder;
mod cond;
mod memop;
mod op;

pub use builder::{IrBuilder, Label, Reg, Reg64};
pub use cond::Cond;
pub use memop::MemOp;
pub use op::{Helper, Op};
