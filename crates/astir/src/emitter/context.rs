//! Emitter context.
//!
//! An emitter context carries everything a lowering call needs: a handle
//! to the IR builder, an architecture descriptor, and the jump targets in
//! scope (where to go on `return`, `break`, `continue`). Some
//! implementations of this idea bundle all of it into one struct and
//! mutate the jump targets with explicit save/restore around each nested
//! construct — a workaround for not having first-class closures over
//! immutable state. Rust doesn't need that workaround: the always-mutable
//! collaborators (`ir`, `regs`) live in one bundle, threaded by `&mut`
//! reference, while the jump targets are plain immutable values passed
//! down the call stack as each construct needs them. That removes the
//! save/restore stack-discipline invariant entirely — there is no mutable
//! jump-target state left to leak between sibling constructs, so nothing
//! needs restoring.
//!
//! `EmitterCtx` here is the mutable half: the IR builder handle, the
//! architecture descriptor, and the register allocator, threaded by `&mut`
//! through every lowering call. `FnCtx` and `LoopCtx` are the immutable
//! half, constructed once per function/loop and passed down by reference.

use crate::arch::Architecture;
use crate::ir::context::IrContext;
use crate::ir::types::BlockId;
use crate::regalloc::RegisterAllocator;

pub struct EmitterCtx<'a> {
    pub ir: &'a mut IrContext,
    pub arch: &'a dyn Architecture,
    pub regs: &'a mut dyn RegisterAllocator,
}

/// The block control returns to on a `return` statement. One per function
/// being lowered; never mutated once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FnCtx {
    pub return_to: BlockId,
}

/// The blocks `break`/`continue` jump to inside the loop or iteration
/// construct currently being lowered. Lowering a statement outside of any
/// loop threads `None` for this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopCtx {
    pub break_to: BlockId,
    pub continue_to: BlockId,
}
