//! The emitter core: AST-to-IR lowering.
//!
//! Split into one file per collaborator — a coordinating module plus
//! focused, single-concern files rather than one large one.

pub mod branch;
pub mod context;
pub mod function;
pub mod iter_;
pub mod loop_;
pub mod module;
pub mod ret;
pub mod scope;
pub mod stmt;

pub use context::{EmitterCtx, FnCtx, LoopCtx};
pub use module::lower_module;

#[cfg(test)]
pub(crate) mod testutil {
    use crate::arch::SysVAmd64;
    use crate::ir::context::IrContext;
    use crate::regalloc::FixedPool;

    /// Owned pieces a unit test assembles an `EmitterCtx` from. Returned
    /// as a tuple (rather than the `EmitterCtx` itself) since the context
    /// borrows each of these, and a test needs to keep them alive in its
    /// own stack frame.
    pub(crate) fn fresh_parts() -> (IrContext, SysVAmd64, FixedPool) {
        use crate::arch::Architecture;
        let arch = SysVAmd64;
        let mut regs = FixedPool::default();
        regs.reserve(arch.frame_base_register());
        regs.reserve(arch.integer_return_register());
        (IrContext::new(), arch, regs)
    }
}
