use astir::arch::{Architecture, SysVAmd64};
use astir::emitter::{EmitterCtx, FnCtx};
use astir::ir::context::IrContext;
use astir::regalloc::FixedPool;

/// Owned pieces an end-to-end test assembles an `EmitterCtx` from, same
/// role as `astir`'s own internal `emitter::testutil::fresh_parts` but
/// public to this crate since it lives outside `astir`.
pub fn fresh_parts() -> (IrContext, SysVAmd64, FixedPool) {
    let arch = SysVAmd64;
    let mut regs = FixedPool::default();
    regs.reserve(arch.frame_base_register());
    regs.reserve(arch.integer_return_register());
    (IrContext::new(), arch, regs)
}

pub fn fn_ctx(return_to: astir::ir::types::BlockId) -> FnCtx {
    FnCtx { return_to }
}

#[allow(dead_code)]
pub fn make_ectx<'a>(
    ir: &'a mut IrContext,
    arch: &'a SysVAmd64,
    regs: &'a mut FixedPool,
) -> EmitterCtx<'a> {
    EmitterCtx { ir, arch, regs }
}
