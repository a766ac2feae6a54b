//! Declaration lowerer: lowers local and global declarations into the IR,
//! deferring to the value lowerer for any initializer expression.

use anyhow::Result;

use crate::ast::{Decl, GlobalDecl};
use crate::emitter::context::EmitterCtx;
use crate::ir::types::BlockId;
use crate::value::{emit_value, Expr, ValueRequest};

/// Lowers a local declaration's initializer, if any, into `block`.
pub fn emit_decl(ectx: &mut EmitterCtx, block: BlockId, decl: &Decl) -> Result<()> {
    if let Some(init) = &decl.init {
        let assign = Expr::Assign(decl.symbol.clone(), Box::new(init.clone()));
        emit_value(ectx, block, &assign, ValueRequest::Void)?;
    }
    Ok(())
}

/// Lowers a module-level declaration. Has no current block to lower into —
/// a global either has no initializer or a constant one, so there is
/// nothing here that can split a block.
pub fn emit_global_decl(decl: &GlobalDecl) {
    let name = decl.symbol.borrow().name.clone();
    log::debug!("global decl: {name} init={:?}", decl.init);
}
