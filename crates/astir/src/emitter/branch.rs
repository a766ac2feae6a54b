//! Branch lowerer: `if`/`else`.

use anyhow::Result;

use crate::emitter::context::{EmitterCtx, FnCtx, LoopCtx};
use crate::emitter::stmt::lower_code;
use crate::ir::types::BlockId;
use crate::value::{emit_branch_on_value, Expr};

/// Lowers an `if (cond) { then_body } else { else_body }`, returning the
/// continuation block both arms rejoin at.
#[allow(clippy::too_many_arguments)]
pub fn lower_branch(
    ectx: &mut EmitterCtx,
    fctx: &FnCtx,
    lctx: Option<&LoopCtx>,
    block: BlockId,
    cond: &Expr,
    then_body: &[crate::ast::Stmt],
    else_body: &[crate::ast::Stmt],
) -> Result<BlockId> {
    let continuation = ectx.ir.block_create();
    let if_true = ectx.ir.block_create();
    let if_false = ectx.ir.block_create();

    emit_branch_on_value(ectx, block, cond, if_true, if_false)?;

    lower_code(ectx, fctx, lctx, if_true, then_body, continuation)?;
    lower_code(ectx, fctx, lctx, if_false, else_body, continuation)?;

    Ok(continuation)
}
