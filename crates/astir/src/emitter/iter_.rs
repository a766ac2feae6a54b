//! Iteration lowerer: C-style `for (init; cond; step) body`.

use anyhow::Result;

use crate::ast::Stmt;
use crate::decl::emit_decl;
use crate::emitter::context::{EmitterCtx, FnCtx, LoopCtx};
use crate::emitter::stmt::{lower_code, lower_stmt};
use crate::ir::types::BlockId;
use crate::value::{emit_branch_on_value, emit_value, Expr, ValueRequest};

#[allow(clippy::too_many_arguments)]
pub fn lower_iter(
    ectx: &mut EmitterCtx,
    fctx: &FnCtx,
    block: BlockId,
    init: Option<&Stmt>,
    cond: Option<&Expr>,
    step: Option<&Expr>,
    body: &[Stmt],
) -> Result<BlockId> {
    let continuation = ectx.ir.block_create();
    let loop_body = ectx.ir.block_create();
    let iterate = ectx.ir.block_create();

    let mut entry = block;
    if let Some(init) = init {
        entry = lower_init(ectx, fctx, entry, init)?;
    }

    branch_or_fallthrough(ectx, entry, cond, loop_body, continuation)?;

    let inner = LoopCtx {
        break_to: continuation,
        continue_to: iterate,
    };
    lower_code(ectx, fctx, Some(&inner), loop_body, body, iterate)?;

    if let Some(step) = step {
        emit_value(ectx, iterate, step, ValueRequest::Void)?;
    }
    branch_or_fallthrough(ectx, iterate, cond, loop_body, continuation)?;

    Ok(continuation)
}

/// `init` never contains control flow of its own in this language, so it
/// always leaves the incoming block intact rather than splitting it; the
/// general statement lowerer is still used so a plain declaration or
/// expression statement is handled the same way a statement-position
/// occurrence would be.
fn lower_init(ectx: &mut EmitterCtx, fctx: &FnCtx, block: BlockId, init: &Stmt) -> Result<BlockId> {
    match init {
        Stmt::Decl(decl) => {
            emit_decl(ectx, block, decl)?;
            Ok(block)
        }
        other => lower_stmt(ectx, fctx, None, block, other),
    }
}

fn branch_or_fallthrough(
    ectx: &mut EmitterCtx,
    block: BlockId,
    cond: Option<&Expr>,
    if_true: BlockId,
    if_false: BlockId,
) -> Result<()> {
    match cond {
        Some(cond) => emit_branch_on_value(ectx, block, cond, if_true, if_false),
        None => ectx.ir.jump(block, if_true),
    }
}
