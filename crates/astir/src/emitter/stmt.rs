//! Statement lowerer.
//!
//! Threads the "current block" through a statement list — except here each
//! statement can itself hand back a *different* block to keep threading
//! from (after a branch, loop, or nested code block), since those
//! constructs rejoin at a freshly allocated continuation rather than
//! falling back into the block they were entered from.
//!
//! `return`/`break`/`continue` each seal the current block and then open a
//! fresh, unreachable block to keep lowering the remainder of the statement
//! list into — dead code a prior phase is assumed not to have produced, but
//! the lowerer still needs somewhere to put it rather than refusing to
//! proceed.

use anyhow::Result;

use crate::ast::Stmt;
use crate::decl::emit_decl;
use crate::emitter::branch::lower_branch;
use crate::emitter::context::{EmitterCtx, FnCtx, LoopCtx};
use crate::emitter::iter_::lower_iter;
use crate::emitter::loop_::{lower_do_while, lower_while};
use crate::emitter::ret::lower_return;
use crate::error::EmitError;
use crate::ir::types::BlockId;
use crate::value::{emit_value, ValueRequest};

/// Lowers one statement into `block`, returning the block subsequent
/// statements should be lowered into.
pub fn lower_stmt(
    ectx: &mut EmitterCtx,
    fctx: &FnCtx,
    lctx: Option<&LoopCtx>,
    block: BlockId,
    stmt: &Stmt,
) -> Result<BlockId> {
    match stmt {
        Stmt::Branch {
            cond,
            then_body,
            else_body,
        } => lower_branch(ectx, fctx, lctx, block, cond, then_body, else_body),

        Stmt::While { cond, body } => lower_while(ectx, fctx, block, cond, body),
        Stmt::DoWhile { body, cond } => lower_do_while(ectx, fctx, block, body, cond),

        Stmt::Iter {
            init,
            cond,
            step,
            body,
        } => lower_iter(
            ectx,
            fctx,
            block,
            init.as_deref(),
            cond.as_ref(),
            step.as_ref(),
            body,
        ),

        Stmt::Code(stmts) => {
            let continuation = ectx.ir.block_create();
            lower_code(ectx, fctx, lctx, block, stmts, continuation)?;
            Ok(continuation)
        }

        Stmt::Return(expr) => {
            lower_return(ectx, fctx, block, expr.as_ref())?;
            Ok(ectx.ir.block_create())
        }

        Stmt::Break => {
            let lctx = lctx.ok_or(EmitError::BreakOutsideLoop { site: "lower_stmt" })?;
            ectx.ir.jump(block, lctx.break_to)?;
            Ok(ectx.ir.block_create())
        }

        Stmt::Continue => {
            let lctx = lctx.ok_or(EmitError::ContinueOutsideLoop { site: "lower_stmt" })?;
            ectx.ir.jump(block, lctx.continue_to)?;
            Ok(ectx.ir.block_create())
        }

        Stmt::Decl(decl) => {
            emit_decl(ectx, block, decl)?;
            Ok(block)
        }

        Stmt::Expr(expr) => {
            emit_value(ectx, block, expr, ValueRequest::Void)?;
            Ok(block)
        }

        Stmt::Empty => Ok(block),
    }
}

/// Lowers a statement list into `block`, sealing the final block with a
/// jump to `continuation`.
pub fn lower_code(
    ectx: &mut EmitterCtx,
    fctx: &FnCtx,
    lctx: Option<&LoopCtx>,
    block: BlockId,
    stmts: &[Stmt],
    continuation: BlockId,
) -> Result<()> {
    let mut current = block;
    for stmt in stmts {
        current = lower_stmt(ectx, fctx, lctx, current, stmt)?;
    }
    ectx.ir.jump(current, continuation)
}
