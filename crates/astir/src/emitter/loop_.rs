//! Loop lowerer: `while`/`do-while`.
//!
//! `while` and `do-while` differ only in how the loop is entered: `while`
//! evaluates the condition before the first iteration, `do-while` jumps
//! straight into the body. Both re-evaluate the condition at the bottom of
//! the loop to decide whether to repeat — the condition is deliberately
//! lowered twice rather than hoisted into a single shared test, since
//! nothing downstream depends on single evaluation and duplicating the
//! check keeps both entry paths simple.

use anyhow::Result;

use crate::ast::Stmt;
use crate::emitter::context::{EmitterCtx, FnCtx, LoopCtx};
use crate::emitter::stmt::lower_code;
use crate::ir::types::BlockId;
use crate::value::{emit_branch_on_value, Expr};

pub fn lower_while(
    ectx: &mut EmitterCtx,
    fctx: &FnCtx,
    block: BlockId,
    cond: &Expr,
    body: &[Stmt],
) -> Result<BlockId> {
    let continuation = ectx.ir.block_create();
    let loop_body = ectx.ir.block_create();
    let loop_check = ectx.ir.block_create();

    emit_branch_on_value(ectx, block, cond, loop_body, continuation)?;

    let inner = LoopCtx {
        break_to: continuation,
        continue_to: loop_check,
    };
    lower_code(ectx, fctx, Some(&inner), loop_body, body, loop_check)?;

    emit_branch_on_value(ectx, loop_check, cond, loop_body, continuation)?;
    Ok(continuation)
}

#[cfg(test)]
mod while_tests {
    use super::*;
    use crate::emitter::testutil::fresh_parts;
    use crate::ir::types::IrTerminator;
    use crate::types::TypeHandle;

    /// A `while` loop whose body contains `break` jumps out to the loop's
    /// continuation, not back to the condition check.
    #[test]
    fn break_in_while_body_jumps_to_continuation() {
        let (mut ir, arch, mut regs) = fresh_parts();
        let entry = ir.block_create();
        let return_to = ir.block_create();
        let fctx = FnCtx { return_to };
        let mut ectx = EmitterCtx {
            ir: &mut ir,
            arch: &arch,
            regs: &mut regs,
        };

        let cond = Expr::IntLit(1, TypeHandle::new(4));
        let body = vec![Stmt::Break];
        let continuation = lower_while(&mut ectx, &fctx, entry, &cond, &body).unwrap();

        let loop_body = BlockId(2);
        assert_eq!(
            ir.block(loop_body).terminator,
            Some(IrTerminator::Jump { target: continuation })
        );
    }
}

pub fn lower_do_while(
    ectx: &mut EmitterCtx,
    fctx: &FnCtx,
    block: BlockId,
    body: &[Stmt],
    cond: &Expr,
) -> Result<BlockId> {
    let continuation = ectx.ir.block_create();
    let loop_body = ectx.ir.block_create();
    let loop_check = ectx.ir.block_create();

    ectx.ir.jump(block, loop_body)?;

    let inner = LoopCtx {
        break_to: continuation,
        continue_to: loop_check,
    };
    lower_code(ectx, fctx, Some(&inner), loop_body, body, loop_check)?;

    emit_branch_on_value(ectx, loop_check, cond, loop_body, continuation)?;
    Ok(continuation)
}
