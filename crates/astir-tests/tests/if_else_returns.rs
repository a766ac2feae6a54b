//! End-to-end scenario: an `if`/`else` where both arms return.

mod common;

use astir::ast::{Function, Stmt};
use astir::emitter::function::lower_function;
use astir::emitter::EmitterCtx;
use astir::ir::types::IrTerminator;
use astir::sym::Symbol;
use astir::types::TypeHandle;
use astir::value::Expr;

#[test]
fn both_arms_jump_to_the_function_epilogue_not_the_if_continuation() {
    let (mut ir, arch, mut regs) = common::fresh_parts();
    let mut ectx = EmitterCtx {
        ir: &mut ir,
        arch: &arch,
        regs: &mut regs,
    };

    let x = Symbol::new_param("x", TypeHandle::new(8));
    let cond = Expr::Local(x.clone(), TypeHandle::new(8));
    let body = vec![Stmt::Branch {
        cond,
        then_body: vec![Stmt::Return(Some(Expr::IntLit(1, TypeHandle::new(8))))],
        else_body: vec![Stmt::Return(Some(Expr::IntLit(0, TypeHandle::new(8))))],
    }];

    let mut func = Function {
        name: "sign".to_string(),
        label: None,
        return_type: Some(TypeHandle::new(8)),
        children: vec![x],
        body,
    };

    let entry = lower_function(&mut ectx, &mut func).expect("lowering should succeed");
    let epilogue = astir::ir::types::BlockId(entry.0 + 1);

    // Every block that isn't the entry or the epilogue itself should
    // ultimately funnel into the epilogue, since both arms return: the
    // branch's own continuation block is unreachable dead code, exactly
    // like the fresh block opened after any terminator-producing statement.
    let reaches_epilogue = |id: astir::ir::types::BlockId| {
        matches!(
            ir.block(id).terminator,
            Some(IrTerminator::Jump { target }) if target == epilogue
        )
    };

    // then_body and else_body blocks were allocated right after the
    // branch's own continuation (continuation, if_true, if_false in that
    // order — see emitter::branch).
    let if_true = astir::ir::types::BlockId(epilogue.0 + 2);
    let if_false = astir::ir::types::BlockId(epilogue.0 + 3);
    assert!(reaches_epilogue(if_true), "then-arm should jump to epilogue");
    assert!(reaches_epilogue(if_false), "else-arm should jump to epilogue");
}
