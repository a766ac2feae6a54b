//! End-to-end scenario: returning a value larger than a word, passed back
//! through the caller-allocated hidden pointer.

mod common;

use astir::ast::{Function, Stmt};
use astir::emitter::function::lower_function;
use astir::emitter::EmitterCtx;
use astir::ir::types::IrInstr;
use astir::sym::Symbol;
use astir::types::TypeHandle;
use astir::value::Expr;

#[test]
fn large_return_value_copies_through_the_hidden_pointer_param() {
    let (mut ir, arch, mut regs) = common::fresh_parts();
    let mut ectx = EmitterCtx {
        ir: &mut ir,
        arch: &arch,
        regs: &mut regs,
    };

    let big_ty = TypeHandle::new(16);
    let x = Symbol::new_param("x", big_ty);
    let body = vec![Stmt::Return(Some(Expr::Local(x.clone(), big_ty)))];
    let mut func = Function {
        name: "make_pair".to_string(),
        label: None,
        return_type: Some(big_ty),
        children: vec![x.clone()],
        body,
    };

    let entry = lower_function(&mut ectx, &mut func).expect("lowering should succeed");

    // The hidden pointer parameter pushes the first real parameter's
    // offset one word further out than it would otherwise sit.
    assert_eq!(x.borrow().offset, 3 * arch.word_size() as i32);

    let loads_hidden_pointer = ir.block(entry).instrs.iter().any(|instr| {
        matches!(
            instr,
            IrInstr::Load { offset, size, .. }
                if *offset == 2 * arch.word_size() as i32 && *size == arch.word_size()
        )
    });
    let copies_the_full_value = ir
        .block(entry)
        .instrs
        .iter()
        .any(|instr| matches!(instr, IrInstr::CopyBytes { size: 16, .. }));

    assert!(loads_hidden_pointer, "must load the hidden return pointer");
    assert!(copies_the_full_value, "must copy all 16 bytes into it");
}
