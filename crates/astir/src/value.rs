//! Value lowerer: turns an expression node into an operand the statement
//! and control-flow lowerers can use, one AST node at a time into a
//! handful of `IrInstr`s and a resulting operand, over a small integer
//! expression language.

use anyhow::Result;

use crate::arch::RegId;
use crate::emitter::context::EmitterCtx;
use crate::ir::types::{BlockId, IrInstr, Operand};
use crate::sym::SymbolRef;
use crate::types::TypeHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,
    Not,
}

#[derive(Debug, Clone)]
pub enum Expr {
    IntLit(i64, TypeHandle),
    Local(SymbolRef, TypeHandle),
    Assign(SymbolRef, Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>, TypeHandle),
    Unary(UnOp, Box<Expr>, TypeHandle),
}

impl Expr {
    pub fn ty(&self) -> TypeHandle {
        match self {
            Expr::IntLit(_, ty) => *ty,
            Expr::Local(_, ty) => *ty,
            Expr::Assign(sym, _) => sym.borrow().ty,
            Expr::Binary(_, _, _, ty) => *ty,
            Expr::Unary(_, _, ty) => *ty,
        }
    }
}

/// What the caller needs back from an evaluated expression: evaluate for
/// a usable value, or evaluate purely for side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRequest {
    /// Only side effects matter; the result operand may be discarded.
    Void,
    /// The result must be materialized into a usable operand.
    Value,
}

fn frame_operand(base: RegId, offset: i32, size: u32) -> Operand {
    Operand::Mem { base, offset, size }
}

/// Lowers `expr` into `block`, returning the operand holding its value.
///
/// Every register this allocates along the way is freed again before
/// returning: each consumed sub-operand is freed as soon as it is folded
/// into the instruction that consumes it, and — since `Void` means the
/// caller never touches the result — a `Void` request also frees the
/// top-level result before handing it back.
pub fn emit_value(
    ectx: &mut EmitterCtx,
    block: BlockId,
    expr: &Expr,
    request: ValueRequest,
) -> Result<Operand> {
    let result = match expr {
        Expr::IntLit(value, _) => Operand::Imm(*value),
        Expr::Local(sym, ty) => {
            let sym = sym.borrow();
            frame_operand(
                ectx.arch.frame_base_register(),
                sym.offset,
                ectx.arch.type_size(ty),
            )
        }
        Expr::Assign(sym, value) => {
            let rhs = emit_value(ectx, block, value, ValueRequest::Value)?;
            let (offset, size) = {
                let sym = sym.borrow();
                (sym.offset, ectx.arch.type_size(&sym.ty))
            };
            ectx.ir.emit_instr(
                block,
                IrInstr::Store {
                    base: ectx.arch.frame_base_register(),
                    offset,
                    src: rhs,
                    size,
                },
            )?;
            free_operand(ectx, rhs);
            if request == ValueRequest::Void {
                rhs
            } else {
                frame_operand(ectx.arch.frame_base_register(), offset, size)
            }
        }
        Expr::Binary(op, lhs, rhs, ty) => {
            let lhs_val = emit_value(ectx, block, lhs, ValueRequest::Value)?;
            let rhs_val = emit_value(ectx, block, rhs, ValueRequest::Value)?;
            let size = ectx.arch.type_size(ty);
            let dest = ectx.regs.alloc(size);
            ectx.ir.emit_instr(
                block,
                IrInstr::BinOp {
                    dest,
                    op: lower_binop(*op),
                    lhs: lhs_val,
                    rhs: rhs_val,
                },
            )?;
            free_operand(ectx, lhs_val);
            free_operand(ectx, rhs_val);
            Operand::Reg(dest)
        }
        Expr::Unary(op, operand, ty) => {
            let src = emit_value(ectx, block, operand, ValueRequest::Value)?;
            let size = ectx.arch.type_size(ty);
            let dest = ectx.regs.alloc(size);
            ectx.ir.emit_instr(
                block,
                IrInstr::UnOp {
                    dest,
                    op: lower_unop(*op),
                    src,
                },
            )?;
            free_operand(ectx, src);
            Operand::Reg(dest)
        }
    };

    if request == ValueRequest::Void {
        free_operand(ectx, result);
    }
    Ok(result)
}

/// Releases `operand`'s register, if it holds one. A no-op for immediates
/// and frame memory operands, which the register allocator never tracked.
fn free_operand(ectx: &mut EmitterCtx, operand: Operand) {
    if let Operand::Reg(reg) = operand {
        ectx.regs.free(reg);
    }
}

/// Lowers `cond` and seals `block` with a branch to `if_true`/`if_false`.
pub fn emit_branch_on_value(
    ectx: &mut EmitterCtx,
    block: BlockId,
    cond: &Expr,
    if_true: BlockId,
    if_false: BlockId,
) -> Result<()> {
    let value = emit_value(ectx, block, cond, ValueRequest::Value)?;
    ectx.ir.branch_if(block, value, if_true, if_false)?;
    free_operand(ectx, value);
    Ok(())
}

fn lower_binop(op: BinOp) -> crate::ir::types::BinOp {
    use crate::ir::types::BinOp as IrBinOp;
    match op {
        BinOp::Add => IrBinOp::Add,
        BinOp::Sub => IrBinOp::Sub,
        BinOp::Mul => IrBinOp::Mul,
        BinOp::Lt => IrBinOp::Lt,
        BinOp::Le => IrBinOp::Le,
        BinOp::Gt => IrBinOp::Gt,
        BinOp::Ge => IrBinOp::Ge,
        BinOp::Eq => IrBinOp::Eq,
        BinOp::Ne => IrBinOp::Ne,
    }
}

fn lower_unop(op: UnOp) -> crate::ir::types::UnOp {
    use crate::ir::types::UnOp as IrUnOp;
    match op {
        UnOp::Neg => IrUnOp::Neg,
        UnOp::Not => IrUnOp::Not,
    }
}
