//! Return lowerer.
//!
//! A large (> word-size) return value is first copied into a
//! caller-allocated buffer reached through a hidden pointer parameter, so
//! that in both the small- and large-value cases a single register-sized
//! quantity ends up needing to reach the integer return register before
//! the unconditional jump to the epilogue.

use anyhow::{Context, Result};

use crate::emitter::context::{EmitterCtx, FnCtx};
use crate::error::EmitError;
use crate::ir::types::{BlockId, IrInstr, Operand};
use crate::value::{emit_value, Expr, ValueRequest};

const RETURN_HIDDEN_POINTER_OFFSET: i32 = 0;

/// Lowers a `return` statement (with or without a value) into `block`,
/// terminating it with a jump to `fctx.return_to`.
pub fn lower_return(
    ectx: &mut EmitterCtx,
    fctx: &FnCtx,
    block: BlockId,
    expr: Option<&Expr>,
) -> Result<()> {
    if let Some(expr) = expr {
        lower_value_return(ectx, block, expr)
            .context("lowering return statement with a value")?;
    }
    ectx.ir.jump(block, fctx.return_to)
}

fn lower_value_return(ectx: &mut EmitterCtx, block: BlockId, expr: &Expr) -> Result<()> {
    let mut value = emit_value(ectx, block, expr, ValueRequest::Value)?;
    let word_size = ectx.arch.word_size();
    let ret_size = ectx.arch.type_size(&expr.ty());
    let ret_in_temp = ret_size > word_size;

    if ret_in_temp {
        let frame_base = ectx.arch.frame_base_register();
        let temp_ref = ectx.regs.alloc(word_size);
        ectx.ir.emit_instr(
            block,
            IrInstr::Load {
                dest: temp_ref,
                base: frame_base,
                offset: 2 * word_size as i32,
                size: word_size,
            },
        )?;
        ectx.ir.emit_instr(
            block,
            IrInstr::CopyBytes {
                dst_base: temp_ref.id,
                dst_offset: RETURN_HIDDEN_POINTER_OFFSET,
                src: value,
                size: ret_size,
            },
        )?;
        free_operand(ectx, value);
        value = Operand::Reg(temp_ref);
    }

    let move_size = if ret_in_temp { word_size } else { ret_size };
    let return_reg = ectx.arch.integer_return_register();
    match ectx.regs.request(return_reg, move_size) {
        Some(dest) => {
            ectx.ir.emit_instr(block, IrInstr::Move { dest, src: value })?;
            ectx.regs.free(dest);
        }
        None => {
            let already_in_place = matches!(value, Operand::Reg(r) if r.id == return_reg);
            if !already_in_place {
                log::error!("lower_return: integer return register unavailable");
                return Err(EmitError::RegisterUnavailable {
                    site: "lower_return",
                    role: "integer return register",
                }
                .into());
            }
        }
    }

    free_operand(ectx, value);
    Ok(())
}

fn free_operand(ectx: &mut EmitterCtx, operand: Operand) {
    if let Operand::Reg(reg) = operand {
        ectx.regs.free(reg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::testutil::fresh_parts;
    use crate::ir::types::IrTerminator;
    use crate::types::TypeHandle;

    #[test]
    fn bare_return_jumps_straight_to_return_to() {
        let (mut ir, arch, mut regs) = fresh_parts();
        let block = ir.block_create();
        let return_to = ir.block_create();
        let fctx = FnCtx { return_to };
        let mut ectx = EmitterCtx {
            ir: &mut ir,
            arch: &arch,
            regs: &mut regs,
        };

        lower_return(&mut ectx, &fctx, block, None).unwrap();

        assert_eq!(
            ir.block(block).terminator,
            Some(IrTerminator::Jump { target: return_to })
        );
    }

    #[test]
    fn small_value_return_moves_into_integer_return_register() {
        let (mut ir, arch, mut regs) = fresh_parts();
        let block = ir.block_create();
        let return_to = ir.block_create();
        let fctx = FnCtx { return_to };
        let mut ectx = EmitterCtx {
            ir: &mut ir,
            arch: &arch,
            regs: &mut regs,
        };

        let value = Expr::IntLit(7, TypeHandle::new(8));
        lower_return(&mut ectx, &fctx, block, Some(&value)).unwrap();

        let moved_into_return_reg = ir.block(block).instrs.iter().any(|instr| {
            matches!(
                instr,
                IrInstr::Move { dest, .. } if *dest == crate::regalloc::RegOperand {
                    id: arch.integer_return_register(),
                    size: 8,
                }
            )
        });
        assert!(moved_into_return_reg);
        assert_eq!(
            ir.block(block).terminator,
            Some(IrTerminator::Jump { target: return_to })
        );
    }

    #[test]
    fn large_value_return_goes_through_hidden_pointer() {
        let (mut ir, arch, mut regs) = fresh_parts();
        let block = ir.block_create();
        let return_to = ir.block_create();
        let fctx = FnCtx { return_to };
        let mut ectx = EmitterCtx {
            ir: &mut ir,
            arch: &arch,
            regs: &mut regs,
        };

        let value = Expr::IntLit(0, TypeHandle::new(16));
        lower_return(&mut ectx, &fctx, block, Some(&value)).unwrap();

        let loads_hidden_pointer = ir.block(block).instrs.iter().any(|instr| {
            matches!(
                instr,
                IrInstr::Load { offset, size, .. }
                    if *offset == 2 * arch.word_size() as i32 && *size == arch.word_size()
            )
        });
        let copies_bytes = ir
            .block(block)
            .instrs
            .iter()
            .any(|instr| matches!(instr, IrInstr::CopyBytes { size: 16, .. }));

        assert!(loads_hidden_pointer);
        assert!(copies_bytes);
    }
}
