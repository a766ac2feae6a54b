//! Function lowerer: assigns frame offsets and lowers a function body into
//! an entry block and a shared epilogue block.

use anyhow::Result;

use crate::ast::Function;
use crate::emitter::context::{EmitterCtx, FnCtx};
use crate::emitter::scope::assign_scope_offsets;
use crate::emitter::stmt::lower_code;
use crate::ir::types::BlockId;
use crate::sym::SymbolKind;

/// Lowers `func`'s body into fresh IR blocks and returns its entry block.
/// Does not finalize those blocks into text — the caller (the module
/// lowerer, or a test inspecting the CFG directly) decides when to do that,
/// since finalizing renumbers block ids for the next function.
pub fn lower_function(ectx: &mut EmitterCtx, func: &mut Function) -> Result<BlockId> {
    if func.label.is_none() {
        func.label = Some(ectx.arch.mangle_symbol(&func.name));
    }

    let word_size = ectx.arch.word_size() as i32;
    let mut offset = 2 * word_size;
    if let Some(ret_ty) = &func.return_type {
        if ectx.arch.type_size(ret_ty) as i32 > word_size {
            offset += word_size;
        }
    }

    for sym in &func.children {
        let is_param = sym.borrow().kind == SymbolKind::Param;
        if !is_param {
            break;
        }
        let size = ectx.arch.type_size(&sym.borrow().ty) as i32;
        let mut sym = sym.borrow_mut();
        sym.offset = offset;
        log::debug!("param {} at offset {}", sym.name, sym.offset);
        offset += size;
    }

    let stacksize = -assign_scope_offsets(ectx.arch, &func.children, 0);

    let entry = ectx.ir.block_create();
    let epilogue = ectx.ir.block_create();
    let fctx = FnCtx { return_to: epilogue };

    let label = func.label.clone().expect("label assigned above");
    ectx.ir.fn_prologue(entry, &label, stacksize as u32);

    lower_code(ectx, &fctx, None, entry, &func.body, epilogue)?;

    ectx.ir.fn_epilogue(epilogue)?;

    Ok(entry)
}
