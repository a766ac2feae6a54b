//! Module lowerer.
//!
//! Walks the top-level item list of a module, recursing into nested
//! modules reached through `using`, lowering function implementations
//! and declarations. Exhaustive over `Item`'s variants by construction —
//! an unhandled item kind cannot occur here, since `Item` is a closed sum
//! type the compiler checks at every match site.

use anyhow::Result;

use crate::ast::{Item, Module};
use crate::decl::emit_global_decl;
use crate::emitter::context::EmitterCtx;
use crate::emitter::function::lower_function;

pub fn lower_module(ectx: &mut EmitterCtx, module: &mut Module) -> Result<()> {
    for item in &mut module.items {
        match item {
            Item::Using(Some(sub)) => lower_module(ectx, sub)?,
            Item::Using(None) => {}
            Item::FnImpl(func) => {
                let entry = lower_function(ectx, func)?;
                ectx.ir.finalize_function(entry, ectx.arch);
            }
            Item::Decl(decl) => emit_global_decl(decl),
            Item::Empty => {}
        }
    }
    Ok(())
}
