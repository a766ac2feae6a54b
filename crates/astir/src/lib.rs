//! astir — an AST-to-IR lowering core for a C-family compiler.
//!
//! This crate provides the lowering pass that sits between a type-checked
//! AST and a basic-block intermediate representation: recursive descent
//! over statements and expressions, threading a "current basic block"
//! through traversal and splitting control flow into fresh blocks wired by
//! explicit jump/branch terminators. No SSA construction and no
//! optimization passes live here — both are later phases.

pub mod arch;
pub mod ast;
pub mod decl;
pub mod emitter;
pub mod error;
pub mod ir;
pub mod regalloc;
pub mod sym;
pub mod types;
pub mod value;

use std::path::Path;

pub use anyhow::{Context, Result};

use arch::Architecture;
use ast::Module;
use emitter::context::EmitterCtx;
use ir::context::IrContext;
use regalloc::FixedPool;

/// Lowering configuration. Currently carries nothing overridable — the
/// architecture descriptor is the real configuration surface, passed
/// directly to [`emit`] — but kept as a struct rather than a bare argument
/// list so a future flag (e.g. a register pool size override) has
/// somewhere to land without changing every call site.
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {}

/// Lowers `module` into assembly text, writing it to `output_path`.
///
/// This is the main entry point for the lowering pipeline. It takes an
/// already-parsed, already-typechecked module and an architecture
/// descriptor, and emits one assembly function per `fn-impl` node.
///
/// # Example
/// ```no_run
/// use astir::{emit, EmitOptions};
/// use astir::arch::SysVAmd64;
/// use astir::ast::Module;
///
/// let mut module = Module { items: vec![] };
/// let arch = SysVAmd64;
/// emit(&mut module, "out.s", &arch, &EmitOptions::default()).unwrap();
/// ```
pub fn emit(
    module: &mut Module,
    output_path: impl AsRef<Path>,
    arch: &dyn Architecture,
    _options: &EmitOptions,
) -> Result<()> {
    let mut ir = IrContext::new();
    let mut regs = FixedPool::default();
    regs.reserve(arch.frame_base_register());
    regs.reserve(arch.integer_return_register());

    {
        let mut ectx = EmitterCtx {
            ir: &mut ir,
            arch,
            regs: &mut regs,
        };
        emitter::lower_module(&mut ectx, module).context("lowering module to IR")?;
    }

    let text = ir.finalize();
    std::fs::write(output_path.as_ref(), text)
        .with_context(|| format!("writing emitted assembly to {:?}", output_path.as_ref()))?;
    Ok(())
}
