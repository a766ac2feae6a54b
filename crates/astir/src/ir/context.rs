//! IR context.
//!
//! Owns the growing set of basic blocks for the function currently being
//! lowered and the assembled text for the whole module. The emitter core
//! only ever calls `block_create`, `jump`, `branch_if`, `emit_instr`,
//! `fn_prologue`, and `fn_epilogue` on it — the single mutable handle
//! threaded through every lowering call.

use anyhow::{bail, Result};

use crate::arch::Architecture;
use crate::ir::types::{BlockId, IrBlock, IrInstr, IrTerminator, Operand};

pub struct IrContext {
    blocks: Vec<IrBlock>,
    /// One finalized function's worth of assembly text per function lowered.
    functions: Vec<String>,
}

impl IrContext {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn block_create(&mut self) -> BlockId {
        let id = BlockId(self.blocks.len() as u32);
        self.blocks.push(IrBlock::new(id));
        id
    }

    fn block_mut(&mut self, id: BlockId) -> &mut IrBlock {
        &mut self.blocks[id.0 as usize]
    }

    pub fn block(&self, id: BlockId) -> &IrBlock {
        &self.blocks[id.0 as usize]
    }

    /// Appends an instruction to `block`. Fails if `block` is already
    /// sealed — that would mean a lowerer emitted code after a terminator.
    pub fn emit_instr(&mut self, block: BlockId, instr: IrInstr) -> Result<()> {
        let b = self.block_mut(block);
        if b.is_sealed() {
            bail!("emit_instr: block {:?} is already sealed", block);
        }
        b.instrs.push(instr);
        Ok(())
    }

    pub fn jump(&mut self, block: BlockId, target: BlockId) -> Result<()> {
        self.seal(block, IrTerminator::Jump { target })
    }

    pub fn branch_if(
        &mut self,
        block: BlockId,
        cond: Operand,
        if_true: BlockId,
        if_false: BlockId,
    ) -> Result<()> {
        self.seal(
            block,
            IrTerminator::BranchIf {
                cond,
                if_true,
                if_false,
            },
        )
    }

    fn seal(&mut self, block: BlockId, terminator: IrTerminator) -> Result<()> {
        let b = self.block_mut(block);
        if b.is_sealed() {
            bail!("block {:?} already has a terminator", block);
        }
        b.terminator = Some(terminator);
        Ok(())
    }

    /// Emits the function's entry-block prologue: stack frame setup for
    /// `stacksize` bytes of locals, under `label`.
    pub fn fn_prologue(&mut self, entry: BlockId, label: &str, stacksize: u32) {
        let b = self.block_mut(entry);
        b.label = Some(label.to_string());
        log::debug!("fn_prologue: {label} stacksize={stacksize}");
        b.instrs.insert(0, IrInstr::FramePrologue { stacksize });
    }

    /// Seals the epilogue block with the function-return terminator.
    pub fn fn_epilogue(&mut self, epilogue: BlockId) -> Result<()> {
        self.seal(epilogue, IrTerminator::Return)
    }

    /// Finalizes one function's blocks into pseudo-assembly text and stashes
    /// it for the module-level `finalize`.
    pub fn finalize_function(&mut self, entry: BlockId, arch: &dyn Architecture) {
        let _ = arch;
        let mut out = String::new();
        let label = self
            .block(entry)
            .label
            .clone()
            .unwrap_or_else(|| format!("block_{}", entry.0));
        out.push_str(&format!("{label}:\n"));
        for block in &self.blocks {
            out.push_str(&format!("  .L{}:\n", block.id.0));
            for instr in &block.instrs {
                out.push_str(&format!("    ; {instr:?}\n"));
            }
            if let Some(term) = &block.terminator {
                out.push_str(&format!("    ; {term:?}\n"));
            }
        }
        self.functions.push(out);
        self.blocks.clear();
    }

    /// Assembles every finalized function into the module's output text.
    pub fn finalize(&self) -> String {
        self.functions.join("\n")
    }
}

impl Default for IrContext {
    fn default() -> Self {
        Self::new()
    }
}
