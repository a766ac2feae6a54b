//! Scope offset assigner.
//!
//! A pure recursive pass over a symbol tree: descend into nested `Scope`
//! children with the offset returned by the recursive call, and decrement
//! the running offset by each `Id` child's type size, writing that value
//! into the symbol. `Param` and `Other` symbols are left untouched here —
//! parameters get their offsets from the function lowerer's own pass
//! before this one ever runs.
//!
//! Sibling scopes do **not** reuse space freed by an earlier sibling scope
//! popping off the stack: the running offset only ever decreases as this
//! walks the tree, so two sibling `{ }` blocks each get their own,
//! non-overlapping slice of the frame even though at runtime they're never
//! live at the same time. This wastes some stack space; it is preserved
//! here unchanged as a known, intentional quirk rather than an oversight
//! to clean up.

use crate::arch::Architecture;
use crate::sym::{SymbolKind, SymbolRef};

/// Assigns frame offsets to every `Id`/`Scope` descendant of `children`,
/// starting from `offset`, and returns the offset after the whole subtree
/// (i.e. the most negative value reached — the caller negates it to get a
/// required stack size).
pub fn assign_scope_offsets(arch: &dyn Architecture, children: &[SymbolRef], offset: i32) -> i32 {
    let mut offset = offset;
    for sym in children {
        let kind = sym.borrow().kind;
        match kind {
            SymbolKind::Scope => {
                let nested = sym.borrow().children.clone();
                offset = assign_scope_offsets(arch, &nested, offset);
            }
            SymbolKind::Id => {
                let size = arch.type_size(&sym.borrow().ty) as i32;
                offset -= size;
                let mut sym = sym.borrow_mut();
                sym.offset = offset;
                log::debug!("symbol {} at offset {}", sym.name, sym.offset);
            }
            SymbolKind::Param | SymbolKind::Other => {}
        }
    }
    offset
}
