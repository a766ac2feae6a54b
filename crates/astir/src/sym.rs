//! Symbol table surface the emitter core consumes.
//!
//! Prior phases (parsing, name resolution, type checking) build this tree
//! and hand it to the core already shaped: a function symbol's children
//! begin with zero or more `Param` entries followed by `Scope`/`Id` entries
//! for its locals, and expression nodes that reference a local hold a
//! cloned handle to the same symbol the declaration introduced.
//!
//! `offset` is the one field the core writes — everything else it only
//! reads — so symbols are shared via `Rc<RefCell<_>>` rather than owned
//! uniquely: the same symbol is reachable both from the function's
//! declaration list and from every expression that references it, the
//! offset written once at the declaration site and read at every use.

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::TypeHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// A nested lexical scope; its own `children` holds the scope's symbols.
    Scope,
    /// A local variable declared within a scope.
    Id,
    /// A function parameter.
    Param,
    /// Anything the offset assigner does not position in the frame
    /// (e.g. a type name or a forward declaration without storage).
    Other,
}

#[derive(Debug)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub ty: TypeHandle,
    /// Populated only when `kind == Scope`.
    pub children: Vec<SymbolRef>,
    /// Frame offset in bytes, relative to the frame base. Unset (`0`) until
    /// the scope offset assigner or the function lowerer's parameter pass
    /// writes it; every `Id`/`Param` symbol gets exactly one write.
    pub offset: i32,
}

pub type SymbolRef = Rc<RefCell<Symbol>>;

impl Symbol {
    pub fn new_scope(children: Vec<SymbolRef>) -> SymbolRef {
        Rc::new(RefCell::new(Symbol {
            name: String::new(),
            kind: SymbolKind::Scope,
            ty: TypeHandle::new(0),
            children,
            offset: 0,
        }))
    }

    pub fn new_id(name: impl Into<String>, ty: TypeHandle) -> SymbolRef {
        Rc::new(RefCell::new(Symbol {
            name: name.into(),
            kind: SymbolKind::Id,
            ty,
            children: Vec::new(),
            offset: 0,
        }))
    }

    pub fn new_param(name: impl Into<String>, ty: TypeHandle) -> SymbolRef {
        Rc::new(RefCell::new(Symbol {
            name: name.into(),
            kind: SymbolKind::Param,
            ty,
            children: Vec::new(),
            offset: 0,
        }))
    }
}
