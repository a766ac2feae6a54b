//! AST surface the emitter core consumes.
//!
//! A C-style compiler's runtime tag field shared by every node shape
//! (branch, loop, return, ...) is pushed here to the type checker instead:
//! each statement shape is its own enum variant carrying exactly the
//! children it needs, so a missing match arm is a compile error rather than
//! an unhandled-tag fault at lowering time. This also resolves the
//! while/do-while ambiguity some such dispatch tables carry (distinguished
//! there by inspecting whether the loop's body child was itself a bare code
//! block) into two separate variants, decided once upstream instead of
//! re-derived on every visit.

use crate::sym::SymbolRef;
use crate::types::TypeHandle;
use crate::value::Expr;

#[derive(Debug)]
pub struct Module {
    pub items: Vec<Item>,
}

#[derive(Debug)]
pub enum Item {
    /// Recurses into a nested module. `None` when the `using` node has no
    /// right child.
    Using(Option<Box<Module>>),
    FnImpl(Function),
    Decl(GlobalDecl),
    Empty,
}

#[derive(Debug)]
pub struct Function {
    pub name: String,
    /// Assembly label. `None` until the function lowerer mangles one in.
    pub label: Option<String>,
    pub return_type: Option<TypeHandle>,
    /// Params first, then `Scope`/`Id` entries for locals, in declaration
    /// order. The function lowerer walks this in order, assigning each
    /// leading parameter the next frame offset and stopping at the first
    /// non-parameter child.
    pub children: Vec<SymbolRef>,
    pub body: Vec<Stmt>,
}

#[derive(Debug)]
pub struct GlobalDecl {
    pub symbol: SymbolRef,
    pub init: Option<i64>,
}

#[derive(Debug)]
pub struct Decl {
    pub symbol: SymbolRef,
    pub init: Option<Expr>,
}

#[derive(Debug)]
pub enum Stmt {
    Branch {
        cond: Expr,
        then_body: Vec<Stmt>,
        else_body: Vec<Stmt>,
    },
    While {
        cond: Expr,
        body: Vec<Stmt>,
    },
    DoWhile {
        body: Vec<Stmt>,
        cond: Expr,
    },
    Iter {
        init: Option<Box<Stmt>>,
        cond: Option<Expr>,
        step: Option<Expr>,
        body: Vec<Stmt>,
    },
    /// A nested lexical block, lowered with its own continuation block.
    Code(Vec<Stmt>),
    Return(Option<Expr>),
    Break,
    Continue,
    Decl(Decl),
    Expr(Expr),
    Empty,
}
