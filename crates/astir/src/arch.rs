//! Architecture descriptor.
//!
//! The core never hardcodes a word size, a register name, or a mangling
//! scheme; everything target-specific is asked of this trait, keeping the
//! lowering core free of target-specific emission decisions.

use crate::types::TypeHandle;

/// A canonical, architecture-defined register identity (not yet tied to an
/// allocation). `RegisterAllocator::request` takes one of these to ask for
/// a specific physical register, e.g. the integer return register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegId(pub u32);

pub trait Architecture {
    /// Pointer/word size in bytes. Frame offsets and the calling convention
    /// are expressed in multiples of this.
    fn word_size(&self) -> u32;

    /// Size in bytes of a type, as handed down by the type checker.
    fn type_size(&self, ty: &TypeHandle) -> u32 {
        ty.size_bytes()
    }

    /// Turns a source-level function name into the label emitted into the
    /// assembly stream. Invoked when a function symbol has no label yet.
    fn mangle_symbol(&self, name: &str) -> String;

    /// The register holding the frame base pointer, used to address
    /// parameters and the hidden return-value pointer.
    fn frame_base_register(&self) -> RegId;

    /// The canonical register integer return values are passed in.
    fn integer_return_register(&self) -> RegId;
}

/// A small x86-64 System V descriptor, concrete enough to drive the tests
/// and to stand in for an externally supplied architecture descriptor.
pub struct SysVAmd64;

impl Architecture for SysVAmd64 {
    fn word_size(&self) -> u32 {
        8
    }

    fn mangle_symbol(&self, name: &str) -> String {
        format!("_{name}")
    }

    fn frame_base_register(&self) -> RegId {
        RegId(0) // RBP
    }

    fn integer_return_register(&self) -> RegId {
        RegId(1) // RAX
    }
}
