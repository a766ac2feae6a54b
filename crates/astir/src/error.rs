//! Fault classification for the emitter core.
//!
//! The core works over `Result<T, anyhow::Error>` throughout. `EmitError`
//! exists only to give its named fault classes a `Display` can render
//! consistently; it is converted into `anyhow::Error` at the point it's
//! raised and never matched on downstream.

use std::fmt;

/// Named fault classes the core can raise, each carrying the call site that
/// raised it.
#[derive(Debug)]
pub enum EmitError {
    /// A mandated register role (e.g. the integer return register) could not
    /// be obtained from the allocator.
    RegisterUnavailable { site: &'static str, role: &'static str },
    /// `break`/`continue` lowered outside of an enclosing loop. Prior phases
    /// are assumed to guarantee this never happens; this is the internal
    /// invariant check that catches a malformed AST if they didn't.
    BreakOutsideLoop { site: &'static str },
    ContinueOutsideLoop { site: &'static str },
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::RegisterUnavailable { site, role } => {
                write!(f, "{site}: register unavailable for role \"{role}\"")
            }
            EmitError::BreakOutsideLoop { site } => {
                write!(f, "{site}: break outside of a loop")
            }
            EmitError::ContinueOutsideLoop { site } => {
                write!(f, "{site}: continue outside of a loop")
            }
        }
    }
}

impl std::error::Error for EmitError {}
