//! Error types and diagnostics for the lexer.
//!
//! This module defines:
//!
//! - Error structures carrying the byte offset they refer to
//! - The error variants the lexer and the shell can raise
//! - The `Diagnostics` sink the lexer reports non-fatal problems through

pub mod diagnostics;
pub mod errors;
