//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that turns a line of source
//! into a stream of tokens, one per call. It handles:
//!
//! - Integer literals, whitespace runs and string literals
//! - Single and double character operators
//! - Keyword and identifier recognition
//! - Bad tokens for anything it cannot classify, so a scan never fails

pub mod lexer;
pub mod tokens;
