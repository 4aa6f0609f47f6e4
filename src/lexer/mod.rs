//! Lexical analysis module for the interpreter.
//!
//! This module contains the lexer (tokenizer) that turns program text into
//! tokens on demand for the parser. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Case-insensitive recognition of reserved words
//! - Line and column tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
