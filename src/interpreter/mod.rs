//! Evaluation module for the interpreter.
//!
//! This module walks the syntax tree produced by the parser. It handles:
//!
//! - Integer arithmetic with division-by-zero and overflow checks
//! - Variable reads and writes against the top activation record
//! - Procedure calls, each isolated in a fresh activation record
//! - Call stack diagnostics written to a configurable sink

pub mod call_stack;
pub mod expr;
pub mod interpreter;
