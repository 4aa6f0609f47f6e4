//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that turns the token
//! stream into a syntax tree. It handles:
//!
//! - The program header and `BEGIN ... END` blocks
//! - Statement lists, assignments and procedure calls
//! - Arithmetic expressions, with `*` and `/` binding tighter than `+` and `-`
//!
//! One token of lookahead tells a procedure call (`name(`) apart from a
//! variable, so the parser never backtracks.

pub mod expr;
pub mod parser;
pub mod stmt;
