//! Error types and error handling for the interpreter.
//!
//! This module defines the error types raised by every pipeline stage.
//! It includes:
//!
//! - Error structures with optional source position information
//! - Specific error variants for lexing, parsing and evaluation
//! - Classification into lexical, syntax and runtime failures
//! - Helpful error messages and suggestions

pub mod errors;
