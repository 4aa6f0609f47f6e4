/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed `Node` type every pass matches on
/// - expressions: Operators and variable references used inside expressions
/// - statements: Procedure call sites
pub mod ast;
pub mod expressions;
pub mod statements;
