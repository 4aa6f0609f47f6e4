use super::ast::Node;

/// A call site `name(arg, ...)`.
///
/// There are no procedure declarations, so a call carries only the name and
/// the actual argument expressions in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureCall {
    pub name: String,
    pub arguments: Vec<Node>,
}
