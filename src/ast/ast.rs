use super::{
    expressions::{BinaryOperator, Var},
    statements::ProcedureCall,
};

/// A node of the syntax tree.
///
/// Every composite node owns its children, so a tree is released together
/// with its root. Nodes are never mutated once the parser has built them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Num(i64),
    BinOp {
        left: Box<Node>,
        op: BinaryOperator,
        right: Box<Node>,
    },
    Var(Var),
    Assign {
        target: Var,
        value: Box<Node>,
    },
    Compound {
        statements: Vec<Node>,
    },
    NoOp,
    ProcedureCall(ProcedureCall),
}

impl Node {
    pub fn binary(left: Node, op: BinaryOperator, right: Node) -> Self {
        Node::BinOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn assign(name: impl Into<String>, value: Node) -> Self {
        Node::Assign {
            target: Var::new(name),
            value: Box::new(value),
        }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Node::Var(Var::new(name))
    }
}
