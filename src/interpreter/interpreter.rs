//! Tree-walking evaluator.
//!
//! The Interpreter owns the call stack for one run and evaluates a syntax
//! tree node by node. Variable reads and writes only ever touch the record
//! on top of the stack. Procedure calls run in a fresh, empty record and
//! report the stack to the interpreter's diagnostic output.

use std::io::{self, Stdout, Write};

use log::debug;

use crate::{
    ast::{ast::Node, expressions::Var, statements::ProcedureCall},
    errors::errors::{Error, ErrorImpl},
};

use super::{
    call_stack::{ActivationRecord, CallStack},
    expr::apply_binary,
};

/// The evaluator state.
///
/// # Type Parameters
///
/// * `W` - Where procedure-call diagnostics are written; stdout by default
pub struct Interpreter<W: Write = Stdout> {
    /// Activation records, most recent last
    call_stack: CallStack,
    /// Sink for the `Call procedure` lines and stack dumps
    output: W,
}

impl Interpreter<Stdout> {
    pub fn new() -> Self {
        Interpreter::with_output(io::stdout())
    }
}

impl Default for Interpreter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    pub fn with_output(output: W) -> Self {
        Interpreter {
            call_stack: CallStack::new(),
            output,
        }
    }

    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    /// Callers push the global record through this before evaluating a program.
    pub fn call_stack_mut(&mut self) -> &mut CallStack {
        &mut self.call_stack
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Evaluates a node and returns its value.
    ///
    /// Statements evaluate to `0`, except assignments, which yield the value
    /// written.
    pub fn visit(&mut self, node: &Node) -> Result<i64, Error> {
        match node {
            Node::Num(value) => Ok(*value),
            Node::BinOp { left, op, right } => {
                let left = self.visit(left)?;
                let right = self.visit(right)?;
                apply_binary(*op, left, right)
            }
            Node::Var(var) => self.visit_var(var),
            Node::Assign { target, value } => self.visit_assign(target, value),
            Node::Compound { statements } => {
                for statement in statements {
                    self.visit(statement)?;
                }
                Ok(0)
            }
            Node::NoOp => Ok(0),
            Node::ProcedureCall(call) => self.visit_procedure_call(call),
        }
    }

    fn visit_var(&self, var: &Var) -> Result<i64, Error> {
        self.call_stack.peek()?.get(&var.name).ok_or_else(|| {
            Error::runtime(ErrorImpl::UndefinedVariable {
                name: var.name.clone(),
            })
        })
    }

    fn visit_assign(&mut self, target: &Var, value: &Node) -> Result<i64, Error> {
        let value = self.visit(value)?;
        self.call_stack.peek_mut()?.set(&target.name, value);
        Ok(value)
    }

    fn visit_procedure_call(&mut self, call: &ProcedureCall) -> Result<i64, Error> {
        self.emit(format_args!("Call procedure: {}\n", call.name))?;

        self.call_stack.push(ActivationRecord::new());
        debug!("entered {} (depth {})", call.name, self.call_stack.len());

        let result = self.run_call(call);

        self.call_stack.pop();
        debug!("left {} (depth {})", call.name, self.call_stack.len());

        result.map(|_| 0)
    }

    /// Evaluates the arguments in the callee's frame, then dumps the stack.
    fn run_call(&mut self, call: &ProcedureCall) -> Result<(), Error> {
        for argument in &call.arguments {
            self.visit(argument)?;
        }

        let dump = self.call_stack.to_string();
        self.emit(format_args!("{}", dump))
    }

    fn emit(&mut self, text: std::fmt::Arguments<'_>) -> Result<(), Error> {
        self.output.write_fmt(text).map_err(|error| {
            Error::runtime(ErrorImpl::DiagnosticOutput {
                message: error.to_string(),
            })
        })
    }
}
