use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The three failure categories of a pipeline run. All of them are fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Runtime,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "LexicalError"),
            ErrorKind::Syntax => write!(f, "SyntaxError"),
            ErrorKind::Runtime => write!(f, "RuntimeError"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    /// Runtime errors have no source position: the AST does not keep one.
    pub fn runtime(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } | ErrorImpl::IntegerOutOfRange { .. } => {
                ErrorKind::Lexical
            }
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::DanglingIdentifier { .. }
            | ErrorImpl::InvalidFactor { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Syntax,
            ErrorImpl::UndefinedVariable { .. }
            | ErrorImpl::DivisionByZero
            | ErrorImpl::IntegerOverflow { .. }
            | ErrorImpl::EmptyCallStack
            | ErrorImpl::DiagnosticOutput { .. } => ErrorKind::Runtime,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::IntegerOutOfRange { .. } => "IntegerOutOfRange",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::DanglingIdentifier { .. } => "DanglingIdentifier",
            ErrorImpl::InvalidFactor { .. } => "InvalidFactor",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::UndefinedVariable { .. } => "UndefinedVariable",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
            ErrorImpl::EmptyCallStack => "EmptyCallStack",
            ErrorImpl::DiagnosticOutput { .. } => "DiagnosticOutput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::IntegerOutOfRange { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` but found `{}`",
                expected, found
            )),
            ErrorImpl::DanglingIdentifier { name } => ErrorTip::Suggestion(format!(
                "Unexpected identifier `{}`, did you miss a semicolon?",
                name
            )),
            ErrorImpl::InvalidFactor { found } => ErrorTip::Suggestion(format!(
                "Expected a number, variable or `(` but found `{}`",
                found
            )),
            ErrorImpl::UndefinedVariable { name } => ErrorTip::Suggestion(format!(
                "Variable `{}` is not bound in the current activation record",
                name
            )),
            ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::IntegerOverflow { .. } => ErrorTip::None,
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "Split the expression or block into smaller statements",
            )),
            ErrorImpl::EmptyCallStack => ErrorTip::Suggestion(String::from(
                "Push a global activation record before evaluating the program",
            )),
            ErrorImpl::DiagnosticOutput { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.get_kind(), self.internal_error)?;
        if let Some(position) = &self.position {
            write!(f, " at {}", position)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid character {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("integer literal {literal} is out of range")]
    IntegerOutOfRange { literal: String },
    #[error("unexpected token: expected {expected}, got {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("unexpected identifier {name:?} after statement list")]
    DanglingIdentifier { name: String },
    #[error("invalid factor: {found}")]
    InvalidFactor { found: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("variable {name} not found")]
    UndefinedVariable { name: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },
    #[error("call stack is empty")]
    EmptyCallStack,
    #[error("failed to write diagnostics: {message}")]
    DiagnosticOutput { message: String },
}
