//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens from
//! a [`Lexer`] on demand and keeps exactly two of them in view: the current
//! token and one token of lookahead. The grammar rules themselves live in
//! the `stmt` and `expr` modules as free functions over `&mut Parser`.

use log::debug;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::parse_program;

/// How many factors or blocks may be open at once before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The lexer tokens are pulled from
    lexer: Lexer,
    /// The token being matched against the grammar
    current: Token,
    /// The token after `current`, used to tell calls from variables
    peek: Token,
    /// Number of factors and compound statements currently being parsed
    depth: usize,
}

impl Parser {
    /// Creates a new Parser, priming the current and lookahead tokens.
    ///
    /// # Arguments
    ///
    /// * `lexer` - The lexer over the program text; the parser takes ownership
    ///
    /// # Returns
    ///
    /// The parser, or the lexical error hit while reading the first two tokens.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let current = lexer.next_token()?;
        let peek = lexer.next_token()?;

        Ok(Parser {
            lexer,
            current,
            peek,
            depth: 0,
        })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Expects the current token to be of the specified kind.
    ///
    /// On success the lookahead token becomes current, a fresh token is pulled
    /// from the lexer into the lookahead slot, and the matched token is returned.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise a syntax error
    /// naming both kinds at the current token's position.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind.to_string(),
                    found: self.current.kind.to_string(),
                },
                self.current.position,
            ));
        }

        let next = self.lexer.next_token()?;
        let peek = std::mem::replace(&mut self.peek, next);
        Ok(std::mem::replace(&mut self.current, peek))
    }

    /// Opens one level of nesting, failing once `MAX_NESTING_DEPTH` is reached.
    ///
    /// Every successful call must be paired with [`Parser::leave_nesting`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.current.position,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Parses a whole program and returns the root of its syntax tree.
    pub fn parse(&mut self) -> Result<Node, Error> {
        debug!("parsing program starting at {}", self.current);
        let tree = parse_program(self)?;
        debug!("finished parsing program");
        Ok(tree)
    }
}

/// Parses program text into a syntax tree in one step.
pub fn parse(source: String) -> Result<Node, Error> {
    Parser::new(Lexer::new(source))?.parse()
}
