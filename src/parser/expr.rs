use crate::{
    ast::{ast::Node, expressions::{BinaryOperator, Var}},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::parse_procedure_call};

const ADDITIVE: [TokenKind; 2] = [TokenKind::Plus, TokenKind::Minus];
const MULTIPLICATIVE: [TokenKind; 2] = [TokenKind::Star, TokenKind::Slash];

/// expr := term ( ("+" | "-") term )*
pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    let mut left = parse_term(parser)?;

    while parser.current_token().is_one_of_many(&ADDITIVE) {
        let op = parse_operator(parser)?;
        left = Node::binary(left, op, parse_term(parser)?);
    }

    Ok(left)
}

/// term := factor ( ("*" | "/") factor )*
pub fn parse_term(parser: &mut Parser) -> Result<Node, Error> {
    let mut left = parse_factor(parser)?;

    while parser.current_token().is_one_of_many(&MULTIPLICATIVE) {
        let op = parse_operator(parser)?;
        left = Node::binary(left, op, parse_factor(parser)?);
    }

    Ok(left)
}

pub fn parse_factor(parser: &mut Parser) -> Result<Node, Error> {
    parser.enter_nesting()?;
    let factor = parse_factor_inner(parser);
    parser.leave_nesting();
    factor
}

fn parse_factor_inner(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        // A sign only consumes the factor after it; it does not change its value.
        TokenKind::Plus => {
            parser.expect(TokenKind::Plus)?;
            parse_factor(parser)
        }
        TokenKind::Minus => {
            parser.expect(TokenKind::Minus)?;
            parse_factor(parser)
        }
        TokenKind::Integer => {
            let token = parser.expect(TokenKind::Integer)?;
            // The lexer only emits integer tokens that fit in an i64.
            Ok(Node::Num(token.value.parse().unwrap_or_default()))
        }
        TokenKind::OpenParen => {
            parser.expect(TokenKind::OpenParen)?;
            let node = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;
            Ok(node)
        }
        TokenKind::Identifier if parser.peek_token_kind() == TokenKind::OpenParen => {
            parse_procedure_call(parser)
        }
        TokenKind::Identifier => {
            let name = parser.expect(TokenKind::Identifier)?.value;
            Ok(Node::Var(Var::new(name)))
        }
        _ => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::InvalidFactor {
                    found: token.kind.to_string(),
                },
                token.position,
            ))
        }
    }
}

fn parse_operator(parser: &mut Parser) -> Result<BinaryOperator, Error> {
    let kind = parser.current_token_kind();
    parser.expect(kind)?;

    BinaryOperator::from_token_kind(kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::InvalidFactor {
                found: kind.to_string(),
            },
            parser.current_token().position,
        )
    })
}
