use log::debug;

use crate::{
    ast::{ast::Node, statements::ProcedureCall},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// program := "PROGRAM" ID ";" compound_statement "."
pub fn parse_program(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::Program)?;
    let name = parser.expect(TokenKind::Identifier)?.value;
    debug!("program {}", name);
    parser.expect(TokenKind::Semicolon)?;

    let block = parse_compound_stmt(parser)?;
    parser.expect(TokenKind::Dot)?;

    Ok(block)
}

/// compound_statement := "BEGIN" statement_list "END"
pub fn parse_compound_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.enter_nesting()?;
    let statements = parse_block(parser);
    parser.leave_nesting();

    Ok(Node::Compound {
        statements: statements?,
    })
}

fn parse_block(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    parser.expect(TokenKind::Begin)?;
    let statements = parse_stmt_list(parser)?;
    parser.expect(TokenKind::End)?;

    Ok(statements)
}

pub fn parse_stmt_list(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    let mut statements = vec![parse_stmt(parser)?];

    while parser.current_token_kind() == TokenKind::Semicolon {
        parser.expect(TokenKind::Semicolon)?;
        statements.push(parse_stmt(parser)?);
    }

    // Two statements with no `;` between them.
    if parser.current_token_kind() == TokenKind::Identifier {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::DanglingIdentifier {
                name: token.value.clone(),
            },
            token.position,
        ));
    }

    Ok(statements)
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::Begin => parse_compound_stmt(parser),
        TokenKind::Identifier if parser.peek_token_kind() == TokenKind::OpenParen => {
            parse_procedure_call(parser)
        }
        TokenKind::Identifier => parse_assignment_stmt(parser),
        _ => Ok(Node::NoOp),
    }
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser)?;

    Ok(Node::assign(name, value))
}

/// ID "(" ( expr ( "," expr )* )? ")"
///
/// Shared by statements and factors; both route here when an identifier is
/// followed by `(`.
pub fn parse_procedure_call(parser: &mut Parser) -> Result<Node, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_expr(parser)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.expect(TokenKind::Comma)?;
            arguments.push(parse_expr(parser)?);
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Node::ProcedureCall(ProcedureCall { name, arguments }))
}
