//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation
//! - Line and column tracking
//! - Lookahead without consumption
//! - Error cases

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};
use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Lexes the whole source, returning every token up to and including `EOF`.
fn tokenize(source: String) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}

#[test]
fn test_tokenize_integer() {
    let tokens = tokenize("123".to_string()).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "123");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_keywords_any_case() {
    let tokens = tokenize("BEGIN begin Begin".to_string()).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Begin);
    assert_eq!(tokens[0].value, "BEGIN");
    assert_eq!(tokens[1].kind, TokenKind::Begin);
    assert_eq!(tokens[1].value, "begin");
    assert_eq!(tokens[2].kind, TokenKind::Begin);
    assert_eq!(tokens[2].value, "Begin");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_all_reserved_words() {
    let tokens = tokenize("program var begin end".to_string()).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Program);
    assert_eq!(tokens[1].kind, TokenKind::Var);
    assert_eq!(tokens[2].kind, TokenKind::Begin);
    assert_eq!(tokens[3].kind, TokenKind::End);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = tokenize("beginX".to_string()).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "beginX");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 CamelCase".to_string()).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators_and_punctuation() {
    let tokens = tokenize("+ - * / ( ) = ; . ,".to_string()).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Assignment,
            TokenKind::Semicolon,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_adjacent_tokens_without_whitespace() {
    let tokens = tokenize("a=5;b=a+10".to_string()).unwrap();
    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();

    assert_eq!(values, vec!["a", "=", "5", ";", "b", "=", "a", "+", "10", ""]);
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("PROGRAM P;\n  BEGIN\nEND.".to_string()).unwrap();

    assert_eq!(tokens[0].position, Position { line: 1, column: 1 });
    assert_eq!(tokens[1].position, Position { line: 1, column: 9 });
    assert_eq!(tokens[2].position, Position { line: 1, column: 10 });
    assert_eq!(tokens[3].position, Position { line: 2, column: 3 });
    assert_eq!(tokens[4].position, Position { line: 3, column: 1 });
    assert_eq!(tokens[5].position, Position { line: 3, column: 4 });
}

#[test]
fn test_eof_is_repeatable() {
    let mut lexer = Lexer::new("x".to_string());

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_empty_source() {
    let tokens = tokenize(String::new()).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_peek_does_not_consume() {
    let mut lexer = Lexer::new("a\n= 5".to_string());
    lexer.next_token().unwrap();

    let peeked = lexer.peek_token().unwrap();
    let peeked_again = lexer.peek_token().unwrap();
    let next = lexer.next_token().unwrap();

    assert_eq!(peeked, next);
    assert_eq!(peeked_again, next);
    assert_eq!(next.kind, TokenKind::Assignment);
    assert_eq!(next.position, Position { line: 2, column: 1 });
    assert_eq!(lexer.next_token().unwrap().value, "5");
}

#[test]
fn test_invalid_character() {
    let error = tokenize("@".to_string()).unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnrecognisedCharacter { character: '@' }
    );
}

#[test]
fn test_invalid_character_position() {
    let error = tokenize("PROGRAM P; BEGIN a = 5 $ END.".to_string()).unwrap_err();

    assert_eq!(error.get_position(), Some(&Position { line: 1, column: 24 }));
}

#[test]
fn test_invalid_character_on_later_line() {
    let error = tokenize("BEGIN\n  a = #\nEND".to_string()).unwrap_err();

    assert_eq!(error.get_position(), Some(&Position { line: 2, column: 7 }));
}

#[test]
fn test_leading_underscore_rejected() {
    assert!(tokenize("_x".to_string()).is_err());
}

#[test]
fn test_integer_out_of_range() {
    let error = tokenize("99999999999999999999".to_string()).unwrap_err();

    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::IntegerOutOfRange { .. }
    ));
}

#[test]
fn test_token_display() {
    let tokens = tokenize("  begin".to_string()).unwrap();

    assert_eq!(tokens[0].to_string(), "Token(BEGIN, begin, pos=1:3)");
}
