#![allow(clippy::module_inception)]

use std::{fmt::Display, io::Write};

use log::info;

use crate::{
    errors::errors::{Error, ErrorTip},
    interpreter::{call_stack::ActivationRecord, interpreter::Interpreter},
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// The program the driver runs when no file is given.
pub const SAMPLE_PROGRAM: &str = "PROGRAM Test; BEGIN a = 5; b = a + 10; END.";

/// A 1-based line and column in the program text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Runs one program from source text to completion.
///
/// Lexes and parses the whole program, pushes the global activation record
/// onto the interpreter's call stack, then evaluates the program body. The
/// global record stays on the stack afterwards so callers can inspect it.
pub fn run_program<W: Write>(source: &str, interpreter: &mut Interpreter<W>) -> Result<(), Error> {
    let tree = parse(source.to_string())?;
    info!("parsed program");

    interpreter.call_stack_mut().push(ActivationRecord::new());
    interpreter.visit(&tree)?;
    info!("evaluated program");

    Ok(())
}

/// Returns the 1-based `line` of `source`, without its line terminator.
pub fn get_line_at_position(source: &str, line: usize) -> Option<&str> {
    source
        .split('\n')
        .nth(line.checked_sub(1)?)
        .map(|text| text.trim_end_matches('\r'))
}

/// Formats an error for the user, pointing at the offending column when the
/// error has a position.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: UnrecognisedCharacter
        -> LexicalError: invalid character '$' at 1:24
          |
        1 | PROGRAM P; BEGIN a = 5 $ END.
          | -----------------------^
    */

    let mut rendered = match error.get_tip() {
        ErrorTip::None => format!("Error: {}", error.get_error_name()),
        tip => format!("Error: {} ({})", error.get_error_name(), tip),
    };
    rendered.push_str(&format!("\n-> {}", error));

    let Some(position) = error.get_position() else {
        return rendered;
    };
    let Some(line_text) = get_line_at_position(source, position.line) else {
        return rendered;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;
    let arrows = position.column.max(1);

    rendered.push_str(&format!("\n{:>padding$}", "|"));
    rendered.push_str(&format!("\n{} | {}", line_string, line_text));
    rendered.push_str(&format!("\n{:>padding$} {:->arrows$}", "|", "^"));

    rendered
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "PROGRAM P;\r\nBEGIN\n  a = 1\nEND.";

        assert_eq!(super::get_line_at_position(source, 1), Some("PROGRAM P;"));
        assert_eq!(super::get_line_at_position(source, 3), Some("  a = 1"));
        assert_eq!(super::get_line_at_position(source, 5), None);
        assert_eq!(super::get_line_at_position(source, 0), None);
    }

    #[test]
    fn test_render_error_points_at_column() {
        let source = "PROGRAM P; BEGIN a = 5 $ END.";
        let error = Error::new(
            ErrorImpl::UnrecognisedCharacter { character: '$' },
            Position { line: 1, column: 24 },
        );

        let rendered = super::render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnrecognisedCharacter");
        assert_eq!(lines[1], "-> LexicalError: invalid character '$' at 1:24");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | PROGRAM P; BEGIN a = 5 $ END.");
        assert_eq!(lines[4], format!("  | {}^", "-".repeat(23)));
    }

    #[test]
    fn test_render_error_includes_tip() {
        let source = "PROGRAM P; BEGIN a = 5 b = 6 END.";
        let error = Error::new(
            ErrorImpl::DanglingIdentifier {
                name: "b".to_string(),
            },
            Position { line: 1, column: 24 },
        );

        let rendered = super::render_error(&error, source);

        assert!(rendered.starts_with(
            "Error: DanglingIdentifier (Unexpected identifier `b`, did you miss a semicolon?)\n"
        ));
        assert!(rendered.contains("-> SyntaxError: "));
    }

    #[test]
    fn test_render_runtime_error_header_only() {
        let error = Error::runtime(ErrorImpl::DivisionByZero);

        assert_eq!(
            super::render_error(&error, "PROGRAM P; BEGIN a = 1 / 0 END."),
            "Error: DivisionByZero\n-> RuntimeError: division by zero"
        );
    }
}
