use tracing::debug;

use crate::{
    ast::Program,
    interpreter::{
        lexer::Lexeme,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Core parsing entry points for expressions.
///
/// Contains the shared result type, the expression entry point and
/// assignment, the lowest-precedence expression form.
pub mod core;

/// Unary, postfix and primary expressions.
///
/// Handles prefix operators, call and index chains, postfix increment and
/// decrement, and atoms such as literals, identifiers, groupings and array
/// literals.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence levels from logical operators down to
/// multiplication, all left-associative.
pub mod binary;

/// Block parsing.
///
/// Parses braced statement sequences used by every compound statement.
pub mod block;

/// Utility functions for the parser.
///
/// Token expectations, identifier parsing and comma-separated lists.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading keyword to declarations, control flow, print,
/// blocks and expression statements.
pub mod statement;

/// Parses a complete token sequence into a [`Program`].
///
/// Parsing stops at the first error; no partial program is returned.
///
/// # Errors
/// Returns a [`ParseError`](crate::error::ParseError) describing the first
/// unexpected token or the premature end of input.
///
/// ## Example
/// ```
/// use pindscript::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("mannle x = 1; vikha(x);").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.body.len(), 2);
/// ```
pub fn parse(tokens: &[Lexeme]) -> ParseResult<Program> {
    let mut tokens = tokens.iter().peekable();
    let mut body = Vec::new();

    while tokens.peek().is_some() {
        body.push(parse_statement(&mut tokens)?);
    }

    debug!(statements = body.len(), "parsed program");
    Ok(Program { body })
}
