use std::iter::Peekable;

use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{eat, expect},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token is encountered.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// A block containing all parsed statements.
///
/// # Errors
/// Returns a `ParseError` if the opening brace is missing, a statement fails
/// to parse, or input ends before the closing brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let line = expect(tokens, &Token::LBrace, "{")?.line;
    let mut statements = Vec::new();

    loop {
        if eat(tokens, &Token::RBrace) {
            break;
        }
        if tokens.peek().is_none() {
            return Err(ParseError::UnexpectedEndOfInput { expected: "}".to_string() });
        }

        statements.push(parse_statement(tokens)?);
    }

    Ok(Block { statements, line })
}
