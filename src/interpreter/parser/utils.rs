use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::core::ParseResult,
    },
};

/// Builds the error for `lexeme` appearing where `expected` should be.
pub(in crate::interpreter::parser) fn unexpected(lexeme: &Lexeme, expected: &str) -> ParseError {
    ParseError::UnexpectedToken { token:    lexeme.text.clone(),
                                  expected: expected.to_string(),
                                  line:     lexeme.line, }
}

/// Consumes the next token, which must equal `token`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `token`: The required token.
/// - `expected`: How the token is described in the error message.
///
/// # Returns
/// The consumed lexeme.
///
/// # Errors
/// Returns a `ParseError` if the next token differs or input has ended.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    token: &Token,
                                                    expected: &str)
                                                    -> ParseResult<&'a Lexeme>
    where I: Iterator<Item = &'a Lexeme>
{
    match tokens.next() {
        Some(lexeme) if lexeme.token == *token => Ok(lexeme),
        Some(lexeme) => Err(unexpected(lexeme, expected)),
        None => Err(ParseError::UnexpectedEndOfInput { expected: expected.to_string() }),
    }
}

/// Returns `true` and consumes the next token if it equals `token`.
pub(in crate::interpreter::parser) fn eat<'a, I>(tokens: &mut Peekable<I>, token: &Token) -> bool
    where I: Iterator<Item = &'a Lexeme>
{
    if tokens.peek().is_some_and(|lexeme| lexeme.token == *token) {
        tokens.next();
        return true;
    }
    false
}

/// Returns `true` if the next token equals `token`, without consuming it.
pub(in crate::interpreter::parser) fn check<'a, I>(tokens: &mut Peekable<I>, token: &Token) -> bool
    where I: Iterator<Item = &'a Lexeme>
{
    tokens.peek().is_some_and(|lexeme| lexeme.token == *token)
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, call arguments and parameter
/// lists. It repeatedly calls `parse_item` to parse one element, expecting
/// either a comma, to continue the list, or the closing token, to end it.
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    closing_text: &str)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let mut items = Vec::new();
    if eat(tokens, closing) {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(Lexeme { token: Token::Comma, .. }) => {},
            Some(lexeme) if lexeme.token == *closing => break,
            Some(lexeme) => return Err(unexpected(lexeme, closing_text)),
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: closing_text.to_string() });
            },
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// Keywords are separate tokens, so a reserved word never reaches here as an
/// identifier.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Lexeme>
{
    match tokens.next() {
        Some(Lexeme { token: Token::Identifier(name), .. }) => Ok(name.clone()),
        Some(lexeme) => Err(unexpected(lexeme, "IDENTIFIER")),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "IDENTIFIER".to_string() }),
    }
}

/// Parses a parameter list `(a, b, c)` including both parentheses.
pub(in crate::interpreter::parser) fn parse_parameters<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<Vec<String>>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    expect(tokens, &Token::LParen, "(")?;
    parse_comma_separated(tokens, parse_identifier, &Token::RParen, ")")
}
