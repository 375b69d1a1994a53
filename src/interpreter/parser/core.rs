use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::binary::parse_logical,
    },
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing lexemes.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    ensure_sufficient_stack(|| parse_assignment(tokens))
}

/// Parses plain and compound assignment.
///
/// The left-hand side is parsed as an ordinary expression first and then
/// checked: only identifiers and index expressions may be assigned to.
/// Assignment is right-associative, so `a = b = 1` assigns `1` to both.
///
/// Grammar:
/// ```text
///     assignment := logical (("=" | "+=" | "-=" | "*=" | "/=") assignment)?
/// ```
///
/// # Errors
/// Returns [`ParseError::InvalidAssignmentTarget`] when the left-hand side is
/// neither a variable nor an index expression.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let target = parse_logical(tokens)?;

    let Some((operator, line)) =
        tokens.peek()
              .and_then(|lexeme| Some((assignment_operator(&lexeme.token)?, lexeme.line)))
    else {
        return Ok(target);
    };
    tokens.next();

    let value = Box::new(parse_assignment(tokens)?);

    match target {
        Expr::Identifier { name, .. } => Ok(Expr::Assignment { name,
                                                               operator,
                                                               value,
                                                               line }),
        Expr::Member { object, index, .. } => Ok(Expr::MemberAssignment { object,
                                                                          index,
                                                                          operator,
                                                                          value,
                                                                          line }),
        _ => Err(ParseError::InvalidAssignmentTarget { line }),
    }
}

/// Maps an assignment token to the operator it combines with.
///
/// The outer `Option` says whether `token` is an assignment at all; the inner
/// one is `None` for plain `=`.
///
/// ## Example
/// ```
/// use pindscript::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::core::assignment_operator},
/// };
///
/// assert_eq!(assignment_operator(&Token::Equals), Some(None));
/// assert_eq!(assignment_operator(&Token::MulAssign),
///            Some(Some(BinaryOperator::Mul)));
/// assert_eq!(assignment_operator(&Token::Plus), None);
/// ```
#[must_use]
pub const fn assignment_operator(token: &Token) -> Option<Option<BinaryOperator>> {
    match token {
        Token::Equals => Some(None),
        Token::PlusAssign => Some(Some(BinaryOperator::Add)),
        Token::MinusAssign => Some(Some(BinaryOperator::Sub)),
        Token::MulAssign => Some(Some(BinaryOperator::Mul)),
        Token::DivAssign => Some(Some(BinaryOperator::Div)),
        _ => None,
    }
}
