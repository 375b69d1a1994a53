use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator, UpdateOperator},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated},
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (numeric identity)
/// - `!`  (logical not)
/// - `++` and `--` (prefix increment and decrement)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`] and then applies any postfix operators via
/// [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "+" | "!" | "++" | "--") unary
///            | primary postfix
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    ensure_sufficient_stack(|| {
        let Some(&lexeme) = tokens.peek()
        else {
            return Err(ParseError::UnexpectedEndOfInput { expected: "expression".to_string() });
        };
        let line = lexeme.line;

        let op = match lexeme.token {
            Token::Minus => UnaryOperator::Negate,
            Token::Plus => UnaryOperator::Plus,
            Token::Bang => UnaryOperator::Not,
            Token::PlusPlus | Token::MinusMinus => {
                let op = if lexeme.token == Token::PlusPlus {
                    UpdateOperator::Increment
                } else {
                    UpdateOperator::Decrement
                };
                tokens.next();
                let target = parse_unary(tokens)?;
                return Ok(Expr::Update { op,
                                         target: Box::new(target),
                                         prefix: true,
                                         line });
            },
            _ => {
                let primary = parse_primary(tokens)?;
                return parse_postfix(tokens, primary);
            },
        };

        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::Unary { op,
                         expr: Box::new(expr),
                         line })
    })
}

/// Parses postfix operators applied to an expression.
///
/// Handles two kinds of postfix constructs:
///
/// 1. **Calls and indexing**, chained in any order:
/// ```text
///        f(x)
///        a[0][1]
///        f()[0](y)
/// ```
/// 2. **A single trailing increment or decrement**:
/// ```text
///        i++
///        a[0]--
/// ```
///
/// Grammar:
/// ```text
///     postfix := ( "(" arguments ")" | "[" expression "]" )* ("++" | "--")?
/// ```
///
/// # Errors
/// Returns a `ParseError` if a `(` or `[` is not properly closed or an inner
/// expression fails to parse.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    loop {
        match tokens.peek() {
            Some(Lexeme { token: Token::LParen,
                          line, .. }) => {
                let line = *line;
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen, ")")?;
                node = Expr::Call { callee: Box::new(node),
                                    arguments,
                                    line };
            },
            Some(Lexeme { token: Token::LBracket,
                          line, .. }) => {
                let line = *line;
                tokens.next();
                let index = parse_expression(tokens)?;
                expect(tokens, &Token::RBracket, "]")?;
                node = Expr::Member { object: Box::new(node),
                                      index: Box::new(index),
                                      line };
            },
            _ => break,
        }
    }

    let op = match tokens.peek() {
        Some(Lexeme { token: Token::PlusPlus,
                      .. }) => UpdateOperator::Increment,
        Some(Lexeme { token: Token::MinusMinus,
                      .. }) => UpdateOperator::Decrement,
        _ => return Ok(node),
    };
    tokens.next();

    let line = node.line_number();
    Ok(Expr::Update { op,
                      target: Box::new(node),
                      prefix: false,
                      line })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric and string literals
/// - identifiers
/// - parenthesized expressions
/// - array literals (`[ ... ]`)
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER
///              | STRING
///              | IDENTIFIER
///              | "(" expression ")"
///              | "[" (expression ("," expression)*)? "]"
/// ```
///
/// # Errors
/// Returns [`ParseError::ExpectedExpression`] when the next token cannot start
/// an expression.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let lexeme = tokens.next()
                       .ok_or_else(|| ParseError::UnexpectedEndOfInput { expected: "expression".to_string() })?;
    let line = lexeme.line;

    match &lexeme.token {
        Token::Number(n) => Ok(Expr::Literal { value: (*n).into(),
                                               line }),
        Token::Str(s) => Ok(Expr::Literal { value: s.as_str().into(),
                                            line }),
        Token::Identifier(name) => Ok(Expr::Identifier { name: name.clone(),
                                                         line }),
        Token::LParen => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, ")")?;
            Ok(expr)
        },
        Token::LBracket => {
            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket, "]")?;
            Ok(Expr::ArrayLiteral { elements, line })
        },
        _ => Err(ParseError::ExpectedExpression { token: lexeme.text.clone(),
                                                  line }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::{BinaryOperator, Expr, Statement, UnaryOperator, UpdateOperator},
        error::ParseError,
        interpreter::{lexer::tokenize, parser::parse},
    };

    fn expression(source: &str) -> Expr {
        let tokens = tokenize(&format!("{source};")).unwrap();
        match parse(&tokens).unwrap().body.remove(0) {
            Statement::Expression { expr, .. } => expr,
            other => panic!("expected expression statement, got {other:?}"),
        }
    }

    fn ident(name: &str) -> Box<Expr> {
        Box::new(Expr::Identifier { name: name.to_string(),
                                    line: 1, })
    }

    #[test]
    fn precedence_of_multiplication() {
        let expr = expression("a + b * c");

        assert_eq!(expr,
                   Expr::Binary { left:  ident("a"),
                                  op:    BinaryOperator::Add,
                                  right: Box::new(Expr::Binary { left:  ident("b"),
                                                                 op:    BinaryOperator::Mul,
                                                                 right: ident("c"),
                                                                 line:  1, }),
                                  line:  1, });
    }

    #[test]
    fn logical_operators_share_a_level() {
        let expr = expression("a || b && c");

        assert_eq!(expr,
                   Expr::Binary { left:  Box::new(Expr::Binary { left:  ident("a"),
                                                                 op:    BinaryOperator::Or,
                                                                 right: ident("b"),
                                                                 line:  1, }),
                                  op:    BinaryOperator::And,
                                  right: ident("c"),
                                  line:  1, });
    }

    #[test]
    fn call_and_index_chain() {
        let expr = expression("f()[0](x)");

        let Expr::Call { callee, arguments, .. } = expr
        else {
            panic!("expected call");
        };
        assert_eq!(arguments, vec![*ident("x")]);
        assert!(matches!(*callee, Expr::Member { .. }));
    }

    #[test]
    fn postfix_and_prefix_updates() {
        assert_eq!(expression("i++"),
                   Expr::Update { op:     UpdateOperator::Increment,
                                  target: ident("i"),
                                  prefix: false,
                                  line:   1, });
        assert_eq!(expression("--i"),
                   Expr::Update { op:     UpdateOperator::Decrement,
                                  target: ident("i"),
                                  prefix: true,
                                  line:   1, });
    }

    #[test]
    fn nested_unary() {
        assert_eq!(expression("!-x"),
                   Expr::Unary { op:   UnaryOperator::Not,
                                 expr: Box::new(Expr::Unary { op:   UnaryOperator::Negate,
                                                              expr: ident("x"),
                                                              line: 1, }),
                                 line: 1, });
    }

    #[test]
    fn assignment_is_right_associative() {
        let Expr::Assignment { name, value, .. } = expression("a = b = 1")
        else {
            panic!("expected assignment");
        };
        assert_eq!(name, "a");
        assert!(matches!(*value, Expr::Assignment { .. }));
    }

    #[test]
    fn invalid_assignment_target() {
        let tokens = tokenize("1 = 2;").unwrap();

        assert_eq!(parse(&tokens).unwrap_err(),
                   ParseError::InvalidAssignmentTarget { line: 1 });
    }

    #[test]
    fn unexpected_primary() {
        let tokens = tokenize("mannle x = );").unwrap();

        assert_eq!(parse(&tokens).unwrap_err(),
                   ParseError::ExpectedExpression { token: ")".to_string(),
                                                    line:  1, });
    }
}
