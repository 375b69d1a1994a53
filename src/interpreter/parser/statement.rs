use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{ElseBranch, Expr, ForInit, FunctionDef, IfStatement, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{check, eat, expect, parse_identifier, parse_parameters},
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a single statement.
///
/// The statement form is chosen by the leading token:
/// - `mannle` starts a variable declaration.
/// - `kamm` starts a function declaration.
/// - `bhajo`, `chaddo` and `langh_jaa` are return, break and continue.
/// - `vikha` prints.
/// - `je`, `jado`, `eh_kro` and `jadd_vi` are the control-flow statements.
/// - `{` opens a nested block.
///
/// Anything else is parsed as an expression statement terminated by `;`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    ensure_sufficient_stack(|| {
        let Some(&lexeme) = tokens.peek()
        else {
            return Err(ParseError::UnexpectedEndOfInput { expected: "statement".to_string() });
        };
        let line = lexeme.line;

        match lexeme.token {
            Token::Mannle => parse_variable_declaration(tokens),
            Token::Kamm => parse_function_declaration(tokens),
            Token::Bhajo => parse_return(tokens),
            Token::Chaddo => {
                tokens.next();
                expect(tokens, &Token::Semicolon, ";")?;
                Ok(Statement::Break { line })
            },
            Token::LanghJaa => {
                tokens.next();
                expect(tokens, &Token::Semicolon, ";")?;
                Ok(Statement::Continue { line })
            },
            Token::Vikha => parse_print(tokens),
            Token::Je => {
                tokens.next();
                Ok(Statement::If(parse_if_chain(tokens, line)?))
            },
            Token::Jado => parse_while(tokens),
            Token::EhKro => parse_do_while(tokens),
            Token::JaddVi => parse_for(tokens),
            Token::LBrace => Ok(Statement::Block(parse_block(tokens)?)),
            _ => {
                let expr = parse_expression(tokens)?;
                expect(tokens, &Token::Semicolon, ";")?;
                Ok(Statement::Expression { expr, line })
            },
        }
    })
}

/// Parses `mannle name = value;`.
///
/// An initializer is always required.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let (name, value, line) = parse_declaration_parts(tokens)?;

    Ok(Statement::VarDecl { name, value, line })
}

/// Parses the pieces of a declaration: name, initializer and the line of the
/// `mannle` keyword. The trailing `;` is consumed.
fn parse_declaration_parts<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, Expr, usize)>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let line = expect(tokens, &Token::Mannle, "mannle")?.line;
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Equals, "=")?;
    let value = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon, ";")?;

    Ok((name, value, line))
}

/// Parses a function declaration.
///
/// Syntax:
/// ```text
///     kamm name(a, b) { ... }
/// ```
/// The body is shared by every closure created from the declaration.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let line = expect(tokens, &Token::Kamm, "kamm")?.line;
    let name = parse_identifier(tokens)?;
    let params = parse_parameters(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::FunctionDecl(Rc::new(FunctionDef { name,
                                                     params,
                                                     body,
                                                     line })))
}

/// Parses `bhajo;` or `bhajo value;`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let line = expect(tokens, &Token::Bhajo, "bhajo")?.line;

    let argument = if eat(tokens, &Token::Semicolon) {
        None
    } else {
        let argument = parse_expression(tokens)?;
        expect(tokens, &Token::Semicolon, ";")?;
        Some(argument)
    };

    Ok(Statement::Return { argument, line })
}

/// Parses `vikha(expr);`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let line = expect(tokens, &Token::Vikha, "vikha")?.line;
    expect(tokens, &Token::LParen, "(")?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, ")")?;
    expect(tokens, &Token::Semicolon, ";")?;

    Ok(Statement::Print { expr, line })
}

/// Parses a parenthesized condition: `"(" expression ")"`.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    expect(tokens, &Token::LParen, "(")?;
    let test = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, ")")?;

    Ok(test)
}

/// Parses the rest of an `je` statement with its `hor_je` and `fer` clauses.
///
/// Syntax:
/// ```text
///     je (<condition>) { ... }
///     hor_je (<condition>) { ... }
///     fer { ... }
/// ```
/// Any number of `hor_je` clauses may follow, each becoming a nested
/// [`IfStatement`] in the `alternate` slot of the one before it.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `je` or `hor_je` keyword.
/// - `line`: Line number of that keyword.
fn parse_if_chain<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<IfStatement>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let test = parse_condition(tokens)?;
    let consequent = parse_block(tokens)?;

    let alternate = match tokens.peek() {
        Some(Lexeme { token: Token::Fer,
                      .. }) => {
            tokens.next();
            Some(ElseBranch::Else(parse_block(tokens)?))
        },
        Some(Lexeme { token: Token::HorJe,
                      line: elif_line,
                      .. }) => {
            let elif_line = *elif_line;
            tokens.next();
            Some(ElseBranch::ElseIf(Box::new(parse_if_chain(tokens, elif_line)?)))
        },
        _ => None,
    };

    Ok(IfStatement { test,
                     consequent,
                     alternate,
                     line })
}

/// Parses `jado (test) { body }`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let line = expect(tokens, &Token::Jado, "jado")?.line;
    let test = parse_condition(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::While { test, body, line })
}

/// Parses `eh_kro { body } jado (test);`.
fn parse_do_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let line = expect(tokens, &Token::EhKro, "eh_kro")?.line;
    let body = parse_block(tokens)?;
    expect(tokens, &Token::Jado, "jado")?;
    let test = parse_condition(tokens)?;
    expect(tokens, &Token::Semicolon, ";")?;

    Ok(Statement::DoWhile { body, test, line })
}

/// Parses a C-style `jadd_vi` loop.
///
/// Syntax:
/// ```text
///     jadd_vi (<init>; <test>; <update>) { ... }
/// ```
/// Every header part is optional. The initializer is either a `mannle`
/// declaration or an expression.
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let line = expect(tokens, &Token::JaddVi, "jadd_vi")?.line;
    expect(tokens, &Token::LParen, "(")?;

    let init = if eat(tokens, &Token::Semicolon) {
        None
    } else if check(tokens, &Token::Mannle) {
        let (name, value, line) = parse_declaration_parts(tokens)?;
        Some(ForInit::Declaration { name, value, line })
    } else {
        let expr = parse_expression(tokens)?;
        expect(tokens, &Token::Semicolon, ";")?;
        Some(ForInit::Expression(expr))
    };

    let test = if check(tokens, &Token::Semicolon) {
        None
    } else {
        Some(parse_expression(tokens)?)
    };
    expect(tokens, &Token::Semicolon, ";")?;

    let update = if check(tokens, &Token::RParen) {
        None
    } else {
        Some(parse_expression(tokens)?)
    };
    expect(tokens, &Token::RParen, ")")?;

    let body = parse_block(tokens)?;

    Ok(Statement::For { init,
                        test,
                        update,
                        body,
                        line })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::{ElseBranch, ForInit, Statement},
        error::ParseError,
        interpreter::{lexer::tokenize, parser::parse},
    };

    fn statements(source: &str) -> Vec<Statement> {
        parse(&tokenize(source).unwrap()).unwrap().body
    }

    fn error(source: &str) -> ParseError {
        parse(&tokenize(source).unwrap()).unwrap_err()
    }

    #[test]
    fn if_chain_nests_alternates() {
        let body = statements("je (a) { } hor_je (b) { } hor_je (c) { } fer { vikha(1); }");

        let [Statement::If(first)] = body.as_slice()
        else {
            panic!("expected a single if statement");
        };
        let Some(ElseBranch::ElseIf(second)) = &first.alternate
        else {
            panic!("expected first hor_je");
        };
        let Some(ElseBranch::ElseIf(third)) = &second.alternate
        else {
            panic!("expected second hor_je");
        };
        let Some(ElseBranch::Else(block)) = &third.alternate
        else {
            panic!("expected fer");
        };
        assert_eq!(block.statements.len(), 1);
    }

    #[test]
    fn for_header_parts_are_optional() {
        let body = statements("jadd_vi (;;) { chaddo; }");

        let [Statement::For { init,
                              test,
                              update,
                              body,
                              .. }] = body.as_slice()
        else {
            panic!("expected a for loop");
        };
        assert!(init.is_none() && test.is_none() && update.is_none());
        assert_eq!(body.statements, vec![Statement::Break { line: 1 }]);
    }

    #[test]
    fn for_with_declaration() {
        let body = statements("jadd_vi (mannle i = 0; i < 3; i++) { }");

        let [Statement::For { init: Some(ForInit::Declaration { name, .. }),
                              test: Some(_),
                              update: Some(_),
                              .. }] = body.as_slice()
        else {
            panic!("expected a for loop with a declaration");
        };
        assert_eq!(name, "i");
    }

    #[test]
    fn do_while_requires_semicolon() {
        assert_eq!(error("eh_kro { } jado (x)"),
                   ParseError::UnexpectedEndOfInput { expected: ";".to_string() });
    }

    #[test]
    fn missing_semicolon_reports_token() {
        assert_eq!(error("mannle x = 1\nvikha(x);"),
                   ParseError::UnexpectedToken { token:    "vikha".to_string(),
                                                 expected: ";".to_string(),
                                                 line:     2, });
    }

    #[test]
    fn unclosed_block() {
        assert_eq!(error("kamm f() { bhajo 1;"),
                   ParseError::UnexpectedEndOfInput { expected: "}".to_string() });
    }

    #[test]
    fn statement_lines() {
        let body = statements("mannle a = 1;\n\nvikha(a);\n{ a = 2; }");
        let lines = body.iter().map(Statement::line_number).collect::<Vec<_>>();

        assert_eq!(lines, vec![1, 3, 4]);
    }
}
