use std::rc::Rc;

use crate::{
    ast::{Block, ElseBranch, IfStatement, Statement},
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::{
            core::Value,
            function::{Closure, Function},
        },
    },
    util::stack::ensure_sufficient_stack,
};

impl Interpreter {
    /// Executes a single statement in the current scope.
    ///
    /// Every statement costs one step before it runs, so a program that never
    /// stops fails with `TIMEOUT` instead of hanging.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<Flow> {
        self.tick(statement.line_number())?;

        ensure_sufficient_stack(|| match statement {
            Statement::VarDecl { name, value, line } => {
                let value = self.evaluate(value)?;
                self.scope.declare(name, value, *line)?;
                Ok(Flow::Normal)
            },
            Statement::FunctionDecl(def) => {
                let closure = Closure { def:   Rc::clone(def),
                                        scope: self.scope.clone(), };
                let value = Value::Function(Function::Closure(Rc::new(closure)));
                self.scope.declare(&def.name, value, def.line)?;
                Ok(Flow::Normal)
            },
            Statement::If(statement) => self.execute_if(statement),
            Statement::While { test, body, line } => self.execute_while(test, body, *line),
            Statement::DoWhile { body, test, line } => self.execute_do_while(body, test, *line),
            Statement::For { init,
                             test,
                             update,
                             body,
                             line, } => {
                self.execute_for(init.as_ref(), test.as_ref(), update.as_ref(), body, *line)
            },
            Statement::Return { argument, .. } => {
                let value = match argument {
                    Some(argument) => self.evaluate(argument)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value))
            },
            Statement::Break { line } => Ok(Flow::Break { line: *line }),
            Statement::Continue { line } => Ok(Flow::Continue { line: *line }),
            Statement::Print { expr, .. } => {
                let text = self.evaluate(expr)?.to_string();
                self.meta.output.push(text);
                Ok(Flow::Normal)
            },
            Statement::Block(block) => self.execute_block(block),
            Statement::Expression { expr, .. } => {
                self.evaluate(expr)?;
                Ok(Flow::Normal)
            },
        })
    }

    /// Executes `block` in a fresh child of the current scope.
    pub fn execute_block(&mut self, block: &Block) -> EvalResult<Flow> {
        let scope = self.nested_scope();
        self.in_scope(scope, |this| this.execute_statements(&block.statements))
    }

    /// Executes a `je` chain.
    ///
    /// The chosen branch runs in its own scope. A `hor_je` clause runs like a
    /// nested statement: it costs a step and gets a scope of its own before
    /// its test is evaluated.
    fn execute_if(&mut self, statement: &IfStatement) -> EvalResult<Flow> {
        if self.evaluate(&statement.test)?.is_truthy() {
            return self.execute_block(&statement.consequent);
        }

        match &statement.alternate {
            Some(ElseBranch::Else(block)) => self.execute_block(block),
            Some(ElseBranch::ElseIf(next)) => {
                self.tick(next.line)?;
                let scope = self.nested_scope();
                self.in_scope(scope, |this| this.execute_if(next))
            },
            None => Ok(Flow::Normal),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        error::{ErrorKind, FixedPhrasebook, RunFailure},
        interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::parse},
    };

    fn run(source: &str) -> Result<Vec<String>, RunFailure> {
        let program = parse(&tokenize(source).unwrap()).unwrap();
        Interpreter::new().with_phrasebook(Box::new(FixedPhrasebook))
                          .run(&program)
    }

    fn printed(source: &str) -> Vec<String> {
        let mut output = run(source).unwrap();
        output.pop();
        output
    }

    #[test]
    fn else_if_chain_picks_first_match() {
        let source = "mannle x = 5;
                      je (x < 3) { vikha('small'); }
                      hor_je (x < 10) { vikha('medium'); }
                      fer { vikha('large'); }";

        assert_eq!(printed(source), vec!["medium"]);
    }

    #[test]
    fn branch_declarations_do_not_leak() {
        let source = "je (true) { mannle inner = 1; } vikha(inner);";

        assert_eq!(run(source).unwrap_err().kind(), ErrorKind::Undeclared);
    }

    #[test]
    fn nested_block_shadows() {
        let source = "mannle x = 1; { mannle x = 2; vikha(x); } vikha(x);";

        assert_eq!(printed(source), vec!["2", "1"]);
    }

    #[test]
    fn redeclaring_a_function_is_duplicate() {
        let source = "kamm f() {} kamm f() {}";

        assert_eq!(run(source).unwrap_err().kind(), ErrorKind::Duplicate);
    }

    #[test]
    fn redeclaring_a_builtin_at_top_level_is_duplicate() {
        assert_eq!(run("mannle lambai = 1;").unwrap_err().kind(),
                   ErrorKind::Duplicate);
        assert_eq!(printed("{ mannle lambai = 1; vikha(lambai); }"), vec!["1"]);
    }
}
