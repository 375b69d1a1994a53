use crate::{
    ast::{Block, Expr, ForInit},
    interpreter::evaluator::core::{EvalResult, Flow, Interpreter},
};

/// What a loop does after one run of its body.
enum Next {
    Iterate,
    Exit(Flow),
}

/// Applies a loop boundary to the flow produced by one body run.
///
/// `chaddo` ends the loop normally and `langh_jaa` moves on to the next
/// iteration. `bhajo` keeps unwinding.
fn after_body(flow: Flow) -> Next {
    match flow {
        Flow::Normal | Flow::Continue { .. } => Next::Iterate,
        Flow::Break { .. } => Next::Exit(Flow::Normal),
        Flow::Return(_) => Next::Exit(flow),
    }
}

impl Interpreter {
    /// Executes `jado (test) { body }`.
    ///
    /// Each iteration costs a step on top of the statements in its body and
    /// runs in a fresh scope.
    pub(crate) fn execute_while(&mut self, test: &Expr, body: &Block, line: usize) -> EvalResult<Flow> {
        while self.evaluate(test)?.is_truthy() {
            self.tick(line)?;
            if let Next::Exit(flow) = after_body(self.execute_block(body)?) {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes `eh_kro { body } jado (test);`.
    ///
    /// The body runs once before the test is first evaluated. `langh_jaa`
    /// skips to the test.
    pub(crate) fn execute_do_while(&mut self, body: &Block, test: &Expr, line: usize) -> EvalResult<Flow> {
        loop {
            self.tick(line)?;
            if let Next::Exit(flow) = after_body(self.execute_block(body)?) {
                return Ok(flow);
            }
            if !self.evaluate(test)?.is_truthy() {
                return Ok(Flow::Normal);
            }
        }
    }

    /// Executes `jadd_vi (init; test; update) { body }`.
    ///
    /// The header lives in its own scope, so a loop variable declared by
    /// `init` is visible to the test, the update and every iteration but not
    /// after the loop. Each iteration's body gets a fresh child of that scope.
    /// `langh_jaa` still runs the update.
    pub(crate) fn execute_for(&mut self,
                              init: Option<&ForInit>,
                              test: Option<&Expr>,
                              update: Option<&Expr>,
                              body: &Block,
                              line: usize)
                              -> EvalResult<Flow> {
        let loop_scope = self.nested_scope();

        self.in_scope(loop_scope, |this| {
            match init {
                Some(ForInit::Declaration { name, value, line }) => {
                    let value = this.evaluate(value)?;
                    this.scope.declare(name, value, *line)?;
                },
                Some(ForInit::Expression(expr)) => {
                    this.evaluate(expr)?;
                },
                None => {},
            }

            loop {
                if let Some(test) = test
                   && !this.evaluate(test)?.is_truthy()
                {
                    return Ok(Flow::Normal);
                }
                this.tick(line)?;
                if let Next::Exit(flow) = after_body(this.execute_block(body)?) {
                    return Ok(flow);
                }
                if let Some(update) = update {
                    this.evaluate(update)?;
                }
            }
        })
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
    fn for_loop_counts() {
        assert_eq!(printed("jadd_vi (mannle i = 0; i < 3; i++) { vikha(i); }"),
                   vec!["0", "1", "2"]);
    }

    #[test]
    fn for_loop_variable_is_scoped() {
        let source = "jadd_vi (mannle i = 0; i < 1; i++) {} vikha(i);";

        assert_eq!(run(source).unwrap_err().kind(), ErrorKind::Undeclared);
    }

    #[test]
    fn continue_still_runs_update() {
        let source = "jadd_vi (mannle i = 0; i < 5; i++) {
                          je (i % 2 == 0) { langh_jaa; }
                          vikha(i);
                      }";

        assert_eq!(printed(source), vec!["1", "3"]);
    }

    #[test]
    fn break_leaves_innermost_loop() {
        let source = "mannle i = 0;
                      jado (i < 3) {
                          jado (true) { chaddo; }
                          vikha(i);
                          i += 1;
                      }";

        assert_eq!(printed(source), vec!["0", "1", "2"]);
    }

    #[test]
    fn do_while_runs_once() {
        assert_eq!(printed("eh_kro { vikha('ik'); } jado (false);"), vec!["ik"]);
    }

    #[test]
    fn iteration_scope_is_fresh() {
        let source = "mannle n = 0;
                      jado (n < 2) { mannle seen = n; vikha(seen); n++; }";

        assert_eq!(printed(source), vec!["0", "1"]);
    }

    #[test]
    fn missing_test_loops_until_break() {
        let source = "mannle n = 0; jadd_vi (;;) { n++; je (n == 4) { chaddo; } } vikha(n);";

        assert_eq!(printed(source), vec!["4"]);
    }

    #[test]
    fn endless_loop_times_out() {
        let failure = run("vikha('start'); jado (true) {}").unwrap_err();

        assert_eq!(failure.kind(), ErrorKind::Timeout);
        assert_eq!(failure.output, vec!["start".to_string()]);
    }
}
