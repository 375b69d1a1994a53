use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            binary::core::apply_binary,
            core::{EvalResult, Interpreter},
            utils::{read_index, write_index},
        },
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates `name = value` or a compound form such as `name += value`.
    ///
    /// The nearest enclosing binding of `name` is overwritten; assignment never
    /// declares. The assigned value is the result of the expression.
    pub(crate) fn eval_assignment(&mut self,
                                  name: &str,
                                  operator: Option<BinaryOperator>,
                                  value: &Expr,
                                  line: usize)
                                  -> EvalResult<Value> {
        let value = match operator {
            Some(op) => {
                let current = self.scope.get(name, line)?;
                let rhs = self.evaluate(value)?;
                apply_binary(op, &current, &rhs, line)?
            },
            None => self.evaluate(value)?,
        };

        self.scope.assign(name, value.clone(), line)?;
        Ok(value)
    }

    /// Evaluates `object[index] = value` or a compound form.
    ///
    /// The array and index expressions are evaluated once, before the value.
    pub(crate) fn eval_member_assignment(&mut self,
                                         object: &Expr,
                                         index: &Expr,
                                         operator: Option<BinaryOperator>,
                                         value: &Expr,
                                         line: usize)
                                         -> EvalResult<Value> {
        let object = self.evaluate(object)?;
        let index = self.evaluate(index)?;

        let value = match operator {
            Some(op) => {
                let current = read_index(&object, &index, line)?;
                let rhs = self.evaluate(value)?;
                apply_binary(op, &current, &rhs, line)?
            },
            None => self.evaluate(value)?,
        };

        write_index(&object, &index, value.clone(), line)?;
        Ok(value)
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
    fn compound_assignment() {
        let source = "mannle x = 10; x += 5; x -= 3; x *= 2; x /= 4; vikha(x);
                      mannle s = 'ab'; s += 1; vikha(s);";

        assert_eq!(printed(source), vec!["6", "ab1"]);
    }

    #[test]
    fn assignment_is_an_expression() {
        assert_eq!(printed("mannle a = 0; mannle b = 0; a = b = 7; vikha(a + b);"),
                   vec!["14"]);
    }

    #[test]
    fn assignment_reaches_enclosing_scope() {
        assert_eq!(printed("mannle n = 1; { n = 2; } vikha(n);"), vec!["2"]);
    }

    #[test]
    fn assigning_undeclared_name_fails() {
        assert_eq!(run("ghost = 1;").unwrap_err().kind(), ErrorKind::Undeclared);
    }

    #[test]
    fn compound_element_assignment_evaluates_index_once() {
        let source = "mannle a = [1, 2, 3];
                      mannle i = 0;
                      kamm next() { i++; bhajo i; }
                      a[next()] += 10;
                      vikha(a); vikha(i);";

        assert_eq!(printed(source), vec!["1,12,3", "1"]);
    }

    #[test]
    fn element_writes_append_at_length_only() {
        assert_eq!(printed("mannle a = [1]; a[1] = 2; vikha(a);"), vec!["1,2"]);
        assert_eq!(run("mannle a = [1]; a[5] = 2;").unwrap_err().kind(),
                   ErrorKind::TypeError);
    }

    #[test]
    fn strings_are_read_only() {
        assert_eq!(run("mannle s = 'abc'; s[0] = 'z';").unwrap_err().kind(),
                   ErrorKind::TypeError);
    }
}
