use crate::{
    ast::{Expr, UnaryOperator, UpdateOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::{read_index, write_index},
        },
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation.
    ///
    /// `-` and `+` require a number; `!` accepts anything and yields a
    /// boolean by truthiness.
    pub(crate) fn eval_unary(&mut self, op: UnaryOperator, expr: &Expr, line: usize) -> EvalResult<Value> {
        let value = self.evaluate(expr)?;

        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
            UnaryOperator::Negate | UnaryOperator::Plus => {
                let Some(n) = value.as_number()
                else {
                    return Err(RuntimeError::TypeError { details: format!("Unary minus or plus expects a number, found {}.",
                                                                          value.type_name()),
                                                         line });
                };
                Ok(Value::Number(if matches!(op, UnaryOperator::Negate) { -n } else { n }))
            },
        }
    }

    /// Evaluates `++` or `--` on a variable or an array element.
    ///
    /// The target must hold a number. The prefix form yields the updated
    /// value, the postfix form the value before the update. For an element
    /// target the array and index are evaluated once.
    pub(crate) fn eval_update(&mut self,
                              op: UpdateOperator,
                              target: &Expr,
                              prefix: bool,
                              line: usize)
                              -> EvalResult<Value> {
        match target {
            Expr::Identifier { name, .. } => {
                let old = step_number(op, &self.scope.get(name, line)?, line)?;
                let new = apply_step(op, old);
                self.scope.assign(name, Value::Number(new), line)?;
                Ok(Value::Number(if prefix { new } else { old }))
            },
            Expr::Member { object, index, .. } => {
                let object = self.evaluate(object)?;
                let index = self.evaluate(index)?;
                let old = step_number(op, &read_index(&object, &index, line)?, line)?;
                let new = apply_step(op, old);
                write_index(&object, &index, Value::Number(new), line)?;
                Ok(Value::Number(if prefix { new } else { old }))
            },
            _ => Err(RuntimeError::TypeError { details: "Increment/Decrement requires a variable name.".to_string(),
                                               line }),
        }
    }
}

fn step_number(op: UpdateOperator, value: &Value, line: usize) -> EvalResult<f64> {
    value.as_number()
         .ok_or_else(|| RuntimeError::TypeError { details: format!("'{op}' expects a number, found {}.",
                                                                   value.type_name()),
                                                  line })
}

const fn apply_step(op: UpdateOperator, value: f64) -> f64 {
    match op {
        UpdateOperator::Increment => value + 1.0,
        UpdateOperator::Decrement => value - 1.0,
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
    fn prefix_and_postfix_results() {
        let source = "mannle x = 1; vikha(x++); vikha(x); vikha(++x); vikha(--x); vikha(x--); vikha(x);";

        assert_eq!(printed(source), vec!["1", "2", "3", "2", "2", "1"]);
    }

    #[test]
    fn updates_array_elements() {
        assert_eq!(printed("mannle a = [5, 9]; a[1]++; --a[0]; vikha(a);"),
                   vec!["4,10"]);
    }

    #[test]
    fn update_needs_a_number() {
        assert_eq!(run("mannle s = 'a'; s++;").unwrap_err().kind(),
                   ErrorKind::TypeError);
    }

    #[test]
    fn negation_and_not() {
        assert_eq!(printed("vikha(-(2 + 3)); vikha(!0); vikha(!'text'); vikha(+4);"),
                   vec!["-5", "true", "false", "4"]);
    }

    #[test]
    fn negating_a_string_is_type_error() {
        assert_eq!(run("vikha(-'a');").unwrap_err().kind(), ErrorKind::TypeError);
    }
}
