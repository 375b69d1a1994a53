use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates `&&` or `||` with short-circuiting.
    ///
    /// The result is the operand that decided the outcome, not a boolean:
    /// `a && b` is `a` when `a` is falsy and `b` otherwise, `a || b` is `a`
    /// when `a` is truthy and `b` otherwise. The right operand is evaluated
    /// only when it decides.
    pub(crate) fn eval_logic(&mut self, op: BinaryOperator, left: &Expr, right: &Expr) -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        let decided = match op {
            BinaryOperator::Or => left.is_truthy(),
            _ => !left.is_truthy(),
        };

        if decided { Ok(left) } else { self.evaluate(right) }
    }
}
