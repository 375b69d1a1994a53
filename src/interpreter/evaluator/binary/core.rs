use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            binary::{
                comparison::{compare, equals},
                scalar::{add, arithmetic},
            },
            core::{EvalResult, Interpreter},
        },
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary expression.
    ///
    /// `&&` and `||` are handed to [`Interpreter::eval_logic`] so that the
    /// right operand is only evaluated when needed. Every other operator
    /// evaluates both operands, left first, and applies [`apply_binary`].
    pub(crate) fn eval_binary(&mut self,
                              left: &Expr,
                              op: BinaryOperator,
                              right: &Expr,
                              line: usize)
                              -> EvalResult<Value> {
        if matches!(op, BinaryOperator::And | BinaryOperator::Or) {
            return self.eval_logic(op, left, right);
        }

        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;
        apply_binary(op, &left, &right, line)
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// Arithmetic goes to the scalar handlers, comparisons to the comparison
/// handlers. Given already evaluated operands, `&&` and `||` return the
/// deciding operand.
///
/// # Errors
/// Returns `TYPE_ERROR` for operand kinds the operator does not accept and
/// `MATH_ERROR` for division or remainder by zero.
///
/// # Example
/// ```
/// use pindscript::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::apply_binary, value::core::Value},
/// };
///
/// let sum = apply_binary(BinaryOperator::Add, &Value::from(3.0), &Value::from(4.0), 1);
/// assert_eq!(sum.unwrap(), Value::from(7.0));
///
/// let text = apply_binary(BinaryOperator::Add, &Value::from("x = "), &Value::from(4.0), 1);
/// assert_eq!(text.unwrap(), Value::from("x = 4"));
/// ```
pub fn apply_binary(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
        StrictEqual, StrictNotEqual, Sub,
    };

    match op {
        Add => add(left, right, line),
        Sub | Mul | Div | Mod => arithmetic(op, left, right, line),
        Less | Greater | LessEqual | GreaterEqual => compare(op, left, right, line),
        Equal | StrictEqual => Ok(Value::Bool(equals(left, right))),
        NotEqual | StrictNotEqual => Ok(Value::Bool(!equals(left, right))),
        And => Ok(if left.is_truthy() { right.clone() } else { left.clone() }),
        Or => Ok(if left.is_truthy() { left.clone() } else { right.clone() }),
    }
}
