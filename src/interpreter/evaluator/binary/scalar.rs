use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates `+`.
///
/// Two numbers add. If either side is a string, both sides are rendered the
/// way `vikha` prints them and joined. Any other pair is a type error.
///
/// # Example
/// ```
/// use pindscript::interpreter::{evaluator::binary::scalar::add, value::core::Value};
///
/// let joined = add(&Value::from("list: "), &Value::from(vec![Value::from(1.0)]), 1).unwrap();
/// assert_eq!(joined, Value::from("list: 1"));
/// ```
pub fn add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(_), _) | (_, Value::Str(_)) => Ok(Value::from(format!("{left}{right}"))),
        _ => Err(RuntimeError::TypeError { details: format!("Cannot add {} and {}.",
                                                            left.type_name(),
                                                            right.type_name()),
                                           line }),
    }
}

/// Evaluates `-`, `*`, `/` and `%` on two numbers.
///
/// Division and remainder by zero are math errors rather than `Infinity` or
/// `NaN`.
pub fn arithmetic(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let (Some(a), Some(b)) = (left.as_number(), right.as_number())
    else {
        return Err(RuntimeError::TypeError { details: format!("Operator '{op}' expects numbers, found {} and {}.",
                                                              left.type_name(),
                                                              right.type_name()),
                                             line });
    };

    match op {
        BinaryOperator::Div | BinaryOperator::Mod if b == 0.0 => {
            Err(RuntimeError::MathError { details: "Divide by Zero is impossible.".to_string(),
                                          line })
        },
        BinaryOperator::Sub => Ok(Value::Number(a - b)),
        BinaryOperator::Mul => Ok(Value::Number(a * b)),
        BinaryOperator::Div => Ok(Value::Number(a / b)),
        BinaryOperator::Mod => Ok(Value::Number(a % b)),
        _ => Err(RuntimeError::Generic { details: format!("'{op}' is not an arithmetic operator."),
                                         line }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn remainder_keeps_sign_of_dividend() {
        let result = arithmetic(BinaryOperator::Mod, &Value::from(-7.0), &Value::from(3.0), 1);

        assert_eq!(result.unwrap(), Value::from(-1.0));
    }

    #[test]
    fn division_by_zero_is_math_error() {
        for op in [BinaryOperator::Div, BinaryOperator::Mod] {
            let err = arithmetic(op, &Value::from(1.0), &Value::from(0.0), 4).unwrap_err();

            assert_eq!(err,
                       RuntimeError::MathError { details: "Divide by Zero is impossible.".to_string(),
                                                 line:    4, });
        }
    }

    #[test]
    fn arithmetic_needs_numbers() {
        let err = arithmetic(BinaryOperator::Sub, &Value::from("5"), &Value::from(1.0), 2).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::TypeError);
    }

    #[test]
    fn concatenation_renders_both_sides() {
        assert_eq!(add(&Value::from(1.5), &Value::from("x"), 1).unwrap(),
                   Value::from("1.5x"));
        assert_eq!(add(&Value::Bool(true), &Value::from("!"), 1).unwrap(),
                   Value::from("true!"));
        assert_eq!(add(&Value::Null, &Value::from(""), 1).unwrap(), Value::from("null"));
    }

    #[test]
    fn adding_booleans_is_type_error() {
        let err = add(&Value::Bool(true), &Value::from(1.0), 3).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::TypeError);
    }
}
