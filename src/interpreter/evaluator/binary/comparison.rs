use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Language equality, used by `==`, `===`, `!=` and `!==`.
///
/// Values of different kinds are never equal, so loose and strict equality
/// coincide.
#[must_use]
pub fn equals(left: &Value, right: &Value) -> bool {
    left == right
}

/// Evaluates `<`, `>`, `<=` and `>=`.
///
/// Numbers compare numerically and strings compare lexicographically. Mixed
/// or other kinds are a type error.
///
/// # Example
/// ```
/// use pindscript::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::compare, value::core::Value},
/// };
///
/// let less = compare(BinaryOperator::Less, &Value::from("apple"), &Value::from("banana"), 1);
/// assert_eq!(less.unwrap(), Value::Bool(true));
/// ```
pub fn compare(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => {
            return Err(RuntimeError::TypeError { details: format!("Cannot compare {} with {}.",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line });
        },
    };

    // NaN is unordered, which makes every comparison false.
    let result = ordering.is_some_and(|ordering| match op {
                                          BinaryOperator::Less => ordering.is_lt(),
                                          BinaryOperator::Greater => ordering.is_gt(),
                                          BinaryOperator::LessEqual => ordering.is_le(),
                                          BinaryOperator::GreaterEqual => ordering.is_ge(),
                                          _ => false,
                                      });

    Ok(Value::Bool(result))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(compare(BinaryOperator::LessEqual, &Value::from(2.0), &Value::from(2.0), 1).unwrap(),
                   Value::Bool(true));
        assert_eq!(compare(BinaryOperator::Greater, &Value::from(10.0), &Value::from(9.0), 1).unwrap(),
                   Value::Bool(true));
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Value::Number(f64::NAN);

        assert_eq!(compare(BinaryOperator::GreaterEqual, &nan, &nan, 1).unwrap(),
                   Value::Bool(false));
    }

    #[test]
    fn mixed_kinds_do_not_compare() {
        let err = compare(BinaryOperator::Less, &Value::from(1.0), &Value::from("2"), 5).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::TypeError);
        assert_eq!(err.line(), 5);
    }

    #[test]
    fn equality_never_coerces() {
        assert!(!equals(&Value::from(1.0), &Value::from("1")));
        assert!(!equals(&Value::Null, &Value::Bool(false)));
        assert!(equals(&Value::from("ab"), &Value::from("ab")));
    }
}
