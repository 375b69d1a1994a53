use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{ArrayRef, Value},
    },
    util::num::f64_to_index,
};

/// Returns the argument at `position`, or null when the caller passed fewer.
#[must_use]
pub fn argument(args: &[Value], position: usize) -> Value {
    args.get(position).cloned().unwrap_or(Value::Null)
}

/// Returns the array handle of the first argument of the builtin `name`.
///
/// # Errors
/// Returns `TYPE_ERROR` if the first argument is not an array.
pub fn array_argument(name: &str, args: &[Value], line: usize) -> EvalResult<ArrayRef> {
    match args.first() {
        Some(Value::Array(array)) => Ok(ArrayRef::clone(array)),
        other => Err(RuntimeError::TypeError { details: format!("{name} expects Array as first argument, found {}.",
                                                                other.map_or("nothing", Value::type_name)),
                                               line }),
    }
}

/// Converts an index value to a position.
fn position(index: &Value, line: usize) -> EvalResult<usize> {
    index.as_number()
         .and_then(f64_to_index)
         .ok_or_else(|| RuntimeError::TypeError { details: format!("Index must be a non-negative whole number, found {index}."),
                                                  line })
}

/// Reads `object[index]`.
///
/// Arrays yield the element, strings a one-character string. Reading past the
/// end yields null.
///
/// # Errors
/// Returns `TYPE_ERROR` if `object` is neither an array nor a string, or if
/// `index` is not a non-negative whole number.
///
/// # Example
/// ```
/// use pindscript::interpreter::{evaluator::utils::read_index, value::core::Value};
///
/// let word = Value::from("pind");
/// assert_eq!(read_index(&word, &Value::from(1.0), 1).unwrap(), Value::from("i"));
/// assert_eq!(read_index(&word, &Value::from(9.0), 1).unwrap(), Value::Null);
/// ```
pub fn read_index(object: &Value, index: &Value, line: usize) -> EvalResult<Value> {
    match object {
        Value::Array(array) => {
            let position = position(index, line)?;
            Ok(array.borrow().get(position).cloned().unwrap_or(Value::Null))
        },
        Value::Str(text) => {
            let position = position(index, line)?;
            Ok(text.chars()
                   .nth(position)
                   .map_or(Value::Null, |c| Value::from(c.to_string())))
        },
        _ => Err(RuntimeError::TypeError { details: "Cannot index this type. Only Arrays and Strings allow []."
                                                        .to_string(),
                                           line }),
    }
}

/// Writes `object[index] = value`.
///
/// Writing at the current length appends.
///
/// # Errors
/// Returns `TYPE_ERROR` if `object` is not an array, if `index` is not a
/// non-negative whole number, or if it lies past the end of the array.
pub fn write_index(object: &Value, index: &Value, value: Value, line: usize) -> EvalResult<()> {
    let Value::Array(array) = object
    else {
        return Err(RuntimeError::TypeError { details: "Cannot assign index to non-Array.".to_string(),
                                             line });
    };
    let position = position(index, line)?;
    let mut elements = array.borrow_mut();
    let len = elements.len();

    match position.cmp(&len) {
        std::cmp::Ordering::Less => elements[position] = value,
        std::cmp::Ordering::Equal => elements.push(value),
        std::cmp::Ordering::Greater => {
            return Err(RuntimeError::TypeError { details: format!("Index {position} is past the end of an array of length {len}."),
                                                 line });
        },
    }
    Ok(())
}
