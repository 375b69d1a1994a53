use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{argument, array_argument},
        },
        value::core::Value,
    },
    util::num::usize_to_f64,
};

/// `lambai(x)`: the number of elements of an array or characters of a string.
///
/// # Example
/// ```
/// use pindscript::interpreter::{evaluator::function::builtin::lambai, value::core::Value};
///
/// assert_eq!(lambai(&[Value::from("ਪਿੰਡ")], 1).unwrap(), Value::from(4.0));
/// assert!(lambai(&[Value::from(3.0)], 1).is_err());
/// ```
pub fn lambai(args: &[Value], line: usize) -> EvalResult<Value> {
    let subject = argument(args, 0);

    match &subject {
        Value::Array(array) => Ok(Value::Number(usize_to_f64(array.borrow().len()))),
        Value::Str(text) => Ok(Value::Number(usize_to_f64(text.chars().count()))),
        other => Err(RuntimeError::TypeError { details: format!("lambai expects an Array or a String, found {}.",
                                                                other.type_name()),
                                               line }),
    }
}

/// `thuss(a, v)`: appends `v` and returns the new length.
pub fn thuss(args: &[Value], line: usize) -> EvalResult<Value> {
    let array = array_argument("thuss", args, line)?;
    let mut elements = array.borrow_mut();
    elements.push(argument(args, 1));
    Ok(Value::Number(usize_to_f64(elements.len())))
}

/// `kaddh(a)`: removes and returns the last element, or null when empty.
pub fn kaddh(args: &[Value], line: usize) -> EvalResult<Value> {
    let array = array_argument("kaddh", args, line)?;
    let last = array.borrow_mut().pop();
    Ok(last.unwrap_or(Value::Null))
}

/// `agge_ho(a)`: removes and returns the first element, or null when empty.
pub fn agge_ho(args: &[Value], line: usize) -> EvalResult<Value> {
    let array = array_argument("agge_ho", args, line)?;
    let mut elements = array.borrow_mut();
    if elements.is_empty() {
        return Ok(Value::Null);
    }
    Ok(elements.remove(0))
}

/// `palt(a)`: reverses the array in place and returns it.
pub fn palt(args: &[Value], line: usize) -> EvalResult<Value> {
    let array = array_argument("palt", args, line)?;
    array.borrow_mut().reverse();
    Ok(Value::Array(array))
}

/// `labho(x, term)`: the position of `term` in `x`, or `-1`.
///
/// In a string, `term` must be a string and the result is the character
/// position of its first occurrence. In an array, the result is the position
/// of the first element equal to `term`.
///
/// # Example
/// ```
/// use pindscript::interpreter::{evaluator::function::builtin::labho, value::core::Value};
///
/// let found = labho(&[Value::from("sat sri akal"), Value::from("sri")], 1).unwrap();
/// assert_eq!(found, Value::from(4.0));
///
/// let list = Value::from(vec![Value::from(1.0), Value::from(2.0)]);
/// assert_eq!(labho(&[list, Value::from(5.0)], 1).unwrap(), Value::from(-1.0));
/// ```
pub fn labho(args: &[Value], line: usize) -> EvalResult<Value> {
    let subject = argument(args, 0);
    let term = argument(args, 1);

    let position = match &subject {
        Value::Array(array) => array.borrow().iter().position(|element| *element == term),
        Value::Str(haystack) => {
            let Some(needle) = term.as_str()
            else {
                return Err(RuntimeError::TypeError { details: format!("labho on a String expects a String to find, found {}.",
                                                                      term.type_name()),
                                                     line });
            };
            haystack.find(needle)
                    .map(|byte| haystack[..byte].chars().count())
        },
        other => {
            return Err(RuntimeError::TypeError { details: format!("labho expects an Array or a String, found {}.",
                                                                  other.type_name()),
                                                 line });
        },
    };

    Ok(Value::Number(position.map_or(-1.0, usize_to_f64)))
}
