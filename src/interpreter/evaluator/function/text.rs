use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::argument},
        value::core::Value,
    },
    util::num::clamp_position,
};

/// Applies a case conversion to the string argument of the builtin `name`.
///
/// Backs `vadda_kro` (uppercase) and `chhota_kro` (lowercase).
///
/// # Example
/// ```
/// use pindscript::interpreter::{evaluator::function::text::change_case, value::core::Value};
///
/// let loud = change_case("vadda_kro", &[Value::from("balle")], 1, str::to_uppercase);
/// assert_eq!(loud.unwrap(), Value::from("BALLE"));
/// ```
pub fn change_case(name: &str, args: &[Value], line: usize, convert: impl Fn(&str) -> String) -> EvalResult<Value> {
    match argument(args, 0) {
        Value::Str(text) => Ok(Value::from(convert(&*text))),
        other => Err(RuntimeError::TypeError { details: format!("{name} expects a String, found {}.",
                                                                other.type_name()),
                                               line }),
    }
}

/// Reads an optional position argument of `katt`.
///
/// Null or a missing argument means `default`.
fn position_argument(args: &[Value], position: usize, default: usize, len: usize, line: usize) -> EvalResult<usize> {
    match argument(args, position) {
        Value::Null => Ok(default),
        Value::Number(n) => Ok(clamp_position(n, len)),
        other => Err(RuntimeError::TypeError { details: format!("katt expects Number positions, found {}.",
                                                                other.type_name()),
                                               line }),
    }
}

/// `katt(s, start, end?)`: the characters of `s` from `start` up to, but not
/// including, `end`.
///
/// Positions are truncated and clamped to the string, and swapped when
/// `start` is after `end`. `end` defaults to the length.
///
/// # Example
/// ```
/// use pindscript::interpreter::{evaluator::function::text::katt, value::core::Value};
///
/// let word = Value::from("punjab");
/// assert_eq!(katt(&[word.clone(), Value::from(1.0), Value::from(3.0)], 1).unwrap(),
///            Value::from("un"));
/// assert_eq!(katt(&[word.clone(), Value::from(3.0)], 1).unwrap(), Value::from("jab"));
/// assert_eq!(katt(&[word, Value::from(3.0), Value::from(1.0)], 1).unwrap(), Value::from("un"));
/// ```
pub fn katt(args: &[Value], line: usize) -> EvalResult<Value> {
    let text = match argument(args, 0) {
        Value::Str(text) => text,
        other => {
            return Err(RuntimeError::TypeError { details: format!("katt expects a String, found {}.",
                                                                  other.type_name()),
                                                 line });
        },
    };
    let len = text.chars().count();

    let start = position_argument(args, 1, 0, len, line)?;
    let end = position_argument(args, 2, len, len, line)?;
    let (from, to) = if start > end { (end, start) } else { (start, end) };

    Ok(Value::from(text.chars().skip(from).take(to - from).collect::<String>()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn case_conversion_needs_string() {
        let err = change_case("chhota_kro", &[Value::from(1.0)], 3, str::to_lowercase).unwrap_err();

        assert_eq!(err,
                   RuntimeError::TypeError { details: "chhota_kro expects a String, found number.".to_string(),
                                             line:    3, });
    }

    #[test]
    fn substring_positions_are_clamped() {
        let word = Value::from("abc");

        assert_eq!(katt(&[word.clone(), Value::from(-2.0), Value::from(99.0)], 1).unwrap(),
                   Value::from("abc"));
        assert_eq!(katt(&[word.clone(), Value::from(1.9)], 1).unwrap(), Value::from("bc"));
        assert_eq!(katt(&[word.clone(), Value::Number(f64::NAN), Value::from(1.0)], 1).unwrap(),
                   Value::from("a"));
        assert_eq!(katt(&[word], 1).unwrap(), Value::from("abc"));
    }

    #[test]
    fn substring_counts_characters() {
        let word = Value::from("ਸਤ ਸ੍ਰੀ");

        assert_eq!(katt(&[word, Value::from(0.0), Value::from(2.0)], 1).unwrap(),
                   Value::from("ਸਤ"));
    }

    #[test]
    fn substring_rejects_bad_positions() {
        let err = katt(&[Value::from("abc"), Value::from("1")], 1).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::TypeError);
    }
}
