use std::{cell::RefCell, rc::Rc};

use crate::{ast::LiteralValue, interpreter::value::function::Function};

/// Shared, mutable array storage.
///
/// Cloning a `Value::Array` clones the handle, not the elements, so every
/// alias observes mutations made through any other.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and by `!`.
    Bool(bool),
    /// An ordered, mutable array with reference semantics.
    Array(ArrayRef),
    /// A builtin or user-defined function.
    Function(Function),
    /// The absence of a value.
    Null,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v.into())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(Rc::clone(s)),
        }
    }
}

impl Value {
    /// Returns whether the value counts as true in a condition.
    ///
    /// `null`, `false`, `0`, `NaN` and the empty string are falsy. Everything
    /// else, including empty arrays, is truthy.
    ///
    /// # Example
    /// ```
    /// use pindscript::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::from(Vec::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Array(_) | Self::Function(_) => true,
            Self::Null => false,
        }
    }

    /// The name of the value's kind, used in error details.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Array(_) => "array",
            Self::Function(_) => "function",
            Self::Null => "null",
        }
    }

    /// Returns the number inside `self`, if it is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string inside `self`, if it is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array handle inside `self`, if it is one.
    #[must_use]
    pub const fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Appends the canonical text of `self` to `out`.
    ///
    /// `visiting` holds the arrays currently being rendered; an array that
    /// contains itself renders the inner occurrence as empty text.
    fn render_into(&self, out: &mut String, visiting: &mut Vec<*const RefCell<Vec<Self>>>) {
        match self {
            Self::Number(n) => out.push_str(&format_number(*n)),
            Self::Str(s) => out.push_str(s),
            Self::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Self::Null => out.push_str("null"),
            Self::Function(function) => out.push_str(&function.to_string()),
            Self::Array(array) => {
                let pointer = Rc::as_ptr(array);
                if visiting.contains(&pointer) {
                    return;
                }
                visiting.push(pointer);

                for (index, element) in array.borrow().iter().enumerate() {
                    if index > 0 {
                        out.push(',');
                    }
                    if !matches!(element, Self::Null) {
                        element.render_into(out, visiting);
                    }
                }

                visiting.pop();
            },
        }
    }
}

/// Formats a number the way it is printed.
///
/// Integral values print without a fractional part, very large and very small
/// magnitudes use exponent notation with an explicit sign, and the non-finite
/// values print as `Infinity`, `-Infinity` and `NaN`.
///
/// # Example
/// ```
/// use pindscript::interpreter::value::core::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers negative zero.
        return "0".to_string();
    }

    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            },
            _ => formatted,
        };
    }

    format!("{n}")
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::new();
        self.render_into(&mut out, &mut Vec::new());
        write!(f, "{out}")
    }
}

/// Language equality, shared by `==`, `===` and the runtime library.
///
/// Values of different kinds are never equal. Numbers follow IEEE rules, so
/// `NaN` is unequal to itself. Arrays and functions compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => a == b,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_numbers() {
        assert_eq!(format_number(120.0), "120");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(123_456_789_012_345_680_000.0),
                   "123456789012345680000");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn renders_arrays() {
        let nested = Value::from(vec![Value::from(2.0), Value::from("b")]);
        let array = Value::from(vec![Value::from(1.0), Value::Null, nested, Value::Bool(true)]);

        assert_eq!(array.to_string(), "1,,2,b,true");
    }

    #[test]
    fn self_referencing_array_terminates() {
        let array = Value::from(vec![Value::from(1.0)]);
        if let Value::Array(handle) = &array {
            handle.borrow_mut().push(array.clone());
        }

        assert_eq!(array.to_string(), "1,");
    }

    #[test]
    fn equality_by_kind() {
        assert_eq!(Value::from(1.0), Value::from(1.0));
        assert_ne!(Value::from(1.0), Value::from("1"));
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_eq!(Value::Null, Value::Null);
    }

    #[test]
    fn arrays_compare_by_identity() {
        let first = Value::from(vec![Value::from(1.0)]);
        let alias = first.clone();
        let copy = Value::from(vec![Value::from(1.0)]);

        assert_eq!(first, alias);
        assert_ne!(first, copy);
    }
}
