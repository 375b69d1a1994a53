use std::rc::Rc;

use crate::{
    ast::FunctionDef,
    interpreter::evaluator::{environment::Scope, function::core::BuiltinDef},
};

/// A callable value.
#[derive(Debug, Clone)]
pub enum Function {
    /// A host function from the runtime library.
    Builtin(&'static BuiltinDef),
    /// A user function together with the scope it was declared in.
    Closure(Rc<Closure>),
}

/// A user-defined function bound to its defining scope.
///
/// Calls run in a fresh child of `scope`, never of the caller's scope, so free
/// variables resolve where the function was written.
#[derive(Debug)]
pub struct Closure {
    /// The shared declaration.
    pub def:   Rc<FunctionDef>,
    /// The scope that was active when the declaration executed.
    pub scope: Scope,
}

impl Function {
    /// The declared or builtin name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(builtin) => builtin.name,
            Self::Closure(closure) => &closure.def.name,
        }
    }
}

/// Functions are equal only to themselves.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            (Self::Closure(a), Self::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name),
            Self::Closure(closure) => write!(f, "<kamm {}>", closure.def.name),
        }
    }
}
