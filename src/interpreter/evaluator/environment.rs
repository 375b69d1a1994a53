use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The bindings of one scope and the scope it is nested in.
#[derive(Default)]
struct Frame {
    bindings: HashMap<String, Value>,
    parent:   Option<Scope>,
}

/// A shared handle to one lexical scope.
///
/// Cloning a `Scope` clones the handle. A scope stays alive while the
/// interpreter is executing in it, while a nested scope is alive, or while a
/// closure declared in it is reachable. Iteration, branch and call scopes that
/// no closure captured are freed as soon as they are left.
#[derive(Clone, Default)]
pub struct Scope(Rc<RefCell<Frame>>);

// A closure stored in the scope it captured refers back to that scope, so only
// the names are listed.
impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = self.0.borrow();
        let mut names = frame.bindings.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("Scope")
         .field("names", &names)
         .field("nested", &frame.parent.is_some())
         .finish()
    }
}

impl Scope {
    /// Creates an empty outermost scope.
    #[must_use]
    pub fn global() -> Self {
        Self::default()
    }

    /// Creates a new, empty scope nested in `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Self(Rc::new(RefCell::new(Frame { bindings: HashMap::new(),
                                          parent:   Some(self.clone()), })))
    }

    /// Returns `true` if both handles refer to the same scope.
    #[must_use]
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles to this scope.
    #[cfg(test)]
    pub(crate) fn handles(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Declares `name` in this scope.
    ///
    /// # Errors
    /// Returns [`RuntimeError::Duplicate`] if this scope itself already binds
    /// `name`. Bindings in enclosing scopes are shadowed, not rejected.
    pub fn declare(&self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        if self.contains_own(name) {
            return Err(RuntimeError::Duplicate { name: name.to_string(),
                                                 line });
        }
        self.bind(name, value);
        Ok(())
    }

    /// Binds `name` in this scope, replacing any existing binding here.
    pub fn bind(&self, name: &str, value: Value) {
        self.0.borrow_mut().bindings.insert(name.to_string(), value);
    }

    /// Returns `true` if this scope itself binds `name`.
    #[must_use]
    pub fn contains_own(&self, name: &str) -> bool {
        self.0.borrow().bindings.contains_key(name)
    }

    /// Reads `name`, searching from this scope outward.
    ///
    /// # Errors
    /// Returns [`RuntimeError::Undeclared`] if no enclosing scope binds `name`.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<Value> {
        let owner = self.resolve(name, line)?;
        let value = owner.0.borrow().bindings.get(name).cloned();
        value.ok_or_else(|| undeclared(name, line))
    }

    /// Overwrites `name` in the nearest scope, searching from this scope
    /// outward, that binds it.
    ///
    /// # Errors
    /// Returns [`RuntimeError::Undeclared`] if no enclosing scope binds `name`.
    pub fn assign(&self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        self.resolve(name, line)?.bind(name, value);
        Ok(())
    }

    /// Finds the nearest scope, starting at this one, that binds `name`.
    fn resolve(&self, name: &str, line: usize) -> EvalResult<Self> {
        let mut current = self.clone();

        loop {
            let parent = {
                let frame = current.0.borrow();
                if frame.bindings.contains_key(name) {
                    None
                } else {
                    Some(frame.parent.clone())
                }
            };

            match parent {
                None => return Ok(current),
                Some(Some(parent)) => current = parent,
                Some(None) => return Err(undeclared(name, line)),
            }
        }
    }
}

fn undeclared(name: &str, line: usize) -> RuntimeError {
    RuntimeError::Undeclared { name: name.to_string(),
                               line }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn lookup_walks_outward() {
        let global = Scope::global();
        global.declare("x", 1.0.into(), 1).unwrap();
        let inner = global.child();

        assert_eq!(inner.get("x", 2).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn duplicate_only_within_one_scope() {
        let global = Scope::global();
        global.declare("x", 1.0.into(), 1).unwrap();
        let inner = global.child();

        inner.declare("x", 2.0.into(), 2).unwrap();
        let err = inner.declare("x", 3.0.into(), 3).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Duplicate);
        assert_eq!(inner.get("x", 4).unwrap(), Value::Number(2.0));
        assert_eq!(global.get("x", 4).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn assign_updates_owner() {
        let global = Scope::global();
        global.declare("count", 0.0.into(), 1).unwrap();
        let inner = global.child();

        inner.assign("count", 5.0.into(), 2).unwrap();

        assert!(!inner.contains_own("count"));
        assert_eq!(global.get("count", 3).unwrap(), Value::Number(5.0));
    }

    #[test]
    fn missing_names_are_undeclared() {
        let inner = Scope::global().child();

        assert_eq!(inner.get("ghost", 7).unwrap_err(),
                   RuntimeError::Undeclared { name: "ghost".to_string(),
                                              line: 7, });
        assert_eq!(inner.assign("ghost", Value::Null, 8).unwrap_err().kind(),
                   ErrorKind::Undeclared);
    }

    #[test]
    fn sibling_scopes_are_isolated() {
        let global = Scope::global();
        let first = global.child();
        let second = global.child();
        first.declare("y", 1.0.into(), 1).unwrap();

        assert!(second.get("y", 2).is_err());
        assert!(!first.same(&second));
    }

    #[test]
    fn debug_lists_sorted_names() {
        let global = Scope::global();
        global.bind("b", Value::Null);
        global.bind("a", Value::from(vec![Value::Null]));

        assert_eq!(format!("{global:?}"), r#"Scope { names: ["a", "b"], nested: false }"#);
    }

    #[test]
    fn left_scopes_are_freed() {
        let global = Scope::global();
        let inner = global.child();
        let weak = Rc::downgrade(&inner.0);

        drop(inner);

        assert!(weak.upgrade().is_none());
        assert_eq!(global.handles(), 1);
    }
}
