use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Flow, Interpreter, loop_control_outside_loop},
            function::{builtin, text},
        },
        value::{
            core::Value,
            function::{Closure, Function},
        },
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number.
/// Missing arguments are simply absent from the slice.
pub type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name and a function pointer implementing the
/// builtin.
///
/// The macro produces:
/// - `BuiltinDef` (the metadata held by a builtin function value),
/// - `BUILTIN_TABLE` (static table installed into the global scope),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A host function from the runtime library.
        #[derive(Debug)]
        pub struct BuiltinDef {
            /// The global name the builtin is bound to.
            pub name: &'static str,
            /// The implementation.
            pub func: BuiltinFn,
        }
        /// Every builtin, in registration order.
        pub static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of all builtins.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "lambai"     => { func: builtin::lambai },
    "thuss"      => { func: builtin::thuss },
    "kaddh"      => { func: builtin::kaddh },
    "agge_ho"    => { func: builtin::agge_ho },
    "palt"       => { func: builtin::palt },
    "labho"      => { func: builtin::labho },
    "vadda_kro"  => { func: |args, line| text::change_case("vadda_kro", args, line, str::to_uppercase) },
    "chhota_kro" => { func: |args, line| text::change_case("chhota_kro", args, line, str::to_lowercase) },
    "katt"       => { func: text::katt },
}

impl Interpreter {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments from left to right,
    /// and only then is the callee checked for being callable.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result, or `FUNCTION_ERROR` if the callee is not a
    /// function.
    pub(crate) fn eval_call(&mut self, callee: &Expr, arguments: &[Expr], line: usize) -> EvalResult<Value> {
        let callee = self.evaluate(callee)?;
        let args = arguments.iter()
                            .map(|argument| self.evaluate(argument))
                            .collect::<EvalResult<Vec<_>>>()?;

        match callee {
            Value::Function(Function::Builtin(builtin)) => {
                trace!(function = builtin.name, arguments = args.len(), "calling builtin");
                (builtin.func)(&args, line)
            },
            Value::Function(Function::Closure(closure)) => self.call_closure(&closure, args),
            other => Err(RuntimeError::NotCallable { details: format!("Type '{}' is not callable.",
                                                                      other.type_name()),
                                                     line }),
        }
    }

    /// Invokes a user function.
    ///
    /// Parameters are bound positionally in a new scope nested in the scope
    /// the function was declared in, never the caller's. Missing arguments
    /// bind to null and extra arguments are ignored. The body's statements
    /// run directly in that scope.
    fn call_closure(&mut self, closure: &Closure, args: Vec<Value>) -> EvalResult<Value> {
        trace!(function = %closure.def.name, arguments = args.len(), "calling function");

        let scope = self.child_scope(&closure.scope);
        let mut args = args.into_iter();
        for param in &closure.def.params {
            scope.bind(param, args.next().unwrap_or(Value::Null));
        }

        match self.in_scope(scope, |this| this.execute_statements(&closure.def.body.statements))? {
            Flow::Normal => Ok(Value::Null),
            Flow::Return(value) => Ok(value),
            Flow::Break { line } | Flow::Continue { line } => Err(loop_control_outside_loop(line)),
        }
    }
}
