use tracing::{debug, trace, warn};

use crate::{
    ast::{Expr, Program, Statement},
    error::{Phrasebook, RandomPhrasebook, RunFailure, RuntimeError},
    interpreter::{
        evaluator::{
            environment::Scope,
            function::core::BUILTIN_TABLE,
        },
        value::{core::Value, function::Function},
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default ceiling on executed steps.
pub const MAX_STEPS: usize = 5000;

/// The line appended after all program output when a run completes.
pub const SUCCESS_LINE: &str = "\n✨ Balle! Code chal gya.";

/// Interpreter settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of steps a run may take before it fails with `TIMEOUT`.
    pub max_steps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_steps: MAX_STEPS }
    }
}

/// State owned by a single run: the step and scope counters and the output
/// buffer.
#[derive(Debug, Default)]
pub struct ExecutionContext {
    /// Steps taken so far.
    pub steps:  usize,
    /// Scopes created so far, the global scope excluded.
    pub scopes: usize,
    /// Lines printed so far.
    pub output: Vec<String>,
}

/// How a statement finished.
///
/// Anything other than `Normal` unwinds enclosing statements until a loop
/// (for `Break` and `Continue`) or a function call (for `Return`) handles it.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Fell through to the next statement.
    Normal,
    /// `bhajo` with its value.
    Return(Value),
    /// `chaddo`
    Break {
        /// Line of the `chaddo` statement.
        line: usize,
    },
    /// `langh_jaa`
    Continue {
        /// Line of the `langh_jaa` statement.
        line: usize,
    },
}

/// A tree-walking interpreter for one program run.
///
/// ## Usage
///
/// An `Interpreter` is configured, then consumed by [`Interpreter::run`]. Each
/// run therefore starts from a fresh global scope, step counter and output
/// buffer.
///
/// ## Example
/// ```
/// use pindscript::{
///     error::FixedPhrasebook,
///     interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::parse},
/// };
///
/// let tokens = tokenize("vikha(lambai([1, 2, 3]));").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// let output = Interpreter::new().with_phrasebook(Box::new(FixedPhrasebook))
///                                .run(&program)
///                                .unwrap();
/// assert_eq!(output[0], "3");
/// ```
pub struct Interpreter {
    config:           Config,
    phrasebook:       Box<dyn Phrasebook>,
    /// The scope statements currently execute in.
    pub(crate) scope: Scope,
    pub(crate) meta:  ExecutionContext,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter with the default step ceiling and randomly
    /// chosen error phrases.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an interpreter with the given settings.
    ///
    /// The global scope is populated with `true`, `false` and the runtime
    /// library.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let global = Scope::global();
        global.bind("true", Value::Bool(true));
        global.bind("false", Value::Bool(false));
        for builtin in BUILTIN_TABLE {
            global.bind(builtin.name, Value::Function(Function::Builtin(builtin)));
        }

        Self { config,
               phrasebook: Box::new(RandomPhrasebook::new()),
               scope: global,
               meta: ExecutionContext::default() }
    }

    /// Replaces the phrasebook used to word runtime errors.
    #[must_use]
    pub fn with_phrasebook(mut self, phrasebook: Box<dyn Phrasebook>) -> Self {
        self.phrasebook = phrasebook;
        self
    }

    /// Executes `program` and returns its printed lines.
    ///
    /// On normal completion the success line is appended. A `bhajo` at top
    /// level stops the run early and the output is returned as is.
    ///
    /// # Errors
    /// Returns a [`RunFailure`] carrying the runtime error, its worded message
    /// and the lines printed before the failure.
    pub fn run(mut self, program: &Program) -> Result<Vec<String>, RunFailure> {
        let result = match self.execute_statements(&program.body) {
            Ok(Flow::Normal) => {
                self.meta.output.push(SUCCESS_LINE.to_string());
                Ok(())
            },
            Ok(Flow::Return(_)) => Ok(()),
            Ok(Flow::Break { line } | Flow::Continue { line }) => Err(loop_control_outside_loop(line)),
            Err(error) => Err(error),
        };

        debug!(steps = self.meta.steps,
               scopes = self.meta.scopes,
               lines = self.meta.output.len(),
               "run finished");

        match result {
            Ok(()) => Ok(self.meta.output),
            Err(error) => {
                warn!(kind = %error.kind(), line = error.line(), "run aborted");
                let phrase = self.phrasebook.phrase(error.kind(), error.subject());
                Err(RunFailure { message: error.render(&phrase),
                                 error,
                                 output: self.meta.output })
            },
        }
    }

    /// Counts one step.
    ///
    /// # Errors
    /// Returns [`RuntimeError::Timeout`] once the step count exceeds the
    /// configured ceiling.
    pub fn tick(&mut self, line: usize) -> EvalResult<()> {
        self.meta.steps += 1;
        if self.meta.steps > self.config.max_steps {
            return Err(RuntimeError::Timeout { limit: self.config.max_steps,
                                               line });
        }
        Ok(())
    }

    /// Creates a scope nested in `parent`.
    pub(crate) fn child_scope(&mut self, parent: &Scope) -> Scope {
        self.meta.scopes += 1;
        trace!(created = self.meta.scopes, "new scope");
        parent.child()
    }

    /// Creates a scope nested in the current one.
    pub(crate) fn nested_scope(&mut self) -> Scope {
        let parent = self.scope.clone();
        self.child_scope(&parent)
    }

    /// Runs `f` with `scope` as the current scope, restoring the previous one
    /// afterwards whether or not `f` fails. The scope is dropped on return
    /// unless a closure or a nested scope still holds it.
    pub(crate) fn in_scope<T>(&mut self,
                              scope: Scope,
                              f: impl FnOnce(&mut Self) -> EvalResult<T>)
                              -> EvalResult<T> {
        let saved = std::mem::replace(&mut self.scope, scope);
        let result = f(self);
        self.scope = saved;
        result
    }

    /// Executes statements in order in the current scope, stopping at the
    /// first one that does not complete normally.
    pub fn execute_statements(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            let flow = self.execute(statement)?;
            if flow != Flow::Normal {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; operators, calls and index
    /// access live in their own modules.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Identifier { name, line } => self.scope.get(name, *line),
            Expr::ArrayLiteral { elements, .. } => {
                let values = elements.iter()
                                     .map(|element| self.evaluate(element))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(values))
            },
            Expr::Member { object, index, line } => {
                let object = self.evaluate(object)?;
                let index = self.evaluate(index)?;
                super::utils::read_index(&object, &index, *line)
            },
            Expr::MemberAssignment { object,
                                     index,
                                     operator,
                                     value,
                                     line, } => {
                self.eval_member_assignment(object, index, *operator, value, *line)
            },
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line),
            Expr::Unary { op, expr, line } => self.eval_unary(*op, expr, *line),
            Expr::Update { op,
                           target,
                           prefix,
                           line, } => self.eval_update(*op, target, *prefix, *line),
            Expr::Binary { left, op, right, line } => self.eval_binary(left, *op, right, *line),
            Expr::Assignment { name,
                               operator,
                               value,
                               line, } => self.eval_assignment(name, *operator, value, *line),
        })
    }
}

/// The error for a `chaddo` or `langh_jaa` that no loop caught.
pub(crate) fn loop_control_outside_loop(line: usize) -> RuntimeError {
    RuntimeError::Generic { details: "'chaddo' and 'langh_jaa' only work inside a loop.".to_string(),
                            line }
}
