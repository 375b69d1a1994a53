/// Core evaluation logic and interpreter state.
///
/// Contains the [`Interpreter`](core::Interpreter), its configuration, the
/// step counter, control-flow signals and the expression dispatcher.
pub mod core;

/// Lexical scopes.
///
/// Shared scope handles linked to their parents, with declaration, lookup and
/// assignment.
pub mod environment;

/// Statement execution.
///
/// Declarations, `vikha`, `je`/`hor_je`/`fer` chains, blocks and
/// expression statements.
pub mod statement;

/// Loop execution.
///
/// `jado`, `eh_kro ... jado` and `jadd_vi` loops with `chaddo` and `langh_jaa`.
pub mod loops;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, concatenation, comparisons and the short-circuiting
/// logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation, unary plus, logical NOT and the `++`/`--` updates.
pub mod unary;

/// Assignment to names and to array elements, plain and compound.
pub mod assignment;

/// Function evaluation.
///
/// Handles calls to user closures and to the runtime library.
pub mod function;

/// Utility functions for evaluation.
///
/// Provides index access and argument helpers shared by evaluation logic.
pub mod utils;
