//! # pindscript
//!
//! pindscript is an interpreter for PindScript, a small imperative scripting
//! language with Punjabi keywords. Source text is tokenized, parsed into an
//! abstract syntax tree and executed by a tree-walking evaluator that collects
//! printed output and guards against runaway programs with a step ceiling.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression trees produced by the
/// parser and walked by the evaluator. Every node records the source line it
/// started on so that runtime errors can point back at the program.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Each phase has its own error enum. Runtime errors are grouped into the
/// categories reported to users (`UNDECLARED`, `DUPLICATE`, `TYPE_ERROR`,
/// `MATH_ERROR`, `FUNCTION_ERROR`, `TIMEOUT`, `GENERIC`), and the human-facing
/// wording for each category comes from a pluggable phrasebook.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Keeps the technical explanation of each category fixed so that callers
///   can match on it.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the runtime value
/// model.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for each phase.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion and stack safety.
pub mod util;

/// Runs a PindScript program and returns its printed output.
///
/// The source is tokenized, parsed and executed with a fresh interpreter. On
/// success the returned lines are everything the program printed followed by
/// the success line.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. A runtime failure
/// still carries the lines printed before the error occurred.
///
/// # Examples
/// ```
/// use pindscript::{interpreter::evaluator::core::SUCCESS_LINE, run_source};
///
/// let output = run_source("mannle x = 5; vikha(x + 2);").unwrap();
/// assert_eq!(output, vec!["7".to_string(), SUCCESS_LINE.to_string()]);
///
/// // Reading a variable that was never declared fails.
/// assert!(run_source("vikha(y);").is_err());
/// ```
pub fn run_source(source: &str) -> Result<Vec<String>, Error> {
    run_source_with(source, Interpreter::new())
}

/// Runs a PindScript program on a caller-configured interpreter.
///
/// This is the same pipeline as [`run_source`], but the caller chooses the
/// step ceiling and the phrasebook used to word runtime errors.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use pindscript::{
///     error::{ErrorKind, FixedPhrasebook},
///     interpreter::evaluator::core::{Config, Interpreter},
///     run_source_with,
/// };
///
/// let interpreter = Interpreter::with_config(Config { max_steps: 10 })
///     .with_phrasebook(Box::new(FixedPhrasebook));
///
/// let err = run_source_with("jado (true) {}", interpreter).unwrap_err();
/// assert_eq!(err.runtime_kind(), Some(ErrorKind::Timeout));
/// ```
pub fn run_source_with(source: &str, interpreter: Interpreter) -> Result<Vec<String>, Error> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;

    Ok(interpreter.run(&program)?)
}
