/// The evaluator module executes a parsed program.
///
/// The evaluator walks the AST, manages lexical scopes, applies operators,
/// calls user closures and the runtime library, and enforces the step
/// ceiling. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Executes statements and evaluates expressions in reference-counted, parent-linked scopes.
/// - Propagates `moda`, `chaddo` and `langh_jaa` as control flow.
/// - Reports runtime errors such as undeclared names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a number, string, keyword, identifier, operator or
/// delimiter, tagged with its line and column.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Skips whitespace and both comment forms.
/// - Reports unknown characters and unterminated strings.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one function per precedence
/// level for expressions and one per keyword for statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting the offending token and its line.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are numbers, strings, booleans, shared mutable arrays, functions and
/// null. The module also defines truthiness, language equality and the text
/// form used when printing.
pub mod value;
