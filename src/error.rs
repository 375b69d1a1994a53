/// Lexing errors.
///
/// Raised when the source contains a character the language does not know
/// or a string literal that never closes.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree.
/// Parsing stops at the first unexpected token; no partial tree is produced.
pub mod parse_error;
/// Human-facing wording for runtime errors.
///
/// Every runtime error category has a table of phrasings. A [`Phrasebook`]
/// decides which one a user sees; tests use the fixed variant so that output
/// is reproducible.
pub mod phrasebook;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// execution, their categories and the failure record returned when a run
/// aborts.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use phrasebook::{FixedPhrasebook, Phrasebook, RandomPhrasebook};
pub use runtime_error::{ErrorKind, RunFailure, RuntimeError};

/// Any error produced by the tokenize, parse and run pipeline.
#[derive(Debug)]
pub enum Error {
    /// The source could not be tokenized.
    Lex(LexError),
    /// The tokens did not form a valid program.
    Parse(ParseError),
    /// The program failed while running.
    Runtime(RunFailure),
}

impl Error {
    /// Returns the runtime category, if this is a runtime failure.
    #[must_use]
    pub const fn runtime_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Runtime(failure) => Some(failure.error.kind()),
            Self::Lex(_) | Self::Parse(_) => None,
        }
    }

    /// Returns the lines printed before the failure.
    ///
    /// Lex and parse errors happen before anything runs, so they never carry
    /// output.
    #[must_use]
    pub fn output(&self) -> &[String] {
        match self {
            Self::Runtime(failure) => &failure.output,
            Self::Lex(_) | Self::Parse(_) => &[],
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RunFailure> for Error {
    fn from(failure: RunFailure) -> Self {
        Self::Runtime(failure)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => write!(f, "{error}"),
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(failure) => write!(f, "{failure}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(error) => Some(error),
            Self::Parse(error) => Some(error),
            Self::Runtime(failure) => Some(failure),
        }
    }
}
