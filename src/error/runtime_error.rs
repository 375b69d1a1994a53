#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Read or wrote a name that no enclosing scope declares.
    Undeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a name the current scope already owns.
    Duplicate {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Division or remainder by zero.
    MathError {
        /// Details about the failed operation.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Called a value that is not a function.
    NotCallable {
        /// Details about the value that was called.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The step ceiling was exceeded.
    Timeout {
        /// The ceiling that was in effect.
        limit: usize,
        /// The line of the statement that crossed the ceiling.
        line:  usize,
    },
    /// Any other runtime failure, such as `chaddo` outside of a loop.
    Generic {
        /// Details about what went wrong.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

/// The category of a runtime error as reported to users.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `UNDECLARED`
    Undeclared,
    /// `DUPLICATE`
    Duplicate,
    /// `TYPE_ERROR`
    TypeError,
    /// `MATH_ERROR`
    MathError,
    /// `FUNCTION_ERROR`
    FunctionError,
    /// `TIMEOUT`
    Timeout,
    /// `GENERIC`
    Generic,
}

impl ErrorKind {
    /// The category tag, e.g. `"TYPE_ERROR"`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Undeclared => "UNDECLARED",
            Self::Duplicate => "DUPLICATE",
            Self::TypeError => "TYPE_ERROR",
            Self::MathError => "MATH_ERROR",
            Self::FunctionError => "FUNCTION_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::Generic => "GENERIC",
        }
    }

    /// The fixed technical explanation for this category.
    ///
    /// Unlike the phrase chosen by a [`Phrasebook`](super::Phrasebook), this
    /// string never varies.
    ///
    /// ## Example
    /// ```
    /// use pindscript::error::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::MathError.explanation(),
    ///            "Division by Zero or Invalid Math Operation.");
    /// ```
    #[must_use]
    pub const fn explanation(self) -> &'static str {
        match self {
            Self::Undeclared => "Variable definition missing in scope.",
            Self::Duplicate => "Variable name already exists in this scope.",
            Self::TypeError => "Invalid operation on this data type.",
            Self::MathError => "Division by Zero or Invalid Math Operation.",
            Self::FunctionError => "Attempted to call a non-function value.",
            Self::Timeout => "Execution step limit exceeded (> 5000 steps). Likely an infinite loop.",
            Self::Generic => "Runtime logic error.",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl RuntimeError {
    /// The category this error is reported under.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Undeclared { .. } => ErrorKind::Undeclared,
            Self::Duplicate { .. } => ErrorKind::Duplicate,
            Self::TypeError { .. } => ErrorKind::TypeError,
            Self::MathError { .. } => ErrorKind::MathError,
            Self::NotCallable { .. } => ErrorKind::FunctionError,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Generic { .. } => ErrorKind::Generic,
        }
    }

    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Undeclared { line, .. }
            | Self::Duplicate { line, .. }
            | Self::TypeError { line, .. }
            | Self::MathError { line, .. }
            | Self::NotCallable { line, .. }
            | Self::Timeout { line, .. }
            | Self::Generic { line, .. } => *line,
        }
    }

    /// The name substituted into `{name}` placeholders of a phrase.
    #[must_use]
    pub fn subject(&self) -> &str {
        match self {
            Self::Undeclared { name, .. } | Self::Duplicate { name, .. } => name,
            _ => "",
        }
    }

    /// Error-specific detail, if the error carries any.
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::TypeError { details, .. }
            | Self::MathError { details, .. }
            | Self::NotCallable { details, .. }
            | Self::Generic { details, .. } => Some(details),
            Self::Undeclared { .. } | Self::Duplicate { .. } | Self::Timeout { .. } => None,
        }
    }

    /// Builds the full user-facing message around a chosen phrase.
    ///
    /// The phrase is the only part that may vary between runs; the technical
    /// reason is always the category explanation followed by the detail and
    /// the line.
    #[must_use]
    pub fn render(&self, phrase: &str) -> String {
        let explanation = self.kind().explanation();
        let line = self.line();

        match self.details() {
            Some(details) if !details.is_empty() => format!(
                "🛑 {phrase}\n   (Technical Reason: {explanation} {details} at Line {line})"
            ),
            _ => format!("🛑 {phrase}\n   (Technical Reason: {explanation} at Line {line})"),
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phrase = super::phrasebook::default_phrase(self.kind(), self.subject());
        write!(f, "{}", self.render(&phrase))
    }
}

impl std::error::Error for RuntimeError {}

/// The result of a run that aborted with a runtime error.
///
/// Output printed before the failure is kept so the caller can still show it.
#[derive(Debug, Clone, PartialEq)]
pub struct RunFailure {
    /// The error that stopped the run.
    pub error:   RuntimeError,
    /// The user-facing message, worded by the interpreter's phrasebook.
    pub message: String,
    /// Lines printed before the failure, without a success line.
    pub output:  Vec<String>,
}

impl RunFailure {
    /// The category of the underlying error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

impl std::fmt::Display for RunFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RunFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn render_keeps_explanation_fixed() {
        let error = RuntimeError::MathError { details: "Divide by Zero is impossible.".into(),
                                              line:    3, };

        assert_eq!(error.render("anything"),
                   "🛑 anything\n   (Technical Reason: Division by Zero or Invalid Math \
                    Operation. Divide by Zero is impossible. at Line 3)");
    }

    #[test]
    fn not_callable_reports_function_error() {
        let error = RuntimeError::NotCallable { details: String::new(),
                                                line:    1, };

        assert_eq!(error.kind(), ErrorKind::FunctionError);
        assert_eq!(error.kind().tag(), "FUNCTION_ERROR");
        assert_eq!(error.details(), Some(""));
    }

    #[test]
    fn display_uses_first_phrase() {
        let error = RuntimeError::Undeclared { name: "x".into(),
                                               line: 2, };

        assert_eq!(error.to_string(),
                   "🛑 Oye! 'x' labbhda firda? Pehlan banaya taan hai ni!\n   (Technical \
                    Reason: Variable definition missing in scope. at Line 2)");
    }
}
