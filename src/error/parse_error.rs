#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar requires here.
    UnexpectedToken {
        /// Source text of the token encountered.
        token:    String,
        /// Description of what was expected instead.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Found a token that cannot start an expression.
    ExpectedExpression {
        /// Source text of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// Description of what was expected instead.
        expected: String,
    },
    /// The left-hand side of `=` is neither a variable nor an index
    /// expression.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// The line the error points at, or `None` when input ran out.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::InvalidAssignmentTarget { line } => Some(*line),
            Self::UnexpectedEndOfInput { .. } => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, expected, line } => write!(f,
                                                                      "🛑 Syntax galat hai, school ja wapis! (Expected '{expected}' but got '{token}')\n   (Technical Reason: Unexpected Token at Line {line})"),
            Self::ExpectedExpression { token, line } => write!(f,
                                                               "🛑 Kehda nasha karke code likheya? '{token}' samajh ni aaya.\n   (Technical Reason: Unexpected Token at Line {line})"),
            Self::UnexpectedEndOfInput { expected } => write!(f,
                                                              "🛑 Syntax galat hai, school ja wapis! (Expected '{expected}' but got 'Khatam (EOF)')\n   (Technical Reason: Unexpected Token at Line End)"),
            Self::InvalidAssignmentTarget { line } => write!(f,
                                                             "🛑 Oye! Value sirf variable ya array nu assign ho sakdi aa.\n   (Technical Reason: Invalid Left-Hand Side in Assignment at Line {line})"),
        }
    }
}

impl std::error::Error for ParseError {}
