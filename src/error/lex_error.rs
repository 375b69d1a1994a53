#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing.
pub enum LexError {
    /// Found a character that starts no token.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        column:    usize,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// The line where the string literal starts.
        line:   usize,
        /// The column where the string literal starts.
        column: usize,
    },
}

impl LexError {
    /// The line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownCharacter { line, .. } | Self::UnterminatedString { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, line, .. } => write!(f,
                                                                     "🛑 Eh ki likh ditta? '{character}' meri dictionary ch nahi hai.\n   (Technical Reason: Unknown/Unexpected Token at Line {line})"),
            Self::UnterminatedString { line, .. } => write!(f,
                                                            "🛑 String band karni bhull gya?\n   (Technical Reason: Unterminated string literal starting at Line {line})"),
        }
    }
}

impl std::error::Error for LexError {}
