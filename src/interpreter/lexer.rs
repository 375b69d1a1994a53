use logos::{Lexer, Logos};
use tracing::debug;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `5.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// String literal tokens in single or double quotes, such as `"sat sri
    /// akal"`. The value excludes the quotes.
    #[token("\"", |lex| lex_string(lex, '"'))]
    #[token("'", |lex| lex_string(lex, '\''))]
    Str(String),
    /// `mannle`
    #[token("mannle")]
    Mannle,
    /// `vikha`
    #[token("vikha")]
    Vikha,
    /// `je`
    #[token("je")]
    Je,
    /// `fer`
    #[token("fer")]
    Fer,
    /// `hor_je`
    #[token("hor_je")]
    HorJe,
    /// `jadd_vi`
    #[token("jadd_vi")]
    JaddVi,
    /// `jado`
    #[token("jado")]
    Jado,
    /// `eh_kro`
    #[token("eh_kro")]
    EhKro,
    /// `kamm`
    #[token("kamm")]
    Kamm,
    /// `bhajo`
    #[token("bhajo")]
    Bhajo,
    /// `chaddo`
    #[token("chaddo")]
    Chaddo,
    /// `langh_jaa`
    #[token("langh_jaa")]
    LanghJaa,
    /// Identifier tokens; variable or function names such as `x` or `jod`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[token("//", skip_line_comment)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    #[token("/*", skip_block_comment)]
    MultiLineComment,
    /// `===`
    #[token("===")]
    StrictEqual,
    /// `!==`
    #[token("!==")]
    StrictNotEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,

    /// Whitespace, including line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Broad classification of a [`Token`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Numeric literal.
    Number,
    /// String literal.
    String,
    /// Identifier.
    Identifier,
    /// Reserved word.
    Keyword,
    /// Operator such as `+` or `===`.
    Operator,
    /// Brackets, `;` and `,`.
    Punctuation,
}

impl Token {
    /// Classifies `self`.
    ///
    /// ## Example
    /// ```
    /// use pindscript::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Jado.kind(), TokenKind::Keyword);
    /// assert_eq!(Token::StrictEqual.kind(), TokenKind::Operator);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Str(_) => TokenKind::String,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Mannle
            | Self::Vikha
            | Self::Je
            | Self::Fer
            | Self::HorJe
            | Self::JaddVi
            | Self::Jado
            | Self::EhKro
            | Self::Kamm
            | Self::Bhajo
            | Self::Chaddo
            | Self::LanghJaa => TokenKind::Keyword,
            Self::LParen
            | Self::RParen
            | Self::LBrace
            | Self::RBrace
            | Self::LBracket
            | Self::RBracket
            | Self::Semicolon
            | Self::Comma
            | Self::Comment
            | Self::MultiLineComment
            | Self::Ignored => TokenKind::Punctuation,
            _ => TokenKind::Operator,
        }
    }
}

/// The ways a single token can fail to lex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No token starts with the current character.
    #[default]
    UnknownCharacter,
    /// A quote was opened and the input ended before it closed.
    UnterminatedString,
}

/// Byte offsets where each line of the source begins.
///
/// Built once per tokenization; positions are looked up by binary search, so
/// multi-line strings and comments need no bookkeeping of their own.
struct LineIndex<'s> {
    source: &'s str,
    starts: Vec<usize>,
}

impl<'s> LineIndex<'s> {
    fn new(source: &'s str) -> Self {
        let starts = std::iter::once(0).chain(source.match_indices('\n').map(|(i, _)| i + 1))
                                       .collect();
        Self { source, starts }
    }

    /// 1-based line and character column of byte `offset`.
    fn position(&self, offset: usize) -> (usize, usize) {
        let line = self.starts.partition_point(|&start| start <= offset);
        let line_start = self.starts[line - 1];
        let column = self.source[line_start..offset].chars().count() + 1;

        (line, column)
    }
}

/// A token together with its source text and position.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The token.
    pub token:  Token,
    /// The exact source slice, quotes included for strings.
    pub text:   String,
    /// 1-based line of the first character.
    pub line:   usize,
    /// 1-based column of the first character, counted in characters.
    pub column: usize,
}

fn parse_number(lex: &Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Consumes a string body up to the matching `quote`.
///
/// Strings have no escape sequences, so the first matching quote closes the
/// literal. Strings may span lines.
fn lex_string(lex: &mut Lexer<Token>, quote: char) -> Result<String, LexErrorKind> {
    let rest = lex.remainder();

    let Some(end) = rest.find(quote)
    else {
        lex.bump(rest.len());
        return Err(LexErrorKind::UnterminatedString);
    };

    let content = rest[..end].to_string();
    lex.bump(end + quote.len_utf8());

    Ok(content)
}

/// Skips a `//` comment up to, not including, the end of the line.
fn skip_line_comment(lex: &mut Lexer<Token>) -> logos::Skip {
    let rest = lex.remainder();
    lex.bump(rest.find('\n').unwrap_or(rest.len()));

    logos::Skip
}

/// Skips a `/* ... */` comment. An unclosed comment runs to the end of input.
fn skip_block_comment(lex: &mut Lexer<Token>) -> logos::Skip {
    let rest = lex.remainder();
    let length = rest.find("*/").map_or(rest.len(), |end| end + 2);
    lex.bump(length);

    logos::Skip
}

/// Tokenizes PindScript source text.
///
/// Whitespace and comments are dropped. Every other token is returned in source
/// order with its line and column.
///
/// # Errors
/// Returns [`LexError::UnknownCharacter`] for a character that starts no token
/// and [`LexError::UnterminatedString`] for a string that never closes.
///
/// ## Example
/// ```
/// use pindscript::interpreter::lexer::{Token, tokenize};
///
/// let lexemes = tokenize("mannle x = 'hi';").unwrap();
/// let tokens = lexemes.iter().map(|l| l.token.clone()).collect::<Vec<_>>();
///
/// assert_eq!(tokens,
///            vec![Token::Mannle,
///                 Token::Identifier("x".to_string()),
///                 Token::Equals,
///                 Token::Str("hi".to_string()),
///                 Token::Semicolon]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Lexeme>, LexError> {
    let lines = LineIndex::new(source);
    let mut lexer = Token::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let (line, column) = lines.position(span.start);

        match result {
            Ok(token) => lexemes.push(Lexeme { token,
                                               text: lexer.slice().to_string(),
                                               line,
                                               column }),
            Err(LexErrorKind::UnknownCharacter) => {
                let character = source[span.start..].chars().next().unwrap_or('\0');
                return Err(LexError::UnknownCharacter { character, line, column });
            },
            Err(LexErrorKind::UnterminatedString) => {
                return Err(LexError::UnterminatedString { line, column });
            },
        }
    }

    debug!(tokens = lexemes.len(), "tokenized source");
    Ok(lexemes)
}
