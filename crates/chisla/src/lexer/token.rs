use crate::kind::TokenKind;
use crate::text::TextRange;
use compact_str::CompactString;

/// A token produced by the lexer.
///
/// A token is a classified slice of the input: its kind, the exact lexeme
/// text, and the byte range the lexeme came from. Tokens own their text, so
/// they stay valid after the input goes away, and concatenating the lexemes
/// of a full scan reproduces the input unchanged.
///
/// # Example
///
/// ```rust
/// use chisla::{TextRange, TextSize, Token};
/// use chisla::tchisla::TchislaKind;
///
/// let token = Token::new(
///     TchislaKind::PositiveInteger,
///     "42",
///     TextRange::at(TextSize::zero(), TextSize::from(2)),
/// );
/// assert_eq!(token.text, "42");
/// assert!(!token.is_trivia());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<K: TokenKind> {
    /// The kind of this token (e.g., `PositiveInteger`, `AdditionOperator`)
    pub kind: K,
    /// The lexeme: the source text this token matched
    pub text: CompactString,
    /// The byte range in the input where this token appears
    pub range: TextRange,
}

impl<K: TokenKind> Token<K> {
    /// Create a new token with the given kind, lexeme, and range.
    #[must_use]
    pub fn new(kind: K, text: impl Into<CompactString>, range: TextRange) -> Self {
        Self {
            kind,
            text: text.into(),
            range,
        }
    }

    /// Check if this token is trivia (whitespace and the like).
    ///
    /// The lexer emits trivia like any other token; consumers that do not
    /// care filter with `tokens.filter(|t| !t.is_trivia())` or similar.
    #[inline]
    #[must_use]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}
