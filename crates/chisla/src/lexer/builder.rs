use crate::error::RuleError;
use crate::kind::TokenKind;
use crate::lexer::pattern::Pattern;
use crate::lexer::scan::Lexer;
use smallvec::SmallVec;

/// Builder for a [`Lexer`].
///
/// Rules are tried in the order they are registered, and the first rule that
/// matches at the scan position wins. Registration order is therefore the
/// whole conflict-resolution policy: put more specific rules first.
///
/// # Example
///
/// ```rust
/// use chisla::{CharSet, LexerBuilder, Pattern, TokenKind};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Kind {
///     Number,
///     Plus,
/// }
///
/// impl TokenKind for Kind {
///     fn is_trivia(self) -> bool {
///         false
///     }
/// }
///
/// let lexer = LexerBuilder::new()
///     .token(Kind::Number, Pattern::Repeat {
///         pattern: Box::new(Pattern::CharClass(CharSet::digits())),
///         min: 1,
///         max: None,
///     })
///     .token(Kind::Plus, Pattern::Literal("+".into()))
///     .build()?;
///
/// let tokens = lexer.tokenize_all("1+2")?;
/// assert_eq!(tokens.len(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct LexerBuilder<K: TokenKind> {
    rules: SmallVec<[LexRule<K>; 16]>,
}

/// A single (pattern, kind) rule in a lexer's ordered table.
#[derive(Debug, Clone)]
pub struct LexRule<K: TokenKind> {
    pub kind: K,
    pub pattern: Pattern,
}

impl<K: TokenKind> Default for LexerBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TokenKind> LexerBuilder<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: SmallVec::new(),
        }
    }

    /// Append a rule. Later rules only get a chance where every earlier rule
    /// fails to match.
    #[must_use]
    pub fn token(mut self, kind: K, pattern: Pattern) -> Self {
        self.rules.push(LexRule { kind, pattern });
        self
    }

    /// Build the lexer from the configured rules.
    ///
    /// Duplicate and overlapping patterns are allowed; order disambiguates.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptyPattern`] if any rule's pattern can match
    /// the empty string. Such a rule would produce a zero-length token and
    /// pin the scan in place.
    pub fn build(self) -> Result<Lexer<K>, RuleError> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.pattern.can_match_empty() {
                return Err(RuleError::EmptyPattern { rule: index });
            }
        }
        Ok(Lexer::new(self.rules.into_vec()))
    }
}
