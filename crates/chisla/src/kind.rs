/// Trait for token kind identifiers.
///
/// A lexer is generic over the set of kinds its rules can assign. The type
/// should be a small `Copy` enum with one variant per lexical category.
///
/// ## Example
///
/// ```rust
/// use chisla::TokenKind;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum MyKind {
///     Number,
///     Plus,
///     Whitespace,
/// }
///
/// impl TokenKind for MyKind {
///     fn is_trivia(self) -> bool {
///         matches!(self, MyKind::Whitespace)
///     }
/// }
/// ```
pub trait TokenKind: Copy + PartialEq + Eq + std::hash::Hash + std::fmt::Debug + Send + Sync + 'static {
    /// Check if this kind represents trivia (whitespace and the like).
    ///
    /// The lexer emits trivia tokens like any others; this hook lets
    /// consumers filter them out with ordinary iterator adapters.
    fn is_trivia(self) -> bool;
}
