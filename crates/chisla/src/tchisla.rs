//! # Tchisla Lexer
//!
//! The built-in lexer for Tchisla arithmetic, the number-puzzle notation
//! where expressions are assembled from digits, `sqrt`/`√`, factorial `!`,
//! parentheses, and the operators `+ - * / ^`, one expression per line.
//!
//! ## Rule order
//!
//! The table is fixed and ordered; under first-match-wins that order is
//! load-bearing in two places:
//!
//! - `\n` on its own is a [`Terminator`](TchislaKind::Terminator), because
//!   its rule comes before the whitespace rule. A whitespace run that
//!   *starts* with a space, tab, or carriage return swallows any newlines
//!   inside it into one [`Whitespace`](TchislaKind::Whitespace) token.
//! - `sqrt` is matched as a whole before any operator rule can see its
//!   characters, so there is no `s`/`q`/… fallback (and a lone `s` is a
//!   lexical error).
//!
//! Integers take the longest digit run and reject leading zeros: `12` is
//! one token, `012` is `0` then `12`, and `0` alone is valid.

use crate::kind::TokenKind;
use crate::lexer::builder::LexerBuilder;
use crate::lexer::pattern::{CharSet, Pattern};
use crate::lexer::scan::Lexer;

/// Token kinds of the Tchisla expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TchislaKind {
    /// Non-negative integer literal without leading zeros, e.g. `0`, `42`
    PositiveInteger,
    /// The spelled-out square root function `sqrt`
    FunctionName,
    /// The square root sign `√`
    SquareRootOperator,
    /// Factorial `!`
    FactorialOperator,
    /// `(`
    OpenParenthesis,
    /// `)`
    CloseParenthesis,
    /// `+`
    AdditionOperator,
    /// `-`
    SubtractionOperator,
    /// `*`
    MultiplicationOperator,
    /// `/`
    DivisionOperator,
    /// `^`
    ExponentiationOperator,
    /// A lone newline, ending one expression
    Terminator,
    /// A run of blanks (spaces, tabs, carriage returns, embedded newlines)
    Whitespace,
}

impl TokenKind for TchislaKind {
    fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace)
    }
}

/// Build the Tchisla lexer.
///
/// Returns a fresh, immutable [`Lexer`] carrying the fixed thirteen-rule
/// table. Build it once and share it; `tokenize` never mutates it.
///
/// # Example
///
/// ```rust
/// use chisla::tchisla::{self, TchislaKind};
///
/// let lexer = tchisla::lexer();
/// let tokens = lexer.tokenize_all("sqrt(9)")?;
///
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TchislaKind::FunctionName,
///         TchislaKind::OpenParenthesis,
///         TchislaKind::PositiveInteger,
///         TchislaKind::CloseParenthesis,
///     ]
/// );
/// # Ok::<(), chisla::LexerError>(())
/// ```
///
/// # Panics
///
/// Panics if the built-in rule table fails validation, which would be a bug
/// in this crate.
#[must_use]
pub fn lexer() -> Lexer<TchislaKind> {
    LexerBuilder::new()
        .token(TchislaKind::PositiveInteger, integer_pattern())
        .token(TchislaKind::FunctionName, Pattern::Literal("sqrt".into()))
        .token(TchislaKind::SquareRootOperator, Pattern::Literal("√".into()))
        .token(TchislaKind::FactorialOperator, Pattern::Literal("!".into()))
        .token(TchislaKind::OpenParenthesis, Pattern::Literal("(".into()))
        .token(TchislaKind::CloseParenthesis, Pattern::Literal(")".into()))
        .token(TchislaKind::AdditionOperator, Pattern::Literal("+".into()))
        .token(TchislaKind::SubtractionOperator, Pattern::Literal("-".into()))
        .token(TchislaKind::MultiplicationOperator, Pattern::Literal("*".into()))
        .token(TchislaKind::DivisionOperator, Pattern::Literal("/".into()))
        .token(TchislaKind::ExponentiationOperator, Pattern::Literal("^".into()))
        .token(TchislaKind::Terminator, Pattern::Literal("\n".into()))
        .token(TchislaKind::Whitespace, whitespace_pattern())
        .build()
        .expect("tchisla rule table is valid")
}

/// Longest digit run, no leading zero unless the number is exactly `0`.
///
/// Tried as `[1-9][0-9]*` first, single `[0-9]` second; with first-match
/// alternation that is "multi-digit if it does not start with zero, else
/// one digit".
fn integer_pattern() -> Pattern {
    Pattern::Alt(vec![
        Pattern::Seq(vec![
            Pattern::CharClass(CharSet::new(vec![('1', '9')])),
            Pattern::Repeat {
                pattern: Box::new(Pattern::CharClass(CharSet::digits())),
                min: 0,
                max: None,
            },
        ]),
        Pattern::CharClass(CharSet::digits()),
    ])
}

fn whitespace_pattern() -> Pattern {
    Pattern::Repeat {
        pattern: Box::new(Pattern::CharClass(CharSet::whitespace())),
        min: 1,
        max: None,
    }
}
