//! # Error Types
//!
//! Errors produced when building a lexer and when scanning input.
//!
//! - [`RuleError`]: a rule table failed validation at build time
//! - [`LexerError`]: scanning stopped; carries the location and the
//!   unconsumed remainder of the input
//!
//! When the `diagnostics` feature is enabled, errors integrate with
//! [`miette`] for rich reporting with labeled source spans.

use crate::text::TextRange;
use compact_str::CompactString;
use thiserror::Error;

#[cfg(feature = "diagnostics")]
use miette::Diagnostic;

/// Scan error with location information.
///
/// Tokenization stops at the first error; the error pinpoints where and
/// keeps the rest of the input so callers can report or retry on their own
/// terms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
#[error("{kind}")]
pub struct LexerError {
    #[cfg_attr(feature = "diagnostics", label)]
    pub span: TextRange,
    #[source]
    pub kind: LexerErrorKind,
}

/// Types of scan errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum LexerErrorKind {
    #[error("Unexpected character: '{found}'")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::unexpected_char)))]
    UnexpectedChar {
        found: char,
        /// Everything from the failure position to the end of the input.
        remaining: CompactString,
    },

    #[error("Rule {rule} matched the empty string")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::empty_match)))]
    EmptyMatch { rule: usize },
}

impl LexerError {
    /// Create a new scan error
    #[must_use]
    pub const fn new(span: TextRange, kind: LexerErrorKind) -> Self {
        Self { span, kind }
    }

    /// Get the span (location) of this error
    #[must_use]
    pub const fn span(&self) -> TextRange {
        self.span
    }

    /// Get the kind of scan error
    #[must_use]
    pub const fn kind(&self) -> &LexerErrorKind {
        &self.kind
    }

    /// Get the unconsumed remainder of the input, if this error carries one
    #[must_use]
    pub fn remaining(&self) -> Option<&str> {
        match &self.kind {
            LexerErrorKind::UnexpectedChar { remaining, .. } => Some(remaining.as_str()),
            LexerErrorKind::EmptyMatch { .. } => None,
        }
    }
}

impl LexerErrorKind {
    /// Create an unexpected character error
    #[must_use]
    pub fn unexpected_char(found: char, remaining: impl Into<CompactString>) -> Self {
        Self::UnexpectedChar {
            found,
            remaining: remaining.into(),
        }
    }

    /// Create an empty-match error for the rule at the given index
    #[must_use]
    pub const fn empty_match(rule: usize) -> Self {
        Self::EmptyMatch { rule }
    }
}

/// Errors rejecting a rule table at build time
#[derive(Debug, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum RuleError {
    #[error("Rule {rule} has a pattern that can match the empty string")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::empty_pattern)))]
    EmptyPattern { rule: usize },

    #[error("Invalid regex pattern '{pattern}'")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::invalid_regex)))]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Empty regex pattern")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::empty_regex)))]
    EmptyRegex,
}
