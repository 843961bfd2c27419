//! # Chisla
//!
//! An ordered-rule tokenizer engine, with a built-in lexer for Tchisla
//! arithmetic expressions.
//!
//! ## Overview
//!
//! Chisla turns input text into a stream of typed, positioned tokens:
//!
//! - **Ordered rule tables**: a lexer is a list of (pattern, kind) rules;
//!   at each position the first rule that matches wins, so registration
//!   order is the whole conflict-resolution policy
//! - **Lazy token streams**: tokenization is an iterator; nothing past the
//!   last consumed token is scanned
//! - **Precise positions**: every token and error carries a byte range into
//!   the input, and token lexemes concatenate back to the input exactly
//! - **Terminal errors**: when no rule matches, the stream yields one error
//!   with the failure position and the unconsumed remainder, then ends
//! - **Tchisla built in**: [`tchisla::lexer()`] ships the fixed rule table
//!   for the Tchisla number-puzzle language
//!
//! ## Quick Start
//!
//! ```rust
//! use chisla::tchisla::{self, TchislaKind};
//!
//! let lexer = tchisla::lexer();
//! let tokens = lexer.tokenize("1 + 2\n").collect::<Result<Vec<_>, _>>()?;
//!
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TchislaKind::PositiveInteger,
//!         TchislaKind::Whitespace,
//!         TchislaKind::AdditionOperator,
//!         TchislaKind::Whitespace,
//!         TchislaKind::PositiveInteger,
//!         TchislaKind::Terminator,
//!     ]
//! );
//!
//! // Lexemes concatenate back to the input, whitespace included
//! let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(rebuilt, "1 + 2\n");
//! # Ok::<(), chisla::LexerError>(())
//! ```
//!
//! Custom lexers are built the same way from your own kind enum; see the
//! [`lexer`] module.
//!
//! ## Modules
//!
//! - [`lexer`] - The engine: rule tables, patterns, scanning
//! - [`tchisla`] - The built-in Tchisla lexer
//! - [`kind`] - The [`TokenKind`] trait
//! - [`text`] - Byte offsets and ranges
//! - [`error`] - Build and scan errors

pub mod error;
pub mod kind;
pub mod lexer;
pub mod tchisla;
pub mod text;

// Re-export commonly used types
pub use error::{LexerError, LexerErrorKind, RuleError};
pub use kind::TokenKind;
pub use lexer::{CharSet, LexRule, Lexer, LexerBuilder, Pattern, Token, Tokens};
pub use text::{TextRange, TextSize};
