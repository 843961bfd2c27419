//! # Lexer Module
//!
//! Ordered-rule tokenization: turning input text into a stream of typed,
//! positioned tokens.
//!
//! ## Overview
//!
//! A lexer is an ordered table of (pattern, kind) rules. Scanning walks the
//! input once; at each position the rules are tried in registration order
//! and the **first** match wins. There is no longest-match comparison
//! across rules: order is the entire conflict-resolution policy, which
//! makes rule tables easy to reason about and easy to get wrong in exactly
//! one way (putting a general rule before a specific one).
//!
//! ## Usage
//!
//! ```rust
//! use chisla::{CharSet, LexerBuilder, Pattern, TokenKind};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum MyKind {
//!     Number,
//!     Plus,
//!     Whitespace,
//! }
//!
//! impl TokenKind for MyKind {
//!     fn is_trivia(self) -> bool {
//!         matches!(self, MyKind::Whitespace)
//!     }
//! }
//!
//! let lexer = LexerBuilder::new()
//!     .token(MyKind::Number, Pattern::regex(r"[1-9][0-9]*|0")?)
//!     .token(MyKind::Plus, Pattern::Literal("+".into()))
//!     .token(MyKind::Whitespace, Pattern::Repeat {
//!         pattern: Box::new(Pattern::CharClass(CharSet::whitespace())),
//!         min: 1,
//!         max: None,
//!     })
//!     .build()?;
//!
//! let tokens = lexer.tokenize_all("12 + 3")?;
//! assert_eq!(tokens.len(), 5); // whitespace is a token too
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Scanning yields [`LexerError`](crate::error::LexerError) and stops when
//! no rule matches or a rule produces a zero-length match. The error keeps
//! the failure position and the unconsumed rest of the input; there is no
//! skip-ahead recovery.

pub mod builder;
pub mod pattern;
pub mod scan;
pub mod token;

pub use builder::{LexRule, LexerBuilder};
pub use pattern::{CharSet, Pattern};
pub use scan::{Lexer, Tokens};
pub use token::Token;
