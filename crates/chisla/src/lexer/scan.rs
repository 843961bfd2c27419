use crate::error::{LexerError, LexerErrorKind};
use crate::kind::TokenKind;
use crate::lexer::builder::LexRule;
use crate::lexer::token::Token;
use crate::text::{TextRange, TextSize};
use std::iter::FusedIterator;

/// An immutable, ordered rule table ready to scan input.
///
/// Built once via [`LexerBuilder`](crate::LexerBuilder), then shared freely:
/// `tokenize` takes `&self` and keeps all scan state inside the returned
/// iterator, so one lexer can serve any number of inputs, including
/// concurrently from several threads.
#[derive(Debug)]
pub struct Lexer<K: TokenKind> {
    rules: Vec<LexRule<K>>,
}

impl<K: TokenKind> Lexer<K> {
    pub(crate) fn new(rules: Vec<LexRule<K>>) -> Self {
        Self { rules }
    }

    /// The rule table, in match order.
    #[must_use]
    pub fn rules(&self) -> &[LexRule<K>] {
        &self.rules
    }

    /// Scan `input` lazily.
    ///
    /// The returned iterator yields `Ok(token)` for each match and ends
    /// after the whole input is consumed; no end-of-input token is
    /// synthesized. Trivia (whitespace and the like) is yielded like
    /// anything else.
    ///
    /// At each position the rules are tried in registration order and the
    /// first match wins, even when a later rule would have matched a longer
    /// lexeme. If no rule matches, the iterator yields one `Err` carrying
    /// the offending position and the unconsumed remainder, then fuses:
    /// there is no recovery and no restart.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chisla::tchisla;
    ///
    /// let lexer = tchisla::lexer();
    /// for token in lexer.tokenize("1 + 2") {
    ///     let token = token?;
    ///     println!("{:?} {:?} at {}", token.kind, token.text, token.range);
    /// }
    /// # Ok::<(), chisla::LexerError>(())
    /// ```
    pub fn tokenize<'l, 's>(&'l self, input: &'s str) -> Tokens<'l, 's, K> {
        Tokens {
            rules: &self.rules,
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Scan `input` eagerly, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexerError`] the scan produces; tokens before the
    /// error position are discarded. Use [`Lexer::tokenize`] to keep the
    /// valid prefix.
    pub fn tokenize_all(&self, input: &str) -> Result<Vec<Token<K>>, LexerError> {
        self.tokenize(input).collect()
    }
}

/// Lazy token sequence over one input. Created by [`Lexer::tokenize`].
///
/// Finite and non-restartable: after the final token or a single terminal
/// error it only ever returns `None`.
#[derive(Debug)]
pub struct Tokens<'l, 's, K: TokenKind> {
    rules: &'l [LexRule<K>],
    input: &'s str,
    pos: usize,
    failed: bool,
}

impl<K: TokenKind> Iterator for Tokens<'_, '_, K> {
    type Item = Result<Token<K>, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.input.len() {
            return None;
        }
        let rest = &self.input[self.pos..];
        for (index, rule) in self.rules.iter().enumerate() {
            let Some(len) = rule.pattern.match_len(rest) else {
                continue;
            };
            if len == 0 {
                // A zero-length match would never advance the scan
                self.failed = true;
                let at = offset(self.pos);
                return Some(Err(LexerError::new(
                    TextRange::new(at, at),
                    LexerErrorKind::empty_match(index),
                )));
            }
            let range = TextRange::at(offset(self.pos), offset(len));
            let token = Token::new(rule.kind, &rest[..len], range);
            self.pos += len;
            return Some(Ok(token));
        }
        self.failed = true;
        // rest is non-empty here, so there is a first char
        let found = rest.chars().next().unwrap_or('\u{FFFD}');
        let span = TextRange::at(offset(self.pos), offset(found.len_utf8()));
        Some(Err(LexerError::new(
            span,
            LexerErrorKind::unexpected_char(found, rest),
        )))
    }
}

impl<K: TokenKind> FusedIterator for Tokens<'_, '_, K> {}

// Spans are u32; inputs anywhere near that limit are out of scope here
fn offset(pos: usize) -> TextSize {
    TextSize::from(u32::try_from(pos).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::builder::LexerBuilder;
    use crate::lexer::pattern::{CharSet, Pattern};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestKind {
        Word,
        Number,
        Space,
    }

    impl TokenKind for TestKind {
        fn is_trivia(self) -> bool {
            matches!(self, Self::Space)
        }
    }

    fn lexer() -> Lexer<TestKind> {
        LexerBuilder::new()
            .token(
                TestKind::Number,
                Pattern::Repeat {
                    pattern: Box::new(Pattern::CharClass(CharSet::digits())),
                    min: 1,
                    max: None,
                },
            )
            .token(
                TestKind::Word,
                Pattern::Repeat {
                    pattern: Box::new(Pattern::CharClass(CharSet::new(vec![('a', 'z')]))),
                    min: 1,
                    max: None,
                },
            )
            .token(TestKind::Space, Pattern::Literal(" ".into()))
            .build()
            .unwrap()
    }

    #[test]
    fn scans_in_order() {
        let tokens = lexer().tokenize_all("ab 12").unwrap();

        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [TestKind::Word, TestKind::Space, TestKind::Number]
        );
        assert_eq!(tokens[2].text, "12");
        assert_eq!(format!("{}", tokens[2].range), "3..5");
    }

    #[test]
    fn empty_input_yields_nothing() {
        let lexer = lexer();
        let mut tokens = lexer.tokenize("");
        assert!(tokens.next().is_none());
    }

    #[test]
    fn no_eof_token_is_synthesized() {
        let lexer = lexer();
        let mut tokens = lexer.tokenize("ab");
        assert!(tokens.next().is_some());
        assert!(tokens.next().is_none());
        assert!(tokens.next().is_none());
    }

    #[test]
    fn first_rule_wins_over_longer_later_match() {
        // "le" is registered before the general word rule; at a position
        // where both match, the earlier rule wins even though the word
        // rule would consume more
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        enum K {
            Le,
            Word,
        }
        impl TokenKind for K {
            fn is_trivia(self) -> bool {
                false
            }
        }
        let lexer = LexerBuilder::new()
            .token(K::Le, Pattern::Literal("le".into()))
            .token(
                K::Word,
                Pattern::Repeat {
                    pattern: Box::new(Pattern::CharClass(CharSet::new(vec![('a', 'z')]))),
                    min: 1,
                    max: None,
                },
            )
            .build()
            .unwrap();

        let tokens = lexer.tokenize_all("lexer").unwrap();
        assert_eq!(tokens[0].kind, K::Le);
        assert_eq!(tokens[0].text, "le");
        assert_eq!(tokens[1].kind, K::Word);
        assert_eq!(tokens[1].text, "xer");
    }

    #[test]
    fn unmatched_char_is_terminal() {
        let lexer = lexer();
        let mut tokens = lexer.tokenize("ab!cd");

        assert_eq!(tokens.next().unwrap().unwrap().text, "ab");

        let err = tokens.next().unwrap().unwrap_err();
        assert_eq!(err.span().start(), TextSize::from(2));
        assert_eq!(err.remaining(), Some("!cd"));
        match err.kind() {
            LexerErrorKind::UnexpectedChar { found, .. } => assert_eq!(*found, '!'),
            LexerErrorKind::EmptyMatch { .. } => panic!("Wrong error kind"),
        }

        // Fused: nothing after the error, ever
        assert!(tokens.next().is_none());
        assert!(tokens.next().is_none());
    }

    #[test]
    fn error_span_covers_multibyte_char() {
        let lexer = lexer();
        let mut tokens = lexer.tokenize("a√b");

        assert!(tokens.next().unwrap().is_ok());
        let err = tokens.next().unwrap().unwrap_err();
        assert_eq!(err.span().start(), TextSize::from(1));
        assert_eq!(err.span().len(), TextSize::from(3)); // '√' is 3 bytes
    }

    #[test]
    fn zero_length_match_is_a_terminal_error() {
        // Builder validation rejects such tables; construct directly to
        // check the runtime guard
        let lexer = Lexer::new(vec![LexRule {
            kind: TestKind::Space,
            pattern: Pattern::Repeat {
                pattern: Box::new(Pattern::CharClass(CharSet::digits())),
                min: 0,
                max: None,
            },
        }]);

        let mut tokens = lexer.tokenize("abc");
        let err = tokens.next().unwrap().unwrap_err();
        match err.kind() {
            LexerErrorKind::EmptyMatch { rule } => assert_eq!(*rule, 0),
            LexerErrorKind::UnexpectedChar { .. } => panic!("Wrong error kind"),
        }
        assert_eq!(err.span().start(), TextSize::zero());
        assert_eq!(err.span().len(), TextSize::zero());
        assert!(tokens.next().is_none());
    }

    #[test]
    fn tokenize_all_stops_at_first_error() {
        let result = lexer().tokenize_all("ab!cd");
        let err = result.unwrap_err();
        assert_eq!(err.span().start(), TextSize::from(2));
    }

    #[test]
    fn lexer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Lexer<TestKind>>();

        let lexer = lexer();
        std::thread::scope(|scope| {
            for input in ["ab 12", "12 ab", "a 1 b 2"] {
                let lexer = &lexer;
                scope.spawn(move || {
                    let tokens = lexer.tokenize_all(input).unwrap();
                    assert!(!tokens.is_empty());
                });
            }
        });
    }
}
