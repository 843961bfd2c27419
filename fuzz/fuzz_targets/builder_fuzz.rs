#![no_main]
use chisla::{LexerBuilder, Pattern, TokenKind};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum FuzzKind {
    A,
    B,
    Rest,
}

impl TokenKind for FuzzKind {
    fn is_trivia(self) -> bool {
        false
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // First two lines become literal rules, the rest is the input to scan
    let mut parts = input.splitn(3, '\n');
    let lit_a = parts.next().unwrap_or_default();
    let lit_b = parts.next().unwrap_or_default();
    let text = parts.next().unwrap_or_default();

    let result = LexerBuilder::new()
        .token(FuzzKind::A, Pattern::Literal(lit_a.into()))
        .token(FuzzKind::B, Pattern::Literal(lit_b.into()))
        .token(FuzzKind::Rest, Pattern::regex("(?s).").expect("valid regex"))
        .build();

    let Ok(lexer) = result else {
        // Only empty literals get rejected
        assert!(lit_a.is_empty() || lit_b.is_empty());
        return;
    };

    let tokens: Vec<_> = lexer
        .tokenize(text)
        .collect::<Result<_, _>>()
        .expect("the single-char fallback rule accepts everything");

    let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(rebuilt, text, "lexemes concatenate to the input");

    for token in &tokens {
        let rest = &text[token.range.start().into() as usize..];
        match token.kind {
            FuzzKind::A => assert_eq!(token.text, lit_a),
            FuzzKind::B => {
                assert_eq!(token.text, lit_b);
                assert!(
                    !rest.starts_with(lit_a),
                    "an earlier matching rule would have won"
                );
            }
            FuzzKind::Rest => {
                assert!(!rest.starts_with(lit_a) && !rest.starts_with(lit_b));
            }
        }
    }

    let again: Vec<_> = lexer
        .tokenize(text)
        .collect::<Result<_, _>>()
        .expect("same input, same outcome");
    assert_eq!(tokens, again, "tokenizing is repeatable");
});
