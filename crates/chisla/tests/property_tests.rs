//! Property-based tests for the Tchisla lexer.
//!
//! Inputs are built by concatenating valid lexemes (so they must tokenize)
//! or by appending junk to a valid prefix (so they must fail exactly at the
//! junk). Arbitrary inputs check that scanning is repeatable and stops at
//! the first error.

use chisla::tchisla::{self, TchislaKind};
use proptest::prelude::*;

/// One valid Tchisla lexeme
fn lexeme() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..10_000).prop_map(|n| n.to_string()),
        Just("sqrt".to_string()),
        Just("√".to_string()),
        Just("!".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("^".to_string()),
        Just("\n".to_string()),
        Just(" ".to_string()),
        Just("\t".to_string()),
    ]
}

/// Concatenations of valid lexemes; always fully tokenizable
fn valid_input() -> impl Strategy<Value = String> {
    proptest::collection::vec(lexeme(), 0..24).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn valid_input_tokenizes_losslessly(input in valid_input()) {
        let lexer = tchisla::lexer();
        let tokens = lexer.tokenize_all(&input);
        prop_assert!(tokens.is_ok(), "valid input failed: {input:?}");

        let tokens = tokens.unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn junk_fails_exactly_where_the_valid_prefix_ends(
        prefix in valid_input(),
        junk in "[@#$qzj=]{1,6}",
    ) {
        let input = format!("{prefix}{junk}");
        let lexer = tchisla::lexer();

        let mut consumed = 0usize;
        let mut error = None;
        for item in lexer.tokenize(&input) {
            match item {
                Ok(token) => consumed += token.text.len(),
                Err(err) => {
                    error = Some(err);
                    break;
                }
            }
        }

        prop_assert!(error.is_some());
        let err = error.unwrap();
        prop_assert_eq!(consumed, prefix.len());
        prop_assert_eq!(err.span().start().into() as usize, prefix.len());
        prop_assert_eq!(err.remaining(), Some(junk.as_str()));
    }

    #[test]
    fn tokenizing_is_repeatable(input in "[0-9a-z√+\\-*/^()! \t\n@#]{0,48}") {
        let lexer = tchisla::lexer();
        let first: Vec<_> = lexer.tokenize(&input).collect();
        let second: Vec<_> = lexer.tokenize(&input).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn at_most_one_error_and_nothing_after_it(input in "[0-9√+\\-*/^()!sa-e \t\n@#$]{0,48}") {
        let lexer = tchisla::lexer();
        let items: Vec<_> = lexer.tokenize(&input).collect();

        if let Some(pos) = items.iter().position(Result::is_err) {
            prop_assert_eq!(pos, items.len() - 1);
        }
    }

    #[test]
    fn integers_lex_whole(n in 0u64..1_000_000_000) {
        let input = n.to_string();
        let tokens = tchisla::lexer().tokenize_all(&input).unwrap();

        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TchislaKind::PositiveInteger);
        prop_assert_eq!(tokens[0].text.as_str(), input.as_str());
    }

    #[test]
    fn a_leading_zero_splits_off(n in 1u64..1_000_000) {
        let input = format!("0{n}");
        let tokens = tchisla::lexer().tokenize_all(&input).unwrap();
        let rest = n.to_string();

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].text.as_str(), "0");
        prop_assert_eq!(tokens[1].text.as_str(), rest.as_str());
    }
}
