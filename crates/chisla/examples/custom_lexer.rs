//! Custom lexer example
//!
//! Builds a lexer for dice notation ("3d6+2") from scratch to show the
//! builder API: ordered rules, a regex pattern, and trivia filtering.

use chisla::{CharSet, LexerBuilder, Pattern, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum DiceKind {
    Number,
    Dice,
    Plus,
    Minus,
    Whitespace,
}

impl TokenKind for DiceKind {
    fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace)
    }
}

fn main() {
    println!("=== Dice Notation Lexer ===\n");

    let lexer = match LexerBuilder::new()
        .token(DiceKind::Number, Pattern::regex("[0-9]+").expect("valid regex"))
        .token(DiceKind::Dice, Pattern::Literal("d".into()))
        .token(DiceKind::Plus, Pattern::Literal("+".into()))
        .token(DiceKind::Minus, Pattern::Literal("-".into()))
        .token(
            DiceKind::Whitespace,
            Pattern::Repeat {
                pattern: Box::new(Pattern::CharClass(CharSet::whitespace())),
                min: 1,
                max: None,
            },
        )
        .build()
    {
        Ok(lexer) => lexer,
        Err(error) => {
            eprintln!("Failed to build lexer: {error}");
            return;
        }
    };

    let test_cases = ["3d6", "2d20 + 5", "d8 - 1", "2x4"];

    for input in test_cases {
        println!("Input: {input:?}");

        // Trivia is emitted like everything else; filter it out here
        let significant = lexer
            .tokenize(input)
            .filter(|item| item.as_ref().map_or(true, |t| !t.is_trivia()));

        for item in significant {
            match item {
                Ok(token) => println!("  {:?} {:?}", token.kind, token.text),
                Err(error) => println!("  Error: {error} at {}", error.span()),
            }
        }
        println!();
    }

    println!("=== Example completed ===");
}
