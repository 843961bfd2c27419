//! Tchisla tokenization example
//!
//! Runs the built-in Tchisla lexer over a few inputs, including one that
//! fails partway through, and prints what comes out.

use chisla::tchisla;

fn main() {
    println!("=== Tchisla Lexer ===\n");

    let lexer = tchisla::lexer();

    let test_cases = [
        "sqrt(9)",
        "4!",
        "1 + 2\n",
        "√(sqrt(256)) / 2^3",
        "12+3",
        "3 @ 4",
    ];

    for input in test_cases {
        println!("Input: {input:?}");

        for item in lexer.tokenize(input) {
            match item {
                Ok(token) => {
                    println!("  {:<22} {:?} at {}", format!("{:?}", token.kind), token.text, token.range);
                }
                Err(error) => {
                    println!("  Error: {error}");
                    println!("    at offset {}", error.span().start());
                    if let Some(remaining) = error.remaining() {
                        println!("    unconsumed: {remaining:?}");
                    }
                }
            }
        }
        println!();
    }

    println!("=== Example completed ===");
}
