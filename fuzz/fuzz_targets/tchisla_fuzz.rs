#![no_main]
use chisla::tchisla;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let lexer = tchisla::lexer();

    // Walk the stream; tokens before any error form the consumed prefix
    let mut consumed = String::new();
    let mut error = None;
    for item in lexer.tokenize(input) {
        match item {
            Ok(token) => {
                assert!(!token.text.is_empty(), "tokens never have empty lexemes");
                assert_eq!(
                    token.range.start().into() as usize,
                    consumed.len(),
                    "token spans line up with the scan position"
                );
                consumed.push_str(&token.text);
            }
            Err(err) => {
                error = Some(err);
                break;
            }
        }
    }

    match error {
        None => {
            assert_eq!(consumed, input, "full scans are lossless");
        }
        Some(err) => {
            let at = err.span().start().into() as usize;
            assert_eq!(at, consumed.len(), "the error starts where the tokens stop");
            assert!(input.is_char_boundary(at), "error offsets sit on char boundaries");

            let remaining = err.remaining().unwrap_or_default();
            assert_eq!(
                format!("{consumed}{remaining}"),
                input,
                "consumed prefix plus remainder is the whole input"
            );
        }
    }
});
