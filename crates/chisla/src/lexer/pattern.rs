use crate::error::RuleError;
use compact_str::CompactString;

/// What a single lex rule can match.
///
/// Patterns are matched anchored at the current scan position and report how
/// many bytes they consumed. Alternation tries its branches in order and
/// takes the first that matches; repetition is greedy and never backtracks.
/// Both mirror the rule table's own first-match policy, so a pattern never
/// "tries harder" than the lexer around it would.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Exact string
    Literal(CompactString),
    /// One character from a set of ranges (e.g., `[0-9]`)
    CharClass(CharSet),
    /// Greedy repetition of a sub-pattern
    Repeat {
        pattern: Box<Pattern>,
        min: usize,
        max: Option<usize>,
    },
    /// All sub-patterns in order
    Seq(Vec<Pattern>),
    /// First sub-pattern that matches, in order
    Alt(Vec<Pattern>),
    /// Compiled regex, anchored at the scan position; build with [`Pattern::regex`]
    Regex(regex::Regex),
}

/// Character ranges for character class patterns (e.g., `[a-z]`, `[0-9]`).
#[derive(Debug, Clone)]
pub struct CharSet {
    chars: Vec<(char, char)>, // Inclusive ranges
}

impl CharSet {
    /// Create a new character set with the given ranges
    #[must_use]
    pub const fn new(ranges: Vec<(char, char)>) -> Self {
        Self { chars: ranges }
    }

    /// Create a character set for digits [0-9]
    #[must_use]
    pub fn digits() -> Self {
        Self::new(vec![('0', '9')])
    }

    /// Create a character set for whitespace characters
    #[must_use]
    pub fn whitespace() -> Self {
        Self::new(vec![(' ', ' '), ('\t', '\t'), ('\r', '\r'), ('\n', '\n')])
    }

    /// Check if a character matches this character set
    #[must_use]
    pub fn matches(&self, c: char) -> bool {
        self.chars.iter().any(|(start, end)| c >= *start && c <= *end)
    }
}

impl Pattern {
    /// Compile a regex pattern, anchored at the scan position.
    ///
    /// The expression is wrapped as `^(?:…)` so it can only match where the
    /// scan currently is, never further into the input.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is empty or not a valid regex.
    pub fn regex(source: &str) -> Result<Self, RuleError> {
        if source.is_empty() {
            return Err(RuleError::EmptyRegex);
        }
        let anchored = format!("^(?:{source})");
        let compiled = regex::Regex::new(&anchored).map_err(|err| RuleError::InvalidRegex {
            pattern: source.to_string(),
            source: err,
        })?;
        Ok(Self::Regex(compiled))
    }

    /// Length in bytes of the match at the start of `input`, if any.
    #[must_use]
    pub fn match_len(&self, input: &str) -> Option<usize> {
        match self {
            Self::Literal(text) => input.starts_with(text.as_str()).then_some(text.len()),
            Self::CharClass(set) => input
                .chars()
                .next()
                .filter(|c| set.matches(*c))
                .map(char::len_utf8),
            Self::Repeat { pattern, min, max } => {
                let mut count = 0;
                let mut len = 0;
                loop {
                    if let Some(max) = *max
                        && count >= max
                    {
                        break;
                    }
                    match pattern.match_len(&input[len..]) {
                        // A zero-width sub-match would repeat forever
                        Some(n) if n > 0 => {
                            len += n;
                            count += 1;
                        }
                        _ => break,
                    }
                }
                (count >= *min).then_some(len)
            }
            Self::Seq(parts) => {
                let mut len = 0;
                for part in parts {
                    len += part.match_len(&input[len..])?;
                }
                Some(len)
            }
            Self::Alt(parts) => parts.iter().find_map(|part| part.match_len(input)),
            Self::Regex(regex) => regex.find(input).map(|m| m.end()),
        }
    }

    /// Whether this pattern can succeed while consuming nothing.
    ///
    /// Such patterns are rejected at build time; a zero-length match would
    /// pin the scan in place.
    pub(crate) fn can_match_empty(&self) -> bool {
        match self {
            Self::Literal(text) => text.is_empty(),
            Self::CharClass(_) => false,
            Self::Repeat { pattern, min, .. } => *min == 0 || pattern.can_match_empty(),
            Self::Seq(parts) => parts.iter().all(Self::can_match_empty),
            Self::Alt(parts) => parts.iter().any(Self::can_match_empty),
            Self::Regex(regex) => regex.is_match(""),
        }
    }
}
