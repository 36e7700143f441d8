//! Punctuation-driven tokenization of pre-processed text.
//!
//! Each case marks split points after one class of punctuation; after all
//! cases run, the text is split on the marker.

use fancy_regex::{Regex, escape};

use crate::error::Result;
use crate::text::pattern::PatternBuilder;
use crate::text::punct;

/// Marker inserted after split punctuation. U+001F (unit separator) does
/// not occur in prose.
pub const SPLIT_MARKER: &str = "\u{1f}";

/// A rule that marks split points after one class of punctuation.
pub struct TokenizerCase {
    pattern: Regex,
}

impl TokenizerCase {
    /// Build a case from the characters of a punctuation class.
    pub fn after_class(class: &str) -> Result<Self> {
        let pattern = PatternBuilder::new(class.chars().map(|c| c.to_string()), |mark| {
            format!("(?<={})", escape(mark))
        })
        .build()?;
        Ok(Self { pattern })
    }

    /// Split after tone-modifying punctuation.
    pub fn tone_marks() -> Result<Self> {
        Self::after_class(punct::TONE_MARKS)
    }

    /// Split after a period or comma.
    pub fn period_comma() -> Result<Self> {
        Self::after_class(punct::PERIOD_COMMA)
    }

    /// Split after a colon.
    pub fn colon() -> Result<Self> {
        Self::after_class(punct::COLON)
    }

    /// Split after any remaining punctuation not covered by the cases above.
    pub fn other_punctuation() -> Result<Self> {
        let rest: String = punct::ALL_PUNCTUATION
            .chars()
            .filter(|c| {
                !punct::TONE_MARKS.contains(*c)
                    && !punct::PERIOD_COMMA.contains(*c)
                    && !punct::COLON.contains(*c)
            })
            .collect();
        Self::after_class(&rest)
    }

    /// Insert the split marker after every occurrence of the class. The
    /// punctuation itself is kept; only the marker is added.
    pub fn run(&self, text: &str) -> String {
        self.pattern.replace_all(text, SPLIT_MARKER).into_owned()
    }
}

/// An ordered list of cases plus the final marker split.
pub struct Tokenizer {
    cases: Vec<TokenizerCase>,
}

impl Tokenizer {
    pub fn new(cases: Vec<TokenizerCase>) -> Self {
        Self { cases }
    }

    /// The default cascade: tone marks, period/comma, colon, then the
    /// remaining punctuation catch-all.
    pub fn default_cases() -> Result<Self> {
        Ok(Self::new(vec![
            TokenizerCase::tone_marks()?,
            TokenizerCase::period_comma()?,
            TokenizerCase::colon()?,
            TokenizerCase::other_punctuation()?,
        ]))
    }

    /// Run every case in order over the whole text, then split on the
    /// marker. Elements are trimmed; empty elements are dropped.
    pub fn run(&self, text: &str) -> Vec<String> {
        let marked = self
            .cases
            .iter()
            .fold(text.to_string(), |acc, case| case.run(&acc));

        marked
            .split(SPLIT_MARKER)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_keeps_punctuation() {
        let case = TokenizerCase::period_comma().unwrap();
        assert_eq!(case.run("a.b,c"), format!("a.{m}b,{m}c", m = SPLIT_MARKER));
    }

    #[test]
    fn test_default_tokenization() {
        let tokenizer = Tokenizer::default_cases().unwrap();
        let tokens = tokenizer.run("First one. Second, part! Third: done");
        assert_eq!(
            tokens,
            vec!["First one.", "Second,", "part!", "Third:", "done"]
        );
    }

    #[test]
    fn test_tokens_are_trimmed_and_non_empty() {
        let tokenizer = Tokenizer::default_cases().unwrap();
        let tokens = tokenizer.run("One.   Two.  ");
        assert_eq!(tokens, vec!["One.", "Two."]);
        assert!(tokens.iter().all(|t| !t.trim().is_empty()));
    }

    #[test]
    fn test_adjacent_punctuation_yields_no_empty_tokens() {
        let tokenizer = Tokenizer::default_cases().unwrap();
        let tokens = tokenizer.run("Wait...! Really?");
        assert!(tokens.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn test_rejoined_tokens_keep_content() {
        let tokenizer = Tokenizer::default_cases().unwrap();
        let text = "Alpha, beta. Gamma! Delta: epsilon; zeta";
        let rejoined: String = tokenizer.run(text).concat();
        let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let rejoined_stripped: String = rejoined.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(rejoined_stripped, stripped);
    }
}
