//! Alternation pattern compilation shared by the regex pre-processors and
//! the tokenizer cases.

use fancy_regex::Regex;

use crate::error::{Result, TtsError};

/// Compiles an ordered set of literal search terms into a single alternation
/// pattern, one fragment per term.
///
/// Each term runs through a formatting function that turns it into a regex
/// fragment (typically wrapping it in a zero-width assertion). Term order is
/// preserved in the alternation, so earlier terms win when fragments overlap.
pub struct PatternBuilder {
    fragments: Vec<String>,
    case_insensitive: bool,
}

impl PatternBuilder {
    /// Collect `format(term)` fragments for every term, in order.
    pub fn new<I, S, F>(terms: I, format: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> String,
    {
        let fragments = terms.into_iter().map(|t| format(t.as_ref())).collect();
        Self {
            fragments,
            case_insensitive: false,
        }
    }

    /// Compile with the `(?i)` flag.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Compile the fragments into one pattern.
    ///
    /// An empty term set or an invalid fragment fails here with
    /// [`TtsError::BadPattern`], never during text processing.
    pub fn build(self) -> Result<Regex> {
        if self.fragments.is_empty() {
            return Err(TtsError::BadPattern {
                pattern: String::new(),
                message: "no search terms".to_string(),
            });
        }

        let joined = self.fragments.join("|");
        let pattern = if self.case_insensitive {
            format!("(?i){joined}")
        } else {
            joined
        };

        match Regex::new(&pattern) {
            Ok(re) => Ok(re),
            Err(e) => Err(TtsError::BadPattern {
                message: e.to_string(),
                pattern,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_alternation() {
        let re = PatternBuilder::new(["a", "b", "c"], |t| t.to_string())
            .build()
            .unwrap();
        assert_eq!(re.as_str(), "a|b|c");
    }

    #[test]
    fn test_format_applied_per_term() {
        let re = PatternBuilder::new(["?", "!"], |t| format!("(?<={})", fancy_regex::escape(t)))
            .build()
            .unwrap();
        assert!(re.is_match("a?").unwrap());
        assert!(re.is_match("a!").unwrap());
        assert!(!re.is_match("ab").unwrap());
    }

    #[test]
    fn test_case_insensitive_flag() {
        let re = PatternBuilder::new(["dr"], |t| t.to_string())
            .case_insensitive(true)
            .build()
            .unwrap();
        assert!(re.is_match("DR").unwrap());
    }

    #[test]
    fn test_empty_terms_rejected() {
        let result = PatternBuilder::new(Vec::<String>::new(), |t| t.to_string()).build();
        assert!(matches!(result, Err(TtsError::BadPattern { .. })));
    }

    #[test]
    fn test_invalid_fragment_rejected() {
        let result = PatternBuilder::new(["a"], |_| "(unclosed".to_string()).build();
        assert!(matches!(result, Err(TtsError::BadPattern { .. })));
    }
}
