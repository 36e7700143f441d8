//! Text normalization applied before tokenization.
//!
//! Transforms are plain `string -> string` functions composed into an
//! ordered pipeline. The two configurable kinds (pattern-driven and
//! literal substitution) cover the default cases; ad-hoc closures slot
//! into the same list.

use fancy_regex::{Captures, Regex, escape};
use once_cell::sync::Lazy;

use crate::error::Result;
use crate::text::pattern::PatternBuilder;
use crate::text::punct;

/// A text transform in the pre-processing pipeline.
///
/// Implemented for any `Fn(&str) -> String`, so configured pre-processors
/// and ad-hoc functions compose into one ordered list.
pub trait TextTransform: Send + Sync {
    fn apply(&self, text: &str) -> String;
}

impl<F> TextTransform for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn apply(&self, text: &str) -> String {
        self(text)
    }
}

/// Replaces every match of a built alternation pattern with a fixed
/// literal string.
pub struct RegexPreProcessor {
    pattern: Regex,
    repl: String,
}

impl RegexPreProcessor {
    /// Build the pattern from `terms` and `format` (see [`PatternBuilder`]).
    ///
    /// A bad fragment fails here, not during [`run`](Self::run).
    pub fn new<I, S, F>(terms: I, format: F, repl: &str, case_insensitive: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> String,
    {
        let pattern = PatternBuilder::new(terms, format)
            .case_insensitive(case_insensitive)
            .build()?;
        Ok(Self {
            pattern,
            repl: repl.to_string(),
        })
    }

    /// Replace every non-overlapping match, left to right. Characters
    /// outside matches pass through untouched.
    pub fn run(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |_: &Captures| self.repl.clone())
            .into_owned()
    }

    /// Box this pre-processor as a pipeline transform.
    pub fn into_transform(self) -> Box<dyn TextTransform> {
        Box::new(move |text: &str| self.run(text))
    }
}

/// Applies an ordered list of literal (find, replace) pairs.
pub struct SubstitutionPreProcessor {
    pairs: Vec<(String, String)>,
}

impl SubstitutionPreProcessor {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            pairs: pairs
                .iter()
                .map(|(find, repl)| (find.to_string(), repl.to_string()))
                .collect(),
        }
    }

    /// Apply each pair in list order as a whole-text literal replacement.
    ///
    /// Not a simultaneous multi-replace: a later pair sees text already
    /// rewritten by an earlier one.
    pub fn run(&self, text: &str) -> String {
        self.pairs
            .iter()
            .fold(text.to_string(), |acc, (find, repl)| acc.replace(find, repl))
    }

    /// Box this pre-processor as a pipeline transform.
    pub fn into_transform(self) -> Box<dyn TextTransform> {
        Box::new(move |text: &str| self.run(text))
    }
}

static TONE_MARK_SPACER: Lazy<RegexPreProcessor> = Lazy::new(|| {
    RegexPreProcessor::new(
        punct::TONE_MARKS.chars().map(|c| c.to_string()),
        |mark| format!("(?<={})(?! )", escape(mark)),
        " ",
        false,
    )
    .expect("tone mark pattern should compile")
});

static HYPHEN_JOINER: Lazy<RegexPreProcessor> = Lazy::new(|| {
    RegexPreProcessor::new(["-"], |t| format!("{}\n", escape(t)), "", false)
        .expect("hyphen pattern should compile")
});

static NEWLINE_FLATTENER: Lazy<RegexPreProcessor> = Lazy::new(|| {
    RegexPreProcessor::new(["\n"], |t| escape(t).into_owned(), " ", false)
        .expect("newline pattern should compile")
});

static ABBREVIATION_PERIODS: Lazy<RegexPreProcessor> = Lazy::new(|| {
    RegexPreProcessor::new(
        punct::ABBREVIATIONS,
        |abbr| format!(r"(?<=\b{})\.", escape(abbr)),
        "",
        true,
    )
    .expect("abbreviation pattern should compile")
});

static WORD_SUBSTITUTIONS: Lazy<SubstitutionPreProcessor> =
    Lazy::new(|| SubstitutionPreProcessor::new(punct::WORD_SUBS));

/// Add a space after tone-modifying punctuation that has none, so the
/// tokenizer can split there without gluing the next sentence on.
pub fn space_tone_marks(text: &str) -> String {
    TONE_MARK_SPACER.run(text)
}

/// Re-form words cut by an end-of-line hyphen: drop `-<newline>`.
pub fn join_wrapped_words(text: &str) -> String {
    HYPHEN_JOINER.run(text)
}

/// Replace every newline with a single space.
pub fn flatten_newlines(text: &str) -> String {
    NEWLINE_FLATTENER.run(text)
}

/// Drop the period after a known abbreviation so the tokenizer does not
/// read it as a sentence end.
///
/// When the abbreviation is the last word of a sentence this also removes
/// a genuine sentence-ending period; accepted trade-off.
pub fn strip_abbreviation_periods(text: &str) -> String {
    ABBREVIATION_PERIODS.run(text)
}

/// Word-for-word substitutions.
pub fn substitute_words(text: &str) -> String {
    WORD_SUBSTITUTIONS.run(text)
}

/// The default pipeline, in application order.
///
/// Hyphen joining must run before newline flattening or wrapped words
/// would never be detected.
pub fn default_pipeline() -> Vec<Box<dyn TextTransform>> {
    vec![
        Box::new(space_tone_marks),
        Box::new(join_wrapped_words),
        Box::new(flatten_newlines),
        Box::new(strip_abbreviation_periods),
        Box::new(substitute_words),
    ]
}
