//! Punctuation classes and spoken-word fixups driving the default
//! pre-processors and tokenizer cases.

/// Tone-modifying punctuation. Splitting right after these keeps the
/// intonation they give the preceding clause.
pub const TONE_MARKS: &str = "?!？！";

/// Sentence and clause punctuation handled by the second tokenizer case.
pub const PERIOD_COMMA: &str = ".,";

pub const COLON: &str = ":";

/// Every punctuation character some tokenizer case splits after.
pub const ALL_PUNCTUATION: &str = "?!？！.,¡()[]¿…‥،;:—。，、：\n";

/// Abbreviations the voice speaks correctly without their trailing period.
pub const ABBREVIATIONS: &[&str] = &["dr", "jr", "mr", "mrs", "ms", "msgr", "prof", "sr", "st"];

/// Word-for-word substitutions for words the voice mispronounces or
/// the tokenizer would split badly.
pub const WORD_SUBS: &[(&str, &str)] = &[("M.", "Monsieur")];
