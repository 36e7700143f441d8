//! Text segmentation for TTS: pre-processing, punctuation tokenization,
//! and length-bounded chunking.

pub mod chunker;
pub mod pattern;
pub mod pre_process;
pub mod punct;
pub mod tokenizer;

pub use chunker::{LengthMeasure, clean_tokens, minimize};
pub use pattern::PatternBuilder;
pub use pre_process::{RegexPreProcessor, SubstitutionPreProcessor, TextTransform, default_pipeline};
pub use tokenizer::{Tokenizer, TokenizerCase};

use crate::error::{Result, TtsError};

/// Splits input text into ordered chunks that each fit the transport limit.
///
/// Pure and stateless once built: `segment` is a deterministic transform
/// with no I/O, safe to call concurrently.
pub struct Segmenter {
    pre_processors: Vec<Box<dyn TextTransform>>,
    tokenizer: Tokenizer,
    max_length: usize,
    measure: LengthMeasure,
}

impl Segmenter {
    /// Default pipeline and tokenizer with the given chunk limit, measured
    /// in raw characters.
    pub fn new(max_length: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(TtsError::Config(
                "maximum chunk length must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            pre_processors: default_pipeline(),
            tokenizer: Tokenizer::default_cases()?,
            max_length,
            measure: LengthMeasure::default(),
        })
    }

    /// Measure lengths with `measure` instead of raw character count.
    pub fn with_measure(mut self, measure: LengthMeasure) -> Self {
        self.measure = measure;
        self
    }

    /// Replace the pre-processing pipeline.
    pub fn with_pre_processors(mut self, pre_processors: Vec<Box<dyn TextTransform>>) -> Self {
        self.pre_processors = pre_processors;
        self
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Segment `text` into ordered chunks.
    ///
    /// Pre-processed text that already fits is returned whole; otherwise the
    /// text is tokenized at punctuation and every oversized token is
    /// minimized at word boundaries. Chunk order follows text order, and no
    /// content is dropped beyond whitespace normalization.
    pub fn segment(&self, text: &str) -> Result<Vec<String>> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TtsError::EmptyInput);
        }

        let mut processed = text.to_string();
        for pp in &self.pre_processors {
            processed = pp.apply(&processed);
        }

        if self.measure.measure(&processed) <= self.max_length {
            let chunks = clean_tokens([processed]);
            return if chunks.is_empty() {
                Err(TtsError::EmptyInput)
            } else {
                Ok(chunks)
            };
        }

        let tokens = self.tokenizer.run(&processed);
        log::debug!("tokens: {}", tokens.len());

        let mut chunks = Vec::new();
        for token in tokens {
            if self.measure.measure(&token) > self.max_length {
                chunks.extend(minimize(&token, " ", self.max_length, self.measure));
            } else {
                chunks.push(token);
            }
        }

        let chunks = clean_tokens(chunks);
        log::debug!("chunks: {}", chunks.len());
        if chunks.is_empty() {
            Err(TtsError::EmptyInput)
        } else {
            Ok(chunks)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_fast_path() {
        let segmenter = Segmenter::new(100).unwrap();
        let chunks = segmenter.segment("Hello world. How are you?").unwrap();
        assert_eq!(chunks, vec!["Hello world. How are you?"]);
    }

    #[test]
    fn test_empty_input() {
        let segmenter = Segmenter::new(100).unwrap();
        assert!(matches!(segmenter.segment(""), Err(TtsError::EmptyInput)));
        assert!(matches!(
            segmenter.segment("   \n\n  "),
            Err(TtsError::EmptyInput)
        ));
    }

    #[test]
    fn test_zero_max_length_rejected() {
        assert!(matches!(Segmenter::new(0), Err(TtsError::Config(_))));
    }

    #[test]
    fn test_long_sentence_splits_at_commas() {
        // ~250 characters, a comma roughly every 20
        let clause = "seventeen letters xx";
        let text = (0..12).map(|_| clause).collect::<Vec<_>>().join(", ");
        let segmenter = Segmenter::new(100).unwrap();
        let chunks = segmenter.segment(&text).unwrap();

        assert!(chunks.len() > 1);
        for chunk in &chunks[..chunks.len() - 1] {
            assert!(chunk.ends_with(','), "expected comma boundary: {chunk:?}");
        }
        for chunk in &chunks {
            assert!(LengthMeasure::Chars.measure(chunk) <= 100);
        }
    }

    #[test]
    fn test_chunks_reconstruct_content() {
        let text = "One sentence here. Another, with a comma! And a third one?";
        let segmenter = Segmenter::new(20).unwrap();
        let chunks = segmenter.segment(text).unwrap();

        let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        assert_eq!(strip(&chunks.concat()), strip(text));
    }

    #[test]
    fn test_oversized_token_is_minimized() {
        let text = "word ".repeat(60); // 300 chars, no punctuation at all
        let segmenter = Segmenter::new(50).unwrap();
        let chunks = segmenter.segment(&text).unwrap();

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(LengthMeasure::Chars.measure(chunk) <= 50);
            assert!(!chunk.trim().is_empty());
        }
    }

    #[test]
    fn test_encoded_measure_drives_fit() {
        // fits by character count but not once percent-encoded
        let text = "안녕하세요 ".repeat(10);
        let segmenter = Segmenter::new(100)
            .unwrap()
            .with_measure(LengthMeasure::EncodedQuery);
        let chunks = segmenter.segment(&text).unwrap();

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(LengthMeasure::EncodedQuery.measure(chunk) <= 100);
        }
    }

    #[test]
    fn test_custom_pipeline_replaces_default() {
        let segmenter = Segmenter::new(100)
            .unwrap()
            .with_pre_processors(vec![Box::new(|t: &str| t.to_uppercase())]);
        let chunks = segmenter.segment("quiet words").unwrap();
        assert_eq!(chunks, vec!["QUIET WORDS"]);
    }
}
