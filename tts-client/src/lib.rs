//! TTS client library for the gen-speech workspace
//!
//! Turns arbitrary-length text into mp3 audio through a remote speech
//! endpoint that only accepts short payloads per call:
//! - a composable pre-processing pipeline normalizes the text
//! - a punctuation-aware tokenizer splits it at sensible boundaries
//! - a greedy minimizer bounds every chunk by its transport length
//! - an async client fetches each fragment and concatenates the audio

pub mod client;
pub mod endpoint;
pub mod error;
pub mod text;
pub mod voice;

pub use client::{SpeechClient, SpeechOptions};
pub use error::{Result, TtsError};
pub use text::{LengthMeasure, Segmenter};
pub use voice::{Gender, Speed, languages};
