use thiserror::Error;

#[derive(Error, Debug)]
pub enum TtsError {
    #[error("No text to speak")]
    EmptyInput,

    #[error("Invalid pattern {pattern:?}: {message}")]
    BadPattern { pattern: String, message: String },

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("No speaker for language '{lang}'. Available languages: {available}")]
    UnknownSpeaker { lang: String, available: String },

    #[error(
        "Expected speed in 'slow', 'normal', 'fast' or an integer between -5 (fast) and 5 (slow). Got '{0}'"
    )]
    InvalidSpeed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{status} ({reason}) from TTS API. Probable cause: {cause}")]
    Api {
        status: u16,
        reason: String,
        cause: String,
    },

    #[error("Failed to connect. Probable cause: host '{host}' is not reachable")]
    Connection { host: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TtsError>;
