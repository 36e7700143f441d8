//! Async HTTP client for the dictionary voice endpoint.
//!
//! One GET per text fragment; fragment audio is concatenated in chunk
//! order, which the endpoint itself does not guarantee across calls.

use std::path::Path;
use std::time::Duration;

use crate::endpoint;
use crate::error::{Result, TtsError};
use crate::text::{LengthMeasure, Segmenter};
use crate::voice::{self, Gender, Speed};

const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Synthesis options: language, voice gender, read speed, endpoint domain.
#[derive(Debug, Clone)]
pub struct SpeechOptions {
    pub lang: String,
    pub gender: Gender,
    pub speed: Speed,
    pub tld: String,
    pub lang_check: bool,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            lang: "ko".to_string(),
            gender: Gender::Female,
            speed: Speed::NORMAL,
            tld: "com".to_string(),
            lang_check: true,
        }
    }
}

impl SpeechOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language (IETF tag, lowercased).
    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = lang.to_lowercase();
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    /// Set the top-level domain of the endpoint host.
    pub fn with_tld(mut self, tld: &str) -> Self {
        self.tld = tld.to_string();
        self
    }

    /// Enable or disable strict language tag checking.
    pub fn with_lang_check(mut self, check: bool) -> Self {
        self.lang_check = check;
        self
    }
}

/// Client for the remote speech endpoint.
pub struct SpeechClient {
    client: reqwest::Client,
    options: SpeechOptions,
    speaker: &'static str,
    segmenter: Segmenter,
}

impl std::fmt::Debug for SpeechClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechClient")
            .field("options", &self.options)
            .field("speaker", &self.speaker)
            .finish_non_exhaustive()
    }
}

impl SpeechClient {
    /// Validate the options and build a client.
    ///
    /// Language and speaker problems surface here, before any request.
    pub fn new(options: SpeechOptions) -> Result<Self> {
        if options.lang_check && !voice::is_supported(&options.lang) {
            return Err(TtsError::UnsupportedLanguage(options.lang.clone()));
        }
        let speaker = voice::speaker_for(&options.lang, options.gender)?;
        let segmenter =
            Segmenter::new(endpoint::MAX_CHARS)?.with_measure(LengthMeasure::EncodedQuery);

        Ok(Self {
            client: reqwest::Client::new(),
            options,
            speaker,
            segmenter,
        })
    }

    pub fn speaker(&self) -> &str {
        self.speaker
    }

    /// Split `text` into the fragments that will be requested, in order.
    pub fn segment(&self, text: &str) -> Result<Vec<String>> {
        self.segmenter.segment(text)
    }

    /// Fetch the mp3 audio for one text fragment, retrying transient
    /// upstream failures a bounded number of times.
    pub async fn fetch(&self, fragment: &str) -> Result<Vec<u8>> {
        let url = endpoint::fragment_url(
            &self.options.tld,
            fragment,
            self.speaker,
            self.options.speed,
        );

        let mut attempt = 1;
        loop {
            match self.request(&url).await {
                Ok(bytes) => return Ok(bytes),
                Err(err) if attempt < MAX_ATTEMPTS && is_transient(&err) => {
                    log::warn!("attempt {attempt} failed: {err}; retrying");
                    tokio::time::sleep(RETRY_DELAY * attempt).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Synthesize `text`, concatenating fragment audio in chunk order.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let chunks = self.segment(text)?;
        log::debug!("fragments: {}", chunks.len());

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let bytes = self.fetch(chunk).await?;
            log::debug!("fragment {idx}: {} bytes", bytes.len());
            audio.extend_from_slice(&bytes);
        }
        Ok(audio)
    }

    /// Synthesize and write the mp3 to `path`.
    pub async fn save(&self, text: &str, path: impl AsRef<Path>) -> Result<()> {
        let audio = self.synthesize(text).await?;
        std::fs::write(path, audio)?;
        Ok(())
    }

    async fn request(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .header("Referer", endpoint::REFERER)
            .header("User-Agent", endpoint::USER_AGENT)
            .send()
            .await
            .map_err(|_| TtsError::Connection {
                host: endpoint::base_url(&self.options.tld),
            })?;

        let status = response.status();
        log::debug!("status {status} for {url}");
        if !status.is_success() {
            return Err(self.classify_status(status));
        }

        let bytes = response.bytes().await.map_err(|_| TtsError::Connection {
            host: endpoint::base_url(&self.options.tld),
        })?;
        Ok(bytes.to_vec())
    }

    /// Attach a probable cause to a bad response, from known endpoint
    /// behavior.
    fn classify_status(&self, status: reqwest::StatusCode) -> TtsError {
        let code = status.as_u16();
        let cause = if code == 403 {
            "Bad token or upstream API changes".to_string()
        } else if code == 404 && !self.options.lang_check {
            format!("Unsupported language '{}'", self.options.lang)
        } else if status.is_server_error() {
            "Upstream API error. Try again later.".to_string()
        } else {
            "Unknown".to_string()
        };

        TtsError::Api {
            status: code,
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            cause,
        }
    }
}

fn is_transient(err: &TtsError) -> bool {
    match err {
        TtsError::Api { status, .. } => *status >= 500,
        TtsError::Connection { .. } => true,
        _ => false,
    }
}
