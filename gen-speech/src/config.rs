//! gen-speech configuration: persisted defaults for voice selection.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenSpeechConfig {
    /// IETF language tag to speak in
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Voice gender: "f" or "m"
    #[serde(default = "default_gender")]
    pub gender: String,

    /// Reading speed: "slow", "normal", "fast" or "-5".."5"
    #[serde(default = "default_speed")]
    pub speed: String,

    /// Top-level domain of the API host
    #[serde(default = "default_tld")]
    pub tld: String,
}

fn default_lang() -> String {
    "ko".to_string()
}

fn default_gender() -> String {
    "f".to_string()
}

fn default_speed() -> String {
    "normal".to_string()
}

fn default_tld() -> String {
    "com".to_string()
}

impl Default for GenSpeechConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            gender: default_gender(),
            speed: default_speed(),
            tld: default_tld(),
        }
    }
}

impl GenSpeechConfig {
    /// Config file path: ~/.config/gen-speech/config.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("gen-speech")
            .join("config.toml"))
    }

    /// Load config from file, returning defaults if the file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: GenSpeechConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GenSpeechConfig::default();
        assert_eq!(config.lang, "ko");
        assert_eq!(config.gender, "f");
        assert_eq!(config.speed, "normal");
        assert_eq!(config.tld, "com");
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
lang = "en"
gender = "m"
speed = "fast"
"#;
        let config: GenSpeechConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.lang, "en");
        assert_eq!(config.gender, "m");
        assert_eq!(config.speed, "fast");
        assert_eq!(config.tld, "com");
    }

    #[test]
    fn test_parse_empty_config() {
        let config: GenSpeechConfig = toml::from_str("").unwrap();
        assert_eq!(config.lang, "ko");
        assert_eq!(config.speed, "normal");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = GenSpeechConfig {
            lang: "ja".to_string(),
            gender: "m".to_string(),
            speed: "2".to_string(),
            tld: "net".to_string(),
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: GenSpeechConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.lang, config.lang);
        assert_eq!(parsed.speed, config.speed);
    }
}
