//! Languages, speakers, and read speed for the dictionary voice endpoint.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TtsError};

/// Supported languages: IETF tag and English display name.
const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
];

/// Voice identifiers per language: (tag, female, male).
const SPEAKERS: &[(&str, &str, &str)] = &[
    ("en", "clara", "matt"),
    ("es", "carmen", "jose"),
    ("ja", "nsayuri", "shinji"),
    ("ko", "kyuri", "jinho"),
    ("zh", "meimei", "liangliang"),
];

/// The supported language tags and names, in tag order.
pub fn languages() -> &'static [(&'static str, &'static str)] {
    LANGUAGES
}

pub fn is_supported(lang: &str) -> bool {
    LANGUAGES.iter().any(|(tag, _)| *tag == lang)
}

/// The endpoint voice identifier for a language and gender.
pub fn speaker_for(lang: &str, gender: Gender) -> Result<&'static str> {
    let &(_, female, male) = SPEAKERS
        .iter()
        .find(|(tag, _, _)| *tag == lang)
        .ok_or_else(|| TtsError::UnknownSpeaker {
            lang: lang.to_string(),
            available: SPEAKERS
                .iter()
                .map(|(tag, _, _)| *tag)
                .collect::<Vec<_>>()
                .join(", "),
        })?;

    Ok(match gender {
        Gender::Female => female,
        Gender::Male => male,
    })
}

/// Voice gender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl FromStr for Gender {
    type Err = TtsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "f" | "female" => Ok(Self::Female),
            "m" | "male" => Ok(Self::Male),
            other => Err(TtsError::Config(format!(
                "Unknown gender '{other}'. Expected 'f' or 'm'."
            ))),
        }
    }
}

/// Read speed: -5 (fast) through 5 (slow).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Speed(i8);

impl Speed {
    pub const SLOW: Speed = Speed(5);
    pub const NORMAL: Speed = Speed(0);
    pub const FAST: Speed = Speed(-5);

    pub fn new(value: i8) -> Result<Self> {
        if (-5..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TtsError::InvalidSpeed(value.to_string()))
        }
    }

    pub fn value(self) -> i8 {
        self.0
    }
}

impl FromStr for Speed {
    type Err = TtsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "slow" => Ok(Self::SLOW),
            "normal" => Ok(Self::NORMAL),
            "fast" => Ok(Self::FAST),
            other => other
                .parse::<i8>()
                .ok()
                .and_then(|v| Self::new(v).ok())
                .ok_or_else(|| TtsError::InvalidSpeed(s.to_string())),
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages_listed() {
        assert!(is_supported("ko"));
        assert!(is_supported("en"));
        assert!(!is_supported("xx"));
        assert_eq!(languages().len(), 5);
    }

    #[test]
    fn test_speaker_lookup() {
        assert_eq!(speaker_for("ko", Gender::Female).unwrap(), "kyuri");
        assert_eq!(speaker_for("ko", Gender::Male).unwrap(), "jinho");
        assert_eq!(speaker_for("en", Gender::Female).unwrap(), "clara");
    }

    #[test]
    fn test_speaker_unknown_language() {
        let err = speaker_for("xx", Gender::Female).unwrap_err();
        assert!(matches!(err, TtsError::UnknownSpeaker { .. }));
        assert!(err.to_string().contains("ko"));
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert!("x".parse::<Gender>().is_err());
    }

    #[test]
    fn test_speed_named_values() {
        assert_eq!("slow".parse::<Speed>().unwrap(), Speed::SLOW);
        assert_eq!("normal".parse::<Speed>().unwrap(), Speed::NORMAL);
        assert_eq!("fast".parse::<Speed>().unwrap(), Speed::FAST);
        assert_eq!(Speed::SLOW.value(), 5);
        assert_eq!(Speed::FAST.value(), -5);
    }

    #[test]
    fn test_speed_integer_values() {
        assert_eq!("3".parse::<Speed>().unwrap().value(), 3);
        assert_eq!("-5".parse::<Speed>().unwrap().value(), -5);
        assert!("6".parse::<Speed>().is_err());
        assert!("quick".parse::<Speed>().is_err());
    }
}
