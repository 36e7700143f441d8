//! URL construction for the dictionary voice endpoint.

use crate::voice::Speed;

/// Maximum effective characters the endpoint accepts per request, measured
/// as the percent-encoded length of the `text` query parameter.
pub const MAX_CHARS: usize = 100;

pub(crate) const REFERER: &str = "http://papago.naver.com/";
pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/47.0.2526.106 Safari/537.36";

/// Base URL for the given top-level domain.
pub fn base_url(tld: &str) -> String {
    format!("https://dict.naver.{tld}/api/nvoice")
}

/// Full URL for one text fragment.
pub fn fragment_url(tld: &str, text: &str, speaker: &str, speed: Speed) -> String {
    format!(
        "{}?service=dictionary&speech_fmt=mp3&text={}&speaker={}&speed={}",
        base_url(tld),
        urlencoding::encode(text),
        speaker,
        speed.value()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        assert_eq!(base_url("com"), "https://dict.naver.com/api/nvoice");
        assert_eq!(base_url("net"), "https://dict.naver.net/api/nvoice");
    }

    #[test]
    fn test_fragment_url_encodes_text() {
        let url = fragment_url("com", "hello world", "kyuri", Speed::NORMAL);
        assert_eq!(
            url,
            "https://dict.naver.com/api/nvoice?service=dictionary&speech_fmt=mp3\
             &text=hello%20world&speaker=kyuri&speed=0"
        );
    }

    #[test]
    fn test_fragment_url_non_ascii() {
        let url = fragment_url("com", "안녕", "kyuri", Speed::SLOW);
        assert!(url.contains("text=%EC%95%88%EB%85%95"));
        assert!(url.ends_with("speed=5"));
    }
}
