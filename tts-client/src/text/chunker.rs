//! Length accounting, token cleaning, and length-bounded minimization of
//! oversized tokens.

/// How a string's length is measured against the chunk limit.
///
/// The transport embeds each chunk in a URL query parameter, where
/// non-ASCII and reserved characters expand under percent-encoding; a
/// chunk that looks short by character count can still overflow there.
/// Every size comparison in the pipeline goes through one of these
/// measures, never through a raw byte count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LengthMeasure {
    /// Raw character count.
    #[default]
    Chars,
    /// Byte length once percent-encoded into a URL query parameter.
    EncodedQuery,
}

impl LengthMeasure {
    pub fn measure(&self, text: &str) -> usize {
        match self {
            LengthMeasure::Chars => text.chars().count(),
            LengthMeasure::EncodedQuery => urlencoding::encode(text).len(),
        }
    }
}

/// Trim every token and drop the empty ones. Idempotent.
pub fn clean_tokens<I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    tokens
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Split one oversized token into ordered pieces that each fit
/// `max_length` under `measure`.
///
/// Greedy: each step emits the largest prefix that still fits, ending at a
/// `delimiter` occurrence when one allows it, falling back to a plain
/// space when the delimiter is something coarser, and hard-splitting at a
/// character boundary as a last resort. Always terminates: every step
/// consumes at least one character.
pub fn minimize(token: &str, delimiter: &str, max_length: usize, measure: LengthMeasure) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = token;

    while !rest.is_empty() {
        // drop a delimiter left at the front by the previous split
        if !delimiter.is_empty() {
            if let Some(stripped) = rest.strip_prefix(delimiter) {
                rest = stripped;
                continue;
            }
        }

        if measure.measure(rest) <= max_length {
            pieces.push(rest.to_string());
            break;
        }

        let split_at = best_split(rest, delimiter, max_length, measure)
            .or_else(|| {
                if delimiter != " " {
                    best_split(rest, " ", max_length, measure)
                } else {
                    None
                }
            })
            .unwrap_or_else(|| hard_split_point(rest, max_length, measure));

        pieces.push(rest[..split_at].to_string());
        rest = &rest[split_at..];
    }

    pieces
}

/// Largest prefix boundary at a delimiter occurrence that still fits, if
/// any occurrence allows a non-empty fitting prefix.
fn best_split(text: &str, delimiter: &str, max_length: usize, measure: LengthMeasure) -> Option<usize> {
    if delimiter.is_empty() {
        return None;
    }
    let mut best = None;
    for (idx, _) in text.match_indices(delimiter) {
        if idx == 0 {
            continue;
        }
        if measure.measure(&text[..idx]) <= max_length {
            best = Some(idx);
        } else {
            // prefixes only grow from here
            break;
        }
    }
    best
}

/// Largest character boundary whose prefix fits; at least one character
/// when even a single character exceeds the limit, so progress is made.
fn hard_split_point(text: &str, max_length: usize, measure: LengthMeasure) -> usize {
    let mut fit_end = 0;
    for (idx, ch) in text.char_indices() {
        let end = idx + ch.len_utf8();
        if measure.measure(&text[..end]) <= max_length {
            fit_end = end;
        } else {
            break;
        }
    }

    if fit_end == 0 {
        text.chars().next().map(char::len_utf8).unwrap_or(0)
    } else {
        fit_end
    }
}
