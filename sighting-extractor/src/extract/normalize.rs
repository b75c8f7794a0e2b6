//! Text normalization and the noise guard.
//!
//! Normalized text is lowercase, has diacritics folded to their base
//! letters, and consists of alphanumeric tokens separated by single
//! spaces. All alias matching happens on this form, so reference aliases
//! are run through [`normalize`] as well.

use super::config::ExtractorConfig;

/// Normalize raw message text for keyword search.
///
/// # Examples
///
/// ```
/// use sighting_extractor::extract::normalize;
///
/// assert_eq!(normalize("  U8 -> Hermannstraße!! "), "u8 hermannstrasse");
/// assert_eq!(normalize("Schönleinstr."), "schonleinstr");
/// assert_eq!(normalize("???"), "");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Pending separator, emitted lazily so runs of punctuation collapse.
    let mut gap = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if is_combining_mark(c) {
            // Decomposed input: the base letter was already pushed.
            continue;
        }
        if let Some(folded) = fold(c) {
            push_token_chars(&mut out, &mut gap, folded);
        } else if c.is_alphanumeric() {
            let mut buf = [0u8; 4];
            push_token_chars(&mut out, &mut gap, c.encode_utf8(&mut buf));
        } else {
            gap = true;
        }
    }

    out
}

fn push_token_chars(out: &mut String, gap: &mut bool, chars: &str) {
    if *gap && !out.is_empty() {
        out.push(' ');
    }
    *gap = false;
    out.push_str(chars);
}

/// Map a lowercase letter carrying a diacritic to its plain spelling.
fn fold(c: char) -> Option<&'static str> {
    let folded = match c {
        'ä' | 'à' | 'á' | 'â' | 'ã' | 'å' => "a",
        'ö' | 'ò' | 'ó' | 'ô' | 'õ' | 'ø' => "o",
        'ü' | 'ù' | 'ú' | 'û' => "u",
        'é' | 'è' | 'ê' | 'ë' => "e",
        'í' | 'ì' | 'î' | 'ï' => "i",
        'ç' => "c",
        'ñ' => "n",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        _ => return None,
    };
    Some(folded)
}

/// Combining diacritical marks, as found in decomposed (NFD) text.
fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

/// Whether a message should skip extraction entirely.
///
/// Questions ("is anyone checking on the U8?") and promotional text
/// almost never describe a sighting, and scanning them produces false
/// positives.
pub fn is_noise(raw: &str, config: &ExtractorConfig) -> bool {
    if raw.contains('?') {
        return true;
    }

    let lowered = raw.to_lowercase();
    config
        .spam_phrases
        .iter()
        .map(|phrase| phrase.trim().to_lowercase())
        .filter(|phrase| !phrase.is_empty())
        .any(|phrase| lowered.contains(&phrase))
}

/// Byte offsets of every occurrence of `needle` in normalized `text`
/// that starts and ends on a token boundary.
///
/// Overlapping occurrences are all reported.
pub(crate) fn token_matches<'a>(text: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    let mut from = 0;
    std::iter::from_fn(move || {
        if needle.is_empty() {
            return None;
        }
        while from <= text.len() {
            let found = from + text.get(from..)?.find(needle)?;
            // Resume after the first character of this hit.
            from = found + text[found..].chars().next().map_or(1, char::len_utf8);
            if is_token_match(text, found, needle.len()) {
                return Some(found);
            }
        }
        None
    })
}

/// Whether `text[start..start + len]` is bounded by spaces or the text edges.
pub(crate) fn is_token_match(text: &str, start: usize, len: usize) -> bool {
    let end = start + len;
    let bytes = text.as_bytes();
    let starts_clean = start == 0 || bytes.get(start - 1) == Some(&b' ');
    let ends_clean = end == text.len() || bytes.get(end) == Some(&b' ');
    starts_clean && ends_clean && end <= text.len()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalizing twice changes nothing
        #[test]
        fn idempotent(s in "\\PC{0,60}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Output has no leading, trailing or doubled spaces
        #[test]
        fn whitespace_is_collapsed(s in "\\PC{0,60}") {
            let out = normalize(&s);
            prop_assert!(!out.starts_with(' '));
            prop_assert!(!out.ends_with(' '));
            prop_assert!(!out.contains("  "));
        }

        /// Combining marks after each letter normalize like the bare letters
        #[test]
        fn decomposed_matches_plain(s in "[a-zA-Z ]{0,30}", mark in 0x0300u32..=0x036F) {
            let mark = char::from_u32(mark).unwrap();
            let decomposed: String = s
                .chars()
                .flat_map(|c| if c.is_alphabetic() { vec![c, mark] } else { vec![c] })
                .collect();
            prop_assert_eq!(normalize(&decomposed), normalize(&s));
        }

        /// Any text with a question mark is noise
        #[test]
        fn question_marks_always_noise(prefix in "\\PC{0,30}", suffix in "\\PC{0,30}") {
            let text = format!("{prefix}?{suffix}");
            prop_assert!(is_noise(&text, &ExtractorConfig::default()));
        }
    }
}
