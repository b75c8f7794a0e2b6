//! Line finder.

use crate::domain::LineId;
use crate::reference::ReferenceData;

/// Where a line was mentioned in normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMention {
    pub line: LineId,
    /// Byte offset of the match.
    pub start: usize,
    /// Byte length of the match.
    pub len: usize,
}

/// Find the first line mentioned in normalized text.
///
/// The earliest match wins. Matches starting at the same offset prefer
/// the longer text, then the line listed first in the reference data.
pub fn find_line(text: &str, reference: &ReferenceData) -> Option<LineId> {
    find_line_mention(text, reference).map(|m| m.line)
}

/// Like [`find_line`], but also reports where the line was found.
pub fn find_line_mention(text: &str, reference: &ReferenceData) -> Option<LineMention> {
    reference
        .line_patterns()
        .iter()
        .filter_map(|pattern| {
            pattern
                .regex
                .find(text)
                .map(|m| (m.start(), m.len(), pattern.line))
        })
        .min_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| b.1.cmp(&a.1))
                .then_with(|| a.2.cmp(&b.2))
        })
        .map(|(start, len, idx)| LineMention {
            line: reference.lines()[idx].id.clone(),
            start,
            len,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fixtures::network;
    use crate::extract::normalize;

    fn line_in(text: &str) -> Option<String> {
        find_line(&normalize(text), &network()).map(|l| l.to_string())
    }

    #[test]
    fn finds_plain_code() {
        assert_eq!(line_in("Kontrolle in der U8 am Kotti"), Some("U8".into()));
    }

    #[test]
    fn finds_spaced_and_lowercase_variants() {
        assert_eq!(line_in("s 41 voll mit kontrolleuren"), Some("S41".into()));
        assert_eq!(line_in("u7!!"), Some("U7".into()));
    }

    #[test]
    fn finds_aliases() {
        assert_eq!(line_in("Ringbahn Höhe Tempelhof"), Some("S41".into()));
        assert_eq!(line_in("ring bahn Höhe Tempelhof"), Some("S41".into()));
    }

    #[test]
    fn first_mention_wins() {
        assert_eq!(line_in("U7 oder U8, keine Ahnung"), Some("U7".into()));
        assert_eq!(line_in("U8 oder U7, keine Ahnung"), Some("U8".into()));
    }

    #[test]
    fn ignores_codes_inside_words() {
        assert_eq!(line_in("bu8 s410 u77"), None);
    }

    #[test]
    fn nothing_found() {
        assert_eq!(line_in("zwei Kontrolleure am Ausgang"), None);
        assert_eq!(line_in(""), None);
    }

    #[test]
    fn reports_match_position() {
        let text = normalize("jetzt S 41 Tempelhof");
        let mention = find_line_mention(&text, &network()).unwrap();
        assert_eq!(mention.line.as_str(), "S41");
        assert_eq!(mention.start, 6);
        assert_eq!(&text[mention.start..mention.start + mention.len], "s 41");
    }
}
