//! Direction finder.
//!
//! Looks for a direction keyword ("richtung", "nach", "toward", ...)
//! followed by a station name, and masks the whole phrase so the station
//! finder cannot pick the same station up again as the sighting location.

use std::collections::HashSet;
use std::ops::Range;

use crate::domain::StationId;
use crate::reference::ReferenceData;

use super::config::ExtractorConfig;
use super::masked::MaskedText;
use super::normalize::normalize;
use super::station::alias_at;

/// A direction phrase located in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionMatch {
    pub station: StationId,
    /// Keyword start to station alias end.
    pub span: Range<usize>,
}

/// Direction keywords prepared for matching.
#[derive(Debug, Clone)]
pub struct DirectionFinder {
    /// Normalized keywords, longest first.
    keywords: Vec<String>,
    window: usize,
    /// Normalized tokens that may be skipped inside the window.
    fillers: HashSet<String>,
}

impl DirectionFinder {
    pub fn new(config: &ExtractorConfig) -> Self {
        let mut keywords: Vec<String> = config
            .direction_keywords
            .iter()
            .map(|k| normalize(k))
            .filter(|k| !k.is_empty())
            .collect();
        keywords.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        keywords.dedup();

        let fillers = config
            .direction_fillers
            .iter()
            .map(|f| normalize(f))
            .filter(|f| !f.is_empty())
            .collect();

        Self {
            keywords,
            window: config.direction_window,
            fillers,
        }
    }

    /// Find the direction station and return the text with its phrase masked.
    ///
    /// When no keyword is followed by a station within the window, the
    /// direction is `None` and the text comes back unchanged.
    pub fn find(&self, text: &MaskedText, reference: &ReferenceData) -> (Option<StationId>, MaskedText) {
        match self.find_match(text, reference) {
            Some(found) => {
                let residual = text.mask(found.span.clone());
                (Some(found.station), residual)
            }
            None => (None, text.clone()),
        }
    }

    /// Locate the first keyword that is followed by a station.
    ///
    /// Only configured filler tokens may sit between the two, at most
    /// `direction_window` of them.
    pub fn find_match(&self, text: &MaskedText, reference: &ReferenceData) -> Option<DirectionMatch> {
        let len = text.text().len();

        for keyword in self.keyword_hits(text) {
            let mut cursor = keyword.end;
            for _ in 0..=self.window {
                // `cursor` sits on the space before the next token.
                let token_start = cursor + 1;
                if token_start >= len {
                    break;
                }

                if let Some(alias) = alias_at(text, token_start, reference) {
                    return Some(DirectionMatch {
                        station: reference.stations()[alias.station].id.clone(),
                        span: keyword.start..token_start + alias.alias.len(),
                    });
                }

                let token_end = text.text()[token_start..]
                    .find(' ')
                    .map_or(len, |offset| token_start + offset);
                if !self.fillers.contains(&text.text()[token_start..token_end]) {
                    break;
                }
                cursor = token_end;
            }
        }

        None
    }

    /// Keyword occurrences in text order; at a shared start the longer keyword wins.
    fn keyword_hits(&self, text: &MaskedText) -> Vec<Range<usize>> {
        let mut hits: Vec<Range<usize>> = self
            .keywords
            .iter()
            .flat_map(|keyword| {
                text.find_token_matches(keyword)
                    .map(move |start| start..start + keyword.len())
            })
            .collect();
        hits.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| b.end.cmp(&a.end)));
        hits.dedup_by_key(|hit| hit.start);
        hits
    }
}
