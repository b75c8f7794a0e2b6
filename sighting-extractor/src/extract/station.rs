//! Station finder.

use crate::domain::{SightingReport, StationId};
use crate::reference::{ReferenceData, StationAlias};

use super::masked::MaskedText;

/// A station alias found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCandidate {
    /// Index into `ReferenceData::stations`.
    pub station: usize,
    /// Byte offset of the alias in the normalized text.
    pub start: usize,
    /// Byte length of the matched alias.
    pub len: usize,
}

/// Every unmasked, token-bounded alias occurrence in the text.
pub fn station_candidates(text: &MaskedText, reference: &ReferenceData) -> Vec<StationCandidate> {
    reference
        .station_aliases()
        .iter()
        .flat_map(|alias| {
            text.find_token_matches(&alias.alias)
                .map(move |start| StationCandidate {
                    station: alias.station,
                    start,
                    len: alias.alias.len(),
                })
        })
        .collect()
}

/// Pick the single best station mentioned in the residual text.
///
/// If the report already names a line, candidates on that line are
/// preferred; stations elsewhere only count when none are on it. Among
/// the remaining candidates the longest alias wins, then the earliest
/// mention, then reference order.
pub fn find_station(
    text: &MaskedText,
    report: &SightingReport,
    reference: &ReferenceData,
) -> Option<StationId> {
    let candidates = station_candidates(text, reference);

    let on_line: Vec<&StationCandidate> = match &report.line {
        Some(line) => candidates
            .iter()
            .filter(|c| reference.stations()[c.station].serves(line))
            .collect(),
        None => Vec::new(),
    };

    let pool: Vec<&StationCandidate> = if on_line.is_empty() {
        candidates.iter().collect()
    } else {
        on_line
    };

    pool.into_iter()
        .min_by(|a, b| {
            b.len
                .cmp(&a.len)
                .then_with(|| a.start.cmp(&b.start))
                .then_with(|| a.station.cmp(&b.station))
        })
        .map(|c| reference.stations()[c.station].id.clone())
}

/// The longest alias starting exactly at `start`, if any.
pub(crate) fn alias_at<'r>(
    text: &MaskedText,
    start: usize,
    reference: &'r ReferenceData,
) -> Option<&'r StationAlias> {
    reference
        .station_aliases()
        .iter()
        .find(|alias| text.matches_at(start, &alias.alias))
}
