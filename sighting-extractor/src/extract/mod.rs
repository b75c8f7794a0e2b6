//! Extraction engine.
//!
//! Turns one free-text message into a [`SightingReport`] by running the
//! finders in a fixed order:
//!
//! 1. noise guard (questions, spam) short-circuits everything
//! 2. line finder on the normalized text
//! 3. direction finder, which masks the matched phrase
//! 4. station finder on the masked text, preferring stations on the line
//! 5. cross verification, only if something was found
//!
//! The order matters: the station finder must not see the direction
//! phrase, and it needs the line to disambiguate.

mod config;
mod direction;
mod line;
mod masked;
mod normalize;
mod station;
mod verify;

#[cfg(test)]
pub(crate) mod fixtures;

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Extraction, SightingReport};
use crate::reference::ReferenceData;

pub use config::ExtractorConfig;
pub use direction::{DirectionFinder, DirectionMatch};
pub use line::{LineMention, find_line, find_line_mention};
pub use masked::MaskedText;
pub use normalize::{is_noise, normalize};
pub use station::{StationCandidate, find_station, station_candidates};
pub use verify::{Verification, verify};

/// Stateless extractor over shared reference data.
///
/// Cheap to share across threads; `extract` takes `&self` and touches no
/// mutable state.
#[derive(Debug, Clone)]
pub struct Extractor {
    reference: Arc<ReferenceData>,
    config: ExtractorConfig,
    direction: DirectionFinder,
}

impl Extractor {
    pub fn new(reference: Arc<ReferenceData>, config: ExtractorConfig) -> Self {
        let direction = DirectionFinder::new(&config);
        Self {
            reference,
            config,
            direction,
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a sighting from raw message text.
    ///
    /// Never fails: anything unusable yields [`Extraction::NoInformation`].
    pub fn extract(&self, raw: &str) -> Extraction {
        if is_noise(raw, &self.config) {
            debug!("message skipped by noise guard");
            return Extraction::NoInformation;
        }

        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Extraction::NoInformation;
        }

        let mut report = SightingReport::empty();
        report.line = find_line(&normalized, &self.reference);

        let text = MaskedText::new(normalized);
        let (direction, residual) = self.direction.find(&text, &self.reference);
        report.direction = direction;

        report.station = find_station(&residual, &report, &self.reference);

        if report.is_empty() {
            return Extraction::NoInformation;
        }

        let verification = verify(&mut report, &self.reference);
        if verification.changed() {
            debug!(
                line_corrected = verification.line_corrected,
                line_cleared = verification.line_cleared,
                direction_cleared = verification.direction_cleared,
                "report adjusted by verification"
            );
        }

        Extraction::from_report(report)
    }
}
