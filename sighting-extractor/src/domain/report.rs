//! Extraction results.

use serde::{Deserialize, Serialize};

use super::line::LineId;
use super::station::StationId;

/// The (line, station, direction) triple extracted from one message.
///
/// `direction` is the station the inspectors are travelling toward.
/// Reports are built fresh for every message and never outlive its
/// processing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SightingReport {
    pub line: Option<LineId>,
    pub station: Option<StationId>,
    pub direction: Option<StationId>,
}

impl SightingReport {
    /// A report with every field unset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when nothing was found.
    pub fn is_empty(&self) -> bool {
        self.line.is_none() && self.station.is_none() && self.direction.is_none()
    }

    /// Names of the fields that are set, in `line`, `station`, `direction` order.
    ///
    /// Used for logging without recording what the sender wrote.
    pub fn found_fields(&self) -> Vec<&'static str> {
        let mut found = Vec::with_capacity(3);
        if self.line.is_some() {
            found.push("line");
        }
        if self.station.is_some() {
            found.push("station");
        }
        if self.direction.is_some() {
            found.push("direction");
        }
        found
    }
}

/// Outcome of running the extraction pipeline over one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// At least one field was found and verified.
    Found(SightingReport),
    /// The message carried no usable signal. This is the common case.
    NoInformation,
}

impl Extraction {
    /// Wrap a verified report, collapsing an empty one to `NoInformation`.
    pub fn from_report(report: SightingReport) -> Self {
        if report.is_empty() {
            Extraction::NoInformation
        } else {
            Extraction::Found(report)
        }
    }

    /// The report, if one was found.
    pub fn report(&self) -> Option<&SightingReport> {
        match self {
            Extraction::Found(report) => Some(report),
            Extraction::NoInformation => None,
        }
    }

    pub fn into_report(self) -> Option<SightingReport> {
        match self {
            Extraction::Found(report) => Some(report),
            Extraction::NoInformation => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Found(_))
    }
}
