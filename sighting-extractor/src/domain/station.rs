//! Station identifiers and station records.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::InvalidIdentifier;
use super::line::LineId;

/// Canonical name of a station, e.g. `Hermannstraße`.
///
/// A `StationId` is never empty and never carries leading or trailing
/// whitespace. This type guarantees that any `StationId` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use sighting_extractor::domain::StationId;
///
/// let id = StationId::parse(" Boddinstraße ").unwrap();
/// assert_eq!(id.as_str(), "Boddinstraße");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Parse a station id, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidIdentifier> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidIdentifier::new("station", "must not be empty"));
        }
        Ok(StationId(trimmed.to_string()))
    }

    /// Returns the canonical station name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = InvalidIdentifier;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StationId::parse(&value)
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> Self {
        id.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stop in the reference network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Canonical name.
    pub id: StationId,
    /// Alternate spellings as written in the reference document.
    pub aliases: Vec<String>,
    /// Every line calling at this station.
    pub lines: BTreeSet<LineId>,
}

impl Station {
    /// Create a station with no aliases and no lines.
    pub fn new(id: StationId) -> Self {
        Self {
            id,
            aliases: Vec::new(),
            lines: BTreeSet::new(),
        }
    }

    /// Whether `line` calls at this station.
    pub fn serves(&self, line: &LineId) -> bool {
        self.lines.contains(line)
    }

    /// The line serving this station, if there is exactly one.
    pub fn sole_line(&self) -> Option<&LineId> {
        let mut lines = self.lines.iter();
        match (lines.next(), lines.next()) {
            (Some(line), None) => Some(line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(s: &str) -> LineId {
        LineId::parse(s).unwrap()
    }

    fn station(name: &str, lines: &[&str]) -> Station {
        let mut station = Station::new(StationId::parse(name).unwrap());
        station.lines = lines.iter().map(|l| line(l)).collect();
        station
    }

    #[test]
    fn parse_trims() {
        let id = StationId::parse("  Leinestraße\t").unwrap();
        assert_eq!(id.as_str(), "Leinestraße");
    }

    #[test]
    fn reject_blank() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse(" \n ").is_err());
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::parse("Wittenau").unwrap();
        assert_eq!(format!("{}", id), "Wittenau");
        assert_eq!(format!("{:?}", id), "StationId(Wittenau)");
    }

    #[test]
    fn serde_as_plain_string() {
        let id = StationId::parse("Alexanderplatz").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"Alexanderplatz\"");

        let back: StationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<StationId>("\"  \"").is_err());
    }

    #[test]
    fn sole_line_only_when_unique() {
        assert_eq!(station("Leinestraße", &["U8"]).sole_line(), Some(&line("U8")));
        assert_eq!(station("Hermannstraße", &["U8", "S41"]).sole_line(), None);
        assert_eq!(station("Nowhere", &[]).sole_line(), None);
    }

    #[test]
    fn serves() {
        let hermannstr = station("Hermannstraße", &["U8", "S41"]);
        assert!(hermannstr.serves(&line("S41")));
        assert!(!hermannstr.serves(&line("U7")));
    }
}
