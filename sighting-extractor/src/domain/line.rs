//! Line identifiers and stop sequences.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::InvalidIdentifier;
use super::station::StationId;

/// A transit line code, e.g. `U8`, `S41` or `M10`.
///
/// Line codes are non-empty and contain no whitespace.
///
/// # Examples
///
/// ```
/// use sighting_extractor::domain::LineId;
///
/// let u8 = LineId::parse("U8").unwrap();
/// assert_eq!(u8.as_str(), "U8");
///
/// assert!(LineId::parse("").is_err());
/// assert!(LineId::parse("U 8").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineId(String);

impl LineId {
    /// Parse a line code. Surrounding whitespace is trimmed.
    pub fn parse(s: &str) -> Result<Self, InvalidIdentifier> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidIdentifier::new("line", "must not be empty"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(InvalidIdentifier::new(
                "line",
                "must not contain whitespace",
            ));
        }
        Ok(LineId(trimmed.to_string()))
    }

    /// Returns the line code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LineId {
    type Error = InvalidIdentifier;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        LineId::parse(&value)
    }
}

impl From<LineId> for String {
    fn from(id: LineId) -> Self {
        id.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction of travel along a line's stop sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Towards the last stop in the sequence.
    Forward,
    /// Towards the first stop in the sequence.
    Backward,
}

/// A line and its stops in physical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    /// Alternate textual forms (e.g. `ringbahn`), as written in the reference document.
    pub aliases: Vec<String>,
    pub stations: Vec<StationId>,
}

impl Line {
    /// Create a line with the given stop sequence and no aliases.
    pub fn new(id: LineId, stations: Vec<StationId>) -> Self {
        Self {
            id,
            aliases: Vec::new(),
            stations,
        }
    }

    /// Whether the line calls at `station`.
    pub fn contains(&self, station: &StationId) -> bool {
        self.stations.contains(station)
    }

    /// Index of `station` in the stop sequence.
    pub fn position(&self, station: &StationId) -> Option<usize> {
        self.stations.iter().position(|s| s == station)
    }

    /// Which way a passenger at `from` travels to reach `toward`.
    ///
    /// Returns `None` when either station is not on the line or both are
    /// the same stop.
    pub fn heading(&self, from: &StationId, toward: &StationId) -> Option<Heading> {
        let from = self.position(from)?;
        let toward = self.position(toward)?;
        match from.cmp(&toward) {
            std::cmp::Ordering::Less => Some(Heading::Forward),
            std::cmp::Ordering::Greater => Some(Heading::Backward),
            std::cmp::Ordering::Equal => None,
        }
    }
}
