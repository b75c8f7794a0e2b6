//! Reference network: lines, their stops, and station aliases.
//!
//! Loaded once at startup from a JSON document and never mutated
//! afterwards. Share it as `Arc<ReferenceData>`; every finder takes it by
//! reference, so concurrent extraction needs no locking.

mod document;
mod error;
mod index;

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use tracing::debug;

use crate::domain::{Line, LineId, Station, StationId};

pub use document::{LineEntry, ReferenceDocument, StationEntry};
pub use error::ReferenceDataError;
pub use index::{LinePattern, StationAlias};

/// Validated, indexed reference network.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    lines: Vec<Line>,
    stations: Vec<Station>,
    line_index: HashMap<LineId, usize>,
    station_index: HashMap<StationId, usize>,
    station_aliases: Vec<StationAlias>,
    line_patterns: Vec<LinePattern>,
}

impl ReferenceData {
    /// Read and validate a reference document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_str(&contents)
    }

    /// Parse and validate a reference document.
    pub fn from_json_str(json: &str) -> Result<Self, ReferenceDataError> {
        let document: ReferenceDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Start building reference data in code.
    pub fn builder() -> ReferenceDataBuilder {
        ReferenceDataBuilder::default()
    }

    /// Validate a parsed document and build the lookup indexes.
    pub fn from_document(document: ReferenceDocument) -> Result<Self, ReferenceDataError> {
        let mut lines = Vec::with_capacity(document.lines.len());
        let mut line_index = HashMap::new();

        for (code, entry) in &document.lines {
            let id = LineId::parse(code)?;
            if line_index.contains_key(&id) {
                return Err(ReferenceDataError::DuplicateLine(id));
            }
            if entry.stations.is_empty() {
                return Err(ReferenceDataError::EmptyLine(id));
            }
            let stops = entry
                .stations
                .iter()
                .map(|s| StationId::parse(s))
                .collect::<Result<Vec<_>, _>>()?;

            line_index.insert(id.clone(), lines.len());
            let mut line = Line::new(id, stops);
            line.aliases = entry.aliases.clone();
            lines.push(line);
        }

        let mut stations = Vec::with_capacity(document.stations.len());
        let mut station_index = HashMap::new();

        for (name, entry) in &document.stations {
            let id = StationId::parse(name)?;
            if station_index.contains_key(&id) {
                return Err(ReferenceDataError::DuplicateStation(id));
            }

            let mut declared = BTreeSet::new();
            for code in &entry.lines {
                let line = LineId::parse(code)
                    .ok()
                    .filter(|l| line_index.contains_key(l))
                    .ok_or_else(|| ReferenceDataError::UndefinedLine {
                        station: id.clone(),
                        line: code.clone(),
                    })?;
                declared.insert(line);
            }

            station_index.insert(id.clone(), stations.len());
            let mut station = Station::new(id);
            station.aliases = entry.aliases.clone();
            station.lines = declared;
            stations.push(station);
        }

        for line in &lines {
            for stop in &line.stations {
                let idx = station_index.get(stop).copied().ok_or_else(|| {
                    ReferenceDataError::UndefinedStation {
                        line: line.id.clone(),
                        station: stop.to_string(),
                    }
                })?;
                stations[idx].lines.insert(line.id.clone());
            }
        }

        let station_aliases = index::build_station_aliases(&stations);
        let line_patterns = index::build_line_patterns(&lines)?;

        debug!(
            lines = lines.len(),
            stations = stations.len(),
            aliases = station_aliases.len(),
            "reference data indexed"
        );

        Ok(Self {
            lines,
            stations,
            line_index,
            station_index,
            station_aliases,
            line_patterns,
        })
    }

    /// Look up a line by code.
    pub fn line(&self, id: &LineId) -> Option<&Line> {
        self.line_index.get(id).map(|&idx| &self.lines[idx])
    }

    /// Look up a station by canonical name.
    pub fn station(&self, id: &StationId) -> Option<&Station> {
        self.station_index.get(id).map(|&idx| &self.stations[idx])
    }

    /// Lines in document order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Stations in document order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Normalized station aliases, longest first.
    pub fn station_aliases(&self) -> &[StationAlias] {
        &self.station_aliases
    }

    /// Compiled line matchers, one per line in document order.
    pub fn line_patterns(&self) -> &[LinePattern] {
        &self.line_patterns
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Whether `line` calls at `station`. Unknown ids are never on a line.
    pub fn is_on_line(&self, station: &StationId, line: &LineId) -> bool {
        self.station(station).is_some_and(|s| s.serves(line))
    }
}

/// Builds [`ReferenceData`] in code, mainly for tests and embedders.
///
/// Stations named in a stop list are defined implicitly; call
/// [`station`](Self::station) to give them aliases.
///
/// # Example
///
/// ```
/// use sighting_extractor::reference::ReferenceData;
///
/// let data = ReferenceData::builder()
///     .line("U8", &["Boddinstraße", "Leinestraße", "Hermannstraße"])
///     .station("Hermannstraße", &["hermannstr"])
///     .build()
///     .unwrap();
///
/// assert_eq!(data.line_count(), 1);
/// assert_eq!(data.station_count(), 3);
/// ```
#[derive(Debug, Default)]
pub struct ReferenceDataBuilder {
    document: ReferenceDocument,
}

impl ReferenceDataBuilder {
    /// Add a line with its stops in order.
    pub fn line(mut self, code: &str, stations: &[&str]) -> Self {
        for name in stations {
            self.document
                .stations
                .entry((*name).to_string())
                .or_default();
        }
        let entry = self.document.lines.entry(code.to_string()).or_default();
        entry.stations = stations.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Add textual variants for a line.
    pub fn line_aliases(mut self, code: &str, aliases: &[&str]) -> Self {
        let entry = self.document.lines.entry(code.to_string()).or_default();
        entry
            .aliases
            .extend(aliases.iter().map(|a| (*a).to_string()));
        self
    }

    /// Define a station (or add aliases to an existing one).
    pub fn station(mut self, name: &str, aliases: &[&str]) -> Self {
        let entry = self
            .document
            .stations
            .entry(name.to_string())
            .or_default();
        entry
            .aliases
            .extend(aliases.iter().map(|a| (*a).to_string()));
        self
    }

    /// Declare that `line` serves `station` without adding it to the stop list.
    pub fn station_line(mut self, name: &str, line: &str) -> Self {
        let entry = self
            .document
            .stations
            .entry(name.to_string())
            .or_default();
        entry.lines.push(line.to_string());
        self
    }

    /// Validate and index.
    pub fn build(self) -> Result<ReferenceData, ReferenceDataError> {
        ReferenceData::from_document(self.document)
    }
}
