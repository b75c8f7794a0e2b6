//! Serialized form of the reference network.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Top-level reference document.
///
/// Both maps keep document order, which decides ties between otherwise
/// equal matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceDocument {
    /// Line code → line entry.
    pub lines: IndexMap<String, LineEntry>,
    /// Canonical station name → station entry.
    pub stations: IndexMap<String, StationEntry>,
}

/// A line as written in the reference document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineEntry {
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Stops in physical order.
    pub stations: Vec<String>,
}

/// A station as written in the reference document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationEntry {
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Lines declared explicitly, in addition to those whose stop list
    /// contains this station.
    #[serde(default)]
    pub lines: Vec<String>,
}
