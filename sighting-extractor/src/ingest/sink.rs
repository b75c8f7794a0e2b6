//! Storage collaborators for verified reports.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{LineId, SightingReport, StationId};

/// Errors from a report sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Writing to the backing store failed
    #[error("sink I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serializing the record failed
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A previous writer panicked while holding the sink
    #[error("sink lock poisoned")]
    Poisoned,
}

/// Receives reports that passed extraction and verification.
///
/// Only called with non-empty reports; `at` is already rounded to the minute.
pub trait ReportSink: Send + Sync {
    fn insert(&self, at: DateTime<Utc>, report: &SightingReport) -> Result<(), SinkError>;
}

/// One stored sighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SightingRecord {
    pub timestamp: DateTime<Utc>,
    pub line: Option<LineId>,
    pub station: Option<StationId>,
    pub direction: Option<StationId>,
}

impl SightingRecord {
    pub fn new(timestamp: DateTime<Utc>, report: &SightingReport) -> Self {
        Self {
            timestamp,
            line: report.line.clone(),
            station: report.station.clone(),
            direction: report.direction.clone(),
        }
    }

    pub fn report(&self) -> SightingReport {
        SightingReport {
            line: self.line.clone(),
            station: self.station.clone(),
            direction: self.direction.clone(),
        }
    }
}

/// Keeps records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<SightingRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything inserted so far.
    pub fn records(&self) -> Vec<SightingRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReportSink for MemorySink {
    fn insert(&self, at: DateTime<Utc>, report: &SightingReport) -> Result<(), SinkError> {
        let mut records = self.records.lock().map_err(|_| SinkError::Poisoned)?;
        records.push(SightingRecord::new(at, report));
        Ok(())
    }
}

/// Appends one JSON object per line to a file.
#[derive(Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonLinesSink {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|source| SinkError::Io {
                path: path.clone(),
                source,
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| SinkError::Io {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for JsonLinesSink {
    fn insert(&self, at: DateTime<Utc>, report: &SightingReport) -> Result<(), SinkError> {
        let mut line = serde_json::to_string(&SightingRecord::new(at, report))?;
        line.push('\n');

        let mut file = self.file.lock().map_err(|_| SinkError::Poisoned)?;
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| SinkError::Io {
                path: self.path.clone(),
                source,
            })
    }
}
