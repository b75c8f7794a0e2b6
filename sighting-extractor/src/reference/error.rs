//! Reference data error types.

use std::path::PathBuf;

use crate::domain::{InvalidIdentifier, LineId, StationId};

/// Errors raised while loading or validating reference data.
///
/// Any of these is fatal at startup: extraction cannot run against a
/// network description it cannot trust.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceDataError {
    /// The reference file could not be read
    #[error("failed to read reference data from {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid JSON or a required field is missing
    #[error("malformed reference data: {0}")]
    Json(#[from] serde_json::Error),

    /// A line code or station name failed validation
    #[error("malformed reference data: {0}")]
    Identifier(#[from] InvalidIdentifier),

    /// Two line entries normalize to the same code
    #[error("line {0} is defined more than once")]
    DuplicateLine(LineId),

    /// Two station entries normalize to the same name
    #[error("station {0} is defined more than once")]
    DuplicateStation(StationId),

    /// A line lists no stops
    #[error("line {0} has no stations")]
    EmptyLine(LineId),

    /// A station declares membership of a line that does not exist
    #[error("station {station} references undefined line {line}")]
    UndefinedLine { station: StationId, line: String },

    /// A line stops at a station that is not defined
    #[error("line {line} references undefined station {station}")]
    UndefinedStation { line: LineId, station: String },

    /// A line alias could not be compiled into a matcher
    #[error("invalid pattern for line {line}: {source}")]
    Pattern { line: LineId, source: regex::Error },
}
