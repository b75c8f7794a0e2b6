//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::SightingReport;

/// Request to extract a sighting without storing it.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// Raw message text
    pub text: String,
}

/// Extraction result.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ExtractResponse {
    /// Whether any field was found
    pub found: bool,

    /// The verified report, or null when nothing was found
    pub report: Option<SightingReport>,
}

/// An inbound chat message.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    /// Raw message text
    pub text: String,

    /// Send time as Unix seconds (defaults to now)
    pub timestamp: Option<i64>,
}

/// Result of ingesting a message.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Whether a report was written to storage
    pub stored: bool,

    /// Names of the fields found, without their values
    pub found: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
