//! Domain types for inspector sighting extraction.
//!
//! Identifiers enforce their invariants at construction time, so code that
//! receives a `LineId` or `StationId` can trust it is non-empty and trimmed.

mod error;
mod line;
mod report;
mod station;

pub use error::InvalidIdentifier;
pub use line::{Heading, Line, LineId};
pub use report::{Extraction, SightingReport};
pub use station::{Station, StationId};
