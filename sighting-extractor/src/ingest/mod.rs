//! Message handling between the chat transport and storage.
//!
//! For each inbound message: round the timestamp down to the minute, run
//! the extractor, and hand a found report to the sink. Logs record which
//! fields were found but never their values, so a sender cannot be traced
//! through the logs.

mod sink;

use std::sync::Arc;

use chrono::{DateTime, Timelike, Utc};
use tracing::info;

use crate::domain::{Extraction, SightingReport};
use crate::extract::Extractor;

pub use sink::{JsonLinesSink, MemorySink, ReportSink, SightingRecord, SinkError};

/// Clear seconds and sub-second precision.
pub fn round_to_minute(at: DateTime<Utc>) -> DateTime<Utc> {
    at.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}

/// What happened to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A report was extracted and written to the sink.
    Stored {
        at: DateTime<Utc>,
        report: SightingReport,
    },
    /// Nothing usable was found; the sink was not called.
    Discarded,
}

/// Runs extraction and storage for inbound messages.
#[derive(Clone)]
pub struct MessageHandler {
    extractor: Arc<Extractor>,
    sink: Arc<dyn ReportSink>,
}

impl MessageHandler {
    pub fn new(extractor: Arc<Extractor>, sink: Arc<dyn ReportSink>) -> Self {
        Self { extractor, sink }
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Process one message received at `timestamp`.
    pub fn handle(&self, timestamp: DateTime<Utc>, text: &str) -> Result<Outcome, SinkError> {
        let at = round_to_minute(timestamp);

        match self.extractor.extract(text) {
            Extraction::Found(report) => {
                info!(found = %report.found_fields().join(", "), "found info");
                self.sink.insert(at, &report)?;
                Ok(Outcome::Stored { at, report })
            }
            Extraction::NoInformation => {
                info!("no line, station or direction found in the message");
                Ok(Outcome::Discarded)
            }
        }
    }
}
