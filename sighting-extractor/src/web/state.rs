//! Application state for the web layer.

use std::sync::Arc;

use crate::extract::Extractor;
use crate::ingest::{MessageHandler, ReportSink};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Extraction engine over the loaded reference data
    pub extractor: Arc<Extractor>,

    /// Extraction plus storage for inbound messages
    pub handler: MessageHandler,
}

impl AppState {
    /// Create a new app state.
    pub fn new(extractor: Extractor, sink: Arc<dyn ReportSink>) -> Self {
        let extractor = Arc::new(extractor);
        let handler = MessageHandler::new(Arc::clone(&extractor), sink);
        Self { extractor, handler }
    }
}
