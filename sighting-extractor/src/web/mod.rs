//! HTTP surface.
//!
//! Health reporting for the process supervisor, a stateless extraction
//! endpoint, and message ingestion for the chat transport.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
