//! Inspector sighting extraction.
//!
//! Reads free-text chat reports of ticket inspectors and extracts the
//! transit line, station and direction they mention, cross-checked
//! against a reference network before the result is stored.

pub mod config;
pub mod domain;
pub mod extract;
pub mod ingest;
pub mod reference;
pub mod web;
