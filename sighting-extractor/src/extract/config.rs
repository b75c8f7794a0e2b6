//! Locale configuration for the extraction engine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Keywords and thresholds used by the finders.
///
/// Defaults cover the German and English phrasing seen in Berlin chat
/// groups. A JSON file can override any subset of the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Words announcing the station a train is heading to.
    pub direction_keywords: Vec<String>,

    /// Case-insensitive substrings marking promotional or off-topic text.
    pub spam_phrases: Vec<String>,

    /// Most filler tokens allowed between a direction keyword and the
    /// station (e.g. the `s u` in "richtung S+U Hermannstraße").
    pub direction_window: usize,

    /// Tokens that may be skipped inside that window. Any other token
    /// ends the search for that keyword.
    pub direction_fillers: Vec<String>,
}

impl ExtractorConfig {
    /// Create a configuration with the given parameters.
    pub fn new(
        direction_keywords: Vec<String>,
        spam_phrases: Vec<String>,
        direction_window: usize,
        direction_fillers: Vec<String>,
    ) -> Self {
        Self {
            direction_keywords,
            spam_phrases,
            direction_window,
            direction_fillers,
        }
    }

    pub fn with_direction_keywords(mut self, keywords: Vec<String>) -> Self {
        self.direction_keywords = keywords;
        self
    }

    pub fn with_spam_phrases(mut self, phrases: Vec<String>) -> Self {
        self.spam_phrases = phrases;
        self
    }

    pub fn with_direction_window(mut self, window: usize) -> Self {
        self.direction_window = window;
        self
    }

    pub fn with_direction_fillers(mut self, fillers: Vec<String>) -> Self {
        self.direction_fillers = fillers;
        self
    }

    /// Parse an override document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read an override document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        let strings = |items: &[&str]| -> Vec<String> {
            items.iter().map(|s| (*s).to_string()).collect()
        };
        Self {
            direction_keywords: strings(&[
                "richtung",
                "in richtung",
                "ri",
                "nach",
                "toward",
                "towards",
                "direction",
                "to",
            ]),
            spam_phrases: strings(&[
                "http://",
                "https://",
                "www.",
                "t.me/",
                "gewinnspiel",
                "giveaway",
                "verkaufe",
                "rabatt",
                "bitcoin",
                "krypto",
                "crypto",
            ]),
            direction_window: 2,
            direction_fillers: strings(&[
                "s", "u", "zur", "zum", "der", "die", "dem", "den", "the", "bhf",
            ]),
        }
    }
}
