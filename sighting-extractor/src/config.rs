//! Process configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default location of the reference network document.
const DEFAULT_REFERENCE_DATA_PATH: &str = "data/stations.json";

/// Default location of the JSON-lines report store.
const DEFAULT_REPORTS_PATH: &str = "reports.jsonl";

/// Default HTTP listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5001";

/// Errors while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held an unusable value
    #[error("invalid value for {name}: {value:?} ({reason})")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// A configuration file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A configuration file is not valid JSON for its type
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Reference network document (`REFERENCE_DATA_PATH`).
    pub reference_data_path: PathBuf,

    /// Where verified reports are appended (`REPORTS_PATH`).
    pub reports_path: PathBuf,

    /// HTTP listen address (`BIND_ADDR`).
    pub bind_addr: SocketAddr,

    /// Optional `ExtractorConfig` override (`EXTRACTOR_CONFIG_PATH`).
    pub extractor_config_path: Option<PathBuf>,
}

impl AppConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_value = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidVar {
                name: "BIND_ADDR",
                value: bind_value.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            reference_data_path: var("REFERENCE_DATA_PATH")
                .map_or_else(|| PathBuf::from(DEFAULT_REFERENCE_DATA_PATH), PathBuf::from),
            reports_path: var("REPORTS_PATH")
                .map_or_else(|| PathBuf::from(DEFAULT_REPORTS_PATH), PathBuf::from),
            bind_addr,
            extractor_config_path: var("EXTRACTOR_CONFIG_PATH").map(PathBuf::from),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reference_data_path: PathBuf::from(DEFAULT_REFERENCE_DATA_PATH),
            reports_path: PathBuf::from(DEFAULT_REPORTS_PATH),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5001)),
            extractor_config_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("REFERENCE_DATA_PATH", "/srv/berlin.json"),
            ("REPORTS_PATH", "/var/lib/sightings.jsonl"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("EXTRACTOR_CONFIG_PATH", "/etc/extractor.json"),
        ]))
        .unwrap();

        assert_eq!(config.reference_data_path, PathBuf::from("/srv/berlin.json"));
        assert_eq!(config.reports_path, PathBuf::from("/var/lib/sightings.jsonl"));
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(
            config.extractor_config_path,
            Some(PathBuf::from("/etc/extractor.json"))
        );
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("BIND_ADDR", "  "), ("REPORTS_PATH", "")]))
            .unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn invalid_bind_addr() {
        let err = AppConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "BIND_ADDR", .. }));
        assert!(err.to_string().contains("BIND_ADDR"));
    }
}
