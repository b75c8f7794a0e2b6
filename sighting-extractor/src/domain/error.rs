//! Domain error types.

/// Error returned when parsing an invalid line or station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} identifier: {reason}")]
pub struct InvalidIdentifier {
    kind: &'static str,
    reason: &'static str,
}

impl InvalidIdentifier {
    pub(crate) fn new(kind: &'static str, reason: &'static str) -> Self {
        Self { kind, reason }
    }
}
