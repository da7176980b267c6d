use thiserror::Error;

/// Error raised when a caller-supplied time value cannot be parsed.
///
/// Only top-level chapter boundary values surface this error. Malformed
/// timing lines inside the caption stream are skipped instead, so a
/// single bad cue cannot abort the whole transcript.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse time value '{value}'")]
pub struct FormatError {
    /// The raw value that failed to parse
    pub value: String,
}

impl FormatError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
