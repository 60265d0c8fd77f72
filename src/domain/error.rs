//! Engine error type
//!
//! Only setup can fail (bad dimensions, bad configuration, unknown player).
//! Per-frame anomalies are recovered inside the step and never surface here.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// Arena dimensions must be finite and positive.
    InvalidDimensions { width: f64, height: f64 },
    /// A configuration value is out of range.
    InvalidConfig { reason: String },
    /// Configuration JSON could not be parsed.
    ConfigParse(String),
    /// Player slot does not exist.
    UnknownPlayer { index: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid arena dimensions {width}x{height}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid configuration: {reason}"),
            Self::ConfigParse(msg) => write!(f, "configuration parse error: {msg}"),
            Self::UnknownPlayer { index } => write!(f, "no player at index {index}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        Self::ConfigParse(e.to_string())
    }
}
