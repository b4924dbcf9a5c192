use std::error::Error;
use std::fmt;

/// Failures from the two outbound lookups (posters, streaming offers).
/// These never block a page render; the affected card just shows nothing.
#[derive(Debug)]
pub enum EnrichmentError {
    Network(String),
    JsonParse(String),
    UnexpectedShape(String),
    Config(String),
}

impl fmt::Display for EnrichmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrichmentError::Network(msg) => write!(f, "Network error: {msg}"),
            EnrichmentError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            EnrichmentError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
            EnrichmentError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl Error for EnrichmentError {}
