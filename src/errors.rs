use astra::Response;
use std::fmt;

/// Failure to fetch or parse the catalog source. Fatal to the session:
/// surfaced once at startup, never retried.
#[derive(Debug)]
pub enum LoadError {
    Fetch(String),
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Fetch(msg) => write!(f, "Catalog fetch failed: {msg}"),
            LoadError::Parse(msg) => write!(f, "Catalog parse failed: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Errors originating from the server logic
/// (routing, missing resources, bad query input). Enrichment lookup
/// failures never appear here: they degrade the affected card instead.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
