use std::fmt;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// The palette provider returned fewer palettes than requested
    ProviderUnavailable {
        kind: &'static str,
        requested: usize,
        available: usize,
    },
    /// HTTP request error (preserves reqwest::Error, covers non-2xx statuses)
    HttpRequest(reqwest::Error),
    /// The fetched body is not valid JSON, or not a key-value mapping
    MalformedSource(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProviderUnavailable {
                kind,
                requested,
                available,
            } => write!(
                f,
                "Palette provider unavailable: requested {} {} palettes, found {}",
                requested, kind, available
            ),
            Self::HttpRequest(err) => write!(f, "HTTP request error: {}", err),
            Self::MalformedSource(msg) => write!(f, "Malformed source: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HttpRequest(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpRequest(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedSource(format!("JSON error: {}", err))
    }
}
