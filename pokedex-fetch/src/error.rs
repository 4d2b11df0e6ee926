/// Errors that can occur while loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("Malformed response from {url}: {message}")]
    Malformed { url: String, message: String },

    #[error("{0}")]
    Core(#[from] pokedex_core::CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FetchError {
    pub fn malformed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Whether this is a transport or status failure rather than bad data.
    pub fn is_retrieval(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }
}
