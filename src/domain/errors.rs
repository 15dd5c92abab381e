//! Error types shared by every layer of the card table.

/// Errors raised while drawing, storing or presenting cards.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("Network failure: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// The response body did not have the shape the formatter expects.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Reading or writing the durable store failed.
    #[error("Storage failure: {0}")]
    Storage(#[from] std::io::Error),

    /// A stored or fetched value could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The system clipboard was unavailable.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type TableResult<T> = Result<T, TableError>;
