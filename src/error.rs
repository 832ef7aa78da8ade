use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid XtremIO array name: {host}: {source}")]
    Resolution {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Authentication failed: array rejected credentials (HTTP {0})")]
    ArrayAuth(u16),

    #[error("Array request failed: {0}")]
    ArrayTransport(#[source] reqwest::Error),

    #[error("Array API error: unexpected HTTP {status}: {body}")]
    ArrayStatus { status: u16, body: String },

    #[error("Array response schema error: {0}")]
    ArraySchema(String),

    #[error("Critical error trying to publish to target API: {0}")]
    PublishTransport(#[source] reqwest::Error),

    #[error("HTTP error trying to publish to target API: HTTP {status}: {body}")]
    PublishStatus { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CollectorError {
    /// Process exit status for this failure. Every failure is terminal.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Transport failures on the publish side are reported at critical severity.
    pub fn is_critical(&self) -> bool {
        matches!(self, CollectorError::PublishTransport(_))
    }
}

pub type Result<T> = std::result::Result<T, CollectorError>;
