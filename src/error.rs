//! Error types for continuable
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Failures raised by caller-supplied loaders and processors are wrapped
//! together with the token that was in play, keeping the original cause
//! reachable through `std::error::Error::source`.

use crate::token::ContinuationToken;
use thiserror::Error;

/// The main error type for continuable
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Argument Errors
    // ============================================================================
    #[error("Missing required argument: {argument}")]
    InvalidArgument { argument: &'static str },

    // ============================================================================
    // Worker Errors
    // ============================================================================
    #[error(
        "Batch processing cancelled after {completed_batches} batches (next token: {})",
        display_token(.next_token)
    )]
    Cancelled {
        next_token: Option<ContinuationToken>,
        completed_batches: u64,
    },

    #[error(
        "Failed to load next batch with token {}: {source}",
        display_token(.token)
    )]
    BatchLoad {
        token: Option<ContinuationToken>,
        #[source]
        source: anyhow::Error,
    },

    #[error(
        "Failed to process batch of {items} items loaded with token {}: {source}",
        display_token(.token)
    )]
    BatchProcess {
        token: Option<ContinuationToken>,
        items: usize,
        #[source]
        source: anyhow::Error,
    },

    // ============================================================================
    // Token Codec Errors
    // ============================================================================
    #[error("Could not encode payload as a continuation token: {source}")]
    Encoding {
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not decode continuation token: {source}")]
    Decoding {
        #[source]
        source: TokenDecodeError,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a token can fail to decode
#[derive(Error, Debug)]
pub enum TokenDecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("payload does not match the expected shape: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(argument: &'static str) -> Self {
        Self::InvalidArgument { argument }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a batch load error
    pub fn batch_load(token: Option<ContinuationToken>, source: anyhow::Error) -> Self {
        Self::BatchLoad { token, source }
    }

    /// Create a batch process error
    pub fn batch_process(
        token: Option<ContinuationToken>,
        items: usize,
        source: anyhow::Error,
    ) -> Self {
        Self::BatchProcess {
            token,
            items,
            source,
        }
    }

    /// Check if this error is a cooperative cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Check if a loader or processor failed
    pub fn is_batch_failure(&self) -> bool {
        matches!(self, Self::BatchLoad { .. } | Self::BatchProcess { .. })
    }

    /// The token in play when a batch failed, if any.
    ///
    /// `None` is returned both for non-batch errors and for a batch that
    /// failed while loading from the start of the source.
    pub fn failed_token(&self) -> Option<&ContinuationToken> {
        match self {
            Self::BatchLoad { token, .. } | Self::BatchProcess { token, .. } => token.as_ref(),
            _ => None,
        }
    }
}

impl From<TokenDecodeError> for Error {
    fn from(source: TokenDecodeError) -> Self {
        Self::Decoding { source }
    }
}

fn display_token(token: &Option<ContinuationToken>) -> &str {
    token.as_ref().map_or("<start>", ContinuationToken::as_str)
}

/// Result type alias for continuable
pub type Result<T> = std::result::Result<T, Error>;
