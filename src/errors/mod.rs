use thiserror::Error;

use crate::domain::{ContentKind, Platform};

#[derive(Error, Debug)]
pub enum FeedGenError {
    // Request errors
    #[error("Not a URL: {0}")]
    NotAUrl(String),

    #[error("Unsupported platform: {0}")]
    UnrecognizedPlatform(String),

    #[error("No {platform} {kind} identifier found in {url}")]
    IdentifierNotFound {
        platform: Platform,
        kind: ContentKind,
        url: String,
    },

    // Network errors
    #[error("Page fetch failed: {0}")]
    FetchFailed(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Channel errors from notebrook library
    #[error("Channel error: {0}")]
    Channel(String),
}

impl FeedGenError {
    /// Errors caused by the request itself, as opposed to the environment
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            FeedGenError::NotAUrl(_)
                | FeedGenError::UnrecognizedPlatform(_)
                | FeedGenError::IdentifierNotFound { .. }
        )
    }
}


impl From<channels::ChannelError> for FeedGenError {
    fn from(err: channels::ChannelError) -> Self {
        FeedGenError::Channel(err.to_string())
    }
}

pub type FeedGenResult<T> = Result<T, FeedGenError>;
