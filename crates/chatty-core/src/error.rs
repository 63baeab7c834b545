//! Error types for chat requests.
//!
//! Every failure a request can end in maps to one [`ChatError`] variant. The
//! streaming decoder itself never returns errors; it records a
//! [`TerminationReason`](crate::api::stream::TerminationReason) which the
//! request driver converts with [`ChatError::from_termination`].

use crate::api::stream::TerminationReason;
use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used throughout chatty-core.
pub type Result<T> = std::result::Result<T, ChatError>;

#[derive(Debug, Error)]
pub enum ChatError {
    /// No API key found in the environment variable selected for the provider.
    #[error("Invalid or missing API key (set {env_var})")]
    InvalidKey { env_var: &'static str },

    #[error("Invalid options provided: {0}")]
    InvalidOptions(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with something other than 200 OK.
    #[error("Non-200 HTTP response ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse JSON response: {0}")]
    JsonParse(String),

    /// The stream consumer asked the decoder to stop.
    #[error("Stream callback returned error")]
    StreamCallback,

    /// A single event-stream line exceeded the decoder's line capacity.
    #[error("Failed to parse streaming response: line exceeded {capacity} bytes")]
    StreamParse { capacity: usize },
}

impl ChatError {
    /// Builds the error for a decoder that stopped for `reason`.
    ///
    /// `Completed` is not a failure, so it yields `None`.
    pub fn from_termination(reason: TerminationReason, capacity: usize) -> Option<Self> {
        match reason {
            TerminationReason::Completed => None,
            TerminationReason::CallbackRequestedStop => Some(ChatError::StreamCallback),
            TerminationReason::BufferOverflow => Some(ChatError::StreamParse { capacity }),
        }
    }

    /// True for errors raised by the stream decoder or its consumer, as
    /// opposed to errors raised before any byte of the body was read.
    pub fn is_stream_error(&self) -> bool {
        matches!(
            self,
            ChatError::StreamCallback | ChatError::StreamParse { .. }
        )
    }
}
