//! Unified failure taxonomy for the runtime.
//!
//! Every fallible operation in this crate returns `Result<T, RpcError>`:
//! precondition violations raised by stubs, content-negotiation failures,
//! decode failures, structured remote errors, transport failures, and
//! client-side timeouts.

use std::time::Duration;

use thiserror::Error;

use crate::remote_error::RemoteError;

#[derive(Debug, Error)]
pub enum RpcError {
    /// A required argument or path variable was absent. Carries the
    /// parameter name so stubs can report it verbatim.
    #[error("Precondition violation: {parameter} is required")]
    Precondition { parameter: String },

    /// The argument value itself was invalid for its declared type, or the
    /// response could not be interpreted because required metadata (such
    /// as `Content-Type`) was missing.
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),

    /// No registered `Encoding` claims the response's `Content-Type`.
    #[error("UnsupportedMediaType: Unsupported Content-Type")]
    UnsupportedMediaType,

    /// The response body could not be parsed for the negotiated encoding.
    #[error("Failed to deserialize response stream. Syntax error?")]
    DeserializeFailure(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A request argument could not be rendered into the negotiated
    /// encoding's wire form at serialize time.
    #[error("Failed to serialize request body")]
    EncodeFailure(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A unit-returning endpoint received a non-empty response body.
    #[error("Expected empty response body")]
    EmptyBodyViolation,

    /// The server responded with a structured remote error envelope.
    #[error("{0}")]
    Remote(RemoteError),

    /// The transport failed before a response was available: connection
    /// refused, TLS handshake failure, socket reset, and the like.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A blocking stub exceeded its deadline.
    #[error("Waited {} milliseconds", .0.as_millis())]
    Timeout(Duration),

    /// The server's non-success response could not be interpreted as a
    /// structured remote error (wrong Content-Type, malformed JSON, etc).
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl RpcError {
    pub fn precondition(parameter: impl Into<String>) -> Self {
        RpcError::Precondition {
            parameter: parameter.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self { RpcError::InvalidArgument(message.into()) }

    pub fn runtime(message: impl Into<String>) -> Self { RpcError::Runtime(message.into()) }

    /// True for failures that `RetryingChannel` is allowed to retry: only
    /// transport/IO-level failures, never HTTP responses or decode errors.
    pub fn is_retryable(&self) -> bool { matches!(self, RpcError::Transport(_)) }
}

impl From<url::ParseError> for RpcError {
    fn from(e: url::ParseError) -> Self { RpcError::invalid_argument(e.to_string()) }
}

impl From<reqwest::Error> for RpcError {
    fn from(e: reqwest::Error) -> Self { RpcError::Transport(Box::new(e)) }
}
