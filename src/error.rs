use std::fmt;

use thiserror::Error;

/// Error types that can occur when talking to the generative model provider.
#[derive(Debug, Error)]
pub enum LLMError {
    /// Transport-level failures (connect, TLS, body read)
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// The request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),
    /// Authentication and authorization errors
    #[error("Auth error: {0}")]
    AuthError(String),
    /// Quota exhausted or rate limited by the provider
    #[error("Rate limited: {0}")]
    RateLimited(String),
    /// Invalid request parameters or format
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// Non-success status returned by the provider
    #[error("Provider error (status {status}): {message}")]
    ProviderError { status: u16, message: String },
    /// API response parsing or format error
    #[error("Response format error: {message}. Raw response: {raw_response}")]
    ResponseFormatError {
        message: String,
        raw_response: String,
    },
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    JsonError(String),
    /// Tool configuration error
    #[error("Tool configuration error: {0}")]
    ToolConfigError(String),
    /// Retry attempts exceeded
    #[error("Retry attempts exceeded after {attempts} tries: {last_error}")]
    RetryExceeded {
        attempts: usize,
        last_error: String,
        last_kind: ErrorKind,
    },
}

/// Coarse classification of a failed generation, surfaced for observability.
///
/// End users never see this; the transcript only carries fallback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    Timeout,
    Auth,
    RateLimited,
    InvalidRequest,
    Provider,
    MalformedResponse,
    EmptyResponse,
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Transport => "transport",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Auth => "auth",
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::Provider => "provider",
            ErrorKind::MalformedResponse => "malformed_response",
            ErrorKind::EmptyResponse => "empty_response",
            ErrorKind::Configuration => "configuration",
        };
        write!(f, "{name}")
    }
}

impl LLMError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LLMError::HttpError(_) => ErrorKind::Transport,
            LLMError::Timeout(_) => ErrorKind::Timeout,
            LLMError::AuthError(_) => ErrorKind::Auth,
            LLMError::RateLimited(_) => ErrorKind::RateLimited,
            LLMError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            LLMError::ProviderError { .. } => ErrorKind::Provider,
            LLMError::ResponseFormatError { .. } | LLMError::JsonError(_) => {
                ErrorKind::MalformedResponse
            }
            LLMError::ToolConfigError(_) => ErrorKind::Configuration,
            LLMError::RetryExceeded { last_kind, .. } => *last_kind,
        }
    }

    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            LLMError::HttpError(_)
            | LLMError::Timeout(_)
            | LLMError::RateLimited(_)
            | LLMError::ResponseFormatError { .. }
            | LLMError::JsonError(_) => true,
            LLMError::ProviderError { status, .. } => *status >= 500,
            LLMError::AuthError(_)
            | LLMError::InvalidRequest(_)
            | LLMError::ToolConfigError(_)
            | LLMError::RetryExceeded { .. } => false,
        }
    }
}

/// Converts reqwest HTTP errors into LLMErrors
impl From<reqwest::Error> for LLMError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LLMError::Timeout(err.to_string())
        } else {
            LLMError::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LLMError {
    fn from(err: serde_json::Error) -> Self {
        LLMError::JsonError(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_transient_client_errors_are_not() {
        let server = LLMError::ProviderError {
            status: 503,
            message: "unavailable".into(),
        };
        let client = LLMError::ProviderError {
            status: 400,
            message: "bad".into(),
        };
        assert!(server.is_transient());
        assert!(!client.is_transient());
        assert!(!LLMError::AuthError("nope".into()).is_transient());
    }

    #[test]
    fn retry_exhaustion_reports_last_kind() {
        let err = LLMError::RetryExceeded {
            attempts: 3,
            last_error: "429".into(),
            last_kind: ErrorKind::RateLimited,
        };
        assert_eq!(err.kind(), ErrorKind::RateLimited);
    }
}
