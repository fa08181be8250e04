//! Client error types.

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Client error type.
///
/// Every call returns exactly one of a decoded value or one of these
/// variants. The client never retries and never logs on the caller's behalf.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A path segment cannot be addressed in a URL (empty, `.` or `..`).
    #[error("Invalid path segment: {0}")]
    InvalidPath(String),

    /// No HTTP response was obtained.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-success status.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The server answered with a success status but the body did not match
    /// the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A request body or structured query value could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status carried by the error, if a response was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api(err) => Some(err.status),
            Error::Decode(err) => Some(err.status),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(err) if err.status == StatusCode::NOT_FOUND)
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api(err) if err.status == StatusCode::UNAUTHORIZED)
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api(err) if err.status.is_server_error())
    }

    /// Check if the call was cancelled by the caller.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Transport(err) if err.kind == TransportErrorKind::Cancelled)
    }

    /// Check if the call timed out before a response arrived.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(err) if err.kind == TransportErrorKind::Timeout)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

// ─────────────────────────────────────────────────────────────────────────────
// Transport
// ─────────────────────────────────────────────────────────────────────────────

/// Why no response was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The request or response body exceeded its deadline.
    Timeout,
    /// The connection could not be established.
    Connect,
    /// The caller cancelled the call.
    Cancelled,
    /// Reading the response body failed.
    Body,
    /// Any other client-side failure.
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Connect => "connect",
            TransportErrorKind::Cancelled => "cancelled",
            TransportErrorKind::Body => "body",
            TransportErrorKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Network-level failure. There is never a status code.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    /// Failure category.
    pub kind: TransportErrorKind,
    /// Human-readable description.
    pub message: String,
    #[source]
    source: Option<reqwest::Error>,
}

impl TransportError {
    pub(crate) fn cancelled() -> Self {
        Self {
            kind: TransportErrorKind::Cancelled,
            message: "request cancelled by caller".to_string(),
            source: None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else if err.is_body() || err.is_decode() {
            TransportErrorKind::Body
        } else {
            TransportErrorKind::Other
        };
        Self {
            kind,
            message: err.to_string(),
            source: Some(err),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// API
// ─────────────────────────────────────────────────────────────────────────────

/// Non-success HTTP response.
#[derive(Debug, Clone, Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    /// HTTP status code, preserved exactly as received.
    pub status: StatusCode,
    /// Server message. Validation messages are joined with `; `.
    pub message: String,
    /// Field-level validation messages, when the server sent a list.
    pub details: Vec<String>,
    /// Short error label from the server (e.g. `Bad Request`).
    pub error: Option<String>,
}

impl ApiError {
    /// Build an error from a status and the raw response body.
    ///
    /// Bodies that are not the server's error payload keep their raw text
    /// as the message.
    pub(crate) fn from_body(status: StatusCode, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(payload) => {
                let (message, details) = match payload.message {
                    Some(ErrorMessage::Text(text)) => (text, Vec::new()),
                    Some(ErrorMessage::List(items)) => (items.join("; "), items),
                    Some(ErrorMessage::Other(value)) => (value.to_string(), Vec::new()),
                    None => (fallback_message(status, body), Vec::new()),
                };
                Self {
                    status,
                    message,
                    details,
                    error: payload.error,
                }
            }
            Err(_) => Self {
                status,
                message: fallback_message(status, body),
                details: Vec::new(),
                error: None,
            },
        }
    }
}

fn fallback_message(status: StatusCode, body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() || text.starts_with('{') {
        format!("HTTP {}", status.as_u16())
    } else {
        text.to_string()
    }
}

/// Error payload from the server.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<ErrorMessage>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    Text(String),
    List(Vec<String>),
    Other(serde_json::Value),
}

// ─────────────────────────────────────────────────────────────────────────────
// Decode
// ─────────────────────────────────────────────────────────────────────────────

/// Success response whose body did not match the expected shape.
#[derive(Debug, Error)]
#[error("{status}: {message} at line {line} column {column}")]
pub struct DecodeError {
    /// Status of the response that failed to decode.
    pub status: StatusCode,
    /// Parser message.
    pub message: String,
    /// 1-based line of the failure (0 when unknown).
    pub line: usize,
    /// 1-based column of the failure (0 when unknown).
    pub column: usize,
    /// Byte offset into the body, when it can be computed.
    pub offset: Option<usize>,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    pub(crate) fn new(status: StatusCode, body: &[u8], source: serde_json::Error) -> Self {
        let line = source.line();
        let column = source.column();
        Self {
            status,
            message: source.to_string(),
            line,
            column,
            offset: byte_offset(body, line, column),
            source,
        }
    }
}

/// Convert serde_json's 1-based line/column into a byte offset.
fn byte_offset(body: &[u8], line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut start = 0;
    for _ in 1..line {
        let newline = body[start..].iter().position(|&b| b == b'\n')?;
        start += newline + 1;
    }
    let offset = start + column.saturating_sub(1);
    (offset <= body.len()).then_some(offset)
}
