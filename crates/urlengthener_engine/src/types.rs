use std::fmt;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Sent exactly once per submitted request. `Ok` holds the response body
    /// of a 200 response.
    Completed {
        request_id: RequestId,
        result: Result<String, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The origin plus path did not form a valid URL.
    InvalidUrl,
    /// A response arrived, with a status other than 200.
    HttpStatus(u16),
    /// No response: connect failure, reset, unreadable body.
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
