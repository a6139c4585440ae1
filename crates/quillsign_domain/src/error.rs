use serde_json::Value;

pub type Result<T> = std::result::Result<T, Error>;

/// Single error surface of the SDK.
///
/// The three kinds keep retryability and status inspection exhaustive:
/// `Configuration` is raised synchronously before any network activity,
/// `Http` carries a non-2xx response, `Transport` a connection-level or
/// timeout failure with no status at all.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{message}")]
    Configuration { message: String },

    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        /// Raw response body, when it parsed as JSON
        response: Option<Value>,
        retryable: bool,
    },

    #[error("{message}")]
    Transport { message: String, retryable: bool },
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration { message: message.into() }
    }

    pub fn transport(message: impl Into<String>, retryable: bool) -> Self {
        Error::Transport { message: message.into(), retryable }
    }

    /// Builds the error for a non-2xx response. The message is taken from the
    /// body's `message` field when present and textual; 5xx and 429 are
    /// marked retryable.
    pub fn from_status(status: u16, body: Option<Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(|body| body.get("message"))
            .and_then(|message| message.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("request failed with status {status}"));

        Error::Http {
            status,
            message,
            response: body,
            retryable: status >= 500 || status == 429,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Configuration { .. } => false,
            Error::Http { retryable, .. } => *retryable,
            Error::Transport { retryable, .. } => *retryable,
        }
    }

    /// Raw response payload of an HTTP status error, if the body was JSON.
    pub fn response(&self) -> Option<&Value> {
        match self {
            Error::Http { response, .. } => response.as_ref(),
            _ => None,
        }
    }
}
