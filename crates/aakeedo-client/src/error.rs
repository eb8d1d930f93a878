use aakeedo_types::ShapeError;
use reqwest::StatusCode;

/// Why a fetch produced no result. Only ever logged; callers see `None`.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid {argument}: {value:?}")]
    InvalidInput {
        argument: &'static str,
        value: String,
    },

    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    ResponseStatus { status: StatusCode, body: String },

    #[error("unexpected response shape: {0}")]
    Shape(String),

    #[error("unexpected error: {0}")]
    Unknown(String),
}

impl FetchError {
    pub(crate) fn invalid_input(argument: &'static str, value: &str) -> Self {
        FetchError::InvalidInput {
            argument,
            value: value.to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e)
        } else if e.is_decode() {
            FetchError::Shape(e.to_string())
        } else if e.is_builder() {
            FetchError::Unknown(e.to_string())
        } else {
            FetchError::Transport(e)
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Shape(e.to_string())
    }
}

impl From<ShapeError> for FetchError {
    fn from(e: ShapeError) -> Self {
        FetchError::Shape(e.to_string())
    }
}
