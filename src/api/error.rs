use reqwest::StatusCode;

/// Failure surfaced by an API call.
///
/// Transport failures and structured server errors are the only variants;
/// local input validation never reaches the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response, with the server's `error` message when it sent one.
    #[error("server error ({status}): {message}")]
    Server { status: StatusCode, message: String },
}

impl ApiError {
    pub(crate) fn server(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }
}
