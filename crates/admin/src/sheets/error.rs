//! Spreadsheet API errors.

use thiserror::Error;

/// Message used when the API reports failure without saying why.
pub const UNKNOWN_API_ERROR: &str = "Unknown API error";

/// Errors that can occur when querying the spreadsheet API.
///
/// The `Display` text is shown to the user inside the failure notice, so
/// it stays short and free of URLs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a successful HTTP response.
    #[error("{0}")]
    Transport(String),

    /// The API answered with `success: false`.
    #[error("{0}")]
    Api(String),

    /// The response body was not an envelope, or `data` had the wrong shape.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Transport error for a non-success HTTP status.
    #[must_use]
    pub fn status(status: reqwest::StatusCode) -> Self {
        Self::Transport(format!("HTTP error! status: {}", status.as_u16()))
    }

    /// Transport error for a failed request, without the request URL.
    #[must_use]
    pub fn request(err: &reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            "request timed out"
        } else if err.is_connect() {
            "could not connect to the API"
        } else {
            "request failed"
        };
        Self::Transport(format!("Network error: {kind}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = ApiError::status(reqwest::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[test]
    fn test_api_message_is_verbatim() {
        let err = ApiError::Api("Sheet \"Orders\" not found".to_string());
        assert_eq!(err.to_string(), "Sheet \"Orders\" not found");
    }
}
