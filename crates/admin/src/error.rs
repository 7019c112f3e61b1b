//! Unified error handling for the dashboard.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::notices::{Notice, NoticeLevel};

/// Errors a handler returns instead of a page.
///
/// Spreadsheet failures never reach this type: loads turn them into
/// notices on the page they were rendering.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Standalone notice fragment used for error responses.
#[derive(Template)]
#[template(path = "partials/notice.html")]
struct NoticeTemplate {
    notice: Notice,
}

impl AppError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::info!(status = %self.status(), error = %self, "Request rejected");

        let template = NoticeTemplate {
            notice: Notice {
                level: NoticeLevel::Error,
                message: self.to_string(),
            },
        };
        let body = template.render().unwrap_or_else(|e| {
            tracing::error!("Template render error: {}", e);
            "Internal Server Error".to_string()
        });

        (self.status(), Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Order not found".to_string());
        assert_eq!(err.to_string(), "Order not found");

        let err = AppError::BadRequest("invalid layout: list".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid layout: list");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

}
