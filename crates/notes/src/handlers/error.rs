use std::any::Any;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use notes_core::api::ErrorResponse;
use notes_core::note::NoteError;
use notes_core::storage::note_error_to_status_code;

/// Message for any create payload that can't become a note.
pub const INVALID_NOTE_MESSAGE: &str = "Title and content are required";

pub const NOTE_NOT_FOUND_MESSAGE: &str = "Note not found";

/// JSON error response: a status code plus an [`ErrorResponse`] body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(message),
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.body = self.body.with_error(error);
        self
    }

    /// Maps a note error to a response.
    ///
    /// `storage_message` is shown for storage faults, which also carry the
    /// underlying error text.
    pub fn from_note_error(err: NoteError, storage_message: &str) -> Self {
        let status = StatusCode::from_u16(note_error_to_status_code(&err))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match err {
            NoteError::Validation(_) => Self::new(status, INVALID_NOTE_MESSAGE),
            NoteError::NotFound { .. } => Self::new(status, NOTE_NOT_FOUND_MESSAGE),
            NoteError::Storage(source) => {
                Self::new(status, storage_message).with_error(source.to_string())
            }
        }
    }

    /// A create payload that did not parse as `{title, content}`.
    ///
    /// A body that could not be read at all (e.g. over the size limit) keeps
    /// the extractor's status.
    pub fn invalid_body(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::BytesRejection(_) => {
                Self::new(rejection.status(), "Request body could not be read")
                    .with_error(rejection.body_text())
            }
            _ => Self::new(StatusCode::BAD_REQUEST, INVALID_NOTE_MESSAGE)
                .with_error(rejection.body_text()),
        }
    }

    /// A note id that could not be extracted from the path names no note.
    pub fn invalid_note_id(rejection: PathRejection) -> Self {
        Self::new(StatusCode::NOT_FOUND, NOTE_NOT_FOUND_MESSAGE).with_error(rejection.body_text())
    }

    pub fn route_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Route not found")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status,
                message = %self.body.message,
                error = self.body.error.as_deref().unwrap_or_default(),
                "API error"
            );
        } else {
            tracing::warn!(status = %self.status, message = %self.body.message, "API error");
        }

        (self.status, Json(self.body)).into_response()
    }
}

/// Fallback for unmatched paths and methods.
pub async fn route_not_found() -> ApiError {
    ApiError::route_not_found()
}

/// Gives the timeout layer's empty 408 a JSON body.
pub async fn json_timeout(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return ApiError::new(StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response();
    }
    response
}

/// Turns a handler panic into a 500 JSON response.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!")
        .with_error(details)
        .into_response()
}
