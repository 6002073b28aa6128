//! Pure functions for mapping note errors to HTTP status codes.
//!
//! Every storage fault is a 500 regardless of its cause: the API does not
//! distinguish a throttled request from an unreachable backend.

use crate::note::NoteError;

/// Maps a [`NoteError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Storage` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use notes_core::note::NoteError;
/// use notes_core::storage::note_error_to_status_code;
///
/// let error = NoteError::NotFound {
///     id: "abc-123".to_string(),
/// };
/// assert_eq!(note_error_to_status_code(&error), 404);
/// ```
pub fn note_error_to_status_code(error: &NoteError) -> u16 {
    match error {
        NoteError::Validation(_) => 400,
        NoteError::NotFound { .. } => 404,
        NoteError::Storage(_) => 500,
    }
}
