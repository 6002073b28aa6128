use thiserror::Error;

use crate::storage::StoreError;

/// Errors that can occur when validating the fields of a new note.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    #[error("Note title cannot be empty")]
    EmptyTitle,
    #[error("Note content cannot be empty")]
    EmptyContent,
}

/// Domain-level outcome of a note operation that did not succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoteError {
    #[error(transparent)]
    Validation(#[from] NoteValidationError),
    #[error("Note not found: {id}")]
    NotFound { id: String },
    #[error(transparent)]
    Storage(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            NoteValidationError::EmptyTitle.to_string(),
            "Note title cannot be empty"
        );
        assert_eq!(
            NoteValidationError::EmptyContent.to_string(),
            "Note content cannot be empty"
        );
    }

    #[test]
    fn test_note_error_not_found_display() {
        let error = NoteError::NotFound {
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Note not found: abc-123");
    }

    #[test]
    fn test_note_error_storage_is_transparent() {
        let error = NoteError::from(StoreError::QueryFailed("boom".to_string()));
        assert_eq!(error.to_string(), "Query failed: boom");
    }
}
