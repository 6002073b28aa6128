use chrono::{DateTime, Utc};

use super::error::NoteValidationError;
use super::types::Note;

/// Trimmed, non-empty fields ready to become a [`Note`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    /// Turn the draft into a note with a fresh id, stamped at `now`.
    pub fn into_note(self, now: DateTime<Utc>) -> Note {
        Note::new(self.title, self.content, now)
    }
}

/// Validates the user-supplied fields of a new note.
///
/// Both fields are trimmed; the title is checked first.
pub fn validate_note_input(title: &str, content: &str) -> Result<NoteDraft, NoteValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(NoteValidationError::EmptyTitle);
    }

    let content = content.trim();
    if content.is_empty() {
        return Err(NoteValidationError::EmptyContent);
    }

    Ok(NoteDraft {
        title: title.to_string(),
        content: content.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_passes() {
        let draft = validate_note_input("Groceries", "Milk, eggs").unwrap();

        assert_eq!(draft.title, "Groceries");
        assert_eq!(draft.content, "Milk, eggs");
    }

    #[test]
    fn test_empty_title_rejected() {
        assert_eq!(
            validate_note_input("", "x"),
            Err(NoteValidationError::EmptyTitle)
        );
    }

    #[test]
    fn test_whitespace_title_rejected() {
        assert_eq!(
            validate_note_input(" \t\n ", "x"),
            Err(NoteValidationError::EmptyTitle)
        );
    }

    #[test]
    fn test_empty_content_rejected() {
        assert_eq!(
            validate_note_input("x", ""),
            Err(NoteValidationError::EmptyContent)
        );
    }

    #[test]
    fn test_whitespace_content_rejected() {
        assert_eq!(
            validate_note_input("x", "   "),
            Err(NoteValidationError::EmptyContent)
        );
    }

    #[test]
    fn test_inner_whitespace_preserved() {
        let draft = validate_note_input("  two  words ", " a\nb ").unwrap();

        assert_eq!(draft.title, "two  words");
        assert_eq!(draft.content, "a\nb");
    }

    #[test]
    fn test_draft_into_note() {
        let now = Utc::now();
        let note = validate_note_input(" t ", " c ").unwrap().into_note(now);

        assert_eq!(note.title, "t");
        assert_eq!(note.content, "c");
        assert_eq!(note.created_at, note.updated_at);
        assert!(!note.id.is_empty());
    }
}
