//! Note operations on top of a `NoteStore`.

use std::sync::Arc;

use chrono::Utc;
use notes_core::note::{validate_note_input, Note, NoteError};
use notes_core::storage::NoteStore;

/// Creates, fetches and lists notes.
///
/// Cheap to clone; all clones share the same store.
#[derive(Clone)]
pub struct NoteRepository {
    store: Arc<dyn NoteStore>,
}

impl NoteRepository {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// Validates the fields and persists a new note.
    ///
    /// Nothing is written when validation fails.
    pub async fn create_note(&self, title: &str, content: &str) -> Result<Note, NoteError> {
        let note = validate_note_input(title, content)?.into_note(Utc::now());

        self.store.put_note(&note).await?;

        tracing::info!(note_id = %note.id, title = %note.title, "Created note");
        Ok(note)
    }

    /// Fetches a note by id.
    pub async fn get_note(&self, id: &str) -> Result<Note, NoteError> {
        self.store
            .get_note(id)
            .await?
            .ok_or_else(|| NoteError::NotFound { id: id.to_string() })
    }

    /// Returns every stored note.
    pub async fn list_notes(&self) -> Result<Vec<Note>, NoteError> {
        let notes = self.store.scan_notes().await?;
        tracing::debug!(count = notes.len(), "Listed notes");
        Ok(notes)
    }
}
