mod error;
mod operations;
mod requests;
mod types;

pub use error::{NoteError, NoteValidationError};
pub use operations::{validate_note_input, NoteDraft};
pub use requests::CreateNoteRequest;
pub use types::Note;
