//! API request types for note operations.
//!
//! Shared between the server and any client for type-safe API communication.

use serde::{Deserialize, Serialize};

/// Request payload for creating a new note.
///
/// Both fields are required strings; anything that does not parse into this
/// shape is rejected before validation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
}

impl CreateNoteRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
