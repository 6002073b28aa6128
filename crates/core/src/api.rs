//! JSON response envelopes returned by the HTTP API.
//!
//! The UI client treats any body with `success: false` as a user-visible
//! error, so every failure goes through [`ErrorResponse`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::note::Note;

/// `GET /notes` success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListNotesResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Note>,
}

impl ListNotesResponse {
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            success: true,
            count: notes.len(),
            data: notes,
        }
    }
}

/// Success body carrying a single note (`GET /notes/{id}`, `POST /notes`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Note,
}

impl NoteResponse {
    pub fn found(note: Note) -> Self {
        Self {
            success: true,
            message: None,
            data: note,
        }
    }

    pub fn created(note: Note) -> Self {
        Self {
            success: true,
            message: Some("Note created successfully".to_string()),
            data: note,
        }
    }
}

/// Failure body for every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    /// Raw error text for diagnostics, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// `GET /` body: service banner and endpoint listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBanner {
    pub message: String,
    pub endpoints: BTreeMap<String, String>,
}

impl Default for ServiceBanner {
    fn default() -> Self {
        let endpoints = [
            ("GET /notes", "Get all notes"),
            ("GET /notes/:id", "Get a specific note by ID"),
            (
                "POST /notes",
                "Create a new note (requires title and content in body)",
            ),
        ]
        .into_iter()
        .map(|(route, description)| (route.to_string(), description.to_string()))
        .collect();

        Self {
            message: "Welcome to Notes API".to_string(),
            endpoints,
        }
    }
}
