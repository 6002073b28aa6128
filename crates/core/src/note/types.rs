use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted note.
///
/// Notes are created once and never modified, so `updated_at` always equals
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(with = "crate::serde::iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::serde::iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note with a fresh v4 id, stamped at `now`.
    ///
    /// The timestamp is truncated to milliseconds so the note survives a trip
    /// through the store unchanged.
    pub fn new(title: impl Into<String>, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        let stamp = now.trunc_subsecs(3);
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            content: content.into(),
            created_at: stamp,
            updated_at: stamp,
        }
    }

    /// Sets a specific ID for this note (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_note_has_equal_timestamps() {
        let now = Utc::now();
        let note = Note::new("Groceries", "Milk, eggs", now);

        assert_eq!(note.created_at, note.updated_at);
        assert!(note.created_at <= now);
    }

    #[test]
    fn test_new_note_truncates_to_millis() {
        let now = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let note = Note::new("t", "c", now);

        assert_eq!(note.created_at.timestamp_subsec_nanos(), 123_000_000);
    }

    #[test]
    fn test_new_notes_get_distinct_ids() {
        let now = Utc::now();
        let a = Note::new("a", "a", now);
        let b = Note::new("b", "b", now);

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_note_serializes_camel_case() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let note = Note::new("Title", "Body", now).with_id("note-1");

        let json = serde_json::to_value(&note).unwrap();

        assert_eq!(json["id"], "note-1");
        assert_eq!(json["title"], "Title");
        assert_eq!(json["content"], "Body");
        assert_eq!(json["createdAt"], "2025-03-01T09:30:00.000Z");
        assert_eq!(json["updatedAt"], "2025-03-01T09:30:00.000Z");
    }

    #[test]
    fn test_note_json_round_trip() {
        let note = Note::new("Title", "Body", Utc::now());
        let json = serde_json::to_string(&note).unwrap();
        let back: Note = serde_json::from_str(&json).unwrap();

        assert_eq!(back, note);
    }
}
