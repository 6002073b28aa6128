//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and notes.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use notes_core::note::Note;
use notes_core::serde::{format_timestamp, parse_timestamp};
use notes_core::storage::StoreError;
use notes_core::table::NOTE_ID_ATTRIBUTE;

pub const ATTR_TITLE: &str = "title";
pub const ATTR_CONTENT: &str = "content";
pub const ATTR_CREATED_AT: &str = "createdAt";
pub const ATTR_UPDATED_AT: &str = "updatedAt";

/// Build the primary key map for a note id.
pub fn note_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(
        NOTE_ID_ATTRIBUTE.to_string(),
        AttributeValue::S(id.to_string()),
    )])
}

/// Convert a Note to a DynamoDB item.
pub fn note_to_item(note: &Note) -> HashMap<String, AttributeValue> {
    let mut item = note_key(&note.id);

    item.insert(ATTR_TITLE.to_string(), AttributeValue::S(note.title.clone()));
    item.insert(
        ATTR_CONTENT.to_string(),
        AttributeValue::S(note.content.clone()),
    );
    item.insert(
        ATTR_CREATED_AT.to_string(),
        AttributeValue::S(format_timestamp(&note.created_at)),
    );
    item.insert(
        ATTR_UPDATED_AT.to_string(),
        AttributeValue::S(format_timestamp(&note.updated_at)),
    );

    item
}

/// Convert a DynamoDB item to a Note.
pub fn item_to_note(item: &HashMap<String, AttributeValue>) -> Result<Note, StoreError> {
    Ok(Note {
        id: get_string(item, NOTE_ID_ATTRIBUTE)?,
        title: get_string(item, ATTR_TITLE)?,
        content: get_string(item, ATTR_CONTENT)?,
        created_at: get_datetime(item, ATTR_CREATED_AT)?,
        updated_at: get_datetime(item, ATTR_UPDATED_AT)?,
    })
}

fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::Serialization(format!("Missing or invalid field: {}", key)))
}

fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, StoreError> {
    let s = get_string(item, key)?;
    parse_timestamp(&s)
        .map_err(|e| StoreError::Serialization(format!("Invalid datetime {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_note() -> Note {
        Note {
            id: "550e8400-e29b-41d4-a716-446655440001".to_string(),
            title: "Groceries".to_string(),
            content: "Milk, eggs".to_string(),
            created_at: parse_timestamp("2024-01-15T10:30:00.125Z").unwrap(),
            updated_at: parse_timestamp("2024-01-15T10:30:00.125Z").unwrap(),
        }
    }

    #[test]
    fn test_note_round_trip() {
        let note = sample_note();
        let item = note_to_item(&note);
        let parsed = item_to_note(&item).unwrap();

        assert_eq!(parsed, note);
    }

    #[test]
    fn test_note_item_layout() {
        let item = note_to_item(&sample_note());

        assert_eq!(item.len(), 5);
        assert_eq!(
            item.get("id").and_then(|v| v.as_s().ok()).map(String::as_str),
            Some("550e8400-e29b-41d4-a716-446655440001")
        );
        assert_eq!(
            item.get("createdAt")
                .and_then(|v| v.as_s().ok())
                .map(String::as_str),
            Some("2024-01-15T10:30:00.125Z")
        );
    }

    #[test]
    fn test_note_key() {
        let key = note_key("abc");

        assert_eq!(key.len(), 1);
        assert_eq!(key.get("id"), Some(&AttributeValue::S("abc".to_string())));
    }

    #[test]
    fn test_item_missing_field_fails() {
        let mut item = note_to_item(&sample_note());
        item.remove("content");

        let result = item_to_note(&item);

        assert_eq!(
            result,
            Err(StoreError::Serialization(
                "Missing or invalid field: content".to_string()
            ))
        );
    }

    #[test]
    fn test_item_wrong_type_fails() {
        let mut item = note_to_item(&sample_note());
        item.insert("title".to_string(), AttributeValue::N("42".to_string()));

        assert!(matches!(
            item_to_note(&item),
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_item_invalid_datetime_fails() {
        let mut item = note_to_item(&sample_note());
        item.insert(
            "updatedAt".to_string(),
            AttributeValue::S("not-a-date".to_string()),
        );

        let err = item_to_note(&item).unwrap_err();

        assert!(err.to_string().contains("Invalid datetime updatedAt"));
    }

    #[test]
    fn test_item_accepts_legacy_timestamp_precision() {
        let mut item = note_to_item(&sample_note());
        item.insert(
            "createdAt".to_string(),
            AttributeValue::S("2024-01-15T10:30:00Z".to_string()),
        );

        let note = item_to_note(&item).unwrap();

        assert_eq!(format_timestamp(&note.created_at), "2024-01-15T10:30:00.000Z");
    }
}
