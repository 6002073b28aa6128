//! Serde helpers for the timestamp wire format.
//!
//! Notes carry ISO-8601 UTC timestamps with millisecond precision and a `Z`
//! suffix (`2025-01-01T12:00:00.123Z`), both on the wire and in the store.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 timestamp, normalizing it to UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

/// `#[serde(with = "...")]` adapter for millisecond ISO-8601 timestamps.
pub mod iso_millis {
    use super::*;

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_timestamp(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamped {
        #[serde(with = "iso_millis")]
        at: DateTime<Utc>,
    }

    #[test]
    fn test_format_timestamp_uses_millis_and_z_suffix() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(&ts), "2025-01-02T03:04:05.000Z");
    }

    #[test]
    fn test_parse_timestamp_normalizes_offset() {
        let parsed = parse_timestamp("2025-01-02T05:04:05.250+02:00").unwrap();
        assert_eq!(format_timestamp(&parsed), "2025-01-02T03:04:05.250Z");
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_iso_millis_serializes_as_string() {
        let value = Stamped {
            at: Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap(),
        };
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"at":"2024-12-31T23:59:59.000Z"}"#);
    }

    #[test]
    fn test_iso_millis_rejects_invalid_string() {
        let result: Result<Stamped, _> = serde_json::from_str(r#"{"at":"not-a-date"}"#);
        assert!(result.is_err());
    }
}
