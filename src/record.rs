//! Account Record - Input Schema
//!
//! Raw profile records as the social-network producers emit them. The core
//! never persists these; they only flow through feature extraction.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DetectorError, Result};

/// One post's creation stamp, the only post detail the pipeline reads.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PostStamp {
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A raw user-profile record supplied by an account producer.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AccountRecord {
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub follower_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub post_count: u64,
    #[serde(default)]
    pub posts: Option<Vec<PostStamp>>,
}

/// A record with its ground-truth label. Label true = fake.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LabeledAccount {
    #[serde(flatten)]
    pub record: AccountRecord,
    pub is_fake: bool,
}

/// Parse a producer timestamp into UTC.
///
/// Accepts full RFC 3339 (trailing `Z` or an explicit offset) and naive
/// ISO-8601 strings, which are treated as UTC. A present-but-unparseable
/// string is a `MalformedRecord`; absence is handled by the callers.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    Err(DetectorError::MalformedRecord(format!(
        "unparseable timestamp '{}'",
        raw
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_rfc3339_utc_marker() {
        let dt = parse_timestamp("2024-03-01T12:30:00Z").unwrap();
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_parse_naive_iso() {
        // The original corpus writes naive isoformat strings
        let dt = parse_timestamp("2024-03-01T12:30:00.123456").unwrap();
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_parse_offset() {
        let dt = parse_timestamp("2024-03-01T12:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_garbage_is_malformed() {
        let err = parse_timestamp("not-a-date").unwrap_err();
        assert!(matches!(err, DetectorError::MalformedRecord(_)));
    }

    #[test]
    fn test_record_deserializes_with_missing_fields() {
        let rec: AccountRecord =
            serde_json::from_str(r#"{"username": "sam"}"#).unwrap();
        assert_eq!(rec.username, "sam");
        assert!(rec.bio.is_none());
        assert_eq!(rec.follower_count, 0);
    }
}
