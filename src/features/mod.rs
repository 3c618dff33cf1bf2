//! Features Module - Feature Extraction Engine
//!
//! Maps a raw `AccountRecord` to the fixed 30-slot feature vector. Pure and
//! side-effect free; every missing sub-field degrades to a documented zero
//! default. The only failure mode is a present-but-unparseable timestamp.

pub mod activity;
pub mod age;
pub mod bio;
pub mod layout;
pub mod network;
pub mod sentiment;
pub mod username;
pub mod vector;

use chrono::{DateTime, Utc};

pub use layout::{
    feature_index, feature_name, layout_hash, validate_layout, LayoutInfo, FEATURE_COUNT,
    FEATURE_LAYOUT, FEATURE_VERSION,
};
pub use vector::{FeatureVector, GroupExtractor};

use crate::error::Result;
use crate::record::AccountRecord;

/// Extract the full feature vector for one record, against the current
/// wall clock.
pub fn extract(record: &AccountRecord) -> Result<FeatureVector> {
    extract_at(record, Utc::now())
}

/// Extraction with an explicit "now", so age features are testable.
pub fn extract_at(record: &AccountRecord, now: DateTime<Utc>) -> Result<FeatureVector> {
    let mut vector = FeatureVector::new();

    username::UsernameFeatures::from_username(&record.username).apply(&mut vector);
    bio::BioFeatures::from_bio(record.bio.as_deref()).apply(&mut vector);
    age::AgeFeatures::from_created_at(record.created_at.as_deref(), now)?.apply(&mut vector);
    network::NetworkFeatures::new(
        record.follower_count,
        record.following_count,
        record.post_count,
    )
    .apply(&mut vector);
    activity::ActivityFeatures::from_posts(record.posts.as_deref())?.apply(&mut vector);

    Ok(vector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn days_ago(days: i64) -> String {
        (Utc::now() - Duration::days(days)).to_rfc3339()
    }

    #[test]
    fn test_suspicious_record_scenario() {
        let record = AccountRecord {
            username: "user123456".to_string(),
            bio: Some("💰 Make money fast! http://x.co".to_string()),
            created_at: Some(days_ago(2)),
            follower_count: 5,
            following_count: 1000,
            post_count: 2,
            posts: None,
        };
        let v = extract(&record).unwrap();

        assert_eq!(v.get_by_name("high_following_low_followers"), Some(1.0));
        assert!(v.get_by_name("bio_has_suspicious_keywords").unwrap() >= 1.0);
        assert_eq!(v.get_by_name("account_age_category"), Some(0.0));
        assert_eq!(v.get_by_name("bio_has_links"), Some(1.0));
    }

    #[test]
    fn test_genuine_record_scenario() {
        let record = AccountRecord {
            username: "sarah_wilson".to_string(),
            bio: Some("Photography enthusiast".to_string()),
            created_at: Some(days_ago(500)),
            follower_count: 320,
            following_count: 280,
            post_count: 67,
            posts: None,
        };
        let v = extract(&record).unwrap();

        assert_eq!(v.get_by_name("high_following_low_followers"), Some(0.0));
        assert_eq!(v.get_by_name("account_age_category"), Some(4.0));
        assert!(v.get_by_name("network_balance").unwrap() < 0.1);
    }

    #[test]
    fn test_bare_record_is_all_defaults() {
        let record = AccountRecord {
            username: String::new(),
            ..Default::default()
        };
        let v = extract(&record).unwrap();

        // An empty record still has an empty network, so the zero-count
        // flags fire; every other slot stays at its zero default.
        for (name, value) in v.named_values() {
            match name {
                "zero_followers" | "zero_following" | "zero_posts" => {
                    assert_eq!(value, 1.0, "{}", name)
                }
                _ => assert_eq!(value, 0.0, "{}", name),
            }
        }
    }

    #[test]
    fn test_bad_timestamp_propagates() {
        let record = AccountRecord {
            username: "x".to_string(),
            created_at: Some("13/01/2024".to_string()),
            ..Default::default()
        };
        assert!(extract(&record).is_err());
    }

    #[test]
    fn test_every_slot_is_written_or_defaulted() {
        let record = AccountRecord {
            username: "someone".to_string(),
            bio: Some("hello".to_string()),
            created_at: Some(days_ago(100)),
            follower_count: 10,
            following_count: 20,
            post_count: 3,
            posts: None,
        };
        let v = extract(&record).unwrap();
        assert!(v.is_compatible());
        assert_eq!(v.values.len(), FEATURE_COUNT);
        // Spot-check slots from each group
        assert_eq!(v.get_by_name("username_length"), Some(7.0));
        assert_eq!(v.get_by_name("bio_word_count"), Some(1.0));
        assert_eq!(v.get_by_name("account_age_category"), Some(3.0));
        assert_eq!(v.get_by_name("total_network_size"), Some(30.0));
        assert_eq!(v.get_by_name("avg_post_interval"), Some(0.0));
    }
}
