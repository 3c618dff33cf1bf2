//! Feature Layout - Centralized Feature Definition
//!
//! This file controls the feature schema shared by the extractor, the
//! trained artifact and every persisted dataset row.
//!
//! Rules:
//! 1. Add feature -> increment FEATURE_VERSION
//! 2. Change order -> increment FEATURE_VERSION
//! 3. Remove feature -> increment FEATURE_VERSION
//!
//! The classifier consumes a positional array built from this list, so
//! order and completeness are load-bearing.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

/// Current feature layout version.
pub const FEATURE_VERSION: u8 = 1;

/// Feature names in the exact order they appear in the vector.
/// Single source of truth for the extractor <-> model contract.
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Username (0-7) ===
    "username_length",                 // 0
    "username_entropy",                // 1: Shannon entropy of characters
    "username_has_numbers",            // 2
    "username_has_special_chars",      // 3
    "username_has_consecutive_numbers", // 4: 3+ digit run
    "username_has_consecutive_chars",  // 5: 3+ same-char run
    "username_suspicious_patterns",    // 6: count of matched pattern forms
    "username_is_dictionary_word",     // 7

    // === Bio (8-14) ===
    "bio_length",                      // 8
    "bio_sentiment",                   // 9: lexical polarity in [-1, 1]
    "bio_has_links",                   // 10
    "bio_has_suspicious_keywords",     // 11: keyword hit count
    "bio_word_count",                  // 12
    "bio_hashtag_count",               // 13
    "bio_mention_count",               // 14

    // === Account age (15-16) ===
    "account_age_days",                // 15
    "account_age_category",            // 16: 5-bucket ordinal

    // === Network (17-27) ===
    "follower_count",                  // 17
    "following_count",                 // 18
    "post_count",                      // 19
    "follower_following_ratio",        // 20
    "following_follower_ratio",        // 21
    "total_network_size",              // 22
    "network_balance",                 // 23
    "high_following_low_followers",    // 24
    "zero_followers",                  // 25
    "zero_following",                  // 26
    "zero_posts",                      // 27

    // === Activity (28-29) ===
    "avg_post_interval",               // 28: mean gap between posts (days)
    "post_interval_variance",          // 29
];

/// Total number of features. Must match FEATURE_LAYOUT.len().
pub const FEATURE_COUNT: usize = 30;

/// Compute the CRC32 hash of the feature layout.
/// Used to detect layout mismatches between a persisted artifact and the
/// running schema.
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);
    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }
    hasher.finalize()
}

/// Get the layout hash. Inputs are const, so every call agrees.
pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

/// Complete layout information for serialization/logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Error when a persisted feature layout doesn't match the running one.
#[derive(Debug, Clone)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "feature layout mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
            self.expected_version, self.expected_hash, self.actual_version, self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that incoming data matches the current layout.
pub fn validate_layout(
    incoming_version: u8,
    incoming_hash: u32,
) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();
    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }
    Ok(())
}

/// Get feature index by name (O(n), the list is short).
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index.
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 30);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_no_duplicate_names() {
        for (i, a) in FEATURE_LAYOUT.iter().enumerate() {
            for b in &FEATURE_LAYOUT[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_layout_hash_consistency() {
        assert_eq!(compute_layout_hash(), compute_layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_validate_layout() {
        assert!(validate_layout(FEATURE_VERSION, layout_hash()).is_ok());
        assert!(validate_layout(FEATURE_VERSION + 1, layout_hash()).is_err());
        assert!(validate_layout(FEATURE_VERSION, layout_hash() ^ 1).is_err());
    }

    #[test]
    fn test_feature_index_lookup() {
        assert_eq!(feature_index("username_length"), Some(0));
        assert_eq!(feature_index("account_age_category"), Some(16));
        assert_eq!(feature_index("post_interval_variance"), Some(29));
        assert_eq!(feature_index("nonexistent"), None);
    }

    #[test]
    fn test_feature_name_lookup() {
        assert_eq!(feature_name(0), Some("username_length"));
        assert_eq!(feature_name(29), Some("post_interval_variance"));
        assert_eq!(feature_name(100), None);
    }
}
