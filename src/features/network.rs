//! Network Feature Extraction
//!
//! Raw follower/following/post counts, zero-safe ratios, network size and
//! balance, and the boolean spam-shape flags.

use super::vector::{FeatureVector, GroupExtractor};

#[derive(Debug, Clone, Default)]
pub struct NetworkFeatures {
    pub follower_count: u64,
    pub following_count: u64,
    pub post_count: u64,
}

impl NetworkFeatures {
    pub fn new(follower_count: u64, following_count: u64, post_count: u64) -> Self {
        Self {
            follower_count,
            following_count,
            post_count,
        }
    }

    /// follower/following ratio. A zero denominator returns the raw
    /// follower count (specified behavior, not a bug fix).
    pub fn follower_following_ratio(&self) -> f64 {
        if self.following_count > 0 {
            self.follower_count as f64 / self.following_count as f64
        } else {
            self.follower_count as f64
        }
    }

    /// following/follower ratio with the symmetric zero rule.
    pub fn following_follower_ratio(&self) -> f64 {
        if self.follower_count > 0 {
            self.following_count as f64 / self.follower_count as f64
        } else {
            self.following_count as f64
        }
    }

    pub fn total_network_size(&self) -> u64 {
        self.follower_count + self.following_count
    }

    /// |follower - following| / total, 0 for an empty network.
    pub fn network_balance(&self) -> f64 {
        let total = self.total_network_size();
        if total == 0 {
            return 0.0;
        }
        self.follower_count.abs_diff(self.following_count) as f64 / total as f64
    }

    pub fn high_following_low_followers(&self) -> bool {
        self.following_count > 100 && self.follower_count < 10
    }
}

impl GroupExtractor for NetworkFeatures {
    fn apply(&self, vector: &mut FeatureVector) {
        vector.set_by_name("follower_count", self.follower_count as f64);
        vector.set_by_name("following_count", self.following_count as f64);
        vector.set_by_name("post_count", self.post_count as f64);
        vector.set_by_name("follower_following_ratio", self.follower_following_ratio());
        vector.set_by_name("following_follower_ratio", self.following_follower_ratio());
        vector.set_by_name("total_network_size", self.total_network_size() as f64);
        vector.set_by_name("network_balance", self.network_balance());
        vector.set_by_name(
            "high_following_low_followers",
            self.high_following_low_followers() as u8 as f64,
        );
        vector.set_by_name("zero_followers", (self.follower_count == 0) as u8 as f64);
        vector.set_by_name("zero_following", (self.following_count == 0) as u8 as f64);
        vector.set_by_name("zero_posts", (self.post_count == 0) as u8 as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_normal() {
        let n = NetworkFeatures::new(100, 50, 10);
        assert_eq!(n.follower_following_ratio(), 2.0);
        assert_eq!(n.following_follower_ratio(), 0.5);
    }

    #[test]
    fn test_ratio_zero_denominator_returns_numerator() {
        let n = NetworkFeatures::new(42, 0, 0);
        assert_eq!(n.follower_following_ratio(), 42.0);

        let n = NetworkFeatures::new(0, 7, 0);
        assert_eq!(n.following_follower_ratio(), 7.0);
    }

    #[test]
    fn test_balance_equal_counts_is_zero() {
        let n = NetworkFeatures::new(320, 320, 5);
        assert_eq!(n.network_balance(), 0.0);
    }

    #[test]
    fn test_balance_one_sided_is_one() {
        assert_eq!(NetworkFeatures::new(50, 0, 0).network_balance(), 1.0);
        assert_eq!(NetworkFeatures::new(0, 50, 0).network_balance(), 1.0);
    }

    #[test]
    fn test_balance_empty_network_is_zero() {
        assert_eq!(NetworkFeatures::new(0, 0, 0).network_balance(), 0.0);
    }

    #[test]
    fn test_high_following_low_followers_flag() {
        assert!(NetworkFeatures::new(5, 1000, 2).high_following_low_followers());
        assert!(!NetworkFeatures::new(320, 280, 67).high_following_low_followers());
        // boundary: needs strictly >100 and <10
        assert!(!NetworkFeatures::new(10, 1000, 0).high_following_low_followers());
        assert!(!NetworkFeatures::new(5, 100, 0).high_following_low_followers());
    }

    #[test]
    fn test_apply_writes_group_slots() {
        let mut v = FeatureVector::new();
        NetworkFeatures::new(0, 150, 0).apply(&mut v);
        assert_eq!(v.get_by_name("zero_followers"), Some(1.0));
        assert_eq!(v.get_by_name("zero_posts"), Some(1.0));
        assert_eq!(v.get_by_name("high_following_low_followers"), Some(1.0));
        assert_eq!(v.get_by_name("total_network_size"), Some(150.0));
    }
}
