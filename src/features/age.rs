//! Account Age Feature Extraction
//!
//! Age in days since creation plus a 5-bucket ordinal category. A missing
//! timestamp defaults the group to 0; an unparseable one is a
//! `MalformedRecord` for the caller to handle.

use chrono::{DateTime, Utc};

use super::vector::{FeatureVector, GroupExtractor};
use crate::error::Result;
use crate::record::parse_timestamp;

#[derive(Debug, Clone, Default)]
pub struct AgeFeatures {
    pub age_days: i64,
    /// 0 = <7d, 1 = <30d, 2 = <90d, 3 = <365d, 4 = older.
    pub age_category: u8,
}

impl AgeFeatures {
    pub fn from_created_at(created_at: Option<&str>, now: DateTime<Utc>) -> Result<Self> {
        let raw = match created_at {
            Some(s) if !s.is_empty() => s,
            _ => return Ok(Self::default()),
        };

        let created = parse_timestamp(raw)?;
        let age_days = (now - created).num_days();

        let age_category = if age_days < 7 {
            0
        } else if age_days < 30 {
            1
        } else if age_days < 90 {
            2
        } else if age_days < 365 {
            3
        } else {
            4
        };

        Ok(Self {
            age_days,
            age_category,
        })
    }
}

impl GroupExtractor for AgeFeatures {
    fn apply(&self, vector: &mut FeatureVector) {
        vector.set_by_name("account_age_days", self.age_days as f64);
        vector.set_by_name("account_age_category", self.age_category as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn days_ago(days: i64) -> String {
        (now() - Duration::days(days)).to_rfc3339()
    }

    #[test]
    fn test_missing_created_at_defaults() {
        let f = AgeFeatures::from_created_at(None, now()).unwrap();
        assert_eq!(f.age_days, 0);
        assert_eq!(f.age_category, 0);
    }

    #[test]
    fn test_bad_created_at_errors() {
        assert!(AgeFeatures::from_created_at(Some("yesterday"), now()).is_err());
    }

    #[test]
    fn test_age_buckets() {
        let cases = [(2, 0), (20, 1), (60, 2), (200, 3), (500, 4)];
        for (days, category) in cases {
            let f = AgeFeatures::from_created_at(Some(&days_ago(days)), now()).unwrap();
            assert_eq!(f.age_category, category, "{} days", days);
            assert_eq!(f.age_days, days);
        }
    }

    #[test]
    fn test_utc_z_suffix_parses() {
        let stamp = format!(
            "{}Z",
            (now() - Duration::days(10)).format("%Y-%m-%dT%H:%M:%S")
        );
        let f = AgeFeatures::from_created_at(Some(&stamp), now()).unwrap();
        assert_eq!(f.age_days, 10);
    }
}
