//! Activity Feature Extraction
//!
//! Posting-rhythm statistics from the optional post-timestamp sequence:
//! mean and variance of the gaps between consecutive posts, in whole days.

use super::vector::{FeatureVector, GroupExtractor};
use crate::error::Result;
use crate::record::{parse_timestamp, PostStamp};

#[derive(Debug, Clone, Default)]
pub struct ActivityFeatures {
    pub avg_post_interval: f64,
    pub post_interval_variance: f64,
}

impl ActivityFeatures {
    /// Build from the record's post stamps. Stamps without a timestamp are
    /// skipped; fewer than two usable stamps defaults the group to 0. A
    /// present-but-unparseable stamp propagates as `MalformedRecord`.
    pub fn from_posts(posts: Option<&[PostStamp]>) -> Result<Self> {
        let posts = match posts {
            Some(p) if p.len() > 1 => p,
            _ => return Ok(Self::default()),
        };

        let mut stamps = Vec::with_capacity(posts.len());
        for post in posts {
            if let Some(raw) = post.created_at.as_deref() {
                stamps.push(parse_timestamp(raw)?);
            }
        }
        if stamps.len() < 2 {
            return Ok(Self::default());
        }
        stamps.sort();

        let intervals: Vec<f64> = stamps
            .windows(2)
            .map(|w| (w[1] - w[0]).num_days() as f64)
            .collect();

        let mean = intervals.iter().sum::<f64>() / intervals.len() as f64;
        let variance = if intervals.len() > 1 {
            intervals.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / intervals.len() as f64
        } else {
            0.0
        };

        Ok(Self {
            avg_post_interval: mean,
            post_interval_variance: variance,
        })
    }
}

impl GroupExtractor for ActivityFeatures {
    fn apply(&self, vector: &mut FeatureVector) {
        vector.set_by_name("avg_post_interval", self.avg_post_interval);
        vector.set_by_name("post_interval_variance", self.post_interval_variance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    // Shared reference instant so the gaps between stamps are exact whole
    // days; building each stamp from its own `Utc::now()` would skew them
    // by microseconds and truncate a gap to the day below.
    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn stamp(days_ago: i64) -> PostStamp {
        PostStamp {
            created_at: Some((base() - Duration::days(days_ago)).to_rfc3339()),
        }
    }

    #[test]
    fn test_no_posts_defaults() {
        let f = ActivityFeatures::from_posts(None).unwrap();
        assert_eq!(f.avg_post_interval, 0.0);
        assert_eq!(f.post_interval_variance, 0.0);
    }

    #[test]
    fn test_single_post_defaults() {
        let f = ActivityFeatures::from_posts(Some(&[stamp(1)])).unwrap();
        assert_eq!(f.avg_post_interval, 0.0);
    }

    #[test]
    fn test_regular_intervals() {
        // Posts 30, 20, 10 days ago: two 10-day gaps
        let posts = [stamp(30), stamp(20), stamp(10)];
        let f = ActivityFeatures::from_posts(Some(&posts)).unwrap();
        assert_eq!(f.avg_post_interval, 10.0);
        assert_eq!(f.post_interval_variance, 0.0);
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let posts = [stamp(10), stamp(30), stamp(20)];
        let f = ActivityFeatures::from_posts(Some(&posts)).unwrap();
        assert_eq!(f.avg_post_interval, 10.0);
        assert_eq!(f.post_interval_variance, 0.0);
    }

    #[test]
    fn test_irregular_intervals_have_variance() {
        // Gaps of 5 and 15 days: mean 10, variance 25
        let posts = [stamp(22), stamp(17), stamp(2)];
        let f = ActivityFeatures::from_posts(Some(&posts)).unwrap();
        assert_eq!(f.avg_post_interval, 10.0);
        assert_eq!(f.post_interval_variance, 25.0);
    }

    #[test]
    fn test_bad_post_timestamp_errors() {
        let posts = [
            stamp(10),
            PostStamp {
                created_at: Some("garbage".to_string()),
            },
        ];
        assert!(ActivityFeatures::from_posts(Some(&posts)).is_err());
    }

    #[test]
    fn test_stamps_without_dates_are_skipped() {
        let posts = [stamp(10), PostStamp { created_at: None }];
        let f = ActivityFeatures::from_posts(Some(&posts)).unwrap();
        assert_eq!(f.avg_post_interval, 0.0);
    }
}
