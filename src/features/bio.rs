//! Bio Feature Extraction
//!
//! Text statistics, lexical sentiment, links, suspicious keywords, hashtags
//! and mentions. A missing or empty bio yields the documented zero defaults.

use once_cell::sync::Lazy;
use regex::Regex;

use super::sentiment;
use super::vector::{FeatureVector, GroupExtractor};

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+").unwrap());
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());

/// Spam/scam vocabulary. Hits are counted per keyword (substring match,
/// case-insensitive, not mutually exclusive).
const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "buy", "sell", "earn", "money", "profit", "investment", "crypto", "bitcoin", "click", "link",
    "offer", "discount", "free", "limited", "urgent", "act now", "make money", "work from home",
    "get rich", "quick cash", "easy money",
];

#[derive(Debug, Clone, Default)]
pub struct BioFeatures {
    pub length: usize,
    pub word_count: usize,
    pub sentiment: f64,
    pub has_links: bool,
    pub suspicious_keywords: u32,
    pub hashtag_count: usize,
    pub mention_count: usize,
}

impl BioFeatures {
    pub fn from_bio(bio: Option<&str>) -> Self {
        let bio = match bio {
            Some(b) if !b.is_empty() => b,
            _ => return Self::default(),
        };

        let lower = bio.to_lowercase();
        let suspicious = SUSPICIOUS_KEYWORDS
            .iter()
            .filter(|kw| lower.contains(**kw))
            .count() as u32;

        Self {
            length: bio.chars().count(),
            word_count: bio.split_whitespace().count(),
            sentiment: sentiment::polarity(bio),
            has_links: URL.is_match(bio),
            suspicious_keywords: suspicious,
            hashtag_count: HASHTAG.find_iter(bio).count(),
            mention_count: MENTION.find_iter(bio).count(),
        }
    }
}

impl GroupExtractor for BioFeatures {
    fn apply(&self, vector: &mut FeatureVector) {
        vector.set_by_name("bio_length", self.length as f64);
        vector.set_by_name("bio_sentiment", self.sentiment);
        vector.set_by_name("bio_has_links", self.has_links as u8 as f64);
        vector.set_by_name(
            "bio_has_suspicious_keywords",
            self.suspicious_keywords as f64,
        );
        vector.set_by_name("bio_word_count", self.word_count as f64);
        vector.set_by_name("bio_hashtag_count", self.hashtag_count as f64);
        vector.set_by_name("bio_mention_count", self.mention_count as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_bio_is_all_zero() {
        let f = BioFeatures::from_bio(None);
        assert_eq!(f.length, 0);
        assert_eq!(f.word_count, 0);
        assert_eq!(f.sentiment, 0.0);
        assert!(!f.has_links);

        let f = BioFeatures::from_bio(Some(""));
        assert_eq!(f.length, 0);
    }

    #[test]
    fn test_spam_bio() {
        let f = BioFeatures::from_bio(Some("💰 Make money fast! http://x.co"));
        assert!(f.has_links);
        // "money" and "make money" both hit
        assert!(f.suspicious_keywords >= 2);
        assert_eq!(f.word_count, 5);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let f = BioFeatures::from_bio(Some("FREE CRYPTO"));
        assert_eq!(f.suspicious_keywords, 2);
    }

    #[test]
    fn test_benign_bio() {
        let f = BioFeatures::from_bio(Some("Photography enthusiast"));
        assert_eq!(f.suspicious_keywords, 0);
        assert!(!f.has_links);
        assert!(f.sentiment > 0.0);
    }

    #[test]
    fn test_hashtags_and_mentions() {
        let f = BioFeatures::from_bio(Some("#travel #food with @anna and @ben"));
        assert_eq!(f.hashtag_count, 2);
        assert_eq!(f.mention_count, 2);
    }

    #[test]
    fn test_https_link_detected() {
        assert!(BioFeatures::from_bio(Some("see https://example.com/x")).has_links);
        assert!(!BioFeatures::from_bio(Some("no links here")).has_links);
    }

    #[test]
    fn test_apply_writes_group_slots() {
        let mut v = FeatureVector::new();
        BioFeatures::from_bio(Some("crypto profit #now")).apply(&mut v);
        assert_eq!(v.get_by_name("bio_has_suspicious_keywords"), Some(2.0));
        assert_eq!(v.get_by_name("bio_hashtag_count"), Some(1.0));
    }
}
