//! Username Feature Extraction
//!
//! Length, entropy, character-class flags and suspicious-pattern counts.
//! An empty username leaves the whole group at 0.

use once_cell::sync::Lazy;
use regex::Regex;

use super::vector::{FeatureVector, GroupExtractor};

static HAS_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());
static HAS_SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[!@#$%^&*]").unwrap());
static DIGIT_RUN_3: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{3,}").unwrap());

// Suspicious pattern forms: long digit runs, long letter runs, repeated
// special chars. The repeated-same-character form needs a backreference,
// which the regex crate does not support, so it is a manual run scan below.
static DIGIT_RUN_4: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4,}").unwrap());
static LETTER_RUN_10: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]{10,}").unwrap());
static SPECIAL_RUN_3: Lazy<Regex> = Lazy::new(|| Regex::new(r"[!@#$%^&*]{3,}").unwrap());

/// Common usernames that suggest a throwaway or placeholder account.
const COMMON_WORDS: &[&str] = &[
    "user", "admin", "test", "demo", "guest", "anonymous", "unknown", "john", "jane", "mike",
    "sarah", "david", "lisa", "chris", "emma",
];

#[derive(Debug, Clone, Default)]
pub struct UsernameFeatures {
    pub length: usize,
    pub entropy: f64,
    pub has_numbers: bool,
    pub has_special_chars: bool,
    pub has_consecutive_numbers: bool,
    pub has_consecutive_chars: bool,
    pub suspicious_patterns: u32,
    pub is_dictionary_word: bool,
}

impl UsernameFeatures {
    pub fn from_username(username: &str) -> Self {
        if username.is_empty() {
            return Self::default();
        }

        let mut suspicious = 0u32;
        if DIGIT_RUN_4.is_match(username) {
            suspicious += 1;
        }
        if LETTER_RUN_10.is_match(username) {
            suspicious += 1;
        }
        if SPECIAL_RUN_3.is_match(username) {
            suspicious += 1;
        }
        if longest_char_run(username) >= 4 {
            suspicious += 1;
        }

        Self {
            length: username.chars().count(),
            entropy: shannon_entropy(username),
            has_numbers: HAS_DIGIT.is_match(username),
            has_special_chars: HAS_SPECIAL.is_match(username),
            has_consecutive_numbers: DIGIT_RUN_3.is_match(username),
            has_consecutive_chars: longest_char_run(username) >= 3,
            suspicious_patterns: suspicious,
            is_dictionary_word: COMMON_WORDS.contains(&username.to_lowercase().as_str()),
        }
    }
}

impl GroupExtractor for UsernameFeatures {
    fn apply(&self, vector: &mut FeatureVector) {
        vector.set_by_name("username_length", self.length as f64);
        vector.set_by_name("username_entropy", self.entropy);
        vector.set_by_name("username_has_numbers", self.has_numbers as u8 as f64);
        vector.set_by_name(
            "username_has_special_chars",
            self.has_special_chars as u8 as f64,
        );
        vector.set_by_name(
            "username_has_consecutive_numbers",
            self.has_consecutive_numbers as u8 as f64,
        );
        vector.set_by_name(
            "username_has_consecutive_chars",
            self.has_consecutive_chars as u8 as f64,
        );
        vector.set_by_name(
            "username_suspicious_patterns",
            self.suspicious_patterns as f64,
        );
        vector.set_by_name(
            "username_is_dictionary_word",
            self.is_dictionary_word as u8 as f64,
        );
    }
}

/// Shannon entropy over the character multiset, in bits. 0 for "" and for
/// single-character alphabets. Counts runs of the sorted characters so the
/// floating-point summation order is fixed and repeated calls agree to the
/// last bit.
pub fn shannon_entropy(text: &str) -> f64 {
    let mut chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return 0.0;
    }
    chars.sort_unstable();

    let len = chars.len() as f64;
    let mut entropy = 0.0;
    let mut run = 1usize;
    for i in 1..=chars.len() {
        if i < chars.len() && chars[i] == chars[i - 1] {
            run += 1;
            continue;
        }
        let p = run as f64 / len;
        entropy -= p * p.log2();
        run = 1;
    }
    entropy
}

/// Length of the longest run of one repeated character.
fn longest_char_run(text: &str) -> usize {
    let mut best = 0usize;
    let mut run = 0usize;
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            run = 1;
            prev = Some(c);
        }
        best = best.max(run);
    }
    best
}
