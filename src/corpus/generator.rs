//! Synthetic Corpus Generator
//!
//! Seeded generation of labeled accounts for when no corpus file exists.
//! Fake accounts get the spam shape (digit-suffixed usernames, money/link
//! bios, inverted follow graph, young age); real accounts get plain names,
//! hobby bios and balanced networks.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::record::{AccountRecord, LabeledAccount};

const FIRST_NAMES: &[&str] = &[
    "james", "mary", "robert", "patricia", "john", "jennifer", "michael", "linda", "david",
    "elizabeth", "william", "barbara", "richard", "susan", "joseph", "jessica", "thomas", "karen",
    "sarah", "daniel",
];

const LAST_NAMES: &[&str] = &[
    "smith", "johnson", "williams", "brown", "jones", "garcia", "miller", "davis", "rodriguez",
    "martinez", "wilson", "anderson", "taylor", "thomas", "moore",
];

const HOBBY_WORDS: &[&str] = &[
    "photography", "hiking", "cooking", "music", "travel", "books", "coffee", "running", "art",
    "gaming", "gardening", "cycling", "yoga", "movies", "chess",
];

const SPAM_SUFFIXES: &[&str] = &["bot", "fake", "spam", "test"];
const PLACEHOLDER_NAMES: &[&str] = &["user", "admin", "test", "demo"];
const SPECIAL_CHARS: &[&str] = &["!", "@", "#", "$"];

const REAL_BIOS: &[&str] = &[
    "Living life one day at a time",
    "Photography enthusiast",
    "Food lover and home cook",
    "Travel addict exploring the world",
    "Bookworm and coffee addict",
    "Fitness enthusiast",
    "Music lover",
    "Tech geek",
    "Nature lover",
    "Dog person",
    "Cat person",
    "Adventure seeker",
];

pub struct CorpusGenerator {
    rng: StdRng,
}

impl CorpusGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.gen_range(0..items.len())]
    }

    fn fake_username(&mut self) -> String {
        let base = format!("{}{}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES));
        match self.rng.gen_range(0..6) {
            0 => format!("{}{}", base, self.rng.gen_range(1000..10000)),
            1 => format!("{}{}", base, self.pick(&["123", "456", "789", "000"])),
            2 => format!("{}{}{}", base, self.pick(&["_", "."]), self.rng.gen_range(10..100)),
            3 => format!("{}{}", base, self.pick(SPAM_SUFFIXES)),
            4 => format!("{}{}", self.pick(PLACEHOLDER_NAMES), self.rng.gen_range(100..1000)),
            _ => format!(
                "{}{}{}",
                base,
                self.pick(SPECIAL_CHARS),
                self.rng.gen_range(1..10)
            ),
        }
    }

    fn fake_bio(&mut self) -> String {
        let url = format!(
            "https://{}.example.com/{}",
            self.pick(HOBBY_WORDS),
            self.rng.gen_range(100..1000)
        );
        match self.rng.gen_range(0..10) {
            0 => format!("💰 Make money fast! Click here: {}", url),
            1 => format!("🔥 Limited time offer! {}", url),
            2 => format!("💸 Earn {}$ daily! {}", self.rng.gen_range(100..1000), url),
            3 => format!("🚀 Join our crypto investment program! {}", url),
            4 => format!("📱 Download our app and get rich! {}", url),
            5 => format!("🎁 Free giveaway! Click to win! {}", url),
            6 => format!("💯 100% guaranteed profit! {}", url),
            7 => format!("⚡ Quick cash method! {}", url),
            8 => format!(
                "🏠 Work from home! Earn {}$/hour! {}",
                self.rng.gen_range(50..500),
                url
            ),
            _ => format!("🎯 Best investment opportunity! {}", url),
        }
    }

    fn real_username(&mut self) -> String {
        match self.rng.gen_range(0..4) {
            0 => format!("{}_{}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES)),
            1 => format!("{}{}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES)),
            2 => {
                let n = self.rng.gen_range(1..100);
                format!("{}.{}", self.pick(FIRST_NAMES), n)
            }
            _ => self.pick(HOBBY_WORDS).to_string(),
        }
    }

    fn real_bio(&mut self) -> String {
        match self.rng.gen_range(0..3) {
            0 => self.pick(REAL_BIOS).to_string(),
            1 => format!(
                "Passionate about {} and {}",
                self.pick(HOBBY_WORDS),
                self.pick(HOBBY_WORDS)
            ),
            _ => format!(
                "Love {}, {}, and {}",
                self.pick(HOBBY_WORDS),
                self.pick(HOBBY_WORDS),
                self.pick(HOBBY_WORDS)
            ),
        }
    }

    fn created_at(&mut self, min_age_days: i64, max_age_days: i64) -> String {
        let age = self.rng.gen_range(min_age_days..=max_age_days);
        (Utc::now() - Duration::days(age)).to_rfc3339()
    }

    fn fake_account(&mut self) -> LabeledAccount {
        LabeledAccount {
            record: AccountRecord {
                username: self.fake_username(),
                bio: Some(self.fake_bio()),
                created_at: Some(self.created_at(1, 30)),
                follower_count: self.rng.gen_range(0..=50),
                following_count: self.rng.gen_range(100..=2000),
                post_count: self.rng.gen_range(0..=10),
                posts: None,
            },
            is_fake: true,
        }
    }

    fn real_account(&mut self) -> LabeledAccount {
        LabeledAccount {
            record: AccountRecord {
                username: self.real_username(),
                bio: Some(self.real_bio()),
                created_at: Some(self.created_at(30, 1000)),
                follower_count: self.rng.gen_range(10..=500),
                following_count: self.rng.gen_range(10..=300),
                post_count: self.rng.gen_range(5..=100),
                posts: None,
            },
            is_fake: false,
        }
    }

    pub fn generate_fake_accounts(&mut self, count: usize) -> Vec<LabeledAccount> {
        (0..count).map(|_| self.fake_account()).collect()
    }

    pub fn generate_real_accounts(&mut self, count: usize) -> Vec<LabeledAccount> {
        (0..count).map(|_| self.real_account()).collect()
    }

    /// Balanced, shuffled training corpus.
    pub fn generate_training(&mut self, fake_count: usize, real_count: usize) -> Vec<LabeledAccount> {
        let mut accounts = self.generate_fake_accounts(fake_count);
        accounts.extend(self.generate_real_accounts(real_count));
        accounts.shuffle(&mut self.rng);
        accounts
    }

    /// Mixed holdout set with per-account random labels.
    pub fn generate_test(&mut self, count: usize) -> Vec<LabeledAccount> {
        (0..count)
            .map(|_| {
                if self.rng.gen_bool(0.5) {
                    self.fake_account()
                } else {
                    self.real_account()
                }
            })
            .collect()
    }
}
