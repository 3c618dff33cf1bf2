//! Corpus File IO
//!
//! CSV round-trip for labeled account corpora. The on-disk layout is flat
//! (one column per profile field plus the label), so records go through a
//! flat row struct rather than the nested `LabeledAccount` shape.
//! Per-post timestamps never appear in corpus files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DetectorError, Result};
use crate::record::{AccountRecord, LabeledAccount};

#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    username: String,
    #[serde(default)]
    bio: String,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    follower_count: u64,
    #[serde(default)]
    following_count: u64,
    #[serde(default)]
    post_count: u64,
    #[serde(deserialize_with = "deserialize_label")]
    is_fake: bool,
}

/// Accepts the label spellings seen across corpus producers:
/// `true`/`false` in any case, and `1`/`0`.
fn deserialize_label<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid label '{}'",
            other
        ))),
    }
}

fn none_if_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl From<CsvRow> for LabeledAccount {
    fn from(row: CsvRow) -> Self {
        LabeledAccount {
            record: AccountRecord {
                username: row.username,
                bio: none_if_empty(row.bio),
                created_at: none_if_empty(row.created_at),
                follower_count: row.follower_count,
                following_count: row.following_count,
                post_count: row.post_count,
                posts: None,
            },
            is_fake: row.is_fake,
        }
    }
}

impl From<&LabeledAccount> for CsvRow {
    fn from(labeled: &LabeledAccount) -> Self {
        CsvRow {
            username: labeled.record.username.clone(),
            bio: labeled.record.bio.clone().unwrap_or_default(),
            created_at: labeled.record.created_at.clone().unwrap_or_default(),
            follower_count: labeled.record.follower_count,
            following_count: labeled.record.following_count,
            post_count: labeled.record.post_count,
            is_fake: labeled.is_fake,
        }
    }
}

pub fn load_accounts(path: &Path) -> Result<Vec<LabeledAccount>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        DetectorError::CorpusUnavailable(format!("cannot open {}: {}", path.display(), e))
    })?;

    let mut accounts = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        let row = row.map_err(|e| {
            DetectorError::CorpusUnavailable(format!("bad row in {}: {}", path.display(), e))
        })?;
        accounts.push(row.into());
    }
    Ok(accounts)
}

pub fn write_accounts(path: &Path, accounts: &[LabeledAccount]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            DetectorError::CorpusUnavailable(format!(
                "cannot create {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        DetectorError::CorpusUnavailable(format!("cannot write {}: {}", path.display(), e))
    })?;
    for labeled in accounts {
        writer.serialize(CsvRow::from(labeled)).map_err(|e| {
            DetectorError::CorpusUnavailable(format!("cannot write {}: {}", path.display(), e))
        })?;
    }
    writer.flush().map_err(|e| {
        DetectorError::CorpusUnavailable(format!("cannot write {}: {}", path.display(), e))
    })?;
    Ok(())
}
