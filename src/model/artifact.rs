//! Model Artifact - Persistence
//!
//! The trained state is two JSON blobs (forest, scaler), each tagged with
//! the feature layout version + hash so a stale artifact is rejected at
//! load time. Writes go through a temp file and rename, so readers never
//! observe a half-written blob.

use std::fs;
use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::forest::RandomForest;
use super::scaler::StandardScaler;
use crate::config::DetectorConfig;
use crate::error::{DetectorError, Result};
use crate::features::layout::{layout_hash, validate_layout, FEATURE_VERSION};

/// The trained state owned by the classifier engine.
#[derive(Debug, Clone)]
pub struct ModelArtifact {
    pub scaler: StandardScaler,
    pub forest: RandomForest,
}

#[derive(Serialize, Deserialize)]
struct Blob<T> {
    feature_version: u8,
    layout_hash: u32,
    payload: T,
}

impl ModelArtifact {
    /// Persist both blobs at the configured paths.
    pub fn save(&self, config: &DetectorConfig) -> Result<()> {
        write_blob(&config.model_path, &self.forest)?;
        write_blob(&config.scaler_path, &self.scaler)?;
        log::info!(
            "model artifact saved to {} / {}",
            config.model_path.display(),
            config.scaler_path.display()
        );
        Ok(())
    }

    /// Restore a persisted artifact. `ModelUnavailable` when either blob is
    /// missing, `PersistenceFailure` on read/parse/layout problems.
    pub fn load(config: &DetectorConfig) -> Result<Self> {
        if !config.model_path.exists() || !config.scaler_path.exists() {
            return Err(DetectorError::ModelUnavailable);
        }
        let forest: RandomForest = read_blob(&config.model_path)?;
        let scaler: StandardScaler = read_blob(&config.scaler_path)?;
        log::info!("model artifact loaded from {}", config.model_path.display());
        Ok(Self { scaler, forest })
    }
}

fn write_blob<T: Serialize>(path: &Path, payload: &T) -> Result<()> {
    let blob = Blob {
        feature_version: FEATURE_VERSION,
        layout_hash: layout_hash(),
        payload,
    };
    let json = serde_json::to_string(&blob)
        .map_err(|e| DetectorError::PersistenceFailure(format!("serialize {}: {}", path.display(), e)))?;

    let parent = path
        .parent()
        .ok_or_else(|| DetectorError::PersistenceFailure(format!("no parent dir for {}", path.display())))?;
    fs::create_dir_all(parent)
        .map_err(|e| DetectorError::PersistenceFailure(format!("mkdir {}: {}", parent.display(), e)))?;

    // Temp file in the same directory so the rename stays atomic
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)
        .map_err(|e| DetectorError::PersistenceFailure(format!("write {}: {}", tmp.display(), e)))?;
    fs::rename(&tmp, path)
        .map_err(|e| DetectorError::PersistenceFailure(format!("rename to {}: {}", path.display(), e)))?;
    Ok(())
}

fn read_blob<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path)
        .map_err(|e| DetectorError::PersistenceFailure(format!("read {}: {}", path.display(), e)))?;
    let blob: Blob<T> = serde_json::from_str(&json)
        .map_err(|e| DetectorError::PersistenceFailure(format!("parse {}: {}", path.display(), e)))?;
    validate_layout(blob.feature_version, blob.layout_hash)
        .map_err(|e| DetectorError::PersistenceFailure(e.to_string()))?;
    Ok(blob.payload)
}
