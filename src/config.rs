//! Detector Configuration
//!
//! Filesystem locations for the persisted artifact and the corpus files,
//! plus the synthetic-generator sizes used when a corpus file is absent.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Serialized ensemble blob.
    pub model_path: PathBuf,
    /// Serialized scaler blob.
    pub scaler_path: PathBuf,
    /// Labeled training corpus (CSV).
    pub training_data_path: PathBuf,
    /// Labeled holdout corpus (CSV).
    pub test_data_path: PathBuf,
    /// Fake accounts to synthesize when the training corpus is missing.
    pub generated_fake_accounts: usize,
    /// Real accounts to synthesize when the training corpus is missing.
    pub generated_real_accounts: usize,
    /// Mixed accounts to synthesize when the test corpus is missing.
    pub generated_test_accounts: usize,
}

impl DetectorConfig {
    /// Root every path under `dir` (used by the default and by tests).
    pub fn with_data_dir(dir: &Path) -> Self {
        Self {
            model_path: dir.join("models").join("fake_detector_model.json"),
            scaler_path: dir.join("models").join("scaler.json"),
            training_data_path: dir.join("data").join("training_data.csv"),
            test_data_path: dir.join("data").join("test_data.csv"),
            generated_fake_accounts: 1000,
            generated_real_accounts: 1000,
            generated_test_accounts: 100,
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        let base = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fake-detection");
        Self::with_data_dir(&base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_data_dir_layout() {
        let cfg = DetectorConfig::with_data_dir(Path::new("/tmp/fd"));
        assert!(cfg.model_path.ends_with("models/fake_detector_model.json"));
        assert!(cfg.training_data_path.ends_with("data/training_data.csv"));
        assert_eq!(cfg.generated_fake_accounts, 1000);
    }
}
