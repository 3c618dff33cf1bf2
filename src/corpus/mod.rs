//! Corpus Module - Labeled Account Supply
//!
//! Training and holdout corpora come from CSV files when present; when a
//! file is missing it is synthesized with the seeded generator and written
//! back, so repeated runs see the same data.

pub mod generator;
pub mod loader;

pub use generator::CorpusGenerator;
pub use loader::{load_accounts, write_accounts};

use crate::config::DetectorConfig;
use crate::error::Result;
use crate::record::LabeledAccount;

/// Generator seed, distinct per corpus so the holdout never repeats
/// training accounts.
const TRAINING_CORPUS_SEED: u64 = 42;
const TEST_CORPUS_SEED: u64 = 43;

/// The training corpus: loaded from `training_data_path`, or generated
/// (per the configured class sizes) and persisted when the file is absent.
pub fn load_or_generate_training(config: &DetectorConfig) -> Result<Vec<LabeledAccount>> {
    if config.training_data_path.exists() {
        log::info!(
            "loading training corpus from {}",
            config.training_data_path.display()
        );
        return loader::load_accounts(&config.training_data_path);
    }

    log::info!(
        "no training corpus at {}, generating {} fake + {} real accounts",
        config.training_data_path.display(),
        config.generated_fake_accounts,
        config.generated_real_accounts
    );
    let accounts = CorpusGenerator::new(TRAINING_CORPUS_SEED)
        .generate_training(config.generated_fake_accounts, config.generated_real_accounts);
    loader::write_accounts(&config.training_data_path, &accounts)?;
    Ok(accounts)
}

/// The holdout corpus: loaded from `test_data_path`, or generated and
/// persisted when the file is absent.
pub fn load_or_generate_test(config: &DetectorConfig) -> Result<Vec<LabeledAccount>> {
    if config.test_data_path.exists() {
        log::info!(
            "loading test corpus from {}",
            config.test_data_path.display()
        );
        return loader::load_accounts(&config.test_data_path);
    }

    log::info!(
        "no test corpus at {}, generating {} mixed accounts",
        config.test_data_path.display(),
        config.generated_test_accounts
    );
    let accounts =
        CorpusGenerator::new(TEST_CORPUS_SEED).generate_test(config.generated_test_accounts);
    loader::write_accounts(&config.test_data_path, &accounts)?;
    Ok(accounts)
}
