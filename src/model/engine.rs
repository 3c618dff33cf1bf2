//! Classifier Engine
//!
//! Owns the trained scaler+forest pair behind one lock and exposes the
//! train / predict / importance / evaluate lifecycle. Two states:
//! Untrained and Trained. Training swaps the artifact in one write-lock
//! section, so inference never sees a half-updated pair; inference
//! lazy-loads the persisted artifact on first use.

use ndarray::{Array2, ArrayView2};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::artifact::ModelArtifact;
use super::forest::{ForestParams, RandomForest};
use super::scaler::StandardScaler;
use super::validation::{accuracy, cross_val_scores, train_test_split};
use crate::config::DetectorConfig;
use crate::corpus;
use crate::error::{DetectorError, Result};
use crate::features::{self, FeatureVector, FEATURE_COUNT, FEATURE_LAYOUT};
use crate::record::{AccountRecord, LabeledAccount};

/// Seed shared by the split, the forest and the CV shuffle.
const TRAIN_SEED: u64 = 42;
const HOLDOUT_RATIO: f64 = 0.2;
const CV_FOLDS: usize = 5;

/// One classified record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub username: String,
    pub is_fake: bool,
    pub fake_probability: f64,
    pub real_probability: f64,
    /// The unscaled feature vector the decision was made from.
    pub features: FeatureVector,
}

/// Per-item outcome of a batch run: a prediction or a degraded entry
/// carrying the error message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPrediction {
    pub username: String,
    pub is_fake: bool,
    pub fake_probability: f64,
    pub real_probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchPrediction {
    fn degraded(username: String, error: &DetectorError) -> Self {
        Self {
            username,
            is_fake: false,
            fake_probability: 0.0,
            real_probability: 1.0,
            features: None,
            error: Some(error.to_string()),
        }
    }
}

impl From<PredictionResult> for BatchPrediction {
    fn from(result: PredictionResult) -> Self {
        Self {
            username: result.username,
            is_fake: result.is_fake,
            fake_probability: result.fake_probability,
            real_probability: result.real_probability,
            features: Some(result.features),
            error: None,
        }
    }
}

/// Aggregate output of `evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub accuracy: f64,
    pub predictions: Vec<bool>,
    /// [real, fake] pairs aligned with `predictions`.
    pub probabilities: Vec<[f64; 2]>,
    pub true_labels: Vec<bool>,
}

pub struct ClassifierEngine {
    config: DetectorConfig,
    artifact: RwLock<Option<ModelArtifact>>,
}

impl ClassifierEngine {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            artifact: RwLock::new(None),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DetectorConfig::default())
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Trained state: an artifact is in memory.
    pub fn is_trained(&self) -> bool {
        self.artifact.read().is_some()
    }

    /// Load the training corpus (generating it when absent) and extract the
    /// design matrix + label vector. Rows with bad timestamps are skipped
    /// with a warning rather than poisoning the whole corpus.
    pub fn prepare_training_data(&self) -> Result<(Array2<f64>, Vec<bool>)> {
        let accounts = corpus::load_or_generate_training(&self.config)?;
        build_design_matrix(&accounts)
    }

    /// Train on the full labeled matrix: seeded 80/20 split, scaler fitted
    /// on the train split only, 100-tree forest on the scaled split, 5-fold
    /// CV logged as a diagnostic. Persists the artifact and swaps it in
    /// atomically. Returns the held-out accuracy.
    pub fn train(&self, x: &ArrayView2<f64>, y: &[bool]) -> Result<f64> {
        log::info!("training fake-account model on {} examples", y.len());

        let (x_train, y_train, x_test, y_test) =
            train_test_split(x, y, HOLDOUT_RATIO, TRAIN_SEED);

        let scaler = StandardScaler::fit(&x_train.view());
        let x_train_scaled = scaler.transform(&x_train.view());
        let x_test_scaled = scaler.transform(&x_test.view());

        let params = ForestParams {
            seed: TRAIN_SEED,
            ..ForestParams::default()
        };
        let forest = RandomForest::fit(&x_train_scaled.view(), &y_train, params);

        let predictions: Vec<bool> = x_test_scaled
            .rows()
            .into_iter()
            .map(|row| forest.predict(&row.to_vec()))
            .collect();
        let holdout_accuracy = accuracy(&predictions, &y_test);
        log::info!("held-out accuracy: {:.4}", holdout_accuracy);

        let cv = cross_val_scores(&x_train_scaled.view(), &y_train, CV_FOLDS, params, TRAIN_SEED);
        if !cv.is_empty() {
            let mean = cv.iter().sum::<f64>() / cv.len() as f64;
            let std = (cv.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / cv.len() as f64).sqrt();
            log::info!(
                "{}-fold CV accuracy: {:.4} (+/- {:.4})",
                CV_FOLDS,
                mean,
                std * 2.0
            );
        }

        let artifact = ModelArtifact { scaler, forest };
        artifact.save(&self.config)?;
        *self.artifact.write() = Some(artifact);

        Ok(holdout_accuracy)
    }

    /// Classify one record. Lazy-loads the persisted artifact;
    /// `ModelUnavailable` when none exists, and it wins over any record
    /// problem: extraction only runs once a model is at hand.
    pub fn predict_one(&self, record: &AccountRecord) -> Result<PredictionResult> {
        self.with_model(|artifact| {
            let features = features::extract(record)?;
            let scaled = artifact.scaler.transform_row(features.as_slice());
            let [real, fake] = artifact.forest.predict_proba(&scaled);
            Ok(PredictionResult {
                username: record.username.clone(),
                is_fake: fake > real,
                fake_probability: fake,
                real_probability: real,
                features,
            })
        })
    }

    /// Classify many records, isolating per-record failures as degraded
    /// entries. Output order matches input order; never aborts the batch.
    pub fn predict_batch(&self, records: &[AccountRecord]) -> Vec<BatchPrediction> {
        records
            .iter()
            .map(|record| match self.predict_one(record) {
                Ok(result) => result.into(),
                Err(e) => {
                    log::warn!("prediction failed for '{}': {}", record.username, e);
                    BatchPrediction::degraded(record.username.clone(), &e)
                }
            })
            .collect()
    }

    /// Global impurity-based importance per feature name, descending.
    pub fn feature_importance(&self) -> Result<Vec<(String, f64)>> {
        self.with_model(|artifact| {
            let mut named: Vec<(String, f64)> = FEATURE_LAYOUT
                .iter()
                .map(|n| n.to_string())
                .zip(artifact.forest.feature_importances())
                .collect();
            named.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
            Ok(named)
        })
    }

    /// Run inference over a labeled holdout and aggregate the results.
    pub fn evaluate(&self, labeled: &[LabeledAccount]) -> Result<EvaluationReport> {
        self.with_model(|artifact| {
            let mut predictions = Vec::with_capacity(labeled.len());
            let mut probabilities = Vec::with_capacity(labeled.len());
            let mut true_labels = Vec::with_capacity(labeled.len());

            for example in labeled {
                let features = features::extract(&example.record)?;
                let scaled = artifact.scaler.transform_row(features.as_slice());
                let proba = artifact.forest.predict_proba(&scaled);
                predictions.push(proba[1] > proba[0]);
                probabilities.push(proba);
                true_labels.push(example.is_fake);
            }

            let acc = accuracy(&predictions, &true_labels);
            Ok(EvaluationReport {
                accuracy: acc,
                predictions,
                probabilities,
                true_labels,
            })
        })
    }

    /// Run `f` against the loaded artifact, lazy-loading it first.
    pub(crate) fn with_model<T>(
        &self,
        f: impl FnOnce(&ModelArtifact) -> Result<T>,
    ) -> Result<T> {
        {
            let guard = self.artifact.read();
            if let Some(artifact) = guard.as_ref() {
                return f(artifact);
            }
        }
        // Not in memory: load under the write lock, double-checking since
        // another caller may have raced us here.
        let mut guard = self.artifact.write();
        if guard.is_none() {
            *guard = Some(ModelArtifact::load(&self.config)?);
        }
        match guard.as_ref() {
            Some(artifact) => f(artifact),
            None => Err(DetectorError::ModelUnavailable),
        }
    }
}

/// Extract features for each labeled record into an (n x FEATURE_COUNT)
/// matrix plus the aligned label vector.
pub fn build_design_matrix(accounts: &[LabeledAccount]) -> Result<(Array2<f64>, Vec<bool>)> {
    let mut rows: Vec<[f64; FEATURE_COUNT]> = Vec::with_capacity(accounts.len());
    let mut labels = Vec::with_capacity(accounts.len());

    for example in accounts {
        match features::extract(&example.record) {
            Ok(vector) => {
                rows.push(vector.values);
                labels.push(example.is_fake);
            }
            Err(e) => {
                log::warn!(
                    "skipping corpus row '{}': {}",
                    example.record.username,
                    e
                );
            }
        }
    }

    if rows.is_empty() {
        return Err(DetectorError::CorpusUnavailable(
            "no usable rows in the training corpus".to_string(),
        ));
    }

    let mut x = Array2::zeros((rows.len(), FEATURE_COUNT));
    for (i, row) in rows.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            x[[i, j]] = v;
        }
    }
    Ok((x, labels))
}
