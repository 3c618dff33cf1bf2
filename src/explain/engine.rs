//! Explainer - Per-Prediction Attribution
//!
//! Decision-path attribution over the trained forest: walking each tree
//! from root to leaf, the change in node value across every split is
//! credited to the split feature, and credits are averaged over trees.
//! The result is exactly additive with the forest's baseline, which is the
//! contract the consumers rely on.

use super::types::{Explanation, FeatureAttribution};
use crate::error::Result;
use crate::features::{self, FEATURE_LAYOUT};
use crate::model::ClassifierEngine;
use crate::record::AccountRecord;

const TOP_K: usize = 10;

/// Wraps a trained engine; fails `ModelUnavailable` when the engine has no
/// artifact in memory or on disk.
pub struct Explainer<'a> {
    engine: &'a ClassifierEngine,
}

impl<'a> Explainer<'a> {
    pub fn new(engine: &'a ClassifierEngine) -> Self {
        Self { engine }
    }

    pub fn explain(&self, record: &AccountRecord) -> Result<Explanation> {
        self.engine.with_model(|artifact| {
            let features = features::extract(record)?;
            let scaled = artifact.scaler.transform_row(features.as_slice());
            let (raw_attributions, baseline_value) = artifact.forest.attributions(&scaled);

            let mut ranked: Vec<FeatureAttribution> = FEATURE_LAYOUT
                .iter()
                .zip(raw_attributions.iter())
                .map(|(name, &a)| FeatureAttribution {
                    name: name.to_string(),
                    attribution: a.abs(),
                })
                .collect();
            ranked.sort_by(|a, b| {
                b.attribution
                    .partial_cmp(&a.attribution)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            ranked.truncate(TOP_K);

            Ok(Explanation {
                feature_importance: ranked,
                raw_attributions,
                baseline_value,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DetectorConfig;
    use crate::corpus::generator::CorpusGenerator;
    use crate::error::DetectorError;
    use crate::features::FEATURE_COUNT;
    use crate::model::engine::build_design_matrix;

    fn trained_engine(dir: &std::path::Path) -> ClassifierEngine {
        let engine = ClassifierEngine::new(DetectorConfig::with_data_dir(dir));
        let accounts = CorpusGenerator::new(3).generate_training(120, 120);
        let (x, y) = build_design_matrix(&accounts).unwrap();
        engine.train(&x.view(), &y).unwrap();
        engine
    }

    fn spam_record() -> AccountRecord {
        AccountRecord {
            username: "promo99999".to_string(),
            bio: Some("Earn easy money! crypto profit https://spam.example.com".to_string()),
            created_at: Some((chrono::Utc::now() - chrono::Duration::days(3)).to_rfc3339()),
            follower_count: 2,
            following_count: 900,
            post_count: 0,
            posts: None,
        }
    }

    #[test]
    fn test_explainer_requires_model() {
        let dir = tempfile::tempdir().unwrap();
        let engine = ClassifierEngine::new(DetectorConfig::with_data_dir(dir.path()));
        let explainer = Explainer::new(&engine);
        assert!(matches!(
            explainer.explain(&spam_record()),
            Err(DetectorError::ModelUnavailable)
        ));
    }

    #[test]
    fn test_additivity_against_prediction() {
        let dir = tempfile::tempdir().unwrap();
        let engine = trained_engine(dir.path());
        let record = spam_record();

        let explanation = Explainer::new(&engine).explain(&record).unwrap();
        let prediction = engine.predict_one(&record).unwrap();

        let reconstructed =
            explanation.baseline_value + explanation.raw_attributions.iter().sum::<f64>();
        assert!(
            (reconstructed - prediction.fake_probability).abs() < 1e-6,
            "baseline + attributions = {} but fake probability = {}",
            reconstructed,
            prediction.fake_probability
        );
    }

    #[test]
    fn test_top_k_shape_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let engine = trained_engine(dir.path());

        let explanation = Explainer::new(&engine).explain(&spam_record()).unwrap();
        assert_eq!(explanation.raw_attributions.len(), FEATURE_COUNT);
        assert_eq!(explanation.feature_importance.len(), 10);
        for pair in explanation.feature_importance.windows(2) {
            assert!(pair[0].attribution >= pair[1].attribution);
        }
        for entry in &explanation.feature_importance {
            assert!(entry.attribution >= 0.0);
            assert!(FEATURE_LAYOUT.contains(&entry.name.as_str()));
        }
    }

    #[test]
    fn test_malformed_record_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let engine = trained_engine(dir.path());
        let mut record = spam_record();
        record.created_at = Some("whenever".to_string());
        assert!(matches!(
            Explainer::new(&engine).explain(&record),
            Err(DetectorError::MalformedRecord(_))
        ));
    }
}
