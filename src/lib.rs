//! Fake Account Detection Core
//!
//! The full detection pipeline: raw profile records go through fixed-layout
//! feature extraction, a standardization transform and a bagged decision
//! tree ensemble, coming out as fake/real predictions with probabilities
//! and per-feature attributions. Training, persistence and holdout
//! evaluation live here too; every consumer-facing surface goes through
//! [`model::ClassifierEngine`].

pub mod config;
pub mod corpus;
pub mod error;
pub mod evaluator;
pub mod explain;
pub mod features;
pub mod model;
pub mod record;

pub use config::DetectorConfig;
pub use error::{DetectorError, Result};
pub use evaluator::{ClassificationReport, Evaluator};
pub use explain::{Explainer, Explanation};
pub use features::{FeatureVector, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use model::{BatchPrediction, ClassifierEngine, PredictionResult};
pub use record::{AccountRecord, LabeledAccount, PostStamp};
