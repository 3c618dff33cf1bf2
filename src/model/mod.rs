//! Model Module - Training, Inference & Persistence
//!
//! The classifier engine and everything it owns: the standardization
//! transform, the bagged tree ensemble, split/CV helpers and the two-blob
//! artifact persistence.

pub mod artifact;
pub mod engine;
pub mod forest;
pub mod scaler;
pub mod tree;
pub mod validation;

pub use artifact::ModelArtifact;
pub use engine::{BatchPrediction, ClassifierEngine, EvaluationReport, PredictionResult};
pub use forest::{ForestParams, RandomForest};
pub use scaler::StandardScaler;
