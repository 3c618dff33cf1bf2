//! Explain Module - Per-Prediction Feature Attribution

pub mod engine;
pub mod types;

pub use engine::Explainer;
pub use types::{Explanation, FeatureAttribution};
