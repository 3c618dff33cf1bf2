//! Explanation output types.

use serde::{Deserialize, Serialize};

/// One ranked entry of the top-K attribution list. `attribution` is the
/// magnitude used for ranking (always non-negative); the signed value sits
/// at the same feature's slot in `Explanation::raw_attributions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureAttribution {
    pub name: String,
    pub attribution: f64,
}

/// Per-prediction explanation for the fake class.
///
/// Additivity contract: `baseline_value + raw_attributions.sum()` equals
/// the model's fake probability for the explained record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    /// Top-10 features by absolute attribution, descending. Keys are the
    /// stable names from the fixed layout, ready for bar-chart rendering.
    pub feature_importance: Vec<FeatureAttribution>,
    /// Signed attribution per feature, aligned to the fixed feature order.
    pub raw_attributions: Vec<f64>,
    /// The model's expected fake-class output with no evidence applied.
    pub baseline_value: f64,
}
