//! Feature Vector - Core data structure for model input
//!
//! Versioned feature vector with layout validation. All feature data moves
//! through this type; raw `Vec<f64>` carries no layout guarantee.

use serde::{Deserialize, Serialize};

use super::layout::{
    feature_index, layout_hash, validate_layout, LayoutMismatchError, FEATURE_COUNT,
    FEATURE_LAYOUT, FEATURE_VERSION,
};

/// Versioned feature vector with layout metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    /// Feature layout version.
    pub version: u8,
    /// CRC32 hash of the feature layout (for mismatch detection).
    pub layout_hash: u32,
    /// Feature values in the order defined by FEATURE_LAYOUT.
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create a new zeroed feature vector with the current version.
    pub fn new() -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values: [0.0; FEATURE_COUNT],
        }
    }

    /// Create from raw values with the current version.
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Get feature by index.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Get feature by name.
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        feature_index(name).and_then(|i| self.get(i))
    }

    /// Set feature by index.
    pub fn set(&mut self, index: usize, value: f64) {
        if index < FEATURE_COUNT {
            self.values[index] = value;
        }
    }

    /// Set feature by name. Returns false for an unknown name.
    pub fn set_by_name(&mut self, name: &str, value: f64) -> bool {
        if let Some(index) = feature_index(name) {
            self.set(index, value);
            true
        } else {
            false
        }
    }

    /// Validate that this vector is compatible with the current layout.
    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }

    pub fn is_compatible(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn feature_names(&self) -> &'static [&'static str] {
        FEATURE_LAYOUT
    }

    /// Name/value pairs in layout order, for consumers that render the
    /// vector directly (dashboards, logs).
    pub fn named_values(&self) -> Vec<(&'static str, f64)> {
        FEATURE_LAYOUT
            .iter()
            .zip(self.values.iter())
            .map(|(name, value)| (*name, *value))
            .collect()
    }

    /// JSON form for structured logging.
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": self.version,
            "layout_hash": self.layout_hash,
            "values": self.values.to_vec(),
        })
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self::from_values(values)
    }
}

/// One feature group writing its slots into the shared vector.
pub trait GroupExtractor {
    fn apply(&self, vector: &mut FeatureVector);
}
