//! Standardization Transform
//!
//! Per-feature mean/std fitted on the training split only and applied
//! identically at train and inference time. Fitted parameters are part of
//! the persisted artifact.

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl StandardScaler {
    /// Fit mean and population standard deviation per column.
    pub fn fit(x: &ArrayView2<f64>) -> Self {
        let (rows, cols) = x.dim();
        let n = rows.max(1) as f64;

        let mut mean = vec![0.0; cols];
        for row in x.rows() {
            for (j, &v) in row.iter().enumerate() {
                mean[j] += v;
            }
        }
        for m in &mut mean {
            *m /= n;
        }

        let mut std = vec![0.0; cols];
        for row in x.rows() {
            for (j, &v) in row.iter().enumerate() {
                std[j] += (v - mean[j]).powi(2);
            }
        }
        for s in &mut std {
            *s = (*s / n).sqrt();
            // Constant columns pass through unscaled
            if *s == 0.0 {
                *s = 1.0;
            }
        }

        Self { mean, std }
    }

    pub fn transform_row(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .enumerate()
            .map(|(j, &v)| (v - self.mean[j]) / self.std[j])
            .collect()
    }

    pub fn transform(&self, x: &ArrayView2<f64>) -> Array2<f64> {
        let (rows, cols) = x.dim();
        let mut out = Array2::zeros((rows, cols));
        for (i, row) in x.rows().into_iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                out[[i, j]] = (v - self.mean[j]) / self.std[j];
            }
        }
        out
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }
}
