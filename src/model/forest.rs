//! Random Forest - Bagged Tree Ensemble
//!
//! 100 gini trees of depth 10 over seeded bootstrap samples. Class
//! probability is the average of leaf fake-fractions; global importance is
//! the average of per-tree normalized impurity importances.

use ndarray::ArrayView2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::tree::{DecisionTree, TreeParams};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ForestParams {
    pub n_estimators: usize,
    pub max_depth: usize,
    pub seed: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            max_depth: 10,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    pub params: ForestParams,
    pub n_features: usize,
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn fit(x: &ArrayView2<f64>, y: &[bool], params: ForestParams) -> Self {
        let n = y.len();
        let n_features = x.ncols();
        let tree_params = TreeParams {
            max_depth: params.max_depth,
            min_samples_split: 2,
            max_features: ((n_features as f64).sqrt() as usize).max(1),
        };

        let mut trees = Vec::with_capacity(params.n_estimators);
        for t in 0..params.n_estimators {
            let mut rng = StdRng::seed_from_u64(params.seed.wrapping_add(t as u64));
            let bootstrap: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
            trees.push(DecisionTree::fit(x, y, &bootstrap, tree_params, &mut rng));
        }

        Self {
            params,
            n_features,
            trees,
        }
    }

    /// [real, fake] probability pair for one (already scaled) row.
    pub fn predict_proba(&self, row: &[f64]) -> [f64; 2] {
        let fake = self
            .trees
            .iter()
            .map(|t| t.predict_proba(row))
            .sum::<f64>()
            / self.trees.len() as f64;
        [1.0 - fake, fake]
    }

    /// Hard label: fake iff the fake probability strictly wins.
    pub fn predict(&self, row: &[f64]) -> bool {
        let [real, fake] = self.predict_proba(row);
        fake > real
    }

    /// Global impurity-based importances, normalized to sum 1.
    pub fn feature_importances(&self) -> Vec<f64> {
        let mut importances = vec![0.0; self.n_features];
        for tree in &self.trees {
            for (j, imp) in tree.feature_importances(self.n_features).iter().enumerate() {
                importances[j] += imp;
            }
        }
        let total: f64 = importances.iter().sum();
        if total > 0.0 {
            for imp in &mut importances {
                *imp /= total;
            }
        }
        importances
    }

    /// Expected fake probability with no evidence: the averaged root value.
    pub fn expected_value(&self) -> f64 {
        self.trees.iter().map(DecisionTree::baseline).sum::<f64>() / self.trees.len() as f64
    }

    /// Per-feature decision-path attributions for the fake class, averaged
    /// across trees, plus the baseline. `baseline + sum(attributions)`
    /// reconstructs the fake probability exactly.
    pub fn attributions(&self, row: &[f64]) -> (Vec<f64>, f64) {
        let mut sums = vec![0.0; self.n_features];
        for tree in &self.trees {
            for (j, a) in tree.path_attributions(row, self.n_features).iter().enumerate() {
                sums[j] += a;
            }
        }
        let n = self.trees.len() as f64;
        for s in &mut sums {
            *s /= n;
        }
        (sums, self.expected_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    /// Two clusters: fakes around (1, 1), reals around (0, 0).
    fn clustered_data(n_per_class: usize) -> (Array2<f64>, Vec<bool>) {
        let mut x = Array2::zeros((n_per_class * 2, 2));
        for i in 0..n_per_class {
            let jitter = (i % 10) as f64 / 100.0;
            x[[i, 0]] = 1.0 + jitter;
            x[[i, 1]] = 1.0 - jitter;
            x[[n_per_class + i, 0]] = 0.0 + jitter;
            x[[n_per_class + i, 1]] = 0.0 - jitter;
        }
        let labels: Vec<bool> = (0..n_per_class * 2).map(|i| i < n_per_class).collect();
        (x, labels)
    }

    fn small_params() -> ForestParams {
        ForestParams {
            n_estimators: 20,
            max_depth: 5,
            seed: 42,
        }
    }

    #[test]
    fn test_learns_clusters() {
        let (x, y) = clustered_data(50);
        let forest = RandomForest::fit(&x.view(), &y, small_params());

        assert!(forest.predict(&[1.0, 1.0]));
        assert!(!forest.predict(&[0.0, 0.0]));
        let [real, fake] = forest.predict_proba(&[1.0, 1.0]);
        assert!(fake > 0.9);
        assert!((real + fake - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic_given_seed() {
        let (x, y) = clustered_data(30);
        let a = RandomForest::fit(&x.view(), &y, small_params());
        let b = RandomForest::fit(&x.view(), &y, small_params());
        let row = [0.7, 0.3];
        assert_eq!(a.predict_proba(&row), b.predict_proba(&row));
        assert_eq!(a.feature_importances(), b.feature_importances());
    }

    #[test]
    fn test_importances_normalized() {
        let (x, y) = clustered_data(30);
        let forest = RandomForest::fit(&x.view(), &y, small_params());
        let imp = forest.feature_importances();
        assert_eq!(imp.len(), 2);
        assert!((imp.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(imp.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_attribution_additivity() {
        let (x, y) = clustered_data(40);
        let forest = RandomForest::fit(&x.view(), &y, small_params());

        for row in [[1.0, 1.0], [0.0, 0.0], [0.5, 0.5], [0.9, 0.1]] {
            let (attributions, baseline) = forest.attributions(&row);
            let reconstructed = baseline + attributions.iter().sum::<f64>();
            let [_, fake] = forest.predict_proba(&row);
            assert!(
                (reconstructed - fake).abs() < 1e-9,
                "additivity broken: {} vs {}",
                reconstructed,
                fake
            );
        }
    }

    #[test]
    fn test_serde_roundtrip_is_prediction_exact() {
        let (x, y) = clustered_data(30);
        let forest = RandomForest::fit(&x.view(), &y, small_params());
        let json = serde_json::to_string(&forest).unwrap();
        let restored: RandomForest = serde_json::from_str(&json).unwrap();

        let row = [0.6, 0.4];
        assert_eq!(forest.predict_proba(&row), restored.predict_proba(&row));
    }
}
