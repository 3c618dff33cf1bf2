//! Decision Tree - CART classifier
//!
//! Gini-split binary trees with a depth cap and per-node random feature
//! subsets, the ensemble member configuration of the trained forest. Each
//! node stores its fake-class fraction, which both the probability output
//! and the decision-path attribution walk read.

use ndarray::ArrayView2;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TreeParams {
    pub max_depth: usize,
    pub min_samples_split: usize,
    /// Features considered per split (sqrt of the total in the forest).
    pub max_features: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Split feature; None marks a leaf.
    pub feature: Option<usize>,
    pub threshold: f64,
    pub left: usize,
    pub right: usize,
    /// Fraction of fake-labeled samples at this node.
    pub value: f64,
    pub n_samples: usize,
    pub impurity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<Node>,
}

struct SplitCandidate {
    feature: usize,
    threshold: f64,
    impurity_decrease: f64,
    left: Vec<usize>,
    right: Vec<usize>,
}

impl DecisionTree {
    /// Fit on the rows selected by `indices` (the bootstrap sample).
    pub fn fit(
        x: &ArrayView2<f64>,
        y: &[bool],
        indices: &[usize],
        params: TreeParams,
        rng: &mut StdRng,
    ) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.build(x, y, indices.to_vec(), 0, params, rng);
        tree
    }

    /// Recursively grow the subtree for `indices`; returns its node index.
    fn build(
        &mut self,
        x: &ArrayView2<f64>,
        y: &[bool],
        indices: Vec<usize>,
        depth: usize,
        params: TreeParams,
        rng: &mut StdRng,
    ) -> usize {
        let n = indices.len();
        let positives = indices.iter().filter(|&&i| y[i]).count();
        let value = positives as f64 / n as f64;
        let impurity = gini(positives, n);

        let node_index = self.nodes.len();
        self.nodes.push(Node {
            feature: None,
            threshold: 0.0,
            left: 0,
            right: 0,
            value,
            n_samples: n,
            impurity,
        });

        if depth >= params.max_depth
            || n < params.min_samples_split
            || positives == 0
            || positives == n
        {
            return node_index;
        }

        let split = match best_split(x, y, &indices, impurity, params.max_features, rng) {
            Some(s) => s,
            None => return node_index,
        };

        let left = self.build(x, y, split.left, depth + 1, params, rng);
        let right = self.build(x, y, split.right, depth + 1, params, rng);

        let node = &mut self.nodes[node_index];
        node.feature = Some(split.feature);
        node.threshold = split.threshold;
        node.left = left;
        node.right = right;

        node_index
    }

    fn leaf_for(&self, row: &[f64]) -> &Node {
        let mut node = &self.nodes[0];
        while let Some(feature) = node.feature {
            node = if row[feature] <= node.threshold {
                &self.nodes[node.left]
            } else {
                &self.nodes[node.right]
            };
        }
        node
    }

    /// Fake-class fraction of the reached leaf.
    pub fn predict_proba(&self, row: &[f64]) -> f64 {
        self.leaf_for(row).value
    }

    /// Root value: the tree's output with no evidence applied.
    pub fn baseline(&self) -> f64 {
        self.nodes[0].value
    }

    /// Decision-path attribution: walking root to leaf, the change in node
    /// value across each split is credited to the split feature. By
    /// construction `baseline + sum(attributions) == predict_proba(row)`.
    pub fn path_attributions(&self, row: &[f64], n_features: usize) -> Vec<f64> {
        let mut attributions = vec![0.0; n_features];
        let mut node = &self.nodes[0];
        while let Some(feature) = node.feature {
            let next = if row[feature] <= node.threshold {
                &self.nodes[node.left]
            } else {
                &self.nodes[node.right]
            };
            attributions[feature] += next.value - node.value;
            node = next;
        }
        attributions
    }

    /// Impurity-decrease importance per feature, normalized to sum 1.
    pub fn feature_importances(&self, n_features: usize) -> Vec<f64> {
        let mut importances = vec![0.0; n_features];
        for node in &self.nodes {
            if let Some(feature) = node.feature {
                let left = &self.nodes[node.left];
                let right = &self.nodes[node.right];
                let decrease = node.n_samples as f64 * node.impurity
                    - left.n_samples as f64 * left.impurity
                    - right.n_samples as f64 * right.impurity;
                importances[feature] += decrease;
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
}

fn gini(positives: usize, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let p = positives as f64 / n as f64;
    1.0 - p * p - (1.0 - p) * (1.0 - p)
}

/// Exhaustive threshold search over a random feature subset.
fn best_split(
    x: &ArrayView2<f64>,
    y: &[bool],
    indices: &[usize],
    parent_impurity: f64,
    max_features: usize,
    rng: &mut StdRng,
) -> Option<SplitCandidate> {
    let n_features = x.ncols();
    let n = indices.len() as f64;

    // Partial Fisher-Yates for the candidate feature subset
    let mut features: Vec<usize> = (0..n_features).collect();
    let k = max_features.clamp(1, n_features);
    for i in 0..k {
        let j = rng.gen_range(i..n_features);
        features.swap(i, j);
    }

    let mut best: Option<SplitCandidate> = None;

    for &feature in &features[..k] {
        let mut ordered: Vec<(f64, usize)> = indices
            .iter()
            .map(|&i| (x[[i, feature]], i))
            .collect();
        ordered.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let total_pos = ordered.iter().filter(|(_, i)| y[*i]).count();
        let mut left_pos = 0usize;

        for split_at in 1..ordered.len() {
            if y[ordered[split_at - 1].1] {
                left_pos += 1;
            }
            // Only split between distinct values
            if ordered[split_at].0 <= ordered[split_at - 1].0 {
                continue;
            }

            let left_n = split_at;
            let right_n = ordered.len() - split_at;
            let right_pos = total_pos - left_pos;

            let left_impurity = gini(left_pos, left_n);
            let right_impurity = gini(right_pos, right_n);
            let weighted =
                (left_n as f64 * left_impurity + right_n as f64 * right_impurity) / n;
            let decrease = parent_impurity - weighted;

            if decrease > 1e-12
                && best
                    .as_ref()
                    .map(|b| decrease > b.impurity_decrease)
                    .unwrap_or(true)
            {
                let threshold = (ordered[split_at - 1].0 + ordered[split_at].0) / 2.0;
                best = Some(SplitCandidate {
                    feature,
                    threshold,
                    impurity_decrease: decrease,
                    left: ordered[..split_at].iter().map(|&(_, i)| i).collect(),
                    right: ordered[split_at..].iter().map(|&(_, i)| i).collect(),
                });
            }
        }
    }

    best
}
