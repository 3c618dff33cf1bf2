//! Split & Cross-Validation Helpers
//!
//! Seeded 80/20 train/test split and k-fold cross-validation scoring,
//! matching the training procedure's deterministic-seed contract.

use ndarray::{Array2, ArrayView2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::forest::{ForestParams, RandomForest};

/// Shuffle with `seed` and split off the last `test_ratio` as the holdout.
pub fn train_test_split(
    x: &ArrayView2<f64>,
    y: &[bool],
    test_ratio: f64,
    seed: u64,
) -> (Array2<f64>, Vec<bool>, Array2<f64>, Vec<bool>) {
    let n = y.len();
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_n = ((n as f64) * test_ratio).round() as usize;
    let (test_idx, train_idx) = indices.split_at(test_n);

    (
        select_rows(x, train_idx),
        train_idx.iter().map(|&i| y[i]).collect(),
        select_rows(x, test_idx),
        test_idx.iter().map(|&i| y[i]).collect(),
    )
}

/// Fraction of matching labels.
pub fn accuracy(predictions: &[bool], truth: &[bool]) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }
    let hits = predictions
        .iter()
        .zip(truth.iter())
        .filter(|(p, t)| p == t)
        .count();
    hits as f64 / truth.len() as f64
}

/// k-fold CV accuracy over already-scaled data. Each fold trains a fresh
/// forest with the given params on the remaining folds.
pub fn cross_val_scores(
    x: &ArrayView2<f64>,
    y: &[bool],
    k: usize,
    params: ForestParams,
    seed: u64,
) -> Vec<f64> {
    let n = y.len();
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let mut scores = Vec::with_capacity(k);
    for fold in 0..k {
        let lo = fold * n / k;
        let hi = (fold + 1) * n / k;
        if lo == hi {
            continue;
        }
        let holdout = &indices[lo..hi];
        let rest: Vec<usize> = indices[..lo]
            .iter()
            .chain(indices[hi..].iter())
            .copied()
            .collect();

        let x_train = select_rows(x, &rest);
        let y_train: Vec<bool> = rest.iter().map(|&i| y[i]).collect();
        let forest = RandomForest::fit(&x_train.view(), &y_train, params);

        let predictions: Vec<bool> = holdout
            .iter()
            .map(|&i| forest.predict(&x.row(i).to_vec()))
            .collect();
        let truth: Vec<bool> = holdout.iter().map(|&i| y[i]).collect();
        scores.push(accuracy(&predictions, &truth));
    }
    scores
}

fn select_rows(x: &ArrayView2<f64>, indices: &[usize]) -> Array2<f64> {
    x.select(Axis(0), indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn data(n: usize) -> (Array2<f64>, Vec<bool>) {
        let mut x = Array2::zeros((n, 1));
        let mut y = Vec::with_capacity(n);
        for i in 0..n {
            x[[i, 0]] = i as f64;
            y.push(i >= n / 2);
        }
        (x, y)
    }

    #[test]
    fn test_split_sizes() {
        let (x, y) = data(100);
        let (x_train, y_train, x_test, y_test) =
            train_test_split(&x.view(), &y, 0.2, 42);
        assert_eq!(x_test.nrows(), 20);
        assert_eq!(x_train.nrows(), 80);
        assert_eq!(y_train.len(), 80);
        assert_eq!(y_test.len(), 20);
    }

    #[test]
    fn test_split_deterministic() {
        let (x, y) = data(50);
        let (a, _, _, _) = train_test_split(&x.view(), &y, 0.2, 42);
        let (b, _, _, _) = train_test_split(&x.view(), &y, 0.2, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_preserves_rows() {
        let (x, y) = data(10);
        let (x_train, _, x_test, _) = train_test_split(&x.view(), &y, 0.2, 1);
        let mut seen: Vec<f64> = x_train
            .column(0)
            .iter()
            .chain(x_test.column(0).iter())
            .copied()
            .collect();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(seen, (0..10).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(&[true, false, true], &[true, true, true]), 2.0 / 3.0);
        assert_eq!(accuracy(&[], &[]), 0.0);
    }

    #[test]
    fn test_cross_val_on_separable_data() {
        let (x, y) = data(60);
        let params = ForestParams {
            n_estimators: 10,
            max_depth: 3,
            seed: 42,
        };
        let scores = cross_val_scores(&x.view(), &y, 5, params, 42);
        assert_eq!(scores.len(), 5);
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        assert!(mean > 0.8, "separable data should cross-validate well");
    }
}
