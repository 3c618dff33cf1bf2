//! Evaluator - Holdout Metrics
//!
//! Runs the trained engine over the labeled holdout corpus and condenses
//! the raw predictions into per-class precision / recall / F1, printed in
//! the familiar classification-report table shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::corpus;
use crate::error::Result;
use crate::model::{ClassifierEngine, EvaluationReport};

/// Precision / recall / F1 for one class, with its holdout support.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

impl ClassMetrics {
    /// Zero-division convention: a metric whose denominator is empty is 0.
    fn compute(tp: usize, fp: usize, fn_: usize, support: usize) -> Self {
        let precision = if tp + fp > 0 {
            tp as f64 / (tp + fp) as f64
        } else {
            0.0
        };
        let recall = if tp + fn_ > 0 {
            tp as f64 / (tp + fn_) as f64
        } else {
            0.0
        };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self {
            precision,
            recall,
            f1,
            support,
        }
    }
}

/// Holdout evaluation rollup, one metrics row per class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub accuracy: f64,
    pub real: ClassMetrics,
    pub fake: ClassMetrics,
    pub total: usize,
}

impl ClassificationReport {
    pub fn from_evaluation(report: &EvaluationReport) -> Self {
        let mut counts = [[0usize; 2]; 2]; // [truth][predicted], fake = 1
        for (&predicted, &truth) in report.predictions.iter().zip(&report.true_labels) {
            counts[truth as usize][predicted as usize] += 1;
        }

        let fake = ClassMetrics::compute(
            counts[1][1],
            counts[0][1],
            counts[1][0],
            counts[1][0] + counts[1][1],
        );
        let real = ClassMetrics::compute(
            counts[0][0],
            counts[1][0],
            counts[0][1],
            counts[0][0] + counts[0][1],
        );

        Self {
            accuracy: report.accuracy,
            real,
            fake,
            total: report.true_labels.len(),
        }
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>12} {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for (name, m) in [("Real", &self.real), ("Fake", &self.fake)] {
            writeln!(
                f,
                "{:>12} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                name, m.precision, m.recall, m.f1, m.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>12} {:>9} {:>9} {:>9.2} {:>9}",
            "accuracy", "", "", self.accuracy, self.total
        )
    }
}

/// Borrows a trained engine and evaluates it against the configured
/// holdout corpus (generating the corpus when absent).
pub struct Evaluator<'a> {
    engine: &'a ClassifierEngine,
}

impl<'a> Evaluator<'a> {
    pub fn new(engine: &'a ClassifierEngine) -> Self {
        Self { engine }
    }

    pub fn run(&self) -> Result<ClassificationReport> {
        let holdout = corpus::load_or_generate_test(self.engine.config())?;
        log::info!("evaluating on {} holdout accounts", holdout.len());
        let raw = self.engine.evaluate(&holdout)?;
        let report = ClassificationReport::from_evaluation(&raw);
        log::info!("holdout accuracy: {:.4}", report.accuracy);
        Ok(report)
    }
}
