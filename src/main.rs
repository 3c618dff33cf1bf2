//! Fake Account Detector - CLI Entry Point
//!
//! Trains the model on the configured corpus (generating one when absent),
//! evaluates it against the holdout set and prints the global feature
//! importance ranking.

use fake_detection_core::model::ClassifierEngine;
use fake_detection_core::{Evaluator, Result};

fn run() -> Result<()> {
    let engine = ClassifierEngine::with_defaults();

    let (x, y) = engine.prepare_training_data()?;
    let holdout_accuracy = engine.train(&x.view(), &y)?;
    println!("Held-out accuracy: {:.4}", holdout_accuracy);

    let report = Evaluator::new(&engine).run()?;
    println!("\n{}", report);

    println!("Top features:");
    for (name, importance) in engine.feature_importance()?.into_iter().take(10) {
        println!("  {:<35} {:.4}", name, importance);
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
