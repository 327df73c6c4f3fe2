use anyhow::Result;
use ndarray::{Array1, Array2};

/// A small trait abstraction for the per-label models driven by the chain.
/// Each chain position owns one instance, cloned untrained from a prototype
/// and fitted exactly once on that position's augmented view.
pub trait ChainEstimator {
    /// Fit the model on an augmented feature matrix and one label column.
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<f32>) -> Result<()>;

    /// Point predictions for each row of `x` (raw model output; the chain
    /// applies no thresholding or calibration).
    fn predict(&self, x: &Array2<f32>) -> Result<Vec<f32>>;

    /// A fresh, untrained instance carrying the same configuration.
    fn clone_untrained(&self) -> Box<dyn ChainEstimator>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "estimator"
    }
}
