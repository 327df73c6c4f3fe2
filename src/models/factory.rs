use crate::config::ModelConfig;
use crate::models::classifier_trait::ChainEstimator;

/// Build a boxed stage model from a `ModelConfig`.
/// Currently this is a thin factory implemented as a single function.
pub fn build_estimator(params: ModelConfig) -> Box<dyn ChainEstimator> {
    match params.model_type {
        crate::config::ModelType::GBDT { .. } => {
            Box::new(crate::models::gbdt::GbdtEstimator::new(params))
        }
    }
}
