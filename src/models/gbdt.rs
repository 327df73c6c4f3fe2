use anyhow::{anyhow, Result};
use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;
use ndarray::{Array1, Array2};

use crate::config::{ModelConfig, ModelType};
use crate::models::classifier_trait::ChainEstimator;

/// Gradient Boosting Decision Tree (GBDT) stage model
pub struct GbdtEstimator {
    model: Option<GBDT>,
    config: ModelConfig,
}

impl GbdtEstimator {
    pub fn new(config: ModelConfig) -> Self {
        GbdtEstimator {
            model: None,
            config,
        }
    }
}

impl ChainEstimator for GbdtEstimator {
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<f32>) -> Result<()> {
        let feature_size = x.ncols();

        match &self.config.model_type {
            ModelType::GBDT {
                max_depth,
                num_boost_round,
                debug,
                training_optimization_level,
                loss_type,
            } => {
                let mut config = Config::new();

                config.set_feature_size(feature_size);
                config.set_shrinkage(self.config.learning_rate);
                config.set_max_depth(*max_depth);
                config.set_iterations(*num_boost_round as usize);
                config.set_debug(*debug);
                config.set_training_optimization_level(*training_optimization_level);
                config.set_loss(loss_type);

                let mut gbdt = GBDT::new(&config);

                let mut train_x = DataVec::new();
                for row in 0..x.nrows() {
                    let train_row = x.row(row).to_vec();
                    train_x.push(Data::new_training_data(train_row, 1.0, y[row], None));
                }

                gbdt.fit(&mut train_x);
                self.model = Some(gbdt);
            }
        }

        Ok(())
    }

    fn predict(&self, x: &Array2<f32>) -> Result<Vec<f32>> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| anyhow!("gbdt model has not been fitted"))?;

        let mut test_x = DataVec::new();
        for row in 0..x.nrows() {
            let test_row = x.row(row).to_vec();
            test_x.push(Data::new_training_data(test_row, 1.0, 0.0, None));
        }

        Ok(model.predict(&test_x))
    }

    fn clone_untrained(&self) -> Box<dyn ChainEstimator> {
        Box::new(GbdtEstimator::new(self.config.clone()))
    }

    fn name(&self) -> &str {
        "gbdt"
    }
}
