use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for a classifier chain.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ChainConfig {
    /// Visiting order over label columns. `None` derives an order at fit time.
    pub chain_order: Option<Vec<i64>>,

    /// Shuffle the derived identity order. Ignored when `chain_order` is set.
    pub shuffle: bool,

    /// Seed for the shuffle. `None` uses the thread-local generator unless an
    /// explicit generator is attached with `ClassifierChain::with_rng`.
    pub random_state: Option<u64>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_order: None,
            shuffle: true,
            random_state: None,
        }
    }
}

/// Configuration for the bundled stage models.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ModelConfig {
    pub learning_rate: f32,

    #[serde(flatten)]
    pub model_type: ModelType,
}

/// Supported stage-model types and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum ModelType {
    GBDT {
        max_depth: u32,
        num_boost_round: u32,
        debug: bool,
        training_optimization_level: u8,
        loss_type: String,
    },
}

impl Default for ModelType {
    fn default() -> Self {
        ModelType::GBDT {
            max_depth: 6,
            num_boost_round: 3,
            debug: false,
            training_optimization_level: 2,
            loss_type: "LogLikelyhood".to_string(),
        }
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gbdt" => Ok(ModelType::default()),
            _ => Err(format!("Unknown model type: {}", s)),
        }
    }
}

impl ModelConfig {
    pub fn new(learning_rate: f32, model_type: ModelType) -> Self {
        Self {
            learning_rate,
            model_type,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            model_type: ModelType::default(),
        }
    }
}
