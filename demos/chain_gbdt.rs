use anyhow::Result;
use ndarray::Array2;

use multilabel_chain::chain::ClassifierChain;
use multilabel_chain::config::{ChainConfig, ModelConfig, ModelType};
use multilabel_chain::data_handling::LabelMatrix;
use multilabel_chain::models::factory::build_estimator;

fn main() -> Result<()> {
    env_logger::init();

    // Tiny synthetic dataset: 8 samples, 2 features, 3 label columns.
    // The first label follows the first feature, the second label follows the
    // second feature, and the third label is their conjunction, so the chain
    // has real signal to pass down the sequence.
    let x = Array2::from_shape_vec(
        (8, 2),
        vec![
            1.0, 0.0, //
            0.0, 1.0, //
            1.0, 0.1, //
            0.0, 0.9, //
            1.1, 1.0, //
            0.9, 1.2, //
            0.0, 0.1, //
            1.2, 0.0, //
        ],
    )
    .expect("failed to create feature matrix");

    let y = Array2::from_shape_vec(
        (8, 3),
        vec![
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            1.0, 1.0, 1.0, //
            1.0, 1.0, 1.0, //
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
        ],
    )
    .expect("failed to create label matrix");

    println!("Synthetic X shape: {:?}", x.shape());
    println!("Synthetic Y shape: {:?}", y.shape());

    // Model params: small number of boosting rounds for speed
    let params = ModelConfig {
        learning_rate: 0.3,
        model_type: ModelType::GBDT {
            max_depth: 3,
            num_boost_round: 20,
            debug: false,
            training_optimization_level: 2,
            loss_type: "SquaredError".to_string(),
        },
    };

    let config = ChainConfig {
        random_state: Some(42),
        ..ChainConfig::default()
    };

    let mut chain = ClassifierChain::new(build_estimator(params), config)?;
    chain.fit(&x, &LabelMatrix::from(y))?;

    let fitted = chain.fitted().expect("chain should be fitted");
    println!("Resolved chain order: {:?}", fitted.chain_order());

    let predictions = chain.predict(&x)?;
    println!("Predictions shape: {:?}", predictions.shape());
    for row in 0..predictions.nrows() {
        println!("sample {} -> {:?}", row, predictions.row(row).to_vec());
    }

    Ok(())
}
