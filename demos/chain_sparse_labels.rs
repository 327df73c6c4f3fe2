use anyhow::Result;
use ndarray::Array2;
use sprs::TriMat;

use multilabel_chain::chain::ClassifierChain;
use multilabel_chain::config::{ChainConfig, ModelConfig};
use multilabel_chain::data_handling::LabelMatrix;
use multilabel_chain::models::factory::build_estimator;

fn main() -> Result<()> {
    env_logger::init();

    let x = Array2::from_shape_vec(
        (6, 2),
        vec![
            1.0, 0.0, //
            0.0, 1.0, //
            1.0, 0.1, //
            0.0, 0.9, //
            1.1, 0.0, //
            0.0, 1.2, //
        ],
    )
    .expect("failed to create feature matrix");

    // Sparse label matrix in triplet form, the natural import format for
    // large multi-label corpora where most entries are zero.
    let mut labels = TriMat::new((6, 3));
    labels.add_triplet(0, 0, 1.0f32);
    labels.add_triplet(2, 0, 1.0);
    labels.add_triplet(4, 0, 1.0);
    labels.add_triplet(1, 1, 1.0);
    labels.add_triplet(3, 1, 1.0);
    labels.add_triplet(5, 1, 1.0);
    labels.add_triplet(4, 2, 1.0);

    let y = LabelMatrix::from(labels.to_csr::<usize>());
    println!("Label matrix is sparse: {}", y.is_sparse());
    println!("Label matrix shape: {:?}", y.shape());

    let config = ChainConfig {
        random_state: Some(7),
        ..ChainConfig::default()
    };
    let mut chain = ClassifierChain::new(build_estimator(ModelConfig::default()), config)?;
    chain.fit(&x, &y)?;

    let predictions = chain.predict(&x)?;
    println!("Predictions shape: {:?}", predictions.shape());

    Ok(())
}
