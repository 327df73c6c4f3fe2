use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use ndarray::{Array1, Array2};

use multilabel_chain::chain::ClassifierChain;
use multilabel_chain::config::{ChainConfig, ModelConfig, ModelType};
use multilabel_chain::data_handling::LabelMatrix;
use multilabel_chain::models::classifier_trait::ChainEstimator;
use multilabel_chain::models::factory::build_estimator;

/// Minimal stage model: memorizes nothing, predicts the per-row mean of its
/// input so chain outputs are deterministic without a real learner.
struct RowMeanEstimator {
    fit_calls: Rc<RefCell<usize>>,
}

impl RowMeanEstimator {
    fn prototype() -> (Box<dyn ChainEstimator>, Rc<RefCell<usize>>) {
        let fit_calls = Rc::new(RefCell::new(0));
        let estimator = RowMeanEstimator {
            fit_calls: Rc::clone(&fit_calls),
        };
        (Box::new(estimator), fit_calls)
    }
}

impl ChainEstimator for RowMeanEstimator {
    fn fit(&mut self, _x: &Array2<f32>, _y: &Array1<f32>) -> Result<()> {
        *self.fit_calls.borrow_mut() += 1;
        Ok(())
    }

    fn predict(&self, x: &Array2<f32>) -> Result<Vec<f32>> {
        Ok((0..x.nrows())
            .map(|row| x.row(row).sum() / x.ncols().max(1) as f32)
            .collect())
    }

    fn clone_untrained(&self) -> Box<dyn ChainEstimator> {
        Box::new(RowMeanEstimator {
            fit_calls: Rc::clone(&self.fit_calls),
        })
    }

    fn name(&self) -> &str {
        "row-mean"
    }
}

fn tiny_features() -> Array2<f32> {
    Array2::from_shape_vec(
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
    .expect("failed to create feature matrix")
}

fn tiny_labels() -> Array2<f32> {
    Array2::from_shape_vec(
        (6, 2),
        vec![
            1.0, 0.0, //
            0.0, 1.0, //
            1.0, 0.0, //
            0.0, 1.0, //
            1.0, 0.0, //
            0.0, 1.0, //
        ],
    )
    .expect("failed to create label matrix")
}

#[test]
fn test_fit_trains_one_stage_model_per_label_column() {
    let (prototype, fit_calls) = RowMeanEstimator::prototype();
    let mut chain = ClassifierChain::new(
        prototype,
        ChainConfig {
            random_state: Some(3),
            ..ChainConfig::default()
        },
    )
    .expect("failed to build chain");

    chain
        .fit(&tiny_features(), &LabelMatrix::from(tiny_labels()))
        .expect("fit failed");

    assert_eq!(*fit_calls.borrow(), 2);
    let fitted = chain.fitted().expect("chain should be fitted");
    assert_eq!(fitted.len(), 2);
    assert!(!fitted.is_empty());
}

#[test]
fn test_predictions_have_one_column_per_label_in_original_order() {
    let (prototype, _) = RowMeanEstimator::prototype();
    let mut chain = ClassifierChain::new(
        prototype,
        ChainConfig {
            chain_order: Some(vec![1, 0]),
            ..ChainConfig::default()
        },
    )
    .expect("failed to build chain");

    let x = tiny_features();
    chain
        .fit(&x, &LabelMatrix::from(tiny_labels()))
        .expect("fit failed");
    let predictions = chain.predict(&x).expect("predict failed");
    assert_eq!(predictions.shape(), &[6, 2]);

    // Position 0 sees the bare features, so original column 1 must carry the
    // plain row means; original column 0 is position 1's three-column mean.
    for row in 0..6 {
        let bare_mean = x.row(row).sum() / 2.0;
        assert!((predictions[(row, 1)] - bare_mean).abs() < 1e-6);
        let augmented_mean = (x.row(row).sum() + bare_mean) / 3.0;
        assert!((predictions[(row, 0)] - augmented_mean).abs() < 1e-6);
    }
}

#[test]
fn test_gbdt_chain_smoke() {
    let params = ModelConfig {
        learning_rate: 0.3,
        model_type: ModelType::GBDT {
            max_depth: 3,
            num_boost_round: 5,
            debug: false,
            training_optimization_level: 2,
            loss_type: "SquaredError".to_string(),
        },
    };

    let mut chain = ClassifierChain::new(
        build_estimator(params),
        ChainConfig {
            random_state: Some(42),
            ..ChainConfig::default()
        },
    )
    .expect("failed to build chain");

    let x = tiny_features();
    chain
        .fit(&x, &LabelMatrix::from(tiny_labels()))
        .expect("fit failed");

    let predictions = chain.predict(&x).expect("predict failed");
    assert_eq!(predictions.shape(), &[6, 2]);
    assert!(predictions.iter().all(|value| value.is_finite()));
}
