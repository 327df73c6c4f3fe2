//! Classifier-chain construction, training, and prediction.
//!
//! A chain decomposes an `n_labels`-column prediction problem into a sequence
//! of single-label fits. Stage `k` trains on the feature matrix augmented
//! with the true labels of the `k` earlier chain positions; at inference the
//! augmentation uses the running predictions instead. Stage `k` therefore
//! depends on stages `[0, k)` in both phases, which makes the chain strictly
//! sequential across positions even though a stage model may parallelize
//! internally.
use ndarray::{concatenate, s, Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};

use crate::config::ChainConfig;
use crate::data_handling::LabelMatrix;
use crate::error::ChainError;
use crate::models::classifier_trait::ChainEstimator;

/// Source of randomness used to derive a chain order when none is supplied.
#[derive(Debug, Clone)]
pub enum RandomSource {
    /// Thread-local process-default generator.
    Default,
    /// Fixed seed, for reproducible orders.
    Seed(u64),
    /// Caller-supplied generator.
    Rng(StdRng),
}

/// A multi-label classifier chain over a pluggable per-label model.
///
/// The chain is constructed around a prototype estimator and a
/// [`ChainConfig`]. `fit` resolves the visiting order, trains one fresh clone
/// of the prototype per chain position, and stores the result as an immutable
/// [`FittedChain`]; `predict` replays the chain over that state.
pub struct ClassifierChain {
    prototype: Box<dyn ChainEstimator>,
    chain_order: Option<Vec<usize>>,
    shuffle: bool,
    random_source: RandomSource,
    fitted: Option<FittedChain>,
}

impl std::fmt::Debug for ClassifierChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierChain")
            .field("prototype", &self.prototype.name())
            .field("chain_order", &self.chain_order)
            .field("shuffle", &self.shuffle)
            .field("random_source", &self.random_source)
            .field("fitted", &self.fitted.as_ref().map(|_| "FittedChain"))
            .finish()
    }
}

/// The immutable result of fitting a chain: the resolved visiting order and
/// one trained model per chain position.
pub struct FittedChain {
    chain_order: Vec<usize>,
    classifiers: Vec<Box<dyn ChainEstimator>>,
    n_features: usize,
}

impl ClassifierChain {
    /// Create an unfitted chain.
    ///
    /// A supplied `chain_order` is checked entry-by-entry here: every entry
    /// must be a usable column index. Whether the order matches the label
    /// matrix is only known once `fit` sees the data.
    pub fn new(
        prototype: Box<dyn ChainEstimator>,
        config: ChainConfig,
    ) -> Result<Self, ChainError> {
        let chain_order = config
            .chain_order
            .map(|raw| {
                raw.iter()
                    .map(|&entry| {
                        usize::try_from(entry).map_err(|_| ChainError::NonIndexChainOrder(entry))
                    })
                    .collect::<Result<Vec<usize>, ChainError>>()
            })
            .transpose()?;

        let random_source = match config.random_state {
            Some(seed) => RandomSource::Seed(seed),
            None => RandomSource::Default,
        };

        Ok(ClassifierChain {
            prototype,
            chain_order,
            shuffle: config.shuffle,
            random_source,
            fitted: None,
        })
    }

    /// Replace the random source with a caller-supplied generator.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.random_source = RandomSource::Rng(rng);
        self
    }

    /// The fitted state, once `fit` has completed.
    pub fn fitted(&self) -> Option<&FittedChain> {
        self.fitted.as_ref()
    }

    /// Validate a supplied order against the label matrix, or derive one.
    fn resolve_chain_order(&mut self, n_labels: usize) -> Result<Vec<usize>, ChainError> {
        match &self.chain_order {
            Some(order) => {
                if order.len() != n_labels {
                    return Err(ChainError::ChainOrderMismatch {
                        expected: n_labels,
                        got: order.len(),
                    });
                }
                let mut seen = vec![false; n_labels];
                for &col in order {
                    if col >= n_labels || seen[col] {
                        return Err(ChainError::NotAPermutation(col));
                    }
                    seen[col] = true;
                }
                Ok(order.clone())
            }
            None => {
                let mut order: Vec<usize> = (0..n_labels).collect();
                if self.shuffle {
                    match &mut self.random_source {
                        RandomSource::Default => order.shuffle(&mut thread_rng()),
                        RandomSource::Seed(seed) => {
                            order.shuffle(&mut StdRng::seed_from_u64(*seed))
                        }
                        RandomSource::Rng(rng) => order.shuffle(rng),
                    }
                }
                Ok(order)
            }
        }
    }

    /// Train one stage model per label column, visiting columns in chain order.
    ///
    /// Fails fast, before any stage model is touched, when the chain is
    /// already fitted, when `x` and `y` disagree on sample count, or when a
    /// supplied chain order does not cover the label columns. Stage-model
    /// failures propagate unchanged; stages completed before the failure are
    /// discarded with the rest of the call.
    pub fn fit(&mut self, x: &Array2<f32>, y: &LabelMatrix) -> anyhow::Result<()> {
        if self.fitted.is_some() {
            return Err(ChainError::AlreadyFitted.into());
        }
        if x.nrows() != y.nrows() {
            return Err(ChainError::SampleCountMismatch {
                x_rows: x.nrows(),
                y_rows: y.nrows(),
            }
            .into());
        }

        let n_labels = y.ncols();
        let chain_order = self.resolve_chain_order(n_labels)?;
        log::debug!(
            "resolved chain order {:?} over {} label columns",
            chain_order,
            n_labels
        );

        let mut classifiers: Vec<Box<dyn ChainEstimator>> = Vec::with_capacity(n_labels);
        for (chain_idx, &target_col) in chain_order.iter().enumerate() {
            // True labels of the earlier-in-chain columns, densified.
            let previous_labels = y.dense_block(&chain_order[..chain_idx]);
            let target = y.column(target_col);
            let x_aug = if chain_idx == 0 {
                x.to_owned()
            } else {
                concatenate(Axis(1), &[x.view(), previous_labels.view()])?
            };

            let mut model = self.prototype.clone_untrained();
            log::trace!(
                "fitting {} at chain position {} (label column {}, {} input columns)",
                model.name(),
                chain_idx,
                target_col,
                x_aug.ncols()
            );
            model.fit(&x_aug, &target)?;
            classifiers.push(model);
        }

        log::info!("fitted classifier chain with {} stage models", n_labels);
        self.fitted = Some(FittedChain {
            chain_order,
            classifiers,
            n_features: x.ncols(),
        });
        Ok(())
    }

    /// Predict every label column for `x`, in original column order.
    pub fn predict(&self, x: &Array2<f32>) -> anyhow::Result<Array2<f32>> {
        match &self.fitted {
            Some(fitted) => fitted.predict(x),
            None => Err(ChainError::NotFitted.into()),
        }
    }
}

impl FittedChain {
    /// The visiting order resolved at fit time. Position `k` holds the
    /// original label column predicted by stage `k`.
    pub fn chain_order(&self) -> &[usize] {
        &self.chain_order
    }

    /// Number of chain positions (label columns).
    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }

    /// Replay the chain over `x`.
    ///
    /// Stage `k` predicts from `x` plus the accumulated predictions of
    /// positions `[0, k)`; true labels are never available here. The
    /// accumulator is indexed by chain position and reordered into original
    /// column order before it is returned.
    pub fn predict(&self, x: &Array2<f32>) -> anyhow::Result<Array2<f32>> {
        if x.ncols() != self.n_features {
            return Err(ChainError::FeatureCountMismatch {
                expected: self.n_features,
                got: x.ncols(),
            }
            .into());
        }

        let n_samples = x.nrows();
        let n_labels = self.classifiers.len();
        let mut chained = Array2::<f32>::zeros((n_samples, n_labels));

        for (chain_idx, model) in self.classifiers.iter().enumerate() {
            let x_aug = if chain_idx == 0 {
                x.to_owned()
            } else {
                let previous_predictions = chained.slice(s![.., ..chain_idx]);
                concatenate(Axis(1), &[x.view(), previous_predictions])?
            };

            let stage = model.predict(&x_aug)?;
            if stage.len() != n_samples {
                anyhow::bail!(
                    "stage model {} returned {} predictions for {} samples",
                    chain_idx,
                    stage.len(),
                    n_samples
                );
            }
            chained.column_mut(chain_idx).assign(&Array1::from(stage));
        }

        // Map each original column back to the chain position that produced it.
        let mut chain_key = vec![0usize; n_labels];
        for (position, &col) in self.chain_order.iter().enumerate() {
            chain_key[col] = position;
        }

        Ok(chained.select(Axis(1), &chain_key))
    }
}
