//! multilabel-chain: classifier chains for multi-label learning.
//!
//! A classifier chain turns an `n_labels`-output prediction problem into a
//! sequence of single-label fits over a pluggable base estimator: stage `k`
//! sees the feature matrix plus the label columns of every earlier stage,
//! true labels at training time and the running predictions at inference
//! time. Predictions are reassembled into original label-column order before
//! they are returned.
//!
//! The per-label learner is anything implementing
//! [`models::classifier_trait::ChainEstimator`]; a GBDT-backed model ships in
//! [`models::gbdt`] behind a small factory.
pub mod chain;
pub mod config;
pub mod data_handling;
pub mod error;
pub mod models;
