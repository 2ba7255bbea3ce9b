//! rudiments-classifiers: three classic supervised learners from first principles.
//!
//! This crate provides a k-nearest-neighbor classifier with min-max feature
//! normalization, an ID3 decision tree over categorical features with JSON
//! persistence, and a binary naive Bayes text classifier with add-one
//! smoothing in log space. Around them sit the readers for their on-disk
//! formats, tokenization and vocabulary handling, frequency-based vocabulary
//! pruning, and hold-out evaluation harnesses that report error rates.
//!
//! The learners work on the crate's own small matrix and vector types and
//! share the [`models::classifier_trait::Classifier`] contract so that
//! [`evaluation::evaluate`] can score any of them.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod evaluation;
pub mod feature_selection;
pub mod io;
pub mod math;
pub mod models;
pub mod preprocessing;
pub mod stats;
pub mod text;

pub use error::{LearnError, Result};
