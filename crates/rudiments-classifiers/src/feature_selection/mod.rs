//! Feature selection utilities.
//!
//! This module contains frequency-based vocabulary pruning for the text
//! classifier: ranking tokens by how often they occur across a corpus and
//! dropping the most common ones before training.
pub mod frequency;

pub use frequency::{prune_most_frequent, top_frequent_tokens};
