//! Small dense containers used throughout the crate.
//!
//! `Array2` stores samples row-major, `Array1` holds per-feature vectors
//! such as distances, document vectors and log-probabilities.
pub mod matrix;
pub mod vector;

pub use matrix::Array2;
pub use vector::Array1;
