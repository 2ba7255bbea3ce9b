//! Document handling for the naive Bayes classifier: tokenization, the
//! training vocabulary and the two document encodings built on it.
pub mod tokenize;
pub mod vocabulary;

pub use tokenize::tokenize;
pub use vocabulary::{DocumentVector, Vocabulary};
