//! Data structures for the three learners' inputs.
//!
//! `Dataset` holds numeric samples for the nearest-neighbor learner,
//! `Example` a categorical row for the decision tree, and `LabeledCorpus`
//! tokenized documents with binary labels for naive Bayes. The hold-out
//! helpers produce the random train/test partitions used by the harnesses.
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{LearnError, Result};
use crate::math::Array2;
use crate::text::tokenize;

/// Numeric samples with one label per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<L> {
    pub x: Array2<f64>,
    pub labels: Vec<L>,
}

impl<L> Dataset<L> {
    pub fn new(x: Array2<f64>, labels: Vec<L>) -> Result<Self> {
        if labels.len() != x.nrows() {
            return Err(LearnError::invalid_argument(format!(
                "{} labels for {} samples",
                labels.len(),
                x.nrows()
            )));
        }
        Ok(Dataset { x, labels })
    }

    pub fn from_rows(rows: Vec<Vec<f64>>, labels: Vec<L>) -> Result<Self> {
        Self::new(Array2::from_rows(rows)?, labels)
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.n_samples() == 0
    }

    pub fn sample(&self, idx: usize) -> (&[f64], &L) {
        (self.x.row_slice(idx), &self.labels[idx])
    }

    /// Same labels, different (e.g. normalized) feature matrix.
    pub fn with_features(&self, x: Array2<f64>) -> Result<Dataset<L>>
    where
        L: Clone,
    {
        Dataset::new(x, self.labels.clone())
    }

    pub fn select(&self, indices: &[usize]) -> Dataset<L>
    where
        L: Clone,
    {
        Dataset {
            x: self.x.select_rows(indices),
            labels: indices.iter().map(|&i| self.labels[i].clone()).collect(),
        }
    }

    /// Split into the first `n` rows and the remaining rows.
    pub fn split_at(&self, n: usize) -> (Dataset<L>, Dataset<L>)
    where
        L: Clone,
    {
        let n = n.min(self.n_samples());
        let head: Vec<usize> = (0..n).collect();
        let tail: Vec<usize> = (n..self.n_samples()).collect();
        (self.select(&head), self.select(&tail))
    }
}

/// One categorical training row for the decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example<V, L> {
    pub features: Vec<V>,
    pub label: L,
}

impl<V, L> Example<V, L> {
    pub fn new(features: Vec<V>, label: L) -> Self {
        Example { features, label }
    }
}

impl<T> Example<T, T> {
    /// Treat the last column of `row` as the label. `None` for an empty row.
    pub fn from_labeled_row(mut row: Vec<T>) -> Option<Self> {
        let label = row.pop()?;
        Some(Example {
            features: row,
            label,
        })
    }
}

/// Tokenized documents with binary labels (1 = positive class).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledCorpus {
    pub documents: Vec<Vec<String>>,
    pub labels: Vec<u8>,
}

impl LabeledCorpus {
    pub fn new(documents: Vec<Vec<String>>, labels: Vec<u8>) -> Result<Self> {
        if documents.len() != labels.len() {
            return Err(LearnError::invalid_argument(format!(
                "{} labels for {} documents",
                labels.len(),
                documents.len()
            )));
        }
        if let Some(bad) = labels.iter().find(|&&l| l > 1) {
            return Err(LearnError::invalid_argument(format!(
                "document labels must be 0 or 1, found {}",
                bad
            )));
        }
        Ok(LabeledCorpus { documents, labels })
    }

    /// Tokenize raw texts such as feed entry summaries, alternating a
    /// positive and a negative text. The longer side is cut to the length of
    /// the shorter one so both classes are equally represented.
    pub fn from_texts<P, N>(positive: &[P], negative: &[N]) -> Self
    where
        P: AsRef<str>,
        N: AsRef<str>,
    {
        let mut corpus = LabeledCorpus::default();
        for (pos, neg) in positive.iter().zip(negative) {
            corpus.push(tokenize(pos.as_ref()), true);
            corpus.push(tokenize(neg.as_ref()), false);
        }
        corpus
    }

    pub fn push(&mut self, document: Vec<String>, label: bool) {
        self.documents.push(document);
        self.labels.push(label as u8);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Every token of every document, in order, duplicates included.
    pub fn full_text(&self) -> impl Iterator<Item = &str> + '_ {
        self.documents.iter().flatten().map(String::as_str)
    }
}

/// Train/test row indices produced by a random hold-out draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldOutSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Draw `test_size` distinct indices out of `0..n_samples` as test set.
pub fn hold_out_split<R: Rng + ?Sized>(
    n_samples: usize,
    test_size: usize,
    rng: &mut R,
) -> Result<HoldOutSplit> {
    if test_size == 0 || test_size >= n_samples {
        return Err(LearnError::invalid_argument(format!(
            "test size {} must be in [1, {})",
            test_size, n_samples
        )));
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    indices.shuffle(rng);
    let train = indices.split_off(test_size);

    Ok(HoldOutSplit {
        train,
        test: indices,
    })
}
