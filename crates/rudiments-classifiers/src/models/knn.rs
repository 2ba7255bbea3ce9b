//! k-nearest-neighbor classification by Euclidean distance ranking.
use std::hash::Hash;

use crate::data_handling::Dataset;
use crate::error::{LearnError, Result};
use crate::math::Array1;
use crate::models::classifier_trait::Classifier;
use crate::preprocessing::MinMaxScaler;
use crate::stats::majority;

/// `sqrt(sum((a_i - b_i)^2))`
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Distance from `query` to every training sample, in training order.
pub fn distances<L>(query: &[f64], train: &Dataset<L>) -> Result<Array1<f64>> {
    if train.is_empty() {
        return Err(LearnError::invalid_argument("training set is empty"));
    }
    if query.len() != train.n_features() {
        return Err(LearnError::invalid_argument(format!(
            "query has {} features, training set has {}",
            query.len(),
            train.n_features()
        )));
    }

    Ok(train
        .x
        .rows()
        .map(|row| euclidean_distance(query, row))
        .collect())
}

/// Classify `query` by majority vote among its `k` nearest training samples.
///
/// Samples at equal distance keep their training-set order. When two labels
/// receive the same number of votes, the label whose nearest member ranks
/// first wins.
pub fn classify<L>(query: &[f64], train: &Dataset<L>, k: usize) -> Result<L>
where
    L: Clone + Eq + Hash,
{
    check_k(k, train.n_samples())?;
    let dist = distances(query, train)?;

    let mut order: Vec<usize> = (0..dist.len()).collect();
    order.sort_by(|&a, &b| dist[a].total_cmp(&dist[b]));

    majority(order[..k].iter().map(|&i| &train.labels[i]))
        .cloned()
        .ok_or_else(|| LearnError::invalid_argument("no neighbors to vote"))
}

fn check_k(k: usize, n_samples: usize) -> Result<()> {
    if n_samples == 0 {
        return Err(LearnError::invalid_argument("training set is empty"));
    }
    if k == 0 || k > n_samples {
        return Err(LearnError::invalid_argument(format!(
            "k = {} must be in [1, {}]",
            k, n_samples
        )));
    }
    Ok(())
}

/// A stored training set plus `k`, optionally normalizing queries with the
/// ranges and minimums of the training data.
#[derive(Debug, Clone)]
pub struct KNearestNeighbors<L> {
    train: Dataset<L>,
    k: usize,
    scaler: Option<MinMaxScaler>,
}

impl<L> KNearestNeighbors<L>
where
    L: Clone + Eq + Hash,
{
    /// Store the training set. With `normalize`, every feature is rescaled to
    /// [0, 1] first; a constant column then fails with `ZeroRange`.
    pub fn fit(train: Dataset<L>, k: usize, normalize: bool) -> Result<Self> {
        check_k(k, train.n_samples())?;

        let (train, scaler) = if normalize {
            let scaler = MinMaxScaler::fit(&train.x)?;
            let x = scaler.transform(&train.x)?;
            (train.with_features(x)?, Some(scaler))
        } else {
            (train, None)
        };

        log::debug!(
            "Stored {} samples with {} features for k = {} (normalized: {})",
            train.n_samples(),
            train.n_features(),
            k,
            scaler.is_some()
        );

        Ok(KNearestNeighbors { train, k, scaler })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn scaler(&self) -> Option<&MinMaxScaler> {
        self.scaler.as_ref()
    }

    pub fn predict(&self, query: &[f64]) -> Result<L> {
        match &self.scaler {
            Some(scaler) => classify(&scaler.transform_query(query)?, &self.train, self.k),
            None => classify(query, &self.train, self.k),
        }
    }
}

impl<L> Classifier for KNearestNeighbors<L>
where
    L: Clone + Eq + Hash,
{
    type Sample = [f64];
    type Label = L;

    fn classify(&self, sample: &[f64]) -> Result<L> {
        self.predict(sample)
    }

    fn name(&self) -> &str {
        "k-nearest-neighbors"
    }
}
