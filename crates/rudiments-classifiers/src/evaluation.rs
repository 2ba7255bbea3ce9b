//! Error-rate harnesses for the trained learners.
//!
//! Test samples are classified in parallel with rayon; the random draws of
//! the naive Bayes cross-validation come from a single `StdRng` so a seeded
//! run is reproducible.
use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::config::{BayesConfig, KnnConfig};
use crate::data_handling::{hold_out_split, Dataset, LabeledCorpus};
use crate::error::{LearnError, Result};
use crate::feature_selection::prune_most_frequent;
use crate::models::classifier_trait::Classifier;
use crate::models::knn::KNearestNeighbors;
use crate::models::naive_bayes::NaiveBayesTextClassifier;
use crate::preprocessing::fit_transform;
use crate::stats::ErrorReport;
use crate::text::Vocabulary;

/// Classify every sample and count the mismatches against `truth`.
pub fn evaluate<C, S>(classifier: &C, samples: &[S], truth: &[C::Label]) -> Result<ErrorReport>
where
    C: Classifier + Sync,
    C::Label: PartialEq + Debug + Send + Sync,
    S: Borrow<C::Sample> + Sync,
{
    if samples.len() != truth.len() {
        return Err(LearnError::invalid_argument(format!(
            "{} samples for {} expected labels",
            samples.len(),
            truth.len()
        )));
    }

    let outcomes = samples
        .par_iter()
        .zip(truth.par_iter())
        .map(|(sample, expected)| -> Result<bool> {
            let predicted = classifier.classify(<S as Borrow<C::Sample>>::borrow(sample))?;
            if &predicted != expected {
                log::debug!(
                    "{} came back with: {:?}, the real answer is: {:?}",
                    classifier.name(),
                    predicted,
                    expected
                );
            }
            Ok(&predicted == expected)
        })
        .collect::<Result<Vec<bool>>>()?;

    Ok(ErrorReport::from_outcomes(outcomes))
}

/// Hold out the first `floor(n * hold_out_ratio)` rows as test set and score
/// a k-NN model trained on the rest.
///
/// With `normalize`, the whole dataset is rescaled before the split, so test
/// rows share the training rows' ranges.
pub fn knn_hold_out<L>(dataset: &Dataset<L>, config: &KnnConfig) -> Result<ErrorReport>
where
    L: Clone + Eq + Hash + Debug + Send + Sync,
{
    if !(config.hold_out_ratio > 0.0 && config.hold_out_ratio < 1.0) {
        return Err(LearnError::invalid_argument(format!(
            "hold-out ratio {} must be in (0, 1)",
            config.hold_out_ratio
        )));
    }
    let n = dataset.n_samples();
    let num_test = (n as f64 * config.hold_out_ratio) as usize;
    if num_test == 0 || num_test >= n {
        return Err(LearnError::invalid_argument(format!(
            "hold-out ratio {} leaves no test or no training rows out of {}",
            config.hold_out_ratio, n
        )));
    }

    let data = if config.normalize {
        let (x, _) = fit_transform(&dataset.x)?;
        dataset.with_features(x)?
    } else {
        dataset.clone()
    };
    let (test, train) = data.split_at(num_test);

    let knn = KNearestNeighbors::fit(train, config.k, false)?;
    let queries: Vec<&[f64]> = test.x.rows().collect();
    let report = evaluate(&knn, &queries, &test.labels)?;

    log::info!("k-NN hold-out (k = {}): {}", config.k, report);
    Ok(report)
}

/// Score a k-NN model trained on `train` against a separate `test` set.
pub fn knn_train_test<L>(train: Dataset<L>, test: &Dataset<L>, config: &KnnConfig) -> Result<ErrorReport>
where
    L: Clone + Eq + Hash + Debug + Send + Sync,
{
    let knn = KNearestNeighbors::fit(train, config.k, config.normalize)?;
    let queries: Vec<&[f64]> = test.x.rows().collect();
    let report = evaluate(&knn, &queries, &test.labels)?;

    log::info!("k-NN train/test (k = {}): {}", config.k, report);
    Ok(report)
}

/// Outcome of a naive Bayes cross-validation run.
#[derive(Debug, Clone)]
pub struct BayesEvaluation {
    /// One report per iteration.
    pub reports: Vec<ErrorReport>,
    /// Model of the last iteration.
    pub classifier: NaiveBayesTextClassifier,
}

impl BayesEvaluation {
    pub fn mean_error_rate(&self) -> f64 {
        if self.reports.is_empty() {
            return 0.0;
        }
        self.reports.iter().map(ErrorReport::error_rate).sum::<f64>() / self.reports.len() as f64
    }
}

/// Repeated random hold-out of `test_size` documents.
///
/// The vocabulary is built once from the whole corpus, minus the
/// `prune_top` most frequent tokens. Each iteration draws a fresh test set,
/// trains on the remaining documents and records the error rate.
pub fn bayes_hold_out(corpus: &LabeledCorpus, config: &BayesConfig) -> Result<BayesEvaluation> {
    if config.iterations == 0 {
        return Err(LearnError::invalid_argument("iterations must be at least 1"));
    }
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut vocabulary = Vocabulary::build(&corpus.documents);
    if config.prune_top > 0 {
        vocabulary = prune_most_frequent(&vocabulary, corpus.full_text(), config.prune_top);
    }
    log::info!(
        "Vocabulary of {} tokens over {} documents",
        vocabulary.len(),
        corpus.len()
    );

    let mut reports = Vec::with_capacity(config.iterations);
    let mut last = None;
    for iteration in 0..config.iterations {
        let split = hold_out_split(corpus.len(), config.test_size, &mut rng)?;
        let classifier = NaiveBayesTextClassifier::fit(
            corpus,
            &split.train,
            vocabulary.clone(),
            config.vectorizer,
        )?;

        let docs: Vec<&[String]> = split
            .test
            .iter()
            .map(|&i| corpus.documents[i].as_slice())
            .collect();
        let truth: Vec<u8> = split.test.iter().map(|&i| corpus.labels[i]).collect();
        let report = evaluate(&classifier, &docs, &truth)?;

        log::info!("Iteration {}: the error rate is {:.4}", iteration + 1, report.error_rate());
        reports.push(report);
        last = Some(classifier);
    }

    let classifier = last.ok_or_else(|| LearnError::invalid_argument("no iteration ran"))?;
    let evaluation = BayesEvaluation { reports, classifier };
    log::info!(
        "Mean error rate over {} iterations: {:.4}",
        evaluation.reports.len(),
        evaluation.mean_error_rate()
    );
    Ok(evaluation)
}
