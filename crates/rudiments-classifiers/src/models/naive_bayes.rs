//! Binary naive Bayes over vocabulary-aligned document vectors.
//!
//! Token counts start at 1 and per-class totals at 2 (add-one smoothing) so
//! that a token never seen in one class cannot zero out that class, and the
//! per-token probabilities are stored as natural logarithms so that scoring
//! a document is a sum instead of a long product of small numbers that would
//! underflow.
use crate::config::VectorizerKind;
use crate::data_handling::LabeledCorpus;
use crate::error::{LearnError, Result};
use crate::math::Array1;
use crate::models::classifier_trait::Classifier;
use crate::text::{DocumentVector, Vocabulary};

/// Per-class log-probability vectors plus the prior of class 1.
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveBayesModel {
    p0_vect: Array1<f64>,
    p1_vect: Array1<f64>,
    p_class1: f64,
}

/// Tokens whose log-probability passes a threshold, per class, most likely first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopWords {
    pub class0: Vec<(String, f64)>,
    pub class1: Vec<(String, f64)>,
}

impl NaiveBayesModel {
    /// Estimate the model from document vectors and their 0/1 labels.
    pub fn train(train_matrix: &[DocumentVector], labels: &[u8]) -> Result<Self> {
        let n_docs = train_matrix.len();
        if n_docs == 0 {
            return Err(LearnError::invalid_argument("cannot train on zero documents"));
        }
        if labels.len() != n_docs {
            return Err(LearnError::invalid_argument(format!(
                "{} labels for {} documents",
                labels.len(),
                n_docs
            )));
        }
        let n_words = train_matrix[0].len();

        let mut p0_num = Array1::<f64>::ones(n_words);
        let mut p1_num = Array1::<f64>::ones(n_words);
        let mut p0_denom = 2.0;
        let mut p1_denom = 2.0;
        let mut n_class1 = 0usize;

        for (idx, (doc, &label)) in train_matrix.iter().zip(labels).enumerate() {
            if doc.len() != n_words {
                return Err(LearnError::invalid_argument(format!(
                    "document {} has {} entries, expected {}",
                    idx,
                    doc.len(),
                    n_words
                )));
            }
            let counts: Vec<f64> = doc.iter().map(|&c| c as f64).collect();
            match label {
                1 => {
                    n_class1 += 1;
                    p1_num.add_assign(&counts);
                    p1_denom += doc.sum() as f64;
                }
                0 => {
                    p0_num.add_assign(&counts);
                    p0_denom += doc.sum() as f64;
                }
                other => {
                    return Err(LearnError::invalid_argument(format!(
                        "label of document {} must be 0 or 1, found {}",
                        idx, other
                    )))
                }
            }
        }

        let p_class1 = n_class1 as f64 / n_docs as f64;
        log::debug!(
            "Trained naive Bayes on {} documents x {} tokens (p(class 1) = {:.3})",
            n_docs,
            n_words,
            p_class1
        );

        Ok(NaiveBayesModel {
            p0_vect: p0_num.mapv(|&c| (c / p0_denom).ln()),
            p1_vect: p1_num.mapv(|&c| (c / p1_denom).ln()),
            p_class1,
        })
    }

    pub fn p0_vect(&self) -> &Array1<f64> {
        &self.p0_vect
    }

    pub fn p1_vect(&self) -> &Array1<f64> {
        &self.p1_vect
    }

    pub fn p_class1(&self) -> f64 {
        self.p_class1
    }

    pub fn n_features(&self) -> usize {
        self.p0_vect.len()
    }

    /// `(score of class 0, score of class 1)` as log-likelihood plus log prior.
    pub fn log_scores(&self, vector: &DocumentVector) -> Result<(f64, f64)> {
        if vector.len() != self.n_features() {
            return Err(LearnError::invalid_argument(format!(
                "document vector has {} entries, model has {}",
                vector.len(),
                self.n_features()
            )));
        }
        let v = vector.mapv(|&c| c as f64);
        let p1 = v.dot(&self.p1_vect) + self.p_class1.ln();
        let p0 = v.dot(&self.p0_vect) + (1.0 - self.p_class1).ln();
        Ok((p0, p1))
    }

    /// Class with the higher score; equal scores go to class 0.
    pub fn classify(&self, vector: &DocumentVector) -> Result<u8> {
        let (p0, p1) = self.log_scores(vector)?;
        Ok(if p1 > p0 { 1 } else { 0 })
    }

    /// Tokens with log-probability above `threshold` in each class.
    pub fn top_words(&self, vocab: &Vocabulary, threshold: f64) -> Result<TopWords> {
        if vocab.len() != self.n_features() {
            return Err(LearnError::invalid_argument(format!(
                "vocabulary has {} tokens, model has {}",
                vocab.len(),
                self.n_features()
            )));
        }

        let pick = |vect: &Array1<f64>| {
            let mut words: Vec<(String, f64)> = vocab
                .tokens()
                .iter()
                .zip(vect.iter())
                .filter(|(_, &lp)| lp > threshold)
                .map(|(tok, &lp)| (tok.clone(), lp))
                .collect();
            words.sort_by(|a, b| b.1.total_cmp(&a.1));
            words
        };

        Ok(TopWords {
            class0: pick(&self.p0_vect),
            class1: pick(&self.p1_vect),
        })
    }
}

impl Classifier for NaiveBayesModel {
    type Sample = DocumentVector;
    type Label = u8;

    fn classify(&self, sample: &DocumentVector) -> Result<u8> {
        NaiveBayesModel::classify(self, sample)
    }

    fn name(&self) -> &str {
        "naive-bayes"
    }
}

/// A model bundled with the vocabulary and encoding it was trained with, so
/// it can classify raw token lists.
#[derive(Debug, Clone)]
pub struct NaiveBayesTextClassifier {
    pub vocabulary: Vocabulary,
    pub vectorizer: VectorizerKind,
    pub model: NaiveBayesModel,
}

impl NaiveBayesTextClassifier {
    /// Train on the documents of `corpus` selected by `indices`.
    pub fn fit(
        corpus: &LabeledCorpus,
        indices: &[usize],
        vocabulary: Vocabulary,
        vectorizer: VectorizerKind,
    ) -> Result<Self> {
        let mut matrix: Vec<DocumentVector> = Vec::with_capacity(indices.len());
        let mut labels: Vec<u8> = Vec::with_capacity(indices.len());
        for &i in indices {
            let (document, &label) = corpus
                .documents
                .get(i)
                .zip(corpus.labels.get(i))
                .ok_or_else(|| {
                    LearnError::invalid_argument(format!(
                        "document index {} out of range for a corpus of {}",
                        i,
                        corpus.len()
                    ))
                })?;
            matrix.push(vectorize(&vocabulary, vectorizer, document));
            labels.push(label);
        }
        let model = NaiveBayesModel::train(&matrix, &labels)?;

        Ok(NaiveBayesTextClassifier {
            vocabulary,
            vectorizer,
            model,
        })
    }

    pub fn classify_tokens<T: AsRef<str>>(&self, document: &[T]) -> Result<u8> {
        self.model
            .classify(&vectorize(&self.vocabulary, self.vectorizer, document))
    }
}

impl Classifier for NaiveBayesTextClassifier {
    type Sample = [String];
    type Label = u8;

    fn classify(&self, sample: &[String]) -> Result<u8> {
        self.classify_tokens(sample)
    }

    fn name(&self) -> &str {
        "naive-bayes"
    }
}

/// Encode `document` against `vocab` with the chosen encoding.
pub fn vectorize<T: AsRef<str>>(vocab: &Vocabulary, kind: VectorizerKind, document: &[T]) -> DocumentVector {
    match kind {
        VectorizerKind::SetOfWords => vocab.vectorize_presence(document),
        VectorizerKind::BagOfWords => vocab.vectorize_count(document),
    }
}
