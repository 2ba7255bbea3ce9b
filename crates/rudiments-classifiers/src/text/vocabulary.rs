use std::collections::{HashMap, HashSet};

use crate::math::Array1;

/// Per-token presence flags or counts aligned to a [`Vocabulary`].
pub type DocumentVector = Array1<u32>;

/// Distinct tokens of a training corpus with a fixed index per token.
///
/// Tokens are ordered by first appearance, so the same corpus always yields
/// the same layout. Train and test documents must be vectorized against the
/// same instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Union of all tokens across `corpus`.
    pub fn build<D, T>(corpus: &[D]) -> Self
    where
        D: AsRef<[T]>,
        T: AsRef<str>,
    {
        Self::from_tokens(corpus.iter().flat_map(|doc| doc.as_ref().iter().map(|t: &T| t.as_ref())))
    }

    /// Deduplicate `tokens`, keeping first-appearance order.
    pub fn from_tokens<'a, I: IntoIterator<Item = &'a str>>(tokens: I) -> Self {
        let mut vocab = Vocabulary::default();
        for token in tokens {
            if !vocab.index.contains_key(token) {
                vocab.index.insert(token.to_string(), vocab.tokens.len());
                vocab.tokens.push(token.to_string());
            }
        }
        vocab
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// A new vocabulary without `removed`; the remaining tokens keep their
    /// relative order and are re-indexed.
    pub fn without<'a, I: IntoIterator<Item = &'a str>>(&self, removed: I) -> Self {
        let removed: HashSet<&str> = removed.into_iter().collect();
        Self::from_tokens(
            self.tokens
                .iter()
                .map(String::as_str)
                .filter(|tok| !removed.contains(tok)),
        )
    }

    /// 0/1 indicator per vocabulary token (set-of-words).
    ///
    /// Tokens outside the vocabulary are skipped with a warning.
    pub fn vectorize_presence<T: AsRef<str>>(&self, document: &[T]) -> DocumentVector {
        let mut vector = DocumentVector::zeros(self.len());
        for token in document {
            match self.index_of(token.as_ref()) {
                Some(idx) => vector[idx] = 1,
                None => log::warn!("the word: {} is not in the vocabulary", token.as_ref()),
            }
        }
        vector
    }

    /// Occurrence count per vocabulary token (bag-of-words).
    ///
    /// Tokens outside the vocabulary are skipped.
    pub fn vectorize_count<T: AsRef<str>>(&self, document: &[T]) -> DocumentVector {
        let mut vector = DocumentVector::zeros(self.len());
        for token in document {
            match self.index_of(token.as_ref()) {
                Some(idx) => vector[idx] += 1,
                None => log::debug!("skipping out-of-vocabulary token {}", token.as_ref()),
            }
        }
        vector
    }
}
