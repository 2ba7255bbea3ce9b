//! Token frequency ranking over a vocabulary.
//!
//! Very common tokens ("the", "and", ...) carry little class information but
//! dominate bag-of-words vectors; removing the top of the frequency ranking
//! is a cheap stop-word filter.
use std::collections::HashMap;

use crate::text::Vocabulary;

/// Rank vocabulary tokens by their number of occurrences in `full_text`.
///
/// # Parameters
///
/// * `vocab` - Tokens to rank. Tokens of `full_text` outside the vocabulary are ignored.
/// * `full_text` - Every token of the corpus, duplicates included.
/// * `n` - Number of tokens to return. Larger than the vocabulary returns all of it.
///
/// # Returns
///
/// Up to `n` `(token, count)` pairs in descending count order. Tokens with equal
/// counts keep their vocabulary order.
///
/// # Examples
///
/// ```rust
/// use rudiments_classifiers::feature_selection::top_frequent_tokens;
/// use rudiments_classifiers::text::Vocabulary;
///
/// let vocab = Vocabulary::build(&[vec!["ham", "spam", "spam"]]);
/// let top = top_frequent_tokens(&vocab, ["ham", "spam", "spam"], 1);
/// assert_eq!(top, vec![("spam".to_string(), 2)]);
/// ```
pub fn top_frequent_tokens<'a, I>(vocab: &Vocabulary, full_text: I, n: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for token in full_text {
        if let Some(idx) = vocab.index_of(token) {
            *counts.entry(idx).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(usize, usize)> = (0..vocab.len())
        .map(|idx| (idx, counts.get(&idx).copied().unwrap_or(0)))
        .collect();
    // stable: equal counts stay in vocabulary order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(n)
        .map(|(idx, count)| (vocab.tokens()[idx].clone(), count))
        .collect()
}

/// Copy of `vocab` without its `n` most frequent tokens in `full_text`.
pub fn prune_most_frequent<'a, I>(vocab: &Vocabulary, full_text: I, n: usize) -> Vocabulary
where
    I: IntoIterator<Item = &'a str>,
{
    let top = top_frequent_tokens(vocab, full_text, n);
    log::debug!(
        "Pruning {} most frequent tokens: {:?}",
        top.len(),
        top.iter().map(|(tok, _)| tok.as_str()).collect::<Vec<_>>()
    );
    vocab.without(top.iter().map(|(tok, _)| tok.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: [&str; 8] = ["the", "cat", "and", "the", "dog", "and", "the", "cat"];

    #[test]
    fn ranks_by_count_then_vocabulary_order() {
        let vocab = Vocabulary::build(&[TEXT]);
        let top = top_frequent_tokens(&vocab, TEXT, 3);
        assert_eq!(
            top,
            vec![("the".to_string(), 3), ("cat".to_string(), 2), ("and".to_string(), 2)]
        );
    }

    #[test]
    fn n_larger_than_vocabulary_returns_everything() {
        let vocab = Vocabulary::build(&[TEXT]);
        assert_eq!(top_frequent_tokens(&vocab, TEXT, 100).len(), vocab.len());
        assert!(top_frequent_tokens(&vocab, TEXT, 0).is_empty());
    }

    #[test]
    fn pruning_removes_top_tokens() {
        let vocab = Vocabulary::build(&[TEXT]);
        let pruned = prune_most_frequent(&vocab, TEXT, 1);
        assert_eq!(pruned.tokens(), &["cat", "and", "dog"]);
        assert_eq!(pruned.index_of("dog"), Some(2));
    }
}
