//! Plain-text document folders for the naive Bayes classifier.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data_handling::LabeledCorpus;
use crate::text::tokenize;

/// Tokenize one file. Bytes that are not valid UTF-8 are replaced, not rejected.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let bytes = fs::read(&path)
        .with_context(|| format!("Failed to read document: {}", path.as_ref().display()))?;
    Ok(tokenize(&String::from_utf8_lossy(&bytes)))
}

/// Read `1.txt ..= count.txt` from both folders, alternating a positive
/// (label 1) and a negative (label 0) document.
pub fn read_text_corpus<P, N>(positive_dir: P, negative_dir: N, count: usize) -> Result<LabeledCorpus>
where
    P: AsRef<Path>,
    N: AsRef<Path>,
{
    let mut corpus = LabeledCorpus::default();
    for i in 1..=count {
        let name = format!("{}.txt", i);
        corpus.push(read_document(positive_dir.as_ref().join(&name))?, true);
        corpus.push(read_document(negative_dir.as_ref().join(&name))?, false);
    }
    log::info!(
        "Loaded {} documents from {} and {}",
        corpus.len(),
        positive_dir.as_ref().display(),
        negative_dir.as_ref().display()
    );
    Ok(corpus)
}
