use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Central configuration for the learners and their evaluation harnesses.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ModelConfig {
    pub knn: KnnConfig,
    pub tree: TreeConfig,
    pub bayes: BayesConfig,
}

/// Nearest-neighbor hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct KnnConfig {
    pub k: usize,
    /// Fraction of rows held out as test set by the hold-out harness.
    pub hold_out_ratio: f64,
    /// Rescale features to [0, 1] before computing distances.
    pub normalize: bool,
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self {
            k: 3,
            hold_out_ratio: 0.10,
            normalize: true,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TreeConfig {
    /// Feature names for files that carry no header row.
    pub feature_names: Vec<String>,
}

/// Naive Bayes vectorization and cross-validation settings.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct BayesConfig {
    pub vectorizer: VectorizerKind,
    /// Number of documents drawn as test set per iteration.
    pub test_size: usize,
    pub iterations: usize,
    /// Remove this many of the most frequent tokens before training.
    pub prune_top: usize,
    pub seed: Option<u64>,
    /// Minimum log-probability for a token to be reported by `top_words`.
    pub top_word_threshold: f64,
}

impl Default for BayesConfig {
    fn default() -> Self {
        Self {
            vectorizer: VectorizerKind::BagOfWords,
            test_size: 10,
            iterations: 1,
            prune_top: 0,
            seed: None,
            top_word_threshold: -6.0,
        }
    }
}

/// Document encodings understood by the naive Bayes classifier.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VectorizerKind {
    /// 0/1 presence per vocabulary token.
    SetOfWords,
    /// Occurrence count per vocabulary token.
    BagOfWords,
}

impl FromStr for VectorizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "set" | "set-of-words" | "set_of_words" => Ok(VectorizerKind::SetOfWords),
            "bag" | "bag-of-words" | "bag_of_words" => Ok(VectorizerKind::BagOfWords),
            _ => Err(format!(
                "Unknown vectorizer: {}. Valid options are: set, bag",
                s
            )),
        }
    }
}

/// Load a `ModelConfig` from a JSON file. Missing sections fall back to defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> anyhow::Result<ModelConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ModelConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectorizer_parses_aliases() {
        assert_eq!("bag".parse::<VectorizerKind>().unwrap(), VectorizerKind::BagOfWords);
        assert_eq!("Set-Of-Words".parse::<VectorizerKind>().unwrap(), VectorizerKind::SetOfWords);
        assert!("tfidf".parse::<VectorizerKind>().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ModelConfig = serde_json::from_str(r#"{"knn": {"k": 5}}"#).unwrap();
        assert_eq!(config.knn.k, 5);
        assert!((config.knn.hold_out_ratio - 0.10).abs() < 1e-12);
        assert_eq!(config.bayes.vectorizer, VectorizerKind::BagOfWords);
    }
}
