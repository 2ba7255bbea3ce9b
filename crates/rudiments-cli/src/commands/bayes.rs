//! `rudiments bayes` subcommands.
use std::fmt::Write;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;

use rudiments_classifiers::config::{BayesConfig, VectorizerKind};
use rudiments_classifiers::evaluation::{bayes_hold_out, BayesEvaluation};
use rudiments_classifiers::io::read_text_corpus;
use rudiments_classifiers::models::naive_bayes::TopWords;

use crate::util::{load_model_config, validate_dir};

/// Parameters of `bayes holdout`.
#[derive(Debug, Clone)]
pub struct BayesHoldOutParams {
    pub positive_dir: PathBuf,
    pub negative_dir: PathBuf,
    pub docs: usize,
    pub bayes: BayesConfig,
    /// Print this many indicative tokens per class after the run.
    pub top_words: Option<usize>,
}

impl BayesHoldOutParams {
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let positive_dir = matches
            .get_one::<PathBuf>("positive_dir")
            .context("Missing positive document folder")?
            .clone();
        let negative_dir = matches
            .get_one::<PathBuf>("negative_dir")
            .context("Missing negative document folder")?
            .clone();
        validate_dir(&positive_dir)?;
        validate_dir(&negative_dir)?;
        let docs = *matches
            .get_one::<usize>("docs")
            .context("Missing document count")?;

        let mut bayes = load_model_config(matches.get_one::<PathBuf>("config"))?.bayes;
        if let Some(kind) = matches.get_one::<String>("vectorizer") {
            bayes.vectorizer = VectorizerKind::from_str(kind).map_err(anyhow::Error::msg)?;
        }
        if let Some(test_size) = matches.get_one::<usize>("test_size") {
            bayes.test_size = *test_size;
        }
        if let Some(iterations) = matches.get_one::<usize>("iterations") {
            bayes.iterations = *iterations;
        }
        if let Some(prune_top) = matches.get_one::<usize>("prune_top") {
            bayes.prune_top = *prune_top;
        }
        if let Some(seed) = matches.get_one::<u64>("seed") {
            bayes.seed = Some(*seed);
        }

        Ok(BayesHoldOutParams {
            positive_dir,
            negative_dir,
            docs,
            bayes,
            top_words: matches.get_one::<usize>("top_words").copied(),
        })
    }
}

pub fn run_hold_out(params: &BayesHoldOutParams) -> Result<BayesEvaluation> {
    let corpus = read_text_corpus(&params.positive_dir, &params.negative_dir, params.docs)?;
    let evaluation = bayes_hold_out(&corpus, &params.bayes).context("Naive Bayes hold-out failed")?;
    Ok(evaluation)
}

/// Two blocks of at most `limit` tokens, class 1 first.
pub fn format_top_words(top: &TopWords, limit: usize) -> String {
    let mut out = String::new();
    for (title, words) in [("POSITIVE", &top.class1), ("NEGATIVE", &top.class0)] {
        let _ = writeln!(out, "{}:", title);
        for (word, log_prob) in words.iter().take(limit) {
            let _ = writeln!(out, "  {:<20} {:.4}", word, log_prob);
        }
    }
    out
}
