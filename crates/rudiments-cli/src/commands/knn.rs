//! `rudiments knn` subcommands.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;

use rudiments_classifiers::config::KnnConfig;
use rudiments_classifiers::evaluation::{knn_hold_out, knn_train_test};
use rudiments_classifiers::io::{load_digit_dir, read_tab_delimited};
use rudiments_classifiers::stats::ErrorReport;

use crate::util::{load_model_config, validate_dir, validate_file};

/// Parameters of `knn holdout`.
#[derive(Debug, Clone)]
pub struct KnnHoldOutParams {
    pub data: PathBuf,
    pub knn: KnnConfig,
}

impl KnnHoldOutParams {
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let data = matches
            .get_one::<PathBuf>("data")
            .context("Missing data file")?
            .clone();
        validate_file(&data)?;

        let mut knn = load_model_config(matches.get_one::<PathBuf>("config"))?.knn;
        if let Some(k) = matches.get_one::<usize>("k") {
            knn.k = *k;
        }
        if let Some(ratio) = matches.get_one::<f64>("ratio") {
            knn.hold_out_ratio = *ratio;
        }
        if matches.get_flag("no_normalize") {
            knn.normalize = false;
        }

        Ok(KnnHoldOutParams { data, knn })
    }
}

pub fn run_hold_out(params: &KnnHoldOutParams) -> Result<ErrorReport> {
    let dataset = read_tab_delimited(&params.data)?;
    let report = knn_hold_out(&dataset, &params.knn)
        .with_context(|| format!("k-NN hold-out on {} failed", params.data.display()))?;
    Ok(report)
}

/// Parameters of `knn digits`.
#[derive(Debug, Clone)]
pub struct DigitsParams {
    pub train_dir: PathBuf,
    pub test_dir: PathBuf,
    pub knn: KnnConfig,
}

impl DigitsParams {
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let train_dir = matches
            .get_one::<PathBuf>("train_dir")
            .context("Missing training directory")?
            .clone();
        let test_dir = matches
            .get_one::<PathBuf>("test_dir")
            .context("Missing test directory")?
            .clone();
        validate_dir(&train_dir)?;
        validate_dir(&test_dir)?;

        let mut knn = load_model_config(matches.get_one::<PathBuf>("config"))?.knn;
        if let Some(k) = matches.get_one::<usize>("k") {
            knn.k = *k;
        }
        // border pixels are constant across bitmaps and cannot be min-max scaled
        knn.normalize = false;

        Ok(DigitsParams {
            train_dir,
            test_dir,
            knn,
        })
    }
}

pub fn run_digits(params: &DigitsParams) -> Result<ErrorReport> {
    let train = load_digit_dir(&params.train_dir)?;
    let test = load_digit_dir(&params.test_dir)?;
    let report = knn_train_test(train, &test, &params.knn)?;
    Ok(report)
}
