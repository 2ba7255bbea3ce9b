//! `rudiments tree` subcommands.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;

use rudiments_classifiers::io::{grab_tree, read_categorical_tsv, store_tree};
use rudiments_classifiers::models::decision_tree::{build_tree, DecisionTree};

use crate::util::{load_model_config, parse_feature_names, validate_file};

/// Parameters of `tree build`.
#[derive(Debug, Clone)]
pub struct TreeBuildParams {
    pub data: PathBuf,
    pub output_file: PathBuf,
    /// Empty when the table's first row names the columns.
    pub feature_names: Vec<String>,
}

impl TreeBuildParams {
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let data = matches
            .get_one::<PathBuf>("data")
            .context("Missing data file")?
            .clone();
        validate_file(&data)?;
        let output_file = matches
            .get_one::<PathBuf>("output_file")
            .context("Missing output file")?
            .clone();

        let feature_names = match matches.get_one::<String>("features") {
            Some(list) => parse_feature_names(list),
            None => load_model_config(matches.get_one::<PathBuf>("config"))?.tree.feature_names,
        };

        Ok(TreeBuildParams {
            data,
            output_file,
            feature_names,
        })
    }

    pub fn has_header(&self) -> bool {
        self.feature_names.is_empty()
    }
}

pub fn run_build(params: &TreeBuildParams) -> Result<DecisionTree<String, String>> {
    let table = read_categorical_tsv(&params.data, params.has_header(), &params.feature_names)?;
    let tree = build_tree(&table.examples, &table.feature_names)
        .with_context(|| format!("Failed to grow a tree from {}", params.data.display()))?;
    log::info!(
        "[Rudiments::Tree] Grew a tree with {} leaves and depth {} from {} rows",
        tree.leaf_count(),
        tree.depth(),
        table.examples.len()
    );
    store_tree(&tree, &params.output_file)?;
    Ok(tree)
}

/// Label of `values` according to the tree stored at `tree_path`.
pub fn run_classify(tree_path: &Path, values: &[String]) -> Result<String> {
    let tree: DecisionTree<String, String> = grab_tree(tree_path)?;
    let label = tree
        .classify(values)
        .with_context(|| format!("Cannot classify {:?}", values))?;
    Ok(label.clone())
}
