//! Argument handling and command runners of the CLI library.

use std::fs;

use clap::ArgMatches;
use rudiments_classifiers::config::VectorizerKind;
use rudiments_cli::cli::build_cli;
use rudiments_cli::commands::bayes::BayesHoldOutParams;
use rudiments_cli::commands::knn::{self, KnnHoldOutParams};
use rudiments_cli::commands::tree::{self, TreeBuildParams};
use tempfile::tempdir;

/// Matches of the innermost subcommand of `args`.
fn leaf_matches(args: &[&str]) -> ArgMatches {
    let mut matches = build_cli()
        .try_get_matches_from(args)
        .expect("arguments should parse");
    while let Some((_, sub)) = matches.subcommand() {
        matches = sub.clone();
    }
    matches
}

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["rudiments"]).is_err());
    assert!(build_cli().try_get_matches_from(["rudiments", "knn"]).is_err());
}

#[test]
fn knn_overrides_config_file() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data.txt");
    fs::write(&data, "1\t1\n").unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"knn": {"k": 7, "hold_out_ratio": 0.2}}"#).unwrap();

    let matches = leaf_matches(&[
        "rudiments",
        "knn",
        "holdout",
        data.to_str().unwrap(),
        "-k",
        "5",
        "--config",
        config.to_str().unwrap(),
    ]);
    let params = KnnHoldOutParams::from_arguments(&matches).unwrap();
    assert_eq!(params.knn.k, 5);
    assert!((params.knn.hold_out_ratio - 0.2).abs() < 1e-12);
    assert!(params.knn.normalize);
}

#[test]
fn missing_data_file_is_reported() {
    let matches = leaf_matches(&["rudiments", "knn", "holdout", "/no/such/file.txt"]);
    assert!(KnnHoldOutParams::from_arguments(&matches).is_err());
}

#[test]
fn bayes_arguments() {
    let dir = tempdir().unwrap();
    let path = dir.path().to_str().unwrap();
    let matches = leaf_matches(&[
        "rudiments",
        "bayes",
        "holdout",
        path,
        path,
        "--docs",
        "25",
        "--vectorizer",
        "set",
        "--iterations",
        "10",
        "--seed",
        "3",
    ]);
    let params = BayesHoldOutParams::from_arguments(&matches).unwrap();
    assert_eq!(params.docs, 25);
    assert_eq!(params.bayes.vectorizer, VectorizerKind::SetOfWords);
    assert_eq!(params.bayes.iterations, 10);
    assert_eq!(params.bayes.seed, Some(3));
    assert_eq!(params.bayes.test_size, 10);
    assert_eq!(params.top_words, None);
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[test]
fn tree_build_then_classify() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("fish.tsv");
    fs::write(&data, "1\t1\tyes\n1\t1\tyes\n1\t0\tno\n0\t1\tno\n0\t1\tno\n").unwrap();
    let output = dir.path().join("fish_tree.json");

    let matches = leaf_matches(&[
        "rudiments",
        "tree",
        "build",
        data.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "--features",
        "no surfacing,flippers",
    ]);
    let params = TreeBuildParams::from_arguments(&matches).unwrap();
    assert!(!params.has_header());
    let grown = tree::run_build(&params).unwrap();
    assert_eq!(grown.leaf_count(), 3);
    assert!(output.exists());

    let yes = tree::run_classify(&output, &["1".to_string(), "1".to_string()]).unwrap();
    let no = tree::run_classify(&output, &["0".to_string(), "1".to_string()]).unwrap();
    assert_eq!(yes, "yes");
    assert_eq!(no, "no");
    assert!(tree::run_classify(&output, &["5".to_string(), "1".to_string()]).is_err());
}

#[test]
fn knn_hold_out_end_to_end() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("groups.txt");
    let mut content = String::new();
    for i in 0..20 {
        if i % 2 == 0 {
            content.push_str(&format!("{}\t{}\t1\n", 1.0 + i as f64 * 0.01, 1.1));
        } else {
            content.push_str(&format!("{}\t{}\t2\n", 9.0 + i as f64 * 0.01, 0.1));
        }
    }
    fs::write(&data, content).unwrap();

    let matches = leaf_matches(&["rudiments", "knn", "holdout", data.to_str().unwrap()]);
    let params = KnnHoldOutParams::from_arguments(&matches).unwrap();
    let report = knn::run_hold_out(&params).unwrap();
    assert_eq!(report.total, 2);
    assert_eq!(report.errors, 0);
}
