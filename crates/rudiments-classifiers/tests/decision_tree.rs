//! Integration tests for ID3 tree growth, entropy and JSON persistence.

use rudiments_classifiers::data_handling::Example;
use rudiments_classifiers::io::{grab_tree, store_tree};
use rudiments_classifiers::models::decision_tree::{
    build_tree, feature_usage, information_gain, shannon_entropy, DecisionTree,
};
use tempfile::tempdir;

const LENSES: &str = "\
young\tmyope\tno\treduced\tno lenses
young\tmyope\tno\tnormal\tsoft
young\tmyope\tyes\treduced\tno lenses
young\tmyope\tyes\tnormal\thard
young\thyper\tno\treduced\tno lenses
young\thyper\tno\tnormal\tsoft
young\thyper\tyes\treduced\tno lenses
young\thyper\tyes\tnormal\thard
pre\tmyope\tno\treduced\tno lenses
pre\tmyope\tno\tnormal\tsoft
pre\tmyope\tyes\treduced\tno lenses
pre\tmyope\tyes\tnormal\thard
pre\thyper\tno\treduced\tno lenses
pre\thyper\tno\tnormal\tsoft
pre\thyper\tyes\treduced\tno lenses
pre\thyper\tyes\tnormal\tno lenses
presbyopic\tmyope\tno\treduced\tno lenses
presbyopic\tmyope\tno\tnormal\tno lenses
presbyopic\tmyope\tyes\treduced\tno lenses
presbyopic\tmyope\tyes\tnormal\thard
presbyopic\thyper\tno\treduced\tno lenses
presbyopic\thyper\tno\tnormal\tsoft
presbyopic\thyper\tyes\treduced\tno lenses
presbyopic\thyper\tyes\tnormal\tno lenses
";

fn lenses() -> (Vec<Example<String, String>>, Vec<String>) {
    let rows = LENSES
        .lines()
        .map(|line| {
            let row: Vec<String> = line.split('\t').map(str::to_string).collect();
            Example::from_labeled_row(row).expect("non-empty row")
        })
        .collect();
    let names = ["age", "prescript", "astigmatic", "tearRate"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    (rows, names)
}

// ---------------------------------------------------------------------------
// Entropy and gain
// ---------------------------------------------------------------------------

#[test]
fn entropy_extremes() {
    assert_eq!(shannon_entropy(["a", "a", "a"].iter()), 0.0);
    assert!((shannon_entropy(["a", "b"].iter()) - 1.0).abs() < 1e-12);
    assert!((shannon_entropy(["a", "b", "c", "d"].iter()) - 2.0).abs() < 1e-12);
}

#[test]
fn information_gain_is_never_negative() {
    let (rows, names) = lenses();
    for axis in 0..names.len() {
        assert!(information_gain(&rows, axis) >= 0.0);
    }
}

// ---------------------------------------------------------------------------
// Tree growth and persistence
// ---------------------------------------------------------------------------

#[test]
fn lenses_tree_splits_on_tear_rate_first() {
    let (rows, names) = lenses();
    let tree = build_tree(&rows, &names).unwrap();

    match &tree {
        DecisionTree::Internal {
            feature_name,
            branches,
            ..
        } => {
            assert_eq!(feature_name, "tearRate");
            let reduced = branches
                .iter()
                .find(|b| b.value == "reduced")
                .expect("reduced branch");
            assert_eq!(
                reduced.child,
                DecisionTree::Leaf {
                    label: "no lenses".to_string()
                }
            );
        }
        DecisionTree::Leaf { .. } => panic!("expected a split at the root"),
    }
    assert_eq!(feature_usage(&tree).get("tearRate"), Some(&1));
}

#[test]
fn tree_fits_consistent_training_data() {
    let (rows, names) = lenses();
    let tree = build_tree(&rows, &names).unwrap();
    for row in &rows {
        assert_eq!(tree.classify(&row.features).unwrap(), &row.label);
    }
}

#[test]
fn store_and_grab_round_trip() {
    let (rows, names) = lenses();
    let tree = build_tree(&rows, &names).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("lenses_tree.json");
    store_tree(&tree, &path).unwrap();
    let restored: DecisionTree<String, String> = grab_tree(&path).unwrap();

    assert_eq!(restored, tree);
    let sample: Vec<String> = ["young", "hyper", "yes", "normal"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(restored.classify(&sample).unwrap(), "hard");
}

#[test]
fn grab_missing_file_fails() {
    let dir = tempdir().unwrap();
    let res: anyhow::Result<DecisionTree<String, String>> = grab_tree(dir.path().join("absent.json"));
    assert!(res.is_err());
}
