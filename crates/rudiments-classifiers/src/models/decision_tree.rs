//! ID3 decision tree over categorical features.
//!
//! The tree is grown top-down: at every node the feature with the largest
//! information gain is chosen, the rows are partitioned by that feature's
//! observed values, and the used column is dropped from every partition.
//! Each internal node records the index and name of the feature it tests,
//! so classification only needs the sample itself.
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;
use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::data_handling::Example;
use crate::error::{LearnError, Result};
use crate::models::classifier_trait::Classifier;
use crate::stats::majority;

/// A trained tree: either a leaf carrying a label, or a test on one feature
/// with one branch per value observed at that point during training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionTree<V, L> {
    Leaf {
        label: L,
    },
    Internal {
        /// Column of the feature in the original sample layout.
        feature: usize,
        feature_name: String,
        /// Sorted by `value`.
        branches: Vec<Branch<V, L>>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch<V, L> {
    pub value: V,
    pub child: DecisionTree<V, L>,
}

/// Shannon entropy `-sum(p_i * log2(p_i))` of a label sequence.
pub fn shannon_entropy<'a, L, I>(labels: I) -> f64
where
    L: Eq + Hash + 'a,
    I: IntoIterator<Item = &'a L>,
{
    let mut counts: Vec<usize> = Vec::new();
    let mut slots: HashMap<&L, usize> = HashMap::new();
    let mut total = 0usize;
    for label in labels {
        let slot = *slots.entry(label).or_insert_with(|| {
            counts.push(0);
            counts.len() - 1
        });
        counts[slot] += 1;
        total += 1;
    }

    // summed in first-appearance order: identical partitions give bit-identical sums
    let total = total as f64;
    counts
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Rows whose value at `axis` equals `value`, with that column removed.
/// Surviving rows keep their order.
pub fn split_data_set<V, L>(examples: &[Example<V, L>], axis: usize, value: &V) -> Vec<Example<V, L>>
where
    V: Clone + PartialEq,
    L: Clone,
{
    examples
        .iter()
        .filter(|ex| ex.features[axis] == *value)
        .map(|ex| {
            let mut features = Vec::with_capacity(ex.features.len().saturating_sub(1));
            features.extend_from_slice(&ex.features[..axis]);
            features.extend_from_slice(&ex.features[axis + 1..]);
            Example::new(features, ex.label.clone())
        })
        .collect()
}

/// Entropy of the whole set minus the partition-size-weighted entropy of the
/// partitions induced by the feature at `axis`. Never negative.
pub fn information_gain<V, L>(examples: &[Example<V, L>], axis: usize) -> f64
where
    V: Eq + Hash,
    L: Eq + Hash,
{
    if examples.is_empty() {
        return 0.0;
    }

    let mut partitions: Vec<Vec<&L>> = Vec::new();
    let mut slots: HashMap<&V, usize> = HashMap::new();
    for ex in examples {
        let slot = *slots.entry(&ex.features[axis]).or_insert_with(|| {
            partitions.push(Vec::new());
            partitions.len() - 1
        });
        partitions[slot].push(&ex.label);
    }

    let n = examples.len() as f64;
    let weighted: f64 = partitions
        .iter()
        .map(|labels| labels.len() as f64 / n * shannon_entropy(labels.iter().copied()))
        .sum();

    // rounding can leave a tiny negative residue for a useless split
    (shannon_entropy(examples.iter().map(|ex| &ex.label)) - weighted).max(0.0)
}

/// Column with the strictly greatest information gain; ties keep the lower
/// index. When no split helps, the first column is returned. `None` when
/// there are no rows or no columns left.
pub fn choose_best_feature_to_split<V, L>(examples: &[Example<V, L>]) -> Option<usize>
where
    V: Eq + Hash,
    L: Eq + Hash,
{
    let n_features = examples.first()?.features.len();

    let mut best: Option<(usize, f64)> = None;
    for axis in 0..n_features {
        let gain = information_gain(examples, axis);
        match best {
            Some((_, best_gain)) if gain <= best_gain => {}
            _ => best = Some((axis, gain)),
        }
    }

    best.map(|(axis, _)| axis)
}

/// Most common label; ties go to the label seen first.
pub fn majority_count<L>(labels: &[L]) -> Option<L>
where
    L: Clone + Eq + Hash,
{
    majority(labels).cloned()
}

/// Grow a tree from categorical rows. `feature_names[i]` names column `i` of
/// every row and is copied into the internal nodes.
pub fn build_tree<V, L>(examples: &[Example<V, L>], feature_names: &[String]) -> Result<DecisionTree<V, L>>
where
    V: Clone + Eq + Hash + Ord,
    L: Clone + Eq + Hash,
{
    if examples.is_empty() {
        return Err(LearnError::invalid_argument("cannot grow a tree from an empty dataset"));
    }
    for (idx, ex) in examples.iter().enumerate() {
        if ex.features.len() != feature_names.len() {
            return Err(LearnError::invalid_argument(format!(
                "row {} has {} features but {} feature names were given",
                idx,
                ex.features.len(),
                feature_names.len()
            )));
        }
    }

    let available: Vec<usize> = (0..feature_names.len()).collect();
    let tree = grow(examples, &available, feature_names);
    log::debug!(
        "Grew decision tree with {} leaves and depth {}",
        tree.leaf_count(),
        tree.depth()
    );
    Ok(tree)
}

/// `available[c]` is the original index of positional column `c`.
fn grow<V, L>(examples: &[Example<V, L>], available: &[usize], names: &[String]) -> DecisionTree<V, L>
where
    V: Clone + Eq + Hash + Ord,
    L: Clone + Eq + Hash,
{
    let first = &examples[0].label;
    if examples.iter().all(|ex| ex.label == *first) {
        return DecisionTree::Leaf {
            label: first.clone(),
        };
    }

    let best = match choose_best_feature_to_split(examples) {
        Some(axis) => axis,
        None => {
            let labels: Vec<L> = examples.iter().map(|ex| ex.label.clone()).collect();
            // non-empty, so a majority always exists
            let label = majority_count(&labels).unwrap_or_else(|| first.clone());
            return DecisionTree::Leaf { label };
        }
    };

    let feature = available[best];
    let remaining: Vec<usize> = available
        .iter()
        .enumerate()
        .filter(|&(c, _)| c != best)
        .map(|(_, &f)| f)
        .collect();

    log::debug!(
        "Splitting {} rows on '{}' (gain {:.4})",
        examples.len(),
        names[feature],
        information_gain(examples, best)
    );

    let values: BTreeSet<&V> = examples.iter().map(|ex| &ex.features[best]).collect();
    let branches = values
        .into_iter()
        .map(|value| Branch {
            value: value.clone(),
            child: grow(&split_data_set(examples, best, value), &remaining, names),
        })
        .collect();

    DecisionTree::Internal {
        feature,
        feature_name: names[feature].clone(),
        branches,
    }
}

impl<V, L> DecisionTree<V, L> {
    pub fn leaf_count(&self) -> usize {
        match self {
            DecisionTree::Leaf { .. } => 1,
            DecisionTree::Internal { branches, .. } => {
                branches.iter().map(|b| b.child.leaf_count()).sum()
            }
        }
    }

    /// Number of tests on the longest root-to-leaf path; 0 for a single leaf.
    pub fn depth(&self) -> usize {
        match self {
            DecisionTree::Leaf { .. } => 0,
            DecisionTree::Internal { branches, .. } => {
                1 + branches.iter().map(|b| b.child.depth()).max().unwrap_or(0)
            }
        }
    }
}

impl<V, L> DecisionTree<V, L>
where
    V: Ord + fmt::Debug,
{
    /// Walk the tree with a sample laid out like the training rows.
    ///
    /// Fails with [`LearnError::UnseenFeatureValue`] when the sample's value
    /// at some node had no training rows there.
    pub fn classify(&self, sample: &[V]) -> Result<&L> {
        self.walk(|feature, _| sample.get(feature), sample.len())
    }

    /// Like [`classify`](Self::classify) for a sample whose columns are named
    /// by `names`, in any order.
    pub fn classify_named<S: AsRef<str>>(&self, names: &[S], sample: &[V]) -> Result<&L> {
        if names.len() != sample.len() {
            return Err(LearnError::invalid_argument(format!(
                "{} names for a sample of {} values",
                names.len(),
                sample.len()
            )));
        }
        self.walk(
            |_, name| {
                names
                    .iter()
                    .position(|n| n.as_ref() == name)
                    .map(|idx| &sample[idx])
            },
            sample.len(),
        )
    }

    fn walk<'s, F>(&self, lookup: F, width: usize) -> Result<&L>
    where
        F: Fn(usize, &str) -> Option<&'s V>,
        V: 's,
    {
        let mut node = self;
        loop {
            match node {
                DecisionTree::Leaf { label } => return Ok(label),
                DecisionTree::Internal {
                    feature,
                    feature_name,
                    branches,
                } => {
                    let value = lookup(*feature, feature_name).ok_or_else(|| {
                        LearnError::invalid_argument(format!(
                            "sample of {} values has no feature '{}'",
                            width, feature_name
                        ))
                    })?;
                    node = match branches.binary_search_by(|b| b.value.cmp(value)) {
                        Ok(idx) => &branches[idx].child,
                        Err(_) => {
                            return Err(LearnError::UnseenFeatureValue {
                                feature: feature_name.clone(),
                                value: format!("{:?}", value),
                            })
                        }
                    };
                }
            }
        }
    }
}

impl<V, L> DecisionTree<V, L>
where
    V: Serialize + DeserializeOwned,
    L: Serialize + DeserializeOwned,
{
    /// Write the tree as JSON to any byte sink.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl<V, L> Classifier for DecisionTree<V, L>
where
    V: Ord + fmt::Debug,
    L: Clone,
{
    type Sample = [V];
    type Label = L;

    fn classify(&self, sample: &[V]) -> Result<L> {
        DecisionTree::classify(self, sample).cloned()
    }

    fn name(&self) -> &str {
        "decision-tree"
    }
}

impl<V: fmt::Display, L: fmt::Display> DecisionTree<V, L> {
    fn render(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        match self {
            DecisionTree::Leaf { label } => writeln!(f, "{:indent$}-> {}", "", label, indent = indent),
            DecisionTree::Internal {
                feature_name,
                branches,
                ..
            } => {
                for branch in branches {
                    writeln!(
                        f,
                        "{:indent$}{} = {}",
                        "",
                        feature_name,
                        branch.value,
                        indent = indent
                    )?;
                    branch.child.render(f, indent + 2)?;
                }
                Ok(())
            }
        }
    }
}

impl<V: fmt::Display, L: fmt::Display> fmt::Display for DecisionTree<V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

/// Number of internal nodes testing each feature.
pub fn feature_usage<V, L>(tree: &DecisionTree<V, L>) -> BTreeMap<String, usize> {
    let mut usage = BTreeMap::new();
    let mut stack = vec![tree];
    while let Some(node) = stack.pop() {
        if let DecisionTree::Internal {
            feature_name,
            branches,
            ..
        } = node
        {
            *usage.entry(feature_name.clone()).or_insert(0) += 1;
            stack.extend(branches.iter().map(|b| &b.child));
        }
    }
    usage
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fish() -> (Vec<Example<u8, &'static str>>, Vec<String>) {
        let rows = vec![
            Example::new(vec![1, 1], "yes"),
            Example::new(vec![1, 1], "yes"),
            Example::new(vec![1, 0], "no"),
            Example::new(vec![0, 1], "no"),
            Example::new(vec![0, 1], "no"),
        ];
        (rows, vec!["no surfacing".to_string(), "flippers".to_string()])
    }

    #[test]
    fn entropy_of_fish_labels() {
        let (rows, _) = fish();
        let h = shannon_entropy(rows.iter().map(|ex| &ex.label));
        assert!((h - 0.970_950_594_454_668_5).abs() < 1e-12);
    }

    #[test]
    fn split_removes_column_and_keeps_order() {
        let (rows, _) = fish();
        let subset = split_data_set(&rows, 0, &1);
        assert_eq!(
            subset,
            vec![
                Example::new(vec![1], "yes"),
                Example::new(vec![1], "yes"),
                Example::new(vec![0], "no"),
            ]
        );
        assert!(split_data_set(&rows, 0, &7).is_empty());
    }

    #[test]
    fn best_feature_is_no_surfacing() {
        let (rows, _) = fish();
        assert_eq!(choose_best_feature_to_split(&rows), Some(0));
    }

    #[test]
    fn useless_features_default_to_first_column() {
        let rows = vec![Example::new(vec![0, 0], "a"), Example::new(vec![0, 0], "b")];
        assert_eq!(choose_best_feature_to_split(&rows), Some(0));
        let bare: Vec<Example<u8, &str>> = vec![Example::new(vec![], "a")];
        assert_eq!(choose_best_feature_to_split(&bare), None);
    }

    #[test]
    fn relabeled_copy_of_a_column_ties_to_the_lower_index() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let rows: Vec<Example<u8, u8>> = (0..30)
                .map(|_| {
                    let v: u8 = rng.gen_range(0..7);
                    Example::new(vec![v, (v * 3 + 1) % 7], rng.gen_range(0..4))
                })
                .collect();
            assert_eq!(information_gain(&rows, 0), information_gain(&rows, 1));
            for _ in 0..20 {
                assert_eq!(choose_best_feature_to_split(&rows), Some(0));
            }
        }
    }

    #[test]
    fn builds_the_fish_tree() {
        let (rows, names) = fish();
        let tree = build_tree(&rows, &names).unwrap();

        let expected = DecisionTree::Internal {
            feature: 0,
            feature_name: "no surfacing".to_string(),
            branches: vec![
                Branch {
                    value: 0,
                    child: DecisionTree::Leaf { label: "no" },
                },
                Branch {
                    value: 1,
                    child: DecisionTree::Internal {
                        feature: 1,
                        feature_name: "flippers".to_string(),
                        branches: vec![
                            Branch {
                                value: 0,
                                child: DecisionTree::Leaf { label: "no" },
                            },
                            Branch {
                                value: 1,
                                child: DecisionTree::Leaf { label: "yes" },
                            },
                        ],
                    },
                },
            ],
        };
        assert_eq!(tree, expected);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn classify_walks_by_stored_feature() {
        let (rows, names) = fish();
        let tree = build_tree(&rows, &names).unwrap();
        assert_eq!(*tree.classify(&[1, 0]).unwrap(), "no");
        assert_eq!(*tree.classify(&[1, 1]).unwrap(), "yes");
        assert_eq!(*tree.classify(&[0, 1]).unwrap(), "no");
        assert_eq!(*tree.classify_named(&["flippers", "no surfacing"], &[1, 1]).unwrap(), "yes");
    }

    #[test]
    fn unseen_value_is_a_lookup_error() {
        let (rows, names) = fish();
        let tree = build_tree(&rows, &names).unwrap();
        match tree.classify(&[2, 1]) {
            Err(LearnError::UnseenFeatureValue { feature, value }) => {
                assert_eq!(feature, "no surfacing");
                assert_eq!(value, "2");
            }
            other => panic!("expected UnseenFeatureValue, got {:?}", other),
        }
        assert!(tree.classify(&[1]).is_err());
    }

    #[test]
    fn exhausted_features_fall_back_to_majority() {
        let rows = vec![
            Example::new(vec!["x"], "b"),
            Example::new(vec!["x"], "a"),
            Example::new(vec!["x"], "a"),
        ];
        let tree = build_tree(&rows, &["f".to_string()]).unwrap();
        // one split on f, then no features remain for the mixed partition
        assert_eq!(*tree.classify(&["x"]).unwrap(), "a");
        assert_eq!(majority_count(&["b", "a", "a", "b"]), Some("b"));
    }

    #[test]
    fn build_rejects_bad_input() {
        let (rows, _) = fish();
        assert!(build_tree(&rows, &["only one".to_string()]).is_err());
        let empty: Vec<Example<u8, u8>> = vec![];
        assert!(build_tree(&empty, &[]).is_err());
    }

    #[test]
    fn display_and_usage() {
        let (rows, names) = fish();
        let tree = build_tree(&rows, &names).unwrap();
        let text = tree.to_string();
        assert!(text.contains("no surfacing = 0"));
        assert!(text.contains("    -> yes"));
        let usage = feature_usage(&tree);
        assert_eq!(usage.get("flippers"), Some(&1));
    }
}
