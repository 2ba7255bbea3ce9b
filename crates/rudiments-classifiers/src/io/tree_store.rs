//! Decision tree persistence as JSON files.
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::decision_tree::DecisionTree;

/// Write `tree` to `path`, replacing any existing file.
pub fn store_tree<V, L, P>(tree: &DecisionTree<V, L>, path: P) -> Result<()>
where
    V: Serialize + DeserializeOwned,
    L: Serialize + DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::create(&path)
        .with_context(|| format!("Failed to create tree file: {}", path.as_ref().display()))?;
    let mut writer = BufWriter::new(file);
    tree.to_writer(&mut writer)
        .with_context(|| format!("Failed to serialize tree to {}", path.as_ref().display()))?;
    writer.flush()?;
    log::info!("Stored decision tree in {}", path.as_ref().display());
    Ok(())
}

/// Read a tree written by [`store_tree`].
pub fn grab_tree<V, L, P>(path: P) -> Result<DecisionTree<V, L>>
where
    V: Serialize + DeserializeOwned,
    L: Serialize + DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(&path)
        .with_context(|| format!("Failed to open tree file: {}", path.as_ref().display()))?;
    let tree = DecisionTree::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse tree file: {}", path.as_ref().display()))?;
    Ok(tree)
}
