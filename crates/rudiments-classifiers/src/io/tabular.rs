//! Tab-separated tables without a header row.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::data_handling::{Dataset, Example};
use crate::math::Array2;

/// Categorical rows with the label in the last column.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalTable {
    /// Names of the feature columns, label column excluded.
    pub feature_names: Vec<String>,
    pub examples: Vec<Example<String, String>>,
}

fn tab_reader(has_headers: bool) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(has_headers)
        .trim(Trim::All)
        .comment(Some(b'#'));
    builder
}

/// Read numeric feature columns followed by an integer class label.
///
/// Every row must have the same number of columns; blank lines are skipped.
pub fn read_tab_delimited<P: AsRef<Path>>(path: P) -> Result<Dataset<i32>> {
    let mut reader = tab_reader(false)
        .from_path(&path)
        .with_context(|| format!("Failed to open table: {}", path.as_ref().display()))?;

    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        let (features, label) = split_numeric_record(&record, row_idx)?;
        rows.push(features);
        labels.push(label);
    }

    let x = Array2::from_rows(rows).context("Failed to build feature matrix")?;
    let dataset = Dataset::new(x, labels)?;
    log::info!(
        "Loaded {} samples with {} features from {}",
        dataset.n_samples(),
        dataset.n_features(),
        path.as_ref().display()
    );
    Ok(dataset)
}

fn split_numeric_record(record: &StringRecord, row_idx: usize) -> Result<(Vec<f64>, i32)> {
    if record.len() < 2 {
        return Err(anyhow!(
            "Row {} needs at least one feature and a label, found {} column(s)",
            row_idx + 1,
            record.len()
        ));
    }
    let last = record.len() - 1;

    let features = record
        .iter()
        .take(last)
        .enumerate()
        .map(|(col, value)| {
            value.parse::<f64>().with_context(|| {
                format!("Invalid number '{}' at row {}, column {}", value, row_idx + 1, col + 1)
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    let raw = record.get(last).unwrap_or_default();
    let label = raw
        .parse::<i32>()
        .with_context(|| format!("Invalid label '{}' at row {}", raw, row_idx + 1))?;

    Ok((features, label))
}

/// Read categorical rows whose last column is the class label.
///
/// With `has_header`, the first row names the columns; otherwise
/// `feature_names` must supply one name per feature column.
pub fn read_categorical_tsv<P: AsRef<Path>>(
    path: P,
    has_header: bool,
    feature_names: &[String],
) -> Result<CategoricalTable> {
    let mut reader = tab_reader(has_header)
        .from_path(&path)
        .with_context(|| format!("Failed to open table: {}", path.as_ref().display()))?;

    let feature_names: Vec<String> = if has_header {
        let headers = reader.headers().context("Failed to read header row")?;
        let mut names: Vec<String> = headers.iter().map(str::to_string).collect();
        // the last header names the label column
        names.pop();
        names
    } else {
        feature_names.to_vec()
    };

    let mut examples = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        let example = Example::from_labeled_row(row)
            .ok_or_else(|| anyhow!("Row {} is empty", row_idx + 1))?;
        if example.features.len() != feature_names.len() {
            return Err(anyhow!(
                "Row {} has {} features but {} feature names are known",
                row_idx + 1,
                example.features.len(),
                feature_names.len()
            ));
        }
        examples.push(example);
    }

    if examples.is_empty() {
        return Err(anyhow!("No rows in {}", path.as_ref().display()));
    }

    Ok(CategoricalTable {
        feature_names,
        examples,
    })
}
