//! Handwritten digit bitmaps: 32 lines of 32 `0`/`1` characters per file,
//! named `<label>_<index>.txt`.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use rayon::prelude::*;

use crate::data_handling::Dataset;
use crate::math::Array2;

/// Width and height of a digit bitmap.
pub const DIGIT_SIDE: usize = 32;

/// Flatten a bitmap file into `DIGIT_SIDE * DIGIT_SIDE` values, row by row.
///
/// Only the first `DIGIT_SIDE` characters of the first `DIGIT_SIDE` lines
/// are read.
pub fn img_to_vector<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bitmap: {}", path.display()))?;

    let mut vector = Vec::with_capacity(DIGIT_SIDE * DIGIT_SIDE);
    let mut lines = content.lines();
    for row in 0..DIGIT_SIDE {
        let line = lines
            .next()
            .ok_or_else(|| anyhow!("{}: expected {} lines, found {}", path.display(), DIGIT_SIDE, row))?;
        let mut chars = line.chars();
        for col in 0..DIGIT_SIDE {
            let c = chars.next().ok_or_else(|| {
                anyhow!("{}: line {} is shorter than {} characters", path.display(), row + 1, DIGIT_SIDE)
            })?;
            let digit = c.to_digit(10).ok_or_else(|| {
                anyhow!("{}: invalid pixel '{}' at line {}, column {}", path.display(), c, row + 1, col + 1)
            })?;
            vector.push(digit as f64);
        }
    }
    Ok(vector)
}

/// Class label encoded before the first `_` of the file stem.
pub fn digit_label(path: &Path) -> Result<u8> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("Invalid file name: {}", path.display()))?;
    let label = stem.split('_').next().unwrap_or(stem);
    label
        .parse::<u8>()
        .with_context(|| format!("No digit label in file name: {}", path.display()))
}

/// Load every `*.txt` bitmap of `dir`, in file-name order.
pub fn load_digit_dir<P: AsRef<Path>>(dir: P) -> Result<Dataset<u8>> {
    let dir = dir.as_ref();
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to list directory: {}", dir.display()))?;
    files.retain(|p| p.is_file() && p.extension().map_or(false, |ext| ext == "txt"));
    files.sort();

    if files.is_empty() {
        return Err(anyhow!("No .txt bitmaps in {}", dir.display()));
    }

    let samples = files
        .par_iter()
        .map(|path| -> Result<(Vec<f64>, u8)> { Ok((img_to_vector(path)?, digit_label(path)?)) })
        .collect::<Result<Vec<_>>>()?;

    let (rows, labels): (Vec<Vec<f64>>, Vec<u8>) = samples.into_iter().unzip();
    let x = Array2::from_rows(rows).context("Failed to build bitmap matrix")?;
    let dataset = Dataset::new(x, labels)?;
    log::info!("Loaded {} digit bitmaps from {}", dataset.n_samples(), dir.display());
    Ok(dataset)
}
