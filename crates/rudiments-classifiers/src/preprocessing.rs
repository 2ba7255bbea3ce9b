//! Feature rescaling shared by the distance-based learner.
//!
//! `MinMaxScaler` maps every column independently onto [0, 1] with
//! `(value - min) / (max - min)` and keeps the per-column range and minimum
//! so that later queries are rescaled exactly like the training data.

use crate::error::{LearnError, Result};
use crate::math::Array2;

/// Per-column min-max scaler.
#[derive(Clone, Debug, PartialEq)]
pub struct MinMaxScaler {
    pub ranges: Vec<f64>,
    pub mins: Vec<f64>,
}

impl MinMaxScaler {
    /// Fit the scaler on a non-empty matrix.
    ///
    /// Fails with [`LearnError::ZeroRange`] when a column holds a single
    /// distinct value.
    pub fn fit(x: &Array2<f64>) -> Result<Self> {
        let (mins, maxs) = x
            .column_bounds()
            .ok_or_else(|| LearnError::invalid_argument("cannot fit a scaler on an empty matrix"))?;

        let mut ranges = Vec::with_capacity(mins.len());
        for (column, (lo, hi)) in mins.iter().zip(&maxs).enumerate() {
            let range = hi - lo;
            if range == 0.0 {
                return Err(LearnError::ZeroRange { column });
            }
            ranges.push(range);
        }

        Ok(MinMaxScaler { ranges, mins })
    }

    pub fn n_features(&self) -> usize {
        self.mins.len()
    }

    /// Rescale all rows with the fitted range and minimum.
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        self.check_width(x.ncols())?;
        let mut out = Vec::with_capacity(x.nrows() * x.ncols());
        for row in x.rows() {
            out.extend(self.scale_row(row));
        }
        Array2::from_shape_vec(x.shape(), out)
    }

    /// Rescale one query vector the way the training rows were rescaled.
    pub fn transform_query(&self, query: &[f64]) -> Result<Vec<f64>> {
        self.check_width(query.len())?;
        Ok(self.scale_row(query).collect())
    }

    /// `original = normalized * range + min`
    pub fn inverse_transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        self.check_width(x.ncols())?;
        let mut out = Vec::with_capacity(x.nrows() * x.ncols());
        for row in x.rows() {
            for (c, &v) in row.iter().enumerate() {
                out.push(v * self.ranges[c] + self.mins[c]);
            }
        }
        Array2::from_shape_vec(x.shape(), out)
    }

    fn scale_row<'a>(&'a self, row: &'a [f64]) -> impl Iterator<Item = f64> + 'a {
        row.iter()
            .enumerate()
            .map(move |(c, &v)| (v - self.mins[c]) / self.ranges[c])
    }

    fn check_width(&self, width: usize) -> Result<()> {
        if width != self.n_features() {
            return Err(LearnError::invalid_argument(format!(
                "expected {} features, got {}",
                self.n_features(),
                width
            )));
        }
        Ok(())
    }
}

/// Fit a scaler on `x` and return the normalized matrix along with it.
pub fn fit_transform(x: &Array2<f64>) -> Result<(Array2<f64>, MinMaxScaler)> {
    let scaler = MinMaxScaler::fit(x)?;
    let normalized = scaler.transform(x)?;
    Ok((normalized, scaler))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_range_column_is_rejected() {
        let x = Array2::from_rows(vec![vec![1.0, 5.0], vec![2.0, 5.0]]).unwrap();
        match MinMaxScaler::fit(&x) {
            Err(LearnError::ZeroRange { column }) => assert_eq!(column, 1),
            other => panic!("expected ZeroRange, got {:?}", other),
        }
    }

    #[test]
    fn query_uses_training_bounds() {
        let x = Array2::from_rows(vec![vec![0.0, 10.0], vec![4.0, 20.0]]).unwrap();
        let scaler = MinMaxScaler::fit(&x).unwrap();
        let q = scaler.transform_query(&[2.0, 25.0]).unwrap();
        assert!((q[0] - 0.5).abs() < 1e-12);
        assert!((q[1] - 1.5).abs() < 1e-12);
        assert!(scaler.transform_query(&[1.0]).is_err());
    }
}
