use std::path::Path;

use crate::data::csv::{read_labels, read_matrix};
use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;

/// Feature rows and their class labels, row-aligned.
///
/// Labels are stored as floats (as they come out of the numeric table) and
/// converted to class indices on access.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Matrix,
    labels: Vec<f64>,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vec<f64>) -> Result<Dataset> {
        if features.rows == 0 {
            return Err(NetError::Dataset("dataset has no rows".into()));
        }
        if features.rows != labels.len() {
            return Err(NetError::Dataset(format!(
                "{} feature rows but {} labels",
                features.rows,
                labels.len()
            )));
        }
        Ok(Dataset { features, labels })
    }

    /// Builds a dataset from per-sample feature vectors and class indices.
    pub fn from_samples(features: Vec<Vec<f64>>, labels: &[usize]) -> Result<Dataset> {
        let width = features.first().map_or(0, Vec::len);
        if let Some(row) = features.iter().position(|r| r.len() != width) {
            return Err(NetError::Dataset(format!(
                "row {} has {} features, expected {}",
                row + 1,
                features[row].len(),
                width
            )));
        }
        Dataset::new(
            Matrix::from_data(features),
            labels.iter().map(|&l| l as f64).collect(),
        )
    }

    /// Loads features and labels from two comma-separated files.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(features_path: P, labels_path: Q) -> Result<Dataset> {
        let features = read_matrix(features_path)?;
        let labels = read_labels(labels_path)?;
        Dataset::new(features, labels)
    }

    pub fn len(&self) -> usize {
        self.features.rows
    }

    pub fn is_empty(&self) -> bool {
        self.features.rows == 0
    }

    /// Number of features per row.
    pub fn dim(&self) -> usize {
        self.features.cols
    }

    pub fn features(&self) -> &Matrix {
        &self.features
    }

    /// Class index of row `i` for a `classes`-way problem.
    ///
    /// A non-finite or fractional label is a `Dataset` error; a whole number
    /// outside `[0, classes)` is `InvalidLabel`.
    pub fn label(&self, i: usize, classes: usize) -> Result<usize> {
        let raw = self.labels[i];
        if !raw.is_finite() || raw.fract() != 0.0 {
            return Err(NetError::Dataset(format!(
                "row {}: label {} is not a whole number",
                i + 1,
                raw
            )));
        }
        if raw < 0.0 || raw >= classes as f64 {
            return Err(NetError::InvalidLabel { label: raw, classes });
        }
        Ok(raw as usize)
    }

    /// Row `i` as a `dim × 1` column together with its class index.
    pub fn sample(&self, i: usize, classes: usize) -> Result<(Matrix, usize)> {
        Ok((self.features.row_as_column(i), self.label(i, classes)?))
    }
}
