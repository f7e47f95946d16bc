use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Dense row-major matrix. Column vectors are `n × 1` matrices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Builds a matrix from nested rows. All rows must share the first row's width.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map_or(0, Vec::len);
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Matrix rows must all have the same length"
        );
        Matrix {
            rows: data.len(),
            cols,
            data,
        }
    }

    /// Column vector (`values.len() × 1`).
    pub fn column(values: &[f64]) -> Matrix {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.iter().map(|&v| vec![v]).collect(),
        }
    }

    /// Row `i` copied out as a column vector.
    pub fn row_as_column(&self, i: usize) -> Matrix {
        Matrix::column(&self.data[i])
    }

    /// Flattens a column vector into a plain `Vec`.
    pub fn to_column_vec(&self) -> Vec<f64> {
        debug_assert_eq!(self.cols, 1);
        self.data.iter().map(|row| row[0]).collect()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, other: &Matrix) -> Matrix {
        assert_eq!(self.shape(), other.shape(), "Matrices are of incorrect sizes");
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(row_a, row_b)| row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect())
            .collect();
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().flatten().sum()
    }

    pub fn max(&self) -> f64 {
        self.data.iter().flatten().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// In-place `self -= factor * other`.
    pub fn sub_assign_scaled(&mut self, other: &Matrix, factor: f64) {
        assert_eq!(self.shape(), other.shape(), "Matrices are of incorrect sizes");
        for (row, other_row) in self.data.iter_mut().zip(other.data.iter()) {
            for (x, g) in row.iter_mut().zip(other_row.iter()) {
                *x -= factor * g;
            }
        }
    }

    /// Index of the largest entry of a column vector; ties go to the lowest index.
    pub fn argmax_column(&self) -> usize {
        argmax(&self.to_column_vec())
    }
}

/// Index of the maximum value; the first occurrence wins a tie. Returns 0 for
/// an empty slice.
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        res
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}
