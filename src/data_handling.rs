//! Label-matrix storage for multi-label training data.
//!
//! `LabelMatrix` tags a label matrix as dense or sparse and exposes the
//! densify operations the chain needs: stage models always consume dense
//! inputs, so the sparse arm materializes columns on access.
use ndarray::{Array1, Array2};
use sprs::CsMat;

/// A two-dimensional label matrix, `n_samples x n_labels`.
#[derive(Debug, Clone)]
pub enum LabelMatrix {
    Dense(Array2<f32>),
    Sparse(CsMat<f32>),
}

impl LabelMatrix {
    pub fn nrows(&self) -> usize {
        match self {
            LabelMatrix::Dense(y) => y.nrows(),
            LabelMatrix::Sparse(y) => y.rows(),
        }
    }

    pub fn ncols(&self) -> usize {
        match self {
            LabelMatrix::Dense(y) => y.ncols(),
            LabelMatrix::Sparse(y) => y.cols(),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    pub fn is_sparse(&self) -> bool {
        matches!(self, LabelMatrix::Sparse(_))
    }

    /// Densify a single label column into a 1-D array.
    pub fn column(&self, col: usize) -> Array1<f32> {
        assert!(
            col < self.ncols(),
            "label column {} out of bounds for {} columns",
            col,
            self.ncols()
        );
        match self {
            LabelMatrix::Dense(y) => y.column(col).to_owned(),
            LabelMatrix::Sparse(y) => {
                let mut out = Array1::zeros(y.rows());
                if y.is_csc() {
                    // Outer dimension is columns, so one outer view per label column.
                    if let Some(view) = y.outer_view(col) {
                        for (row, &value) in view.iter() {
                            out[row] = value;
                        }
                    }
                } else {
                    for (&value, (row, c)) in y.iter() {
                        if c == col {
                            out[row] = value;
                        }
                    }
                }
                out
            }
        }
    }

    /// Densify a block of label columns, ordered as given.
    ///
    /// The chain uses this to assemble the earlier-in-chain label block that
    /// augments the feature matrix, so `cols` is a visiting order rather than
    /// a sorted index set. An empty `cols` yields an `n_samples x 0` block.
    pub fn dense_block(&self, cols: &[usize]) -> Array2<f32> {
        let mut block = Array2::zeros((self.nrows(), cols.len()));
        for (j, &col) in cols.iter().enumerate() {
            block.column_mut(j).assign(&self.column(col));
        }
        block
    }

    /// Densify the whole matrix.
    pub fn to_dense(&self) -> Array2<f32> {
        match self {
            LabelMatrix::Dense(y) => y.clone(),
            LabelMatrix::Sparse(y) => {
                let mut out = Array2::zeros((y.rows(), y.cols()));
                for (&value, (row, col)) in y.iter() {
                    out[(row, col)] = value;
                }
                out
            }
        }
    }
}

impl From<Array2<f32>> for LabelMatrix {
    fn from(y: Array2<f32>) -> Self {
        LabelMatrix::Dense(y)
    }
}

impl From<CsMat<f32>> for LabelMatrix {
    /// Normalizes to CSC storage so each label column is an outer view.
    fn from(y: CsMat<f32>) -> Self {
        let y = if y.is_csc() { y } else { y.to_csc() };
        LabelMatrix::Sparse(y)
    }
}
