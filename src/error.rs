use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("expected a two-dimensional array, found {ndim} dimension(s)")]
    NotTwoDimensional { ndim: usize },

    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// `value` is the element at `(row, col)`, `transposed` the one at `(col, row)`.
    #[error("matrix is not symmetric at ({row}, {col}): {value} vs {transposed}")]
    Asymmetric {
        row: usize,
        col: usize,
        value: f64,
        transposed: f64,
    },

    #[error("row {row} has {found} element(s), expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("buffer holds {found} element(s), expected {expected}")]
    Length { expected: usize, found: usize },
}

pub type Result<T, E = MatrixError> = std::result::Result<T, E>;
