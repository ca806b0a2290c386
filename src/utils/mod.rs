use ndarray::Array2;

use crate::error::{MatrixError, Result};

/// Stacks nested rows into a matrix, returning an error for ragged input
pub fn rows_to_array<T: Copy, R: AsRef<[T]>>(rows: &[R]) -> Result<Array2<T>> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, |row| row.as_ref().len());

    if let Some((i, row)) = rows
        .iter()
        .map(|row| row.as_ref())
        .enumerate()
        .find(|(_i, row)| row.len() != n_cols)
    {
        return Err(MatrixError::Ragged {
            row: i,
            expected: n_cols,
            found: row.len(),
        });
    }

    // Only overflows for zero-sized elements
    let expected = n_rows.checked_mul(n_cols).ok_or(MatrixError::Length {
        expected: usize::MAX,
        found: n_rows,
    })?;

    let mut data = Vec::with_capacity(expected);
    for row in rows {
        data.extend_from_slice(row.as_ref());
    }

    Array2::from_shape_vec((n_rows, n_cols), data).map_err(|_| MatrixError::Length {
        expected,
        found: expected,
    })
}
