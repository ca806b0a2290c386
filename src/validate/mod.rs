//! Shape and symmetry checks for candidate distance matrices.
//!
//! The predicates accept arrays of any rank and never panic. A rank other
//! than two, or unequal extents, simply makes the relevant check `false`.

use ndarray::{ArrayBase, Data, Dimension, Ix2};
use num_traits::AsPrimitive;
use tracing::{debug, trace};

use crate::error::{MatrixError, Result};
use crate::tolerance::Tolerance;
use crate::Float;

/// Returns true if the array has exactly two axes
pub fn is_two_dimensional<S: Data, D: Dimension>(a: &ArrayBase<S, D>) -> bool {
    a.ndim() == 2
}

/// Returns true if the array is two-dimensional with equal extents.
///
/// Arrays of any other rank are reported as not square.
pub fn is_square<S: Data, D: Dimension>(a: &ArrayBase<S, D>) -> bool {
    matches!(a.shape(), [rows, cols] if rows == cols)
}

/// [`is_symmetric_with`] using the default tolerances.
pub fn is_symmetric<S, D, T>(a: &ArrayBase<S, D>) -> bool
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Float,
{
    is_symmetric_with(a, Tolerance::default())
}

/// Returns true if the array is approximately equal to its transpose.
///
/// Each element `a[i, j]` is compared against the reference `a[j, i]`, so
/// for a relative tolerance both directions must hold. An array whose
/// transpose has a different shape is not symmetric. Arrays of rank zero
/// and one are their own transpose.
pub fn is_symmetric_with<S, D, T>(a: &ArrayBase<S, D>, tol: Tolerance) -> bool
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Float,
{
    let transposed = a.t();
    if a.shape() != transposed.shape() {
        return false;
    }

    a.iter()
        .zip(transposed.iter())
        .all(|(&value, &reference)| tol.is_close(value, reference))
}

/// Check if `distances` is usable as a distance matrix: two-dimensional,
/// square and symmetric under the default tolerances.
pub fn check_symmetric<S, D, T>(distances: &ArrayBase<S, D>) -> bool
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Float,
{
    check_symmetric_with(distances, Tolerance::default())
}

pub fn check_symmetric_with<S, D, T>(distances: &ArrayBase<S, D>, tol: Tolerance) -> bool
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Float,
{
    let valid = is_two_dimensional(distances)
        && is_square(distances)
        && is_symmetric_with(distances, tol);

    if !valid {
        debug!(shape = ?distances.shape(), "rejected candidate distance matrix");
    }

    valid
}

/// Like [`check_symmetric_with`], but reports the first check that failed.
///
/// For an asymmetric matrix the error names the first offending element in
/// row-major order.
pub fn validate<S, D, T>(distances: &ArrayBase<S, D>, tol: Tolerance) -> Result<()>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Float,
{
    let ndim = distances.ndim();
    let a = match distances.view().into_dimensionality::<Ix2>() {
        Ok(a) => a,
        Err(_) => {
            debug!(ndim, "distance matrix is not two-dimensional");
            return Err(MatrixError::NotTwoDimensional { ndim });
        }
    };

    let (rows, cols) = a.dim();
    if rows != cols {
        debug!(rows, cols, "distance matrix is not square");
        return Err(MatrixError::NotSquare { rows, cols });
    }

    if let Some((row, col)) = find_asymmetry(&a, tol) {
        debug!(row, col, "distance matrix is not symmetric");
        return Err(MatrixError::Asymmetric {
            row,
            col,
            value: a[(row, col)].as_(),
            transposed: a[(col, row)].as_(),
        });
    }

    trace!(n_elements = rows, "validated distance matrix");
    Ok(())
}

/// Returns the first index `(i, j)`, in row-major order, where `a[i, j]` is
/// not close to `a[j, i]` or where `(j, i)` lies outside the matrix.
pub fn find_asymmetry<S, T>(a: &ArrayBase<S, Ix2>, tol: Tolerance) -> Option<(usize, usize)>
where
    S: Data<Elem = T>,
    T: Float,
{
    a.indexed_iter()
        .find(|&((i, j), &value)| match a.get((j, i)) {
            Some(&reference) => !tol.is_close(value, reference),
            None => true,
        })
        .map(|(idx, _)| idx)
}
