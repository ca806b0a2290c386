use ndarray::{Array2, ArrayView2};
use tracing::trace;

use super::Measurable;
use crate::error::{MatrixError, Result};
use crate::tolerance::Tolerance;
use crate::utils::rows_to_array;
use crate::validate::validate;
use crate::Float;

/// A square, symmetric matrix of pairwise distances.
///
/// Every constructor runs [`validate`], so holding a `DistanceMatrix` means
/// the checks passed under the tolerance it was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<T: Float> {
    data: Array2<T>,
}

impl<T: Float> DistanceMatrix<T> {
    pub fn new(data: Array2<T>) -> Result<Self> {
        Self::with_tolerance(data, Tolerance::default())
    }

    pub fn with_tolerance(data: Array2<T>, tol: Tolerance) -> Result<Self> {
        validate(&data, tol)?;
        Ok(Self { data })
    }

    /// Build from nested rows. Ragged rows are rejected before any comparison.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        Self::new(rows_to_array(rows)?)
    }

    /// Build from a row-major buffer holding `n_elements * n_elements` values.
    pub fn from_flat(data: &[T], n_elements: usize) -> Result<Self> {
        let data = Array2::from_shape_vec((n_elements, n_elements), data.to_vec()).map_err(|_| {
            trace!(n_elements, found = data.len(), "flat buffer has the wrong length");
            MatrixError::Length {
                expected: n_elements.saturating_mul(n_elements),
                found: data.len(),
            }
        })?;
        Self::new(data)
    }

    pub fn view(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    pub fn into_inner(self) -> Array2<T> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Float> Measurable<T> for DistanceMatrix<T> {
    #[inline]
    fn measure(&self, i: usize, j: usize) -> T {
        self.data[(i, j)]
    }

    fn num_elements(&self) -> usize {
        self.data.nrows()
    }
}
