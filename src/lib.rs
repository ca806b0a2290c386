//! Validation predicates for candidate distance matrices.
//!
//! A distance matrix is accepted when it is two-dimensional, square and
//! symmetric within a [`Tolerance`]. The predicates in [`validate`] never
//! panic on array-shaped input; [`validate::validate`] reports which check
//! failed, and [`DistanceMatrix`] carries a matrix that passed.

use std::fmt::Debug;

use num_traits::AsPrimitive;

pub trait Float: num_traits::Float + AsPrimitive<f64> + Debug {}

impl Float for f64 {}
impl Float for f32 {}

pub mod error;
pub mod measure;
pub mod tolerance;
pub mod utils;
pub mod validate;

pub use crate::error::MatrixError;
pub use crate::measure::{matrix::DistanceMatrix, Measurable};
pub use crate::tolerance::{Tolerance, DEFAULT_ATOL, DEFAULT_RTOL};
pub use crate::validate::{
    check_symmetric, check_symmetric_with, is_square, is_symmetric, is_symmetric_with,
    is_two_dimensional,
};
