use crate::Float;

pub mod matrix;

pub trait Measurable<T: Float> {
    /// Measure the distance between two elements in the collection
    fn measure(&self, i: usize, j: usize) -> T;

    /// Return the number of elements in the collection
    fn num_elements(&self) -> usize;
}
