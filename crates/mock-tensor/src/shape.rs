//! Lightweight wrapper for tensor shapes and dimension bookkeeping.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Stores the logical dimensions of a tensor, outer axis first.
///
/// No normalization is performed: rank zero (a scalar) and zero-sized
/// dimensions are legal and kept exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Constructs a new shape from the provided dimensions.
    pub fn new<D: Into<Vec<usize>>>(dims: D) -> Self {
        Shape { dims: dims.into() }
    }

    /// The rank-zero shape of a scalar.
    pub fn scalar() -> Self {
        Shape { dims: Vec::new() }
    }

    /// Borrow the raw dimension slice for downstream calculations.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the rank (number of axes) of the shape.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Computes the total number of elements implied by the shape.
    ///
    /// An empty product, so scalars count one element.
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }

    /// Element count with overflow detection; `None` when the product does
    /// not fit in `usize`.
    pub fn checked_num_elements(&self) -> Option<usize> {
        let mut count = 1usize;
        for dim in &self.dims {
            count = count.checked_mul(*dim)?;
        }
        Some(count)
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape::new(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape::new(dims)
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Shape::new(dims)
    }
}

// The interchange contract renders a shape as a bare integer sequence, not
// as a struct with a `dims` field.
impl Serialize for Shape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.dims.len()))?;
        for dim in &self.dims {
            seq.serialize_element(dim)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dims_are_kept_verbatim() {
        let shape = Shape::new([512, 128]);
        assert_eq!(shape.dims(), &[512, 128]);
        assert_eq!(shape.rank(), 2);
        assert_eq!(shape.num_elements(), 512 * 128);
    }

    #[test]
    fn scalar_shape_has_rank_zero_and_one_element() {
        let shape = Shape::scalar();
        assert_eq!(shape.rank(), 0);
        assert!(shape.dims().is_empty());
        assert_eq!(shape.num_elements(), 1);
    }

    #[test]
    fn zero_sized_dimensions_pass_through() {
        let shape = Shape::new([4, 0, 8]);
        assert_eq!(shape.dims(), &[4, 0, 8]);
        assert_eq!(shape.num_elements(), 0);
    }

    #[test]
    fn checked_num_elements_reports_overflow() {
        let shape = Shape::new([usize::MAX, 2]);
        assert_eq!(shape.checked_num_elements(), None);
        assert_eq!(Shape::new([3, 7]).checked_num_elements(), Some(21));
    }

    #[test]
    fn serializes_as_bare_sequence() {
        let json = serde_json::to_string(&Shape::new([512, 128])).expect("shape json");
        assert_eq!(json, "[512,128]");
        let json = serde_json::to_string(&Shape::scalar()).expect("scalar json");
        assert_eq!(json, "[]");
    }
}
