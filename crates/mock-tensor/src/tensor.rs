//! Mock device tensor: a passive descriptor that stands in for a
//! GPU-resident tensor during kernel type inference.

use crate::dtype::{DType, DTypeHandle};
use crate::error::MockTensorError;
use crate::interface::{CudaArray, CudaArrayInterface};
use crate::shape::Shape;

/// Device tag reported by every mock tensor. A single simulated accelerator
/// is modeled; there is no CPU or multi-device variant.
pub const MOCK_DEVICE: &str = "cuda";

/// Immutable stand-in for a device tensor.
///
/// Holds no buffer and no device resource: the device pointer is a symbolic
/// zero that is never dereferenced, and the interchange descriptor is
/// derived eagerly from shape and dtype so readers never touch memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockTensor {
    shape: Shape,
    dtype: DType,
    dtype_handle: DTypeHandle,
    interface: CudaArrayInterface,
}

impl MockTensor {
    /// Constructs a mock tensor for the given shape and dtype.
    ///
    /// Total: an enum dtype is valid by construction, and any shape is
    /// accepted as given (including rank zero and zero-sized axes).
    pub fn new(shape: impl Into<Shape>, dtype: DType) -> Self {
        let shape = shape.into();
        let interface = CudaArrayInterface::new(shape.clone(), dtype);
        MockTensor {
            shape,
            dtype,
            dtype_handle: DTypeHandle::new(dtype),
            interface,
        }
    }

    /// Constructs with the conventional `float32` default dtype.
    pub fn with_defaults(shape: impl Into<Shape>) -> Self {
        Self::new(shape, DType::default())
    }

    /// String-driven constructor for inference drivers that receive dtype
    /// names from an external caller.
    ///
    /// Unknown names fail construction with
    /// [`MockTensorError::UnsupportedDType`]; no fallback dtype is
    /// substituted.
    pub fn from_dtype_name(
        shape: impl Into<Shape>,
        dtype: &str,
    ) -> Result<Self, MockTensorError> {
        let parsed = DType::from_name(dtype).ok_or_else(|| MockTensorError::UnsupportedDType {
            dtype: dtype.to_string(),
        })?;
        Ok(Self::new(shape, parsed))
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Canonical identifier of the dtype, e.g. `"float32"`.
    pub fn dtype_name(&self) -> &'static str {
        self.dtype.name()
    }

    /// The `.name`-style dtype wrapper expected by framework-shaped callers.
    pub fn dtype_handle(&self) -> DTypeHandle {
        self.dtype_handle
    }

    /// Simulated execution device; constant for the object's lifetime.
    pub fn device(&self) -> &'static str {
        MOCK_DEVICE
    }

    /// Symbolic device address; always zero and never dereferenced.
    pub fn data_ptr(&self) -> u64 {
        0
    }

    /// Total number of elements implied by the shape.
    pub fn num_elements(&self) -> usize {
        self.shape.num_elements()
    }

    /// Total byte length, or `None` when the element count overflows.
    pub fn byte_len(&self) -> Option<usize> {
        self.shape
            .checked_num_elements()?
            .checked_mul(self.dtype.size_in_bytes())
    }
}

impl CudaArray for MockTensor {
    fn cuda_array_interface(&self) -> &CudaArrayInterface {
        &self.interface
    }
}
