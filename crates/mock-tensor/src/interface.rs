//! The standardized CUDA array-interchange descriptor exposed by mock
//! tensors.

use serde::Serialize;

use crate::dtype::DType;
use crate::shape::Shape;

/// Version of the `__cuda_array_interface__` protocol reproduced here.
pub const CUDA_ARRAY_INTERFACE_VERSION: u32 = 3;

/// Structural record read by a type-inference engine to recover shape and
/// element type without touching device memory.
///
/// The field names, the shape of the `data` pair, and `version = 3` are the
/// bit-exact contract: the consumer matches on structure, not semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CudaArrayInterface {
    shape: Shape,
    typestr: &'static str,
    data: (u64, bool),
    version: u32,
}

impl CudaArrayInterface {
    /// Derives the descriptor for a shape/dtype pair.
    ///
    /// Pure function of its inputs; computed once per tensor at
    /// construction and never mutated afterward.
    pub fn new(shape: Shape, dtype: DType) -> Self {
        Self {
            shape,
            typestr: dtype.typestr(),
            data: (0, false),
            version: CUDA_ARRAY_INTERFACE_VERSION,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn typestr(&self) -> &'static str {
        self.typestr
    }

    /// Device pointer and read-only flag; always `(0, false)` for mocks.
    pub fn data(&self) -> (u64, bool) {
        self.data
    }

    pub fn version(&self) -> u32 {
        self.version
    }
}

/// Capability for objects that expose a CUDA array-interchange descriptor.
///
/// Stands in for the dynamic `__cuda_array_interface__` attribute lookup a
/// Python consumer would perform; inference code takes `&dyn CudaArray` (or
/// a generic bound) and never inspects the concrete tensor type.
pub trait CudaArray {
    fn cuda_array_interface(&self) -> &CudaArrayInterface;
}
