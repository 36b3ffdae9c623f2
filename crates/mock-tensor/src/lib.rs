//! Passive mock of a CUDA device tensor used to drive static type/shape
//! inference for kernel compilation without an accelerator present.
//!
//! A [`MockTensor`] allocates nothing and computes nothing. It is a frozen
//! descriptor carrying a shape, a dtype, a device tag, a null device pointer,
//! and the `__cuda_array_interface__`-compatible record that an external
//! inference engine reads to recover kernel argument types.

pub mod dtype;
pub mod error;
pub mod interface;
pub mod shape;
pub mod tensor;

pub use dtype::{DType, DTypeHandle};
pub use error::MockTensorError;
pub use interface::{CudaArray, CudaArrayInterface, CUDA_ARRAY_INTERFACE_VERSION};
pub use shape::Shape;
pub use tensor::{MockTensor, MOCK_DEVICE};
