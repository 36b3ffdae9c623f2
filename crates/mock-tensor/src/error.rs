//! Error surface for mock tensor construction.

use thiserror::Error;

/// Failure raised while constructing a mock tensor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockTensorError {
    /// The requested dtype name is outside the supported set. Construction
    /// fails outright; no fallback dtype is substituted.
    #[error(
        "unsupported dtype: {dtype}; supported dtypes are float32, float64, float16, \
         int32, int64, int16, int8, uint32, uint64, uint16, uint8"
    )]
    UnsupportedDType { dtype: String },
}
