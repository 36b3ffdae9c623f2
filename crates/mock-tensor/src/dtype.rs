//! Enumerates the scalar element types recognized by mock device tensors.

use std::fmt;

/// Logical dtype identifier shared between mock tensors and their
/// interchange descriptors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating point following IEEE-754 semantics.
    #[default]
    F32,
    /// 64-bit floating point.
    F64,
    /// 16-bit floating point with full mantissa (fp16).
    F16,
    /// 32-bit signed integer, primarily for index buffers and token ids.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 16-bit signed integer.
    I16,
    /// 8-bit signed integer.
    I8,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit unsigned integer.
    U64,
    /// 16-bit unsigned integer.
    U16,
    /// 8-bit unsigned integer.
    U8,
}

impl DType {
    /// Every supported dtype, in table order.
    pub const ALL: [DType; 11] = [
        DType::F32,
        DType::F64,
        DType::F16,
        DType::I32,
        DType::I64,
        DType::I16,
        DType::I8,
        DType::U32,
        DType::U64,
        DType::U16,
        DType::U8,
    ];

    /// Canonical lowercase identifier, as spelled by array frameworks.
    pub fn name(self) -> &'static str {
        match self {
            DType::F32 => "float32",
            DType::F64 => "float64",
            DType::F16 => "float16",
            DType::I32 => "int32",
            DType::I64 => "int64",
            DType::I16 => "int16",
            DType::I8 => "int8",
            DType::U32 => "uint32",
            DType::U64 => "uint64",
            DType::U16 => "uint16",
            DType::U8 => "uint8",
        }
    }

    /// Three-character little-endian type code used by the CUDA array
    /// interface.
    pub fn typestr(self) -> &'static str {
        match self {
            DType::F32 => "<f4",
            DType::F64 => "<f8",
            DType::F16 => "<f2",
            DType::I32 => "<i4",
            DType::I64 => "<i8",
            DType::I16 => "<i2",
            DType::I8 => "<i1",
            DType::U32 => "<u4",
            DType::U64 => "<u8",
            DType::U16 => "<u2",
            DType::U8 => "<u1",
        }
    }

    /// Parses a canonical identifier; `None` when the name is outside the
    /// supported set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "float32" => Some(DType::F32),
            "float64" => Some(DType::F64),
            "float16" => Some(DType::F16),
            "int32" => Some(DType::I32),
            "int64" => Some(DType::I64),
            "int16" => Some(DType::I16),
            "int8" => Some(DType::I8),
            "uint32" => Some(DType::U32),
            "uint64" => Some(DType::U64),
            "uint16" => Some(DType::U16),
            "uint8" => Some(DType::U8),
            _ => None,
        }
    }

    /// Returns the number of bytes required per scalar element.
    pub fn size_in_bytes(self) -> usize {
        match self {
            DType::I8 | DType::U8 => 1,
            DType::F16 | DType::I16 | DType::U16 => 2,
            DType::F32 | DType::I32 | DType::U32 => 4,
            DType::F64 | DType::I64 | DType::U64 => 8,
        }
    }

    /// Returns `true` when the dtype is a floating-point representation.
    pub fn is_float(self) -> bool {
        matches!(self, DType::F32 | DType::F64 | DType::F16)
    }

    /// Returns `true` when the dtype is any signed or unsigned integer.
    pub fn is_integer(self) -> bool {
        !self.is_float()
    }

    /// Returns `true` when the dtype is a signed integer.
    pub fn is_signed_integer(self) -> bool {
        matches!(self, DType::I32 | DType::I64 | DType::I16 | DType::I8)
    }

    /// Returns `true` when the dtype is an unsigned integer.
    pub fn is_unsigned_integer(self) -> bool {
        matches!(self, DType::U32 | DType::U64 | DType::U16 | DType::U8)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Minimal named dtype value mimicking a framework dtype object.
///
/// Code written against a real tensor runtime reads a `.name`-style
/// attribute off the dtype rather than matching on an enum; this wrapper
/// presents that surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DTypeHandle {
    name: &'static str,
}

impl DTypeHandle {
    pub fn new(dtype: DType) -> Self {
        Self { name: dtype.name() }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl From<DType> for DTypeHandle {
    fn from(dtype: DType) -> Self {
        Self::new(dtype)
    }
}

impl fmt::Display for DTypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
