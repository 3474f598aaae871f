use std::fmt;

/// Supported numeric storage formats for tensor elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightFormat {
    /// 64-bit floating point.
    F64,
    /// 32-bit floating point.
    F32,
    /// 16-bit floating point (IEEE 754 half-precision, via the `half` crate).
    F16,
    /// bfloat16: the high-order 16 bits of an f32.
    Bf16,
    /// 32-bit unsigned integer.
    U32,
    /// 16-bit unsigned integer.
    U16,
    /// 8-bit unsigned integer.
    U8,
    /// 32-bit signed integer.
    I32,
    /// 16-bit signed integer.
    I16,
    /// 8-bit signed integer.
    I8,
    /// 2-bit signed integer, stored one value per byte.
    ///
    /// `width()` reports the 1-byte storage width; packing several logical
    /// values into one byte is not modeled.
    I2,
}

impl WeightFormat {
    /// Returns the storage size in bytes of a single element.
    pub fn width(&self) -> usize {
        match self {
            WeightFormat::F64 => 8,
            WeightFormat::F32 => 4,
            WeightFormat::F16 => 2,
            WeightFormat::Bf16 => 2,
            WeightFormat::U32 => 4,
            WeightFormat::U16 => 2,
            WeightFormat::U8 => 1,
            WeightFormat::I32 => 4,
            WeightFormat::I16 => 2,
            WeightFormat::I8 => 1,
            WeightFormat::I2 => 1,
        }
    }

    /// Converts a stable format code (as exposed at the C boundary) to a
    /// `WeightFormat`.
    pub fn from_code(code: u32) -> Option<WeightFormat> {
        match code {
            0 => Some(WeightFormat::F64),
            1 => Some(WeightFormat::F32),
            2 => Some(WeightFormat::F16),
            3 => Some(WeightFormat::Bf16),
            4 => Some(WeightFormat::U32),
            5 => Some(WeightFormat::U16),
            6 => Some(WeightFormat::U8),
            7 => Some(WeightFormat::I32),
            8 => Some(WeightFormat::I16),
            9 => Some(WeightFormat::I8),
            10 => Some(WeightFormat::I2),
            _ => None,
        }
    }

    /// Returns the stable format code for this `WeightFormat`.
    pub fn code(&self) -> u32 {
        match self {
            WeightFormat::F64 => 0,
            WeightFormat::F32 => 1,
            WeightFormat::F16 => 2,
            WeightFormat::Bf16 => 3,
            WeightFormat::U32 => 4,
            WeightFormat::U16 => 5,
            WeightFormat::U8 => 6,
            WeightFormat::I32 => 7,
            WeightFormat::I16 => 8,
            WeightFormat::I8 => 9,
            WeightFormat::I2 => 10,
        }
    }

    /// All formats, in stable-code order. Handy for exhaustive tests.
    pub const ALL: [WeightFormat; 11] = [
        WeightFormat::F64,
        WeightFormat::F32,
        WeightFormat::F16,
        WeightFormat::Bf16,
        WeightFormat::U32,
        WeightFormat::U16,
        WeightFormat::U8,
        WeightFormat::I32,
        WeightFormat::I16,
        WeightFormat::I8,
        WeightFormat::I2,
    ];
}

impl fmt::Display for WeightFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightFormat::F64 => write!(f, "f64"),
            WeightFormat::F32 => write!(f, "f32"),
            WeightFormat::F16 => write!(f, "f16"),
            WeightFormat::Bf16 => write!(f, "bf16"),
            WeightFormat::U32 => write!(f, "u32"),
            WeightFormat::U16 => write!(f, "u16"),
            WeightFormat::U8 => write!(f, "u8"),
            WeightFormat::I32 => write!(f, "i32"),
            WeightFormat::I16 => write!(f, "i16"),
            WeightFormat::I8 => write!(f, "i8"),
            WeightFormat::I2 => write!(f, "i2"),
        }
    }
}

/// Axis contiguity convention for dense loads.
///
/// Affects only how an absent or user-supplied permutation is interpreted,
/// never the stored data itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    /// Row-major: the last axis is the most contiguous.
    RowMajor,
    /// Column-major: the first axis is the most contiguous.
    ColMajor,
}

/// Compressed sparse representations a source may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparseFormat {
    /// Compressed sparse row: values, row pointers, column indices.
    Csr,
    /// Coordinate list.
    Coo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(WeightFormat::F64.width(), 8);
        assert_eq!(WeightFormat::F32.width(), 4);
        assert_eq!(WeightFormat::F16.width(), 2);
        assert_eq!(WeightFormat::Bf16.width(), 2);
        assert_eq!(WeightFormat::U32.width(), 4);
        assert_eq!(WeightFormat::U16.width(), 2);
        assert_eq!(WeightFormat::U8.width(), 1);
        assert_eq!(WeightFormat::I32.width(), 4);
        assert_eq!(WeightFormat::I16.width(), 2);
        assert_eq!(WeightFormat::I8.width(), 1);
        assert_eq!(WeightFormat::I2.width(), 1);
    }

    #[test]
    fn test_code_roundtrip() {
        for format in WeightFormat::ALL {
            let code = format.code();
            let back = WeightFormat::from_code(code).unwrap();
            assert_eq!(format, back);
        }
    }

    #[test]
    fn test_code_unknown() {
        assert!(WeightFormat::from_code(999).is_none());
    }
}
