use wf_core::{Ordering, SparseFormat, WeightFormat};

/// Status codes returned by all FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WfStatus {
    Ok = 0,
    ErrorInvalidArgument = 1,
    ErrorOpen = 2,
    ErrorMalformedContainer = 3,
    ErrorTensorNotFound = 4,
    ErrorInvalidPermutation = 5,
    ErrorUnsupported = 6,
    ErrorBufferTooSmall = 7,
    ErrorInternal = 8,
}

/// Numeric storage formats, with stable codes matching
/// `wf_core::WeightFormat::code`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WfWeightFormat {
    F64 = 0,
    F32 = 1,
    F16 = 2,
    Bf16 = 3,
    U32 = 4,
    U16 = 5,
    U8 = 6,
    I32 = 7,
    I16 = 8,
    I8 = 9,
    I2 = 10,
}

impl From<WfWeightFormat> for WeightFormat {
    fn from(format: WfWeightFormat) -> WeightFormat {
        // codes are shared by construction
        WeightFormat::from_code(format as u32).unwrap()
    }
}

/// Axis contiguity convention.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WfOrdering {
    /// Row-major: last index is most contiguous.
    RowMajor = 0,
    /// Column-major: first index is most contiguous.
    ColMajor = 1,
}

impl From<WfOrdering> for Ordering {
    fn from(ordering: WfOrdering) -> Ordering {
        match ordering {
            WfOrdering::RowMajor => Ordering::RowMajor,
            WfOrdering::ColMajor => Ordering::ColMajor,
        }
    }
}

/// Compressed sparse representations.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WfSparseFormat {
    Csr = 0,
    Coo = 1,
}

impl From<WfSparseFormat> for SparseFormat {
    fn from(format: WfSparseFormat) -> SparseFormat {
        match format {
            WfSparseFormat::Csr => SparseFormat::Csr,
            WfSparseFormat::Coo => SparseFormat::Coo,
        }
    }
}

/// Fixed extent-array size for `wf_get_tensor_extents`; callers pass an
/// `int[WF_MAX_RANK]` and unused slots are set to -1.
pub const WF_MAX_RANK: usize = 10;
