//! `wf-core` - Tensor extraction engine for weightfile.
//!
//! This crate provides:
//! - The `WeightFormat` catalog (storage widths, stable boundary codes)
//! - Canonicalization of axis permutations and ordering conventions
//! - A per-element format-conversion resolver
//! - The strided, permuting, converting byte-copy engine
//! - The `TensorSource` contract that container backends implement

pub mod convert;
pub mod copy;
pub mod error;
pub mod format;
pub mod permute;
pub mod shape;
pub mod source;

// Re-export primary types at the crate root for convenience.
pub use convert::{conversion_fn, ElementFn};
pub use copy::{copy_linear, copy_permuted};
pub use error::{Result, WeightError};
pub use format::{Ordering, SparseFormat, WeightFormat};
pub use permute::canonical_permutation;
pub use shape::Shape;
pub use source::TensorSource;
