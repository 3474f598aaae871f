//! `wf-safetensors` - Reference safetensors container backend for weightfile.
//!
//! Memory-maps a safetensors file, validates the header at open time, and
//! serves dense loads through the `wf-core` copy engine directly off the
//! mapped bytes.

pub mod container;
pub mod header;

pub use container::{weight_format_for_dtype, SafetensorsContainer};
pub use header::{SafetensorsHeader, TensorEntry};
