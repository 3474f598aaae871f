use std::path::Path;

use memmap2::Mmap;

use wf_core::{
    canonical_permutation, copy_permuted, Ordering, Result, Shape, TensorSource, WeightError,
    WeightFormat,
};

use crate::header::{self, TensorEntry};

/// Map a safetensors dtype string to the matching storage format.
///
/// Returns `None` for dtypes the conversion engine has no representation
/// for (e.g. "I64", "BOOL"); those fail at load time, not open time.
pub fn weight_format_for_dtype(dtype: &str) -> Option<WeightFormat> {
    match dtype {
        "F64" => Some(WeightFormat::F64),
        "F32" => Some(WeightFormat::F32),
        "F16" => Some(WeightFormat::F16),
        "BF16" => Some(WeightFormat::Bf16),
        "U32" => Some(WeightFormat::U32),
        "U16" => Some(WeightFormat::U16),
        "U8" => Some(WeightFormat::U8),
        "I32" => Some(WeightFormat::I32),
        "I16" => Some(WeightFormat::I16),
        "I8" => Some(WeightFormat::I8),
        _ => None,
    }
}

/// An opened safetensors container backed by a memory-mapped file.
///
/// The header is parsed and its offsets validated on open; tensor data is
/// afterwards read directly out of the mapping with no intermediate
/// buffering. The container exclusively owns the mapping, so raw buffer
/// views borrow it and cannot outlive a close.
#[derive(Debug)]
pub struct SafetensorsContainer {
    /// Memory-mapped file contents.
    mmap: Mmap,
    /// Tensor entries in sorted name order.
    entries: Vec<TensorEntry>,
    /// Tensor names, same order as `entries`.
    names: Vec<String>,
    /// Byte offset within the file where the data region begins.
    data_offset: usize,
}

impl SafetensorsContainer {
    /// Open and validate a safetensors file.
    ///
    /// Fails with `OpenFailed` if the file cannot be opened or mapped and
    /// with `MalformedContainer` if the header does not parse or any
    /// tensor's byte range falls outside the data region or overlaps
    /// another's. No partially-usable container is returned.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let open_failed = |source: std::io::Error| WeightError::OpenFailed {
            path: path.display().to_string(),
            source,
        };
        let file = std::fs::File::open(path).map_err(open_failed)?;
        let mmap = unsafe { Mmap::map(&file) }.map_err(open_failed)?;

        let parsed = header::parse(&mmap)?;
        let names: Vec<String> = parsed.entries.iter().map(|e| e.name.clone()).collect();
        log::debug!(
            "opened {} with {} tensors, {}-byte data region",
            path.display(),
            names.len(),
            mmap.len() - parsed.data_offset
        );

        Ok(SafetensorsContainer {
            mmap,
            entries: parsed.entries,
            names,
            data_offset: parsed.data_offset,
        })
    }

    /// Look up a tensor entry by name.
    ///
    /// An empty name selects the sole tensor of a single-tensor container;
    /// any other miss reports the available names.
    fn find(&self, name: &str) -> Result<&TensorEntry> {
        if name.is_empty() && self.entries.len() == 1 {
            return Ok(&self.entries[0]);
        }
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| WeightError::TensorNotFound {
                name: name.to_string(),
                available: self.names.join(", "),
            })
    }

    /// The tensor's bytes within the mapped data region.
    fn tensor_data(&self, entry: &TensorEntry) -> &[u8] {
        // in-bounds by open-time validation
        &self.mmap[self.data_offset + entry.begin..self.data_offset + entry.end]
    }

    /// The tensor's native storage format, resolved lazily from the header
    /// dtype string.
    fn native_format(&self, entry: &TensorEntry) -> Result<WeightFormat> {
        weight_format_for_dtype(&entry.dtype)
            .ok_or_else(|| WeightError::UnsupportedDType(entry.dtype.clone()))
    }
}

impl TensorSource for SafetensorsContainer {
    /// Names in sorted order (the parsed header's key order).
    fn tensor_names(&self) -> &[String] {
        &self.names
    }

    fn is_sparse(&self, name: &str) -> Result<bool> {
        self.find(name)?;
        // safetensors has no sparse representation
        Ok(false)
    }

    fn extents(&self, name: &str, permutation: Option<&[usize]>) -> Result<Shape> {
        let entry = self.find(name)?;
        let shape = Shape::from_slice(&entry.shape);
        match permutation {
            None => Ok(shape),
            Some(raw) => {
                let canonical =
                    canonical_permutation(Some(raw), Ordering::RowMajor, shape.ndim())?;
                if canonical.is_empty() {
                    Ok(shape)
                } else {
                    Ok(shape.permuted(&canonical))
                }
            }
        }
    }

    fn load_dense(
        &self,
        name: &str,
        format: WeightFormat,
        ordering: Ordering,
        dest: &mut [u8],
        permutation: Option<&[usize]>,
    ) -> Result<()> {
        let entry = self.find(name)?;
        let shape = Shape::from_slice(&entry.shape);
        let canonical = canonical_permutation(permutation, ordering, shape.ndim())?;
        let native = self.native_format(entry)?;

        let data = self.tensor_data(entry);
        let expected = shape.numel() * native.width();
        if data.len() != expected {
            return Err(WeightError::MalformedContainer(format!(
                "tensor '{}': {} bytes stored, shape {} of {} needs {}",
                entry.name,
                data.len(),
                shape,
                native,
                expected
            )));
        }

        log::trace!(
            "loading '{}' ({} {} -> {}, permutation {:?})",
            entry.name,
            shape,
            native,
            format,
            canonical
        );
        copy_permuted(dest, format, data, native, &shape, &canonical)
    }

    fn raw_buffers(&self, name: &str) -> Result<Vec<&[u8]>> {
        let entry = self.find(name)?;
        Ok(vec![self.tensor_data(entry)])
    }
}
