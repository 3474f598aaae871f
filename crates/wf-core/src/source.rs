use crate::error::{Result, WeightError};
use crate::format::{Ordering, SparseFormat, WeightFormat};
use crate::shape::Shape;

/// The capability contract every tensor container backend implements.
///
/// A source owns its backing resource (a memory mapping or file handle) and
/// a table of tensor descriptors built when the container was opened. Byte
/// views returned by [`raw_buffers`](TensorSource::raw_buffers) borrow the
/// source and cannot outlive it.
///
/// Optional capabilities (sparse access, zero-copy views) have default
/// bodies so a backend only implements what its format can deliver.
pub trait TensorSource {
    /// Names of all tensors in the container, in a stable order.
    fn tensor_names(&self) -> &[String];

    /// Whether the named tensor is stored in a sparse representation.
    fn is_sparse(&self, name: &str) -> Result<bool>;

    /// Number of axes of the named tensor.
    fn rank(&self, name: &str) -> Result<usize> {
        Ok(self.extents(name, None)?.ndim())
    }

    /// Total element count; always the product of the extents (1 for a
    /// scalar's empty shape).
    fn element_count(&self, name: &str) -> Result<usize> {
        Ok(self.extents(name, None)?.numel())
    }

    /// The tensor's shape. A permutation, if given, is canonicalized as
    /// row-major and applied before returning, so callers can size
    /// destination buffers for a permuted load without performing it.
    fn extents(&self, name: &str, permutation: Option<&[usize]>) -> Result<Shape>;

    /// Load the named tensor densely into `dest`, converting every element
    /// to `format` and re-laying the axes per `ordering`/`permutation`.
    ///
    /// `dest` must hold at least `element_count * format.width()` bytes.
    fn load_dense(
        &self,
        name: &str,
        format: WeightFormat,
        ordering: Ordering,
        dest: &mut [u8],
        permutation: Option<&[usize]>,
    ) -> Result<()>;

    /// Load the named tensor in a compressed sparse representation: values,
    /// row pointers, and column indices for [`SparseFormat::Csr`].
    fn load_sparse(
        &self,
        _name: &str,
        _sparse_format: SparseFormat,
        _weight_format: WeightFormat,
        _ordering: Ordering,
        _values: &mut [u8],
        _first_indices: &mut [i32],
        _second_indices: &mut [i32],
    ) -> Result<()> {
        Err(WeightError::Unsupported("sparse loading"))
    }

    /// Number of stored non-zero elements of a sparse tensor.
    fn nnz(&self, _name: &str) -> Result<usize> {
        Err(WeightError::Unsupported("nnz"))
    }

    /// Extents of the buffers a sparse load would fill.
    fn sparse_extents(&self, _name: &str, _format: SparseFormat) -> Result<Vec<usize>> {
        Err(WeightError::Unsupported("sparse extents"))
    }

    /// Zero-copy byte views over the tensor's stored data: one span for a
    /// dense tensor, potentially several for a sparse one, empty when the
    /// backend cannot expose a view.
    fn raw_buffers(&self, _name: &str) -> Result<Vec<&[u8]>> {
        Ok(Vec::new())
    }
}
