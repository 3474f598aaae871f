//! C FFI boundary for weightfile.
//!
//! Every function returns a `WfStatus`; on failure a descriptive message is
//! stored thread-locally and can be fetched with `wf_last_error`.
//! Destination buffers are passed unsized: the caller must provide at least
//! element-count x destination-format-width bytes (query the counts first).

mod error;
mod types;

pub use error::*;
pub use types::*;

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};

use wf_core::{TensorSource, WeightError, WeightFormat};
use wf_safetensors::SafetensorsContainer;

/// Opaque handle owning an opened container.
pub struct WfTensorFile {
    container: SafetensorsContainer,
}

/// Execute a closure that returns a `WfStatus`, catching any panics and
/// converting them into `WfStatus::ErrorInternal`.
fn catch_panic<F: FnOnce() -> WfStatus + std::panic::UnwindSafe>(f: F) -> WfStatus {
    match std::panic::catch_unwind(f) {
        Ok(status) => status,
        Err(_) => {
            set_last_error("internal panic".to_string());
            WfStatus::ErrorInternal
        }
    }
}

fn status_for(err: &WeightError) -> WfStatus {
    match err {
        WeightError::OpenFailed { .. } => WfStatus::ErrorOpen,
        WeightError::MalformedContainer(_) => WfStatus::ErrorMalformedContainer,
        WeightError::TensorNotFound { .. } => WfStatus::ErrorTensorNotFound,
        WeightError::InvalidPermutation(_) => WfStatus::ErrorInvalidPermutation,
        WeightError::RankMismatch { .. } => WfStatus::ErrorInvalidPermutation,
        WeightError::UnsupportedConversion { .. }
        | WeightError::UnsupportedDType(_)
        | WeightError::Unsupported(_) => WfStatus::ErrorUnsupported,
        WeightError::BufferTooSmall { .. } => WfStatus::ErrorBufferTooSmall,
    }
}

fn fail(err: WeightError) -> WfStatus {
    let status = status_for(&err);
    set_last_error(err.to_string());
    status
}

/// Read a NUL-terminated tensor name argument.
///
/// # Safety
/// `name` must be a valid NUL-terminated C string.
unsafe fn name_arg<'a>(name: *const c_char) -> Result<&'a str, WfStatus> {
    match CStr::from_ptr(name).to_str() {
        Ok(s) => Ok(s),
        Err(e) => {
            set_last_error(format!("invalid tensor name: {}", e));
            Err(WfStatus::ErrorInvalidArgument)
        }
    }
}

/// Read a caller permutation of `rank` entries, rejecting negatives.
unsafe fn permutation_arg(
    permutation: *const c_int,
    rank: usize,
) -> Result<Vec<usize>, WfStatus> {
    let raw = std::slice::from_raw_parts(permutation, rank);
    let mut out = Vec::with_capacity(rank);
    for &x in raw {
        if x < 0 {
            set_last_error(format!("invalid permutation: negative entry {}", x));
            return Err(WfStatus::ErrorInvalidPermutation);
        }
        out.push(x as usize);
    }
    Ok(out)
}

/// Open a safetensors container file.
///
/// On success, writes a heap-allocated `WfTensorFile` pointer into
/// `*file_out` and returns `WfStatus::Ok`. The caller must later call
/// `wf_close_file` to release it.
#[no_mangle]
pub unsafe extern "C" fn wf_open_file(
    path: *const c_char,
    file_out: *mut *mut WfTensorFile,
) -> WfStatus {
    catch_panic(|| {
        if path.is_null() || file_out.is_null() {
            set_last_error("null argument".to_string());
            return WfStatus::ErrorInvalidArgument;
        }
        let path_str = match CStr::from_ptr(path).to_str() {
            Ok(s) => s,
            Err(e) => {
                set_last_error(format!("invalid path: {}", e));
                return WfStatus::ErrorInvalidArgument;
            }
        };
        match SafetensorsContainer::open(path_str) {
            Ok(container) => {
                *file_out = Box::into_raw(Box::new(WfTensorFile { container }));
                WfStatus::Ok
            }
            Err(e) => fail(e),
        }
    })
}

/// Close a container previously opened by `wf_open_file`.
///
/// Passing a null pointer is a no-op and returns `WfStatus::Ok`. Raw
/// buffer views obtained from the container must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn wf_close_file(file: *mut WfTensorFile) -> WfStatus {
    if file.is_null() {
        return WfStatus::Ok;
    }
    drop(Box::from_raw(file));
    WfStatus::Ok
}

/// Storage width in bytes of a weight format.
#[no_mangle]
pub extern "C" fn wf_sizeof_weight_format(format: WfWeightFormat) -> c_int {
    WeightFormat::from(format).width() as c_int
}

/// Whether the named tensor is stored sparsely.
#[no_mangle]
pub unsafe extern "C" fn wf_is_sparse(
    file: *const WfTensorFile,
    tensor_name: *const c_char,
    sparse_out: *mut bool,
) -> WfStatus {
    catch_panic(|| {
        if file.is_null() || tensor_name.is_null() || sparse_out.is_null() {
            set_last_error("null argument".to_string());
            return WfStatus::ErrorInvalidArgument;
        }
        let name = match name_arg(tensor_name) {
            Ok(n) => n,
            Err(status) => return status,
        };
        match (*file).container.is_sparse(name) {
            Ok(sparse) => {
                *sparse_out = sparse;
                WfStatus::Ok
            }
            Err(e) => fail(e),
        }
    })
}

/// Number of tensors in the container.
#[no_mangle]
pub unsafe extern "C" fn wf_get_num_tensors(
    file: *const WfTensorFile,
    count_out: *mut c_int,
) -> WfStatus {
    catch_panic(|| {
        if file.is_null() || count_out.is_null() {
            set_last_error("null argument".to_string());
            return WfStatus::ErrorInvalidArgument;
        }
        *count_out = (*file).container.tensor_names().len() as c_int;
        WfStatus::Ok
    })
}

/// Copy the NUL-terminated name of tensor `index` into `name`.
///
/// `capacity` is the size of the caller's buffer; the name's length
/// (without the terminator) is written to `*length_out`.
#[no_mangle]
pub unsafe extern "C" fn wf_get_tensor_name(
    file: *const WfTensorFile,
    index: c_int,
    name: *mut c_char,
    capacity: usize,
    length_out: *mut c_int,
) -> WfStatus {
    catch_panic(|| {
        if file.is_null() || name.is_null() || length_out.is_null() {
            set_last_error("null argument".to_string());
            return WfStatus::ErrorInvalidArgument;
        }
        let names = (*file).container.tensor_names();
        if index < 0 || index as usize >= names.len() {
            set_last_error(format!(
                "tensor index {} out of range (container holds {})",
                index,
                names.len()
            ));
            return WfStatus::ErrorInvalidArgument;
        }
        let tensor_name = &names[index as usize];
        if capacity < tensor_name.len() + 1 {
            set_last_error(format!(
                "name buffer of {} bytes too small for '{}' plus terminator",
                capacity, tensor_name
            ));
            return WfStatus::ErrorBufferTooSmall;
        }
        std::ptr::copy_nonoverlapping(
            tensor_name.as_ptr(),
            name as *mut u8,
            tensor_name.len(),
        );
        *name.add(tensor_name.len()) = 0;
        *length_out = tensor_name.len() as c_int;
        WfStatus::Ok
    })
}

/// Rank of the named tensor.
#[no_mangle]
pub unsafe extern "C" fn wf_get_num_dimensions(
    file: *const WfTensorFile,
    tensor_name: *const c_char,
    rank_out: *mut c_int,
) -> WfStatus {
    catch_panic(|| {
        if file.is_null() || tensor_name.is_null() || rank_out.is_null() {
            set_last_error("null argument".to_string());
            return WfStatus::ErrorInvalidArgument;
        }
        let name = match name_arg(tensor_name) {
            Ok(n) => n,
            Err(status) => return status,
        };
        match (*file).container.rank(name) {
            Ok(rank) => {
                *rank_out = rank as c_int;
                WfStatus::Ok
            }
            Err(e) => fail(e),
        }
    })
}

/// Total element count of the named tensor.
#[no_mangle]
pub unsafe extern "C" fn wf_get_num_tensor_elements(
    file: *const WfTensorFile,
    tensor_name: *const c_char,
    count_out: *mut c_int,
) -> WfStatus {
    catch_panic(|| {
        if file.is_null() || tensor_name.is_null() || count_out.is_null() {
            set_last_error("null argument".to_string());
            return WfStatus::ErrorInvalidArgument;
        }
        let name = match name_arg(tensor_name) {
            Ok(n) => n,
            Err(status) => return status,
        };
        match (*file).container.element_count(name) {
            Ok(count) => {
                *count_out = count as c_int;
                WfStatus::Ok
            }
            Err(e) => fail(e),
        }
    })
}

/// Number of stored non-zeros of a sparse tensor.
#[no_mangle]
pub unsafe extern "C" fn wf_get_nnz(
    file: *const WfTensorFile,
    tensor_name: *const c_char,
    nnz_out: *mut c_int,
) -> WfStatus {
    catch_panic(|| {
        if file.is_null() || tensor_name.is_null() || nnz_out.is_null() {
            set_last_error("null argument".to_string());
            return WfStatus::ErrorInvalidArgument;
        }
        let name = match name_arg(tensor_name) {
            Ok(n) => n,
            Err(status) => return status,
        };
        match (*file).container.nnz(name) {
            Ok(nnz) => {
                *nnz_out = nnz as c_int;
                WfStatus::Ok
            }
            Err(e) => fail(e),
        }
    })
}

unsafe fn write_extents(
    shape: &wf_core::Shape,
    extents: *mut c_int,
    rank_out: *mut c_int,
) -> WfStatus {
    if shape.ndim() > WF_MAX_RANK {
        set_last_error(format!(
            "rank {} exceeds the C interface limit of {}",
            shape.ndim(),
            WF_MAX_RANK
        ));
        return WfStatus::ErrorInvalidArgument;
    }
    let out = std::slice::from_raw_parts_mut(extents, WF_MAX_RANK);
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = if i < shape.ndim() {
            shape.dim(i) as c_int
        } else {
            -1
        };
    }
    *rank_out = shape.ndim() as c_int;
    WfStatus::Ok
}

/// Write the tensor's extents into `extents` (an `int[WF_MAX_RANK]`);
/// unused slots are set to -1 and the rank is written to `*rank_out`.
#[no_mangle]
pub unsafe extern "C" fn wf_get_tensor_extents(
    file: *const WfTensorFile,
    tensor_name: *const c_char,
    extents: *mut c_int,
    rank_out: *mut c_int,
) -> WfStatus {
    catch_panic(|| {
        if file.is_null() || tensor_name.is_null() || extents.is_null() || rank_out.is_null()
        {
            set_last_error("null argument".to_string());
            return WfStatus::ErrorInvalidArgument;
        }
        let name = match name_arg(tensor_name) {
            Ok(n) => n,
            Err(status) => return status,
        };
        match (*file).container.extents(name, None) {
            Ok(shape) => write_extents(&shape, extents, rank_out),
            Err(e) => fail(e),
        }
    })
}

/// Like `wf_get_tensor_extents` but with the permutation applied, so a
/// destination buffer for a permuted load can be sized without loading.
#[no_mangle]
pub unsafe extern "C" fn wf_get_tensor_extents_permuted(
    file: *const WfTensorFile,
    tensor_name: *const c_char,
    permutation: *const c_int,
    extents: *mut c_int,
    rank_out: *mut c_int,
) -> WfStatus {
    catch_panic(|| {
        if file.is_null()
            || tensor_name.is_null()
            || permutation.is_null()
            || extents.is_null()
            || rank_out.is_null()
        {
            set_last_error("null argument".to_string());
            return WfStatus::ErrorInvalidArgument;
        }
        let name = match name_arg(tensor_name) {
            Ok(n) => n,
            Err(status) => return status,
        };
        let container = &(*file).container;
        let rank = match container.rank(name) {
            Ok(rank) => rank,
            Err(e) => return fail(e),
        };
        let perm = match permutation_arg(permutation, rank) {
            Ok(p) => p,
            Err(status) => return status,
        };
        match container.extents(name, Some(&perm)) {
            Ok(shape) => write_extents(&shape, extents, rank_out),
            Err(e) => fail(e),
        }
    })
}

/// Extents of the buffers a sparse load would fill.
#[no_mangle]
pub unsafe extern "C" fn wf_get_sparse_tensor_extents(
    file: *const WfTensorFile,
    tensor_name: *const c_char,
    extents: *mut c_int,
    format: WfSparseFormat,
    rank_out: *mut c_int,
) -> WfStatus {
    catch_panic(|| {
        if file.is_null() || tensor_name.is_null() || extents.is_null() || rank_out.is_null()
        {
            set_last_error("null argument".to_string());
            return WfStatus::ErrorInvalidArgument;
        }
        let name = match name_arg(tensor_name) {
            Ok(n) => n,
            Err(status) => return status,
        };
        match (*file).container.sparse_extents(name, format.into()) {
            Ok(dims) => write_extents(&wf_core::Shape::new(dims), extents, rank_out),
            Err(e) => fail(e),
        }
    })
}

unsafe fn load_dense_impl(
    file: *const WfTensorFile,
    tensor_name: *const c_char,
    tensor: *mut c_char,
    format: WfWeightFormat,
    ordering: WfOrdering,
    permutation: Option<*const c_int>,
) -> WfStatus {
    if file.is_null() || tensor_name.is_null() || tensor.is_null() {
        set_last_error("null argument".to_string());
        return WfStatus::ErrorInvalidArgument;
    }
    let name = match name_arg(tensor_name) {
        Ok(n) => n,
        Err(status) => return status,
    };
    let container = &(*file).container;
    let count = match container.element_count(name) {
        Ok(count) => count,
        Err(e) => return fail(e),
    };
    let dest_format = WeightFormat::from(format);
    let dest =
        std::slice::from_raw_parts_mut(tensor as *mut u8, count * dest_format.width());

    let perm = match permutation {
        None => None,
        Some(raw) => {
            let rank = match container.rank(name) {
                Ok(rank) => rank,
                Err(e) => return fail(e),
            };
            match permutation_arg(raw, rank) {
                Ok(p) => Some(p),
                Err(status) => return status,
            }
        }
    };
    match container.load_dense(name, dest_format, ordering.into(), dest, perm.as_deref()) {
        Ok(()) => WfStatus::Ok,
        Err(e) => fail(e),
    }
}

/// Load the named tensor densely into `tensor`, converting to `format`.
///
/// `tensor` must hold at least element-count x format-width bytes.
#[no_mangle]
pub unsafe extern "C" fn wf_load_tensor_dense(
    file: *const WfTensorFile,
    tensor_name: *const c_char,
    tensor: *mut c_char,
    format: WfWeightFormat,
    ordering: WfOrdering,
) -> WfStatus {
    catch_panic(|| load_dense_impl(file, tensor_name, tensor, format, ordering, None))
}

/// Like `wf_load_tensor_dense` with an axis permutation of rank entries,
/// zero- or one-indexed.
#[no_mangle]
pub unsafe extern "C" fn wf_load_tensor_dense_permuted(
    file: *const WfTensorFile,
    tensor_name: *const c_char,
    tensor: *mut c_char,
    format: WfWeightFormat,
    ordering: WfOrdering,
    permutation: *const c_int,
) -> WfStatus {
    catch_panic(|| {
        if permutation.is_null() {
            set_last_error("null argument".to_string());
            return WfStatus::ErrorInvalidArgument;
        }
        load_dense_impl(file, tensor_name, tensor, format, ordering, Some(permutation))
    })
}

/// Load the named tensor as CSR triples: values, row pointers (rows + 1
/// entries), column indices (nnz entries).
#[no_mangle]
pub unsafe extern "C" fn wf_load_tensor_sparse(
    file: *const WfTensorFile,
    tensor_name: *const c_char,
    values: *mut c_char,
    first_indices: *mut c_int,
    second_indices: *mut c_int,
    sparse_format: WfSparseFormat,
    weight_format: WfWeightFormat,
    ordering: WfOrdering,
) -> WfStatus {
    catch_panic(|| {
        if file.is_null()
            || tensor_name.is_null()
            || values.is_null()
            || first_indices.is_null()
            || second_indices.is_null()
        {
            set_last_error("null argument".to_string());
            return WfStatus::ErrorInvalidArgument;
        }
        let name = match name_arg(tensor_name) {
            Ok(n) => n,
            Err(status) => return status,
        };
        let container = &(*file).container;
        // a backend without sparse support fails here, before any buffer
        // is touched
        let nnz = match container.nnz(name) {
            Ok(nnz) => nnz,
            Err(e) => return fail(e),
        };
        let shape = match container.extents(name, None) {
            Ok(shape) => shape,
            Err(e) => return fail(e),
        };
        if shape.ndim() != 2 {
            set_last_error(format!(
                "CSR loading requires a rank-2 tensor, '{}' has rank {}",
                name,
                shape.ndim()
            ));
            return WfStatus::ErrorInvalidArgument;
        }
        let format = WeightFormat::from(weight_format);
        let values = std::slice::from_raw_parts_mut(values as *mut u8, nnz * format.width());
        let first = std::slice::from_raw_parts_mut(first_indices, shape.dim(0) + 1);
        let second = std::slice::from_raw_parts_mut(second_indices, nnz);
        match container.load_sparse(
            name,
            sparse_format.into(),
            format,
            ordering.into(),
            values,
            first,
            second,
        ) {
            Ok(()) => WfStatus::Ok,
            Err(e) => fail(e),
        }
    })
}

/// Retrieve the last error message.
///
/// Returns a pointer to a C string describing the most recent error, or
/// null if no error has occurred. The caller must free the returned string
/// with `wf_free_string`.
#[no_mangle]
pub extern "C" fn wf_last_error() -> *const c_char {
    match error::take_last_error() {
        Some(e) => e.into_raw(),
        None => std::ptr::null(),
    }
}

/// Free a string previously returned by `wf_last_error`.
#[no_mangle]
pub unsafe extern "C" fn wf_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture() -> NamedTempFile {
        let json =
            r#"{"embedding":{"dtype":"F64","shape":[3,4,5],"data_offsets":[0,480]}}"#;
        let data: Vec<u8> = (0..60).flat_map(|i| (i as f64).to_le_bytes()).collect();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&(json.len() as u64).to_le_bytes()).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file.write_all(&data).unwrap();
        file.flush().unwrap();
        file
    }

    unsafe fn open(path: &std::path::Path) -> *mut WfTensorFile {
        let c_path = CString::new(path.to_str().unwrap()).unwrap();
        let mut handle: *mut WfTensorFile = std::ptr::null_mut();
        assert_eq!(wf_open_file(c_path.as_ptr(), &mut handle), WfStatus::Ok);
        assert!(!handle.is_null());
        handle
    }

    #[test]
    fn test_open_missing_file_sets_last_error() {
        unsafe {
            let c_path = CString::new("/nonexistent/model.safetensors").unwrap();
            let mut handle: *mut WfTensorFile = std::ptr::null_mut();
            assert_eq!(
                wf_open_file(c_path.as_ptr(), &mut handle),
                WfStatus::ErrorOpen
            );
            let msg = wf_last_error();
            assert!(!msg.is_null());
            wf_free_string(msg as *mut c_char);
        }
    }

    #[test]
    fn test_sizeof_weight_format() {
        assert_eq!(wf_sizeof_weight_format(WfWeightFormat::F64), 8);
        assert_eq!(wf_sizeof_weight_format(WfWeightFormat::Bf16), 2);
        assert_eq!(wf_sizeof_weight_format(WfWeightFormat::I2), 1);
    }

    #[test]
    fn test_query_and_dense_load_roundtrip() {
        let file = fixture();
        unsafe {
            let handle = open(file.path());

            let mut count = 0;
            assert_eq!(wf_get_num_tensors(handle, &mut count), WfStatus::Ok);
            assert_eq!(count, 1);

            let mut name_buf = [0u8; 64];
            let mut name_len = 0;
            assert_eq!(
                wf_get_tensor_name(
                    handle,
                    0,
                    name_buf.as_mut_ptr() as *mut c_char,
                    name_buf.len(),
                    &mut name_len,
                ),
                WfStatus::Ok
            );
            assert_eq!(&name_buf[..name_len as usize], b"embedding");
            assert_eq!(name_buf[name_len as usize], 0);

            let c_name = CString::new("embedding").unwrap();

            let mut sparse = true;
            assert_eq!(
                wf_is_sparse(handle, c_name.as_ptr(), &mut sparse),
                WfStatus::Ok
            );
            assert!(!sparse);

            let mut rank = 0;
            assert_eq!(
                wf_get_num_dimensions(handle, c_name.as_ptr(), &mut rank),
                WfStatus::Ok
            );
            assert_eq!(rank, 3);

            let mut elements = 0;
            assert_eq!(
                wf_get_num_tensor_elements(handle, c_name.as_ptr(), &mut elements),
                WfStatus::Ok
            );
            assert_eq!(elements, 60);

            let mut extents = [0 as c_int; WF_MAX_RANK];
            assert_eq!(
                wf_get_tensor_extents(
                    handle,
                    c_name.as_ptr(),
                    extents.as_mut_ptr(),
                    &mut rank
                ),
                WfStatus::Ok
            );
            assert_eq!(&extents[..4], &[3, 4, 5, -1]);

            let mut dest = vec![0u8; 60 * 8];
            assert_eq!(
                wf_load_tensor_dense(
                    handle,
                    c_name.as_ptr(),
                    dest.as_mut_ptr() as *mut c_char,
                    WfWeightFormat::F64,
                    WfOrdering::RowMajor,
                ),
                WfStatus::Ok
            );
            let first = f64::from_le_bytes(dest[..8].try_into().unwrap());
            let last = f64::from_le_bytes(dest[59 * 8..].try_into().unwrap());
            assert_eq!((first, last), (0.0, 59.0));

            assert_eq!(wf_close_file(handle), WfStatus::Ok);
        }
    }

    #[test]
    fn test_permuted_load_and_extents() {
        let file = fixture();
        unsafe {
            let handle = open(file.path());
            let c_name = CString::new("embedding").unwrap();
            let permutation: [c_int; 3] = [1, 0, 2];

            let mut extents = [0 as c_int; WF_MAX_RANK];
            let mut rank = 0;
            assert_eq!(
                wf_get_tensor_extents_permuted(
                    handle,
                    c_name.as_ptr(),
                    permutation.as_ptr(),
                    extents.as_mut_ptr(),
                    &mut rank
                ),
                WfStatus::Ok
            );
            assert_eq!(&extents[..3], &[4, 3, 5]);

            let mut dest = vec![0u8; 60 * 8];
            assert_eq!(
                wf_load_tensor_dense_permuted(
                    handle,
                    c_name.as_ptr(),
                    dest.as_mut_ptr() as *mut c_char,
                    WfWeightFormat::F64,
                    WfOrdering::RowMajor,
                    permutation.as_ptr(),
                ),
                WfStatus::Ok
            );
            // out[j][i][k] == i*20 + j*5 + k; spot-check (j, i, k) = (1, 2, 3)
            let value =
                f64::from_le_bytes(dest[(15 + 10 + 3) * 8..][..8].try_into().unwrap());
            assert_eq!(value, (2 * 20 + 1 * 5 + 3) as f64);

            wf_close_file(handle);
        }
    }

    #[test]
    fn test_missing_tensor_reports_not_found() {
        let file = fixture();
        unsafe {
            let handle = open(file.path());
            let c_name = CString::new("missing_name").unwrap();
            let mut rank = 0;
            assert_eq!(
                wf_get_num_dimensions(handle, c_name.as_ptr(), &mut rank),
                WfStatus::ErrorTensorNotFound
            );
            let msg = wf_last_error();
            assert!(!msg.is_null());
            let text = CStr::from_ptr(msg).to_str().unwrap().to_string();
            wf_free_string(msg as *mut c_char);
            assert!(text.contains("embedding"));
            wf_close_file(handle);
        }
    }

    #[test]
    fn test_sparse_load_unsupported() {
        let file = fixture();
        unsafe {
            let handle = open(file.path());
            let c_name = CString::new("embedding").unwrap();
            let mut values = [0 as c_char; 8];
            let mut first = [0 as c_int; 4];
            let mut second = [0 as c_int; 4];
            assert_eq!(
                wf_load_tensor_sparse(
                    handle,
                    c_name.as_ptr(),
                    values.as_mut_ptr(),
                    first.as_mut_ptr(),
                    second.as_mut_ptr(),
                    WfSparseFormat::Csr,
                    WfWeightFormat::F32,
                    WfOrdering::RowMajor,
                ),
                WfStatus::ErrorUnsupported
            );
            wf_close_file(handle);
        }
    }
}
