use serde_json::Value;

use wf_core::{Result, WeightError};

/// Size of the little-endian header-length prefix.
pub const LEN_PREFIX_BYTES: usize = 8;

/// Describes a single tensor stored within a safetensors file.
///
/// The dtype is kept as the raw header string: a container may hold tensors
/// in formats this library cannot convert, and those only fail when
/// actually requested.
#[derive(Debug, Clone)]
pub struct TensorEntry {
    /// Tensor name (e.g. "model.embed_tokens.weight").
    pub name: String,
    /// Raw dtype string from the header (e.g. "F32", "BF16").
    pub dtype: String,
    /// Extent of each axis.
    pub shape: Vec<usize>,
    /// Byte range within the data region, begin inclusive.
    pub begin: usize,
    /// Byte range within the data region, end exclusive.
    pub end: usize,
}

/// Parsed safetensors header: tensor table plus the file offset where the
/// data region starts.
pub struct SafetensorsHeader {
    /// Tensor entries in sorted name order.
    pub entries: Vec<TensorEntry>,
    /// Byte offset of the data region from the start of the file.
    pub data_offset: usize,
}

fn malformed(msg: impl Into<String>) -> WeightError {
    WeightError::MalformedContainer(msg.into())
}

fn parse_entry(name: &str, value: &Value) -> Result<TensorEntry> {
    let obj = value
        .as_object()
        .ok_or_else(|| malformed(format!("tensor '{name}': entry is not an object")))?;

    let dtype = obj
        .get("dtype")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed(format!("tensor '{name}': missing dtype string")))?
        .to_string();

    let shape = obj
        .get("shape")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed(format!("tensor '{name}': missing shape array")))?
        .iter()
        .map(|d| {
            d.as_u64()
                .map(|d| d as usize)
                .ok_or_else(|| malformed(format!("tensor '{name}': non-integer extent")))
        })
        .collect::<Result<Vec<usize>>>()?;

    let offsets = obj
        .get("data_offsets")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed(format!("tensor '{name}': missing data_offsets")))?;
    let [begin, end] = offsets.as_slice() else {
        return Err(malformed(format!(
            "tensor '{name}': data_offsets must hold exactly two values"
        )));
    };
    let begin = begin
        .as_u64()
        .ok_or_else(|| malformed(format!("tensor '{name}': non-integer data offset")))?
        as usize;
    let end = end
        .as_u64()
        .ok_or_else(|| malformed(format!("tensor '{name}': non-integer data offset")))?
        as usize;

    Ok(TensorEntry {
        name: name.to_string(),
        dtype,
        shape,
        begin,
        end,
    })
}

/// Parse and validate a safetensors header from the full file contents.
///
/// Layout: an 8-byte little-endian `u64` header length `H`, then `H` bytes
/// of JSON mapping tensor name to dtype/shape/data_offsets (an optional
/// "__metadata__" object is ignored), then the data region. Every offset
/// range must lie within the data region and ranges must not overlap;
/// violations fail here so no partially-usable container is ever returned.
pub fn parse(file: &[u8]) -> Result<SafetensorsHeader> {
    if file.len() < LEN_PREFIX_BYTES {
        return Err(malformed(format!(
            "file holds {} bytes, need at least {} for the header length",
            file.len(),
            LEN_PREFIX_BYTES
        )));
    }
    let header_len = u64::from_le_bytes(file[..LEN_PREFIX_BYTES].try_into().unwrap()) as usize;
    let data_offset = LEN_PREFIX_BYTES
        .checked_add(header_len)
        .filter(|&end| end <= file.len())
        .ok_or_else(|| {
            malformed(format!(
                "header length {} exceeds file size {}",
                header_len,
                file.len()
            ))
        })?;
    let data_len = file.len() - data_offset;

    let root: Value = serde_json::from_slice(&file[LEN_PREFIX_BYTES..data_offset])
        .map_err(|e| malformed(format!("header is not valid JSON: {e}")))?;
    let map = root
        .as_object()
        .ok_or_else(|| malformed("header root is not a JSON object"))?;

    let mut entries = Vec::with_capacity(map.len());
    for (name, value) in map {
        if name == "__metadata__" {
            continue;
        }
        let entry = parse_entry(name, value)?;
        if entry.begin > entry.end {
            return Err(malformed(format!(
                "tensor '{}': data_offsets [{}, {}) are reversed",
                entry.name, entry.begin, entry.end
            )));
        }
        if entry.end > data_len {
            return Err(malformed(format!(
                "tensor '{}': data_offsets [{}, {}) exceed the {}-byte data region",
                entry.name, entry.begin, entry.end, data_len
            )));
        }
        entries.push(entry);
    }

    // ranges must not overlap
    let mut ranges: Vec<(usize, usize, &str)> = entries
        .iter()
        .map(|e| (e.begin, e.end, e.name.as_str()))
        .collect();
    ranges.sort_unstable();
    for pair in ranges.windows(2) {
        if pair[1].0 < pair[0].1 {
            return Err(malformed(format!(
                "tensors '{}' and '{}' have overlapping data ranges",
                pair[0].2, pair[1].2
            )));
        }
    }

    Ok(SafetensorsHeader {
        entries,
        data_offset,
    })
}
