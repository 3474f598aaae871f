use crate::error::{Result, WeightError};
use crate::format::Ordering;

/// Canonicalize a raw axis permutation plus an ordering convention into a
/// single zero-indexed, row-major permutation.
///
/// The returned vector is empty when no reordering is required (the
/// identity), which callers use as the linear-copy fast-path signal.
///
/// Accepted raw forms, detected from the entry range:
/// - zero-indexed, entries over `[0, rank)`
/// - one-indexed, entries over `[1, rank]` (shifted down by one)
///
/// With no permutation given, `RowMajor` means "keep the stored order"
/// (empty) and `ColMajor` means "reverse all axes". With a permutation
/// given under `ColMajor`, the request addresses the reversed axis order,
/// so each index is mirrored (`x -> rank-1-x`) and the sequence reversed
/// before validation.
pub fn canonical_permutation(
    permutation: Option<&[usize]>,
    ordering: Ordering,
    rank: usize,
) -> Result<Vec<usize>> {
    let Some(raw) = permutation else {
        return Ok(match ordering {
            Ordering::RowMajor => Vec::new(),
            // reversed iota; rank <= 1 reverses to itself
            Ordering::ColMajor if rank > 1 => (0..rank).rev().collect(),
            Ordering::ColMajor => Vec::new(),
        });
    };

    if raw.len() != rank {
        return Err(WeightError::RankMismatch {
            expected: rank,
            got: raw.len(),
        });
    }
    if rank == 0 {
        return Ok(Vec::new());
    }

    let min = *raw.iter().min().unwrap();
    let max = *raw.iter().max().unwrap();
    let mut canonical: Vec<usize> = if min == 0 && max == rank - 1 {
        raw.to_vec()
    } else if min == 1 && max == rank {
        raw.iter().map(|&x| x - 1).collect()
    } else {
        return Err(WeightError::InvalidPermutation(format!(
            "entries {:?} span neither [0, {}) nor [1, {}]",
            raw, rank, rank
        )));
    };

    if ordering == Ordering::ColMajor {
        for x in canonical.iter_mut() {
            *x = rank - 1 - *x;
        }
        canonical.reverse();
    }

    let mut sorted = canonical.clone();
    sorted.sort_unstable();
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return Err(WeightError::InvalidPermutation(format!(
            "duplicate axis in {:?}",
            raw
        )));
    }

    // identity after canonicalization: nothing to do
    if canonical.windows(2).all(|w| w[0] < w[1]) {
        return Ok(Vec::new());
    }
    Ok(canonical)
}
