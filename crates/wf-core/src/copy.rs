use rayon::prelude::*;

use crate::convert::conversion_fn;
use crate::error::{Result, WeightError};
use crate::format::WeightFormat;
use crate::shape::Shape;

fn check_extents(
    dest_len: usize,
    dst_width: usize,
    src_len: usize,
    src_width: usize,
    count: usize,
    src_format: WeightFormat,
) -> Result<()> {
    let needed = count * dst_width;
    if dest_len < needed {
        return Err(WeightError::BufferTooSmall {
            needed,
            got: dest_len,
        });
    }
    if src_len < count * src_width {
        return Err(WeightError::MalformedContainer(format!(
            "source buffer holds {} bytes, {} elements of {} need {}",
            src_len,
            count,
            src_format,
            count * src_width
        )));
    }
    Ok(())
}

/// Copy `count` elements in source order, converting formats on the way.
///
/// Element `i` is read at `src[i * src_width]` and written at
/// `dest[i * dst_width]`. Elements are independent, so the work is split
/// across the rayon pool in disjoint contiguous chunks and joined at the
/// end.
pub fn copy_linear(
    dest: &mut [u8],
    dst_format: WeightFormat,
    src: &[u8],
    src_format: WeightFormat,
    count: usize,
) -> Result<()> {
    let convert = conversion_fn(dst_format, src_format)?;
    let src_width = src_format.width();
    let dst_width = dst_format.width();
    check_extents(dest.len(), dst_width, src.len(), src_width, count, src_format)?;
    if count == 0 {
        return Ok(());
    }

    dest[..count * dst_width]
        .par_chunks_mut(dst_width)
        .zip(src[..count * src_width].par_chunks(src_width))
        .for_each(|(out, inp)| convert(out, inp));
    Ok(())
}

/// Copy all elements of a tensor while permuting its axes.
///
/// `permutation` must be canonical (zero-indexed, row-major, a bijection)
/// as produced by [`crate::permute::canonical_permutation`]; an empty
/// permutation delegates to the linear fast path.
///
/// The source is walked once in its natural row-major order. The
/// destination offset is carried incrementally through an odometer over
/// the source axes: stepping axis `a` adds the permuted stride of `a`, and
/// a wrap of axis `a` retracts the whole extent before carrying outward.
/// This keeps the walk linear in the element count for any rank.
pub fn copy_permuted(
    dest: &mut [u8],
    dst_format: WeightFormat,
    src: &[u8],
    src_format: WeightFormat,
    shape: &Shape,
    permutation: &[usize],
) -> Result<()> {
    if permutation.is_empty() {
        return copy_linear(dest, dst_format, src, src_format, shape.numel());
    }
    let rank = shape.ndim();
    if permutation.len() != rank {
        return Err(WeightError::RankMismatch {
            expected: rank,
            got: permutation.len(),
        });
    }

    let convert = conversion_fn(dst_format, src_format)?;
    let src_width = src_format.width();
    let dst_width = dst_format.width();
    let total = shape.numel();
    check_extents(dest.len(), dst_width, src.len(), src_width, total, src_format)?;

    // Row-major strides of the permuted (destination) shape, mapped back
    // onto source iteration order.
    let new_strides = shape.permuted(permutation).strides();
    let mut strides_permuted = vec![0usize; rank];
    for i in 0..rank {
        strides_permuted[permutation[i]] = new_strides[i];
    }

    let dims = shape.dims();
    let mut counters = vec![0usize; rank];
    let mut store = 0usize;
    for load in 0..total {
        convert(
            &mut dest[store * dst_width..(store + 1) * dst_width],
            &src[load * src_width..(load + 1) * src_width],
        );

        let mut axis = rank;
        while axis > 0 {
            axis -= 1;
            counters[axis] += 1;
            store += strides_permuted[axis];
            if counters[axis] < dims[axis] {
                break;
            }
            counters[axis] = 0;
            store -= dims[axis] * strides_permuted[axis];
        }
    }

    // every source element visited exactly once: the odometer must have
    // wrapped completely
    debug_assert!(counters.iter().all(|&c| c == 0));
    debug_assert_eq!(store, 0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Ordering;
    use crate::permute::canonical_permutation;

    fn f32_tensor(count: usize) -> Vec<u8> {
        (0..count)
            .flat_map(|i| (i as f32).to_le_bytes())
            .collect()
    }

    fn as_f32(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks(4)
            .map(|c| f32::from_le_bytes(c.try_into().unwrap()))
            .collect()
    }

    #[test]
    fn test_linear_identity() {
        let src = f32_tensor(60);
        let mut dest = vec![0u8; src.len()];
        copy_linear(&mut dest, WeightFormat::F32, &src, WeightFormat::F32, 60).unwrap();
        assert_eq!(dest, src);
    }

    #[test]
    fn test_linear_converting() {
        let src: Vec<u8> = (0..10).flat_map(|i| (i as f64).to_le_bytes()).collect();
        let mut dest = vec![0u8; 10 * 4];
        copy_linear(&mut dest, WeightFormat::F32, &src, WeightFormat::F64, 10).unwrap();
        let values = as_f32(&dest);
        assert_eq!(values, (0..10).map(|i| i as f32).collect::<Vec<_>>());
    }

    #[test]
    fn test_linear_dest_too_small() {
        let src = f32_tensor(4);
        let mut dest = vec![0u8; 15];
        let err = copy_linear(&mut dest, WeightFormat::F32, &src, WeightFormat::F32, 4)
            .unwrap_err();
        assert!(matches!(
            err,
            WeightError::BufferTooSmall { needed: 16, got: 15 }
        ));
    }

    #[test]
    fn test_linear_src_truncated() {
        let src = f32_tensor(3);
        let mut dest = vec![0u8; 16];
        let err = copy_linear(&mut dest, WeightFormat::F32, &src, WeightFormat::F32, 4)
            .unwrap_err();
        assert!(matches!(err, WeightError::MalformedContainer(_)));
    }

    #[test]
    fn test_permuted_swap_first_two_axes() {
        // shape [3, 4, 5], permutation [1, 0, 2]: out[j][i][k] == in[i][j][k]
        let shape = Shape::new(vec![3, 4, 5]);
        let src = f32_tensor(60);
        let mut dest = vec![0u8; src.len()];
        copy_permuted(
            &mut dest,
            WeightFormat::F32,
            &src,
            WeightFormat::F32,
            &shape,
            &[1, 0, 2],
        )
        .unwrap();
        let out = as_f32(&dest);
        for i in 0..3 {
            for j in 0..4 {
                for k in 0..5 {
                    let source_index = i * 20 + j * 5 + k;
                    let out_index = j * 15 + i * 5 + k;
                    assert_eq!(out[out_index], source_index as f32);
                }
            }
        }
    }

    #[test]
    fn test_permuted_matches_naive_reference_rank6() {
        // the odometer walk must generalize past the hand-unrolled ranks
        let dims = vec![2usize, 3, 2, 2, 3, 2];
        let perm = vec![5usize, 3, 0, 4, 1, 2];
        let shape = Shape::new(dims.clone());
        let total = shape.numel();
        let src: Vec<u8> = (0..total).map(|i| i as u8).collect();
        let mut dest = vec![0u8; total];
        copy_permuted(
            &mut dest,
            WeightFormat::U8,
            &src,
            WeightFormat::U8,
            &shape,
            &perm,
        )
        .unwrap();

        let src_strides = shape.strides();
        let out_strides = shape.permuted(&perm).strides();
        for flat in 0..total {
            // decompose the source index, then recombine along permuted axes
            let mut rem = flat;
            let mut index = vec![0usize; dims.len()];
            for (axis, &stride) in src_strides.iter().enumerate() {
                index[axis] = rem / stride;
                rem %= stride;
            }
            let out_index: usize = (0..dims.len())
                .map(|i| index[perm[i]] * out_strides[i])
                .sum();
            assert_eq!(dest[out_index], src[flat]);
        }
    }

    #[test]
    fn test_permuted_round_trip_inverse() {
        let shape = Shape::new(vec![3, 4, 5]);
        let perm = vec![2usize, 0, 1];
        let mut inverse = vec![0usize; 3];
        for (i, &p) in perm.iter().enumerate() {
            inverse[p] = i;
        }
        let src = f32_tensor(60);
        let mut once = vec![0u8; src.len()];
        copy_permuted(
            &mut once,
            WeightFormat::F32,
            &src,
            WeightFormat::F32,
            &shape,
            &perm,
        )
        .unwrap();
        let mut back = vec![0u8; src.len()];
        copy_permuted(
            &mut back,
            WeightFormat::F32,
            &once,
            WeightFormat::F32,
            &shape.permuted(&perm),
            &inverse,
        )
        .unwrap();
        assert_eq!(back, src);
    }

    #[test]
    fn test_permuted_with_conversion() {
        let shape = Shape::new(vec![2, 3]);
        let src: Vec<u8> = (0..6).flat_map(|i| (i as f64).to_le_bytes()).collect();
        let mut dest = vec![0u8; 6 * 4];
        copy_permuted(
            &mut dest,
            WeightFormat::F32,
            &src,
            WeightFormat::F64,
            &shape,
            &[1, 0],
        )
        .unwrap();
        // transpose of [[0,1,2],[3,4,5]]
        assert_eq!(as_f32(&dest), vec![0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
    }

    #[test]
    fn test_empty_permutation_takes_linear_path() {
        let shape = Shape::new(vec![2, 3]);
        let src = f32_tensor(6);
        let mut dest = vec![0u8; src.len()];
        copy_permuted(
            &mut dest,
            WeightFormat::F32,
            &src,
            WeightFormat::F32,
            &shape,
            &[],
        )
        .unwrap();
        assert_eq!(dest, src);
    }

    #[test]
    fn test_zero_extent_copies_nothing() {
        let shape = Shape::new(vec![2, 0, 3]);
        let src: Vec<u8> = Vec::new();
        let mut dest: Vec<u8> = Vec::new();
        copy_permuted(
            &mut dest,
            WeightFormat::F32,
            &src,
            WeightFormat::F32,
            &shape,
            &[2, 1, 0],
        )
        .unwrap();
    }

    #[test]
    fn test_scalar_via_canonical_identity() {
        let canon = canonical_permutation(None, Ordering::RowMajor, 0).unwrap();
        assert!(canon.is_empty());
        let src = 42.0f32.to_le_bytes().to_vec();
        let mut dest = vec![0u8; 4];
        copy_linear(&mut dest, WeightFormat::F32, &src, WeightFormat::F32, 1).unwrap();
        assert_eq!(dest, src);
    }
}
