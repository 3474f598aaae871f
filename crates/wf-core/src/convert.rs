use half::f16;

use crate::error::{Result, WeightError};
use crate::format::WeightFormat;

/// A per-element copy function: reads exactly one source element and writes
/// exactly one destination element.
///
/// Both slices must be exactly one element wide for their respective
/// formats; the functions use `copy_from_slice`/fixed-size buffers so a
/// width mismatch panics instead of corrupting neighbouring elements.
pub type ElementFn = Box<dyn Fn(&mut [u8], &[u8]) + Send + Sync>;

/// Identity: copy `width` raw bytes.
fn raw_copy(width: usize) -> ElementFn {
    Box::new(move |out: &mut [u8], inp: &[u8]| {
        out[..width].copy_from_slice(&inp[..width]);
    })
}

/// A numeric reinterpreting cast between two primitive little-endian types.
macro_rules! cast {
    ($src:ty => $dst:ty) => {{
        const SRC_WIDTH: usize = std::mem::size_of::<$src>();
        Box::new(move |out: &mut [u8], inp: &[u8]| {
            let mut buf = [0u8; SRC_WIDTH];
            buf.copy_from_slice(inp);
            let value = <$src>::from_le_bytes(buf);
            out.copy_from_slice(&((value as $dst).to_le_bytes()));
        }) as ElementFn
    }};
}

fn f64_to_f16() -> ElementFn {
    Box::new(|out, inp| {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(inp);
        out.copy_from_slice(&f16::from_f64(f64::from_le_bytes(buf)).to_le_bytes());
    })
}

fn f32_to_f16() -> ElementFn {
    Box::new(|out, inp| {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(inp);
        out.copy_from_slice(&f16::from_f32(f32::from_le_bytes(buf)).to_le_bytes());
    })
}

fn f16_to_f64() -> ElementFn {
    Box::new(|out, inp| {
        let value = f16::from_le_bytes([inp[0], inp[1]]);
        out.copy_from_slice(&value.to_f64().to_le_bytes());
    })
}

fn f16_to_f32() -> ElementFn {
    Box::new(|out, inp| {
        let value = f16::from_le_bytes([inp[0], inp[1]]);
        out.copy_from_slice(&value.to_f32().to_le_bytes());
    })
}

/// bf16 is the upper half of an f32: widen by placing the two stored bytes
/// in the high-order position and zero-filling the low-order bytes, so
/// `f32_bits == bf16_bits << 16`.
fn bf16_to_f32() -> ElementFn {
    Box::new(|out, inp| {
        out[..2].fill(0);
        out[2..4].copy_from_slice(&inp[..2]);
    })
}

/// The reverse direction truncates: keep only the two high-order bytes.
fn f32_to_bf16() -> ElementFn {
    Box::new(|out, inp| {
        out.copy_from_slice(&inp[2..4]);
    })
}

/// Resolve a per-element conversion function for (destination, source).
///
/// Identical formats copy raw bytes; the float formats and same-signedness
/// integer formats convert through their native numeric types with plain
/// cast semantics; bf16 and f32 form a truncated-float pair (byte
/// truncation / zero-extension, no rounding). Every other pair fails with
/// `UnsupportedConversion`.
pub fn conversion_fn(dst: WeightFormat, src: WeightFormat) -> Result<ElementFn> {
    use WeightFormat::*;

    if src == dst {
        return Ok(raw_copy(src.width()));
    }

    let function: ElementFn = match (src, dst) {
        // floats, via native numeric casts
        (F64, F32) => cast!(f64 => f32),
        (F32, F64) => cast!(f32 => f64),
        (F64, F16) => f64_to_f16(),
        (F32, F16) => f32_to_f16(),
        (F16, F64) => f16_to_f64(),
        (F16, F32) => f16_to_f32(),
        // unsigned integers
        (U32, U16) => cast!(u32 => u16),
        (U32, U8) => cast!(u32 => u8),
        (U16, U8) => cast!(u16 => u8),
        (U8, U16) => cast!(u8 => u16),
        (U8, U32) => cast!(u8 => u32),
        (U16, U32) => cast!(u16 => u32),
        // signed integers
        (I32, I16) => cast!(i32 => i16),
        (I32, I8) => cast!(i32 => i8),
        (I16, I8) => cast!(i16 => i8),
        (I8, I16) => cast!(i8 => i16),
        (I8, I32) => cast!(i8 => i32),
        (I16, I32) => cast!(i16 => i32),
        // truncated-float compatible pair
        (Bf16, F32) => bf16_to_f32(),
        (F32, Bf16) => f32_to_bf16(),
        _ => {
            return Err(WeightError::UnsupportedConversion {
                from: src,
                to: dst,
            })
        }
    };
    Ok(function)
}
