//! Row geometry and sub-byte unpacking.
//!
//! Nibble expansion forked from zune-bmp 0.5.2 by Caleb Etemesi (MIT/Apache-2.0/Zlib).

/// Bytes per stored row: `ceil(width * bpp / 8)` rounded up to a multiple of 4.
///
/// `None` if the arithmetic overflows `usize`.
pub(crate) fn row_stride(width: usize, bits_per_pixel: u16) -> Option<usize> {
    width
        .checked_mul(usize::from(bits_per_pixel))?
        .div_ceil(32)
        .checked_mul(4)
}

/// Split packed 4-bit indices into one byte per pixel, high nibble first.
///
/// `out.len()` is the pixel count. With an odd count the last input byte
/// contributes only its high nibble; the low nibble is row padding.
pub(crate) fn expand_nibbles(input: &[u8], out: &mut [u8]) {
    let mut in_iter = input.iter();
    let mut out_iter = out.chunks_exact_mut(2);

    (&mut out_iter)
        .zip(&mut in_iter)
        .for_each(|(out_vals, in_val)| {
            out_vals[0] = in_val >> 4;
            out_vals[1] = in_val & 0x0f;
        });

    if let (Some(last), Some(in_val)) = (out_iter.into_remainder().first_mut(), in_iter.next()) {
        *last = in_val >> 4;
    }
}
