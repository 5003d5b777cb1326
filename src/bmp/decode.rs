//! Pixel decoder: expands stored rows into a top-down RGBA8 buffer.
//!
//! Stored rows run bottom-to-top, so output row `y` comes from stored row
//! `height - 1 - y`. Each stored row is padded to a multiple of 4 bytes;
//! the padding is skipped, never read as pixels.

use alloc::vec;
use alloc::vec::Vec;

use super::palette::{Palette, SourceFormat};
use super::utils::{expand_nibbles, row_stride};
use crate::decode::AlphaMode;
use crate::error::BmpError;

// ── Row geometry ────────────────────────────────────────────────────

/// Sizes derived from the header, all overflow-checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RowGeometry {
    pub width: usize,
    /// Stored bytes per row, including alignment padding.
    pub src_stride: usize,
    /// Stored bytes for the whole pixel array.
    pub src_len: usize,
    /// Output bytes per row (`4 * width`).
    pub out_stride: usize,
    /// Output buffer size (`4 * width * height`).
    pub out_len: usize,
}

impl RowGeometry {
    /// Capacity check. Fails with [`BmpError::ImageTooLarge`] when any size
    /// would overflow `usize`.
    pub(crate) fn new(width: u32, height: u32, bits_per_pixel: u16) -> Result<Self, BmpError> {
        let too_large = BmpError::ImageTooLarge { width, height };
        let w = usize::try_from(width).map_err(|_| too_large.clone())?;
        let h = usize::try_from(height).map_err(|_| too_large.clone())?;

        let out_stride = w.checked_mul(4).ok_or(too_large.clone())?;
        let out_len = out_stride.checked_mul(h).ok_or(too_large.clone())?;
        let src_stride = row_stride(w, bits_per_pixel).ok_or(too_large.clone())?;
        let src_len = src_stride.checked_mul(h).ok_or(too_large)?;

        Ok(Self {
            width: w,
            src_stride,
            src_len,
            out_stride,
            out_len,
        })
    }
}

// ── Full decode ─────────────────────────────────────────────────────

/// Decode the pixel array that starts at `offset` in `data`.
///
/// Nothing is allocated until the input is known to hold every stored row.
pub(crate) fn decode_pixels(
    data: &[u8],
    offset: usize,
    geometry: &RowGeometry,
    source: &SourceFormat,
    alpha: AlphaMode,
) -> Result<Vec<u8>, BmpError> {
    let available = data.len().saturating_sub(offset);
    let stored = data
        .get(offset..)
        .and_then(|rest| rest.get(..geometry.src_len))
        .ok_or(BmpError::TruncatedPixelData {
            needed: geometry.src_len,
            available,
        })?;

    let mut buf = vec![0u8; geometry.out_len];

    match source {
        SourceFormat::Bgra32 => {
            let keep_alpha = match alpha {
                AlphaMode::PassThrough => true,
                AlphaMode::Opaque => false,
                AlphaMode::Auto => {
                    let any_alpha = has_nonzero_alpha(stored, geometry);
                    if !any_alpha {
                        log::debug!("32 bpp alpha channel is all zero, treating as opaque");
                    }
                    any_alpha
                }
            };
            for_each_row(stored, &mut buf, geometry, |src, out| {
                decode_row_bgra32(src, out, keep_alpha);
                Ok(())
            })?;
        }
        SourceFormat::Bgr24 => {
            for_each_row(stored, &mut buf, geometry, |src, out| {
                decode_row_bgr24(src, out);
                Ok(())
            })?;
        }
        SourceFormat::Indexed8(palette) => {
            for_each_row(stored, &mut buf, geometry, |src, out| {
                expand_palette(&src[..geometry.width], out, palette)
            })?;
        }
        SourceFormat::Indexed4(palette) => {
            let mut indices = vec![0u8; geometry.width];
            for_each_row(stored, &mut buf, geometry, |src, out| {
                expand_nibbles(src, &mut indices);
                expand_palette(&indices, out, palette)
            })?;
        }
    }

    Ok(buf)
}

/// Pair every stored row with its flipped output row.
///
/// Stored rows are walked first to last while output rows are walked last to
/// first, which is the bottom-up to top-down flip.
fn for_each_row<F>(
    stored: &[u8],
    buf: &mut [u8],
    geometry: &RowGeometry,
    mut f: F,
) -> Result<(), BmpError>
where
    F: FnMut(&[u8], &mut [u8]) -> Result<(), BmpError>,
{
    for (src, out) in stored
        .chunks_exact(geometry.src_stride)
        .zip(buf.rchunks_exact_mut(geometry.out_stride))
    {
        f(src, out)?;
    }
    Ok(())
}

fn has_nonzero_alpha(stored: &[u8], geometry: &RowGeometry) -> bool {
    stored
        .chunks_exact(geometry.src_stride)
        .any(|row| row[..geometry.out_stride].chunks_exact(4).any(|px| px[3] != 0))
}

fn decode_row_bgra32(src: &[u8], out: &mut [u8], keep_alpha: bool) {
    for (px, rgba) in src.chunks_exact(4).zip(out.chunks_exact_mut(4)) {
        rgba[0] = px[2];
        rgba[1] = px[1];
        rgba[2] = px[0];
        rgba[3] = if keep_alpha { px[3] } else { 255 };
    }
}

fn decode_row_bgr24(src: &[u8], out: &mut [u8]) {
    // `zip` stops at the output width, so trailing padding is never read.
    for (px, rgba) in src.chunks_exact(3).zip(out.chunks_exact_mut(4)) {
        rgba[0] = px[2];
        rgba[1] = px[1];
        rgba[2] = px[0];
        rgba[3] = 255;
    }
}

fn expand_palette(indices: &[u8], out: &mut [u8], palette: &Palette) -> Result<(), BmpError> {
    for (&idx, rgba) in indices.iter().zip(out.chunks_exact_mut(4)) {
        rgba.copy_from_slice(&palette.lookup(idx)?.to_rgba());
    }
    Ok(())
}
