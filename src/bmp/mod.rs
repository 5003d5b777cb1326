//! BMP decode pipeline (internal).
//!
//! Header reader, then format validator, then palette loader, then pixel
//! decoder. Each stage only consumes the validated output of the previous one.

mod decode;
mod header;
mod palette;
mod utils;
mod validate;

pub use header::BitmapHeader;
pub use palette::{Palette, PaletteEntry};
pub use validate::PixelFormat;

use crate::decode::{AlphaMode, DecodedImage};
use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use header::Cursor;

/// Read and validate the header without touching palette or pixel bytes.
pub(crate) fn probe(data: &[u8]) -> Result<(BitmapHeader, PixelFormat), BmpError> {
    let header = BitmapHeader::parse(data)?;
    let format = header.validate()?;
    Ok((header, format))
}

/// Validate the header and load the color table, if the format has one.
pub(crate) fn read_palette(data: &[u8]) -> Result<Option<Palette>, BmpError> {
    let (_, format) = probe(data)?;
    Ok(palette::load(data, format)?.into_palette())
}

/// Decode a complete BMP file to RGBA8.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    alpha: AlphaMode,
) -> Result<DecodedImage, BmpError> {
    let mut cursor = Cursor::new(data);
    let header = BitmapHeader::read(&mut cursor)?;
    debug_assert_eq!(cursor.position(), crate::HEADER_LEN);
    log::trace!(
        "BMP header: {}x{}, {} bpp, compression {}, info header {} bytes, data offset {}",
        header.width,
        header.height,
        header.bits_per_pixel,
        header.compression,
        header.header_size,
        header.data_offset
    );

    let format = header.validate()?;
    log::trace!("BMP pixel format: {format:?}");

    let source = palette::load(data, format)?;

    let geometry =
        decode::RowGeometry::new(header.width, header.height, source.bits_per_pixel())?;
    if let Some(limits) = limits {
        limits.check(header.width, header.height, geometry.out_len)?;
    }

    let offset = pixel_data_offset(&header, source.body_offset());
    log::trace!(
        "BMP pixel data at offset {offset}, {} bytes per stored row",
        geometry.src_stride
    );

    let pixels = decode::decode_pixels(data, offset, &geometry, &source, alpha)?;
    Ok(DecodedImage::new(
        pixels,
        header.width,
        header.height,
        PixelLayout::Rgba8,
    ))
}

/// Where the pixel array starts.
///
/// Pixels follow the color table directly unless the header's data offset
/// points further into the file, in which case the gap is skipped. Offsets
/// that would overlap the header or color table (including 0) are ignored.
fn pixel_data_offset(header: &BitmapHeader, body_offset: usize) -> usize {
    match usize::try_from(header.data_offset) {
        Ok(declared) if declared > body_offset => declared,
        _ => body_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_with_offset(data_offset: u32) -> BitmapHeader {
        let mut raw = [0u8; crate::HEADER_LEN];
        raw[0..2].copy_from_slice(b"BM");
        raw[10..14].copy_from_slice(&data_offset.to_le_bytes());
        BitmapHeader::parse(&raw).unwrap()
    }

    #[test]
    fn data_offset_only_moves_forward() {
        assert_eq!(pixel_data_offset(&header_with_offset(0), 54), 54);
        assert_eq!(pixel_data_offset(&header_with_offset(54), 1078), 1078);
        assert_eq!(pixel_data_offset(&header_with_offset(64), 54), 64);
    }
}
