use crate::bmp::{self, PixelFormat};
use crate::error::BmpError;
use crate::pixel::PixelLayout;

/// Header-level facts about a BMP file, read without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    pub format: PixelFormat,
    /// Whether a color table precedes the pixel data.
    pub has_palette: bool,
    /// Layout a successful decode will produce.
    pub output_layout: PixelLayout,
}

impl ImageInfo {
    /// Parse and validate the 54-byte header only.
    ///
    /// Succeeds for any header the decoder accepts; the palette and pixel
    /// data may still be truncated.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        let (header, format) = bmp::probe(data)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            bits_per_pixel: format.bits_per_pixel(),
            format,
            has_palette: format.is_indexed(),
            output_layout: PixelLayout::Rgba8,
        })
    }
}
