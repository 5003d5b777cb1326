use alloc::vec::Vec;

use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// How the fourth byte of 32 bpp pixels becomes output alpha.
///
/// Only 32 bpp sources are affected; 24, 8 and 4 bpp output is always opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlphaMode {
    /// Copy source alpha, unless every pixel's alpha byte is 0. Plain
    /// 32 bpp files leave that byte zeroed, so all-zero means "no alpha"
    /// and the image is decoded opaque.
    #[default]
    Auto,
    /// Always copy the fourth source byte.
    PassThrough,
    /// Always emit 255.
    Opaque,
}

/// Builder for a single decode call.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    alpha: AlphaMode,
}

impl<'a> DecodeRequest<'a> {
    /// Decode `data`, a complete BMP file starting at offset 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            alpha: AlphaMode::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_alpha_mode(mut self, alpha: AlphaMode) -> Self {
        self.alpha = alpha;
        self
    }

    /// Run the decode. On error no pixel buffer is returned.
    pub fn decode(self) -> Result<DecodedImage, BmpError> {
        crate::bmp::decode(self.data, self.limits, self.alpha)
    }
}

/// Decoded image: top-down RGBA8 rows of exactly `4 * width` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
}

impl DecodedImage {
    pub(crate) fn new(pixels: Vec<u8>, width: u32, height: u32, layout: PixelLayout) -> Self {
        Self {
            pixels,
            width,
            height,
            layout,
        }
    }

    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Bytes per output row. Never includes padding.
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.layout.bytes_per_pixel()
    }

    /// Output rows, top first.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.pixels.chunks_exact(self.row_stride())
    }

    /// RGBA of the pixel at column `x`, row `y` (0 = top).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = y as usize * self.row_stride() + x as usize * 4;
        self.pixels.get(off..off + 4)?.try_into().ok()
    }

    /// Reinterpret pixel data as a typed RGBA slice.
    #[cfg(feature = "rgb")]
    pub fn as_rgba(&self) -> &[rgb::RGBA8] {
        use rgb::FromSlice as _;
        self.pixels.as_rgba()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGBA8> {
        imgref::ImgRef::new(self.as_rgba(), self.width as usize, self.height as usize)
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGBA8> {
        imgref::ImgVec::new(
            self.as_rgba().to_vec(),
            self.width as usize,
            self.height as usize,
        )
    }
}
