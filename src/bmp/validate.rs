//! Format validator: decides whether a parsed header is a variant we decode.

use super::header::BitmapHeader;
use crate::error::BmpError;

/// Size of `BITMAPINFOHEADER`, the only info header accepted.
pub(crate) const INFO_HEADER_V3_LEN: u32 = 40;

/// `BI_RGB`, uncompressed.
const COMPRESSION_RGB: u32 = 0;

/// Source pixel encoding of a validated header.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 32 bpp, bytes stored blue, green, red, alpha.
    Bgra32,
    /// 24 bpp, bytes stored blue, green, red.
    Bgr24,
    /// 8 bpp indices into a 256-entry palette.
    Indexed8,
    /// 4 bpp indices into a 16-entry palette, high nibble first.
    Indexed4,
}

impl PixelFormat {
    fn from_bits_per_pixel(bpp: u16) -> Option<Self> {
        match bpp {
            32 => Some(Self::Bgra32),
            24 => Some(Self::Bgr24),
            8 => Some(Self::Indexed8),
            4 => Some(Self::Indexed4),
            _ => None,
        }
    }

    pub fn bits_per_pixel(self) -> u16 {
        match self {
            Self::Bgra32 => 32,
            Self::Bgr24 => 24,
            Self::Indexed8 => 8,
            Self::Indexed4 => 4,
        }
    }

    /// Number of palette entries that follow the header. Always the maximum
    /// for the depth; the header's colors-used field is not consulted.
    pub fn palette_len(self) -> usize {
        match self {
            Self::Bgra32 | Self::Bgr24 => 0,
            Self::Indexed8 => 256,
            Self::Indexed4 => 16,
        }
    }

    pub fn is_indexed(self) -> bool {
        self.palette_len() > 0
    }
}

impl BitmapHeader {
    /// Check the header against the supported set.
    ///
    /// Rules run in a fixed order (magic, info header size, bit depth,
    /// compression, dimensions), so the first violated rule is the one
    /// reported.
    pub fn validate(&self) -> Result<PixelFormat, BmpError> {
        if self.magic != *b"BM" {
            return Err(BmpError::BadMagic(self.magic));
        }
        if self.header_size != INFO_HEADER_V3_LEN {
            return Err(BmpError::UnsupportedHeaderVariant(self.header_size));
        }
        let format = PixelFormat::from_bits_per_pixel(self.bits_per_pixel)
            .ok_or(BmpError::UnsupportedBitDepth(self.bits_per_pixel))?;
        if self.compression != COMPRESSION_RGB {
            return Err(BmpError::UnsupportedCompression(self.compression));
        }
        if self.width == 0 || self.height == 0 {
            return Err(BmpError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(format)
    }
}
