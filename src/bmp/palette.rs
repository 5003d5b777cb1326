//! Palette loader for indexed (8 and 4 bpp) images.

use alloc::vec::Vec;

use super::validate::PixelFormat;
use crate::HEADER_LEN;
use crate::error::BmpError;

/// Bytes per color table entry in a `BITMAPINFOHEADER` file.
const ENTRY_LEN: usize = 4;

/// One color table entry, stored blue, green, red, reserved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaletteEntry {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    /// Fourth byte of the entry. Usually zero and never used as alpha.
    pub reserved: u8,
}

impl PaletteEntry {
    /// Opaque RGBA for this entry.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.red, self.green, self.blue, 255]
    }
}

/// Color table of an indexed image, in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Read `count` 4-byte entries starting at `offset`.
    pub(crate) fn read(data: &[u8], offset: usize, count: usize) -> Result<Self, BmpError> {
        let needed = count * ENTRY_LEN;
        let available = data.len().saturating_sub(offset);
        let bytes = data
            .get(offset..)
            .and_then(|rest| rest.get(..needed))
            .ok_or(BmpError::TruncatedPalette { needed, available })?;

        let entries = bytes
            .chunks_exact(ENTRY_LEN)
            .map(|e| PaletteEntry {
                blue: e[0],
                green: e[1],
                red: e[2],
                reserved: e[3],
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a pixel index. An index past the end is an error, never a clamp.
    #[inline]
    pub fn lookup(&self, index: u8) -> Result<PaletteEntry, BmpError> {
        self.entries
            .get(usize::from(index))
            .copied()
            .ok_or(BmpError::PaletteIndexOutOfRange {
                index: usize::from(index),
                len: self.entries.len(),
            })
    }
}

/// Source pixel encoding together with the color table it needs.
///
/// Direct-color depths carry nothing; indexed depths always carry their
/// palette, so the pixel decoder never has to ask whether one is present.
#[derive(Clone, Debug)]
pub(crate) enum SourceFormat {
    Bgra32,
    Bgr24,
    Indexed8(Palette),
    Indexed4(Palette),
}

impl SourceFormat {
    pub(crate) fn bits_per_pixel(&self) -> u16 {
        match self {
            Self::Bgra32 => 32,
            Self::Bgr24 => 24,
            Self::Indexed8(_) => 8,
            Self::Indexed4(_) => 4,
        }
    }

    /// Offset of the first byte after the header and color table.
    pub(crate) fn body_offset(&self) -> usize {
        match self {
            Self::Bgra32 | Self::Bgr24 => HEADER_LEN,
            Self::Indexed8(p) | Self::Indexed4(p) => HEADER_LEN + p.len() * ENTRY_LEN,
        }
    }

    pub(crate) fn into_palette(self) -> Option<Palette> {
        match self {
            Self::Bgra32 | Self::Bgr24 => None,
            Self::Indexed8(p) | Self::Indexed4(p) => Some(p),
        }
    }
}

/// Load the color table that `format` requires, reading from right after
/// the 54-byte header region. Direct-color formats read nothing.
pub(crate) fn load(data: &[u8], format: PixelFormat) -> Result<SourceFormat, BmpError> {
    Ok(match format {
        PixelFormat::Bgra32 => SourceFormat::Bgra32,
        PixelFormat::Bgr24 => SourceFormat::Bgr24,
        PixelFormat::Indexed8 => {
            SourceFormat::Indexed8(Palette::read(data, HEADER_LEN, format.palette_len())?)
        }
        PixelFormat::Indexed4 => {
            SourceFormat::Indexed4(Palette::read(data, HEADER_LEN, format.palette_len())?)
        }
    })
}
