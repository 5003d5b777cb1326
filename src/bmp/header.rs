//! Header reader: the 14-byte file header and 40-byte `BITMAPINFOHEADER`.
//!
//! Only structural completeness is checked here. Field values are judged
//! by the validator.

use crate::error::BmpError;

/// Little-endian `u16` at `offset`.
pub(crate) fn u16_le(data: &[u8], offset: usize) -> Result<u16, BmpError> {
    let bytes = fixed::<2>(data, offset)?;
    Ok(u16::from_le_bytes(bytes))
}

/// Little-endian `u32` at `offset`.
pub(crate) fn u32_le(data: &[u8], offset: usize) -> Result<u32, BmpError> {
    let bytes = fixed::<4>(data, offset)?;
    Ok(u32::from_le_bytes(bytes))
}

fn fixed<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], BmpError> {
    offset
        .checked_add(N)
        .and_then(|end| data.get(offset..end))
        .and_then(|s| s.try_into().ok())
        .ok_or(BmpError::UnexpectedEof { offset, needed: N })
}

// ── Cursor for reading from &[u8] ───────────────────────────────────

/// Forward-only read cursor over a fully buffered input.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        let bytes = fixed::<N>(self.data, self.pos)?;
        self.pos += N;
        Ok(bytes)
    }

    fn get_u16_le(&mut self) -> Result<u16, BmpError> {
        let val = u16_le(self.data, self.pos)?;
        self.pos += 2;
        Ok(val)
    }

    fn get_u32_le(&mut self) -> Result<u32, BmpError> {
        let val = u32_le(self.data, self.pos)?;
        self.pos += 4;
        Ok(val)
    }
}

// ── Parsed header ───────────────────────────────────────────────────

/// Raw BMP file header and info header, exactly as stored.
///
/// Constructed once per decode by [`BitmapHeader::parse`] and never mutated
/// afterwards. Fields hold whatever the file says; call
/// [`BitmapHeader::validate`] before trusting them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapHeader {
    pub magic: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset of the pixel array from the start of the file.
    pub data_offset: u32,
    /// Info header size. 40 for `BITMAPINFOHEADER`.
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    /// Size of the pixel array; 0 means "derive from dimensions".
    pub image_data_size: u32,
    pub h_pixels_per_meter: u32,
    pub v_pixels_per_meter: u32,
    pub colors_used: u32,
    pub colors_required: u32,
}

impl BitmapHeader {
    /// Read the 54-byte header region from the start of `data`.
    ///
    /// Fails with [`BmpError::UnexpectedEof`] when any field lies past the
    /// end of the input. Never inspects field values.
    pub fn parse(data: &[u8]) -> Result<Self, BmpError> {
        Self::read(&mut Cursor::new(data))
    }

    /// Read from `cursor`, leaving it exactly 54 bytes further on success.
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> Result<Self, BmpError> {
        Ok(Self {
            magic: cursor.read_fixed_bytes::<2>()?,
            file_size: cursor.get_u32_le()?,
            reserved1: cursor.get_u16_le()?,
            reserved2: cursor.get_u16_le()?,
            data_offset: cursor.get_u32_le()?,
            header_size: cursor.get_u32_le()?,
            width: cursor.get_u32_le()?,
            height: cursor.get_u32_le()?,
            planes: cursor.get_u16_le()?,
            bits_per_pixel: cursor.get_u16_le()?,
            compression: cursor.get_u32_le()?,
            image_data_size: cursor.get_u32_le()?,
            h_pixels_per_meter: cursor.get_u32_le()?,
            v_pixels_per_meter: cursor.get_u32_le()?,
            colors_used: cursor.get_u32_le()?,
            colors_required: cursor.get_u32_le()?,
        })
    }
}
