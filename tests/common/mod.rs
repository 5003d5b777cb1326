//! In-memory BMP construction for tests.

#![allow(dead_code)]

/// Builds a `BITMAPINFOHEADER` BMP byte stream.
///
/// Rows are given top-down as already-packed stored bytes (no padding);
/// `build` writes them bottom-up and pads each to a multiple of 4.
#[derive(Clone, Debug)]
pub struct BmpBuilder {
    pub magic: [u8; 2],
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub bpp: u16,
    pub compression: u32,
    pub data_offset: Option<u32>,
    pub palette: Vec<[u8; 4]>,
    pub rows: Vec<Vec<u8>>,
}

impl BmpBuilder {
    pub fn new(width: u32, height: u32, bpp: u16) -> Self {
        Self {
            magic: *b"BM",
            header_size: 40,
            width,
            height,
            bpp,
            compression: 0,
            data_offset: None,
            palette: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Palette entries as `[b, g, r, reserved]`.
    pub fn palette(mut self, entries: Vec<[u8; 4]>) -> Self {
        self.palette = entries;
        self
    }

    /// Top-down packed rows.
    pub fn rows(mut self, rows: Vec<Vec<u8>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn stride(&self) -> usize {
        (self.width as usize * self.bpp as usize).div_ceil(32) * 4
    }

    pub fn build(&self) -> Vec<u8> {
        let stride = self.stride();
        let palette_bytes = self.palette.len() * 4;
        let pixel_data_size = stride * self.rows.len();
        let data_offset = self
            .data_offset
            .unwrap_or((54 + palette_bytes) as u32);
        let file_size = data_offset as usize + pixel_data_size;

        let mut out = Vec::with_capacity(file_size);

        // File header (14 bytes)
        out.extend_from_slice(&self.magic);
        out.extend_from_slice(&(file_size as u32).to_le_bytes());
        out.extend_from_slice(&[0u8; 4]); // reserved
        out.extend_from_slice(&data_offset.to_le_bytes());

        // DIB header (BITMAPINFOHEADER, 40 bytes)
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // planes
        out.extend_from_slice(&self.bpp.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
        out.extend_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
        out.extend_from_slice(&2835u32.to_le_bytes()); // v resolution
        out.extend_from_slice(&(self.palette.len() as u32).to_le_bytes()); // colors used
        out.extend_from_slice(&0u32.to_le_bytes()); // important colors

        for entry in &self.palette {
            out.extend_from_slice(entry);
        }
        out.resize(out.len().max(data_offset as usize), 0);

        for row in self.rows.iter().rev() {
            let start = out.len();
            out.extend_from_slice(row);
            // Nonzero padding so a decoder that reads it shows up in output.
            out.resize(start + stride, 0xEE);
        }
        out
    }
}

/// Packs top-down RGB pixels as 24 bpp BGR rows.
pub fn bgr_rows(pixels: &[[u8; 3]], width: usize) -> Vec<Vec<u8>> {
    pixels
        .chunks_exact(width)
        .map(|row| row.iter().flat_map(|&[r, g, b]| [b, g, r]).collect())
        .collect()
}

/// Packs top-down RGBA pixels as 32 bpp BGRA rows.
pub fn bgra_rows(pixels: &[[u8; 4]], width: usize) -> Vec<Vec<u8>> {
    pixels
        .chunks_exact(width)
        .map(|row| row.iter().flat_map(|&[r, g, b, a]| [b, g, r, a]).collect())
        .collect()
}

/// Packs top-down 4-bit indices, high nibble first. Odd widths leave
/// `low_pad` in the final low nibble.
pub fn nibble_rows(indices: &[u8], width: usize, low_pad: u8) -> Vec<Vec<u8>> {
    indices
        .chunks_exact(width)
        .map(|row| {
            row.chunks(2)
                .map(|pair| (pair[0] << 4) | pair.get(1).copied().unwrap_or(low_pad))
                .collect()
        })
        .collect()
}

/// Distinct palette: entry `i` is red `i`, green `255 - i`, blue `i / 2`.
pub fn gradient_palette(len: usize) -> Vec<[u8; 4]> {
    (0..len)
        .map(|i| {
            let i = i as u8;
            [i / 2, 255 - i, i, 0]
        })
        .collect()
}

pub fn gradient_rgba(i: u8) -> [u8; 4] {
    [i, 255 - i, i / 2, 255]
}

/// Xorshift noise, deterministic.
pub fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}
