//! # zenbmp
//!
//! Decoder for uncompressed Windows Bitmap (BMP) files with a 40-byte
//! `BITMAPINFOHEADER`, producing a top-down RGBA8 raster.
//!
//! ## Supported Input
//!
//! - **32 bpp**: BGRA/BGRX, alpha handled per [`AlphaMode`]
//! - **24 bpp**: BGR, alpha forced opaque
//! - **8 bpp**: 256-entry palette
//! - **4 bpp**: 16-entry palette, two pixels per byte
//!
//! Rows are stored bottom-up and padded to 4 bytes in the file; the output is
//! always top-down with a row stride of exactly `4 * width`.
//!
//! ## Non-Goals
//!
//! - RLE4/RLE8 and bitfield compression
//! - OS/2, V4 and V5 headers (rejected, never misparsed)
//! - ICC color profiles
//! - Encoding
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp::{DecodeRequest, ImageInfo, Limits};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Sniff and probe without decoding
//! if zenbmp::is_bmp(data) {
//!     let info = ImageInfo::from_bytes(data)?;
//!     println!("{}x{} at {} bpp", info.width, info.height, info.bits_per_pixel);
//! }
//!
//! // Decode with a pixel cap
//! let limits = Limits {
//!     max_pixels: Some(64 * 1024 * 1024),
//!     ..Default::default()
//! };
//! let image = DecodeRequest::new(data).with_limits(&limits).decode()?;
//! assert_eq!(image.pixels().len(), image.row_stride() * image.height as usize);
//! # Ok::<(), zenbmp::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod decode;
mod error;
mod info;
mod limits;
mod pixel;

// Re-exports
pub use bmp::{BitmapHeader, Palette, PaletteEntry, PixelFormat};
pub use decode::{AlphaMode, DecodeRequest, DecodedImage};
pub use error::BmpError;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::PixelLayout;

/// Size of the file header plus the `BITMAPINFOHEADER`.
pub const HEADER_LEN: usize = 54;

/// Decode a complete BMP file to RGBA8 with default settings.
pub fn decode_bmp(data: &[u8]) -> Result<DecodedImage, BmpError> {
    DecodeRequest::new(data).decode()
}

/// Read the color table of an indexed (8 or 4 bpp) BMP.
///
/// Returns `Ok(None)` for 32 and 24 bpp files. The header is validated the
/// same way [`decode_bmp`] validates it, but pixel data is not read.
pub fn read_palette(data: &[u8]) -> Result<Option<Palette>, BmpError> {
    bmp::read_palette(data)
}

/// Cheap format sniff: true when the first two bytes are `BM`.
///
/// This is a dispatch hint only. A `true` result does not mean the file
/// will decode; [`decode_bmp`] performs the real validation.
pub fn is_bmp(data: &[u8]) -> bool {
    data.starts_with(b"BM")
}
