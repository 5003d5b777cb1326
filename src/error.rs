use alloc::string::String;

/// Errors from BMP decoding.
///
/// Every error is final for the input that produced it: decoding is
/// deterministic, so retrying the same bytes yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    /// A structural read needed more bytes than the input holds.
    #[error("unexpected end of input: needed {needed} bytes at offset {offset}")]
    UnexpectedEof { offset: usize, needed: usize },

    #[error("bad magic bytes: expected \"BM\", got {0:02x?}")]
    BadMagic([u8; 2]),

    /// Info header size other than 40 (OS/2, V4, V5 and friends).
    #[error("unsupported BMP info header size: {0} (only 40 is supported)")]
    UnsupportedHeaderVariant(u32),

    #[error("unsupported BMP compression type: {0}")]
    UnsupportedCompression(u32),

    #[error("unsupported BMP bit depth: {0}")]
    UnsupportedBitDepth(u16),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("truncated palette: need {needed} bytes, got {available}")]
    TruncatedPalette { needed: usize, available: usize },

    #[error("truncated pixel data: need {needed} bytes, got {available}")]
    TruncatedPixelData { needed: usize, available: usize },

    #[error("palette index {index} out of range (palette has {len} entries)")]
    PaletteIndexOutOfRange { index: usize, len: usize },

    #[error("image too large: {width}x{height}")]
    ImageTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}
