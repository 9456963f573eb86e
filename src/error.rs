use alloc::string::String;
use enough::StopReason;

/// Result alias for TGA image operations.
pub type Result<T> = core::result::Result<T, TgaError>;

/// Errors from image construction, pixel access, and TGA encoding/decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TgaError {
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("image too large to allocate: {width}x{height}")]
    DimensionsTooLarge { width: i32, height: i32 },

    #[error("pixel ({x}, {y}) outside {width}x{height} image")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("unsupported pixel format: {bits_per_pixel} bits per pixel")]
    UnsupportedFormat { bits_per_pixel: u8 },

    #[error("unsupported TGA data type code {0}")]
    UnsupportedDataType(u8),

    #[error("RLE stream overruns image: {decoded} pixels decoded, {declared} declared")]
    Overrun { declared: usize, decoded: usize },

    #[error("dimensions exceed TGA 16-bit range: {width}x{height}")]
    DimensionOverflow { width: i32, height: i32 },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel buffer size mismatch: need {needed} bytes, got {actual}")]
    BufferSizeMismatch { needed: usize, actual: usize },

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for TgaError {
    fn from(r: StopReason) -> Self {
        TgaError::Cancelled(r)
    }
}
