use crate::error::TgaError;
use crate::pixel::PixelFormat;
use crate::tga::DataType;

/// Header-level facts about a TGA file, read without decoding pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: i32,
    pub height: i32,
    pub format: PixelFormat,
    pub data_type: DataType,
    /// Whether row 0 in the file is the top row.
    pub top_left: bool,
}

impl ImageInfo {
    /// Probe TGA header bytes.
    ///
    /// Fails on the same header problems [`crate::decode_tga`] would report.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TgaError> {
        crate::tga::probe(data)
    }

    /// Whether the pixel data is run-length encoded.
    pub fn is_rle(&self) -> bool {
        self.data_type.is_rle()
    }
}
