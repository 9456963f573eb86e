//! TGA (Targa) decoder and encoder (internal).
//!
//! Covers the no-palette subset: 8-bit grayscale, 24-bit BGR and 32-bit
//! BGRA, uncompressed or run-length encoded, top-left or bottom-left
//! origin. Image ID fields and color-map blocks in foreign files are
//! skipped. Decoded images are always top-left origin in memory; encoded
//! files are always written top-left.
//!
//! Use top-level [`crate::decode_tga`], [`crate::encode_tga`], etc.

mod decode;
mod encode;
mod header;

pub use header::DataType;

use crate::error::TgaError;
use crate::image::Image;
use crate::info::ImageInfo;
use crate::limits::Limits;
use alloc::vec::Vec;
use enough::Stop;

/// Read the header only.
pub(crate) fn probe(data: &[u8]) -> Result<ImageInfo, TgaError> {
    let header = header::TgaHeader::parse(data)?;
    let (width, height, format) = header.image_layout()?;
    let data_type = DataType::from_code(header.data_type)
        .ok_or(TgaError::UnsupportedDataType(header.data_type))?;
    Ok(ImageInfo {
        width,
        height,
        format,
        data_type,
        top_left: header.is_top_left(),
    })
}

/// Decode TGA data.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, TgaError> {
    decode::decode_tga(data, limits, stop)
}

/// Encode to TGA.
pub(crate) fn encode(image: &Image, rle: bool, stop: &dyn Stop) -> Result<Vec<u8>, TgaError> {
    encode::encode_tga(image, rle, stop)
}
