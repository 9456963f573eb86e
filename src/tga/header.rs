//! The fixed 18-byte TGA header.

use crate::error::TgaError;
use crate::pixel::PixelFormat;

pub(crate) const HEADER_LEN: usize = 18;

/// Image descriptor bit: row 0 in the file is the top row.
pub(crate) const DESCRIPTOR_TOP_LEFT: u8 = 0x20;
/// Image descriptor alpha-bits value written for 32-bit images.
pub(crate) const DESCRIPTOR_ALPHA_8: u8 = 0x08;

/// TGA image data type codes handled by this crate.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// 2 — uncompressed true-color.
    TrueColor,
    /// 3 — uncompressed grayscale.
    Grayscale,
    /// 10 — run-length encoded true-color.
    RleTrueColor,
    /// 11 — run-length encoded grayscale.
    RleGrayscale,
}

impl DataType {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            2 => Some(Self::TrueColor),
            3 => Some(Self::Grayscale),
            10 => Some(Self::RleTrueColor),
            11 => Some(Self::RleGrayscale),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::TrueColor => 2,
            Self::Grayscale => 3,
            Self::RleTrueColor => 10,
            Self::RleGrayscale => 11,
        }
    }

    /// Data type for writing `format`, with or without RLE.
    pub fn for_format(format: PixelFormat, rle: bool) -> Self {
        match (format, rle) {
            (PixelFormat::Grayscale, false) => Self::Grayscale,
            (PixelFormat::Grayscale, true) => Self::RleGrayscale,
            (_, false) => Self::TrueColor,
            (_, true) => Self::RleTrueColor,
        }
    }

    pub fn is_rle(self) -> bool {
        matches!(self, Self::RleTrueColor | Self::RleGrayscale)
    }
}

/// Raw header fields in file order.
///
/// `data_type` stays a raw code so headers with unsupported codes can still
/// be parsed and reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct TgaHeader {
    pub id_length: u8,
    pub color_map_type: u8,
    pub data_type: u8,
    pub color_map_origin: i16,
    pub color_map_length: i16,
    pub color_map_depth: u8,
    pub origin_x: i16,
    pub origin_y: i16,
    pub width: i16,
    pub height: i16,
    pub bits_per_pixel: u8,
    pub image_descriptor: u8,
}

impl TgaHeader {
    /// Header for writing an image of the given size and format.
    pub fn for_image(
        width: i32,
        height: i32,
        format: PixelFormat,
        rle: bool,
    ) -> Result<Self, TgaError> {
        let (Ok(w), Ok(h)) = (i16::try_from(width), i16::try_from(height)) else {
            return Err(TgaError::DimensionOverflow { width, height });
        };
        let alpha = if format.has_alpha() {
            DESCRIPTOR_ALPHA_8
        } else {
            0
        };
        Ok(Self {
            data_type: DataType::for_format(format, rle).code(),
            width: w,
            height: h,
            bits_per_pixel: (format.bytes_per_pixel() * 8) as u8,
            image_descriptor: DESCRIPTOR_TOP_LEFT | alpha,
            ..Self::default()
        })
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, TgaError> {
        let b: &[u8; HEADER_LEN] = bytes
            .get(..HEADER_LEN)
            .and_then(|h| h.try_into().ok())
            .ok_or(TgaError::UnexpectedEof)?;
        let i16_at = |at: usize| i16::from_le_bytes([b[at], b[at + 1]]);
        Ok(Self {
            id_length: b[0],
            color_map_type: b[1],
            data_type: b[2],
            color_map_origin: i16_at(3),
            color_map_length: i16_at(5),
            color_map_depth: b[7],
            origin_x: i16_at(8),
            origin_y: i16_at(10),
            width: i16_at(12),
            height: i16_at(14),
            bits_per_pixel: b[16],
            image_descriptor: b[17],
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0] = self.id_length;
        out[1] = self.color_map_type;
        out[2] = self.data_type;
        out[3..5].copy_from_slice(&self.color_map_origin.to_le_bytes());
        out[5..7].copy_from_slice(&self.color_map_length.to_le_bytes());
        out[7] = self.color_map_depth;
        out[8..10].copy_from_slice(&self.origin_x.to_le_bytes());
        out[10..12].copy_from_slice(&self.origin_y.to_le_bytes());
        out[12..14].copy_from_slice(&self.width.to_le_bytes());
        out[14..16].copy_from_slice(&self.height.to_le_bytes());
        out[16] = self.bits_per_pixel;
        out[17] = self.image_descriptor;
        out
    }

    pub fn is_top_left(&self) -> bool {
        self.image_descriptor & DESCRIPTOR_TOP_LEFT != 0
    }

    /// Bytes between the header and the pixel data: image ID plus color map.
    pub fn preamble_len(&self) -> usize {
        let map_entries = self.color_map_length.max(0) as usize;
        let map_bytes = if self.color_map_type == 0 {
            0
        } else {
            map_entries * usize::from(self.color_map_depth).div_ceil(8)
        };
        usize::from(self.id_length) + map_bytes
    }

    /// Validate dimensions and pixel depth.
    pub fn image_layout(&self) -> Result<(i32, i32, PixelFormat), TgaError> {
        let (width, height) = (i32::from(self.width), i32::from(self.height));
        if width <= 0 || height <= 0 {
            return Err(TgaError::InvalidDimensions { width, height });
        }
        let format = PixelFormat::from_bytes_per_pixel(usize::from(self.bits_per_pixel >> 3))
            .ok_or(TgaError::UnsupportedFormat {
                bits_per_pixel: self.bits_per_pixel,
            })?;
        Ok((width, height, format))
    }
}
