//! TGA decoder for uncompressed and RLE true-color/grayscale images.

use enough::Stop;

use super::header::{DataType, HEADER_LEN, TgaHeader};
use crate::error::TgaError;
use crate::image::{Image, buffer_len};
use crate::limits::Limits;

/// Forward-only reader over the input bytes.
struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    fn skip(&mut self, n: usize) -> Result<(), TgaError> {
        self.take(n).map(|_| ())
    }

    fn read_u8(&mut self) -> Result<u8, TgaError> {
        let byte = *self
            .data
            .get(self.position)
            .ok_or(TgaError::UnexpectedEof)?;
        self.position += 1;
        Ok(byte)
    }

    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], TgaError> {
        let end = self
            .position
            .checked_add(n)
            .ok_or(TgaError::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.position..end)
            .ok_or(TgaError::UnexpectedEof)?;
        self.position = end;
        Ok(bytes)
    }
}

/// Decode a complete TGA file into a top-left-origin [`Image`].
pub(crate) fn decode_tga(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, TgaError> {
    let header = TgaHeader::parse(data)?;
    tracing::trace!(?header, "parsed TGA header");

    let (width, height, format) = header.image_layout()?;
    if let Some(limits) = limits {
        limits.check_image(width as u32, height as u32, format.bytes_per_pixel())?;
    }
    let data_type = DataType::from_code(header.data_type)
        .ok_or(TgaError::UnsupportedDataType(header.data_type))?;

    let mut cursor = ByteCursor::new(data);
    cursor.skip(HEADER_LEN + header.preamble_len())?;

    let bpp = format.bytes_per_pixel();
    let payload_len = buffer_len(width, height, format)?;
    if cursor.remaining() < min_payload_len(payload_len, bpp, data_type) {
        return Err(TgaError::UnexpectedEof);
    }

    let mut image = Image::new(width, height, format)?;

    stop.check()?;

    if data_type.is_rle() {
        unpack_rle(&mut cursor, image.pixels_mut(), bpp, stop)?;
    } else {
        let len = image.pixels().len();
        image.pixels_mut().copy_from_slice(cursor.take(len)?);
    }

    if !header.is_top_left() {
        image.flip_vertical();
    }

    Ok(image)
}

/// Fewest payload bytes that could describe `pixel_bytes` of pixels.
///
/// Raw data needs every byte. RLE needs at least one full 128-pixel
/// replicate packet (header byte plus one pixel) per 128 pixels.
fn min_payload_len(pixel_bytes: usize, bpp: usize, data_type: DataType) -> usize {
    if data_type.is_rle() {
        (pixel_bytes / bpp).div_ceil(super::encode::MAX_RUN) * (1 + bpp)
    } else {
        pixel_bytes
    }
}

/// Expand RLE packets into `out` until it holds exactly `out.len() / bpp` pixels.
///
/// Packets may span scanlines. A packet that would write past the end of
/// `out` is an [`TgaError::Overrun`].
fn unpack_rle(
    cursor: &mut ByteCursor<'_>,
    out: &mut [u8],
    bpp: usize,
    stop: &dyn Stop,
) -> Result<(), TgaError> {
    let declared = out.len() / bpp;
    let mut decoded = 0usize;
    let mut packets = 0usize;

    while decoded < declared {
        if packets % 1024 == 0 {
            stop.check()?;
        }
        packets += 1;

        let packet = cursor.read_u8()?;
        let count = usize::from(packet & 0x7F) + 1;
        if decoded + count > declared {
            return Err(TgaError::Overrun {
                declared,
                decoded: decoded + count,
            });
        }

        let dst = &mut out[decoded * bpp..(decoded + count) * bpp];
        if packet & 0x80 == 0 {
            dst.copy_from_slice(cursor.take(count * bpp)?);
        } else {
            let pixel = cursor.take(bpp)?;
            for chunk in dst.chunks_exact_mut(bpp) {
                chunk.copy_from_slice(pixel);
            }
        }
        decoded += count;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{Color, PixelFormat};
    use alloc::vec::Vec;
    use enough::Unstoppable;

    fn header_bytes(width: i16, height: i16, bpp: u8, data_type: u8, descriptor: u8) -> Vec<u8> {
        TgaHeader {
            data_type,
            width,
            height,
            bits_per_pixel: bpp,
            image_descriptor: descriptor,
            ..TgaHeader::default()
        }
        .to_bytes()
        .to_vec()
    }

    #[test]
    fn rle_literal_and_replicate() {
        let mut data = header_bytes(3, 2, 8, 11, 0x20);
        data.extend_from_slice(&[0x02, 1, 2, 3, 0x82, 9]);
        let img = decode_tga(&data, None, &Unstoppable).unwrap();
        assert_eq!(img.format(), PixelFormat::Grayscale);
        assert_eq!(img.pixels(), &[1, 2, 3, 9, 9, 9]);
    }

    #[test]
    fn rle_packet_may_span_rows() {
        let mut data = header_bytes(2, 2, 8, 11, 0x20);
        data.extend_from_slice(&[0x00, 1, 0x82, 4]);
        let img = decode_tga(&data, None, &Unstoppable).unwrap();
        assert_eq!(img.pixels(), &[1, 4, 4, 4]);
    }

    #[test]
    fn rle_overrun_detected() {
        let mut data = header_bytes(2, 2, 8, 11, 0x20);
        data.extend_from_slice(&[0x84, 7]);
        let err = decode_tga(&data, None, &Unstoppable).unwrap_err();
        assert!(matches!(
            err,
            TgaError::Overrun {
                declared: 4,
                decoded: 5
            }
        ));
    }

    #[test]
    fn rle_truncated_stream() {
        let mut data = header_bytes(2, 2, 24, 10, 0x20);
        data.extend_from_slice(&[0x81, 1, 2, 3]);
        assert!(matches!(
            decode_tga(&data, None, &Unstoppable),
            Err(TgaError::UnexpectedEof)
        ));
    }

    #[test]
    fn raw_truncated_payload() {
        let mut data = header_bytes(2, 2, 24, 2, 0x20);
        data.extend_from_slice(&[0; 11]);
        assert!(matches!(
            decode_tga(&data, None, &Unstoppable),
            Err(TgaError::UnexpectedEof)
        ));
    }

    #[test]
    fn short_payload_rejected_before_allocation() {
        // A 32767x32767 BGRA buffer is 4 GiB. No payload means no allocation.
        for data_type in [2, 10] {
            let data = header_bytes(i16::MAX, i16::MAX, 32, data_type, 0x28);
            assert!(matches!(
                decode_tga(&data, None, &Unstoppable),
                Err(TgaError::UnexpectedEof)
            ));
        }
    }

    #[test]
    fn minimal_rle_payload_is_accepted() {
        // 300 gray pixels in three replicate packets: 128 + 128 + 44.
        let mut data = header_bytes(300, 1, 8, 11, 0x20);
        data.extend_from_slice(&[0xFF, 1, 0xFF, 2, 0x80 | 43, 3]);
        let img = decode_tga(&data, None, &Unstoppable).unwrap();
        assert_eq!(&img.pixels()[126..130], &[1, 1, 2, 2]);
        assert_eq!(img.pixels()[299], 3);
    }

    #[test]
    fn bottom_left_rle_is_flipped() {
        // Bottom row first: a replicate packet, then a literal top row.
        let mut data = header_bytes(3, 2, 24, 10, 0x00);
        data.extend_from_slice(&[0x82, 7, 8, 9]);
        data.extend_from_slice(&[0x02, 1, 1, 1, 2, 2, 2, 3, 3, 3]);
        let img = decode_tga(&data, None, &Unstoppable).unwrap();
        assert_eq!(
            img.pixels(),
            &[1, 1, 1, 2, 2, 2, 3, 3, 3, 7, 8, 9, 7, 8, 9, 7, 8, 9]
        );
        assert_eq!(img.get(0, 1).unwrap(), Color::from_bgra(7, 8, 9, 0xFF));
    }

    #[test]
    fn bottom_left_origin_is_flipped() {
        let mut data = header_bytes(2, 3, 8, 3, 0x00);
        data.extend_from_slice(&[1, 1, 2, 2, 3, 3]);
        let img = decode_tga(&data, None, &Unstoppable).unwrap();
        assert_eq!(img.pixels(), &[3, 3, 2, 2, 1, 1]);
    }

    #[test]
    fn image_id_and_color_map_are_skipped() {
        let mut data = TgaHeader {
            id_length: 3,
            color_map_type: 1,
            data_type: 3,
            color_map_length: 2,
            color_map_depth: 16,
            width: 2,
            height: 1,
            bits_per_pixel: 8,
            image_descriptor: 0x20,
            ..TgaHeader::default()
        }
        .to_bytes()
        .to_vec();
        data.extend_from_slice(b"abc");
        data.extend_from_slice(&[0xEE; 4]);
        data.extend_from_slice(&[5, 6]);
        let img = decode_tga(&data, None, &Unstoppable).unwrap();
        assert_eq!(img.pixels(), &[5, 6]);
    }

    #[test]
    fn unsupported_data_type() {
        let mut data = header_bytes(1, 1, 8, 1, 0x20);
        data.push(0);
        assert!(matches!(
            decode_tga(&data, None, &Unstoppable),
            Err(TgaError::UnsupportedDataType(1))
        ));
    }

    #[test]
    fn non_positive_dimensions() {
        let data = header_bytes(0, 4, 32, 2, 0x28);
        assert!(matches!(
            decode_tga(&data, None, &Unstoppable),
            Err(TgaError::InvalidDimensions { width: 0, height: 4 })
        ));
        let data = header_bytes(4, -3, 32, 2, 0x28);
        assert!(matches!(
            decode_tga(&data, None, &Unstoppable),
            Err(TgaError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn limits_checked_before_allocation() {
        let data = header_bytes(1000, 1000, 32, 2, 0x28);
        let limits = Limits {
            max_memory_bytes: Some(1 << 20),
            ..Default::default()
        };
        assert!(matches!(
            decode_tga(&data, Some(&limits), &Unstoppable),
            Err(TgaError::LimitExceeded(_))
        ));
    }
}
