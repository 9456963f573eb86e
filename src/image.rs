//! Owned raster image backed by a packed, row-major pixel buffer.

use alloc::vec::Vec;

use crate::error::{Result, TgaError};
use crate::pixel::{Color, PixelFormat};

/// A `width` x `height` image whose buffer holds rows top to bottom,
/// each row `bytes_per_row()` bytes long with no padding.
///
/// The buffer length is fixed at construction and always equals
/// `height * width * format.bytes_per_pixel()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: i32,
    height: i32,
    format: PixelFormat,
    buffer: Vec<u8>,
}

impl Image {
    /// Create a zero-filled image.
    pub fn new(width: i32, height: i32, format: PixelFormat) -> Result<Self> {
        let len = buffer_len(width, height, format)?;
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|_| TgaError::DimensionsTooLarge { width, height })?;
        buffer.resize(len, 0);
        Ok(Self {
            width,
            height,
            format,
            buffer,
        })
    }

    /// Adopt an existing pixel buffer, which must be exactly the size the
    /// dimensions and format require.
    pub fn from_pixels(
        width: i32,
        height: i32,
        format: PixelFormat,
        pixels: Vec<u8>,
    ) -> Result<Self> {
        let needed = buffer_len(width, height, format)?;
        if pixels.len() != needed {
            return Err(TgaError::BufferSizeMismatch {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            buffer: pixels,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn bytes_per_row(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel()
    }

    /// Raw pixel bytes, rows top to bottom.
    pub fn pixels(&self) -> &[u8] {
        &self.buffer
    }

    /// Mutable pixel bytes. The slice length is fixed.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.buffer
    }

    /// Read the pixel at (`x`, `y`).
    ///
    /// Returns [`TgaError::OutOfBounds`] outside the image. Channels the
    /// format lacks read as `0xFF`.
    pub fn get(&self, x: i32, y: i32) -> Result<Color> {
        let offset = self.offset(x, y).ok_or(TgaError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        let bpp = self.format.bytes_per_pixel();
        Ok(Color::from_channels(&self.buffer[offset..offset + bpp]))
    }

    /// Write `color` at (`x`, `y`), storing only the channels the format has.
    ///
    /// Coordinates outside the image are ignored: callers drawing shapes
    /// that overhang the edge rely on writes there being no-ops.
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        let Some(offset) = self.offset(x, y) else {
            return;
        };
        let bpp = self.format.bytes_per_pixel();
        self.buffer[offset..offset + bpp].copy_from_slice(&color.to_bgra_bytes()[..bpp]);
    }

    /// Zero every byte of the buffer.
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Mirror the image top to bottom in place.
    pub fn flip_vertical(&mut self) {
        let stride = self.bytes_per_row();
        let rows = self.height as usize;
        for top in 0..rows / 2 {
            let bottom = rows - 1 - top;
            let (upper, lower) = self.buffer.split_at_mut(bottom * stride);
            upper[top * stride..(top + 1) * stride].swap_with_slice(&mut lower[..stride]);
        }
    }

    /// Copy into an [`imgref::ImgVec`] of BGRA pixels, padding missing
    /// channels with `0xFF` as [`get`](Self::get) does.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::alt::BGRA8> {
        let bpp = self.format.bytes_per_pixel();
        let pixels = self
            .buffer
            .chunks_exact(bpp)
            .map(|px| Color::from_channels(px).into())
            .collect();
        imgref::ImgVec::new(pixels, self.width as usize, self.height as usize)
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if !(0..self.width).contains(&x) || !(0..self.height).contains(&y) {
            return None;
        }
        Some(y as usize * self.bytes_per_row() + x as usize * self.format.bytes_per_pixel())
    }
}

/// Buffer size for the given dimensions. Sizes past `isize::MAX` can never
/// be allocated and are rejected up front.
pub(crate) fn buffer_len(width: i32, height: i32, format: PixelFormat) -> Result<usize> {
    if width <= 0 || height <= 0 {
        return Err(TgaError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(format.bytes_per_pixel()))
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or(TgaError::DimensionsTooLarge { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn zero_width_is_rejected() {
        assert!(matches!(
            Image::new(0, 4, PixelFormat::Bgr),
            Err(TgaError::InvalidDimensions { width: 0, height: 4 })
        ));
        assert!(matches!(
            Image::new(4, -1, PixelFormat::Bgr),
            Err(TgaError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn unallocatable_size_is_an_error() {
        for format in [PixelFormat::Grayscale, PixelFormat::Bgr, PixelFormat::Bgra] {
            assert!(matches!(
                Image::new(i32::MAX, i32::MAX, format),
                Err(TgaError::DimensionsTooLarge { .. })
            ));
        }
        assert!(matches!(
            Image::from_pixels(i32::MAX, i32::MAX, PixelFormat::Bgra, vec![0; 4]),
            Err(TgaError::DimensionsTooLarge { .. })
        ));
    }

    #[test]
    fn new_image_is_zeroed() {
        let img = Image::new(3, 2, PixelFormat::Bgra).unwrap();
        assert_eq!(img.pixels().len(), 24);
        assert_eq!(img.bytes_per_row(), 12);
        assert!(img.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn from_pixels_checks_length() {
        let err = Image::from_pixels(2, 2, PixelFormat::Bgr, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            TgaError::BufferSizeMismatch {
                needed: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn set_then_get_bgra() {
        let mut img = Image::new(4, 3, PixelFormat::Bgra).unwrap();
        let c = Color::from_bgra(1, 2, 3, 4);
        img.set(2, 1, c);
        assert_eq!(img.get(2, 1).unwrap(), c);
        let off = img.bytes_per_row() + 2 * 4;
        assert_eq!(&img.pixels()[off..off + 4], &[1, 2, 3, 4]);
    }

    #[test]
    fn missing_channels_read_as_ff() {
        let mut img = Image::new(2, 2, PixelFormat::Bgr).unwrap();
        img.set(1, 1, Color::from_bgra(10, 20, 30, 40));
        assert_eq!(img.get(1, 1).unwrap(), Color::from_bgra(10, 20, 30, 0xFF));

        let mut gray = Image::new(2, 2, PixelFormat::Grayscale).unwrap();
        gray.set(0, 1, Color::gray(77));
        assert_eq!(gray.pixels(), &[0, 0, 77, 0]);
        assert_eq!(gray.get(0, 1).unwrap().packed(), 0x4DFF_FFFF);
    }

    #[test]
    fn out_of_bounds_read_fails() {
        let img = Image::new(2, 3, PixelFormat::Grayscale).unwrap();
        for (x, y) in [(-1, 0), (2, 0), (0, -1), (0, 3)] {
            assert!(matches!(
                img.get(x, y),
                Err(TgaError::OutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn out_of_bounds_write_is_ignored() {
        let mut img = Image::new(2, 3, PixelFormat::Bgr).unwrap();
        let before = img.clone();
        for (x, y) in [(-1, 0), (2, 0), (0, -1), (0, 3), (i32::MAX, i32::MIN)] {
            img.set(x, y, Color::WHITE);
        }
        assert_eq!(img, before);
    }

    #[test]
    fn clear_zeroes_buffer() {
        let mut img = Image::from_pixels(2, 1, PixelFormat::Bgr, vec![9; 6]).unwrap();
        img.clear();
        assert_eq!(img.pixels(), &[0; 6]);
    }

    #[test]
    fn flip_swaps_rows() {
        let rows: Vec<u8> = (0..5).flat_map(|r| [r, r * 10]).collect();
        let mut img = Image::from_pixels(2, 5, PixelFormat::Grayscale, rows).unwrap();
        img.flip_vertical();
        assert_eq!(img.pixels(), &[4, 40, 3, 30, 2, 20, 1, 10, 0, 0]);
    }

    #[test]
    fn flip_twice_is_identity() {
        let pixels: Vec<u8> = (0..4 * 4 * 3).map(|i| i as u8).collect();
        let mut img = Image::from_pixels(4, 4, PixelFormat::Bgr, pixels.clone()).unwrap();
        img.flip_vertical();
        assert_ne!(img.pixels(), &pixels[..]);
        img.flip_vertical();
        assert_eq!(img.pixels(), &pixels[..]);
    }

    #[test]
    fn single_row_flip_is_noop() {
        let mut img = Image::from_pixels(3, 1, PixelFormat::Grayscale, vec![1, 2, 3]).unwrap();
        img.flip_vertical();
        assert_eq!(img.pixels(), &[1, 2, 3]);
    }
}
