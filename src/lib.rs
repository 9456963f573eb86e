//! # zentga
//!
//! In-memory raster images and a TGA (Targa) decoder/encoder.
//!
//! An [`Image`] owns a packed, row-major pixel buffer in one of three
//! [`PixelFormat`]s (8-bit grayscale, BGR, BGRA) and offers coordinate
//! pixel access, clearing, and vertical flipping. The TGA codec reads and
//! writes those buffers, uncompressed or run-length encoded.
//!
//! ## Supported TGA subset
//!
//! - Data types 2 and 3 (uncompressed true-color / grayscale)
//! - Data types 10 and 11 (RLE true-color / grayscale)
//! - 8, 24, and 32 bits per pixel
//! - Top-left or bottom-left origin (decoded images are always top-left)
//!
//! ## Non-Goals
//!
//! - Color-mapped images (palettes are skipped, never applied)
//! - Right-to-left origins, TGA 2.0 extension and developer areas
//! - 15/16-bit pixels
//!
//! ## Usage
//!
//! ```no_run
//! use zentga::{Color, Image, PixelFormat};
//!
//! let mut img = Image::new(64, 32, PixelFormat::Bgra)?;
//! img.set(3, 4, Color::from_bgra(255, 0, 0, 255));
//! img.write_to_file("out.tga", true)?;
//!
//! let back = Image::load("out.tga")?;
//! assert_eq!(back.get(3, 4)?, img.get(3, 4)?);
//! # Ok::<(), zentga::TgaError>(())
//! ```
//!
//! In-memory and `no_std` use go through [`encode_tga`] / [`decode_tga`]
//! or the [`EncodeRequest`] / [`DecodeRequest`] builders, which take an
//! [`enough::Stop`] token for cooperative cancellation.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod info;
mod limits;
mod pixel;

pub mod tga;

mod decode;
mod encode;

#[cfg(feature = "std")]
mod io;

// Re-exports
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::{Result, TgaError};
pub use image::Image;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{Color, PixelFormat};
pub use tga::DataType;

use alloc::vec::Vec;

/// Decode TGA bytes into a top-left-origin [`Image`].
pub fn decode_tga(data: &[u8], stop: impl Stop) -> Result<Image> {
    tga::decode(data, None, &stop)
}

/// Encode `image` as TGA bytes, run-length encoded when `rle` is set.
pub fn encode_tga(image: &Image, rle: bool, stop: impl Stop) -> Result<Vec<u8>> {
    tga::encode(image, rle, &stop)
}

/// Read width, height, and format from a TGA header without decoding pixels.
pub fn probe(data: &[u8]) -> Result<ImageInfo> {
    tga::probe(data)
}
