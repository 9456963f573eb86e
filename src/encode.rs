use alloc::vec::Vec;
use enough::Stop;

use crate::error::TgaError;
use crate::image::Image;

/// Builder for encoding an [`Image`] as TGA.
///
/// Run-length encoding is on by default.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    rle: bool,
}

impl Default for EncodeRequest {
    fn default() -> Self {
        Self { rle: true }
    }
}

impl EncodeRequest {
    /// RLE-compressed output (data type 10 or 11).
    pub fn new() -> Self {
        Self::default()
    }

    /// Uncompressed output (data type 2 or 3).
    pub fn uncompressed() -> Self {
        Self { rle: false }
    }

    pub fn with_rle(mut self, rle: bool) -> Self {
        self.rle = rle;
        self
    }

    pub fn rle(&self) -> bool {
        self.rle
    }

    /// Encode to an in-memory TGA file.
    pub fn encode(&self, image: &Image, stop: impl Stop) -> Result<Vec<u8>, TgaError> {
        crate::tga::encode(image, self.rle, &stop)
    }

    /// Encode and write to `path`, replacing any existing file.
    ///
    /// Nothing is written unless encoding succeeds; if the write itself
    /// fails, the partial file is removed.
    #[cfg(feature = "std")]
    pub fn write_to_file(
        &self,
        image: &Image,
        path: impl AsRef<std::path::Path>,
        stop: impl Stop,
    ) -> Result<(), TgaError> {
        let bytes = self.encode(image, stop)?;
        crate::io::write_file(path.as_ref(), &bytes)
    }
}
