use crate::error::TgaError;

/// Resource limits applied to a TGA header before its pixel buffer is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size in bytes of the decoded pixel buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject an image of `width`x`height` at `bytes_per_pixel` if it exceeds any limit.
    pub(crate) fn check_image(
        &self,
        width: u32,
        height: u32,
        bytes_per_pixel: usize,
    ) -> Result<(), TgaError> {
        let exceeded = |what: &str, value: u64, max: u64| {
            TgaError::LimitExceeded(alloc::format!("{what} {value} exceeds limit {max}"))
        };

        let (w, h) = (u64::from(width), u64::from(height));
        if let Some(max) = self.max_width.filter(|&max| w > max) {
            return Err(exceeded("width", w, max));
        }
        if let Some(max) = self.max_height.filter(|&max| h > max) {
            return Err(exceeded("height", h, max));
        }
        let pixels = w * h;
        if let Some(max) = self.max_pixels.filter(|&max| pixels > max) {
            return Err(exceeded("pixel count", pixels, max));
        }
        let bytes = pixels * bytes_per_pixel as u64;
        if let Some(max) = self.max_memory_bytes.filter(|&max| bytes > max) {
            return Err(exceeded("buffer size", bytes, max));
        }
        Ok(())
    }
}
