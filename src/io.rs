//! File-level load and save.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use enough::Unstoppable;

use crate::encode::EncodeRequest;
use crate::error::{Result, TgaError};
use crate::image::Image;

impl Image {
    /// Load a TGA file.
    ///
    /// Bottom-left-origin files are flipped so row 0 of the result is the
    /// top row.
    pub fn load(path: impl AsRef<Path>) -> Result<Image> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let image = crate::tga::decode(&data, None, &Unstoppable)?;
        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            format = ?image.format(),
            "loaded TGA"
        );
        Ok(image)
    }

    /// Write the image as a TGA file, RLE-compressed when `rle` is set.
    pub fn write_to_file(&self, path: impl AsRef<Path>, rle: bool) -> Result<()> {
        EncodeRequest::new()
            .with_rle(rle)
            .write_to_file(self, path, Unstoppable)
    }
}

/// Write `bytes` to `path`, removing the file again if any write step fails.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    let written = file.write_all(bytes).and_then(|()| file.sync_all());
    drop(file);
    if let Err(err) = written {
        tracing::debug!(path = %path.display(), error = %err, "TGA write failed");
        let _ = std::fs::remove_file(path);
        return Err(TgaError::Io(err));
    }
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote TGA");
    Ok(())
}
