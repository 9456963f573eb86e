//! TGA encoder: uncompressed and run-length encoded (types 2, 3, 10, 11).

use alloc::vec::Vec;
use enough::Stop;

use super::header::{HEADER_LEN, TgaHeader};
use crate::error::TgaError;
use crate::image::Image;

/// Longest run a single RLE packet can describe.
pub(crate) const MAX_RUN: usize = 128;

/// One RLE packet's extent, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Run {
    /// Pixels that each differ from their successor, stored verbatim.
    Literal(usize),
    /// Identical pixels, stored once.
    Replicate(usize),
}

impl Run {
    pub fn len(self) -> usize {
        match self {
            Run::Literal(n) | Run::Replicate(n) => n,
        }
    }

    /// Packet header byte: high bit set for replicate runs, low 7 bits hold `len - 1`.
    pub fn header_byte(self) -> u8 {
        match self {
            Run::Literal(n) => (n - 1) as u8,
            Run::Replicate(n) => 0x80 | (n - 1) as u8,
        }
    }
}

/// Encode `image` as a complete TGA file (header + pixel data).
pub(crate) fn encode_tga(image: &Image, rle: bool, stop: &dyn Stop) -> Result<Vec<u8>, TgaError> {
    let header = TgaHeader::for_image(image.width(), image.height(), image.format(), rle)?;
    let pixels = image.pixels();

    // Worst case for RLE is one header byte per 128-pixel literal run, plus
    // one per row for the trailing partial run.
    let payload = if rle {
        pixels.len() + pixels.len() / MAX_RUN + image.height() as usize
    } else {
        pixels.len()
    };
    let mut out = Vec::with_capacity(HEADER_LEN + payload);
    out.extend_from_slice(&header.to_bytes());

    stop.check()?;

    if !rle {
        out.extend_from_slice(pixels);
        return Ok(out);
    }

    let bpp = image.format().bytes_per_pixel();
    for (row_idx, row) in pixels.chunks_exact(image.bytes_per_row()).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        pack_scanline(row, bpp, &mut out);
    }

    Ok(out)
}

/// RLE-pack one scanline. Packets never extend past the end of `row`.
pub(crate) fn pack_scanline(row: &[u8], bpp: usize, out: &mut Vec<u8>) {
    let npixels = row.len() / bpp;
    let mut start = 0;
    while start < npixels {
        let run = next_run(row, bpp, start);
        out.push(run.header_byte());
        let run_bytes = match run {
            Run::Literal(n) => n * bpp,
            Run::Replicate(_) => bpp,
        };
        out.extend_from_slice(&row[start * bpp..start * bpp + run_bytes]);
        start += run.len();
    }
}

/// Measure the run beginning at pixel `start` of `row`.
///
/// The run's kind is fixed by whether pixel `start` equals its successor,
/// and it grows until that relation flips, `MAX_RUN` is reached, or the row
/// ends. A literal run stops short of a pixel that equals its successor so
/// that pixel can open the following replicate run.
pub(crate) fn next_run(row: &[u8], bpp: usize, start: usize) -> Run {
    let npixels = row.len() / bpp;
    let limit = MAX_RUN.min(npixels - start);
    let pixel = |i: usize| &row[i * bpp..(i + 1) * bpp];
    let same_as_next = |i: usize| pixel(i) == pixel(i + 1);

    if limit == 1 {
        return Run::Literal(1);
    }

    let replicate = same_as_next(start);
    let mut len = 1;
    while len < limit {
        if same_as_next(start + len - 1) != replicate {
            if !replicate {
                len -= 1;
            }
            break;
        }
        len += 1;
    }

    if replicate {
        Run::Replicate(len)
    } else {
        Run::Literal(len)
    }
}
