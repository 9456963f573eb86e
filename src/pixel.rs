/// Pixel memory layout of an [`Image`](crate::Image) buffer.
///
/// Channel bytes are stored blue first, matching the TGA on-disk order.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Single channel, 8-bit grayscale.
    Grayscale,
    /// 3 channels, 8-bit BGR.
    Bgr,
    /// 4 channels, 8-bit BGRA.
    Bgra,
}

impl PixelFormat {
    /// Bytes per pixel for this format.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Grayscale => 1,
            Self::Bgr => 3,
            Self::Bgra => 4,
        }
    }

    /// Inverse of [`bytes_per_pixel`](Self::bytes_per_pixel).
    pub fn from_bytes_per_pixel(bytes: usize) -> Option<Self> {
        match bytes {
            1 => Some(Self::Grayscale),
            3 => Some(Self::Bgr),
            4 => Some(Self::Bgra),
            _ => None,
        }
    }

    /// Whether the format carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Bgra)
    }
}

/// One pixel packed into a `u32` with channel slots in B, G, R, A order.
///
/// Blue occupies the most significant byte and alpha the least. Reading a
/// pixel from a format with fewer than four channels fills the missing
/// slots with `0xFF`; storing a color drops the slots the format lacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::from_bgra(0, 0, 0, 0xFF);
    /// Opaque white.
    pub const WHITE: Color = Color::from_bgra(0xFF, 0xFF, 0xFF, 0xFF);

    /// Pack four channel bytes.
    pub const fn from_bgra(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([b, g, r, a]))
    }

    /// Wrap a value already laid out as B, G, R, A from high byte to low.
    pub const fn from_packed(value: u32) -> Self {
        Self(value)
    }

    /// Opaque gray. Stored into a grayscale image, only the blue slot is written.
    pub const fn gray(value: u8) -> Self {
        Self::from_bgra(value, value, value, 0xFF)
    }

    /// The packed `u32`, blue in the high byte.
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Channel bytes in buffer order: `[b, g, r, a]`.
    pub const fn to_bgra_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Builds a color from the first `len` bytes of `bytes`, padding the rest with `0xFF`.
    pub(crate) fn from_channels(bytes: &[u8]) -> Self {
        let mut slots = [0xFF; 4];
        slots[..bytes.len()].copy_from_slice(bytes);
        Self(u32::from_be_bytes(slots))
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        self.to_bgra_bytes()[0]
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        self.to_bgra_bytes()[1]
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        self.to_bgra_bytes()[2]
    }

    /// Alpha channel.
    pub const fn a(self) -> u8 {
        self.to_bgra_bytes()[3]
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::alt::BGRA8> for Color {
    fn from(px: rgb::alt::BGRA8) -> Self {
        Color::from_bgra(px.b, px.g, px.r, px.a)
    }
}

#[cfg(feature = "rgb")]
impl From<Color> for rgb::alt::BGRA8 {
    fn from(c: Color) -> Self {
        rgb::alt::BGRA {
            b: c.b(),
            g: c.g(),
            r: c.r(),
            a: c.a(),
        }
    }
}
