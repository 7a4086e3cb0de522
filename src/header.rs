use core::fmt::{Display, Formatter};

use crate::{
  block::RawBlock,
  error::{MiniPngError, MiniPngResult},
};

/// How the pixel payload of a Mini-PNG image is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixelType {
  /// One bit per pixel, packed high-bit-first, row-major.
  ///
  /// A 0 bit is the inked pixel, a 1 bit is blank.
  BlackAndWhite,
  /// One byte per pixel, 0 (black) through 255 (white).
  GrayScale,
  /// One palette index per pixel.
  ///
  /// Reserved by the format. The tag value decodes fine, but no renderer
  /// exists for it.
  Palette,
  /// Three bytes per pixel, one per channel.
  Color,
}
impl TryFrom<u8> for PixelType {
  type Error = u8;
  #[inline]
  fn try_from(byte: u8) -> Result<Self, Self::Error> {
    match byte {
      0 => Ok(PixelType::BlackAndWhite),
      1 => Ok(PixelType::GrayScale),
      2 => Ok(PixelType::Palette),
      3 => Ok(PixelType::Color),
      other => Err(other),
    }
  }
}
impl Display for PixelType {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    match self {
      PixelType::BlackAndWhite => write!(f, "black and white"),
      PixelType::GrayScale => write!(f, "grayscale"),
      PixelType::Palette => write!(f, "palette"),
      PixelType::Color => write!(f, "color"),
    }
  }
}

/// The parsed payload of a header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniHeader {
  /// Image width in pixels.
  pub width: u32,
  /// Image height in pixels.
  pub height: u32,
  /// How the data blocks' payload encodes pixels.
  pub pixel_type: PixelType,
}
impl MiniHeader {
  /// Parses a header block's payload.
  ///
  /// The payload layout is fixed: width (u32 BE), height (u32 BE), then the
  /// pixel-type byte. Anything shorter than 9 bytes can't hold that, and a
  /// pixel-type byte past the defined range fails too.
  pub fn from_block(block: &RawBlock<'_>) -> MiniPngResult<Self> {
    let data = block.data();
    if data.len() < 9 {
      return Err(MiniPngError::BlockLengthOverflow {
        offset: block.offset(),
        length: data.len() as u32,
      });
    }
    let width = u32::from_be_bytes(data[0..4].try_into().unwrap());
    let height = u32::from_be_bytes(data[4..8].try_into().unwrap());
    let pixel_type = PixelType::try_from(data[8]).map_err(|value| {
      // the pixel-type byte sits 5 (tag + length) + 8 bytes into the block
      MiniPngError::InvalidPixelType { offset: block.offset() + 5 + 8, value }
    })?;
    Ok(Self { width, height, pixel_type })
  }

  /// Payload bytes the data blocks must total for these dimensions.
  ///
  /// The math is done in `u64` so that huge declared dimensions can't
  /// overflow on 32-bit targets.
  #[inline]
  #[must_use]
  pub const fn expected_data_len(&self) -> u64 {
    let n = (self.width as u64) * (self.height as u64);
    match self.pixel_type {
      PixelType::BlackAndWhite => (n + 7) / 8,
      PixelType::GrayScale | PixelType::Palette => n,
      PixelType::Color => n * 3,
    }
  }
}
