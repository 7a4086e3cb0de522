#![forbid(unsafe_code)]

//! The decoded image record and the decode loop that builds it.

use alloc::{string::String, vec::Vec};

use crate::{
  block::{is_mini_png_signature_correct, BlockTag, RawBlockIter},
  error::{MiniPngError, MiniPngResult},
  header::{MiniHeader, PixelType},
  iterators::iter_1bpp_high_to_low,
};

/// A fully decoded Mini-PNG image.
///
/// Built by [`try_from_bytes`](Self::try_from_bytes) and read-only after
/// that. The payload bytes keep the container's own encoding; interpreting
/// them is the renderers' job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MiniPng {
  width: u32,
  height: u32,
  pixel_type: Option<PixelType>,
  comments: Vec<u8>,
  image_data: Vec<u8>,
}

impl MiniPng {
  /// Decodes a complete Mini-PNG datastream.
  ///
  /// Checks the signature, then consumes blocks until the input runs out. A
  /// header block overwrites the dimensions and pixel type (so with several
  /// headers the last one wins), while comment and data blocks append their
  /// payloads in arrival order. The first malformed block ends the decode
  /// with its error.
  pub fn try_from_bytes(bytes: &[u8]) -> MiniPngResult<Self> {
    if !is_mini_png_signature_correct(bytes) {
      return Err(MiniPngError::BytesAreNotMiniPng);
    }
    let mut record = Self::default();
    for block_result in RawBlockIter::new(bytes) {
      let block = block_result?;
      match block.tag() {
        BlockTag::Header => {
          let header = MiniHeader::from_block(&block)?;
          record.width = header.width;
          record.height = header.height;
          record.pixel_type = Some(header.pixel_type);
        }
        BlockTag::Comments => record.comments.extend_from_slice(block.data()),
        BlockTag::Data => record.image_data.extend_from_slice(block.data()),
      }
    }
    Ok(record)
  }

  /// Image width in pixels. Zero until a header block is decoded.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Image height in pixels. Zero until a header block is decoded.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }

  /// The declared pixel type, or `None` if no header block was decoded.
  #[inline]
  #[must_use]
  pub const fn pixel_type(&self) -> Option<PixelType> {
    self.pixel_type
  }

  /// All comment bytes, in arrival order.
  #[inline]
  #[must_use]
  pub fn comments(&self) -> &[u8] {
    &self.comments
  }

  /// All pixel payload bytes, in arrival order.
  #[inline]
  #[must_use]
  pub fn image_data(&self) -> &[u8] {
    &self.image_data
  }

  /// The header as a [`MiniHeader`], or `MissingHeader` if none was decoded.
  pub(crate) fn header(&self) -> MiniPngResult<MiniHeader> {
    match self.pixel_type {
      Some(pixel_type) => {
        Ok(MiniHeader { width: self.width, height: self.height, pixel_type })
      }
      None => Err(MiniPngError::MissingHeader),
    }
  }

  /// Checks the payload length against the header's dimensions.
  pub(crate) fn check_data_len(&self, header: &MiniHeader) -> MiniPngResult<()> {
    let expected = header.expected_data_len();
    let actual = self.image_data.len() as u64;
    if actual != expected {
      return Err(MiniPngError::WrongImageDimension { expected, actual });
    }
    Ok(())
  }

  /// Unpacks a 1-bit payload into one `0`/`1` value per pixel, row-major.
  ///
  /// The padding bits of the final payload byte are discarded. The payload
  /// must be exactly `ceil(width * height / 8)` bytes.
  pub fn unpack_bits(&self) -> MiniPngResult<Vec<u8>> {
    let header = self.header()?;
    self.check_data_len(&header)?;
    let pixel_count = (header.width as u64 * header.height as u64) as usize;
    let pixels: Vec<u8> =
      iter_1bpp_high_to_low(&self.image_data).take(pixel_count).map(u8::from).collect();
    Ok(pixels)
  }

  /// Renders a 1-bit image as terminal text.
  ///
  /// One output line per pixel row. A 0 bit draws as `'X'`, a 1 bit as a
  /// space. Non-1-bit records can't be drawn this way and fail with
  /// `UnrenderablePixelType`.
  pub fn render_ascii(&self) -> MiniPngResult<String> {
    let header = self.header()?;
    if header.pixel_type != PixelType::BlackAndWhite {
      return Err(MiniPngError::UnrenderablePixelType { pixel_type: header.pixel_type });
    }
    let pixels = self.unpack_bits()?;
    let width = header.width as usize;
    if width == 0 {
      return Ok("\n".repeat(header.height as usize));
    }
    let mut out = String::with_capacity(pixels.len() + header.height as usize);
    for row in pixels.chunks(width) {
      for &px in row {
        out.push(if px == 0 { 'X' } else { ' ' });
      }
      out.push('\n');
    }
    Ok(out)
  }
}
