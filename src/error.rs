use core::fmt::{Display, Formatter};

use crate::{header::PixelType, netpbm::PixmapFormat};

/// An error from the `minipng` crate.
///
/// Variants carry the byte offset where the violation was detected, plus the
/// offending tag, length, or value when there is one. Offsets are measured
/// from the start of the full datastream (signature included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiniPngError {
  /// The first eight bytes of the input weren't the Mini-PNG signature.
  BytesAreNotMiniPng,

  /// A block tag byte wasn't one of the recognized tag values.
  UnknownBlockType {
    /// Position of the tag byte.
    offset: usize,
    /// The unrecognized tag value.
    tag: u8,
  },

  /// The input ended inside a block's tag-length prefix.
  UnexpectedEndOfInput {
    /// Position of the tag byte of the cut-off block.
    offset: usize,
  },

  /// A block's declared payload length is impossible.
  ///
  /// Either the payload would run past the end of the input, or (for a header
  /// block) the payload is too short for the fixed header layout.
  BlockLengthOverflow {
    /// Position of the tag byte of the offending block.
    offset: usize,
    /// The declared payload length.
    length: u32,
  },

  /// A header block's pixel-type byte was outside the defined range.
  InvalidPixelType {
    /// Position of the pixel-type byte.
    offset: usize,
    /// The out-of-range value.
    value: u8,
  },

  /// Rendering was attempted on a record with no decoded header block.
  MissingHeader,

  /// The pixel payload length doesn't agree with the declared dimensions.
  WrongImageDimension {
    /// Payload bytes the declared dimensions call for.
    expected: u64,
    /// Payload bytes actually present.
    actual: u64,
  },

  /// The requested pixmap format doesn't go with the record's pixel type.
  ConversionMismatch {
    /// The format that was requested.
    format: PixmapFormat,
    /// The pixel type the record declares.
    pixel_type: PixelType,
  },

  /// The record's pixel type has no renderer.
  UnrenderablePixelType {
    /// The pixel type the record declares.
    pixel_type: PixelType,
  },
}

impl Display for MiniPngError {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    match *self {
      MiniPngError::BytesAreNotMiniPng => {
        write!(f, "the input doesn't start with the Mini-PNG signature")
      }
      MiniPngError::UnknownBlockType { offset, tag } => {
        write!(f, "unknown block tag {tag:#04x} at offset {offset}")
      }
      MiniPngError::UnexpectedEndOfInput { offset } => {
        write!(f, "input ends mid-block at offset {offset}")
      }
      MiniPngError::BlockLengthOverflow { offset, length } => {
        write!(f, "bad payload length {length} for the block at offset {offset}")
      }
      MiniPngError::InvalidPixelType { offset, value } => {
        write!(f, "pixel type {value} at offset {offset} is outside the defined range")
      }
      MiniPngError::MissingHeader => {
        write!(f, "no header block was decoded before rendering")
      }
      MiniPngError::WrongImageDimension { expected, actual } => {
        write!(f, "pixel payload is {actual} bytes but the declared dimensions need {expected}")
      }
      MiniPngError::ConversionMismatch { format, pixel_type } => {
        write!(f, "a {format} pixmap can't be built from {pixel_type} pixel data")
      }
      MiniPngError::UnrenderablePixelType { pixel_type } => {
        write!(f, "no renderer exists for {pixel_type} pixel data")
      }
    }
  }
}

/// A result with [`MiniPngError`] as the error type.
pub type MiniPngResult<T> = Result<T, MiniPngError>;
