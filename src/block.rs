#![forbid(unsafe_code)]

//! The block layer of the Mini-PNG container.
//!
//! After the 8-byte signature, a Mini-PNG datastream is nothing but blocks,
//! each one `[tag: 1 byte][payload length: u32 BE][payload]`. This module has
//! the signature constant, the tag enum, and [`RawBlockIter`], which walks a
//! byte slice and hands out each block's payload by reference.

use core::fmt::Debug;

use crate::error::{MiniPngError, MiniPngResult};

/// The first eight bytes of a Mini-PNG datastream should match these bytes.
pub const MINI_PNG_SIGNATURE: [u8; 8] = *b"Mini-PNG";

/// Checks if the bytes begin with the Mini-PNG signature.
///
/// [`RawBlockIter`] does *not* perform this check itself, it just skips the
/// first 8 bytes. Callers that want to reject non-Mini-PNG input should check
/// before iterating.
#[inline]
#[must_use]
pub const fn is_mini_png_signature_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [b'M', b'i', b'n', b'i', b'-', b'P', b'N', b'G', ..])
}

/// The kind of a block, decided by its tag byte.
///
/// Tag bytes outside these three are a decode error, there's no "unknown
/// block" passthrough in this format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlockTag {
  /// `'H'`: image dimensions and pixel type.
  Header,
  /// `'C'`: free-form comment bytes.
  Comments,
  /// `'D'`: pixel payload bytes.
  Data,
}
impl TryFrom<u8> for BlockTag {
  type Error = u8;
  #[inline]
  fn try_from(byte: u8) -> Result<Self, Self::Error> {
    match byte {
      b'H' => Ok(BlockTag::Header),
      b'C' => Ok(BlockTag::Comments),
      b'D' => Ok(BlockTag::Data),
      other => Err(other),
    }
  }
}
impl From<BlockTag> for u8 {
  #[inline]
  fn from(tag: BlockTag) -> Self {
    match tag {
      BlockTag::Header => b'H',
      BlockTag::Comments => b'C',
      BlockTag::Data => b'D',
    }
  }
}

/// An unparsed block from a Mini-PNG datastream.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'b> {
  pub(crate) tag: BlockTag,
  pub(crate) data: &'b [u8],
  pub(crate) offset: usize,
}
impl<'b> RawBlock<'b> {
  /// The block's kind.
  #[inline]
  #[must_use]
  pub const fn tag(&self) -> BlockTag {
    self.tag
  }
  /// The block's payload bytes.
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
  /// Position of the block's tag byte within the full datastream.
  #[inline]
  #[must_use]
  pub const fn offset(&self) -> usize {
    self.offset
  }
}
impl Debug for RawBlock<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RawBlock")
      .field("tag", &self.tag)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("offset", &self.offset)
      .finish()
  }
}

/// An iterator that produces successive raw blocks from Mini-PNG bytes.
///
/// Each item is a `Result`: a malformed block yields its error instead of
/// being silently dropped, and the iterator ends after the first error. A
/// stream that runs out of bytes exactly on a block boundary ends cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlockIter<'b> {
  bytes: &'b [u8],
  offset: usize,
}
impl<'b> RawBlockIter<'b> {
  /// Pass the full Mini-PNG bytes, it will skip the signature automatically.
  #[inline]
  pub const fn new(bytes: &'b [u8]) -> Self {
    match bytes {
      [_, _, _, _, _, _, _, _, rest @ ..] => Self { bytes: rest, offset: 8 },
      _ => Self { bytes: &[], offset: 8 },
    }
  }
}
impl<'b> Iterator for RawBlockIter<'b> {
  type Item = MiniPngResult<RawBlock<'b>>;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.bytes.is_empty() {
      return None;
    }
    let offset = self.offset;
    let tag: BlockTag = match BlockTag::try_from(self.bytes[0]) {
      Ok(tag) => tag,
      Err(tag) => {
        self.bytes = &[];
        return Some(Err(MiniPngError::UnknownBlockType { offset, tag }));
      }
    };
    let length: u32 = if self.bytes.len() >= 5 {
      u32::from_be_bytes(self.bytes[1..5].try_into().unwrap())
    } else {
      self.bytes = &[];
      return Some(Err(MiniPngError::UnexpectedEndOfInput { offset }));
    };
    let data: &'b [u8] = if (self.bytes.len() - 5) >= (length as usize) {
      &self.bytes[5..(5 + length as usize)]
    } else {
      self.bytes = &[];
      return Some(Err(MiniPngError::BlockLengthOverflow { offset, length }));
    };
    self.bytes = &self.bytes[(5 + length as usize)..];
    self.offset = offset + 5 + length as usize;
    Some(Ok(RawBlock { tag, data, offset }))
  }
}
