#![forbid(unsafe_code)]

//! Building [Netpbm](https://en.wikipedia.org/wiki/Netpbm) pixmap documents
//! from a decoded image.
//!
//! These are the ascii members of the format family: a magic token, the
//! dimensions, the maximum channel value, then whitespace-separated decimal
//! values. There's no compression, so a grayscale or color Mini-PNG payload
//! converts by copying its bytes out as decimal text.
//!
//! Note the row bookkeeping for color: the emitted document has `height * 3`
//! rows of `width` values, with the payload byte for row `i`, column `j`
//! sitting at index `i * width + j`. Netpbm readers treat all whitespace the
//! same, so the line structure is only for human eyes.

use core::fmt::{Display, Formatter};

use crate::header::PixelType;

/// The pixmap formats this crate can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixmapFormat {
  /// Ascii grayscale, one value per pixel.
  P2,
  /// Ascii color, three values per pixel.
  P3,
}
impl PixmapFormat {
  /// The magic token on the document's first line.
  #[inline]
  #[must_use]
  pub const fn magic(self) -> &'static str {
    match self {
      PixmapFormat::P2 => "P2",
      PixmapFormat::P3 => "P3",
    }
  }

  /// The conventional file extension for documents of this format.
  #[inline]
  #[must_use]
  pub const fn extension(self) -> &'static str {
    match self {
      PixmapFormat::P2 => "pgm",
      PixmapFormat::P3 => "ppm",
    }
  }

  /// The pixel type a record must declare to convert into this format.
  #[inline]
  #[must_use]
  pub const fn required_pixel_type(self) -> PixelType {
    match self {
      PixmapFormat::P2 => PixelType::GrayScale,
      PixmapFormat::P3 => PixelType::Color,
    }
  }

  /// The format a pixel type converts into, if any.
  #[inline]
  #[must_use]
  pub const fn for_pixel_type(pixel_type: PixelType) -> Option<Self> {
    match pixel_type {
      PixelType::GrayScale => Some(PixmapFormat::P2),
      PixelType::Color => Some(PixmapFormat::P3),
      PixelType::BlackAndWhite | PixelType::Palette => None,
    }
  }
}
impl Display for PixmapFormat {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.magic())
  }
}

#[cfg(feature = "alloc")]
mod building {
  use alloc::string::String;
  use core::fmt::Write;

  use super::PixmapFormat;
  use crate::{
    error::{MiniPngError, MiniPngResult},
    record::MiniPng,
  };

  impl MiniPng {
    /// Builds the full pixmap document for this image as a `String`.
    ///
    /// The record's declared pixel type must be the one `format` calls for,
    /// otherwise this fails with `ConversionMismatch`. The payload length is
    /// validated against the dimensions before any text is built, so a
    /// mismatched payload fails with `WrongImageDimension` instead of
    /// producing a short document.
    pub fn to_pixmap(&self, format: PixmapFormat) -> MiniPngResult<String> {
      let header = self.header()?;
      if header.pixel_type != format.required_pixel_type() {
        return Err(MiniPngError::ConversionMismatch {
          format,
          pixel_type: header.pixel_type,
        });
      }
      self.check_data_len(&header)?;
      let width = header.width as usize;
      let rows = match format {
        PixmapFormat::P2 => header.height as usize,
        PixmapFormat::P3 => (header.height as usize) * 3,
      };
      // worst case is "255 " per value, plus the three header lines
      let mut out = String::with_capacity(self.image_data().len() * 4 + 32);
      out.push_str(format.magic());
      out.push('\n');
      writeln!(out, "{} {}", header.width, header.height).unwrap();
      out.push_str("255\n");
      if width == 0 {
        out.extend(core::iter::repeat('\n').take(rows));
        return Ok(out);
      }
      for row in self.image_data().chunks(width) {
        for (j, value) in row.iter().enumerate() {
          if j > 0 {
            out.push(' ');
          }
          write!(out, "{value}").unwrap();
        }
        out.push('\n');
      }
      Ok(out)
    }
  }
}
