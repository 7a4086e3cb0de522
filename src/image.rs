#![forbid(unsafe_code)]

//! A heap-allocated image type plus the conversions that fill it.

use alloc::vec::Vec;

use bytemuck::cast_slice;
use pixel_formats::r32g32b32_Sfloat;

use crate::{
  error::{MiniPngError, MiniPngResult},
  header::PixelType,
  iterators::iter_1bpp_high_to_low,
  record::MiniPng,
};

/// A direct-color image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bitmap<P> {
  /// Image width in pixels.
  pub width: u32,
  /// Image height in pixels.
  pub height: u32,
  /// Pixel values, row-major, top row first.
  pub pixels: Vec<P>,
}

impl MiniPng {
  /// Calls `f` once per pixel with its RGB value, left to right, top to
  /// bottom.
  ///
  /// * Black and white: a 0 bit (the inked pixel) gives black, a 1 bit gives
  ///   white, matching the terminal renderer's polarity.
  /// * Grayscale: the byte scales to a gray value.
  /// * Color: each byte triple scales to an RGB value.
  ///
  /// Palette records have no pixel interpretation and fail with
  /// `UnrenderablePixelType`. The payload length is validated before `f` is
  /// called at all.
  pub fn for_each_rgb<F: FnMut(r32g32b32_Sfloat)>(&self, f: F) -> MiniPngResult<()> {
    let header = self.header()?;
    if header.pixel_type == PixelType::Palette {
      return Err(MiniPngError::UnrenderablePixelType { pixel_type: header.pixel_type });
    }
    self.check_data_len(&header)?;
    let pixel_count = (header.width as u64 * header.height as u64) as usize;
    match header.pixel_type {
      PixelType::BlackAndWhite => {
        iter_1bpp_high_to_low(self.image_data())
          .take(pixel_count)
          .map(|bit| {
            if bit {
              r32g32b32_Sfloat { r: 1.0, g: 1.0, b: 1.0 }
            } else {
              r32g32b32_Sfloat { r: 0.0, g: 0.0, b: 0.0 }
            }
          })
          .for_each(f);
      }
      PixelType::GrayScale => {
        self
          .image_data()
          .iter()
          .copied()
          .map(|y| {
            let yf = (y as f32) / 255.0;
            r32g32b32_Sfloat { r: yf, g: yf, b: yf }
          })
          .for_each(f);
      }
      PixelType::Color => {
        // length is a checked multiple of 3 at this point
        let triples: &[[u8; 3]] = cast_slice(self.image_data());
        triples
          .iter()
          .copied()
          .map(|[r, g, b]| r32g32b32_Sfloat {
            r: (r as f32) / 255.0,
            g: (g as f32) / 255.0,
            b: (b as f32) / 255.0,
          })
          .for_each(f);
      }
      PixelType::Palette => unreachable!(),
    }
    Ok(())
  }

  /// Decodes the pixels into a [`Bitmap`] of any RGB-convertible pixel type.
  pub fn try_bitmap<P>(&self) -> MiniPngResult<Bitmap<P>>
  where
    P: From<r32g32b32_Sfloat>,
  {
    let header = self.header()?;
    let pixel_count = (header.width as u64 * header.height as u64) as usize;
    let mut pixels: Vec<P> = Vec::with_capacity(pixel_count);
    self.for_each_rgb(|p| pixels.push(P::from(p)))?;
    Ok(Bitmap { width: header.width, height: header.height, pixels })
  }
}
