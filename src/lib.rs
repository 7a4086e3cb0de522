#![no_std]
#![forbid(unsafe_code)]

//! A crate for decoding Mini-PNG images.
//!
//! Mini-PNG is a small teaching container format: an 8-byte ascii signature
//! (`"Mini-PNG"`) followed by a sequence of tag-length-value blocks. There's
//! three block kinds:
//! * **Header** (`'H'`) - the image's width, height, and pixel type.
//! * **Comments** (`'C'`) - free-form comment text.
//! * **Data** (`'D'`) - the pixel payload. An image's pixel data can be split
//!   across any number of data blocks, which all concatenate in order.
//!
//! Depending on the declared pixel type, the payload is either one bit per
//! pixel (packed high-bit-first, row-major), one grayscale byte per pixel, or
//! three color bytes per pixel. There's no compression anywhere in the
//! format.
//!
//! ## Decoding
//!
//! With the `alloc` feature (on by default), call
//! [`MiniPng::try_from_bytes`] and you get the fully decoded image record.
//! From there:
//! * [`MiniPng::render_ascii`] draws a 1-bit image as terminal text.
//! * [`MiniPng::to_pixmap`] builds a plain-text pixmap document (`P2` for
//!   grayscale, `P3` for color) from a multi-level image.
//! * [`MiniPng::try_bitmap`] converts any renderable image into a
//!   [`Bitmap`] of RGB pixel values.
//!
//! Without `alloc` you can still walk the container yourself with
//! [`RawBlockIter`], which borrows each block's payload straight from the
//! input slice.
//!
//! Every failure is reported through [`MiniPngError`], which carries the
//! byte offset of the violation where one exists. Decoding is all-or-nothing:
//! the first violation ends the attempt.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod error;
pub use error::*;

pub mod block;
pub use block::*;

pub mod header;
pub use header::*;

pub mod iterators;
pub use iterators::*;

pub mod netpbm;
pub use netpbm::*;

#[cfg(feature = "alloc")]
pub mod record;
#[cfg(feature = "alloc")]
pub use record::*;

#[cfg(feature = "alloc")]
pub mod image;
#[cfg(feature = "alloc")]
pub use image::*;
