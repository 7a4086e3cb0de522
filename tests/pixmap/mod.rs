use minipng::{MiniPng, MiniPngError, PixelType, PixmapFormat};

use super::{block, header_block, mini_png};

#[test]
fn format_facts() {
  assert_eq!(PixmapFormat::P2.magic(), "P2");
  assert_eq!(PixmapFormat::P3.magic(), "P3");
  assert_eq!(PixmapFormat::P2.extension(), "pgm");
  assert_eq!(PixmapFormat::P3.extension(), "ppm");
  assert_eq!(PixmapFormat::P2.required_pixel_type(), PixelType::GrayScale);
  assert_eq!(PixmapFormat::P3.required_pixel_type(), PixelType::Color);
  assert_eq!(PixmapFormat::for_pixel_type(PixelType::GrayScale), Some(PixmapFormat::P2));
  assert_eq!(PixmapFormat::for_pixel_type(PixelType::Color), Some(PixmapFormat::P3));
  assert_eq!(PixmapFormat::for_pixel_type(PixelType::BlackAndWhite), None);
  assert_eq!(PixmapFormat::for_pixel_type(PixelType::Palette), None);
}

#[test]
fn p2_document_layout() {
  let bytes = mini_png(&[header_block(2, 2, 1), block(b'D', &[0, 128, 255, 64])]);
  let image = MiniPng::try_from_bytes(&bytes).unwrap();
  let document = image.to_pixmap(PixmapFormat::P2).unwrap();
  assert_eq!(document, "P2\n2 2\n255\n0 128\n255 64\n");
}

#[test]
fn p3_document_has_three_rows_per_pixel_row() {
  let bytes = mini_png(&[header_block(1, 1, 3), block(b'D', &[10, 20, 30])]);
  let image = MiniPng::try_from_bytes(&bytes).unwrap();
  let document = image.to_pixmap(PixmapFormat::P3).unwrap();
  assert_eq!(document, "P3\n1 1\n255\n10\n20\n30\n");

  // width 2, height 1: payload row i, column j is byte i * width + j
  let bytes = mini_png(&[header_block(2, 1, 3), block(b'D', &[1, 2, 3, 4, 5, 6])]);
  let image = MiniPng::try_from_bytes(&bytes).unwrap();
  let document = image.to_pixmap(PixmapFormat::P3).unwrap();
  assert_eq!(document, "P3\n2 1\n255\n1 2\n3 4\n5 6\n");
}

#[test]
fn pixmap_builds_from_split_data_blocks() {
  let bytes = mini_png(&[header_block(2, 1, 1), block(b'D', &[5]), block(b'D', &[7])]);
  let image = MiniPng::try_from_bytes(&bytes).unwrap();
  assert_eq!(image.to_pixmap(PixmapFormat::P2).unwrap(), "P2\n2 1\n255\n5 7\n");
}

#[test]
fn conversion_mismatch_goes_both_ways() {
  let color = mini_png(&[header_block(1, 1, 3), block(b'D', &[1, 2, 3])]);
  let image = MiniPng::try_from_bytes(&color).unwrap();
  assert_eq!(
    image.to_pixmap(PixmapFormat::P2).unwrap_err(),
    MiniPngError::ConversionMismatch {
      format: PixmapFormat::P2,
      pixel_type: PixelType::Color,
    }
  );

  let gray = mini_png(&[header_block(1, 1, 1), block(b'D', &[1])]);
  let image = MiniPng::try_from_bytes(&gray).unwrap();
  assert_eq!(
    image.to_pixmap(PixmapFormat::P3).unwrap_err(),
    MiniPngError::ConversionMismatch {
      format: PixmapFormat::P3,
      pixel_type: PixelType::GrayScale,
    }
  );
}

#[test]
fn palette_records_match_no_pixmap_format() {
  let bytes = mini_png(&[header_block(1, 1, 2), block(b'D', &[0])]);
  let image = MiniPng::try_from_bytes(&bytes).unwrap();
  for format in [PixmapFormat::P2, PixmapFormat::P3] {
    assert_eq!(
      image.to_pixmap(format).unwrap_err(),
      MiniPngError::ConversionMismatch { format, pixel_type: PixelType::Palette }
    );
  }
}

#[test]
fn pixmap_payload_length_is_validated() {
  // 2x2 grayscale needs 4 bytes
  let bytes = mini_png(&[header_block(2, 2, 1), block(b'D', &[0, 0, 0])]);
  let image = MiniPng::try_from_bytes(&bytes).unwrap();
  assert_eq!(
    image.to_pixmap(PixmapFormat::P2).unwrap_err(),
    MiniPngError::WrongImageDimension { expected: 4, actual: 3 }
  );
  // 2x1 color needs 6 bytes
  let bytes = mini_png(&[header_block(2, 1, 3), block(b'D', &[1, 2, 3])]);
  let image = MiniPng::try_from_bytes(&bytes).unwrap();
  assert_eq!(
    image.to_pixmap(PixmapFormat::P3).unwrap_err(),
    MiniPngError::WrongImageDimension { expected: 6, actual: 3 }
  );
}

#[test]
fn pixmap_without_a_header_fails() {
  let bytes = mini_png(&[block(b'D', &[1])]);
  let image = MiniPng::try_from_bytes(&bytes).unwrap();
  assert_eq!(
    image.to_pixmap(PixmapFormat::P2).unwrap_err(),
    MiniPngError::MissingHeader
  );
}
