use minipng::{MiniPng, MiniPngError, PixelType, PixmapFormat};

use std::{
  fmt::{Display, Formatter},
  path::Path,
  process::ExitCode,
};

/// Everything the tool can fail on, each with its own exit status.
#[derive(Debug)]
enum CliError {
  Read(std::io::Error),
  Write(std::io::Error),
  MiniPng(MiniPngError),
}
impl From<MiniPngError> for CliError {
  fn from(e: MiniPngError) -> Self {
    CliError::MiniPng(e)
  }
}
impl Display for CliError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      CliError::Read(e) => write!(f, "can't read the input file: {e}"),
      CliError::Write(e) => write!(f, "can't write the pixmap file: {e}"),
      CliError::MiniPng(e) => write!(f, "{e}"),
    }
  }
}
impl CliError {
  fn exit_code(&self) -> u8 {
    match self {
      CliError::Read(_) => 2,
      CliError::Write(_) => 9,
      CliError::MiniPng(e) => match e {
        MiniPngError::BytesAreNotMiniPng => 3,
        MiniPngError::UnknownBlockType { .. } => 4,
        MiniPngError::InvalidPixelType { .. }
        | MiniPngError::UnrenderablePixelType { .. } => 5,
        MiniPngError::UnexpectedEndOfInput { .. }
        | MiniPngError::BlockLengthOverflow { .. } => 6,
        MiniPngError::WrongImageDimension { .. } => 7,
        MiniPngError::ConversionMismatch { .. } => 8,
        MiniPngError::MissingHeader => 10,
      },
    }
  }
}

fn main() -> ExitCode {
  let args: Vec<String> = std::env::args().collect();
  if args.len() != 2 {
    eprintln!("usage: minipng FILE.mp");
    return ExitCode::from(1);
  }
  match run(Path::new(&args[1])) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("minipng: {e}");
      ExitCode::from(e.exit_code())
    }
  }
}

fn run(path: &Path) -> Result<(), CliError> {
  let bytes = std::fs::read(path).map_err(CliError::Read)?;
  let image = MiniPng::try_from_bytes(&bytes)?;

  println!("Width: {}", image.width());
  println!("Height: {}", image.height());
  match image.pixel_type() {
    Some(pixel_type) => println!("Pixel type: {pixel_type}"),
    None => println!("Pixel type: (no header block)"),
  }
  println!("Comments: \"{}\"", String::from_utf8_lossy(image.comments()));

  match image.pixel_type() {
    None => Err(MiniPngError::MissingHeader.into()),
    Some(PixelType::BlackAndWhite) => {
      print!("{}", image.render_ascii()?);
      Ok(())
    }
    Some(pixel_type) => match PixmapFormat::for_pixel_type(pixel_type) {
      Some(format) => {
        let document = image.to_pixmap(format)?;
        let out_path = path.with_extension(format.extension());
        std::fs::write(&out_path, document).map_err(CliError::Write)?;
        println!("Wrote {}", out_path.display());
        Ok(())
      }
      None => Err(MiniPngError::UnrenderablePixelType { pixel_type }.into()),
    },
  }
}
