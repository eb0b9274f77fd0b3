//! imgproc-io - Image I/O for imgproc
//!
//! Reads image files into packed RGBA [`Image`]s and writes them back.
//!
//! # Supported formats
//!
//! - PNG (read/write, feature `png-format`, enabled by default)
//!
//! Formats are detected from the file header when reading; the caller
//! picks the output format when writing.

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
#[cfg(feature = "png-format")]
pub use png::{read_png, write_png};

use imgproc_core::Image;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Read an image from a file path.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be opened,
/// [`IoError::UnsupportedFormat`] if the header matches no enabled format,
/// and a decode error if the contents are malformed.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    log::debug!("reading {} as {:?}", path.display(), format);

    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => {
            let file = File::open(path)?;
            read_png(BufReader::new(file))
        }
        _ => Err(IoError::UnsupportedFormat(format!(
            "cannot read {:?} images",
            format
        ))),
    }
}

/// Write an image to a file path in the given format.
///
/// An existing file at `path` is replaced.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for [`ImageFormat::Unknown`] or
/// a format whose feature is disabled, and [`IoError::Io`] if the file
/// cannot be created.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    log::debug!(
        "writing {}x{} image to {} as {:?}",
        image.width(),
        image.height(),
        path.display(),
        format
    );

    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_png(image, &mut writer)?;
            writer.flush()?;
            Ok(())
        }
        _ => Err(IoError::UnsupportedFormat(format!(
            "cannot write {:?} images",
            format
        ))),
    }
}
