//! PNG image format support
//!
//! Every PNG is decoded to packed 8-bit RGBA: palettes and sub-byte depths
//! are expanded, 16-bit samples are truncated to their high byte, gray is
//! replicated into red, green and blue, and a missing alpha channel reads
//! as fully opaque. Images are always written as 8-bit RGBA.

use crate::{IoError, IoResult};
use imgproc_core::{Image, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG output color type: {:?}",
                other
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    if bytes_per_row < width as usize * samples {
        return Err(IoError::InvalidData(format!(
            "PNG row of {} bytes is too short for {} pixels",
            bytes_per_row, width
        )));
    }

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for row in data.chunks_exact(bytes_per_row).take(height as usize) {
        for px in row[..width as usize * samples].chunks_exact(samples) {
            let pixel = match *px {
                [g] => color::pack(g, g, g, 255),
                [g, a] => color::pack(g, g, g, a),
                [r, g, b] => color::pack(r, g, b, 255),
                [r, g, b, a] => color::pack(r, g, b, a),
                _ => unreachable!(),
            };
            pixels.push(pixel);
        }
    }

    log::trace!("decoded {}x{} PNG ({:?})", width, height, color_type);
    Ok(Image::from_pixels(width, height, pixels)?)
}

/// Write a PNG image
pub fn write_png<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    let width = image.width();
    let height = image.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(image.data().len() * 4);
    for &pixel in image.data() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        data.extend_from_slice(&[r, g, b, a]);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    log::trace!("encoded {}x{} PNG", width, height);
    Ok(())
}
