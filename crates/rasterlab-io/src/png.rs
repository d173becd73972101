//! PNG image format support

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};
use std::path::Path;

use png::{BitDepth, ColorType, Decoder, Encoder};
use rasterlab_core::{BYTES_PER_PIXEL, PixelBuffer};

use crate::convert::{from_rgba_bytes, to_rgba_bytes};
use crate::error::{IoError, IoResult};

/// Read a PNG image into a buffer.
///
/// Accepts 8-bit RGBA, RGB and grayscale images; RGB gets an opaque
/// alpha channel, grayscale is replicated across the color channels.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = info.width;
    let height = info.height;
    let data = &buf[..info.buffer_size()];

    match (info.color_type, info.bit_depth) {
        (ColorType::Rgba, BitDepth::Eight) => from_rgba_bytes(width, height, data),
        (ColorType::Rgb, BitDepth::Eight) => {
            let mut out = Vec::with_capacity(width as usize * height as usize * BYTES_PER_PIXEL);
            for px in data.chunks_exact(3) {
                out.extend_from_slice(&[px[2], px[1], px[0], 255]);
            }
            Ok(PixelBuffer::from_vec(width, height, out)?)
        }
        (ColorType::Grayscale, BitDepth::Eight) => {
            let mut out = Vec::with_capacity(width as usize * height as usize * BYTES_PER_PIXEL);
            for &v in data {
                out.extend_from_slice(&[v, v, v, 255]);
            }
            Ok(PixelBuffer::from_vec(width, height, out)?)
        }
        (color_type, bit_depth) => Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG format: {:?} {:?}",
            color_type, bit_depth
        ))),
    }
}

/// Write a buffer as an 8-bit RGBA PNG.
pub fn write_png<W: Write>(buf: &PixelBuffer, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, buf.width(), buf.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(&to_rgba_bytes(buf))
        .map_err(|e| IoError::EncodeError(format!("PNG data error: {}", e)))?;
    Ok(())
}

/// Read a PNG file from disk.
pub fn load_png<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write a PNG file to disk.
pub fn save_png<P: AsRef<Path>>(buf: &PixelBuffer, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_png(buf, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn in_memory_round_trip() {
        let rgba: Vec<u8> = (0..4 * 8 * 3).map(|i| (i * 11 % 256) as u8).collect();
        let buf = from_rgba_bytes(8, 3, &rgba).unwrap();

        let mut encoded = Vec::new();
        write_png(&buf, &mut encoded).unwrap();
        let decoded = read_png(Cursor::new(encoded)).unwrap();

        assert_eq!(decoded, buf);
        assert_eq!(to_rgba_bytes(&decoded), rgba);
    }

    #[test]
    fn truncated_stream_is_a_decode_error() {
        let err = read_png(Cursor::new(&b"\x89PNG\r\n\x1a\n"[..])).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
