//! Decoding directory entries into RGB images.

use std::path::Path;

use image::{ImageError, ImageReader, RgbImage};

use crate::error::BakeError;

/// Decode the file at `path` into an 8-bit RGB image.
///
/// The format is sniffed from the file content with a fall-back on the
/// extension, so any raster format the `image` crate ships a decoder for
/// is accepted (PNG, JPEG, BMP, GIF, TIFF, ...). An alpha channel is
/// dropped here; 16-bit sources are narrowed to 8-bit. Images with fewer
/// than three channels (grayscale, gray+alpha) are rejected rather than
/// expanded.
pub fn load_rgb(path: impl AsRef<Path>) -> Result<RgbImage, BakeError> {
    let path = path.as_ref();
    let decode_err = |source: ImageError| BakeError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(|source| decode_err(source.into()))?
        .with_guessed_format()
        .map_err(|source| decode_err(source.into()))?;
    let decoded = reader.decode().map_err(decode_err)?;

    let color = decoded.color();
    if color.channel_count() < 3 {
        return Err(BakeError::UnsupportedColor {
            path: path.to_path_buf(),
            color,
        });
    }

    Ok(decoded.to_rgb8())
}
