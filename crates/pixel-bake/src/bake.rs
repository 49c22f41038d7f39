//! Directory driver: enumerate the input folder, bake every entry.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::encode::encode_channel;
use crate::error::BakeError;
use crate::header::{array_symbol, header_file_name, render_header};
use crate::loader::load_rgb;
use crate::plane::{Channel, ChannelPlane};

/// Metadata for one generated header.
#[derive(Clone, Debug)]
pub struct BakedHeader {
    /// Symbol prefix of the constants and arrays.
    pub symbol: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Path of the written header file.
    pub path: PathBuf,
}

/// Bake a single image file into a header inside `output_dir`.
///
/// The output directory must already exist; `bake_directory` creates it
/// before iterating. An existing header of the same name is overwritten
/// silently.
pub fn bake_file(
    path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<BakedHeader, BakeError> {
    let path = path.as_ref();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| BakeError::MissingStem {
            path: path.to_path_buf(),
        })?;

    let img = load_rgb(path)?;
    let (width, height) = img.dimensions();
    debug!("decoded {} ({}x{})", path.display(), width, height);

    let [red, green, blue] =
        Channel::ALL.map(|channel| encode_channel(&ChannelPlane::from_rgb(&img, channel)));

    let symbol = array_symbol(&stem);
    let header = render_header(&symbol, width, height, &red, &green, &blue);

    let out_path = output_dir.as_ref().join(header_file_name(&stem));
    fs::write(&out_path, header).map_err(|source| BakeError::WriteHeader {
        path: out_path.clone(),
        source,
    })?;

    info!("baked {symbol} ({width}x{height}) -> {}", out_path.display());

    Ok(BakedHeader {
        symbol,
        width,
        height,
        path: out_path,
    })
}

/// Bake every entry of `input_dir` into one header each inside
/// `output_dir`.
///
/// The output directory is created up front (missing parents included), so
/// an empty input folder still leaves an empty output folder behind.
/// Entries are visited in the order the filesystem returns them, without
/// recursing; the first failure aborts the run and leaves already-written
/// headers in place.
pub fn bake_directory(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<Vec<BakedHeader>, BakeError> {
    let input_dir = input_dir.as_ref();
    let output_dir = output_dir.as_ref();

    fs::create_dir_all(output_dir).map_err(|source| BakeError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let entries = fs::read_dir(input_dir).map_err(|source| BakeError::InputDir {
        path: input_dir.to_path_buf(),
        source,
    })?;

    let mut baked = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BakeError::InputDir {
            path: input_dir.to_path_buf(),
            source,
        })?;
        baked.push(bake_file(entry.path(), output_dir)?);
    }
    Ok(baked)
}
