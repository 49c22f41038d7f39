//! Error taxonomy for the baking pipeline.

use std::path::PathBuf;

use image::ColorType;

/// Errors produced while baking images into headers.
///
/// None of these are recovered from: the driver aborts the whole batch on
/// the first failure, leaving already-written headers in place.
#[derive(thiserror::Error, Debug)]
pub enum BakeError {
    /// The input folder cannot be enumerated.
    #[error("failed to read input folder {path}: {source}")]
    InputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output folder cannot be created.
    #[error("failed to create output folder {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input path has no filename stem to derive a symbol from.
    #[error("input path {path} has no file name stem")]
    MissingStem { path: PathBuf },

    /// The entry cannot be decoded as a supported raster image.
    ///
    /// Also covers unreadable paths and subdirectory entries; both fail
    /// inside the image reader.
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The image decoded to fewer than three color channels.
    #[error("unsupported color type {color:?} in {path}: need red, green and blue channels")]
    UnsupportedColor { path: PathBuf, color: ColorType },

    /// The rendered header could not be written.
    #[error("failed to write header {path}: {source}")]
    WriteHeader {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
