//! Bake folders of images into C++ headers.
//!
//! `pixel-bake` reads every entry of an input folder, decodes it as an RGB
//! raster image, and writes one header per image into an output folder.
//! Each header declares `<NAME>_HEIGHT`/`<NAME>_WIDTH` constants and three
//! `constexpr float` arrays (`_RED`, `_GREEN`, `_BLUE`) holding the
//! row-major channel samples normalized to [0, 1], ready to `#include`
//! into a build with no runtime image loading.
//!
//! ## Quickstart
//!
//! ```no_run
//! use pixel_bake::bake_directory;
//!
//! # fn main() -> Result<(), pixel_bake::BakeError> {
//! let baked = bake_directory("assets/images", "generated/images")?;
//! for header in &baked {
//!     println!("{} ({}x{})", header.symbol, header.width, header.height);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//! - `load_rgb`: decode one file into an `image::RgbImage`.
//! - `ChannelPlane` + `encode_channel`: de-interleave a channel and render
//!   it as a comma-separated list of `f`-suffixed float literals.
//! - `render_header`: substitute the symbol, dimensions and the three
//!   literal lists into the fixed C++ template.
//! - `bake_directory`: drive the above over a whole folder, one header per
//!   entry.
//!
//! The batch is sequential and fail-fast: the first entry that cannot be
//! decoded aborts the run, leaving already-written headers in place.

mod bake;
mod encode;
mod error;
mod header;
mod loader;
mod logger;
mod plane;

pub use bake::{bake_directory, bake_file, BakedHeader};
pub use encode::encode_channel;
pub use error::BakeError;
pub use header::{array_symbol, header_file_name, render_header};
pub use loader::load_rgb;
pub use logger::init_with_level;
pub use plane::{Channel, ChannelPlane};
