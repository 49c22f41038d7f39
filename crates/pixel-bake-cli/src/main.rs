//! Command-line driver for `pixel-bake`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{info, LevelFilter};
use pixel_bake::{bake_directory, init_with_level};

/// Bake every image in a folder into C++ headers of constexpr float
/// channel arrays.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Folder containing the source images.
    #[arg(short, long)]
    input_folder: PathBuf,

    /// Folder receiving the generated headers; created if missing.
    #[arg(short, long)]
    output_folder: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _ = init_with_level(LevelFilter::Info);

    match bake_directory(&args.input_folder, &args.output_folder) {
        Ok(baked) => {
            info!(
                "baked {} header(s) into {}",
                baked.len(),
                args.output_folder.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
