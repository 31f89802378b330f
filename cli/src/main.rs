use ascii_etch::{RenderConfig, process_file};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

/// Convert a raster image into a plain-text ASCII-art document
#[derive(Parser, Debug)]
#[command(name = "ascii-etch")]
#[command(version, about = "Image to ASCII text converter", long_about = None)]
struct Args {
    /// Image to convert (PNG, JPEG, BMP, ...)
    #[arg(short, long, value_name = "PATH")]
    input_file_path: PathBuf,

    /// Directory the .txt document is written to (created if missing)
    #[arg(short, long, value_name = "PATH")]
    output_file_dir: PathBuf,
}

fn main() {
    // Configure logging
    env_logger::init();

    let args = Args::parse();

    match process_file(
        &args.input_file_path,
        &args.output_file_dir,
        RenderConfig::default(),
    ) {
        Ok(written) => info!("wrote {}", written.display()),
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
