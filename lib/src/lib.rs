//! ASCII Etch - luminance-based image to text converter
//!
//! This library converts a raster image into a plain-text ASCII-art
//! document: one character per pixel, chosen by perceptual brightness from
//! a fixed density ramp, written row by row.
//!
//! # Example
//! ```no_run
//! use ascii_etch::{RenderConfig, process_file};
//! use std::path::Path;
//!
//! let written = process_file(
//!     Path::new("photo.png"),
//!     Path::new("out"),
//!     RenderConfig::default(),
//! )
//! .unwrap();
//! println!("ASCII art written to {}", written.display());
//! ```

pub mod config;
pub mod error;
pub mod mapper;
pub mod processor;
pub mod ramp;
pub mod sample;
pub mod scanner;

// Re-export main types for convenience
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use mapper::LumaMapper;
pub use processor::process_file;
pub use sample::PixelSample;
pub use scanner::render;
