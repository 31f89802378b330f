use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::mapper::LumaMapper;
use crate::scanner::render;
use log::{debug, info};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Derive the output file name from the input image name.
///
/// Everything from the last `.` onward is replaced by `.txt`, so
/// `photo.png` becomes `photo.txt` and `archive.tar.gz` becomes
/// `archive.tar.txt`. A name without a separator cannot be derived and is
/// rejected before anything is created on disk.
fn output_file_name(input: &Path) -> Result<String> {
    let name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::MalformedName {
            name: input.display().to_string(),
        })?;

    match name.rfind('.') {
        Some(dot) => Ok(format!("{}.txt", &name[..dot])),
        None => Err(Error::MalformedName {
            name: name.to_string(),
        }),
    }
}

/// Create the output directory and return a fresh path for the document.
///
/// Intermediate directories are created as needed. A pre-existing file at
/// the derived path is removed, so every run produces a new document
/// instead of appending to an old one.
fn prepare_output_path(output_dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| Error::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(file_name);
    if path.exists() {
        fs::remove_file(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
    }
    Ok(path)
}

/// Convert one image file into an ASCII text document.
///
/// The image is decoded before anything is created on disk, so a missing
/// or undecodable input leaves the output directory untouched. A write
/// failure mid-scan removes the partially written document before the
/// error is returned. The file handle is scoped to this call and released
/// on every exit path.
///
/// # Arguments
/// * `input` - Path to the raster image to convert
/// * `output_dir` - Directory the `.txt` document is written to
/// * `config` - Ramp and luma weights for the conversion
///
/// # Returns
/// The path of the written document.
pub fn process_file(input: &Path, output_dir: &Path, config: RenderConfig) -> Result<PathBuf> {
    if !input.is_file() {
        return Err(Error::MissingInput {
            path: input.to_path_buf(),
        });
    }

    // Name derivation is pure and fails fast, before decoding starts and
    // before anything is created on disk.
    let file_name = output_file_name(input)?;

    let image = image::open(input)
        .map_err(|source| Error::Decode {
            path: input.to_path_buf(),
            source,
        })?
        .to_rgba8();
    debug!(
        "decoded {} ({}x{})",
        input.display(),
        image.width(),
        image.height()
    );

    let mapper = LumaMapper::new(config)?;
    let output_path = prepare_output_path(output_dir, &file_name)?;

    let file = File::create(&output_path).map_err(|source| Error::Io {
        path: output_path.clone(),
        source,
    })?;
    let mut sink = BufWriter::new(file);

    match render(&image, &mapper, &mut sink) {
        Ok(()) => {
            info!("wrote {}", output_path.display());
            Ok(output_path)
        }
        Err(err) => {
            // Close the handle before removing the partial document.
            drop(sink);
            let _ = fs::remove_file(&output_path);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn save_test_image(dir: &Path, name: &str) -> PathBuf {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        image.put_pixel(1, 0, Rgba([200, 10, 10, 0]));
        let path = dir.join(name);
        image.save(&path).unwrap();
        path
    }

    #[test]
    fn test_output_file_name_replaces_extension() {
        assert_eq!(output_file_name(Path::new("photo.png")).unwrap(), "photo.txt");
    }

    #[test]
    fn test_output_file_name_uses_last_dot_only() {
        assert_eq!(
            output_file_name(Path::new("archive.tar.gz")).unwrap(),
            "archive.tar.txt"
        );
    }

    #[test]
    fn test_output_file_name_without_dot_is_rejected() {
        assert!(matches!(
            output_file_name(Path::new("snapshot")),
            Err(Error::MalformedName { .. })
        ));
    }

    #[test]
    fn test_prepare_output_path_creates_nested_dirs() {
        let tmp = TempDir::new().unwrap();
        let out_dir = tmp.path().join("a").join("b");

        let path = prepare_output_path(&out_dir, "photo.txt").unwrap();
        assert!(out_dir.is_dir());
        assert_eq!(path, out_dir.join("photo.txt"));
    }

    #[test]
    fn test_prepare_output_path_removes_stale_file() {
        let tmp = TempDir::new().unwrap();
        let stale = tmp.path().join("photo.txt");
        fs::write(&stale, "old contents").unwrap();

        let path = prepare_output_path(tmp.path(), "photo.txt").unwrap();
        assert_eq!(path, stale);
        assert!(!path.exists());
    }

    #[test]
    fn test_process_file_end_to_end() {
        let tmp = TempDir::new().unwrap();
        let input = save_test_image(tmp.path(), "pixels.png");
        let out_dir = tmp.path().join("out");

        let written = process_file(&input, &out_dir, RenderConfig::default()).unwrap();
        assert_eq!(written, out_dir.join("pixels.txt"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "$ \n");
    }

    #[test]
    fn test_process_file_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let input = save_test_image(tmp.path(), "pixels.png");
        let out_dir = tmp.path().join("out");

        let first = process_file(&input, &out_dir, RenderConfig::default()).unwrap();
        let first_bytes = fs::read(&first).unwrap();
        let second = process_file(&input, &out_dir, RenderConfig::default()).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read(&second).unwrap(), first_bytes);
    }

    #[test]
    fn test_missing_input_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let out_dir = tmp.path().join("out");

        let result = process_file(
            &tmp.path().join("absent.png"),
            &out_dir,
            RenderConfig::default(),
        );
        assert!(matches!(result, Err(Error::MissingInput { .. })));
        assert!(!out_dir.exists());
    }

    #[test]
    fn test_undecodable_input_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("broken.png");
        fs::write(&input, "this is not an image").unwrap();
        let out_dir = tmp.path().join("out");

        let result = process_file(&input, &out_dir, RenderConfig::default());
        assert!(matches!(result, Err(Error::Decode { .. })));
        assert!(!out_dir.exists());
    }

    #[test]
    fn test_extensionless_input_fails_fast() {
        let tmp = TempDir::new().unwrap();
        // Name derivation rejects the input before any decoding happens,
        // so the file contents never matter here.
        let input = tmp.path().join("snapshot");
        fs::write(&input, "raster bytes").unwrap();
        let out_dir = tmp.path().join("out");

        let result = process_file(&input, &out_dir, RenderConfig::default());
        assert!(matches!(result, Err(Error::MalformedName { .. })));
        assert!(!out_dir.exists());
    }
}
