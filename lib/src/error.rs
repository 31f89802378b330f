//! Error types for the conversion pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting an image to text.
///
/// Every failure is terminal for the run; the library never retries. The
/// binary decides how to report the error and which exit code to use.
#[derive(Error, Debug)]
pub enum Error {
    /// Input path does not reference an existing file.
    #[error("input file '{}' does not exist", .path.display())]
    MissingInput {
        /// Path that was supplied as the input image
        path: PathBuf,
    },

    /// The image collaborator could not interpret the file as an image.
    #[error("failed to decode image '{}': {}", .path.display(), .source)]
    Decode {
        /// Path to the unreadable image
        path: PathBuf,
        /// Underlying decoder error
        #[source]
        source: image::ImageError,
    },

    /// Input file name has no extension separator to replace.
    #[error("cannot derive output name from '{name}': no '.' in file name")]
    MalformedName {
        /// The offending file name
        name: String,
    },

    /// Filesystem error with context about the path involved.
    #[error("IO error accessing '{}': {}", .path.display(), .source)]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing the output sink failed mid-scan.
    #[error("failed to write output document: {source}")]
    Write {
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Configuration validation error.
    #[error("invalid configuration: {message}")]
    Config {
        /// Detailed error message
        message: String,
    },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Write { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = Error::MissingInput {
            path: PathBuf::from("shots/cat.png"),
        };
        assert!(err.to_string().contains("shots/cat.png"));
    }

    #[test]
    fn test_io_error_converts_to_write() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Write { .. }));
    }
}
