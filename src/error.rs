//! Error type shared by the catalog, config loader and batch runner.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    #[error("could not create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not list {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("png encoding failed for {filename}: {source}")]
    Encode {
        filename: String,
        #[source]
        source: image::ImageError,
    },

    #[error("{filename} rendered at {actual:?}, expected {expected:?}")]
    DimensionMismatch {
        filename: String,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("duplicate output filename in catalog: {0}")]
    DuplicateFilename(String),

    #[error("config error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl GenerateError {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_names_the_offending_file() {
        let err = GenerateError::DimensionMismatch {
            filename: "sofa_v1.png".to_string(),
            expected: (64, 64),
            actual: (32, 32),
        };
        assert_eq!(err.to_string(), "sofa_v1.png rendered at (32, 32), expected (64, 64)");

        let err = GenerateError::DuplicateFilename("tv.png".to_string());
        assert!(err.to_string().contains("tv.png"));
    }

    #[test]
    fn io_variants_keep_their_source() {
        let err = GenerateError::Write {
            path: PathBuf::from("out/rug.png"),
            source: io::Error::other("disk full"),
        };
        assert!(err.to_string().contains("out/rug.png"));
        assert!(err.source().is_some_and(|s| s.to_string() == "disk full"));
    }
}
