//! Error type shared by every stage of the generation pipeline.
//!
//! Messages are user-facing: the binary prints them verbatim.

use std::io;
use std::path::PathBuf;

use crate::resolve::manifest::ManifestError;

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can stop a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No asset directory was given.
    #[error("Source file not specified.")]
    SourceNotSpecified,

    /// The output path does not end in `.go`.
    #[error("Output must be to a .go file.")]
    OutputNotGo,

    /// The asset directory could not be stat'ed.
    #[error("Asset dir: {0}")]
    AssetDir(#[source] io::Error),

    /// The asset path exists but is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// An explicitly supplied package name is not a Go identifier.
    #[error("Invalid package name: {0:?}")]
    InvalidPackage(String),

    /// No `go.mod` between the output directory and the filesystem root.
    #[error("No go.mod file found.")]
    ManifestNotFound,

    /// A `go.mod` was found but could not be understood.
    #[error("{}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },

    /// Reading or stat'ing a file or directory failed.
    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file or directory name cannot be embedded as a Go string.
    #[error("Not a UTF-8 file name: {}", .0.display())]
    NonUtf8Name(PathBuf),

    /// Directory traversal failed.
    #[error("Error walking directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Compressing an asset failed.
    #[error("Error compressing asset {name}: {source}")]
    Encode {
        name: String,
        #[source]
        source: io::Error,
    },

    /// Writing a generated file failed.
    #[error("Error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_cli_output() {
        assert_eq!(
            Error::SourceNotSpecified.to_string(),
            "Source file not specified."
        );
        assert_eq!(Error::OutputNotGo.to_string(), "Output must be to a .go file.");
        assert_eq!(Error::ManifestNotFound.to_string(), "No go.mod file found.");
        assert_eq!(
            Error::NotADirectory(PathBuf::from("x/main.go")).to_string(),
            "Not a directory: x/main.go"
        );
        assert_eq!(
            Error::NonUtf8Name(PathBuf::from("static/a.txt")).to_string(),
            "Not a UTF-8 file name: static/a.txt"
        );
    }

    #[test]
    fn asset_dir_wraps_io_error() {
        let err = Error::AssetDir(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "Asset dir: gone");
    }
}
