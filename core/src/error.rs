use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("encoding failed: {0}")]
    Encode(String),
}

/// Coarse failure classes callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Extension not handled, or parameters out of range for the format.
    Unsupported,
    /// Source file does not exist.
    Missing,
    /// Reading, decoding, encoding or writing failed.
    Codec,
}

impl EditError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedFormat(_) | Self::InvalidParameter(_) => ErrorKind::Unsupported,
            Self::SourceNotFound(_) => ErrorKind::Missing,
            Self::ReadFile { .. } | Self::WriteFile { .. } | Self::Decode(_) | Self::Encode(_) => {
                ErrorKind::Codec
            }
        }
    }
}

/// Collapses an edit result to the plain success flag older callers expect.
pub trait Succeeded {
    fn succeeded(&self) -> bool;
}

impl<T> Succeeded for Result<T, EditError> {
    fn succeeded(&self) -> bool {
        match self {
            Ok(_) => true,
            Err(e) => {
                log::debug!("edit failed ({:?}): {}", e.kind(), e);
                false
            }
        }
    }
}
