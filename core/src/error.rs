use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("File {name} is not convertible by mime type {mime}")]
    UnsupportedMime { name: String, mime: String },

    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode {name}: {reason}")]
    Decode { name: String, reason: String },

    #[error("failed to encode {name}: {reason}")]
    Encode { name: String, reason: String },

    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
